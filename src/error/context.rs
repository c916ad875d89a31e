//! Error context utilities
//!
//! Helpers for attaching file and message context to lower-level errors so
//! that every failure reaching the caller names what it was working on.

use crate::error::{ExportsError, Result};
use std::path::Path;

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| ExportsError::Config {
            message: format!("{}: {}", context(), err),
        })
    }
}

/// Extension trait for I/O results that are tied to a module file
pub trait IoResultExt<T> {
    /// Turn an I/O failure into a `FileRead` error for `path`
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|err| ExportsError::file_read(path.as_ref(), err))
    }
}

/// Extension trait for Option to convert to Result with a custom error
pub trait OptionExt<T> {
    /// Convert Option to Result with a custom error
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> ExportsError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> ExportsError,
    {
        self.ok_or_else(err_fn)
    }
}
