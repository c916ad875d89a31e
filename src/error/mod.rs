//! Error handling for export resolution
//!
//! This module provides the crate error type, its result alias and the
//! context helpers used to attach file information to lower-level failures.

pub mod context;
pub mod types;

pub use context::{IoResultExt, OptionExt, ResultExt};
pub use types::{ErrorSeverity, ExportsError, Result};
