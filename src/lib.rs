//! cjs-exports - named export discovery for CommonJS modules
//!
//! Given a build directory and an import specifier, this library finds the
//! names a CommonJS package exposes when it is imported as an ES module. The
//! entry file and every module it re-exports are scanned statically; a small
//! allow-list of packages is loaded in node when scanning finds nothing.
//!
//! ```no_run
//! use cjs_exports::{resolve_exports, ResolutionRequest};
//!
//! let result = resolve_exports(&ResolutionRequest::new("./build", "react"))?;
//! println!("export {{ {} }}", result.exports.join(", "));
//! # Ok::<(), cjs_exports::ExportsError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{assemble, resolve_batch, resolve_exports, ExportResolver, FallbackPolicy};
pub use error::{ErrorSeverity, ExportsError, IoResultExt, OptionExt, Result, ResultExt};
pub use models::{
    config::Settings,
    request::{EvaluationMode, ResolutionRequest},
    result::{BatchEntry, BatchOutcome, ResolutionResult},
    scan::{RuntimeValue, ScanResult, ValueKind},
};
pub use parsers::{is_valid_export_name, ExportScanner, OxcScanner};
pub use utils::{DiskFileSystem, FileSystem, ModuleLoader, ModuleResolver, NodeLoader, NodeResolver};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
