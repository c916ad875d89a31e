//! Error types and definitions for export resolution
//!
//! Every failure of a resolution run is fatal to that run: errors are surfaced
//! to the caller unmodified and no partial export list is ever returned.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Error level - current resolution fails but other requests can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for export resolution
#[derive(Debug, Error)]
pub enum ExportsError {
    /// A `.json` entry or re-export target is not valid JSON
    #[error("Malformed JSON in {path}: {source}")]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The path resolver found no file for a specifier
    #[error("Cannot find module '{specifier}' from {base_dir}")]
    ModuleNotFound {
        specifier: String,
        base_dir: PathBuf,
    },

    /// A module file could not be read
    #[error("Error reading {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The lexical scanner could not parse a module
    #[error("Failed to scan {path}: {message}")]
    Scan { path: PathBuf, message: String },

    /// Loading a module in the runtime fallback failed
    #[error("Failed to load {path} at runtime: {message}")]
    RuntimeLoad { path: PathBuf, message: String },

    /// The re-export graph needed more scan tasks than allowed
    #[error("Re-export graph of {entry} exceeded {limit} scan tasks (cyclic re-exports?)")]
    CycleLimitExceeded { entry: PathBuf, limit: usize },

    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },
}

impl ExportsError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ExportsError::Config { .. } => ErrorSeverity::Critical,
            ExportsError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            ExportsError::ConfigRead { .. } => ErrorSeverity::Critical,
            ExportsError::ConfigParse { .. } => ErrorSeverity::Critical,
            ExportsError::StdoutWrite { .. } => ErrorSeverity::Critical,
            ExportsError::OutputWrite { .. } => ErrorSeverity::Critical,

            // A failed resolution only fails its own request
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ExportsError::ModuleNotFound { specifier, base_dir } => {
                format!(
                    "Cannot resolve '{}' from '{}'. Check that the package is installed and its entry fields point at an existing file.",
                    specifier,
                    base_dir.display()
                )
            }
            ExportsError::MalformedJson { path, source } => {
                format!("Invalid JSON in '{}': {}.", path.display(), source)
            }
            ExportsError::Scan { path, message } => {
                format!("Could not parse '{}' as CommonJS: {}", path.display(), message)
            }
            ExportsError::CycleLimitExceeded { entry, limit } => {
                format!(
                    "Re-exports reachable from '{}' did not settle within {} files. The package most likely re-exports itself; raise --max-hops if the graph is just large.",
                    entry.display(),
                    limit
                )
            }
            ExportsError::RuntimeLoad { path, message } => {
                format!("Loading '{}' with node failed: {}", path.display(), message)
            }
            ExportsError::ConfigNotFound { path } => {
                format!(
                    "Configuration file not found at '{}'. Create one with --init or drop the --config option.",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        ExportsError::Io { source }
    }

    /// Create a file read error
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportsError::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed JSON error with file context
    pub fn malformed_json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        ExportsError::MalformedJson {
            path: path.into(),
            source,
        }
    }

    /// Create a module-not-found error
    pub fn module_not_found(specifier: impl Into<String>, base_dir: impl Into<PathBuf>) -> Self {
        ExportsError::ModuleNotFound {
            specifier: specifier.into(),
            base_dir: base_dir.into(),
        }
    }

    /// Create a scan error
    pub fn scan_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ExportsError::Scan {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a runtime load error
    pub fn runtime_load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ExportsError::RuntimeLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        ExportsError::Config {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ExportsError {
    fn from(err: std::io::Error) -> Self {
        ExportsError::io_error(err)
    }
}

impl From<serde_json::Error> for ExportsError {
    fn from(err: serde_json::Error) -> Self {
        ExportsError::JsonSerialize { source: err }
    }
}

/// Result type alias for export resolution
pub type Result<T> = std::result::Result<T, ExportsError>;
