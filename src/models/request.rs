//! Resolution request types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment a module is evaluated for
///
/// Selects which `process.env.NODE_ENV` branches the scanner follows and the
/// `NODE_ENV` the runtime fallback loads modules with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    #[default]
    Production,
    Development,
}

impl EvaluationMode {
    /// The `NODE_ENV` value for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationMode::Production => "production",
            EvaluationMode::Development => "development",
        }
    }
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EvaluationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Ok(EvaluationMode::Production),
            "development" | "dev" => Ok(EvaluationMode::Development),
            _ => Err(format!("Invalid evaluation mode: {}", s)),
        }
    }
}

/// Input to one resolution run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionRequest {
    /// Directory the import specifier is resolved from
    pub build_dir: PathBuf,

    /// Bare or relative specifier of the module to inspect
    pub import_specifier: String,

    /// Evaluation mode, production unless stated otherwise
    #[serde(default)]
    pub mode: EvaluationMode,
}

impl ResolutionRequest {
    /// Create a production-mode request
    pub fn new(build_dir: impl AsRef<Path>, import_specifier: impl Into<String>) -> Self {
        Self {
            build_dir: build_dir.as_ref().to_path_buf(),
            import_specifier: import_specifier.into(),
            mode: EvaluationMode::default(),
        }
    }

    /// Set the evaluation mode
    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }
}
