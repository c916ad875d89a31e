//! Per-file scan data exchanged between the traversal engine and its collaborators

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Suffix that marks a re-export target as call mode
pub const CALL_MODE_MARKER: &str = "()";

/// One pending unit of traversal work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTask {
    /// Absolute path of the module to scan
    pub path: PathBuf,

    /// The module's value is a factory whose returned object holds the exports
    pub call_mode: bool,
}

impl ScanTask {
    /// Task for an entry module, never in call mode
    pub fn entry(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            call_mode: false,
        }
    }
}

/// What the lexical scanner found in one module
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Names assigned onto `exports`/`module.exports`, in source order
    pub exports: Vec<String>,

    /// Re-export targets, possibly carrying the `()` call-mode marker
    pub reexports: Vec<String>,
}

/// A re-export target split into its specifier and call-mode flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reexport<'a> {
    pub specifier: &'a str,
    pub call_mode: bool,
}

impl<'a> Reexport<'a> {
    /// Strip a trailing `()` marker off a raw target
    pub fn parse(target: &'a str) -> Self {
        match target.strip_suffix(CALL_MODE_MARKER) {
            Some(specifier) => Self {
                specifier,
                call_mode: true,
            },
            None => Self {
                specifier: target,
                call_mode: false,
            },
        }
    }
}

/// Shape of a value produced by the runtime loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Object,
    Array,
    Function,
    Null,
    Primitive,
}

/// A loaded module value, reduced to what export discovery needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeValue {
    pub kind: ValueKind,

    /// Own enumerable string keys of the value
    #[serde(default)]
    pub keys: Vec<String>,
}

impl RuntimeValue {
    /// Create a plain object value
    pub fn object<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: ValueKind::Object,
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a callable value with its own properties
    pub fn function<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: ValueKind::Function,
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the value's keys can stand in for named exports
    pub fn exposes_keys(&self) -> bool {
        matches!(self.kind, ValueKind::Object | ValueKind::Function)
    }
}
