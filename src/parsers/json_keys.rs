//! Top-level key extraction for JSON modules

use crate::error::{ExportsError, Result};
use crate::utils::fs::FileSystem;
use serde_json::Value;
use std::path::Path;

/// Whether a resolved path is a JSON module
pub fn is_json_path(path: &Path) -> bool {
    path.to_string_lossy().ends_with(".json")
}

/// Extracts the keys a JSON module exposes when required
pub struct JsonKeyExtractor;

impl JsonKeyExtractor {
    /// Keys of a JSON document if its root is an object, empty otherwise
    pub fn parse(content: &str, path: &Path) -> Result<Vec<String>> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| ExportsError::malformed_json(path, e))?;

        Ok(match value {
            Value::Object(map) => map.into_iter().map(|(key, _)| key).collect(),
            _ => Vec::new(),
        })
    }

    /// Read `path` through `fs` and extract its keys
    pub fn extract(fs: &dyn FileSystem, path: &Path) -> Result<Vec<String>> {
        let content = fs.read_to_string(path)?;
        Self::parse(&content, path)
    }
}
