//! Runtime module loading through a Node.js child process
//!
//! Only used by the runtime fallback. The module is required inside a
//! separate `node` process and reduced to its kind and own keys, so nothing
//! the module does can touch this process.

use crate::error::{ExportsError, Result};
use crate::models::request::EvaluationMode;
use crate::models::scan::RuntimeValue;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Loads a module in a real JavaScript environment
pub trait ModuleLoader: Send + Sync {
    /// Load the module at `path` and describe its value
    fn load(&self, path: &Path, mode: EvaluationMode) -> Result<RuntimeValue>;
}

/// Prefix of the result line, so output printed by the module itself is skipped
const RESULT_MARKER: &str = "@@cjs-exports-result@@";

/// Requires the module and prints `<marker>{ kind, keys }` as the last line
const LOADER_SCRIPT: &str = r#"
const [entry, marker] = process.argv.slice(1);
const value = require(entry);
let kind = typeof value;
if (value === null) kind = 'null';
else if (Array.isArray(value)) kind = 'array';
else if (kind !== 'object' && kind !== 'function') kind = 'primitive';
const keys = kind === 'object' || kind === 'function' ? Object.keys(value) : [];
process.stdout.write('\n' + marker + JSON.stringify({ kind, keys }) + '\n');
"#;

/// Loads modules by spawning `node`
#[derive(Debug, Clone)]
pub struct NodeLoader {
    node_binary: PathBuf,
}

impl NodeLoader {
    /// Create a loader running the given node binary
    pub fn new(node_binary: impl Into<PathBuf>) -> Self {
        Self {
            node_binary: node_binary.into(),
        }
    }

    /// Decode the result line out of the loader script's stdout
    pub fn parse_output(path: &Path, stdout: &[u8]) -> Result<RuntimeValue> {
        let stdout = String::from_utf8_lossy(stdout);
        let payload = stdout
            .lines()
            .rev()
            .find_map(|line| line.strip_prefix(RESULT_MARKER))
            .ok_or_else(|| ExportsError::runtime_load(path, "loader printed no result"))?;

        serde_json::from_str(payload).map_err(|e| {
            ExportsError::runtime_load(path, format!("unexpected loader output: {}", e))
        })
    }
}

impl Default for NodeLoader {
    fn default() -> Self {
        Self::new("node")
    }
}

impl ModuleLoader for NodeLoader {
    fn load(&self, path: &Path, mode: EvaluationMode) -> Result<RuntimeValue> {
        debug!(path = %path.display(), node = %self.node_binary.display(), "loading module at runtime");

        let output = Command::new(&self.node_binary)
            .arg("-e")
            .arg(LOADER_SCRIPT)
            .arg(path)
            .arg(RESULT_MARKER)
            .env("NODE_ENV", mode.as_str())
            .current_dir(path.parent().unwrap_or(path))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                ExportsError::runtime_load(
                    path,
                    format!("failed to execute {}: {}", self.node_binary.display(), e),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = stderr
                .lines()
                .find(|line| line.contains("Error"))
                .unwrap_or_else(|| stderr.trim());
            return Err(ExportsError::runtime_load(
                path,
                format!("{} ({})", message, output.status),
            ));
        }

        Self::parse_output(path, &output.stdout)
    }
}
