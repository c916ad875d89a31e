//! Resolution output types

use crate::models::request::ResolutionRequest;
use serde::{Deserialize, Serialize};

/// Final export list of one resolution run
///
/// Names are unique and legal as ESM bindings. They are kept in first-seen
/// order so output is stable, but consumers must not rely on the order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub exports: Vec<String>,
}

impl ResolutionResult {
    /// Whether `name` is one of the exports
    pub fn contains(&self, name: &str) -> bool {
        self.exports.iter().any(|export| export == name)
    }

    /// Number of exports
    pub fn len(&self) -> usize {
        self.exports.len()
    }

    /// Whether no export was found
    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }

    /// Exports sorted by name, for order-insensitive comparison
    pub fn sorted(&self) -> Vec<String> {
        let mut exports = self.exports.clone();
        exports.sort();
        exports
    }
}

/// Outcome of one request in a batch
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub request: ResolutionRequest,

    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

/// Result or rendered error of one batch request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchOutcome {
    Resolved(ResolutionResult),
    Failed(String),
}

impl BatchEntry {
    /// Whether the request failed
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, BatchOutcome::Failed(_))
    }
}
