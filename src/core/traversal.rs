//! Worklist traversal over the re-export graph of one entry module

use crate::error::{ExportsError, Result};
use crate::models::request::EvaluationMode;
use crate::models::scan::{Reexport, ScanTask};
use crate::parsers::ast_parser::ExportScanner;
use crate::parsers::json_keys::{is_json_path, JsonKeyExtractor};
use crate::utils::fs::FileSystem;
use crate::utils::path_resolver::ModuleResolver;
use std::path::Path;
use tracing::debug;

/// Extensions scanned as CommonJS
const SCANNED_EXTENSIONS: &[&str] = &["js", "cjs"];

/// Drives the scanner and the resolver over one entry's re-export graph
///
/// Every occurrence of a re-export is scanned, so a module reached twice is
/// scanned twice. A cyclic graph never drains the worklist; processing is
/// capped at `max_hops` tasks and fails with `CycleLimitExceeded` beyond it.
pub struct TraversalEngine<'c> {
    fs: &'c dyn FileSystem,
    resolver: &'c dyn ModuleResolver,
    scanner: &'c dyn ExportScanner,
    mode: EvaluationMode,
    max_hops: usize,
}

impl<'c> TraversalEngine<'c> {
    /// Create an engine over the given collaborators
    pub fn new(
        fs: &'c dyn FileSystem,
        resolver: &'c dyn ModuleResolver,
        scanner: &'c dyn ExportScanner,
        mode: EvaluationMode,
        max_hops: usize,
    ) -> Self {
        Self {
            fs,
            resolver,
            scanner,
            mode,
            max_hops,
        }
    }

    /// Candidate export names reachable from `entry`, duplicates included
    pub fn collect(&self, entry: &Path) -> Result<Vec<String>> {
        if is_json_path(entry) {
            return JsonKeyExtractor::extract(self.fs, entry);
        }

        if !is_scanned_module(entry) {
            debug!(entry = %entry.display(), "entry is not a CommonJS module, nothing to scan");
            return Ok(Vec::new());
        }

        let mut accumulator = Vec::new();
        let mut worklist = vec![ScanTask::entry(entry)];
        let mut hops = 0usize;

        while let Some(task) = worklist.pop() {
            hops += 1;
            if hops > self.max_hops {
                return Err(ExportsError::CycleLimitExceeded {
                    entry: entry.to_path_buf(),
                    limit: self.max_hops,
                });
            }

            let source = self.fs.read_to_string(&task.path)?;
            let scan = self
                .scanner
                .scan(&task.path, &source, self.mode, task.call_mode)?;

            debug!(
                path = %task.path.display(),
                call_mode = task.call_mode,
                exports = scan.exports.len(),
                reexports = scan.reexports.len(),
                "scanned module"
            );

            accumulator.extend(scan.exports);

            // Re-exports resolve from the directory of the module declaring them
            let base_dir = task.path.parent().unwrap_or(&task.path);
            for target in &scan.reexports {
                let reexport = Reexport::parse(target);
                let path = self.resolver.resolve(base_dir, reexport.specifier)?;

                debug!(
                    from = %task.path.display(),
                    specifier = reexport.specifier,
                    to = %path.display(),
                    "following re-export"
                );

                if is_json_path(&path) {
                    accumulator.extend(JsonKeyExtractor::extract(self.fs, &path)?);
                } else {
                    worklist.push(ScanTask {
                        path,
                        call_mode: reexport.call_mode,
                    });
                }
            }
        }

        Ok(accumulator)
    }
}

/// Whether `path` is a `.js`/`.cjs` module the engine scans
pub fn is_scanned_module(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SCANNED_EXTENSIONS.contains(&ext))
}
