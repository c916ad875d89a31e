//! Lexical export scanning using OXC

use super::cjs_lexer::CjsLexer;
use crate::error::{ExportsError, Result};
use crate::models::request::EvaluationMode;
use crate::models::scan::ScanResult;
use oxc_allocator::Allocator;
use oxc_diagnostics::OxcDiagnostic;
use oxc_parser::{ParseOptions, Parser};
use oxc_span::SourceType;
use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;
use tracing::trace;

/// Finds the exports and re-exports of one CommonJS source file
pub trait ExportScanner: Send + Sync {
    /// Scan `source` (read from `path`); `call_mode` requests the keys of
    /// the value produced by calling the module's export
    fn scan(
        &self,
        path: &Path,
        source: &str,
        mode: EvaluationMode,
        call_mode: bool,
    ) -> Result<ScanResult>;
}

/// Thread-safe allocator pool for reuse across parses
pub struct AllocatorPool {
    allocators: Arc<Mutex<Vec<Allocator>>>,
}

impl AllocatorPool {
    /// Create a new allocator pool
    pub fn new(size: usize) -> Self {
        let allocators = (0..size).map(|_| Allocator::default()).collect();
        Self {
            allocators: Arc::new(Mutex::new(allocators)),
        }
    }

    /// Take an allocator from the pool
    pub fn take(&self) -> Option<Allocator> {
        self.allocators.lock().pop()
    }

    /// Return an allocator to the pool
    pub fn return_allocator(&self, mut allocator: Allocator) {
        allocator.reset();
        self.allocators.lock().push(allocator);
    }
}

/// Scanner parsing sources as CommonJS scripts
pub struct OxcScanner {
    parse_options: ParseOptions,
    allocator_pool: AllocatorPool,
}

impl OxcScanner {
    /// Create a new scanner
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions {
                parse_regular_expression: true,
                allow_return_outside_function: true,
                ..ParseOptions::default()
            },
            allocator_pool: AllocatorPool::new(num_cpus::get()),
        }
    }
}

impl Default for OxcScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportScanner for OxcScanner {
    fn scan(
        &self,
        path: &Path,
        source: &str,
        mode: EvaluationMode,
        call_mode: bool,
    ) -> Result<ScanResult> {
        let source_type = SourceType::default().with_script(true);
        let allocator = self.allocator_pool.take().unwrap_or_default();

        let result = {
            let ret = Parser::new(&allocator, source, source_type)
                .with_options(self.parse_options.clone())
                .parse();

            if ret.panicked || !ret.errors.is_empty() {
                Err(ExportsError::scan_error(path, describe_errors(&ret.errors)))
            } else {
                Ok(CjsLexer::new(mode, call_mode).analyze(&ret.program))
            }
        };

        self.allocator_pool.return_allocator(allocator);

        if let Ok(scan) = &result {
            trace!(
                path = %path.display(),
                exports = scan.exports.len(),
                reexports = scan.reexports.len(),
                call_mode,
                "scanned module"
            );
        }
        result
    }
}

fn describe_errors(errors: &[OxcDiagnostic]) -> String {
    match errors {
        [] => "parser gave up".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{} (and {} more)", first, rest.len()),
    }
}
