//! Export discovery for one import specifier

use crate::core::assembler::assemble;
use crate::core::fallback::{self, FallbackPolicy};
use crate::core::traversal::{is_scanned_module, TraversalEngine};
use crate::error::Result;
use crate::models::config::Settings;
use crate::models::request::ResolutionRequest;
use crate::models::result::ResolutionResult;
use crate::parsers::ast_parser::{ExportScanner, OxcScanner};
use crate::utils::fs::{DiskFileSystem, FileSystem};
use crate::utils::node_loader::{ModuleLoader, NodeLoader};
use crate::utils::path_resolver::{ModuleResolver, NodeResolver, ResolverOptions};
use tracing::debug;

/// Resolves the named exports of CommonJS packages
///
/// Holds the collaborators and policy shared by every run; each call to
/// [`ExportResolver::resolve_exports`] owns its own worklist and accumulator,
/// so one resolver can serve concurrent runs.
pub struct ExportResolver {
    fs: Box<dyn FileSystem>,
    resolver: Box<dyn ModuleResolver>,
    scanner: Box<dyn ExportScanner>,
    loader: Box<dyn ModuleLoader>,
    fallback: FallbackPolicy,
    max_hops: usize,
}

impl ExportResolver {
    /// Create a resolver with the built-in collaborators configured from `settings`
    pub fn new(settings: &Settings) -> Self {
        Self {
            fs: Box::new(DiskFileSystem),
            resolver: Box::new(NodeResolver::new(ResolverOptions::from_settings(settings))),
            scanner: Box::new(OxcScanner::new()),
            loader: Box::new(NodeLoader::new(settings.node_binary.clone())),
            fallback: FallbackPolicy::from_settings(settings),
            max_hops: settings.max_hops,
        }
    }

    pub fn with_file_system(mut self, fs: impl FileSystem + 'static) -> Self {
        self.fs = Box::new(fs);
        self
    }

    pub fn with_module_resolver(mut self, resolver: impl ModuleResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn with_scanner(mut self, scanner: impl ExportScanner + 'static) -> Self {
        self.scanner = Box::new(scanner);
        self
    }

    pub fn with_loader(mut self, loader: impl ModuleLoader + 'static) -> Self {
        self.loader = Box::new(loader);
        self
    }

    pub fn with_fallback_policy(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Cap on scan tasks per run
    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops;
        self
    }

    /// Discover the exports of `request.import_specifier`
    ///
    /// Any failure aborts the run; there is no partial result.
    pub fn resolve_exports(&self, request: &ResolutionRequest) -> Result<ResolutionResult> {
        let entry = self
            .resolver
            .resolve(&request.build_dir, &request.import_specifier)?;

        debug!(
            specifier = %request.import_specifier,
            entry = %entry.display(),
            mode = %request.mode,
            "resolved entry"
        );

        let engine = TraversalEngine::new(
            self.fs.as_ref(),
            self.resolver.as_ref(),
            self.scanner.as_ref(),
            request.mode,
            self.max_hops,
        );
        let mut candidates = engine.collect(&entry)?;

        // JSON and non-CommonJS entries never reach the runtime loader
        if is_scanned_module(&entry)
            && self
                .fallback
                .should_run(&request.import_specifier, candidates.len())
        {
            candidates = fallback::load_exports(self.loader.as_ref(), &entry, request.mode)?;
        }

        let result = assemble(candidates);
        debug!(specifier = %request.import_specifier, exports = result.len(), "assembled exports");
        Ok(result)
    }
}

impl Default for ExportResolver {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

/// Resolve with the built-in collaborators and default settings
pub fn resolve_exports(request: &ResolutionRequest) -> Result<ResolutionResult> {
    ExportResolver::default().resolve_exports(request)
}
