//! Parallel resolution of independent requests

use crate::core::resolver::ExportResolver;
use crate::error::{Result, ResultExt};
use crate::models::request::ResolutionRequest;
use crate::models::result::{BatchEntry, BatchOutcome};
use rayon::prelude::*;
use tracing::warn;

/// Resolve every request on a pool of `threads` workers
///
/// Runs share nothing but the resolver's immutable collaborators, and a
/// failing run is reported in its entry without affecting the others.
/// Entries come back in request order.
pub fn resolve_batch(
    resolver: &ExportResolver,
    requests: &[ResolutionRequest],
    threads: usize,
) -> Result<Vec<BatchEntry>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .with_context(|| format!("failed to build a pool of {} threads", threads))?;

    Ok(pool.install(|| {
        requests
            .par_iter()
            .map(|request| {
                let outcome = match resolver.resolve_exports(request) {
                    Ok(result) => BatchOutcome::Resolved(result),
                    Err(err) => {
                        warn!(specifier = %request.import_specifier, error = %err, "resolution failed");
                        BatchOutcome::Failed(err.user_message())
                    }
                };
                BatchEntry {
                    request: request.clone(),
                    outcome,
                }
            })
            .collect()
    }))
}
