//! Final filtering of candidate export names

use crate::models::result::ResolutionResult;
use crate::parsers::identifier::is_valid_export_name;
use std::collections::HashSet;

/// Deduplicate candidates and drop names that cannot be ESM bindings
///
/// The first occurrence of each name decides its position.
pub fn assemble<I>(candidates: I) -> ResolutionResult
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let exports = candidates
        .into_iter()
        .filter(|name| is_valid_export_name(name))
        .filter(|name| seen.insert(name.clone()))
        .collect();

    ResolutionResult { exports }
}
