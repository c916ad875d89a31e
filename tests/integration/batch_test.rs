//! Batch resolution across several specifiers

use std::fs;
use tempfile::tempdir;
use cjs_exports::{
    error::Result, resolve_batch, BatchOutcome, ExportResolver, FallbackPolicy, ResolutionRequest,
};

#[test]
fn test_batch_keeps_request_order_and_isolates_failures() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a.js"), "exports.alpha = 1;")?;
    fs::write(dir.path().join("b.js"), "module.exports = { beta: 2, gamma: 3 };")?;
    fs::write(dir.path().join("c.js"), "module.exports = require('./gone');")?;

    let resolver = ExportResolver::default().with_fallback_policy(FallbackPolicy::disabled());
    let requests: Vec<ResolutionRequest> = ["./a.js", "./c.js", "./b.js"]
        .iter()
        .map(|specifier| ResolutionRequest::new(dir.path(), *specifier))
        .collect();

    let entries = resolve_batch(&resolver, &requests, 2)?;

    assert_eq!(entries.len(), 3);
    let specifiers: Vec<&str> = entries
        .iter()
        .map(|entry| entry.request.import_specifier.as_str())
        .collect();
    assert_eq!(specifiers, vec!["./a.js", "./c.js", "./b.js"]);

    match &entries[0].outcome {
        BatchOutcome::Resolved(result) => assert_eq!(result.exports, vec!["alpha"]),
        other => panic!("Expected resolved entry, got {:?}", other),
    }
    match &entries[1].outcome {
        BatchOutcome::Failed(message) => assert!(message.contains("./gone")),
        other => panic!("Expected failed entry, got {:?}", other),
    }
    match &entries[2].outcome {
        BatchOutcome::Resolved(result) => assert_eq!(result.sorted(), vec!["beta", "gamma"]),
        other => panic!("Expected resolved entry, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_shared_resolver_gives_identical_results() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("index.js"), "exports.one = 1; exports.two = 2;")?;

    let resolver = ExportResolver::default();
    let requests = vec![ResolutionRequest::new(dir.path(), "./index.js"); 16];

    let entries = resolve_batch(&resolver, &requests, 4)?;

    assert!(entries.iter().all(|entry| !entry.is_failure()));
    for entry in &entries {
        match &entry.outcome {
            BatchOutcome::Resolved(result) => assert_eq!(result.exports, vec!["one", "two"]),
            BatchOutcome::Failed(message) => panic!("Unexpected failure: {}", message),
        }
    }
    Ok(())
}
