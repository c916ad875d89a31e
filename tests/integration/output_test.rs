use std::fs;
use tempfile::tempdir;
use cjs_exports::{
    error::Result,
    models::config::OutputFormat,
    output::{create_formatter, FileWriter, Formatter, JsonFormatter, OutputWriter, TextFormatter},
    BatchEntry, BatchOutcome, ResolutionRequest, ResolutionResult,
};

fn create_test_entries() -> Vec<BatchEntry> {
    vec![
        BatchEntry {
            request: ResolutionRequest::new("/srv/build", "react"),
            outcome: BatchOutcome::Resolved(ResolutionResult {
                exports: vec!["Children".to_string(), "useState".to_string()],
            }),
        },
        BatchEntry {
            request: ResolutionRequest::new("/srv/build", "left-pad"),
            outcome: BatchOutcome::Failed("Cannot resolve 'left-pad' from '/srv/build'.".to_string()),
        },
    ]
}

#[test]
fn test_text_formatter() -> Result<()> {
    let entries = create_test_entries();

    let output = TextFormatter::new(false, false, false).format(&entries)?;

    assert!(output.contains("react (production)"));
    assert!(output.contains("  Children\n"));
    assert!(output.contains("  useState\n"));
    assert!(output.contains("  Error: Cannot resolve 'left-pad'"));
    assert!(output.ends_with("Resolved 1 of 2 specifiers\n"));
    Ok(())
}

#[test]
fn test_quiet_text_lists_names_only() -> Result<()> {
    let entries = create_test_entries();

    let output = TextFormatter::new(false, false, true).format(&entries)?;

    assert_eq!(output, "Children\nuseState\n");
    Ok(())
}

#[test]
fn test_json_formatter() -> Result<()> {
    let entries = create_test_entries();

    let output = JsonFormatter::new(false).format(&entries)?;
    let parsed: serde_json::Value = serde_json::from_str(&output)?;

    assert_eq!(parsed[0]["request"]["import_specifier"], "react");
    assert_eq!(parsed[0]["request"]["mode"], "production");
    assert_eq!(parsed[0]["resolved"]["exports"][1], "useState");
    assert!(parsed[1]["failed"].as_str().unwrap().contains("left-pad"));
    Ok(())
}

#[test]
fn test_formatter_written_to_file() -> Result<()> {
    let temp_dir = tempdir()?;
    let output_path = temp_dir.path().join("exports.json");

    let formatter = create_formatter(OutputFormat::Json, false, false, false);
    FileWriter::new(&output_path).write(&formatter.format(&create_test_entries())?)?;

    let written = fs::read_to_string(&output_path)?;
    assert!(written.contains("\"left-pad\""));
    assert!(written.ends_with('\n'));
    Ok(())
}
