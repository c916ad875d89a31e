//! Output formatting functionality

use crate::error::Result;
use crate::models::result::{BatchEntry, BatchOutcome};
use ansi_term::Colour::{Blue, Green, Red, Yellow};
use ansi_term::Style;

/// Format one request's outcome as text
pub fn format_entry_text(entry: &BatchEntry, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();
    let request = &entry.request;

    if use_colors {
        output.push_str(&format!(
            "{} {}\n",
            Blue.bold().paint(&request.import_specifier),
            Style::new().dimmed().paint(format!("({})", request.mode))
        ));
    } else {
        output.push_str(&format!("{} ({})\n", request.import_specifier, request.mode));
    }

    if verbose {
        output.push_str(&format!("  Build directory: {}\n", request.build_dir.display()));
    }

    match &entry.outcome {
        BatchOutcome::Resolved(result) if result.is_empty() => {
            let line = "  No named exports";
            if use_colors {
                output.push_str(&format!("{}\n", Yellow.paint(line)));
            } else {
                output.push_str(&format!("{}\n", line));
            }
        }
        BatchOutcome::Resolved(result) => {
            let count = format!("  {} export{}", result.len(), if result.len() == 1 { "" } else { "s" });
            if use_colors {
                output.push_str(&format!("{}\n", Green.paint(count)));
            } else {
                output.push_str(&format!("{}\n", count));
            }
            for name in &result.exports {
                output.push_str(&format!("    {}\n", name));
            }
        }
        BatchOutcome::Failed(message) => {
            if use_colors {
                output.push_str(&format!("  {} {}\n", Red.bold().paint("Error:"), message));
            } else {
                output.push_str(&format!("  Error: {}\n", message));
            }
        }
    }

    output.push('\n');
    output
}

/// Totals line for several requests
pub fn format_summary_text(entries: &[BatchEntry], use_colors: bool) -> String {
    let failed = entries.iter().filter(|entry| entry.is_failure()).count();
    let line = format!(
        "Resolved {} of {} specifiers",
        entries.len() - failed,
        entries.len()
    );

    match (use_colors, failed) {
        (true, 0) => format!("{}\n", Green.bold().paint(line)),
        (true, _) => format!("{}\n", Yellow.bold().paint(line)),
        (false, _) => format!("{}\n", line),
    }
}

/// Every resolved export name, one per line
pub fn format_names_only(entries: &[BatchEntry]) -> String {
    entries
        .iter()
        .filter_map(|entry| match &entry.outcome {
            BatchOutcome::Resolved(result) => Some(result.exports.iter()),
            BatchOutcome::Failed(_) => None,
        })
        .flatten()
        .map(|name| format!("{}\n", name))
        .collect()
}

/// Format outcomes as a JSON array
pub fn format_entries_json(entries: &[BatchEntry], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(entries)?
    } else {
        serde_json::to_string(entries)?
    };
    Ok(json + "\n")
}
