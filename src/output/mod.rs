//! Output formatting and writing functionality

mod formatters;
mod writers;

pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::config::OutputFormat;
use crate::models::result::BatchEntry;

/// Trait for different output formatters
pub trait Formatter {
    /// Format the outcome of every request into a string
    fn format(&self, entries: &[BatchEntry]) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, entries: &[BatchEntry]) -> Result<String> {
        // Quiet output is just the names, one per line
        if self.quiet {
            return Ok(formatters::format_names_only(entries));
        }

        let mut output = String::new();
        for entry in entries {
            output.push_str(&formatters::format_entry_text(
                entry,
                self.use_colors,
                self.verbose,
            ));
        }
        if entries.len() > 1 {
            output.push_str(&formatters::format_summary_text(entries, self.use_colors));
        }
        Ok(output)
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, entries: &[BatchEntry]) -> Result<String> {
        formatters::format_entries_json(entries, self.pretty)
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(
    format: OutputFormat,
    use_colors: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}
