//! Configuration-related data structures

use crate::models::request::EvaluationMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Packages whose exports only show up when the module is actually loaded
pub const DEFAULT_FALLBACK_PACKAGES: &[&str] = &["typescript", "he"];

/// Package descriptor fields consulted for an entry point, highest precedence first
pub const DEFAULT_MAIN_FIELDS: &[&str] = &["browser", "module", "main"];

/// Conditions matched in a package `exports` map, highest precedence first
pub const DEFAULT_CONDITION_NAMES: &[&str] = &["browser", "require", "default"];

/// Extensions tried when a specifier names a file without one
pub const DEFAULT_EXTENSIONS: &[&str] = &["js", "cjs", "json"];

/// Upper bound on scan tasks processed in one run
pub const DEFAULT_MAX_HOPS: usize = 10_000;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Main configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory import specifiers are resolved from
    pub build_dir: PathBuf,

    /// Evaluation mode passed to the scanner and the runtime loader
    pub mode: EvaluationMode,

    /// Whether the runtime fallback may load modules at all
    pub fallback_enabled: bool,

    /// Packages allowed to be loaded when static scanning finds nothing
    pub fallback_packages: Vec<String>,

    /// Node.js binary used by the runtime fallback
    pub node_binary: PathBuf,

    /// Package descriptor entry fields in precedence order
    pub main_fields: Vec<String>,

    /// Conditions matched in `exports` maps in precedence order
    pub condition_names: Vec<String>,

    /// Extensions tried for extensionless specifiers
    pub extensions: Vec<String>,

    /// Maximum scan tasks in one run before it is treated as cyclic
    pub max_hops: usize,

    /// Worker threads for batch resolution
    pub threads: usize,

    /// Output format (text, json)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to use colors in text output
    pub use_colors: bool,

    /// Whether to print only the export names
    pub quiet: bool,

    /// Whether to show resolution details
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            build_dir: PathBuf::from("."),
            mode: EvaluationMode::default(),
            fallback_enabled: true,
            fallback_packages: strings(DEFAULT_FALLBACK_PACKAGES),
            node_binary: PathBuf::from("node"),
            main_fields: strings(DEFAULT_MAIN_FIELDS),
            condition_names: strings(DEFAULT_CONDITION_NAMES),
            extensions: strings(DEFAULT_EXTENSIONS),
            max_hops: DEFAULT_MAX_HOPS,
            threads: num_cpus::get(),
            output_format: OutputFormat::Text,
            output_file: None,
            use_colors: true,
            quiet: false,
            verbose: false,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialSettings {
    pub build_dir: Option<PathBuf>,
    pub mode: Option<EvaluationMode>,
    pub fallback_enabled: Option<bool>,
    pub fallback_packages: Option<Vec<String>>,
    pub node_binary: Option<PathBuf>,
    pub main_fields: Option<Vec<String>>,
    pub condition_names: Option<Vec<String>>,
    pub extensions: Option<Vec<String>>,
    pub max_hops: Option<usize>,
    pub threads: Option<usize>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub use_colors: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.build_dir.is_some() {
            self.build_dir = other.build_dir;
        }
        if other.mode.is_some() {
            self.mode = other.mode;
        }
        if other.fallback_enabled.is_some() {
            self.fallback_enabled = other.fallback_enabled;
        }
        if other.fallback_packages.is_some() {
            self.fallback_packages = other.fallback_packages;
        }
        if other.node_binary.is_some() {
            self.node_binary = other.node_binary;
        }
        if other.main_fields.is_some() {
            self.main_fields = other.main_fields;
        }
        if other.condition_names.is_some() {
            self.condition_names = other.condition_names;
        }
        if other.extensions.is_some() {
            self.extensions = other.extensions;
        }
        if other.max_hops.is_some() {
            self.max_hops = other.max_hops;
        }
        if other.threads.is_some() {
            self.threads = other.threads;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(build_dir) = &self.build_dir {
            settings.build_dir = build_dir.clone();
        }
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if let Some(fallback_enabled) = self.fallback_enabled {
            settings.fallback_enabled = fallback_enabled;
        }
        if let Some(fallback_packages) = &self.fallback_packages {
            settings.fallback_packages = fallback_packages.clone();
        }
        if let Some(node_binary) = &self.node_binary {
            settings.node_binary = node_binary.clone();
        }
        if let Some(main_fields) = &self.main_fields {
            settings.main_fields = main_fields.clone();
        }
        if let Some(condition_names) = &self.condition_names {
            settings.condition_names = condition_names.clone();
        }
        if let Some(extensions) = &self.extensions {
            settings.extensions = extensions.clone();
        }
        if let Some(max_hops) = self.max_hops {
            settings.max_hops = max_hops;
        }
        if let Some(threads) = self.threads {
            settings.threads = threads;
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }

        settings
    }
}
