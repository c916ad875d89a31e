//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::{Args, Mode, OutputFormat as CliOutputFormat};
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings};
use crate::models::request::EvaluationMode;

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
}

/// Settings-relevant subset of the command-line arguments
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub build_dir: Option<PathBuf>,
    pub mode: Option<EvaluationMode>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub no_fallback: bool,
    pub node_binary: Option<PathBuf>,
    pub max_hops: Option<usize>,
    pub threads: Option<usize>,
    pub no_colors: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Extract the settings-relevant arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            build_dir: args.build_dir.clone(),
            mode: args.mode.map(|mode| match mode {
                Mode::Production => EvaluationMode::Production,
                Mode::Development => EvaluationMode::Development,
            }),
            output_format: args.output.map(|format| match format {
                CliOutputFormat::Text => OutputFormat::Text,
                CliOutputFormat::Json => OutputFormat::Json,
            }),
            output_file: args.output_file.clone(),
            no_fallback: args.no_fallback,
            node_binary: args.node.clone(),
            max_hops: args.max_hops,
            threads: args.threads,
            no_colors: args.no_colors,
            quiet: args.quiet,
            verbose: args.verbose > 0,
            config: args.config.clone(),
        }
    }
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
        }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from_args(args))
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let args = &self.args;

        // Flags only override when set
        Ok(PartialSettings {
            build_dir: args.build_dir.clone(),
            mode: args.mode,
            fallback_enabled: args.no_fallback.then_some(false),
            node_binary: args.node_binary.clone(),
            max_hops: args.max_hops,
            threads: args.threads,
            output_format: args.output_format,
            output_file: args.output_file.clone(),
            use_colors: args.no_colors.then_some(false),
            quiet: args.quiet.then_some(true),
            verbose: args.verbose.then_some(true),
            ..PartialSettings::default()
        })
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        30
    }
}
