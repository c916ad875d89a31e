//! Command implementations

use super::Args;
use crate::config::{self, CliArgs};
use crate::core::{resolve_batch, ExportResolver};
use crate::error::{ErrorSeverity, Result};
use crate::models::request::ResolutionRequest;
use crate::output::{create_formatter, create_writer};
use std::path::PathBuf;
use tracing::{debug, info};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Resolve the exports of every specifier
    Resolve(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }
        Command::Resolve(args)
    }

    /// Execute the command, returning whether every request succeeded
    pub fn execute(&self) -> Result<bool> {
        match self {
            Command::Resolve(args) => {
                let settings = config::load_config(CliArgs::from_args(args))?;
                debug!(?settings, "effective settings");

                let resolver = ExportResolver::new(&settings);
                let requests: Vec<ResolutionRequest> = args
                    .specifiers
                    .iter()
                    .map(|specifier| {
                        ResolutionRequest::new(&settings.build_dir, specifier.as_str())
                            .with_mode(settings.mode)
                    })
                    .collect();

                let entries = resolve_batch(&resolver, &requests, settings.threads)?;

                let formatter = create_formatter(
                    settings.output_format,
                    settings.use_colors && settings.output_file.is_none(),
                    settings.verbose,
                    settings.quiet,
                );
                let writer = create_writer(settings.output_file.as_ref());
                writer.write(&formatter.format(&entries)?)?;

                Ok(entries.iter().all(|entry| !entry.is_failure()))
            }
            Command::Init => {
                let config_path = PathBuf::from(config::file::DEFAULT_CONFIG_FILE);

                if config_path.exists() {
                    println!("Configuration file already exists at: {}", config_path.display());
                    println!("To overwrite it, delete the file first and run this command again.");
                    return Ok(true);
                }

                config::create_default_config(&config_path)?;
                info!(path = %config_path.display(), "created default configuration");

                println!("Created default configuration file at: {}", config_path.display());
                println!("Every setting is commented out; uncomment the ones you want to change.");
                Ok(true)
            }
        }
    }

    /// Run the command and map the outcome to an exit code
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(true) => 0,
            Ok(false) => 1,
            Err(err) => {
                eprintln!("{}: {}", err.severity(), err.user_message());

                match err.severity() {
                    ErrorSeverity::Error => 1,
                    ErrorSeverity::Critical => 2,
                }
            }
        }
    }
}
