//! Command-line argument parsing

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// cjs-exports - named export discovery for CommonJS packages
#[derive(Parser, Debug, Clone)]
#[command(name = "cjs-exports")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "List the named exports a CommonJS package exposes to ES module importers")]
#[command(long_about = "cjs-exports resolves an import specifier to its CommonJS entry file, statically \
scans it and every module it re-exports, and prints the names that can be emitted as \
`export { ... }` bindings. A small allow-list of packages whose exports cannot be seen \
statically is loaded in node instead.")]
#[command(after_help = "EXAMPLES:

    # Exports of a package installed under ./node_modules
    cjs-exports react

    # Several specifiers at once, resolved from a build directory
    cjs-exports -d ./build react react-dom/server ./src/legacy.js

    # Development mode (NODE_ENV=development branches are followed)
    cjs-exports --mode development react

    # JSON output written to a file
    cjs-exports --output json --output-file exports.json lodash

    # Create a default configuration file (.cjs-exports.toml)
    cjs-exports --init
")]
pub struct Args {
    /// Import specifiers to resolve
    #[arg(value_name = "SPECIFIER", required_unless_present = "init")]
    pub specifiers: Vec<String>,

    /// Directory specifiers are resolved from
    #[arg(short = 'd', long, value_name = "DIR", help = "Directory import specifiers are resolved from (defaults to the current directory)")]
    pub build_dir: Option<PathBuf>,

    /// Evaluation mode
    #[arg(long, value_enum, help = "Evaluation mode: selects process.env.NODE_ENV branches and the NODE_ENV of runtime loads")]
    pub mode: Option<Mode>,

    /// Output format
    #[arg(short, long, value_enum, help = "Output format: 'text' for people, 'json' for tools")]
    pub output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .cjs-exports.toml in the current directory)")]
    pub config: Option<PathBuf>,

    /// Never load modules at runtime
    #[arg(long, help = "Disable the runtime fallback for allow-listed packages")]
    pub no_fallback: bool,

    /// Node.js binary for the runtime fallback
    #[arg(long, value_name = "PATH")]
    pub node: Option<PathBuf>,

    /// Scan task limit per specifier
    #[arg(long, value_name = "N", help = "Maximum modules scanned per specifier before the re-export graph is treated as cyclic")]
    pub max_hops: Option<usize>,

    /// Worker threads for resolving several specifiers
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub no_colors: bool,

    /// Print export names only
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Create a default configuration file
    #[arg(long, help = "Create a default configuration file (.cjs-exports.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
}

/// Evaluation mode options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Production,
    Development,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
