//! Command-line parsing and execution

use clap::Parser;
use std::fs;
use tempfile::tempdir;
use cjs_exports::{
    cli::{args::Mode, args::OutputFormat, Args, Command},
    error::Result,
};

#[test]
fn test_cli_parsing() {
    let args = Args::try_parse_from([
        "cjs-exports",
        "react",
        "he",
        "--build-dir",
        "/tmp/build",
        "--mode",
        "development",
        "--output",
        "json",
        "--no-fallback",
        "--max-hops",
        "50",
        "-vv",
    ])
    .unwrap();

    assert_eq!(args.specifiers, vec!["react", "he"]);
    assert_eq!(args.build_dir.as_deref(), Some(std::path::Path::new("/tmp/build")));
    assert_eq!(args.mode, Some(Mode::Development));
    assert_eq!(args.output, Some(OutputFormat::Json));
    assert!(args.no_fallback);
    assert_eq!(args.max_hops, Some(50));
    assert_eq!(args.verbose, 2);
}

#[test]
fn test_specifier_required_without_init() {
    assert!(Args::try_parse_from(["cjs-exports"]).is_err());
    assert!(Args::try_parse_from(["cjs-exports", "--init"]).is_ok());
}

#[test]
fn test_resolve_command_writes_json() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("index.js"), "exports.hello = 1; exports.world = 2;")?;
    let output = dir.path().join("out.json");

    let args = Args::try_parse_from([
        "cjs-exports",
        "./index.js",
        "--build-dir",
        dir.path().to_str().unwrap(),
        "--output",
        "json",
        "--output-file",
        output.to_str().unwrap(),
        "--no-fallback",
    ])
    .unwrap();

    let succeeded = Command::from_args(args).execute()?;
    assert!(succeeded);

    let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output)?)?;
    assert_eq!(written[0]["request"]["import_specifier"], "./index.js");
    assert_eq!(
        written[0]["resolved"]["exports"],
        serde_json::json!(["hello", "world"])
    );
    Ok(())
}

#[test]
fn test_failed_specifier_gives_exit_code_one() -> Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("out.txt");

    let args = Args::try_parse_from([
        "cjs-exports",
        "./missing.js",
        "--build-dir",
        dir.path().to_str().unwrap(),
        "--output-file",
        output.to_str().unwrap(),
        "--no-fallback",
    ])
    .unwrap();

    assert_eq!(Command::from_args(args).run(), 1);
    assert!(fs::read_to_string(&output)?.contains("./missing.js"));
    Ok(())
}

#[test]
fn test_missing_explicit_config_is_an_error() -> Result<()> {
    let dir = tempdir()?;
    let config = dir.path().join("absent.toml");
    let args = Args::try_parse_from(["cjs-exports", "react", "--config", config.to_str().unwrap()])
        .unwrap();

    assert!(Command::from_args(args).execute().is_err());
    Ok(())
}
