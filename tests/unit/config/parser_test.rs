use std::path::PathBuf;
use tempfile::tempdir;
use std::fs;
use cjs_exports::{
    config::parser::{create_default_config, parse_config_content, parse_config_file, validate_partial_settings},
    error::{ExportsError, Result},
    models::config::{OutputFormat, PartialSettings},
    EvaluationMode,
};

#[test]
fn test_parse_config_content() -> Result<()> {
    let config_content = r#"
        build_dir = "/srv/app/build"
        mode = "development"
        fallback_packages = ["typescript", "he", "acorn"]
        main_fields = ["module", "main"]
        max_hops = 500
        output_format = "json"
    "#;

    let settings = parse_config_content(config_content, "virtual_path.toml")?;

    assert_eq!(settings.build_dir, Some(PathBuf::from("/srv/app/build")));
    assert_eq!(settings.mode, Some(EvaluationMode::Development));
    assert_eq!(
        settings.fallback_packages,
        Some(vec!["typescript".to_string(), "he".to_string(), "acorn".to_string()])
    );
    assert_eq!(settings.main_fields, Some(vec!["module".to_string(), "main".to_string()]));
    assert_eq!(settings.max_hops, Some(500));
    assert_eq!(settings.output_format, Some(OutputFormat::Json));
    assert_eq!(settings.threads, None);

    Ok(())
}

#[test]
fn test_parse_config_file() -> Result<()> {
    let temp_dir = tempdir()?;
    let config_path = temp_dir.path().join("config.toml");

    fs::write(
        &config_path,
        r#"
        fallback_enabled = false
        threads = 2
        "#,
    )?;

    let settings = parse_config_file(&config_path)?;

    assert_eq!(settings.fallback_enabled, Some(false));
    assert_eq!(settings.threads, Some(2));

    Ok(())
}

#[test]
fn test_missing_config_file() {
    let result = parse_config_file("/definitely/not/here/config.toml");
    assert!(matches!(result, Err(ExportsError::ConfigNotFound { .. })));
}

#[test]
fn test_invalid_toml() {
    let result = parse_config_content("max_hops = [", "broken.toml");
    assert!(matches!(result, Err(ExportsError::ConfigParse { .. })));
}

#[test]
fn test_validate_partial_settings() -> Result<()> {
    let valid = PartialSettings {
        max_hops: Some(10),
        fallback_packages: Some(vec!["he".to_string()]),
        ..Default::default()
    };
    validate_partial_settings(&valid, "test.toml")?;

    let zero_hops = PartialSettings {
        max_hops: Some(0),
        ..Default::default()
    };
    assert!(validate_partial_settings(&zero_hops, "test.toml").is_err());

    let blank_package = PartialSettings {
        fallback_packages: Some(vec!["he".to_string(), " ".to_string()]),
        ..Default::default()
    };
    assert!(validate_partial_settings(&blank_package, "test.toml").is_err());

    let no_extensions = PartialSettings {
        extensions: Some(vec![]),
        ..Default::default()
    };
    assert!(validate_partial_settings(&no_extensions, "test.toml").is_err());

    Ok(())
}

#[test]
fn test_default_config_round_trips() -> Result<()> {
    let temp_dir = tempdir()?;
    let config_path = temp_dir.path().join("nested").join(".cjs-exports.toml");

    create_default_config(&config_path)?;
    assert!(config_path.exists());

    // Everything is commented out, so nothing overrides the defaults
    let settings = parse_config_file(&config_path)?;
    assert!(settings.build_dir.is_none());
    assert!(settings.fallback_packages.is_none());

    Ok(())
}
