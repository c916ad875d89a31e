//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ExportsError, Result};
use crate::models::config::PartialSettings;

use super::file::DEFAULT_CONFIG_FILE;

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExportsError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| ExportsError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings =
        toml::from_str(content).map_err(|e| ExportsError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();
    let invalid = |what: &str| {
        Err(ExportsError::config_error(format!(
            "{} in config file: {}",
            what,
            path.display()
        )))
    };

    if settings
        .build_dir
        .as_ref()
        .is_some_and(|dir| dir.as_os_str().is_empty())
    {
        return invalid("Invalid empty build_dir");
    }

    if let Some(packages) = &settings.fallback_packages {
        if packages.iter().any(|package| package.trim().is_empty()) {
            return invalid("Empty entry in fallback_packages");
        }
    }

    for (name, values) in [
        ("main_fields", &settings.main_fields),
        ("extensions", &settings.extensions),
    ] {
        if values.as_ref().is_some_and(|values| values.is_empty()) {
            return invalid(&format!("Empty {} list", name));
        }
    }

    if settings.max_hops == Some(0) {
        return invalid("Invalid max_hops 0, must be at least 1");
    }

    if settings.threads == Some(0) {
        return invalid("Invalid threads 0, must be at least 1");
    }

    if settings
        .output_file
        .as_ref()
        .is_some_and(|file| file.as_os_str().is_empty())
    {
        return invalid("Invalid empty output_file");
    }

    Ok(())
}

/// Candidate default config locations, highest precedence first
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];
    if let Some(home_dir) = dirs::home_dir() {
        paths.push(home_dir.join(DEFAULT_CONFIG_FILE));
    }
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("cjs-exports").join("config.toml"));
    }
    paths
}

/// Find and load configuration from the first default location that exists
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    for path in default_config_paths() {
        if path.exists() {
            return Ok(Some(parse_config_file(path)?));
        }
    }
    Ok(None)
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(ExportsError::io_error)?;
        }
    }

    fs::write(path, include_str!("default_config.toml")).map_err(|e| ExportsError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
