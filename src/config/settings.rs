//! Validation of fully merged settings

use std::path::Path;

use crate::error::{ExportsError, Result};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return the first problem found
    pub fn validate(settings: &Settings) -> Result<()> {
        if !settings.build_dir.is_dir() {
            return Err(ExportsError::config_error(format!(
                "Build directory does not exist: {}",
                settings.build_dir.display()
            )));
        }

        if settings.max_hops == 0 {
            return Err(ExportsError::config_error("max_hops must be at least 1"));
        }

        if settings.threads == 0 {
            return Err(ExportsError::config_error("threads must be at least 1"));
        }

        if settings.main_fields.is_empty() {
            return Err(ExportsError::config_error("main_fields must not be empty"));
        }

        if settings.extensions.is_empty() {
            return Err(ExportsError::config_error("extensions must not be empty"));
        }

        if settings
            .fallback_packages
            .iter()
            .any(|package| package.trim().is_empty())
        {
            return Err(ExportsError::config_error(
                "fallback_packages must not contain empty names",
            ));
        }

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// The output file's directory must already exist
    fn validate_output_path(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
                Err(ExportsError::config_error(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )))
            }
            _ => Ok(()),
        }
    }
}
