//! Runtime fallback for packages whose exports only exist once loaded

use crate::error::Result;
use crate::models::config::{Settings, DEFAULT_FALLBACK_PACKAGES};
use crate::models::request::EvaluationMode;
use crate::utils::node_loader::ModuleLoader;
use std::path::Path;
use tracing::info;

/// Which import specifiers may be loaded when scanning finds nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPolicy {
    pub enabled: bool,
    pub packages: Vec<String>,
}

impl FallbackPolicy {
    /// Policy over the given package names
    pub fn new<I, S>(packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: true,
            packages: packages.into_iter().map(Into::into).collect(),
        }
    }

    /// Policy that never loads anything
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            packages: Vec::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            enabled: settings.fallback_enabled,
            packages: settings.fallback_packages.clone(),
        }
    }

    /// Whether `specifier` is an allowed package or a subpath of one
    pub fn allows(&self, specifier: &str) -> bool {
        self.enabled
            && self.packages.iter().any(|package| {
                specifier == package
                    || specifier
                        .strip_prefix(package.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            })
    }

    /// Whether the fallback runs for a request whose traversal found `found` candidates
    pub fn should_run(&self, specifier: &str, found: usize) -> bool {
        found == 0 && self.allows(specifier)
    }
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_PACKAGES.iter().copied())
    }
}

/// Load `entry` and take the own keys of its value
///
/// Only objects and functions contribute keys; any load failure propagates.
pub fn load_exports(
    loader: &dyn ModuleLoader,
    entry: &Path,
    mode: EvaluationMode,
) -> Result<Vec<String>> {
    info!(entry = %entry.display(), %mode, "static scan found no exports, loading module");

    let value = loader.load(entry, mode)?;
    if !value.exposes_keys() {
        return Ok(Vec::new());
    }

    Ok(value
        .keys
        .into_iter()
        .filter(|key| !key.is_empty())
        .collect())
}
