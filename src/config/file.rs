//! Configuration file and environment sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{ExportsError, Result};
use crate::models::config::PartialSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".cjs-exports.toml";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
            priority: 20,
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 20,
        }
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(ExportsError::ConfigNotFound {
                path: self.path.clone(),
            });
        }
        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source
///
/// Reads `<PREFIX>_BUILD_DIR`, `<PREFIX>_MODE`, `<PREFIX>_FALLBACK`,
/// `<PREFIX>_FALLBACK_PACKAGES` (comma separated), `<PREFIX>_NODE`,
/// `<PREFIX>_MAX_HOPS`, `<PREFIX>_THREADS` and `<PREFIX>_OUTPUT_FORMAT`.
pub struct EnvConfig {
    prefix: String,
    name: String,
}

const ENV_KEYS: &[&str] = &[
    "BUILD_DIR",
    "MODE",
    "FALLBACK",
    "FALLBACK_PACKAGES",
    "NODE",
    "MAX_HOPS",
    "THREADS",
    "OUTPUT_FORMAT",
];

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key)).ok()
    }

    fn parsed<T: std::str::FromStr>(&self, key: &str) -> Result<Option<T>>
    where
        T::Err: std::fmt::Display,
    {
        self.var(key)
            .map(|value| {
                value.trim().parse().map_err(|e| {
                    ExportsError::config_error(format!(
                        "invalid value '{}' for {}_{}: {}",
                        value, self.prefix, key, e
                    ))
                })
            })
            .transpose()
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        settings.build_dir = self.var("BUILD_DIR").map(PathBuf::from);
        settings.mode = self.parsed("MODE")?;
        settings.fallback_enabled = self.parsed("FALLBACK")?;
        settings.fallback_packages = self.var("FALLBACK_PACKAGES").map(|packages| {
            packages
                .split(',')
                .map(|package| package.trim().to_string())
                .filter(|package| !package.is_empty())
                .collect()
        });
        settings.node_binary = self.var("NODE").map(PathBuf::from);
        settings.max_hops = self.parsed("MAX_HOPS")?;
        settings.threads = self.parsed("THREADS")?;
        settings.output_format = self.parsed("OUTPUT_FORMAT")?;

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        ENV_KEYS.iter().any(|key| self.var(key).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
