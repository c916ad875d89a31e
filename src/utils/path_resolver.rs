//! Module path resolution utilities
//!
//! Node-style resolution of a specifier against a base directory: relative
//! and absolute paths, bare package names looked up through `node_modules`,
//! extension inference, directory index files, the `exports` map and the
//! package entry fields (browser > module > main by default).

use crate::error::{ExportsError, IoResultExt, Result};
use crate::models::config::{
    Settings, DEFAULT_CONDITION_NAMES, DEFAULT_EXTENSIONS, DEFAULT_MAIN_FIELDS,
};
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Turns a specifier plus base directory into an absolute file path
pub trait ModuleResolver: Send + Sync {
    /// Resolve `specifier` as if it were required from a file in `base_dir`
    fn resolve(&self, base_dir: &Path, specifier: &str) -> Result<PathBuf>;
}

/// Knobs of Node-style resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Package descriptor entry fields, highest precedence first
    pub main_fields: Vec<String>,
    /// Conditions matched in `exports` maps, highest precedence first
    pub condition_names: Vec<String>,
    /// Extensions tried for extensionless candidates, without the dot
    pub extensions: Vec<String>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        let owned = |values: &[&str]| values.iter().map(|v| v.to_string()).collect();
        Self {
            main_fields: owned(DEFAULT_MAIN_FIELDS),
            condition_names: owned(DEFAULT_CONDITION_NAMES),
            extensions: owned(DEFAULT_EXTENSIONS),
        }
    }
}

impl ResolverOptions {
    /// Options taken from the loaded settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            main_fields: settings.main_fields.clone(),
            condition_names: settings.condition_names.clone(),
            extensions: settings.extensions.clone(),
        }
    }
}

/// Node-style path resolver
#[derive(Debug, Clone, Default)]
pub struct NodeResolver {
    options: ResolverOptions,
}

impl ModuleResolver for NodeResolver {
    fn resolve(&self, base_dir: &Path, specifier: &str) -> Result<PathBuf> {
        let resolved = if specifier.is_empty() {
            None
        } else if is_path_specifier(specifier) {
            self.resolve_file_or_directory(&base_dir.join(specifier))?
        } else {
            self.resolve_package(specifier, base_dir)?
        };

        let resolved =
            resolved.ok_or_else(|| ExportsError::module_not_found(specifier, base_dir))?;
        trace!(specifier, resolved = %resolved.display(), "resolved module");

        fs::canonicalize(&resolved).with_file_context(&resolved)
    }
}

impl NodeResolver {
    /// Create a resolver with custom options
    pub fn new(options: ResolverOptions) -> Self {
        Self { options }
    }

    /// The options this resolver runs with
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Resolve a path that may name a file, an extensionless file or a directory
    fn resolve_file_or_directory(&self, candidate: &Path) -> Result<Option<PathBuf>> {
        if let Some(file) = self.resolve_as_file(candidate) {
            return Ok(Some(file));
        }

        if candidate.is_dir() {
            let manifest_path = candidate.join("package.json");
            let manifest = if manifest_path.is_file() {
                Some(read_manifest(&manifest_path)?)
            } else {
                None
            };
            return Ok(self.resolve_directory_entry(candidate, manifest.as_ref()));
        }

        Ok(None)
    }

    /// Exact file first, then each configured extension appended
    fn resolve_as_file(&self, candidate: &Path) -> Option<PathBuf> {
        if candidate.is_file() {
            return Some(candidate.to_path_buf());
        }

        self.options.extensions.iter().find_map(|ext| {
            let mut with_ext = OsString::from(candidate.as_os_str());
            with_ext.push(".");
            with_ext.push(ext);
            let with_ext = PathBuf::from(with_ext);
            with_ext.is_file().then_some(with_ext)
        })
    }

    fn resolve_index(&self, dir: &Path) -> Option<PathBuf> {
        self.options
            .extensions
            .iter()
            .map(|ext| dir.join(format!("index.{}", ext)))
            .find(|index| index.is_file())
    }

    /// Entry of a directory: manifest entry fields, then its index file
    fn resolve_directory_entry(&self, dir: &Path, manifest: Option<&Value>) -> Option<PathBuf> {
        if let Some(manifest) = manifest {
            for field in &self.options.main_fields {
                let Some(entry) = manifest.get(field).and_then(Value::as_str) else {
                    continue;
                };
                if entry.is_empty() {
                    continue;
                }

                let candidate = dir.join(entry);
                if let Some(file) = self.resolve_as_file(&candidate) {
                    return Some(file);
                }
                if candidate.is_dir() {
                    if let Some(index) = self.resolve_index(&candidate) {
                        return Some(index);
                    }
                }
            }
        }

        self.resolve_index(dir)
    }

    /// Resolve a bare specifier through the enclosing `node_modules` directories
    fn resolve_package(&self, specifier: &str, base_dir: &Path) -> Result<Option<PathBuf>> {
        let (package_name, subpath) = split_package_specifier(specifier);

        for dir in base_dir.ancestors() {
            if dir.file_name().is_some_and(|name| name == "node_modules") {
                continue;
            }

            let package_dir = dir.join("node_modules").join(&package_name);
            if package_dir.is_dir() {
                return self.resolve_package_subpath(&package_dir, subpath.as_deref());
            }
        }

        Ok(None)
    }

    /// Resolve the entry or a subpath of an installed package
    fn resolve_package_subpath(
        &self,
        package_dir: &Path,
        subpath: Option<&str>,
    ) -> Result<Option<PathBuf>> {
        let manifest_path = package_dir.join("package.json");
        let manifest = if manifest_path.is_file() {
            Some(read_manifest(&manifest_path)?)
        } else {
            None
        };

        if let Some(exports) = manifest.as_ref().and_then(|m| m.get("exports")) {
            if let Some(resolved) = self.resolve_exports_field(exports, subpath, package_dir) {
                return Ok(Some(resolved));
            }
        }

        match subpath {
            Some(subpath) => self.resolve_file_or_directory(&package_dir.join(subpath)),
            None => Ok(self.resolve_directory_entry(package_dir, manifest.as_ref())),
        }
    }

    /// Resolve through a package `exports` field
    fn resolve_exports_field(
        &self,
        exports: &Value,
        subpath: Option<&str>,
        package_dir: &Path,
    ) -> Option<PathBuf> {
        let export_key = subpath
            .map(|s| format!("./{}", s))
            .unwrap_or_else(|| ".".to_string());

        match exports {
            Value::Object(map) if map.keys().any(|key| key.starts_with('.')) => {
                if let Some(target) = map.get(&export_key) {
                    return self.resolve_export_target(target, package_dir, None);
                }

                // Longest prefix before the `*` wins, then the longest pattern
                let (_, wildcard, target) = map
                    .iter()
                    .filter_map(|(pattern, target)| {
                        let wildcard = match_export_pattern(&export_key, pattern)?;
                        let prefix_len = pattern.find('*').unwrap_or(pattern.len());
                        Some(((prefix_len, pattern.len()), wildcard, target))
                    })
                    .max_by_key(|(rank, _, _)| *rank)?;
                self.resolve_export_target(target, package_dir, Some(wildcard))
            }
            // Sugar for `{ ".": <exports> }`
            Value::String(_) | Value::Array(_) | Value::Object(_) if subpath.is_none() => {
                self.resolve_export_target(exports, package_dir, None)
            }
            _ => None,
        }
    }

    /// Resolve one target of an `exports` entry
    fn resolve_export_target(
        &self,
        target: &Value,
        package_dir: &Path,
        wildcard: Option<&str>,
    ) -> Option<PathBuf> {
        match target {
            Value::String(path) => {
                let path = match wildcard {
                    Some(wildcard) => path.replace('*', wildcard),
                    None => path.clone(),
                };
                let resolved = package_dir.join(path);
                resolved.is_file().then_some(resolved)
            }
            Value::Object(conditions) => self.options.condition_names.iter().find_map(|condition| {
                let value = conditions.get(condition)?;
                self.resolve_export_target(value, package_dir, wildcard)
            }),
            Value::Array(targets) => targets
                .iter()
                .find_map(|target| self.resolve_export_target(target, package_dir, wildcard)),
            _ => None,
        }
    }
}

/// Whether a specifier is a relative or absolute path rather than a package name
fn is_path_specifier(specifier: &str) -> bool {
    specifier == "."
        || specifier == ".."
        || specifier.starts_with("./")
        || specifier.starts_with("../")
        || Path::new(specifier).is_absolute()
}

/// Split package specifier into name and subpath
fn split_package_specifier(specifier: &str) -> (String, Option<String>) {
    let name_segments = if specifier.starts_with('@') { 2 } else { 1 };
    let parts: Vec<&str> = specifier.splitn(name_segments + 1, '/').collect();

    if parts.len() > name_segments {
        let subpath = parts[name_segments];
        let subpath = (!subpath.is_empty()).then(|| subpath.to_string());
        (parts[..name_segments].join("/"), subpath)
    } else {
        (specifier.to_string(), None)
    }
}

/// Match `./features/x` against a `./features/*` pattern, returning `x`
fn match_export_pattern<'k>(key: &'k str, pattern: &str) -> Option<&'k str> {
    let (prefix, suffix) = pattern.split_once('*')?;
    if key.len() < prefix.len() + suffix.len() {
        return None;
    }
    key.strip_prefix(prefix)?.strip_suffix(suffix)
}

fn read_manifest(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).with_file_context(path)?;
    serde_json::from_str(&content).map_err(|e| ExportsError::malformed_json(path, e))
}
