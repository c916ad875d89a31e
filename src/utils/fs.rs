//! File access used by the resolver

use crate::error::{IoResultExt, Result};
use std::path::Path;

/// Read primitive for module sources
pub trait FileSystem: Send + Sync {
    /// Read a whole file as text, replacing invalid UTF-8 sequences
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// Reads straight from the local disk
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFileSystem;

impl FileSystem for DiskFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path).with_file_context(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
