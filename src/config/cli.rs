use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;

/// Writes files straight to the local filesystem.
///
/// Existing files are overwritten; missing parent directories are not created.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        fs::write(path, data)?;
        Ok(())
    }
}
