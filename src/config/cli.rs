use crate::core::Storage;
use crate::utils::error::{FixLfError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Files on the local filesystem, relative paths resolved against `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn resolve(&self, path: &str) -> PathBuf {
        // absolute targets ignore the base path
        Path::new(&self.base_path).join(path)
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        fs::read(&full_path).map_err(|e| FixLfError::io(full_path, e))
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        fs::write(&full_path, data).map_err(|e| FixLfError::io(full_path, e))
    }
}
