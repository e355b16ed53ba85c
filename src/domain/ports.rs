use crate::utils::error::Result;
use std::path::PathBuf;

/// Byte-level file access used by the normalizer.
pub trait Storage {
    /// Where `path` lives on disk.
    fn resolve(&self, path: &str) -> PathBuf;
    fn exists(&self, path: &str) -> bool;
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    /// Replace the whole content of `path` with `data`.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait TargetProvider {
    /// Directory relative targets are resolved against.
    fn root_dir(&self) -> &str;
    /// Target paths in processing order.
    fn target_files(&self) -> &[String];
}
