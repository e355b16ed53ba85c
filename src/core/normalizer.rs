use crate::core::normalize::{count_crlf, crlf_to_lf};
use crate::core::{FileOutcome, Result, Storage};

/// Rewrites files in place, replacing every CRLF with LF.
pub struct LineEndingNormalizer<S: Storage> {
    storage: S,
}

impl<S: Storage> LineEndingNormalizer<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Normalize `path` in place.
    ///
    /// A path that does not exist is skipped without error. Read and write
    /// failures are returned to the caller untouched.
    pub fn normalize(&self, path: &str) -> Result<FileOutcome> {
        self.process(path, true)
    }

    /// Compute what [`normalize`](Self::normalize) would do, without writing.
    pub fn inspect(&self, path: &str) -> Result<FileOutcome> {
        self.process(path, false)
    }

    fn process(&self, path: &str, write: bool) -> Result<FileOutcome> {
        if !self.storage.exists(path) {
            tracing::debug!("Skipping missing file: {}", path);
            return Ok(FileOutcome::Missing);
        }

        let content = self.storage.read_file(path)?;

        let normalized = crlf_to_lf(&content);

        // every existing target is rewritten, LF-only ones included
        if write {
            self.storage.write_file(path, &normalized)?;
        }

        let replaced = count_crlf(&content);
        let outcome = if replaced == 0 {
            FileOutcome::Unchanged {
                bytes: content.len(),
            }
        } else {
            FileOutcome::Converted {
                replaced,
                bytes_before: content.len(),
                bytes_after: normalized.len(),
            }
        };

        tracing::debug!("{}: {:?}", path, outcome);
        Ok(outcome)
    }
}
