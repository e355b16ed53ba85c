use crate::core::normalizer::LineEndingNormalizer;
use crate::core::{FileOutcome, ProcessedFile, Result, RunMode, RunReport, Storage};
use crate::utils::error::FixLfError;
use std::io::Write;

/// Runs the normalizer over an ordered list of targets.
pub struct Driver<S: Storage> {
    normalizer: LineEndingNormalizer<S>,
    mode: RunMode,
}

impl<S: Storage> Driver<S> {
    pub fn new(storage: S) -> Self {
        Self::with_mode(storage, RunMode::Apply)
    }

    pub fn with_mode(storage: S, mode: RunMode) -> Self {
        Self {
            normalizer: LineEndingNormalizer::new(storage),
            mode,
        }
    }

    /// Process `targets` in order, writing one notice line per target to `out`.
    ///
    /// Stops at the first error; notices for earlier targets have already been
    /// written by then.
    pub fn run<W: Write>(&self, targets: &[String], out: &mut W) -> Result<RunReport> {
        let mut report = RunReport::new(self.mode);

        for path in targets {
            let outcome = self.process(path)?;

            writeln!(out, "{}", self.mode.notice(path, &outcome))
                .map_err(FixLfError::NoticeError)?;

            report.files.push(ProcessedFile {
                path: path.clone(),
                outcome,
            });
        }

        tracing::info!(
            "Processed {} file(s): {} converted, {} unchanged, {} missing",
            report.files.len(),
            report.converted_count(),
            report.unchanged_count(),
            report.missing_count()
        );

        Ok(report)
    }

    fn process(&self, path: &str) -> Result<FileOutcome> {
        match self.mode {
            RunMode::Apply => self.normalizer.normalize(path),
            RunMode::DryRun => self.normalizer.inspect(path),
        }
    }
}
