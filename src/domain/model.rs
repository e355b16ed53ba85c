/// What happened to a single target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The path does not exist; nothing was read or written.
    Missing,
    /// The file contains no CRLF and was left untouched.
    Unchanged { bytes: usize },
    /// `replaced` CRLF pairs were (or, in a dry run, would be) rewritten to LF.
    Converted {
        replaced: usize,
        bytes_before: usize,
        bytes_after: usize,
    },
}

impl FileOutcome {
    pub fn is_converted(&self) -> bool {
        matches!(self, FileOutcome::Converted { .. })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Rewrite files in place.
    #[default]
    Apply,
    /// Compute outcomes without writing anything.
    DryRun,
}

impl RunMode {
    /// The line printed after a target has been handled.
    ///
    /// In `Apply` mode this is always `Converted <path>`, whether or not the
    /// file existed or changed.
    pub fn notice(&self, path: &str, outcome: &FileOutcome) -> String {
        match self {
            RunMode::Apply => format!("Converted {}", path),
            RunMode::DryRun => match outcome {
                FileOutcome::Missing => format!("Missing {}", path),
                FileOutcome::Unchanged { .. } => format!("Unchanged {}", path),
                FileOutcome::Converted { .. } => format!("Would convert {}", path),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    pub path: String,
    pub outcome: FileOutcome,
}

/// Per-target outcomes of one run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub mode: RunMode,
    pub files: Vec<ProcessedFile>,
}

impl RunReport {
    pub fn new(mode: RunMode) -> Self {
        Self {
            mode,
            files: Vec::new(),
        }
    }

    pub fn converted_count(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.is_converted()).count()
    }

    pub fn missing_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.outcome == FileOutcome::Missing)
            .count()
    }

    pub fn unchanged_count(&self) -> usize {
        self.files.len() - self.converted_count() - self.missing_count()
    }
}
