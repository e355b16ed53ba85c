use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixLfError {
    #[error("IO error on {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write notice: {0}")]
    NoticeError(#[source] std::io::Error),

    #[error("Configuration parse error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    FileSystem,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl FixLfError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FixLfError::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FixLfError::IoError { .. } => ErrorCategory::FileSystem,
            FixLfError::NoticeError(_) => ErrorCategory::Output,
            FixLfError::ConfigValidationError { .. }
            | FixLfError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::FileSystem | ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error: 1 for bad input, 2 for I/O.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FixLfError::IoError { path, source } => match source.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied on {}", path.display())
                }
                _ => format!("Could not access {}: {}", path.display(), source),
            },
            FixLfError::NoticeError(e) => format!("Could not write progress output: {}", e),
            FixLfError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            FixLfError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for '{}': {}", value, field, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FixLfError::IoError { source, .. } => match source.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    "Check the file permissions of the listed targets"
                }
                _ => "Check that the disk is writable and the targets are regular files",
            },
            FixLfError::NoticeError(_) => "Make sure stdout is not closed (e.g. a broken pipe)",
            FixLfError::ConfigValidationError { .. } => {
                "Make sure the config file exists and is valid TOML"
            }
            FixLfError::InvalidConfigValueError { .. } => {
                "Fix the offending entry in the target list and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FixLfError>;
