use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Failed to back up {} to {}: {reason}", path.display(), backup.display())]
    Backup {
        path: PathBuf,
        backup: PathBuf,
        reason: String,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Persistence,
    Configuration,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl PatchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PatchError::NotFound { .. } | PatchError::Parse { .. } => ErrorCategory::Input,
            PatchError::Backup { .. } | PatchError::Write { .. } | PatchError::IoError(_) => {
                ErrorCategory::Persistence
            }
            PatchError::ConfigError { .. }
            | PatchError::InvalidConfigValueError { .. }
            | PatchError::MissingConfigError { .. } => ErrorCategory::Configuration,
            PatchError::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    /// Filesystem and serialization failures are Critical, the rest High.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PatchError::Backup { .. } | PatchError::Write { .. } => ErrorSeverity::Critical,
            PatchError::SerializationError(_) | PatchError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PatchError::NotFound { path } => format!(
                "Check that {} exists, or pass the correct path as an argument or via INPUT_FILE",
                path.display()
            ),
            PatchError::Parse { .. } => {
                "The input must be a UTF-8 JSON array of objects; fix the file and retry".to_string()
            }
            PatchError::Backup { backup, .. } => format!(
                "Move or delete {} (a previous run's backup) before running again",
                backup.display()
            ),
            PatchError::Write { path, .. } => format!(
                "Check free disk space and permissions; if {}.backup exists it holds the original content",
                path.display()
            ),
            PatchError::IoError(_) => "Check file permissions and retry".to_string(),
            PatchError::SerializationError(_) => {
                "Re-run with --verbose and report the failing record".to_string()
            }
            PatchError::ConfigError { .. } | PatchError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and retry".to_string()
            }
            PatchError::MissingConfigError { field } => format!(
                "Provide {} on the command line, via INPUT_FILE, or in the config file",
                field
            ),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PatchError::NotFound { path } => format!("Cannot find input file {}", path.display()),
            PatchError::Parse { path, .. } => {
                format!("{} is not a JSON array of country records", path.display())
            }
            PatchError::Backup { backup, .. } => {
                format!("Could not create backup at {}", backup.display())
            }
            PatchError::Write { path, .. } => format!("Could not write {}", path.display()),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatchError>;
