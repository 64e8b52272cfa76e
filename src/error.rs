use thiserror::Error;
use tracing::{error, warn};

/// Error severity for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,    // informational
    Warning, // recoverable
    Error,   // operation failed
}

/// Domain-specific errors for Storybench. The core state machine never
/// produces these: unknown selections and bad control input are no-ops by
/// policy. These cover the ambient surface around it.
#[derive(Error, Debug)]
pub enum StorybenchError {
    #[error("Failed to read config '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Unknown story '{component}/{story}'")]
    UnknownStory { component: String, story: String },

    #[error("Invalid story reference '{0}', expected COMPONENT/STORY")]
    InvalidStoryRef(String),
}

impl StorybenchError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigRead { .. } => ErrorSeverity::Warning,
            Self::ConfigParse(_) => ErrorSeverity::Warning,
            Self::UnknownStory { .. } => ErrorSeverity::Warning,
            Self::InvalidStoryRef(_) => ErrorSeverity::Warning,
        }
    }
}

pub type Result<T> = std::result::Result<T, StorybenchError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and falls back to a default.
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
