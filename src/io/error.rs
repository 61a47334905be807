//! Error types and context helpers for game operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all game operations
#[derive(Debug)]
pub enum GameError {
    /// Persisted game state does not describe a playable board
    InvalidState {
        /// Description of what's wrong with the state
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Game state could not be encoded or decoded as JSON
    Serialization {
        /// Whether encoding or decoding failed
        operation: &'static str,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Terminal input or output failed
    Terminal {
        /// Description of the terminal operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save a board snapshot image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState { reason } => {
                write!(f, "Invalid game state: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Serialization { operation, source } => {
                write!(f, "Failed to {operation} game state: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Terminal { operation, source } => {
                write!(f, "Terminal error during {operation}: {source}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export board image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialization { source, .. } => Some(source),
            Self::FileSystem { source, .. } | Self::Terminal { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::InvalidState { .. } | Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for game results
pub type Result<T> = std::result::Result<T, GameError>;

/// Attaches the path and operation to file system failures
pub trait WithPath<T> {
    /// Convert an I/O failure into [`GameError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation attached
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| GameError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Attaches the operation to terminal failures
pub trait WithTerminal<T> {
    /// Convert an I/O failure into [`GameError::Terminal`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the operation attached
    fn with_terminal(self, operation: &'static str) -> Result<T>;
}

impl<T> WithTerminal<T> for std::io::Result<T> {
    fn with_terminal(self, operation: &'static str) -> Result<T> {
        self.map_err(|source| GameError::Terminal { operation, source })
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GameError {
    GameError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid state error
pub fn invalid_state(reason: &impl ToString) -> GameError {
    GameError::InvalidState {
        reason: reason.to_string(),
    }
}
