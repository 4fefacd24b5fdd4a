//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for remove operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RemoveError {
    /// Deletion Error - a matched path could not be removed
    #[error("Deletion error: {message}")]
    Deletion { message: String },

    /// Environment Error - the process could not set up its runtime environment
    #[error("Environment error: {message}")]
    Environment { message: String },
}

impl RemoveError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Deletion { .. } => 1,
            Self::Environment { .. } => 3,
        }
    }

    /// Create a deletion error
    #[inline]
    pub fn deletion<S: Into<String>>(message: S) -> Self {
        Self::Deletion {
            message: message.into(),
        }
    }

    /// Create an environment error
    #[inline]
    pub fn environment<S: Into<String>>(message: S) -> Self {
        Self::Environment {
            message: message.into(),
        }
    }
}
