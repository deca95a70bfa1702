//! Error handling module for the clip degenerator

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Top-level error type for a degen run
#[derive(Error, Debug)]
pub enum DegenError {
    /// Error raised by the domain or one of its adapters
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Configuration could not be loaded or is invalid
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Logging could not be initialized
    #[error("failed to initialize logging: {message}")]
    Logging { message: String },

    /// One or more engine runs in a batch exited unsuccessfully
    #[error("{failed} of {total} clips failed")]
    BatchFailed { failed: usize, total: usize },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DegenError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DegenError::Domain(e) => e.exit_code(),
            DegenError::Config { .. } => 2,
            DegenError::BatchFailed { .. } => 5,
            DegenError::Logging { .. } | DegenError::IoError(_) => 1,
        }
    }
}

/// Result type alias for degen operations
pub type DegenResult<T> = std::result::Result<T, DegenError>;
