// Domain errors - Error types for the domain layer

use thiserror::Error;

/// Domain-specific error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Missing or malformed command-line input
    #[error("usage error: {0}")]
    Usage(String),

    /// A supplied value failed validation
    #[error("invalid input: {0}")]
    Validation(String),

    /// The prober did not report a usable duration
    #[error("could not determine duration of {path}: {message}")]
    ProbeFailure { path: String, message: String },

    /// The engine process could not be spawned or waited on
    #[error("engine failure: {0}")]
    EngineFailure(String),

    /// Every candidate output name up to the probe limit is taken
    #[error("no free output name for \"{base}.{ext}\" after {probes} attempts")]
    NameExhausted { base: String, ext: String, probes: u32 },

    /// File system operation failed
    #[error("file system error: {0}")]
    FsFail(String),

    /// Interactive input could not be read
    #[error("console error: {0}")]
    Console(String),
}

impl DomainError {
    /// Process exit code for this error class
    pub fn exit_code(&self) -> i32 {
        match self {
            DomainError::Usage(_) => 2,
            DomainError::Validation(_) => 3,
            DomainError::ProbeFailure { .. } => 4,
            DomainError::EngineFailure(_) => 5,
            DomainError::NameExhausted { .. } | DomainError::FsFail(_) | DomainError::Console(_) => 1,
        }
    }
}
