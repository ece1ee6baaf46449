//! Error handling module
//!
//! Centralized error type for a pipeline run and its failure taxonomy.

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Which stage a run failed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Reference table missing or malformed; nothing was aggregated
    Reference,

    /// Transaction source unreadable or undecodable; aggregation aborted
    EventDecode,

    /// Document could not be written; remaining documents were not emitted
    OutputWrite,

    /// Invalid configuration; nothing was run
    Config,
}

impl ErrorKind {
    /// Process exit code for this kind of failure
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Reference => 2,
            ErrorKind::EventDecode => 3,
            ErrorKind::OutputWrite => 4,
            ErrorKind::Config => 5,
        }
    }
}

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Reference(#[from] crate::reference::ReferenceError),

    #[error(transparent)]
    EventStore(#[from] crate::event_store::EventStoreError),

    #[error(transparent)]
    Projection(#[from] crate::projection::ProjectionError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Reference(_) => ErrorKind::Reference,
            AppError::EventStore(_) => ErrorKind::EventDecode,
            AppError::Projection(_) => ErrorKind::OutputWrite,
            AppError::Config(_) => ErrorKind::Config,
        }
    }
}
