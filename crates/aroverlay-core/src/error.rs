//! Error types for aroverlay.

use thiserror::Error;

/// The main error type for aroverlay operations.
#[derive(Error, Debug)]
pub enum OverlayError {
    /// An argument violated a construction precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The global options have already been set.
    #[error("aroverlay already initialized")]
    AlreadyInitialized,

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for aroverlay operations.
pub type Result<T> = std::result::Result<T, OverlayError>;
