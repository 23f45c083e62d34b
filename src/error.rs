//! Error types for scullstore
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ScullError
pub type Result<T> = std::result::Result<T, ScullError>;

/// Unified error type for scullstore operations
///
/// Reading at or past end-of-data is not an error: it yields an empty read.
#[derive(Debug, Error)]
pub enum ScullError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Out of memory: failed to allocate {count} {what}")]
    OutOfMemory { what: &'static str, count: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // -------------------------------------------------------------------------
    // Device Errors
    // -------------------------------------------------------------------------
    #[error("No such device: {0}")]
    NoSuchDevice(usize),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ScullError> for std::io::Error {
    fn from(err: ScullError) -> Self {
        use std::io::ErrorKind;

        let kind = match &err {
            ScullError::Io(e) => e.kind(),
            ScullError::OutOfMemory { .. } => ErrorKind::OutOfMemory,
            ScullError::InvalidArgument(_) | ScullError::Config(_) => ErrorKind::InvalidInput,
            ScullError::NoSuchDevice(_) => ErrorKind::NotFound,
            ScullError::PermissionDenied(_) => ErrorKind::PermissionDenied,
        };

        match err {
            ScullError::Io(e) => e,
            other => std::io::Error::new(kind, other),
        }
    }
}
