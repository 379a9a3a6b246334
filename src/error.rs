//! Error types for the data-access layer
//!
//! Provides unified error handling using thiserror. None of these errors
//! escape a service operation: they are folded into the response envelope.

use std::io;

use thiserror::Error;

// == Service Error Enum ==
/// Unified error type for store and service internals.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Injected transient failure
    #[error("Simulated service error - testing error handling")]
    SimulatedFailure,

    /// Storage medium could not be read or written
    #[error("Storage I/O error on '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    /// Record could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A shared lock was poisoned by a panicking holder
    #[error("Lock poisoned during {0}")]
    LockPoisoned(&'static str),

    /// A blocking storage task panicked or was cancelled
    #[error("Storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ServiceError {
    /// Wraps an I/O error with the storage key it concerns.
    pub fn io(key: impl Into<String>, source: io::Error) -> Self {
        ServiceError::Io {
            key: key.into(),
            source,
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the data-access layer.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_failure_message() {
        let err = ServiceError::SimulatedFailure;
        assert_eq!(
            err.to_string(),
            "Simulated service error - testing error handling"
        );
    }

    #[test]
    fn test_io_error_names_key() {
        let err = ServiceError::io(
            "bookReviewApp_books",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("bookReviewApp_books"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_serialization_from_serde() {
        let parse_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: ServiceError = parse_err.into();
        assert!(matches!(err, ServiceError::Serialization(_)));
    }
}
