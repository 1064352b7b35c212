//! Protocol-level error kinds with stable wire tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable error classification carried in error envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed envelope, unknown operation, or invalid payload.
    ValidationError,
    /// The addressed resource does not exist.
    NotFound,
    /// The target endpoint could not be reached or answered garbage.
    Unreachable,
    /// Discovery returned no candidate for the required skill.
    NoCapableAgent,
    /// The endpoint does not serve the requested operation.
    UnsupportedOperation,
    /// Unexpected failure inside the endpoint.
    Internal,
}

impl ErrorKind {
    /// Returns the wire tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidationError => "validation_error",
            Self::NotFound => "not_found",
            Self::Unreachable => "unreachable",
            Self::NoCapableAgent => "no_capable_agent",
            Self::UnsupportedOperation => "unsupported_operation",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error carried in `{"status": "error", "error": {...}}` envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct ProtocolError {
    /// Stable classification.
    pub kind: ErrorKind,
    /// Human-readable detail.
    pub message: String,
}

impl ProtocolError {
    /// Creates an error of the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a `validation_error`.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ValidationError, message)
    }

    /// Creates an `unsupported_operation` error naming the operation.
    #[must_use]
    pub fn unsupported(operation: &str) -> Self {
        Self::new(
            ErrorKind::UnsupportedOperation,
            format!("operation '{operation}' is not served by this endpoint"),
        )
    }

    /// Creates an `internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}
