//! Error types for request validation, response typing and transport failures

use thiserror::Error;
use verify_shared::ApiErrorDetail;

/// Validation errors
///
/// Raised before any request leaves the client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },
}

/// A response field carried a JSON type that cannot be mapped
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field} is unknown type {found}")]
pub struct TypeError {
    /// Name of the offending field
    pub field: &'static str,
    /// JSON type actually received (`boolean`, `object`, `array`, `null`)
    pub found: &'static str,
}

/// Failure reported by the transport collaborator
///
/// Forwarded to callers untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request never produced a response (connection, TLS, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The request could not be built (invalid path or body)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The service answered with a structured error body
    #[error("API error (status {status}): {}", describe(.errors))]
    Api {
        status: u16,
        errors: Vec<ApiErrorDetail>,
    },

    /// The service answered with a non-2xx status and an unrecognised body
    #[error("Unexpected response status: {status}")]
    UnexpectedStatus { status: u16, body: String },
}

impl TransportError {
    /// HTTP status of the failed response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Network(_) | TransportError::InvalidRequest(_) => None,
            TransportError::Api { status, .. }
            | TransportError::UnexpectedStatus { status, .. } => Some(*status),
        }
    }
}

fn describe(errors: &[ApiErrorDetail]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
