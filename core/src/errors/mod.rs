//! Error types surfaced by every verify operation.

mod types;

#[cfg(test)]
mod tests;

pub use types::{TransportError, TypeError, ValidationError};

use thiserror::Error;

/// Errors returned by the request builder, the response decoder and the operations
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Decode error: {0}")]
    Type(#[from] TypeError),

    #[error("cannot decode into an absent target")]
    NilTarget,

    #[error("Encode error: {0}")]
    Encode(serde_json::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

pub type VerifyResult<T> = Result<T, VerifyError>;
