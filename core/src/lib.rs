//! # Verify Core
//!
//! Entities, request building, response decoding and the operations of the
//! verify resource. The HTTP exchange itself is delegated to a `Transport`
//! supplied by the caller.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    EmailMessage, VerificationParams, VerificationRequest, VerificationResult,
};
pub use errors::{TransportError, TypeError, ValidationError, VerifyError, VerifyResult};
pub use services::verification::{
    build_request, decode_email_message, decode_verification, decode_verification_into,
    HttpMethod, Transport, VerifyService,
};
