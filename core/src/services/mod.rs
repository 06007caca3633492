//! Services talking to the verification API.

pub mod verification;

// Re-export commonly used types
pub use verification::{
    build_request, decode_email_message, decode_verification, decode_verification_into,
    HttpMethod, Transport, VerifyService,
};
