//! Domain entities exchanged with the verification service.

pub mod email_message;
pub mod request;
pub mod verification;

// Re-export commonly used types
pub use email_message::EmailMessage;
pub use request::{VerificationParams, VerificationRequest};
pub use verification::VerificationResult;
