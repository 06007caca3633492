//! Verify resource module
//!
//! - Request building with recipient validation
//! - Response decoding with number/string recipient normalization
//! - Create, read, delete, token check and email message lookup
//! - Transport trait the HTTP client implements

mod builder;
mod decoder;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use builder::build_request;
pub use decoder::{decode_email_message, decode_verification, decode_verification_into};
pub use service::{VerifyService, EMAIL_MESSAGES_PATH, VERIFY_PATH};
pub use traits::{HttpMethod, Transport};
