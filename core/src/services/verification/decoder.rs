//! Decodes service payloads into verification entities

use crate::domain::entities::verification::WireVerification;
use crate::domain::entities::{EmailMessage, VerificationResult};
use crate::errors::{VerifyError, VerifyResult};

/// Decode a verification object
///
/// `recipient` may be a JSON number or string; any other type fails with
/// `VerifyError::Type`.
pub fn decode_verification(payload: &str) -> VerifyResult<VerificationResult> {
    let wire: WireVerification = serde_json::from_str(payload)?;
    Ok(VerificationResult::try_from(wire)?)
}

/// Decode a verification object into an existing value
///
/// Fails with `VerifyError::NilTarget` before reading the payload when no
/// target is given. The target is left untouched on error.
pub fn decode_verification_into(
    target: Option<&mut VerificationResult>,
    payload: &str,
) -> VerifyResult<()> {
    let target = target.ok_or(VerifyError::NilTarget)?;
    *target = decode_verification(payload)?;
    Ok(())
}

/// Decode an email message object
pub fn decode_email_message(payload: &str) -> VerifyResult<EmailMessage> {
    Ok(serde_json::from_str(payload)?)
}
