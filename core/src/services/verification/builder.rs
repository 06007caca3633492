//! Builds the wire request for a new verification

use crate::domain::entities::{VerificationParams, VerificationRequest};
use crate::errors::ValidationError;

/// Build a `VerificationRequest` from a recipient and optional parameters
///
/// Optional fields are copied as-is; empty values are dropped at
/// serialization time.
pub fn build_request(
    recipient: &str,
    params: Option<&VerificationParams>,
) -> Result<VerificationRequest, ValidationError> {
    if recipient.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "recipient".to_string(),
        });
    }

    let request = VerificationRequest {
        recipient: recipient.to_string(),
        ..Default::default()
    };

    let Some(params) = params else {
        return Ok(request);
    };

    Ok(VerificationRequest {
        originator: params.originator.clone(),
        reference: params.reference.clone(),
        challenge_type: params.challenge_type.clone(),
        template: params.template.clone(),
        data_coding: params.data_coding.clone(),
        report_url: params.report_url.clone(),
        voice: params.voice.clone(),
        language: params.language.clone(),
        timeout: params.timeout,
        token_length: params.token_length,
        subject: params.subject.clone(),
        ..request
    })
}
