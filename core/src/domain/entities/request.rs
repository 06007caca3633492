//! Outgoing verification request and its optional parameters.

use serde::{Deserialize, Serialize};

/// Optional settings for a new verification
///
/// Empty strings and zero values are treated as "not set" and never reach
/// the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationParams {
    /// Sender name or number
    pub originator: String,
    /// Caller-supplied reference echoed back in results
    pub reference: String,
    /// Challenge channel (`sms`, `flash`, `tts`, `email`)
    pub challenge_type: String,
    /// Message template; `%token` is replaced by the service
    pub template: String,
    /// SMS data coding (`plain`, `unicode`, `auto`)
    pub data_coding: String,
    /// Status report callback URL
    pub report_url: String,
    /// Voice profile for text-to-speech challenges
    pub voice: String,
    /// Language for text-to-speech challenges
    pub language: String,
    /// Token validity in seconds
    pub timeout: u32,
    /// Number of characters in the generated token
    pub token_length: u32,
    /// Subject line for email challenges
    pub subject: String,
}

/// Body of a `POST verify` request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    pub recipient: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub originator: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reference: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub challenge_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub template: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub data_coding: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub report_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub voice: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub language: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub timeout: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub token_length: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subject: String,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}
