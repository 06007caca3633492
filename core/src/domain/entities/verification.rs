//! Verification resource as reported by the service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::HashMap;

use crate::errors::TypeError;

/// Server-side verification object returned by create, read and token checks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "WireVerification")]
pub struct VerificationResult {
    /// Unique identifier of the verification resource
    pub id: String,

    /// URL of the resource
    pub href: String,

    /// Caller-supplied reference
    pub reference: String,

    /// Service-defined status such as `sent`, `verified`, `expired`
    pub status: String,

    /// Message identifiers keyed by delivery channel
    pub messages: HashMap<String, String>,

    /// When the verification was created
    pub created_datetime: Option<DateTime<Utc>>,

    /// When the token stops being accepted
    pub valid_until_datetime: Option<DateTime<Utc>>,

    /// Phone number or email address, always in string form
    pub recipient: String,
}

impl VerificationResult {
    /// Check the status against a service status value
    pub fn has_status(&self, status: &str) -> bool {
        self.status.eq_ignore_ascii_case(status)
    }
}

/// Shape of a verification object on the wire.
///
/// `recipient` is kept untyped: the service emits it as a JSON number for
/// SMS challenges and as a string otherwise.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireVerification {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    href: Option<String>,
    #[serde(default)]
    reference: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    messages: Option<HashMap<String, String>>,
    #[serde(default)]
    created_datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    valid_until_datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    recipient: Value,
}

impl TryFrom<WireVerification> for VerificationResult {
    type Error = TypeError;

    fn try_from(wire: WireVerification) -> Result<Self, Self::Error> {
        let recipient = recipient_to_string(wire.recipient)?;

        Ok(Self {
            id: wire.id.unwrap_or_default(),
            href: wire.href.unwrap_or_default(),
            reference: wire.reference.unwrap_or_default(),
            status: wire.status.unwrap_or_default(),
            messages: wire.messages.unwrap_or_default(),
            created_datetime: wire.created_datetime,
            valid_until_datetime: wire.valid_until_datetime,
            recipient,
        })
    }
}

/// Normalize a raw `recipient` value to its string form
pub(crate) fn recipient_to_string(value: Value) -> Result<String, TypeError> {
    match value {
        Value::String(recipient) => Ok(recipient),
        Value::Number(number) => Ok(number_to_string(&number)),
        other => Err(TypeError {
            field: "recipient",
            found: json_type_name(&other),
        }),
    }
}

// f64's Display is the shortest round-trip form and never uses an exponent.
fn number_to_string(number: &Number) -> String {
    if let Some(value) = number.as_u64() {
        value.to_string()
    } else if let Some(value) = number.as_i64() {
        value.to_string()
    } else if let Some(value) = number.as_f64() {
        value.to_string()
    } else {
        number.to_string()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
