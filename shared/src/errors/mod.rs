//! Error body structures returned by the verification service

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single error entry reported by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    /// Service-defined numeric error code
    pub code: i32,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Request parameter the error refers to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

impl fmt::Display for ApiErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parameter {
            Some(parameter) => write!(
                f,
                "{} (code: {}, parameter: {})",
                self.description, self.code, parameter
            ),
            None => write!(f, "{} (code: {})", self.description, self.code),
        }
    }
}

/// Error body of a non-2xx response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

impl ApiErrorResponse {
    /// Parse an error body, returning `None` when it is not a structured error list
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str::<Self>(body)
            .ok()
            .filter(|response| !response.errors.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_body() {
        let body = r#"{"errors":[{"code":21,"description":"Request not allowed (incorrect access_key)","parameter":"access_key"}]}"#;
        let response = ApiErrorResponse::parse(body).unwrap();
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].code, 21);
        assert_eq!(response.errors[0].parameter.as_deref(), Some("access_key"));
    }

    #[test]
    fn test_parse_rejects_unstructured_body() {
        assert!(ApiErrorResponse::parse("<html>Bad Gateway</html>").is_none());
        assert!(ApiErrorResponse::parse(r#"{"errors":[]}"#).is_none());
        assert!(ApiErrorResponse::parse("").is_none());
    }

    #[test]
    fn test_display() {
        let detail = ApiErrorDetail {
            code: 10,
            description: "The token is invalid".to_string(),
            parameter: None,
        };
        assert_eq!(detail.to_string(), "The token is invalid (code: 10)");
    }
}
