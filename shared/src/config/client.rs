//! REST client configuration module

use serde::{Deserialize, Serialize};

/// Default base URL of the verification service
pub const DEFAULT_ENDPOINT: &str = "https://rest.messagebird.com/";

/// Default request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration for the HTTP client talking to the verification service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Access key sent in the `Authorization` header
    pub access_key: String,

    /// Base URL every resource path is resolved against
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Value of the `User-Agent` header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            access_key: String::new(),
            endpoint: default_endpoint(),
            request_timeout_secs: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given access key with default settings
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    ///
    /// Missing variables fall back to defaults; an absent access key is left
    /// empty and must be rejected by the caller.
    pub fn from_env() -> Self {
        let access_key = std::env::var("VERIFY_ACCESS_KEY").unwrap_or_default();
        let endpoint = std::env::var("VERIFY_ENDPOINT").unwrap_or_else(|_| default_endpoint());
        let request_timeout_secs = std::env::var("VERIFY_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        let user_agent =
            std::env::var("VERIFY_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        Self {
            access_key,
            endpoint,
            request_timeout_secs,
            user_agent,
        }
    }

    /// Set the base URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Whether an access key has been provided
    pub fn has_access_key(&self) -> bool {
        !self.access_key.trim().is_empty()
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    format!("verify-client/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("live_key");
        assert_eq!(config.access_key, "live_key");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.user_agent.starts_with("verify-client/"));
        assert!(config.has_access_key());
    }

    #[test]
    fn test_blank_access_key() {
        assert!(!ClientConfig::default().has_access_key());
        assert!(!ClientConfig::new("   ").has_access_key());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"access_key":"k"}"#).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_builders() {
        let config = ClientConfig::new("k")
            .with_endpoint("http://127.0.0.1:9000/")
            .with_timeout(5);
        assert_eq!(config.endpoint, "http://127.0.0.1:9000/");
        assert_eq!(config.request_timeout_secs, 5);
    }
}
