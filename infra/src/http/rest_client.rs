//! REST client for the verification service
//!
//! One call to `send` is one HTTP exchange. Status codes are mapped to
//! `TransportError`, nothing is retried.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use std::time::Duration;
use tracing::{debug, error, warn};
use url::Url;
use verify_core::errors::TransportError;
use verify_core::services::verification::{HttpMethod, Transport};
use verify_shared::{ApiErrorResponse, ClientConfig};

use crate::InfrastructureError;

/// REST client implementation of the `Transport` trait
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: Url,
}

impl RestClient {
    /// Create a new REST client
    ///
    /// Fails when the access key is missing, the timeout is zero, the
    /// endpoint is not a valid base URL, or a header value cannot be encoded.
    pub fn new(config: ClientConfig) -> Result<Self, InfrastructureError> {
        if !config.has_access_key() {
            return Err(InfrastructureError::Config(
                "access key is required".to_string(),
            ));
        }

        if config.request_timeout_secs == 0 {
            return Err(InfrastructureError::Config(
                "request timeout must be at least one second".to_string(),
            ));
        }

        let base_url = parse_base_url(&config.endpoint)?;

        let mut authorization = HeaderValue::from_str(&format!("AccessKey {}", config.access_key))
            .map_err(|_| {
                InfrastructureError::Config("access key contains invalid characters".to_string())
            })?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        debug!("REST client initialized for {}", base_url);

        Ok(Self { client, base_url })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(crate::load_config()?)
    }

    /// Base URL every path is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a resource path, keeping any query string
    pub fn url_for(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| TransportError::InvalidRequest(format!("invalid path '{}': {}", path, e)))
    }
}

#[async_trait]
impl Transport for RestClient {
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<String, TransportError> {
        let url = self.url_for(path)?;

        debug!("{} {}", method, url.path());

        let mut request = self.client.request(to_reqwest_method(method), url);
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }

        let response = request.send().await.map_err(|e| {
            error!("{} {} failed: {}", method, path, e);
            TransportError::Network(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if status.is_success() {
            return Ok(text);
        }

        warn!("{} {} answered with status {}", method, path, status.as_u16());
        Err(error_from_response(status.as_u16(), text))
    }
}

/// Map a non-2xx response to a transport error
pub(crate) fn error_from_response(status: u16, body: String) -> TransportError {
    match ApiErrorResponse::parse(&body) {
        Some(response) => TransportError::Api {
            status,
            errors: response.errors,
        },
        None => TransportError::UnexpectedStatus { status, body },
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Delete => Method::DELETE,
    }
}

// Url::join drops the last segment of a base path without a trailing slash.
fn parse_base_url(endpoint: &str) -> Result<Url, InfrastructureError> {
    let mut url = Url::parse(endpoint).map_err(|e| {
        InfrastructureError::Config(format!("invalid endpoint '{}': {}", endpoint, e))
    })?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(InfrastructureError::Config(format!(
            "endpoint must be an http(s) URL: {}",
            endpoint
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
