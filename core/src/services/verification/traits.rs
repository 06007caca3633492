//! Transport seam between the operations and the HTTP client

use async_trait::async_trait;
use std::fmt;

use crate::errors::TransportError;

/// HTTP methods used by the verify resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for the HTTP client performing one request/response exchange
///
/// `path` is relative to the service base URL and may carry a query string.
/// `body` is a serialized JSON document. The returned string is the raw
/// response body, empty when the service sent none.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<String, TransportError>;
}
