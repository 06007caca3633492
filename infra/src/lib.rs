//! # Infrastructure Layer
//!
//! Concrete implementations behind the verify client's seams:
//!
//! - **HTTP**: `reqwest` REST client implementing the core `Transport` trait
//! - **Configuration**: loading client settings from the environment and `.env`
//! - **Telemetry**: tracing subscriber initialisation

use std::sync::Arc;

use verify_core::services::verification::VerifyService;
use verify_shared::ClientConfig;

/// HTTP transport module
pub mod http;

/// Tracing setup
pub mod telemetry;

pub use http::RestClient;
pub use telemetry::init_tracing;

/// Load the client configuration from the environment
///
/// Reads a `.env` file when present. `VERIFY_ACCESS_KEY` is required.
pub fn load_config() -> Result<ClientConfig, InfrastructureError> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    if !config.has_access_key() {
        return Err(InfrastructureError::Config(
            "VERIFY_ACCESS_KEY not set".to_string(),
        ));
    }

    Ok(config)
}

/// Create a verify service backed by the REST client
pub fn create_verify_service(
    config: ClientConfig,
) -> Result<VerifyService<RestClient>, InfrastructureError> {
    let client = RestClient::new(config)?;
    tracing::info!("Verify service ready on {}", client.base_url());
    Ok(VerifyService::new(Arc::new(client)))
}

/// Create a verify service from environment variables
pub fn create_verify_service_from_env() -> Result<VerifyService<RestClient>, InfrastructureError> {
    create_verify_service(load_config()?)
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
