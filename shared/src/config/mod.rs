//! Configuration module
//!
//! - `client` - REST endpoint, credentials and request settings
//! - `logging` - tracing filter and output format

pub mod client;
pub mod logging;

// Re-export commonly used types
pub use client::ClientConfig;
pub use logging::{LogFormat, LoggingConfig};
