//! Shared utilities and common types for the verify client
//!
//! This crate provides functionality used by both the core and the
//! infrastructure crates:
//! - Client and logging configuration types
//! - Error body structures returned by the verification service
//! - Recipient helpers (masking for logs, email detection)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{ClientConfig, LoggingConfig, LogFormat};
pub use errors::{ApiErrorDetail, ApiErrorResponse};
pub use utils::recipient;
