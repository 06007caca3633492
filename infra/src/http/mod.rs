//! HTTP Transport Module
//!
//! REST client implementing the core `Transport` trait on top of `reqwest`.
//!
//! ## Features
//!
//! - Access key authorization on every request
//! - JSON content negotiation
//! - Structured error bodies mapped to `TransportError::Api`
//! - Security: recipients are never logged, only resource paths

pub mod rest_client;

pub use rest_client::RestClient;

#[cfg(test)]
mod tests;
