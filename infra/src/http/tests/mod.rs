//! Unit tests for the HTTP transport

#[cfg(test)]
pub mod rest_client_tests;
