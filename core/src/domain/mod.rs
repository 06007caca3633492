//! Domain layer containing the request and response entities.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
