//! HTTP request handlers shared by applications.

pub mod health;

// Re-export common handler utilities
pub use health::{health_check, metrics_response};
