//! Data models and DTOs (Data Transfer Objects)
//!
//! Contains all request/response structures used by the API.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

// Re-export commonly used types
pub use pizza::*;
pub use restaurant::*;
pub use restaurant_pizza::*;

use validator::ValidationErrors;

/// Flatten validator output into the messages shown to clients
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .map(|e| {
            e.message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| e.code.to_string())
        })
        .collect();
    messages.sort();
    messages.dedup();
    messages
}
