//! Test fixtures and data generators

use flockr_service::dto::RegisterRequest;

/// Password accepted by the strength check
pub const PASSWORD: &str = "goodpassword";

pub fn register_request(email: &str, first: &str, last: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_string(),
        password: PASSWORD.to_string(),
        name_first: first.to_string(),
        name_last: last.to_string(),
    }
}

/// A body of exactly `len` characters
pub fn body_of_length(len: usize) -> String {
    "a".repeat(len)
}
