//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Checked by `validate_password_strength`
    pub password: String,

    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub name_first: String,

    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    pub name_last: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Profile Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetNameRequest {
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub name_first: String,

    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    pub name_last: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetEmailRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetHandleRequest {
    #[validate(length(min = 3, max = 20, message = "Handle must be 3-20 characters"))]
    pub handle_str: String,
}

// ============================================================================
// Channel Requests
// ============================================================================

/// Create channel request
///
/// The name is checked by the channel entity itself.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChannelRequest {
    pub name: String,
    pub is_public: bool,
}
