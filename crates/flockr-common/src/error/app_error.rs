//! Application error types
//!
//! Every failure a caller can observe is either an input error or an access
//! error. Infrastructure faults are kept apart and never carry a kind.

use flockr_core::{DomainError, ErrorKind};
use serde::Serialize;
use std::fmt;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid identifier, value or domain precondition
    #[error("{0}")]
    InputError(String),

    /// Missing authentication, membership or ownership
    #[error("{0}")]
    AccessError(String),

    // Authentication errors
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Classify the error, `None` for infrastructure faults
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::InputError(_) | Self::Validation(_) => Some(ErrorKind::Input),
            Self::AccessError(_) | Self::InvalidToken | Self::TokenExpired => {
                Some(ErrorKind::Access)
            }
            Self::Domain(e) => Some(e.kind()),
            Self::Internal(_) | Self::Config(_) => None,
        }
    }

    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            Some(ErrorKind::Input) => 400,
            Some(ErrorKind::Access) => 403,
            None => 500,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InputError(_) => "INPUT_ERROR",
            Self::AccessError(_) => "ACCESS_ERROR",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    #[must_use]
    pub fn is_input(&self) -> bool {
        self.kind() == Some(ErrorKind::Input)
    }

    #[must_use]
    pub fn is_access(&self) -> bool {
        self.kind() == Some(ErrorKind::Access)
    }

    #[must_use]
    pub fn input(msg: impl fmt::Display) -> Self {
        Self::InputError(msg.to_string())
    }

    #[must_use]
    pub fn access(msg: impl fmt::Display) -> Self {
        Self::AccessError(msg.to_string())
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error response structure for the HTTP layer
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let name = match err.kind() {
            Some(ErrorKind::Input) => "InputError",
            Some(ErrorKind::Access) => "AccessError",
            None => "InternalError",
        };
        Self {
            code: err.status_code(),
            name: name.to_string(),
            message: err.to_string(),
            details: Some(serde_json::json!({ "error_code": err.error_code() })),
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
