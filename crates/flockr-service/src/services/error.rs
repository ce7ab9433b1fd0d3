//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use flockr_common::AppError;
use flockr_core::{DomainError, ErrorKind};
use validator::ValidationErrors;

/// Service layer error type
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Domain rule violation
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Application error (auth, validation, infrastructure)
    #[error(transparent)]
    App(#[from] AppError),
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::App(AppError::Validation(msg.into()))
    }

    /// Input or access classification, `None` for infrastructure faults
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Domain(e) => Some(e.kind()),
            Self::App(e) => e.kind(),
        }
    }

    pub fn is_input(&self) -> bool {
        self.kind() == Some(ErrorKind::Input)
    }

    pub fn is_access(&self) -> bool {
        self.kind() == Some(ErrorKind::Access)
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => AppError::from(e.clone()).status_code(),
            Self::App(e) => e.status_code(),
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::validation(errors.to_string())
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
