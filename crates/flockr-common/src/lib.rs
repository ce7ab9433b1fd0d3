//! # flockr-common
//!
//! Configuration, errors and session tokens shared by the Flockr crates, plus
//! the tracing subscriber setup.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    hash_password, validate_password_strength, verify_password, Claims, IssuedToken, JwtService,
    MIN_PASSWORD_LENGTH,
};
pub use config::{AppConfig, AppSettings, ConfigError, Environment, JwtConfig, SchedulerConfig};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
