//! Application configuration structs
//!
//! Loads configuration from a `.env` file and environment variables.

use serde::Deserialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub jwt: JwtConfig,
    pub scheduler: SchedulerConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            other => Err(ConfigError::InvalidValue("APP_ENV", other.to_string())),
        }
    }
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Lifetime of a session token in seconds
    #[serde(default = "default_token_expiry")]
    pub token_expiry: i64,
}

/// Background scheduler configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerConfig {
    /// How often the ticker fires due tasks, in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl SchedulerConfig {
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

// Default value functions
fn default_app_name() -> String {
    "flockr".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_token_expiry() -> i64 {
    86400 // 1 day
}

fn default_tick_ms() -> u64 {
    250
}

/// Read an optional variable, rejecting values that do not parse
fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(None),
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if `JWT_SECRET` is missing or a variable does not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let secret = env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;
        if secret.is_empty() {
            return Err(ConfigError::InvalidValue("JWT_SECRET", String::new()));
        }

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: parse_var("APP_ENV")?.unwrap_or_else(default_env),
            },
            jwt: JwtConfig {
                secret,
                token_expiry: parse_var("JWT_TOKEN_EXPIRY")?.unwrap_or_else(default_token_expiry),
            },
            scheduler: SchedulerConfig {
                tick_ms: parse_var("SCHEDULER_TICK_MS")?.unwrap_or_else(default_tick_ms),
            },
        })
    }

    /// Fixed configuration for tests
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            app: AppSettings {
                name: "flockr-test".to_string(),
                env: Environment::Development,
            },
            jwt: JwtConfig {
                secret: "test-secret-key-that-is-long-enough".to_string(),
                token_expiry: default_token_expiry(),
            },
            scheduler: SchedulerConfig { tick_ms: 10 },
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
