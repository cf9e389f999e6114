//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
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
            "production" | "prod" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" | "dev" | "local" => Ok(Self::Development),
            other => Err(ConfigError::InvalidValue("APP_ENV", other.to_string())),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply pending migrations on startup
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
    #[serde(default = "default_migrations_path")]
    pub migrations_path: String,
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    #[serde(default = "default_redis_max_connections")]
    pub max_connections: u32,
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Token (and session) lifetime in seconds
    #[serde(default = "default_token_expiry")]
    pub token_expiry: i64,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_second: default_requests_per_second(),
            burst: default_burst(),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "events-api".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_run_migrations() -> bool {
    true
}

fn default_migrations_path() -> String {
    "./migrations".to_string()
}

fn default_redis_max_connections() -> u32 {
    10
}

fn default_token_expiry() -> i64 {
    86_400 // 24 hours
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

/// Read an optional environment variable, falling back to `default` when unset.
///
/// # Errors
/// Returns `InvalidValue` if the variable is set but does not parse.
pub fn env_or<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(default),
    }
}

/// Read a required environment variable.
///
/// # Errors
/// Returns `MissingVar` if the variable is unset.
pub fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

/// Longest accepted session lifetime: one year
pub const MAX_TOKEN_EXPIRY: i64 = 365 * 86_400;

/// Session lifetime in seconds, within `1..=MAX_TOKEN_EXPIRY`
fn checked_token_expiry(seconds: i64) -> Result<i64, ConfigError> {
    if (1..=MAX_TOKEN_EXPIRY).contains(&seconds) {
        Ok(seconds)
    } else {
        Err(ConfigError::InvalidValue(
            "JWT_TOKEN_EXPIRY",
            format!("{seconds} (expected 1..={MAX_TOKEN_EXPIRY} seconds)"),
        ))
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let env = match env::var("APP_ENV") {
            Ok(raw) => raw.parse()?,
            Err(_) => Environment::default(),
        };

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env,
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: required("API_PORT")?
                    .parse()
                    .map_err(|e: std::num::ParseIntError| {
                        ConfigError::InvalidValue("API_PORT", e.to_string())
                    })?,
            },
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                max_connections: env_or("DATABASE_MAX_CONNECTIONS", default_max_connections())?,
                min_connections: env_or("DATABASE_MIN_CONNECTIONS", default_min_connections())?,
                run_migrations: env_or("DATABASE_RUN_MIGRATIONS", default_run_migrations())?,
                migrations_path: env::var("MIGRATIONS_PATH")
                    .unwrap_or_else(|_| default_migrations_path()),
            },
            redis: RedisConfig {
                url: required("REDIS_URL")?,
                max_connections: env_or("REDIS_MAX_CONNECTIONS", default_redis_max_connections())?,
            },
            jwt: JwtConfig {
                secret: required("JWT_SECRET")?,
                token_expiry: checked_token_expiry(env_or(
                    "JWT_TOKEN_EXPIRY",
                    default_token_expiry(),
                )?)?,
            },
            rate_limit: RateLimitConfig {
                requests_per_second: env_or(
                    "RATE_LIMIT_REQUESTS_PER_SECOND",
                    default_requests_per_second(),
                )?,
                burst: env_or("RATE_LIMIT_BURST", default_burst())?,
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
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
