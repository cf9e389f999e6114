//! Configuration structs

mod app_config;

pub use app_config::{
    env_or, required, AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig,
    Environment, JwtConfig, RateLimitConfig, RedisConfig, ServerConfig, MAX_TOKEN_EXPIRY,
};
