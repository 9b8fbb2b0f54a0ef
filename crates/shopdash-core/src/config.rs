//! Configuration management for the `shopdash` dashboard service
//!
//! Values are layered: built-in defaults, then an optional `config.{toml,yaml,json}`
//! file in the working directory, then `SHOPDASH_*` environment variables.
//! Nested keys use a double underscore, e.g. `SHOPDASH_SERVER__PORT=9000`.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    #[validate(nested)]
    pub database: DatabaseConfig,

    /// API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Security configuration
    #[serde(default)]
    #[validate(nested)]
    pub security: SecurityConfig,

    /// Logging configuration
    #[serde(default)]
    #[validate(nested)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    #[validate(length(min = 1))]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    #[validate(range(min = 1))]
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_pool_bounds"))]
pub struct DatabaseConfig {
    /// Database URL
    #[serde(default = "default_database_url")]
    #[validate(length(min = 1))]
    pub url: String,

    /// Maximum number of connections
    #[serde(default = "default_max_connections")]
    #[validate(range(min = 1))]
    pub max_connections: u32,

    /// Minimum number of connections
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    #[validate(range(min = 1))]
    pub connect_timeout: u64,

    /// Idle timeout in seconds
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout: u64,
}

/// API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Enable CORS
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,

    /// Allowed CORS origins, `"*"` allows any
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

/// Security configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SecurityConfig {
    /// Require an admin API key on `/api/admin/*`
    #[serde(default = "default_require_api_key")]
    pub require_api_key: bool,

    /// Lowercase hex MD5 digests of accepted admin keys
    #[serde(default)]
    pub admin_key_hashes: Vec<String>,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    #[validate(range(min = 1))]
    pub request_timeout: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format (json, text)
    #[serde(default = "default_log_format")]
    #[validate(custom(function = "validate_log_format"))]
    pub format: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_database_url() -> String {
    std::env::var("SHOPDASH_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .unwrap_or_else(|_| "postgresql://localhost/shopdash".to_string())
}

const fn default_max_connections() -> u32 {
    50
}

const fn default_min_connections() -> u32 {
    5
}

const fn default_connect_timeout() -> u64 {
    30
}

const fn default_idle_timeout() -> u64 {
    600
}

const fn default_enable_cors() -> bool {
    true
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

const fn default_require_api_key() -> bool {
    false
}

const fn default_request_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn validate_pool_bounds(database: &DatabaseConfig) -> Result<(), ValidationError> {
    if database.min_connections > database.max_connections {
        return Err(ValidationError::new("min_connections_exceeds_max"));
    }
    Ok(())
}

fn validate_log_format(format: &str) -> Result<(), ValidationError> {
    match format {
        "json" | "text" => Ok(()),
        _ => Err(ValidationError::new("invalid_log_format")),
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout: default_connect_timeout(),
            idle_timeout: default_idle_timeout(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enable_cors: default_enable_cors(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            require_api_key: default_require_api_key(),
            admin_key_hashes: Vec::new(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            api: ApiConfig::default(),
            security: SecurityConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment and files
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed, or if the
    /// loaded values fail [`Config::validate_settings`].
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("SHOPDASH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("api.cors_origins")
                    .with_list_parse_key("security.admin_key_hashes"),
            )
            .build()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        loaded.validate_settings()?;
        Ok(loaded)
    }

    /// Check value ranges and cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] naming the offending fields.
    pub fn validate_settings(&self) -> crate::Result<()> {
        self.validate().map_err(crate::Error::from)
    }

    /// Socket address string the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
