//! Application state management

use shopdash_core::{Config, context_error, context_error::Result};
use shopdash_database::{Database, PgPool, RecordSource};
use std::sync::Arc;
use tracing::warn;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Database connection pool
    pub pool: PgPool,
    /// Where dashboard records are read from
    pub source: Arc<dyn RecordSource>,
}

impl AppState {
    /// Create new application state reading records from `pool`
    #[must_use]
    pub fn new(config: Config, pool: PgPool) -> Self {
        let source: Arc<dyn RecordSource> = Arc::new(Database::from_pool(pool.clone()));
        Self::with_source(config, pool, source)
    }

    /// Create application state with an explicit record source
    #[must_use]
    pub fn with_source(config: Config, pool: PgPool, source: Arc<dyn RecordSource>) -> Self {
        Self {
            config,
            pool,
            source,
        }
    }

    /// Check if the application is properly configured
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is out of range, or if admin keys
    /// are required but none (or malformed ones) are configured.
    pub fn validate(&self) -> Result<()> {
        self.config.validate_settings()?;

        let security = &self.config.security;
        if !security.require_api_key {
            return Ok(());
        }

        if security.admin_key_hashes.is_empty() {
            return Err(context_error!(
                "security.require_api_key is set but security.admin_key_hashes is empty"
            ));
        }

        if let Some(bad) = security
            .admin_key_hashes
            .iter()
            .find(|hash| !is_md5_hex(hash))
        {
            return Err(context_error!(
                "Admin key hash is not a 32 character hex digest: {}",
                bad
            ));
        }

        Ok(())
    }
}

/// Log a warning when `/api/admin/stats` is reachable without a key
///
/// Returns `true` if the warning was emitted.
pub fn warn_if_admin_unguarded(config: &Config) -> bool {
    if config.security.require_api_key {
        return false;
    }

    let any_origin = config.api.enable_cors && config.api.cors_origins.iter().any(|o| o == "*");
    warn!(
        any_origin,
        "security.require_api_key is false; admin statistics are served without authentication"
    );
    true
}

fn is_md5_hex(hash: &str) -> bool {
    hash.len() == 32 && hash.bytes().all(|b| b.is_ascii_hexdigit())
}
