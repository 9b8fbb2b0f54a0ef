//! Core types and statistics for the `shopdash` admin dashboard

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod config;
pub mod error;
pub mod stats;
pub mod types;

/// Lightweight error context for binaries and application setup
pub mod context_error {
    use std::{error::Error as StdError, fmt};

    /// An error message with an optional underlying cause
    #[derive(Debug)]
    pub struct ContextError {
        source: Option<Box<dyn StdError + Send + Sync>>,
        message: String,
    }

    impl ContextError {
        /// Create a new context error from a message
        pub fn new<S: Into<String>>(message: S) -> Self {
            Self {
                source: None,
                message: message.into(),
            }
        }

        /// Wrap an existing error with a message
        pub fn with_context<E, S>(error: E, message: S) -> Self
        where
            E: StdError + Send + Sync + 'static,
            S: Into<String>,
        {
            Self {
                source: Some(Box::new(error)),
                message: message.into(),
            }
        }
    }

    impl fmt::Display for ContextError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.message)
        }
    }

    impl StdError for ContextError {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn StdError + 'static))
        }
    }

    /// Result type alias for context errors
    pub type Result<T> = std::result::Result<T, ContextError>;

    /// Build a [`ContextError`] from a message or format string
    #[macro_export]
    macro_rules! context_error {
        ($msg:literal) => {
            $crate::context_error::ContextError::new($msg)
        };
        ($fmt:expr, $($arg:tt)*) => {
            $crate::context_error::ContextError::new(format!($fmt, $($arg)*))
        };
    }

    impl From<crate::Error> for ContextError {
        fn from(err: crate::Error) -> Self {
            let message = err.to_string();
            Self::with_context(err, message)
        }
    }
}

pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use stats::{compute_stats, count_by_status};
pub use types::{
    Amount, DashboardRecords, Order, OrderStatus, Product, StatsSummary, StatusBreakdown, User,
};

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level. The output format
/// is JSON unless `logging.format` is `"text"`.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init_logging(logging: &crate::config::LoggingConfig) -> context_error::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if logging.format.eq_ignore_ascii_case("text") {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    };

    result.map_err(|e| crate::context_error!("Failed to initialize logging: {}", e))
}
