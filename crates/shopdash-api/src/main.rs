//! Main entry point for the `shopdash` admin API server

use shopdash_api::{build_router, state::warn_if_admin_unguarded};
use shopdash_core::{Config, context_error, context_error::Result, init_logging};
use shopdash_database::Database;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (for development convenience)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: .env file not loaded: {e}");
    }

    // Configuration comes first so the log level and format can be applied
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    init_logging(&config.logging)?;

    if let Some(err) = load_error {
        warn!("Failed to load config ({}), using defaults", err);
    }

    info!(
        "Starting shopdash admin API v{} on {}",
        env!("CARGO_PKG_VERSION"),
        config.bind_address()
    );

    // Initialize database connection
    info!("Connecting to database...");
    let database = match Database::new(&config).await {
        Ok(db) => {
            info!("Database connection established");
            db
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(context_error!("Database connection failed: {}", e));
        }
    };

    // Run database migrations
    info!("Running database migrations...");
    if let Err(e) = database.migrate().await {
        error!("Database migration failed: {}", e);
        return Err(context_error!("Migration failed: {}", e));
    }

    // Perform database health check
    if let Err(e) = database.health_check().await {
        error!("Database health check failed: {}", e);
        return Err(context_error!("Database health check failed: {}", e));
    }
    info!("Database ready");

    warn_if_admin_unguarded(&config);

    let app = build_router(config.clone(), database.pool().clone())?
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .map_err(|e| context_error!("Invalid server address: {}", e))?;

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| context_error!("Failed to bind to {}: {}", addr, e))?;

    info!(
        stats = %format!("http://{addr}/api/admin/stats"),
        health = %format!("http://{addr}/health"),
        require_api_key = config.security.require_api_key,
        "Server ready"
    );

    // Start the server with graceful shutdown
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| context_error!("Server error: {}", e))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received terminate signal, shutting down gracefully...");
        },
    }
}
