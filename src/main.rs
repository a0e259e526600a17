//! # Books App Server
//!
//! Entry point: sets up logging, loads configuration, opens the database
//! and serves the catalog over HTTP.

use books_app::app;
use books_app::config::Config;
use books_app::state::AppState;
use tower_sessions::ExpiredDeletion;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main application entry point
///
/// 1. Sets up logging
/// 2. Loads configuration from environment variables
/// 3. Initializes the database and password hasher
/// 4. Starts a background task that deletes expired sessions
/// 5. Builds the router and starts the HTTP server
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default: info level for most crates, debug level for our app
    // Can be overridden with RUST_LOG environment variable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,books_app=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    let app_state = AppState::new(&config).await?;
    tracing::info!("Application state initialized");

    let session_store = app::session_store(&app_state).await?;

    // Expired sessions are only ignored on load; sweep them every 10 minutes
    let deletion_store = session_store.clone();
    tokio::spawn(async move {
        tracing::debug!("Starting expired session cleanup task");
        if let Err(e) = deletion_store
            .continuously_delete_expired(tokio::time::Duration::from_secs(600))
            .await
        {
            tracing::error!("Session cleanup failed: {:?}", e);
        }
    });

    let app = app::router(app_state, session_store, &config);

    let bind_addr = config.bind_address();
    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
