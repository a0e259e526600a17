//! # Router Assembly
//!
//! Builds the complete axum application: routes, the login-required
//! sub-router, session management, static files and request tracing.

use crate::config::Config;
use crate::handlers::auth::*;
use crate::handlers::books::*;
use crate::handlers::health::health_check;
use crate::handlers::users::profile;
use crate::middleware;
use crate::state::AppState;
use axum::{middleware as axum_middleware, routing::get, Router};
use time::Duration;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

/// Create the SQLite-backed session store and its table
///
/// Sessions share the application's pool, so in-memory databases keep
/// users and sessions side by side.
pub async fn session_store(state: &AppState) -> anyhow::Result<SqliteStore> {
    let store = SqliteStore::new(state.db.clone());
    store.migrate().await?;
    Ok(store)
}

/// Assemble the router around an existing session store
pub fn router(state: AppState, store: SqliteStore, config: &Config) -> Router {
    // Sessions expire after a period of inactivity
    let session_layer = SessionManagerLayer::new(store)
        .with_secure(config.cookie_secure)
        .with_expiry(Expiry::OnInactivity(Duration::hours(config.session_inactivity_hours)));

    // Catalog editing requires a logged-in user
    let protected_routes = Router::new()
        .route("/create_author", get(create_author_form).post(create_author))
        .route("/create_book", get(create_book_form).post(create_book))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(home))
        .route("/signup", get(signup_form).post(signup))
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
        .route("/book/{id}", get(book_detail))
        .route("/profile/{username}", get(profile))
        .merge(protected_routes)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        // Layers run outermost-last: tracing wraps sessions wraps the routes
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Session store plus router in one step
pub async fn build(state: AppState, config: &Config) -> anyhow::Result<Router> {
    let store = session_store(&state).await?;
    Ok(router(state, store, config))
}
