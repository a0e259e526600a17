//! # Application State
//!
//! This module defines the shared state that's accessible to all request handlers.
//! In Axum, state is how you share resources (database connections, configuration, etc.)
//! across different parts of your application.
//!
//! ## The State Pattern
//! Instead of creating new database connections for each request, we:
//! 1. Create a connection pool once at startup
//! 2. Store it in AppState
//! 3. Share it across all request handlers
//! 4. Axum clones the state for each request (cheap because we use Arc)

use crate::auth::password::{BcryptHasher, PasswordHasher};
use crate::config::Config;
use crate::db;
use anyhow::Result;
use sqlx::sqlite::SqlitePool;
use std::sync::Arc;

/// Shared application state
///
/// - Database connection pool
/// - Password hasher used by signup and login
///
/// Cloning is cheap: `SqlitePool` is a handle to a shared pool and the hasher
/// sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Password hashing capability
    ///
    /// A trait object so tests and deployments can swap the algorithm or its
    /// cost without touching the auth service.
    pub hasher: Arc<dyn PasswordHasher>,
}

impl AppState {
    /// Initialize application state
    ///
    /// Connects to the database, runs the embedded migrations and builds
    /// a bcrypt hasher with the configured cost.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Database connection fails
    /// - Migrations fail
    pub async fn new(config: &Config) -> Result<Self> {
        let db = db::connect(config).await?;

        sqlx::migrate!("./migrations").run(&db).await?;

        let hasher = Arc::new(BcryptHasher::new(config.bcrypt_cost));

        Ok(AppState { db, hasher })
    }

    /// Build state around an existing pool and hasher
    pub fn with_parts(db: SqlitePool, hasher: Arc<dyn PasswordHasher>) -> Self {
        AppState { db, hasher }
    }
}
