//! # Database Module
//!
//! This module organizes all database-related code into submodules:
//! - `models`: Data structures (User, Author, Book, Audience)
//! - `users`: CRUD operations for users
//! - `authors`: CRUD operations for authors
//! - `books`: CRUD operations for books

pub mod authors;
pub mod books;
pub mod models;
pub mod users;

use crate::config::Config;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Open the connection pool described by `config`
///
/// Every SQLite `:memory:` connection is its own database, so in-memory
/// pools are pinned to one connection that is never closed or recycled.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.foreign_keys(true);

    let pool = if config.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new().connect_with(options).await?
    };

    tracing::debug!("Connected to {}", config.database_url);
    Ok(pool)
}
