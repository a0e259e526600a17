//! # Configuration Management
//!
//! This module handles loading configuration from environment variables.
//! It uses the "12-factor app" methodology where configuration comes from the environment.
//!
//! ## Environment Variables
//! - `HOST`: Server bind address (default: 127.0.0.1)
//! - `PORT`: Server port (default: 8080)
//! - `DATABASE_URL`: SQLite database connection string
//! - `STATIC_DIR`: Directory served under `/static`
//! - `SESSION_INACTIVITY_HOURS`: Hours of inactivity before a session expires
//! - `COOKIE_SECURE`: Mark the session cookie `Secure` (set to true behind HTTPS)
//! - `BCRYPT_COST`: Work factor for password hashing

use anyhow::Result;
use std::env;

/// Application configuration
///
/// Holds every value needed to run the server. All fields are public so the
/// rest of the crate (and tests) can read or override them directly.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host/IP address to bind to
    /// Examples: "127.0.0.1" (localhost only), "0.0.0.0" (all interfaces)
    pub host: String,

    /// Server port number (1-65535)
    pub port: u16,

    /// SQLite database connection URL
    /// Format: "sqlite:filename.db?mode=rwc", or "sqlite::memory:" for a
    /// throwaway database
    pub database_url: String,

    /// Directory with stylesheets and other static assets
    pub static_dir: String,

    /// Sessions expire after this many hours without a request
    pub session_inactivity_hours: i64,

    /// Whether the session cookie carries the `Secure` attribute
    pub cookie_secure: bool,

    /// bcrypt work factor (4..=31)
    pub bcrypt_cost: u32,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Reads a `.env` file first when one exists, then falls back to
    /// defaults for anything unset. Fails if a numeric or boolean value
    /// cannot be parsed.
    ///
    /// ## Example .env file
    /// ```text
    /// HOST=127.0.0.1
    /// PORT=8080
    /// DATABASE_URL=sqlite:books.db?mode=rwc
    /// STATIC_DIR=static
    /// SESSION_INACTIVITY_HOURS=24
    /// COOKIE_SECURE=false
    /// BCRYPT_COST=12
    /// ```
    pub fn from_env() -> Result<Self> {
        // dotenvy doesn't error if the file is missing
        dotenvy::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),

            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,

            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:books.db?mode=rwc".to_string()),

            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),

            session_inactivity_hours: env::var("SESSION_INACTIVITY_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()?,

            cookie_secure: env::var("COOKIE_SECURE")
                .unwrap_or_else(|_| "false".to_string())
                .parse()?,

            bcrypt_cost: env::var("BCRYPT_COST")
                .unwrap_or_else(|_| bcrypt::DEFAULT_COST.to_string())
                .parse()?,
        })
    }

    /// Configuration for a throwaway in-memory instance
    ///
    /// Used by the test suites: nothing touches the filesystem and password
    /// hashing runs at bcrypt's minimum cost.
    pub fn in_memory() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: "sqlite::memory:".to_string(),
            static_dir: "static".to_string(),
            session_inactivity_hours: 1,
            cookie_secure: false,
            bcrypt_cost: 4,
        }
    }

    /// Get the socket address to bind the server to
    ///
    /// Example: "127.0.0.1:8080"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// True when the database lives only inside the process
    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}
