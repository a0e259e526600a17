//! # Error Handling
//!
//! This module defines the application error types and converts them into
//! HTTP responses.
//!
//! Two layers of errors exist:
//! - [`AppError`]: infrastructure and request failures (database, session,
//!   missing resources). These end the request with an error page.
//! - [`AuthError`]: the outcome of a signup or login attempt. The
//!   user-facing variants are rendered back into the originating form; only
//!   `AuthError::App` escalates to an error page.

use crate::views;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Application-wide error type
///
/// The `#[from]` attributes let `?` convert sqlx and tower-sessions errors
/// into `AppError` automatically.
#[derive(Error, Debug)]
pub enum AppError {
    /// Database errors (SQLx library errors)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Session store errors (loading or saving the session record)
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Resource not found errors (404)
    ///
    /// Used when a requested book or user profile doesn't exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server errors (500)
    ///
    /// Used for unexpected errors such as a failed hashing task
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Convert AppError into an HTTP response
///
/// Internal causes are logged and replaced by a generic message; the
/// messages of client-facing variants are shown as-is.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            AppError::Session(e) => {
                tracing::error!("Session error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Session error".to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
        };

        (status, Html(views::error_page(status, &error_message))).into_response()
    }
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Outcome of a failed signup or login
///
/// The `Display` text of every variant except `App` is the exact message
/// shown above the form.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Username and password are required.")]
    MissingCredentials,

    #[error("That username is taken.")]
    DuplicateUsername,

    #[error("No user with that username. Please try again.")]
    UnknownUser,

    #[error("Password doesn't match. Please try again.")]
    BadPassword,

    /// Storage, session or hashing failure; not the user's fault
    #[error(transparent)]
    App(#[from] AppError),
}

impl AuthError {
    /// The message to show in the form
    ///
    /// Infrastructure failures are handed back as the `AppError` to return.
    pub fn into_form_message(self) -> AppResult<String> {
        match self {
            AuthError::App(e) => Err(e),
            other => Ok(other.to_string()),
        }
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(e: sqlx::Error) -> Self {
        AuthError::App(AppError::Database(e))
    }
}

pub type AuthResult<T> = Result<T, AuthError>;
