//! # HTTP Request Handlers
//!
//! This module contains all the HTTP route handlers (controllers).
//!
//! ## Submodules
//! - `health`: Health check endpoint (for monitoring)
//! - `auth`: Signup, login and logout pages
//! - `books`: Homepage, book pages and the create forms
//! - `users`: Profile pages
//! - `forms`: Form bodies posted by the pages
//!
//! ## Handler Pattern
//! Handlers are async functions that:
//! 1. Extract data from the request (path params, form body, session)
//! 2. Call business logic (auth service, database operations)
//! 3. Return rendered HTML or a redirect

pub mod auth;
pub mod books;
pub mod forms;
pub mod health;
pub mod users;

use crate::auth::{service, session::SessionContext};
use crate::error::AppResult;
use crate::state::AppState;

/// Username to show in the navigation bar
///
/// Resolved against the user table so a session pointing at a missing user
/// renders as anonymous.
pub(crate) async fn viewer(state: &AppState, ctx: &SessionContext) -> AppResult<Option<String>> {
    Ok(service::current_user(state, ctx).await?.map(|user| user.username))
}
