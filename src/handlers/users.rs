//! # User Handlers
//!
//! Public profile pages.

use crate::auth::session::SessionContext;
use crate::db::{books, users};
use crate::error::{AppError, AppResult};
use crate::handlers::viewer;
use crate::state::AppState;
use crate::views;
use axum::{
    extract::{Path, State},
    response::Html,
};

/// Show a user's profile
///
/// ## Route
/// GET /profile/{username}
///
/// Lists the books the user has added. Visible to everyone; unknown
/// usernames get a 404 page.
pub async fn profile(
    State(state): State<AppState>,
    ctx: SessionContext,
    Path(username): Path<String>,
) -> AppResult<Html<String>> {
    let viewer = viewer(&state, &ctx).await?;

    let user = users::find_by_username(&state.db, &username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", username)))?;

    let added = books::find_by_creator(&state.db, &user.username).await?;

    Ok(Html(views::catalog::profile_page(viewer.as_deref(), &user, &added)))
}
