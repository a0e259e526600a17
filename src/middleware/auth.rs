use crate::auth::{service, session::SessionContext};
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

/// Only let logged-in users through; everyone else is sent to the login form
pub async fn require_auth(
    State(state): State<AppState>,
    ctx: SessionContext,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match service::current_user(&state, &ctx).await? {
        Some(_) => Ok(next.run(request).await),
        None => {
            tracing::debug!("Redirecting anonymous request for {} to /login", request.uri());
            Ok(Redirect::to("/login").into_response())
        }
    }
}
