use crate::auth::service;
use crate::auth::session::SessionContext;
use crate::error::AppResult;
use crate::handlers::forms::CredentialsForm;
use crate::handlers::viewer;
use crate::state::AppState;
use crate::views;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tower_sessions::Session;

// Signup

/// Logged-in visitors have no use for the form and go back home
pub async fn signup_form(State(state): State<AppState>, ctx: SessionContext) -> AppResult<Response> {
    match viewer(&state, &ctx).await? {
        Some(_) => Ok(Redirect::to("/").into_response()),
        None => Ok(Html(views::auth::signup_page(None, "", None)).into_response()),
    }
}

pub async fn signup(
    State(state): State<AppState>,
    ctx: SessionContext,
    Form(form): Form<CredentialsForm>,
) -> AppResult<Response> {
    match service::signup(&state, &form.username, &form.password).await {
        Ok(_) => Ok(Redirect::to("/login").into_response()),
        Err(e) => {
            let message = e.into_form_message()?;
            let viewer = viewer(&state, &ctx).await?;
            Ok(Html(views::auth::signup_page(viewer.as_deref(), &form.username, Some(&message))).into_response())
        }
    }
}

// Login / logout

pub async fn login_form(State(state): State<AppState>, ctx: SessionContext) -> AppResult<Response> {
    match viewer(&state, &ctx).await? {
        Some(_) => Ok(Redirect::to("/").into_response()),
        None => Ok(Html(views::auth::login_page(None, "", None)).into_response()),
    }
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CredentialsForm>,
) -> AppResult<Response> {
    match service::login(&state, &form.username, &form.password).await {
        Ok(ctx) => {
            ctx.store(&session).await?;
            Ok(Redirect::to("/").into_response())
        }
        Err(e) => {
            let message = e.into_form_message()?;
            let current = SessionContext::load(&session).await?;
            let viewer = viewer(&state, &current).await?;
            Ok(Html(views::auth::login_page(viewer.as_deref(), &form.username, Some(&message))).into_response())
        }
    }
}

pub async fn logout(session: Session) -> AppResult<Redirect> {
    let current = SessionContext::load(&session).await?;
    service::logout(current).store(&session).await?;

    Ok(Redirect::to("/"))
}
