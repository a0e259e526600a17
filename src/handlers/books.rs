//! # Catalog Handlers
//!
//! Homepage, book detail, and the create-author / create-book forms.
//! The create routes sit behind the `require_auth` middleware.

use crate::auth::session::SessionContext;
use crate::db::models::Audience;
use crate::db::{authors, books, users};
use crate::error::{AppError, AppResult};
use crate::handlers::forms::{AuthorForm, BookForm};
use crate::handlers::viewer;
use crate::state::AppState;
use crate::views;
use crate::views::catalog::BookFormValues;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::NaiveDate;

/// GET /
pub async fn home(State(state): State<AppState>, ctx: SessionContext) -> AppResult<Html<String>> {
    let viewer = viewer(&state, &ctx).await?;
    let all_books = books::list_all(&state.db).await?;
    let all_users = users::list_all(&state.db).await?;

    Ok(Html(views::catalog::home_page(viewer.as_deref(), &all_books, &all_users)))
}

/// GET /book/{id}
pub async fn book_detail(
    State(state): State<AppState>,
    ctx: SessionContext,
    Path(book_id): Path<String>,
) -> AppResult<Html<String>> {
    let viewer = viewer(&state, &ctx).await?;
    let book = books::find_by_id(&state.db, &book_id).await?;

    Ok(Html(views::catalog::book_detail_page(viewer.as_deref(), &book)))
}

/// GET /create_author
pub async fn create_author_form(State(state): State<AppState>, ctx: SessionContext) -> AppResult<Html<String>> {
    let viewer = viewer(&state, &ctx).await?;
    Ok(Html(views::catalog::create_author_page(viewer.as_deref(), "", "", None)))
}

/// POST /create_author
pub async fn create_author(
    State(state): State<AppState>,
    ctx: SessionContext,
    Form(form): Form<AuthorForm>,
) -> AppResult<Response> {
    let viewer = viewer(&state, &ctx).await?;
    let name = form.name.trim();

    if name.is_empty() {
        return Ok(Html(views::catalog::create_author_page(
            viewer.as_deref(),
            &form.name,
            &form.biography,
            Some("Name is required."),
        ))
        .into_response());
    }

    let biography = Some(form.biography.trim()).filter(|b| !b.is_empty());
    let author = authors::create_author(&state.db, name, biography).await?;
    tracing::info!("Author {} created by {:?}", author.name, viewer);

    Ok(Redirect::to("/").into_response())
}

/// GET /create_book
pub async fn create_book_form(State(state): State<AppState>, ctx: SessionContext) -> AppResult<Html<String>> {
    let viewer = viewer(&state, &ctx).await?;
    let all_authors = authors::list_all(&state.db).await?;

    Ok(Html(views::catalog::create_book_page(
        viewer.as_deref(),
        &all_authors,
        &BookFormValues::default(),
        None,
    )))
}

/// POST /create_book
pub async fn create_book(
    State(state): State<AppState>,
    ctx: SessionContext,
    Form(form): Form<BookForm>,
) -> AppResult<Response> {
    let viewer = viewer(&state, &ctx).await?;

    let validated = match validate_book(&state, &form).await? {
        Ok(validated) => validated,
        Err(message) => {
            let all_authors = authors::list_all(&state.db).await?;
            let values = BookFormValues {
                title: &form.title,
                publish_date: &form.publish_date,
                author_id: &form.author_id,
                audience: &form.audience,
            };
            return Ok(Html(views::catalog::create_book_page(
                viewer.as_deref(),
                &all_authors,
                &values,
                Some(message),
            ))
            .into_response());
        }
    };

    let book = books::create_book(
        &state.db,
        &validated.title,
        validated.publish_date.as_deref(),
        &validated.author_id,
        validated.audience,
        viewer.as_deref(),
    )
    .await?;
    tracing::info!("Book {} created by {:?}", book.title, viewer);

    Ok(Redirect::to(&format!("/book/{}", book.id)).into_response())
}

struct ValidBook {
    title: String,
    publish_date: Option<String>,
    author_id: String,
    audience: Audience,
}

/// Check a submitted book form
///
/// The outer result carries database failures; the inner one the message
/// to show in the form.
async fn validate_book(state: &AppState, form: &BookForm) -> AppResult<Result<ValidBook, &'static str>> {
    let title = form.title.trim();
    if title.is_empty() {
        return Ok(Err("Title is required."));
    }

    let publish_date = match form.publish_date.trim() {
        "" => None,
        raw => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date.format("%Y-%m-%d").to_string()),
            Err(_) => return Ok(Err("Publish date must be YYYY-MM-DD.")),
        },
    };

    let author_id = form.author_id.trim();
    if author_id.is_empty() {
        return Ok(Err("Please choose an author."));
    }
    match authors::find_by_id(&state.db, author_id).await {
        Ok(_) => {}
        Err(AppError::NotFound(_)) => return Ok(Err("Please choose an author.")),
        Err(e) => return Err(e),
    }

    let audience = match form.audience.trim() {
        "" => Audience::default(),
        raw => match raw.parse::<Audience>() {
            Ok(audience) => audience,
            Err(_) => return Ok(Err("Unknown audience.")),
        },
    };

    Ok(Ok(ValidBook {
        title: title.to_string(),
        publish_date,
        author_id: author_id.to_string(),
        audience,
    }))
}
