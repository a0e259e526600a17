//! # HTML Views
//!
//! Pages are rendered with `format!` into complete HTML documents. Every
//! piece of user-supplied or message text goes through [`escape_html`].
//!
//! The navigation bar is the session-gated part of every page: anonymous
//! visitors get "Log In" and "Sign Up" links, logged-in users get
//! "You are logged in as {username}" and "Log Out".

pub mod auth;
pub mod catalog;

use axum::http::StatusCode;

/// Escape HTML special characters
pub fn escape_html(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 2);
    for c in input.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Link to a user's profile, with the username percent-encoded as one path segment
pub fn profile_href(username: &str) -> String {
    format!("/profile/{}", urlencoding::encode(username))
}

/// Wrap `body` in the site layout
///
/// `current_username` must come from a resolved user, not straight from the
/// session, so a stale cookie never renders as logged in.
pub fn layout(title: &str, current_username: Option<&str>, body: &str) -> String {
    let nav = match current_username {
        Some(username) => format!(
            r#"<a href="/">Home</a>
    <a href="/create_book">Create Book</a>
    <a href="/create_author">Create Author</a>
    <a href="{link}">You are logged in as {name}</a>
    <a href="/logout">Log Out</a>"#,
            link = profile_href(username),
            name = escape_html(username),
        ),
        None => r#"<a href="/">Home</a>
    <a href="/login">Log In</a>
    <a href="/signup">Sign Up</a>"#
            .to_string(),
    };

    page(title, &nav, body)
}

/// Error page for failed requests
///
/// Rendered without session information, so it only links home.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        r#"<h1>{code} {reason}</h1>
  <p class="error">{message}</p>"#,
        code = status.as_u16(),
        reason = escape_html(status.canonical_reason().unwrap_or("Error")),
        message = escape_html(message),
    );
    page("Error", r#"<a href="/">Home</a>"#, &body)
}

/// Error banner shown above a form, or nothing
pub(crate) fn error_banner(error: Option<&str>) -> String {
    error
        .map(|e| format!(r#"<div class="error">{}</div>"#, escape_html(e)))
        .unwrap_or_default()
}

fn page(title: &str, nav: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en"><head>
<meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title} - Books</title>
<link rel="stylesheet" href="/static/style.css">
</head><body>
<nav>
    {nav}
</nav>
<main>
  {body}
</main>
</body></html>"#,
        title = escape_html(title),
    )
}
