//! Authentication flow over HTTP: signup, login, logout and duplicate users

mod common;

use axum::http::StatusCode;
use books_app::db::users;
use common::{credentials, PASSWORD, USERNAME};

#[tokio::test]
async fn signup_creates_user() {
    let (server, state) = common::spawn().await;

    let response = server.post("/signup").form(&credentials(USERNAME, PASSWORD)).await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login");

    let user = users::find_by_username(&state.db, USERNAME)
        .await
        .unwrap()
        .expect("user should exist after signup");
    assert_eq!(user.username, USERNAME);
}

#[tokio::test]
async fn signup_stores_username_exactly_as_entered() {
    let (server, state) = common::spawn().await;
    common::signup(&server, " test ", PASSWORD).await;

    let user = users::find_by_username(&state.db, " test ")
        .await
        .unwrap()
        .expect("user should be stored with its whitespace");
    assert_eq!(user.username, " test ");
    assert!(users::find_by_username(&state.db, USERNAME).await.unwrap().is_none());
}

#[tokio::test]
async fn signup_existing_user_shows_error() {
    let (server, state) = common::spawn().await;
    common::signup(&server, USERNAME, PASSWORD).await;

    let response = server.post("/signup").form(&credentials(USERNAME, PASSWORD)).await;
    response.assert_status_ok();
    response.assert_text_contains("That username is taken.");

    assert_eq!(users::count_by_username(&state.db, USERNAME).await.unwrap(), 1);
}

#[tokio::test]
async fn signup_does_not_log_in() {
    let (server, _state) = common::spawn().await;
    common::signup(&server, USERNAME, PASSWORD).await;

    let home = server.get("/").await;
    home.assert_text_contains("Log In");
    assert!(!home.text().contains("You are logged in as"));
}

#[tokio::test]
async fn signup_with_blank_fields_shows_error() {
    let (server, state) = common::spawn().await;

    let response = server.post("/signup").form(&credentials("", "")).await;
    response.assert_status_ok();
    response.assert_text_contains("Username and password are required.");
    assert!(users::list_all(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn login_correct_password() {
    let (server, _state) = common::spawn().await;
    common::signup(&server, USERNAME, PASSWORD).await;

    let response = server.post("/login").form(&credentials(USERNAME, PASSWORD)).await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");

    let home = server.get("/").await;
    let text = home.text();
    assert!(!text.contains("Log In"));
    assert!(text.contains("You are logged in as test"));
}

#[tokio::test]
async fn login_nonexistent_user() {
    let (server, _state) = common::spawn().await;

    let response = server.post("/login").form(&credentials("test_2", "test_2")).await;
    response.assert_status_ok();

    let text = response.text();
    assert!(!text.contains("Log Out"));
    assert!(text.contains("No user with that username. Please try again."));
}

#[tokio::test]
async fn login_incorrect_password() {
    let (server, _state) = common::spawn().await;
    common::signup(&server, USERNAME, PASSWORD).await;

    let response = server.post("/login").form(&credentials(USERNAME, "test_2")).await;
    response.assert_status_ok();

    let text = response.text();
    assert!(!text.contains("Log Out"));
    assert!(text.contains("Password doesn&#39;t match. Please try again."));
}

#[tokio::test]
async fn logout() {
    let (server, _state) = common::spawn().await;
    common::signup(&server, USERNAME, PASSWORD).await;
    common::login(&server, USERNAME, PASSWORD).await;

    let response = server.get("/logout").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");

    let home = server.get("/").await;
    home.assert_text_contains("Log In");
    assert!(!home.text().contains("You are logged in as"));
}

#[tokio::test]
async fn logout_without_session_is_harmless() {
    let (server, _state) = common::spawn().await;

    server.get("/logout").await.assert_status(StatusCode::SEE_OTHER);
    server.get("/").await.assert_text_contains("Log In");
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let (server, _state) = common::spawn().await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&serde_json::json!({
        "status": "healthy",
        "service": "books-app"
    }));
}
