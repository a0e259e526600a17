//! Shared setup for the HTTP-level tests
//!
//! Every test gets its own in-memory database and a test server that keeps
//! cookies between requests, like a browser would.

#![allow(dead_code)]

use axum::http::StatusCode;
use axum_test::TestServer;
use books_app::app;
use books_app::config::Config;
use books_app::state::AppState;
use serde::Serialize;

pub const USERNAME: &str = "test";
pub const PASSWORD: &str = "test";

pub async fn spawn() -> (TestServer, AppState) {
    let config = Config::in_memory();
    let state = AppState::new(&config).await.expect("failed to initialize state");
    let router = app::build(state.clone(), &config)
        .await
        .expect("failed to build router");

    let server = TestServer::builder()
        .save_cookies()
        .build(router)
        .expect("failed to start test server");

    (server, state)
}

#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

pub fn credentials<'a>(username: &'a str, password: &'a str) -> Credentials<'a> {
    Credentials { username, password }
}

pub async fn signup(server: &TestServer, username: &str, password: &str) {
    server
        .post("/signup")
        .form(&credentials(username, password))
        .await
        .assert_status(StatusCode::SEE_OTHER);
}

pub async fn login(server: &TestServer, username: &str, password: &str) {
    server
        .post("/login")
        .form(&credentials(username, password))
        .await
        .assert_status(StatusCode::SEE_OTHER);
}
