//! # Books App
//!
//! A server-rendered catalog of books and authors with username/password
//! authentication.
//!
//! ## Modules
//! - `config`: Configuration from environment variables
//! - `db`: Database operations (users, authors, books)
//! - `auth`: Password hashing, session context and the auth service
//! - `handlers`: HTTP request handlers
//! - `middleware`: Login-required gate
//! - `views`: HTML rendering
//! - `app`: Router assembly

pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod views;
