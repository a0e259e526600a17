//! # Middleware Module
//!
//! Middleware intercepts HTTP requests before they reach a handler.
//!
//! ## Our Middleware
//! - `auth`: Redirects visitors without a valid session to the login page

pub mod auth;
