//! # Authentication
//!
//! Username/password authentication with server-side sessions.
//!
//! ## Submodules
//! - `password`: the `PasswordHasher` capability and its bcrypt implementation
//! - `session`: `SessionContext`, the identity carried between requests
//! - `service`: signup, login, logout and current-user lookup
//!
//! ## Flow
//! 1. `POST /signup` → `service::signup()` stores the user with a hashed password
//! 2. `POST /login` → `service::login()` verifies the password and returns a
//!    `SessionContext`, which the handler writes into the session
//! 3. Later requests → `SessionContext` is read back from the session cookie
//! 4. `GET /logout` → `service::logout()` returns the anonymous context and
//!    the session is flushed

pub mod password;
pub mod service;
pub mod session;
