//! # Form Types
//!
//! Request bodies for the HTML forms, decoded from
//! `application/x-www-form-urlencoded`. Missing fields decode as empty strings
//! so validation errors are shown in the form instead of a bare 422.

use serde::Deserialize;

/// Signup and login form
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AuthorForm {
    pub name: String,
    pub biography: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BookForm {
    pub title: String,
    /// `YYYY-MM-DD`, or empty when unknown
    pub publish_date: String,
    pub author_id: String,
    pub audience: String,
}
