//! # Database Models
//!
//! This module defines the data structures that map to database tables.
//! Timestamps are stored as RFC3339 text and publish dates as `YYYY-MM-DD`
//! text, matching how SQLite keeps them.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// User account
///
/// Created on signup and never modified afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique identifier (UUID v4)
    pub id: String,

    /// Unique username, used for login and profile URLs
    pub username: String,

    /// bcrypt digest of the password (salt included)
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// When the account was created (RFC3339 timestamp)
    pub created_at: String,
}

impl User {
    /// Create a new user with a generated ID and timestamp
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            password_hash,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Author of one or more books
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub biography: Option<String>,
    pub created_at: String,
}

impl Author {
    pub fn new(name: String, biography: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            biography,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Intended readership of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Audience {
    Children,
    YoungAdult,
    Adult,
    #[default]
    All,
}

impl Audience {
    pub const VARIANTS: [Audience; 4] = [
        Audience::Children,
        Audience::YoungAdult,
        Audience::Adult,
        Audience::All,
    ];

    /// Value stored in the database and submitted by forms
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Children => "CHILDREN",
            Audience::YoungAdult => "YOUNG_ADULT",
            Audience::Adult => "ADULT",
            Audience::All => "ALL",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Audience::Children => "Children",
            Audience::YoungAdult => "Young Adult",
            Audience::Adult => "Adult",
            Audience::All => "All",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Audience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Audience::VARIANTS
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| format!("unknown audience '{}'", s))
    }
}

/// A book row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    pub id: String,
    pub title: String,
    /// Publication date as `YYYY-MM-DD`, if known
    pub publish_date: Option<String>,
    pub author_id: String,
    pub audience: Audience,
    /// Username of the user who added the book
    pub created_by: Option<String>,
    pub created_at: String,
}

impl Book {
    pub fn new(
        title: String,
        publish_date: Option<String>,
        author_id: String,
        audience: Audience,
        created_by: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            publish_date,
            author_id,
            audience,
            created_by,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// A book joined with its author's name, as shown in listings
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct BookListing {
    pub id: String,
    pub title: String,
    pub publish_date: Option<String>,
    pub audience: Audience,
    pub author_id: String,
    pub author_name: String,
    pub created_by: Option<String>,
}
