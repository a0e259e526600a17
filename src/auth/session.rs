//! # Session Context
//!
//! The logged-in identity is carried as an explicit [`SessionContext`]
//! value. Handlers load it from the tower-sessions [`Session`] at the start of
//! a request, hand it to the auth service, and write back whatever context
//! the service returns.

use crate::error::AppResult;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use tower_sessions::Session;

/// Key under which the username is stored in the session record
pub const SESSION_USERNAME_KEY: &str = "username";

/// Identity attached to the current request, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    username: Option<String>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self { username: None }
    }

    pub fn authenticated(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    /// Read the identity stored in `session`
    pub async fn load(session: &Session) -> AppResult<Self> {
        let username: Option<String> = session.get(SESSION_USERNAME_KEY).await?;
        Ok(Self { username })
    }

    /// Persist this context into `session`
    ///
    /// Logging in rotates the session id before storing the username; an
    /// anonymous context flushes the whole session.
    pub async fn store(&self, session: &Session) -> AppResult<()> {
        match &self.username {
            Some(username) => {
                session.cycle_id().await?;
                session.insert(SESSION_USERNAME_KEY, username).await?;
            }
            None => session.flush().await?,
        }
        Ok(())
    }
}

/// Extract the context straight from the request's session
///
/// Requires the `SessionManagerLayer` to be installed.
impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        SessionContext::load(&session).await.map_err(|e| {
            tracing::error!("Failed to load session: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Session error")
        })
    }
}
