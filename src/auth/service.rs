//! # Auth Service
//!
//! Signup, login, logout and current-user lookup. None of these functions
//! touch the HTTP session directly: login returns the [`SessionContext`] to
//! persist, logout returns the anonymous one, and `current_user` resolves a
//! context against the user table.

use crate::auth::password::PasswordHasher;
use crate::auth::session::SessionContext;
use crate::db::models::User;
use crate::db::users;
use crate::error::{AppError, AppResult, AuthError, AuthResult};
use crate::state::AppState;
use std::sync::Arc;

/// Create a new account
///
/// Does not log the new user in; the caller sends them to the login form.
///
/// ## Errors
/// - `MissingCredentials`: username or password is blank
/// - `DuplicateUsername`: the username is already registered
pub async fn signup(state: &AppState, username: &str, password: &str) -> AuthResult<User> {
    require_credentials(username, password)?;

    let password_hash = hash_blocking(state.hasher.clone(), password.to_string()).await?;
    let user = users::create_user(&state.db, username, &password_hash).await?;

    tracing::info!("Created user {}", user.username);
    Ok(user)
}

/// Check credentials and return the session context for the user
///
/// ## Errors
/// - `UnknownUser`: no account with this username
/// - `BadPassword`: the password doesn't match the stored hash
pub async fn login(state: &AppState, username: &str, password: &str) -> AuthResult<SessionContext> {
    require_credentials(username, password)?;

    let user = users::find_by_username(&state.db, username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login attempt for unknown user {}", username);
            AuthError::UnknownUser
        })?;

    let valid = verify_blocking(state.hasher.clone(), password.to_string(), user.password_hash).await?;
    if !valid {
        tracing::warn!("Invalid password for user {}", user.username);
        return Err(AuthError::BadPassword);
    }

    tracing::info!("User {} logged in", user.username);
    Ok(SessionContext::authenticated(user.username))
}

/// End the session's identity
///
/// Always succeeds, whether or not anyone was logged in.
pub fn logout(current: SessionContext) -> SessionContext {
    if let Some(username) = current.username() {
        tracing::info!("User {} logged out", username);
    }
    SessionContext::anonymous()
}

/// Resolve the user behind a session context
///
/// A username that no longer matches a user row counts as anonymous.
pub async fn current_user(state: &AppState, ctx: &SessionContext) -> AppResult<Option<User>> {
    match ctx.username() {
        Some(username) => users::find_by_username(&state.db, username).await,
        None => Ok(None),
    }
}

/// Whitespace-only input counts as missing; anything else is used exactly as typed
fn require_credentials(username: &str, password: &str) -> AuthResult<()> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    Ok(())
}

// bcrypt is deliberately slow; keep it off the async workers.

async fn hash_blocking(hasher: Arc<dyn PasswordHasher>, password: String) -> AppResult<String> {
    tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))?
}

async fn verify_blocking(
    hasher: Arc<dyn PasswordHasher>,
    password: String,
    digest: String,
) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
        .await
        .map_err(|e| AppError::Internal(format!("Verification task failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    async fn test_state() -> AppState {
        AppState::new(&Config::in_memory()).await.expect("state")
    }

    #[tokio::test]
    async fn signup_persists_user_with_exact_username() {
        let state = test_state().await;
        signup(&state, "test", "test").await.unwrap();

        let user = users::find_by_username(&state.db, "test").await.unwrap().unwrap();
        assert_eq!(user.username, "test");
        assert_ne!(user.password_hash, "test");
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected_once() {
        let state = test_state().await;
        signup(&state, "test", "test").await.unwrap();

        let err = signup(&state, "test", "other").await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateUsername));
        assert_eq!(users::count_by_username(&state.db, "test").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn concurrent_signups_create_one_user() {
        let state = test_state().await;
        let (a, b) = tokio::join!(signup(&state, "race", "a"), signup(&state, "race", "b"));

        assert!(a.is_ok() != b.is_ok());
        assert_eq!(users::count_by_username(&state.db, "race").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn blank_credentials_are_rejected() {
        let state = test_state().await;
        assert!(matches!(signup(&state, "   ", "pw").await, Err(AuthError::MissingCredentials)));
        assert!(matches!(signup(&state, "name", "").await, Err(AuthError::MissingCredentials)));
        assert!(matches!(login(&state, "", "pw").await, Err(AuthError::MissingCredentials)));
        assert!(matches!(signup(&state, "name", "   ").await, Err(AuthError::MissingCredentials)));
        assert!(matches!(login(&state, "name", "   ").await, Err(AuthError::MissingCredentials)));
    }

    #[tokio::test]
    async fn signup_keeps_surrounding_whitespace_in_username() {
        let state = test_state().await;
        signup(&state, " test ", "test").await.unwrap();

        let user = users::find_by_username(&state.db, " test ").await.unwrap().unwrap();
        assert_eq!(user.username, " test ");
        assert!(users::find_by_username(&state.db, "test").await.unwrap().is_none());

        assert_eq!(login(&state, " test ", "test").await.unwrap().username(), Some(" test "));
        assert!(matches!(login(&state, "test", "test").await, Err(AuthError::UnknownUser)));
    }

    #[tokio::test]
    async fn login_with_correct_password_authenticates() {
        let state = test_state().await;
        signup(&state, "test", "test").await.unwrap();

        let ctx = login(&state, "test", "test").await.unwrap();
        assert_eq!(ctx.username(), Some("test"));

        let user = current_user(&state, &ctx).await.unwrap().unwrap();
        assert_eq!(user.username, "test");
    }

    #[tokio::test]
    async fn login_unknown_user_fails() {
        let state = test_state().await;
        let err = login(&state, "test_2", "test_2").await.unwrap_err();
        assert!(matches!(err, AuthError::UnknownUser));
    }

    #[tokio::test]
    async fn login_wrong_password_fails() {
        let state = test_state().await;
        signup(&state, "test", "test").await.unwrap();

        let err = login(&state, "test", "test_2").await.unwrap_err();
        assert!(matches!(err, AuthError::BadPassword));
    }

    #[test]
    fn logout_is_idempotent() {
        assert_eq!(logout(SessionContext::authenticated("test")), SessionContext::anonymous());
        assert_eq!(logout(SessionContext::anonymous()), SessionContext::anonymous());
    }

    /// Toy hasher: the digest is the reversed password
    struct ReversedHasher;

    impl PasswordHasher for ReversedHasher {
        fn hash(&self, plain: &str) -> AppResult<String> {
            Ok(plain.chars().rev().collect())
        }

        fn verify(&self, plain: &str, digest: &str) -> bool {
            plain.chars().rev().collect::<String>() == digest
        }
    }

    #[tokio::test]
    async fn hasher_is_swappable() {
        let base = test_state().await;
        let state = AppState::with_parts(base.db.clone(), Arc::new(ReversedHasher));

        let user = signup(&state, "me1", "password").await.unwrap();
        assert_eq!(user.password_hash, "drowssap");
        assert!(login(&state, "me1", "password").await.is_ok());
        assert!(matches!(login(&state, "me1", "drowssap").await, Err(AuthError::BadPassword)));
    }

    #[tokio::test]
    async fn dangling_session_username_is_anonymous() {
        let state = test_state().await;
        let ctx = SessionContext::authenticated("ghost");
        assert!(current_user(&state, &ctx).await.unwrap().is_none());
        assert!(current_user(&state, &SessionContext::anonymous()).await.unwrap().is_none());
    }
}
