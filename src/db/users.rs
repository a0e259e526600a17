use crate::db::models::User;
use crate::error::{AppResult, AuthError, AuthResult};
use sqlx::SqlitePool;

/// Insert a new user
///
/// The UNIQUE constraint on `username` makes this the uniqueness check: a
/// concurrent signup for the same name fails here with `DuplicateUsername`.
pub async fn create_user(pool: &SqlitePool, username: &str, password_hash: &str) -> AuthResult<User> {
    let user = User::new(username.to_string(), password_hash.to_string());

    sqlx::query(
        "INSERT INTO users (id, username, password_hash, created_at)
         VALUES (?, ?, ?, ?)",
    )
    .bind(&user.id)
    .bind(&user.username)
    .bind(&user.password_hash)
    .bind(&user.created_at)
    .execute(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => AuthError::DuplicateUsername,
        _ => AuthError::from(e),
    })?;

    Ok(user)
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

pub async fn count_by_username(pool: &SqlitePool, username: &str) -> AppResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ?")
        .bind(username)
        .fetch_one(pool)
        .await?;

    Ok(count)
}

pub async fn list_all(pool: &SqlitePool) -> AppResult<Vec<User>> {
    let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY username")
        .fetch_all(pool)
        .await?;

    Ok(users)
}
