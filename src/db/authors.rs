use crate::db::models::Author;
use crate::error::{AppError, AppResult};
use sqlx::SqlitePool;

pub async fn create_author(pool: &SqlitePool, name: &str, biography: Option<&str>) -> AppResult<Author> {
    let author = Author::new(name.to_string(), biography.map(str::to_string));

    sqlx::query(
        "INSERT INTO authors (id, name, biography, created_at)
         VALUES (?, ?, ?, ?)",
    )
    .bind(&author.id)
    .bind(&author.name)
    .bind(&author.biography)
    .bind(&author.created_at)
    .execute(pool)
    .await?;

    Ok(author)
}

pub async fn find_by_id(pool: &SqlitePool, author_id: &str) -> AppResult<Author> {
    let author = sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE id = ?")
        .bind(author_id)
        .fetch_one(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::NotFound(format!("Author with id '{}' not found", author_id)),
            _ => AppError::Database(e),
        })?;

    Ok(author)
}

pub async fn list_all(pool: &SqlitePool) -> AppResult<Vec<Author>> {
    let authors = sqlx::query_as::<_, Author>("SELECT * FROM authors ORDER BY name")
        .fetch_all(pool)
        .await?;

    Ok(authors)
}
