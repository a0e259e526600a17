//! # Book Database Operations
//!
//! Books always belong to an author; listings join the author's name in so
//! views never need a second query per row.

use crate::db::models::{Audience, Book, BookListing};
use crate::error::{AppError, AppResult};
use sqlx::SqlitePool;

const LISTING_SELECT: &str = "SELECT b.id, b.title, b.publish_date, b.audience, b.author_id,
            a.name AS author_name, b.created_by
     FROM books b
     JOIN authors a ON a.id = b.author_id";

/// Insert a new book
///
/// The caller is expected to have checked that `author_id` exists; the
/// foreign key rejects it otherwise.
pub async fn create_book(
    pool: &SqlitePool,
    title: &str,
    publish_date: Option<&str>,
    author_id: &str,
    audience: Audience,
    created_by: Option<&str>,
) -> AppResult<Book> {
    let book = Book::new(
        title.to_string(),
        publish_date.map(str::to_string),
        author_id.to_string(),
        audience,
        created_by.map(str::to_string),
    );

    sqlx::query(
        "INSERT INTO books (id, title, publish_date, author_id, audience, created_by, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&book.id)
    .bind(&book.title)
    .bind(&book.publish_date)
    .bind(&book.author_id)
    .bind(book.audience)
    .bind(&book.created_by)
    .bind(&book.created_at)
    .execute(pool)
    .await?;

    Ok(book)
}

/// All books, newest first
pub async fn list_all(pool: &SqlitePool) -> AppResult<Vec<BookListing>> {
    let sql = format!("{} ORDER BY b.created_at DESC, b.title", LISTING_SELECT);
    let books = sqlx::query_as::<_, BookListing>(&sql).fetch_all(pool).await?;

    Ok(books)
}

pub async fn find_by_id(pool: &SqlitePool, book_id: &str) -> AppResult<BookListing> {
    let sql = format!("{} WHERE b.id = ?", LISTING_SELECT);
    let book = sqlx::query_as::<_, BookListing>(&sql)
        .bind(book_id)
        .fetch_one(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::NotFound(format!("Book with id '{}' not found", book_id)),
            _ => AppError::Database(e),
        })?;

    Ok(book)
}

/// Books added by the given user
pub async fn find_by_creator(pool: &SqlitePool, username: &str) -> AppResult<Vec<BookListing>> {
    let sql = format!("{} WHERE b.created_by = ? ORDER BY b.title", LISTING_SELECT);
    let books = sqlx::query_as::<_, BookListing>(&sql)
        .bind(username)
        .fetch_all(pool)
        .await?;

    Ok(books)
}
