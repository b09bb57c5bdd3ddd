//! Insert and delete operations for catalog entries.

use acervo_catalog::{NewBook, ValidationError, timestamp_now};
use rusqlite::{Connection, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Invalid book: {0}")]
    Validation(#[from] ValidationError),
}

/// Insert a new book stamped with the current local time. Returns the generated ID.
pub fn insert_book(conn: &Connection, book: &NewBook) -> Result<i64, OperationError> {
    insert_book_at(conn, book, &timestamp_now())
}

/// Insert a new book with an explicit `created_at` value.
///
/// Text fields are trimmed and blank optional fields are stored as NULL.
pub fn insert_book_at(
    conn: &Connection,
    book: &NewBook,
    created_at: &str,
) -> Result<i64, OperationError> {
    book.validate()?;
    let book = book.normalized();

    conn.execute(
        "INSERT INTO books (title, author, isbn, publisher, category, cover_image, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            book.title,
            book.author,
            book.isbn,
            book.publisher,
            book.category.label(),
            book.cover_image,
            created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Delete a book by ID. Returns `false` (and changes nothing) if no such book exists.
pub fn delete_book(conn: &Connection, id: i64) -> Result<bool, OperationError> {
    let changed = conn.execute("DELETE FROM books WHERE id = ?1", params![id])?;
    Ok(changed > 0)
}
