//! Read queries for the catalog database.

use std::collections::BTreeMap;

use acervo_catalog::{Book, Category};
use rusqlite::{Connection, params};

use crate::operations::OperationError;

const BOOK_COLUMNS: &str =
    "id, title, author, isbn, publisher, category, cover_image, created_at";

/// List every book, newest first.
pub fn list_books(conn: &Connection) -> Result<Vec<Book>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {BOOK_COLUMNS} FROM books ORDER BY id DESC"
    ))?;
    let rows = stmt.query_map([], row_to_book)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Find a single book by ID.
pub fn find_book(conn: &Connection, id: i64) -> Result<Option<Book>, OperationError> {
    let mut stmt = conn.prepare(&format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = ?1"))?;
    let result = stmt.query_row(params![id], row_to_book);
    match result {
        Ok(book) => Ok(Some(book)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ── Stats ───────────────────────────────────────────────────────────────────

/// Summary counts for the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub books: i64,
    pub with_cover: i64,
    pub per_category: BTreeMap<String, i64>,
}

/// Get summary statistics for the catalog.
pub fn catalog_stats(conn: &Connection) -> Result<CatalogStats, OperationError> {
    let books: i64 = conn.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;
    let with_cover: i64 = conn.query_row(
        "SELECT COUNT(*) FROM books WHERE cover_image IS NOT NULL AND length(cover_image) > 0",
        [],
        |row| row.get(0),
    )?;

    let mut stmt = conn.prepare("SELECT category, COUNT(*) FROM books GROUP BY category")?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?;
    let mut per_category = BTreeMap::new();
    for row in rows {
        let (category, count) = row?;
        let label = Category::from_str_loose(&category).label().to_string();
        *per_category.entry(label).or_insert(0) += count;
    }

    Ok(CatalogStats {
        books,
        with_cover,
        per_category,
    })
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_book(row: &rusqlite::Row<'_>) -> rusqlite::Result<Book> {
    let category: String = row.get(5)?;
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        isbn: row.get(3)?,
        publisher: row.get(4)?,
        category: Category::from_str_loose(&category),
        cover_image: row.get(6)?,
        created_at: row.get(7)?,
    })
}
