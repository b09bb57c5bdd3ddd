//! SQLite persistence layer for the book catalog.
//!
//! Provides schema creation, insert/delete operations, and read queries
//! backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{OperationError, delete_book, insert_book, insert_book_at};
pub use queries::{CatalogStats, catalog_stats, find_book, list_books};
pub use schema::{SchemaError, open_database, open_memory};
