//! Book catalog data model, search, and pagination.
//!
//! This crate defines the catalog types without any database dependencies.
//! Consumers can use these types directly for display or serialization, or
//! pass them to `acervo-db` for persistence.

pub mod pagination;
pub mod search;
pub mod types;

pub use pagination::{PAGE_SIZE, Page, page_count, paginate};
pub use search::{filter_books, matches};
pub use types::*;
