use acervo_catalog::{Book, NewBook, PAGE_SIZE, filter_books, paginate};
use acervo_db::CatalogStats;
use acervo_report::{ReportOptions, render_catalog};

use crate::store::CatalogStore;
use crate::ServiceError;

/// One page of search results.
#[derive(Debug, Clone, PartialEq)]
pub struct Browse {
    /// Books on the requested page, newest first.
    pub books: Vec<Book>,
    /// Page number after clamping to `[1, total_pages]`.
    pub number: usize,
    pub total_pages: usize,
    /// Books matching the query across all pages.
    pub total_matches: usize,
}

/// Catalog operations over an owned store.
pub struct CatalogService<S> {
    store: S,
}

impl<S: CatalogStore> CatalogService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add a book and return its new id.
    ///
    /// Fails with [`ServiceError::Validation`] (and stores nothing) when
    /// title or author is blank.
    pub fn add(&self, book: &NewBook) -> Result<i64, ServiceError> {
        book.validate()?;
        let id = self
            .store
            .with_connection(|conn| Ok(acervo_db::insert_book(conn, book)?))?;
        log::info!(
            "Added book #{}: {} ({})",
            id,
            book.title.trim(),
            book.author.trim()
        );
        Ok(id)
    }

    /// Every book, newest first.
    pub fn list_all(&self) -> Result<Vec<Book>, ServiceError> {
        let books = self
            .store
            .with_connection(|conn| Ok(acervo_db::list_books(conn)?))?;
        log::debug!("Loaded {} books", books.len());
        Ok(books)
    }

    pub fn get(&self, id: i64) -> Result<Option<Book>, ServiceError> {
        self.store
            .with_connection(|conn| Ok(acervo_db::find_book(conn, id)?))
    }

    /// Delete a book. Returns `false` when the id does not exist.
    pub fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let removed = self
            .store
            .with_connection(|conn| Ok(acervo_db::delete_book(conn, id)?))?;
        if removed {
            log::info!("Removed book #{}", id);
        } else {
            log::debug!("Delete of unknown book #{} ignored", id);
        }
        Ok(removed)
    }

    /// Books matching `query` (case-insensitive substring), newest first.
    pub fn search(&self, query: &str) -> Result<Vec<Book>, ServiceError> {
        let all = self.list_all()?;
        Ok(filter_books(&all, query))
    }

    /// Search, then take page `page` of [`PAGE_SIZE`] books.
    pub fn browse(&self, query: &str, page: usize) -> Result<Browse, ServiceError> {
        let matches = self.search(query)?;
        let slice = paginate(&matches, page, PAGE_SIZE);
        Ok(Browse {
            books: slice.items.to_vec(),
            number: slice.number,
            total_pages: slice.total_pages,
            total_matches: slice.total_items,
        })
    }

    /// Render the books matching `query` as a PDF.
    pub fn export_pdf(
        &self,
        query: &str,
        options: &ReportOptions,
    ) -> Result<Vec<u8>, ServiceError> {
        let books = self.search(query)?;
        let pdf = render_catalog(&books, options)?;
        log::info!("Exported {} books to PDF", books.len());
        Ok(pdf)
    }

    pub fn stats(&self) -> Result<CatalogStats, ServiceError> {
        self.store
            .with_connection(|conn| Ok(acervo_db::catalog_stats(conn)?))
    }
}
