//! Catalog service shared by the CLI and GUI front ends.
//!
//! [`CatalogService`] is the only way the front ends touch the catalog: it
//! owns an injected [`CatalogStore`] and exposes add/list/delete, search,
//! paging, and PDF export.

pub mod error;
pub mod service;
pub mod settings;
pub mod store;

pub use acervo_catalog::{Book, Category, NewBook, PAGE_SIZE, ValidationError};
pub use acervo_db::CatalogStats;
pub use acervo_report::{REPORT_FILE_NAME, REPORT_MIME_TYPE, ReportOptions, render_catalog};
pub use error::ServiceError;
pub use service::{Browse, CatalogService};
pub use settings::AppSettings;
pub use store::{CatalogStore, MemoryStore, SqliteStore};
