//! PDF catalog export.
//!
//! Renders a sequence of books into a paginated A4 inventory table: cover
//! thumbnail, title/author/category, and ISBN plus creation date.

pub mod cover;
pub mod error;
pub mod layout;
pub mod render;
pub mod text;

pub use error::ReportError;
pub use layout::plan_pages;
pub use render::render_catalog;

/// Suggested download name for an exported report.
pub const REPORT_FILE_NAME: &str = "Acervo.pdf";

/// MIME type of an exported report.
pub const REPORT_MIME_TYPE: &str = "application/pdf";

/// Heading text for a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Bold title at the top of the first page.
    pub title: String,
    /// Shown as a grey "Administradora: ..." line under the title when set.
    pub administrator: Option<String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "INVENTÁRIO DE ACERVO".to_string(),
            administrator: None,
        }
    }
}
