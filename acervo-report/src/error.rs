/// Errors that can occur while writing a catalog report.
///
/// Cover data never produces an error; bad covers render as placeholders.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
