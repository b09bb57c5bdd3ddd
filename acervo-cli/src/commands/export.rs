use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use acervo_lib::{
    AppSettings, CatalogService, REPORT_FILE_NAME, REPORT_MIME_TYPE, ServiceError, SqliteStore,
    render_catalog,
};

use crate::CliError;

pub(crate) fn run_export(
    service: &CatalogService<SqliteStore>,
    settings: &AppSettings,
    search: Option<String>,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let query = search.unwrap_or_default();
    let output = output.unwrap_or_else(|| PathBuf::from(REPORT_FILE_NAME));

    let books = service.search(&query)?;
    let pdf = render_catalog(&books, &settings.report_options()).map_err(ServiceError::from)?;
    log::debug!("Writing {} bytes of {}", pdf.len(), REPORT_MIME_TYPE);
    std::fs::write(&output, &pdf)?;

    log::info!(
        "{} {} books to {}",
        "Exported".if_supports_color(Stdout, |t| t.green()),
        books.len(),
        output.display().if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}
