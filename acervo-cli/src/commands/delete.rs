use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use acervo_lib::{CatalogService, SqliteStore};

use crate::CliError;

/// Delete a book. An unknown id is reported but is not an error.
pub(crate) fn run_delete(service: &CatalogService<SqliteStore>, id: i64) -> Result<(), CliError> {
    let title = service.get(id)?.map(|b| b.title);

    if service.delete(id)? {
        log::info!(
            "{} #{}: {}",
            "Removed".if_supports_color(Stdout, |t| t.red()),
            id,
            title.unwrap_or_default(),
        );
    } else {
        log::warn!("No book with id {}; nothing removed", id);
    }
    Ok(())
}
