use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use acervo_lib::{CatalogService, SqliteStore};

use super::{book_heading, or_dash};
use crate::CliError;

pub(crate) fn run_show(service: &CatalogService<SqliteStore>, id: i64) -> Result<(), CliError> {
    let Some(book) = service.get(id)? else {
        log::warn!("No book with id {}", id);
        return Ok(());
    };

    log::info!("{}", book_heading(&book).if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Id:        {}", book.id);
    log::info!("  Editora:   {}", or_dash(book.publisher.as_deref()));
    log::info!("  ISBN:      {}", or_dash(book.isbn.as_deref()));
    log::info!("  Categoria: {} ({})", book.category.label(), book.category.name());
    log::info!("  Data:      {}", book.created_at);
    match &book.cover_image {
        Some(cover) if !cover.is_empty() => log::info!("  Capa:      {} bytes", cover.len()),
        _ => log::info!("  Capa:      Sem capa"),
    }
    Ok(())
}
