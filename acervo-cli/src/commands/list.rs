use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use acervo_lib::{Book, CatalogService, Category, SqliteStore};

use super::{book_heading, or_dash, truncate_str};
use crate::CliError;

/// A book as printed by `list --json`; the cover is reported, not dumped.
#[derive(Serialize)]
struct BookJson<'a> {
    #[serde(flatten)]
    book: &'a Book,
    has_cover: bool,
}

pub(crate) fn run_list(
    service: &CatalogService<SqliteStore>,
    search: Option<String>,
    page: usize,
    json: bool,
) -> Result<(), CliError> {
    let query = search.unwrap_or_default();

    if json {
        let books = service.search(&query)?;
        let rows: Vec<BookJson<'_>> = books
            .iter()
            .map(|book| BookJson {
                book,
                has_cover: book.has_cover(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let browse = service.browse(&query, page)?;
    if browse.total_matches == 0 {
        if query.trim().is_empty() {
            log::info!("O acervo está vazio.");
        } else {
            log::info!("No books match '{}'.", query.trim());
        }
        return Ok(());
    }

    log::info!(
        "Total: {} livros | Página {} de {}",
        browse.total_matches.if_supports_color(Stdout, |t| t.bold()),
        browse.number,
        browse.total_pages,
    );
    crate::log_blank();

    for book in &browse.books {
        log::info!(
            "  {:>5}  {}",
            format!("#{}", book.id).if_supports_color(Stdout, |t| t.dimmed()),
            truncate_str(&book_heading(book), 70).if_supports_color(Stdout, |t| t.bold()),
        );
        log::info!(
            "         Editora: {} | ISBN: {}",
            or_dash(book.publisher.as_deref()),
            or_dash(book.isbn.as_deref()),
        );
        log::info!(
            "         Categoria: {} | Data: {}{}",
            book.category.label().if_supports_color(Stdout, |t| t.cyan()),
            book.created_at,
            if book.has_cover() { "" } else { " | Sem capa" },
        );
    }

    Ok(())
}

pub(crate) fn run_categories() {
    log::info!("Categories:");
    for category in Category::ALL {
        log::info!(
            "  {:<12} ({})",
            category.label().if_supports_color(Stdout, |t| t.bold()),
            category.name(),
        );
    }
}
