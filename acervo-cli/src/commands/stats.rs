use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use acervo_lib::{CatalogService, Category, SqliteStore};

use crate::CliError;

pub(crate) fn run_stats(service: &CatalogService<SqliteStore>) -> Result<(), CliError> {
    let stats = service.stats()?;

    log::info!("{}", "Catalog Statistics".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Database: {}", service.store().path().display());
    crate::log_blank();
    log::info!("  Books:          {:>8}", stats.books);
    log::info!("  With cover:     {:>8}", stats.with_cover);
    crate::log_blank();
    for category in Category::ALL {
        let count = stats
            .per_category
            .get(category.label())
            .copied()
            .unwrap_or(0);
        log::info!("  {:<15} {:>8}", category.label(), count);
    }

    Ok(())
}
