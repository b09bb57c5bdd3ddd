use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use acervo_lib::{CatalogService, Category, NewBook, SqliteStore};

use crate::CliError;

/// Cover formats accepted by the add form.
const COVER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

pub(crate) fn run_add(
    service: &CatalogService<SqliteStore>,
    title: String,
    author: String,
    isbn: Option<String>,
    publisher: Option<String>,
    category: Category,
    cover: Option<PathBuf>,
) -> Result<(), CliError> {
    let cover_image = cover.as_deref().map(read_cover).transpose()?;

    let book = NewBook {
        title,
        author,
        isbn,
        publisher,
        category,
        cover_image,
    };
    let id = service.add(&book)?;

    log::info!(
        "{} #{}: {}",
        "Added".if_supports_color(Stdout, |t| t.green()),
        id,
        book.title.trim().if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}

fn read_cover(path: &Path) -> Result<Vec<u8>, CliError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    if !COVER_EXTENSIONS.contains(&ext.as_str()) {
        return Err(CliError::invalid_cover(format!(
            "{} is not a {} file",
            path.display(),
            COVER_EXTENSIONS.join("/"),
        )));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| CliError::invalid_cover(format!("{}: {}", path.display(), e)))?;
    log::debug!("Read {} byte cover from {}", bytes.len(), path.display());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unsupported_cover_extension() {
        let err = read_cover(Path::new("capa.gif")).unwrap_err();
        assert!(matches!(err, CliError::InvalidCover(_)));
        assert!(read_cover(Path::new("capa")).is_err());
    }

    #[test]
    fn missing_cover_file_is_invalid_cover() {
        let err = read_cover(Path::new("/nonexistent/capa.JPG")).unwrap_err();
        assert!(matches!(err, CliError::InvalidCover(_)));
    }
}
