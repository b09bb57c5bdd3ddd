pub(crate) mod add;
pub(crate) mod config;
pub(crate) mod delete;
pub(crate) mod export;
pub(crate) mod list;
pub(crate) mod show;
pub(crate) mod stats;

use acervo_lib::Book;

/// Truncate a string to a maximum number of characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}

/// "-" for absent optional fields.
pub(crate) fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}

/// Heading line used by `list` and `show`: `TITLE - Author`.
pub(crate) fn book_heading(book: &Book) -> String {
    format!("{} - {}", book.title.to_uppercase(), book.author)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_str("Ficção", 10), "Ficção");
        assert_eq!(truncate_str("Memórias Póstumas", 8), "Memór...");
        assert_eq!(truncate_str("abc", 2), "ab");
    }

    #[test]
    fn or_dash_fills_missing_values() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(Some("Rocco")), "Rocco");
    }
}
