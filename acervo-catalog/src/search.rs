//! Case-insensitive substring search over a book's text fields.

use crate::types::Book;

/// Whether `book` matches `query`.
///
/// Searched fields: title, author, isbn, publisher, and the category's
/// label and English name. Cover bytes and ids are never searched.
/// A blank query matches everything.
pub fn matches(book: &Book, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    matches_lowercase(book, &needle)
}

/// Keep the books matching `query`, preserving input order.
pub fn filter_books(books: &[Book], query: &str) -> Vec<Book> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return books.to_vec();
    }
    books
        .iter()
        .filter(|b| matches_lowercase(b, &needle))
        .cloned()
        .collect()
}

fn matches_lowercase(book: &Book, needle: &str) -> bool {
    let fields = [
        Some(book.title.as_str()),
        Some(book.author.as_str()),
        book.isbn.as_deref(),
        book.publisher.as_deref(),
        Some(book.category.label()),
        Some(book.category.name()),
    ];
    fields
        .into_iter()
        .flatten()
        .any(|f| f.to_lowercase().contains(needle))
}
