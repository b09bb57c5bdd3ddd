use acervo_catalog::{Book, Category, filter_books, matches};

fn book(id: i64, title: &str, author: &str, category: Category) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        isbn: None,
        publisher: None,
        category,
        cover_image: None,
        created_at: "01/02/2026 10:30".to_string(),
    }
}

fn sample() -> Vec<Book> {
    let mut sapiens = book(3, "Sapiens", "Yuval Noah Harari", Category::Other);
    sapiens.publisher = Some("L&PM".to_string());
    sapiens.isbn = Some("978-8525432186".to_string());
    vec![
        sapiens,
        book(2, "O Alquimista", "Paulo Coelho", Category::Fiction),
        book(1, "Rápido e Devagar", "Daniel Kahneman", Category::Psychology),
    ]
}

#[test]
fn empty_query_returns_everything_in_order() {
    let books = sample();
    let found = filter_books(&books, "");
    assert_eq!(found, books);

    let found = filter_books(&books, "   ");
    assert_eq!(found, books);
}

#[test]
fn unmatched_query_returns_nothing() {
    let books = sample();
    assert!(filter_books(&books, "tolkien").is_empty());
}

#[test]
fn matching_is_case_insensitive() {
    let books = sample();
    let found = filter_books(&books, "ALQUIMISTA");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 2);

    let found = filter_books(&books, "kahneman");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 1);
}

#[test]
fn category_matches_label_and_english_name() {
    let books = sample();
    let by_prefix = filter_books(&books, "fic");
    assert_eq!(by_prefix.len(), 1);
    assert_eq!(by_prefix[0].category, Category::Fiction);

    assert_eq!(filter_books(&books, "ficção").len(), 1);
    assert_eq!(filter_books(&books, "Fiction").len(), 1);
    assert_eq!(filter_books(&books, "psych").len(), 1);
}

#[test]
fn optional_fields_are_searched() {
    let books = sample();
    assert_eq!(filter_books(&books, "l&pm")[0].id, 3);
    assert_eq!(filter_books(&books, "8525432186")[0].id, 3);
}

#[test]
fn cover_bytes_and_dates_are_not_searched() {
    let mut b = book(9, "Dom Casmurro", "Machado de Assis", Category::Fiction);
    b.cover_image = Some(b"PNG secret".to_vec());
    assert!(!matches(&b, "secret"));
    assert!(!matches(&b, "2026"));
    assert!(matches(&b, "casmurro"));
}

#[test]
fn filtering_preserves_relative_order() {
    let books = vec![
        book(5, "A", "Same Author", Category::Other),
        book(4, "B", "Other", Category::Other),
        book(3, "C", "Same Author", Category::Other),
    ];
    let ids: Vec<i64> = filter_books(&books, "same").iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![5, 3]);
}
