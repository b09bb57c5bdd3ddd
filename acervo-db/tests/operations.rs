use acervo_catalog::{Category, NewBook, ValidationError};
use acervo_db::*;

fn alquimista() -> NewBook {
    NewBook::new("O Alquimista", "Paulo Coelho", Category::Fiction)
}

#[test]
fn insert_assigns_increasing_ids() {
    let conn = open_memory().unwrap();
    let first = insert_book(&conn, &alquimista()).unwrap();
    let second = insert_book(&conn, &alquimista()).unwrap();
    assert!(second > first);
}

#[test]
fn insert_stores_all_fields() {
    let conn = open_memory().unwrap();
    let input = alquimista()
        .with_isbn("978-8575421130")
        .with_publisher("Paralela")
        .with_cover(vec![1, 2, 3]);
    let id = insert_book_at(&conn, &input, "05/01/2026 14:20").unwrap();

    let book = find_book(&conn, id).unwrap().unwrap();
    assert_eq!(book.title, "O Alquimista");
    assert_eq!(book.author, "Paulo Coelho");
    assert_eq!(book.isbn.as_deref(), Some("978-8575421130"));
    assert_eq!(book.publisher.as_deref(), Some("Paralela"));
    assert_eq!(book.category, Category::Fiction);
    assert_eq!(book.cover_image, Some(vec![1, 2, 3]));
    assert_eq!(book.created_at, "05/01/2026 14:20");
}

#[test]
fn category_is_stored_by_label() {
    let conn = open_memory().unwrap();
    insert_book(&conn, &alquimista()).unwrap();
    let stored: String = conn
        .query_row("SELECT category FROM books", [], |row| row.get(0))
        .unwrap();
    assert_eq!(stored, "Ficção");
}

#[test]
fn insert_stamps_current_time() {
    let conn = open_memory().unwrap();
    let id = insert_book(&conn, &alquimista()).unwrap();
    let book = find_book(&conn, id).unwrap().unwrap();
    // dd/mm/YYYY HH:MM
    assert_eq!(book.created_at.len(), 16);
    assert_eq!(&book.created_at[2..3], "/");
    assert_eq!(&book.created_at[5..6], "/");
    assert_eq!(&book.created_at[10..11], " ");
    assert_eq!(&book.created_at[13..14], ":");
}

#[test]
fn insert_without_title_or_author_creates_nothing() {
    let conn = open_memory().unwrap();

    let err = insert_book(&conn, &NewBook::new("", "Autor", Category::Other)).unwrap_err();
    assert!(matches!(
        err,
        OperationError::Validation(ValidationError::MissingField("title"))
    ));

    let err = insert_book(&conn, &NewBook::new("Título", "   ", Category::Other)).unwrap_err();
    assert!(matches!(
        err,
        OperationError::Validation(ValidationError::MissingField("author"))
    ));

    assert!(list_books(&conn).unwrap().is_empty());
}

#[test]
fn blank_optionals_are_stored_as_null() {
    let conn = open_memory().unwrap();
    let id = insert_book(&conn, &alquimista().with_isbn(" ").with_publisher("")).unwrap();
    let (isbn, publisher): (Option<String>, Option<String>) = conn
        .query_row(
            "SELECT isbn, publisher FROM books WHERE id = ?1",
            [id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(isbn, None);
    assert_eq!(publisher, None);
}

#[test]
fn delete_removes_only_that_book() {
    let conn = open_memory().unwrap();
    let keep = insert_book(&conn, &alquimista()).unwrap();
    let gone = insert_book(
        &conn,
        &NewBook::new("Brida", "Paulo Coelho", Category::Fiction),
    )
    .unwrap();

    assert!(delete_book(&conn, gone).unwrap());

    let ids: Vec<i64> = list_books(&conn).unwrap().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![keep]);
}

#[test]
fn delete_unknown_id_is_a_noop() {
    let conn = open_memory().unwrap();
    insert_book(&conn, &alquimista()).unwrap();
    let before = list_books(&conn).unwrap();

    assert!(!delete_book(&conn, 9999).unwrap());
    assert_eq!(list_books(&conn).unwrap(), before);
}

#[test]
fn deleted_ids_are_not_reused() {
    let conn = open_memory().unwrap();
    let first = insert_book(&conn, &alquimista()).unwrap();
    delete_book(&conn, first).unwrap();
    let second = insert_book(&conn, &alquimista()).unwrap();
    assert_ne!(first, second);
}
