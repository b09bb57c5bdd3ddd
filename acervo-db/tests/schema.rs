use acervo_db::open_memory;
use acervo_db::schema::{create_schema, open_database};
use tempfile::TempDir;

#[test]
fn create_schema_in_memory() {
    let conn = open_memory().unwrap();
    let exists: bool = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='books')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(exists);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    // Creating again should not error
    create_schema(&conn).unwrap();
}

#[test]
fn open_database_creates_missing_directories() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("biblioteca.db");
    let conn = open_database(&path).unwrap();
    drop(conn);
    assert!(path.exists());

    // Reopening keeps the schema
    let conn = open_database(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn category_check_rejects_unknown_labels() {
    let conn = open_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO books (title, author, category, created_at) VALUES ('T', 'A', 'Poesia', 'x')",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn blank_title_is_rejected_by_the_table() {
    let conn = open_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO books (title, author, category, created_at) VALUES ('  ', 'A', 'Outros', 'x')",
        [],
    );
    assert!(result.is_err());
}
