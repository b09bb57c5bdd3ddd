pub mod book_entry;
