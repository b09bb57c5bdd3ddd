use std::io;
use std::path::PathBuf;

use acervo_lib::{Book, Category, NewBook};

// -- Add form --

/// Contents of the add-book form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publisher: String,
    pub category: Category,
    /// Cover picked through the file dialog.
    pub cover: Option<PathBuf>,
}

impl BookForm {
    /// Title and author are both filled in.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.author.trim().is_empty()
    }

    /// Build the new book, reading the cover file if one was picked.
    pub fn build(&self) -> io::Result<NewBook> {
        let mut book = NewBook::new(&self.title, &self.author, self.category)
            .with_isbn(&self.isbn)
            .with_publisher(&self.publisher);
        if let Some(path) = &self.cover {
            book = book.with_cover(std::fs::read(path)?);
        }
        Ok(book.normalized())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// -- Library page --

/// A listed book, with its cover split out for the image loader.
pub struct PageEntry {
    pub book: Book,
    pub cover: Cover,
}

pub enum Cover {
    Missing,
    Unreadable,
    Image(egui::load::Bytes),
}

impl PageEntry {
    pub fn new(mut book: Book) -> Self {
        let cover = match book.cover_image.take() {
            None => Cover::Missing,
            Some(bytes) if bytes.is_empty() => Cover::Missing,
            Some(bytes) => match image::load_from_memory(&bytes) {
                Ok(_) => Cover::Image(egui::load::Bytes::from(bytes)),
                Err(e) => {
                    log::warn!("Book #{} has an unreadable cover: {}", book.id, e);
                    Cover::Unreadable
                }
            },
        };
        Self { book, cover }
    }

    /// Image-loader URI, unique per book.
    pub fn cover_uri(&self) -> String {
        format!("bytes://cover-{}", self.book.id)
    }
}

// -- Status line --

#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Info(String),
    Error(String),
}
