//! Data model types for the book catalog.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `created_at` format: day/month/year hour:minute, local time.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Current local time formatted with [`TIMESTAMP_FORMAT`].
pub fn timestamp_now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

// ── Category ────────────────────────────────────────────────────────────────

/// The fixed set of shelf categories.
///
/// Persisted by [`Category::label`]; the English [`Category::name`] is
/// accepted on input and searched alongside the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Psicologia")]
    Psychology,
    #[serde(rename = "Religião")]
    Religion,
    #[serde(rename = "Política")]
    Politics,
    #[serde(rename = "Ficção")]
    Fiction,
    #[serde(rename = "Técnico")]
    Technical,
    #[serde(rename = "Biografia")]
    Biography,
    #[default]
    #[serde(rename = "Outros")]
    Other,
}

impl Category {
    /// All categories in form display order.
    pub const ALL: [Category; 7] = [
        Category::Psychology,
        Category::Religion,
        Category::Politics,
        Category::Fiction,
        Category::Technical,
        Category::Biography,
        Category::Other,
    ];

    /// Stored and displayed label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Psychology => "Psicologia",
            Category::Religion => "Religião",
            Category::Politics => "Política",
            Category::Fiction => "Ficção",
            Category::Technical => "Técnico",
            Category::Biography => "Biografia",
            Category::Other => "Outros",
        }
    }

    /// English name.
    pub fn name(self) -> &'static str {
        match self {
            Category::Psychology => "Psychology",
            Category::Religion => "Religion",
            Category::Politics => "Politics",
            Category::Fiction => "Fiction",
            Category::Technical => "Technical",
            Category::Biography => "Biography",
            Category::Other => "Other",
        }
    }

    /// Parse a label or English name, case-insensitively.
    pub fn parse(s: &str) -> Option<Category> {
        let s = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == s || c.name().to_lowercase() == s)
    }

    /// Parse a stored value, falling back to [`Category::Other`] for anything
    /// outside the set.
    pub fn from_str_loose(s: &str) -> Category {
        Category::parse(s).unwrap_or(Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Book ────────────────────────────────────────────────────────────────────

/// A persisted catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub publisher: Option<String>,
    pub category: Category,
    /// Raw cover image bytes (jpg/png) as uploaded.
    #[serde(skip)]
    pub cover_image: Option<Vec<u8>>,
    /// Creation time in [`TIMESTAMP_FORMAT`].
    pub created_at: String,
}

impl Book {
    pub fn has_cover(&self) -> bool {
        self.cover_image.as_ref().is_some_and(|c| !c.is_empty())
    }
}

// ── NewBook ─────────────────────────────────────────────────────────────────

/// Input for creating a catalog entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub publisher: Option<String>,
    pub category: Category,
    pub cover_image: Option<Vec<u8>>,
}

/// A creation input that cannot be stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            category,
            ..Self::default()
        }
    }

    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    pub fn with_cover(mut self, cover: Vec<u8>) -> Self {
        self.cover_image = Some(cover);
        self
    }

    /// Check that title and author are present (non-blank).
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        if self.author.trim().is_empty() {
            return Err(ValidationError::MissingField("author"));
        }
        Ok(())
    }

    /// Trim text fields; blank optional fields and empty covers become `None`.
    pub fn normalized(&self) -> NewBook {
        NewBook {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            isbn: non_blank(self.isbn.as_deref()),
            publisher: non_blank(self.publisher.as_deref()),
            category: self.category,
            cover_image: self.cover_image.clone().filter(|c| !c.is_empty()),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
