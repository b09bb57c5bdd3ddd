//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use acervo_lib::Category;

#[derive(Parser)]
#[command(name = "acervo")]
#[command(about = "Manage a personal book catalog", long_about = None)]
pub(crate) struct Cli {
    /// Catalog database file (defaults to the saved setting, then the data directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Add a book to the catalog
    Add {
        /// Book title (required)
        #[arg(short, long)]
        title: String,

        /// Author name (required)
        #[arg(short, long)]
        author: String,

        #[arg(long)]
        isbn: Option<String>,

        #[arg(long)]
        publisher: Option<String>,

        /// Category label or English name (e.g., Ficção, fiction)
        #[arg(short, long, default_value = "Outros", value_parser = parse_category)]
        category: Category,

        /// Cover image file (jpg, jpeg or png)
        #[arg(long)]
        cover: Option<PathBuf>,
    },

    /// List books, one page at a time
    List {
        /// Case-insensitive filter over title, author, ISBN, publisher and category
        #[arg(short, long)]
        search: Option<String>,

        /// Page number (clamped to the available pages)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Print all matching books as JSON instead of a page
        #[arg(long)]
        json: bool,
    },

    /// Show one book in detail
    Show {
        id: i64,
    },

    /// Remove a book from the catalog
    Delete {
        id: i64,
    },

    /// Export matching books as a PDF inventory
    Export {
        /// Only export books matching this filter
        #[arg(short, long)]
        search: Option<String>,

        /// Output file (default: ./Acervo.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show catalog statistics
    Stats,

    /// List the available categories
    Categories,

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the settings file path
    Path,

    /// Show the current settings and resolved database
    Show,

    /// Save the catalog database location
    SetDb {
        path: PathBuf,
    },

    /// Set the administrator shown on exported reports (omit to clear)
    SetAdmin {
        name: Option<String>,
    },
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::parse(s).ok_or_else(|| {
        let known: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        format!("unknown category '{}' (expected one of: {})", s, known.join(", "))
    })
}
