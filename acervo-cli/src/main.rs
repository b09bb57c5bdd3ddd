//! acervo CLI
//!
//! Command-line interface for managing a personal book catalog.

mod cli_types;
mod commands;
mod error;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use acervo_lib::settings::{load_settings, resolve_database_path};
use acervo_lib::{CatalogService, SqliteStore};

use cli_types::{Cli, Commands};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = load_settings();
    let db = cli.db;

    match cli.command {
        Commands::Add {
            title,
            author,
            isbn,
            publisher,
            category,
            cover,
        } => commands::add::run_add(
            &open_service(db, &settings)?,
            title,
            author,
            isbn,
            publisher,
            category,
            cover,
        ),
        Commands::List {
            search,
            page,
            json,
        } => commands::list::run_list(&open_service(db, &settings)?, search, page, json),
        Commands::Show { id } => commands::show::run_show(&open_service(db, &settings)?, id),
        Commands::Delete { id } => commands::delete::run_delete(&open_service(db, &settings)?, id),
        Commands::Export { search, output } => commands::export::run_export(
            &open_service(db, &settings)?,
            &settings,
            search,
            output,
        ),
        Commands::Stats => commands::stats::run_stats(&open_service(db, &settings)?),
        Commands::Categories => {
            commands::list::run_categories();
            Ok(())
        }
        Commands::Config { action } => commands::config::run_config(action, settings, db),
    }
}

fn open_service(
    db: Option<PathBuf>,
    settings: &acervo_lib::AppSettings,
) -> Result<CatalogService<SqliteStore>, CliError> {
    let path = resolve_database_path(db, settings);
    log::debug!("Using catalog database {}", path.display());
    Ok(CatalogService::new(SqliteStore::open(path)?))
}

/// Plain messages at info level; level prefix for everything else.
/// `--verbose` adds timestamps and debug output; `RUST_LOG` overrides both.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout)
        .parse_default_env();

    if verbose {
        builder.format_timestamp_secs();
    } else {
        builder.format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        });
    }
    builder.init();
}

pub(crate) fn log_blank() {
    log::info!("");
}
