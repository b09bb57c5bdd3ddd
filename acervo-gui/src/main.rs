//! acervo GUI
//!
//! Desktop window for the book catalog: add form and PDF export in the
//! sidebar, searchable paged list in the main panel.

mod app;
mod state;
mod views;
mod widgets;

use acervo_lib::settings::{load_settings, resolve_database_path};
use acervo_lib::{CatalogService, SqliteStore};

use app::AcervoApp;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = load_settings();
    let path = resolve_database_path(None, &settings);
    let store = match SqliteStore::open(&path) {
        Ok(store) => store,
        Err(e) => {
            log::error!("Cannot open catalog at {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };
    let service = CatalogService::new(store);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Acervo")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Acervo",
        options,
        Box::new(move |cc| Ok(Box::new(AcervoApp::new(cc, service, settings)))),
    )
}
