use acervo_lib::{AppSettings, CatalogService, REPORT_FILE_NAME, SqliteStore};

use crate::state::{BookForm, PageEntry, Status};
use crate::views;

/// Main application state.
pub struct AcervoApp {
    pub service: CatalogService<SqliteStore>,

    /// Report heading and administrator, from `settings.toml`.
    pub settings: AppSettings,

    /// Add-book form contents. Kept across failed submits.
    pub form: BookForm,

    /// Search box text.
    pub search: String,

    /// Requested page; clamped by the last reload.
    pub page: usize,

    /// Books on the current page, with decoded-cover flags.
    pub entries: Vec<PageEntry>,
    pub total_pages: usize,
    pub total_matches: usize,

    /// Outcome of the last action, shown under the sidebar.
    pub status: Option<Status>,
}

impl AcervoApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        service: CatalogService<SqliteStore>,
        settings: AppSettings,
    ) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        Self::from_service(service, settings)
    }

    /// App state over `service`, loaded at page 1 with an empty search.
    pub fn from_service(service: CatalogService<SqliteStore>, settings: AppSettings) -> Self {
        let mut app = Self {
            service,
            settings,
            form: BookForm::default(),
            search: String::new(),
            page: 1,
            entries: Vec::new(),
            total_pages: 1,
            total_matches: 0,
            status: None,
        };
        app.reload();
        app
    }

    /// Match count and PDF download are hidden only for an empty catalog.
    pub fn shows_summary(&self) -> bool {
        self.total_matches > 0 || !self.search.trim().is_empty()
    }

    /// Re-run the current search and page against the store.
    pub fn reload(&mut self) {
        match self.service.browse(&self.search, self.page) {
            Ok(browse) => {
                self.page = browse.number;
                self.total_pages = browse.total_pages;
                self.total_matches = browse.total_matches;
                self.entries = browse.books.into_iter().map(PageEntry::new).collect();
            }
            Err(e) => {
                log::error!("Failed to load catalog: {}", e);
                self.status = Some(Status::Error(format!("Erro ao carregar o acervo: {e}")));
            }
        }
    }

    /// New search text: back to the first page.
    pub fn search_changed(&mut self) {
        self.page = 1;
        self.reload();
    }

    /// Add the form's book. Incomplete forms are ignored and left as is.
    pub fn submit_form(&mut self) {
        if !self.form.is_complete() {
            log::debug!("Ignoring add with blank title or author");
            return;
        }

        let book = match self.form.build() {
            Ok(book) => book,
            Err(e) => {
                log::warn!("Cannot read cover: {}", e);
                self.status = Some(Status::Error(format!("Capa inválida: {e}")));
                return;
            }
        };

        match self.service.add(&book) {
            Ok(_) => {
                self.status = Some(Status::Info(format!("Adicionado: {}", book.title.trim())));
                self.form.clear();
                self.reload();
            }
            Err(e) => {
                log::error!("Failed to add book: {}", e);
                self.status = Some(Status::Error(format!("Erro ao adicionar: {e}")));
            }
        }
    }

    pub fn delete(&mut self, id: i64) {
        match self.service.delete(id) {
            Ok(_) => self.reload(),
            Err(e) => {
                log::error!("Failed to remove book #{}: {}", id, e);
                self.status = Some(Status::Error(format!("Erro ao remover: {e}")));
            }
        }
    }

    /// Ask where to save, then write the filtered list as a PDF.
    pub fn export_pdf(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(REPORT_FILE_NAME)
            .add_filter("PDF", &["pdf"])
            .save_file()
        else {
            return;
        };

        let result = self
            .service
            .export_pdf(&self.search, &self.settings.report_options())
            .map_err(|e| e.to_string())
            .and_then(|pdf| std::fs::write(&path, pdf).map_err(|e| e.to_string()));

        self.status = Some(match result {
            Ok(()) => {
                log::info!("Saved inventory to {}", path.display());
                Status::Info(format!("Inventário salvo em {}", path.display()))
            }
            Err(e) => {
                log::error!("Failed to export inventory: {}", e);
                Status::Error(format!("Erro ao exportar: {e}"))
            }
        });
    }
}

impl eframe::App for AcervoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(280.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    views::sidebar::show(ui, self);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            views::library::show(ui, self);
        });
    }
}
