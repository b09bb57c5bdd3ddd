use crate::app::AcervoApp;
use crate::widgets;

/// Render the search bar, page selector and the current page of books.
pub fn show(ui: &mut egui::Ui, app: &mut AcervoApp) {
    ui.horizontal(|ui| {
        let search = ui.add(
            egui::TextEdit::singleline(&mut app.search)
                .hint_text("Pesquisar por título, autor, ISBN, editora ou categoria")
                .desired_width(360.0),
        );
        if search.changed() {
            app.search_changed();
        }

        ui.separator();

        ui.label("Página");
        let total = app.total_pages;
        if ui
            .add(egui::DragValue::new(&mut app.page).range(1..=total))
            .changed()
        {
            app.reload();
        }
    });

    ui.label(format!(
        "Total: {} livros | Página {} de {}",
        app.total_matches, app.page, app.total_pages
    ));
    ui.separator();

    if app.entries.is_empty() {
        ui.centered_and_justified(|ui| {
            if app.search.trim().is_empty() {
                ui.label("O acervo está vazio.");
            } else {
                ui.label("Nenhum livro encontrado.");
            }
        });
        return;
    }

    let mut remove = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        for entry in &app.entries {
            if widgets::book_entry::show(ui, entry) {
                remove = Some(entry.book.id);
            }
        }
    });

    if let Some(id) = remove {
        app.delete(id);
    }
}
