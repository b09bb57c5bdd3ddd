use crate::state::{Cover, PageEntry};

const COVER_WIDTH: f32 = 100.0;

/// Render one expandable book. Returns true when "Remover" was clicked.
pub fn show(ui: &mut egui::Ui, entry: &PageEntry) -> bool {
    let book = &entry.book;
    let heading = format!("📖 {} - {}", book.title.to_uppercase(), book.author);
    let mut remove = false;

    egui::CollapsingHeader::new(heading)
        .id_salt(("book", book.id))
        .show(ui, |ui| {
            ui.horizontal_top(|ui| {
                match &entry.cover {
                    Cover::Image(bytes) => {
                        ui.add(
                            egui::Image::from_bytes(entry.cover_uri(), bytes.clone())
                                .max_width(COVER_WIDTH),
                        );
                    }
                    Cover::Missing | Cover::Unreadable => {
                        ui.add_sized([COVER_WIDTH, 40.0], egui::Label::new("🖼️ Sem capa"));
                    }
                }

                ui.vertical(|ui| {
                    detail_row(ui, "Editora", book.publisher.as_deref().unwrap_or("-"));
                    detail_row(ui, "ISBN", book.isbn.as_deref().unwrap_or("-"));
                    detail_row(ui, "Categoria", book.category.label());
                    detail_row(ui, "Data", &book.created_at);
                    ui.add_space(6.0);
                    if ui.button("🗑️ Remover").clicked() {
                        remove = true;
                    }
                });
            });
        });

    remove
}

fn detail_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("{label}:")).strong());
        ui.label(value);
    });
}
