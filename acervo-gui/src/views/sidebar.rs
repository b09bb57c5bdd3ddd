use acervo_lib::Category;

use crate::app::AcervoApp;
use crate::state::Status;

const COVER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Render the sidebar: add form, match count, PDF download.
pub fn show(ui: &mut egui::Ui, app: &mut AcervoApp) {
    ui.add_space(8.0);
    ui.heading("Gestão do Acervo");
    ui.separator();
    ui.add_space(4.0);

    add_form(ui, app);

    if app.shows_summary() {
        ui.add_space(16.0);
        ui.separator();
        ui.add_space(8.0);

        ui.label("Livros Encontrados");
        ui.label(
            egui::RichText::new(app.total_matches.to_string())
                .size(28.0)
                .strong(),
        );
        ui.add_space(8.0);

        if ui.button("BAIXAR INVENTÁRIO (PDF)").clicked() {
            app.export_pdf();
        }
    }

    if let Some(status) = &app.status {
        ui.add_space(8.0);
        match status {
            Status::Info(msg) => ui.label(egui::RichText::new(msg).weak()),
            Status::Error(msg) => ui.colored_label(ui.visuals().error_fg_color, msg),
        };
    }
}

fn add_form(ui: &mut egui::Ui, app: &mut AcervoApp) {
    let form = &mut app.form;

    egui::Grid::new("add_form")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Título");
            ui.text_edit_singleline(&mut form.title);
            ui.end_row();

            ui.label("Autor");
            ui.text_edit_singleline(&mut form.author);
            ui.end_row();

            ui.label("ISBN");
            ui.text_edit_singleline(&mut form.isbn);
            ui.end_row();

            ui.label("Editora");
            ui.text_edit_singleline(&mut form.publisher);
            ui.end_row();

            ui.label("Categoria");
            egui::ComboBox::from_id_salt("categoria")
                .selected_text(form.category.label())
                .show_ui(ui, |ui| {
                    for category in Category::ALL {
                        ui.selectable_value(&mut form.category, category, category.label());
                    }
                });
            ui.end_row();

            ui.label("Capa");
            ui.horizontal(|ui| {
                if ui.button("Escolher...").clicked()
                    && let Some(path) = rfd::FileDialog::new()
                        .add_filter("Imagens", COVER_EXTENSIONS)
                        .pick_file()
                {
                    form.cover = Some(path);
                }
                let picked = form
                    .cover
                    .as_deref()
                    .and_then(|p| p.file_name())
                    .and_then(|n| n.to_str());
                match picked {
                    Some(name) => ui.label(name),
                    None => ui.label(egui::RichText::new("Nenhuma imagem").weak()),
                };
            });
            ui.end_row();
        });

    ui.add_space(8.0);
    if ui.button("ADICIONAR AO ACERVO").clicked() {
        app.submit_form();
    }
}
