use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::catalog;
use crate::data::model::Field;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Label of the "select all" box and of the value list for a field.
/// Swimmers have no "select all" box.
fn field_labels(field: Field) -> (&'static str, &'static str) {
    match field {
        Field::Swimmer => ("", "Nadadores"),
        Field::Stroke => ("Todos los estilos", "Estilo(s)"),
        Field::Distance => ("Todas las pruebas", "Prueba(s)"),
        Field::Phase => ("Todas las fases", "Fase(s)"),
        Field::Parameter => ("Todos los parámetros", "Parámetro(s)"),
    }
}

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.label(RichText::new("Versión de app").small());
    ui.label(RichText::new(state.config.version).monospace());
    ui.add_space(4.0);

    ui.heading("Filtros");
    ui.separator();

    // Cheap clone of the Arc so we can mutate state inside the loops.
    let Some(dataset) = state.dataset.clone() else {
        ui.label("No dataset loaded.");
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Swimmers: explicit picks only, capped ----
            let max = state.config.max_swimmers;
            let n_selected = state.swimmer_order.len();
            let (_, list_label) = field_labels(Field::Swimmer);
            egui::CollapsingHeader::new(
                RichText::new(format!("{list_label}: hasta {max}  ({n_selected}/{max})")).strong(),
            )
            .id_salt("swimmers")
            .default_open(true)
            .show(ui, |ui: &mut Ui| {
                for swimmer in dataset.distinct(Field::Swimmer) {
                    let mut checked = state.swimmer_order.contains(swimmer);
                    let enabled = checked || state.swimmer_order.len() < max;
                    let text = RichText::new(swimmer).color(state.color_map.color_for(swimmer));
                    if ui
                        .add_enabled(enabled, egui::Checkbox::new(&mut checked, text))
                        .changed()
                    {
                        state.toggle_swimmer(swimmer);
                    }
                }
            });
            ui.separator();

            // ---- Other fields: select-all box or explicit list ----
            for field in [Field::Stroke, Field::Distance, Field::Phase, Field::Parameter] {
                let (all_label, list_label) = field_labels(field);

                let mut all = state.selection.get(field).is_all();
                if ui.checkbox(&mut all, all_label).changed() {
                    state.set_all(field, all);
                }
                if all {
                    ui.add_space(4.0);
                    continue;
                }

                let values = dataset.distinct(field);
                egui::CollapsingHeader::new(RichText::new(format!("{list_label}:")).strong())
                    .id_salt(field.column())
                    .default_open(false)
                    .show(ui, |ui: &mut Ui| {
                        for value in values {
                            let mut checked = state.selection.get(field).contains(value);
                            let label = match field {
                                Field::Parameter => catalog::display_name(value),
                                _ => value.as_str(),
                            };
                            let mut response = ui.checkbox(&mut checked, label);
                            if let Some(cat) = catalog::category(value) {
                                response = response.on_hover_text(cat.title());
                            }
                            if response.changed() {
                                state.toggle_value(field, value);
                            }
                        }
                    });
                ui.add_space(4.0);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows loaded, {} visible",
                ds.len(),
                state.views.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open swim telemetry")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.open_path(&path);
    }
}
