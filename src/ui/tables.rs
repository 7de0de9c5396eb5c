use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::ranking::RankingGroup;
use crate::data::schema::PHASE_ORDER_COLUMN;
use crate::data::views::SwimmerDetail;
use crate::state::AppState;
use crate::ui::plot::ranking_label;

const ROW_HEIGHT: f32 = 20.0;

fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "—".to_string(), |v| format!("{v:.2}"))
}

// ---------------------------------------------------------------------------
// Per-swimmer detail table (second tab)
// ---------------------------------------------------------------------------

pub fn swimmer_table(ui: &mut Ui, state: &AppState, detail: &SwimmerDetail) {
    let extra_columns = state
        .dataset
        .as_ref()
        .map(|ds| ds.extra_columns.clone())
        .unwrap_or_default();

    ui.push_id(("detail", &detail.swimmer), |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(90.0).at_least(60.0)) // Estilo
            .column(Column::initial(70.0).at_least(50.0)) // Distancia
            .column(Column::initial(90.0).at_least(60.0)) // Fase
            .column(Column::initial(80.0).at_least(50.0)) // Fase_Orden
            .column(Column::initial(190.0).at_least(100.0)) // Parámetro
            .column(Column::initial(80.0).at_least(60.0)) // Valor
            .columns(Column::auto(), extra_columns.len())
            .max_scroll_height(state.density.table_height())
            .header(22.0, |mut header| {
                for title in ["Estilo", "Distancia", "Fase", PHASE_ORDER_COLUMN, "Parámetro", "Valor"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
                for title in &extra_columns {
                    header.col(|ui| {
                        ui.strong(title.as_str());
                    });
                }
            })
            .body(|mut body| {
                for row_data in &detail.rows {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.label(row_data.stroke.as_str());
                        });
                        row.col(|ui| {
                            ui.label(row_data.distance.as_str());
                        });
                        row.col(|ui| {
                            ui.label(row_data.phase.label());
                        });
                        row.col(|ui| {
                            ui.label(
                                row_data
                                    .phase
                                    .order()
                                    .map_or_else(String::new, |o| o.to_string()),
                            );
                        });
                        row.col(|ui| {
                            ui.label(row_data.parameter.as_str());
                        });
                        row.col(|ui| {
                            ui.label(format_value(row_data.value));
                        });
                        for cell in &row_data.extra {
                            row.col(|ui| {
                                ui.label(cell.as_str());
                            });
                        }
                    });
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Ranking table (same order as the bar chart)
// ---------------------------------------------------------------------------

pub fn ranking_table(ui: &mut Ui, state: &AppState, group: &RankingGroup) {
    ui.push_id(("ranking", &group.stroke, group.distance.as_str()), |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(30.0)) // Position
            .column(Column::initial(200.0).at_least(100.0)) // Nadador
            .column(Column::initial(120.0).at_least(80.0)) // Tiempo
            .header(22.0, |mut header| {
                for title in ["#", "Nadador", "Tiempo Total (s)"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for (pos, entry) in group.entries.iter().enumerate() {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.label((pos + 1).to_string());
                        });
                        row.col(|ui| {
                            ui.label(ranking_label(state, &entry.swimmer));
                        });
                        row.col(|ui| {
                            ui.label(format_value(Some(entry.best_time)));
                        });
                    });
                }
            });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_render_as_dash() {
        assert_eq!(format_value(None), "—");
        assert_eq!(format_value(Some(59.8)), "59.80");
    }
}
