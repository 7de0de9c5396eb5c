use eframe::egui::{Ui, RichText};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::data::ranking::{RankingGroup, abbreviate_name};
use crate::data::views::ParameterChart;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Comparative line charts (first tab)
// ---------------------------------------------------------------------------

/// Render one line chart per (parameter, stroke), grouped by category.
pub fn comparison_charts(ui: &mut Ui, state: &AppState) {
    if state.views.charts.is_empty() {
        no_data(ui, "No hay datos para la selección actual.");
        return;
    }

    for section in &state.views.charts {
        ui.heading(section.category.title());
        for chart in &section.charts {
            parameter_chart(ui, state, chart);
            ui.add_space(8.0);
        }
    }
}

fn parameter_chart(ui: &mut Ui, state: &AppState, chart: &ParameterChart) {
    ui.label(RichText::new(chart.title()).strong());

    Plot::new(("phase_chart", &chart.parameter, &chart.stroke))
        .height(state.density.chart_height())
        .legend(Legend::default())
        .show_axes([false, true])
        .y_axis_label("Valor")
        .allow_scroll(false)
        .include_x(0.5)
        .include_x(3.5)
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{name}\n{:.2}", value.y)
            }
        })
        .show(ui, |plot_ui| {
            for series in &chart.series {
                let color = state.color_map.color_for(&series.swimmer);
                let points: Vec<[f64; 2]> =
                    series.points.iter().map(|p| [p.x(), p.value]).collect();

                plot_ui.line(
                    Line::new(PlotPoints::from(points.clone()))
                        .name(&series.swimmer)
                        .color(color)
                        .width(2.0),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(&series.swimmer)
                        .color(color)
                        .radius(4.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Ranking bar charts (no swimmer selected)
// ---------------------------------------------------------------------------

/// Swimmer label as shown in the ranking for the current density.
pub fn ranking_label(state: &AppState, swimmer: &str) -> String {
    if state.density.abbreviate_names() {
        abbreviate_name(swimmer)
    } else {
        swimmer.to_string()
    }
}

/// Bar chart of one ranking group, fastest swimmer first.
pub fn ranking_chart(ui: &mut Ui, state: &AppState, group: &RankingGroup) {
    let labels: Vec<String> = group
        .entries
        .iter()
        .map(|e| ranking_label(state, &e.swimmer))
        .collect();

    let bars: Vec<Bar> = group
        .entries
        .iter()
        .zip(&labels)
        .enumerate()
        .map(|(i, (entry, label))| {
            Bar::new(i as f64, entry.best_time)
                .name(label)
                .fill(state.color_map.color_for(&entry.swimmer))
                .width(0.7)
        })
        .collect();

    Plot::new(("ranking_chart", &group.stroke, group.distance.as_str()))
        .height(state.density.ranking_height())
        .y_axis_label("Tiempo Total (s)")
        .allow_scroll(false)
        .allow_drag(false)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Explicit "no data" placeholder.
pub fn no_data(ui: &mut Ui, message: &str) {
    ui.add_space(12.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(message).italics());
    });
    ui.add_space(12.0);
}
