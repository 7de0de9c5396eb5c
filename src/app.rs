use eframe::egui::{self, ScrollArea, Ui};

use crate::state::{ActiveView, AppState};
use crate::ui::{panels, plot, tables};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Tab {
    #[default]
    Charts,
    Details,
}

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SwimAnalystApp {
    pub state: AppState,
    tab: Tab,
}

impl SwimAnalystApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            tab: Tab::default(),
        }
    }

    fn tabs(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui: &mut Ui| {
            ui.selectable_value(&mut self.tab, Tab::Charts, "📊 Gráficos Comparativos");
            ui.selectable_value(&mut self.tab, Tab::Details, "📋 Detalles por Nadador");
        });
        ui.separator();

        match self.tab {
            Tab::Charts => plot::comparison_charts(ui, &self.state),
            Tab::Details => {
                if self.state.active_view() == ActiveView::Ranking {
                    plot::no_data(ui, "Selecciona al menos un nadador para ver los detalles.");
                    return;
                }
                for detail in &self.state.views.details {
                    ui.heading(detail.swimmer.as_str());
                    if detail.rows.is_empty() {
                        plot::no_data(ui, "Sin datos para los filtros seleccionados.");
                    } else {
                        tables::swimmer_table(ui, &self.state, detail);
                    }
                    ui.add_space(8.0);
                }
            }
        }
    }

    fn ranking(&self, ui: &mut Ui) {
        ui.separator();
        ui.heading("🏆 Ranking de Nadadores por Estilo y Prueba (Tiempo Total)");
        if self.state.views.ranking.is_empty() {
            plot::no_data(ui, "No hay tiempos totales para clasificar.");
            return;
        }
        for group in &self.state.views.ranking {
            ui.heading(group.title());
            plot::ranking_chart(ui, &self.state, group);
            tables::ranking_table(ui, &self.state, group);
            ui.add_space(12.0);
        }
    }
}

impl eframe::App for SwimAnalystApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let width = ctx.screen_rect().width();
        let density = self.state.config.density_for(width);
        self.state.set_density(density);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: tabs, then the ranking when nobody is selected ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Phoenix Team Analyst 🐦‍🔥");
            if self.state.dataset.is_none() {
                ui.centered_and_justified(|ui: &mut Ui| {
                    ui.heading("Open a file to view results  (File → Open…)");
                });
                return;
            }

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    self.tabs(ui);
                    if self.state.active_view() == ActiveView::Ranking {
                        self.ranking(ui);
                    }
                });
        });
    }
}
