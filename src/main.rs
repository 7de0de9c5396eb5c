mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::SwimAnalystApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::default();
    let mut state = AppState::new(config);
    let default_path = state.config.default_path.clone();
    if default_path.exists() {
        state.open_path(&default_path);
    } else {
        log::info!("{} not found; waiting for File → Open", default_path.display());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([360.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Phoenix Team Analyst",
        options,
        Box::new(|_cc| Ok(Box::new(SwimAnalystApp::new(state)))),
    )
}
