mod app;
mod color;
mod data;
mod state;
mod ui;

use app::MutationDashboardApp;
use data::loader::{self, DataSource};
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let source = std::env::args()
        .nth(1)
        .map(|arg| DataSource::from_arg(&arg))
        .unwrap_or_default();

    // The dashboard only opens once the initial data is in.
    let data = match loader::load(&source) {
        Ok(data) => data,
        Err(e) => {
            log::error!("could not load data from {}: {e:#}", source.describe());
            std::process::exit(1);
        }
    };
    log::info!("Loaded {} mutations from {}", data.len(), source.describe());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Mutation Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(MutationDashboardApp::new(data, source)))),
    )
}
