use eframe::egui;

use crate::data::aggregate::MutationData;
use crate::data::loader::DataSource;
use crate::state::{AppState, SelectionAction};
use crate::ui::{charts, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct MutationDashboardApp {
    pub state: AppState,
    /// Where the current data came from; target of File → Reload.
    pub source: DataSource,
}

impl MutationDashboardApp {
    pub fn new(data: MutationData, source: DataSource) -> Self {
        Self {
            state: AppState::new(data),
            source,
        }
    }
}

impl eframe::App for MutationDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions: Vec<SelectionAction> = Vec::new();

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &mut self.source);
        });

        // ---- Bottom panel: records behind the bars ----
        egui::TopBottomPanel::bottom("record_panel")
            .default_height(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                table::record_table(ui, &self.state);
            });

        // ---- Central panel: linked charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let avail = ui.available_height();
            let state = &self.state;

            actions.extend(charts::chromosome_chart(ui, state, avail * 0.5));
            actions.extend(panels::chromosome_labels(ui, state));
            ui.separator();
            actions.extend(charts::type_chart(ui, state, avail * 0.25));
            actions.extend(panels::type_labels(ui, state));
            ui.separator();
            actions.extend(panels::clear_buttons(ui));
        });

        for action in actions {
            self.state.apply(action);
        }
    }
}
