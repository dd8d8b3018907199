use eframe::egui::{self, Color32, RichText, Ui};

use crate::color::label_text;
use crate::data::loader::{self, DataSource};
use crate::data::model::{display_type_label, CHROMOSOME_LABELS, MUTATION_TYPE_LABELS};
use crate::state::{AppState, SelectionAction};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, source: &mut DataSource) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state, source);
                ui.close_menu();
            }
            if ui.button("Fetch from ICGC").clicked() {
                load_into(state, source, DataSource::default());
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                let current = source.clone();
                load_into(state, source, current);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} mutations loaded, {} shown",
            state.data.len(),
            state.view.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Clickable axis labels
// ---------------------------------------------------------------------------

pub fn chromosome_labels(ui: &mut Ui, state: &AppState) -> Option<SelectionAction> {
    let mut action = None;
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.label("Chromosome:");
        for (i, label) in CHROMOSOME_LABELS.iter().enumerate() {
            let selected = state.selection.chromosome == Some(i);
            if ui.selectable_label(selected, label_text(label, selected)).clicked() {
                action = Some(SelectionAction::SelectChromosome(i));
            }
        }
    });
    action
}

pub fn type_labels(ui: &mut Ui, state: &AppState) -> Option<SelectionAction> {
    let mut action = None;
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.label("Type:");
        for (i, label) in MUTATION_TYPE_LABELS.iter().enumerate() {
            let selected = state.selection.mutation_type == Some(i);
            let text = label_text(display_type_label(label), selected);
            if ui.selectable_label(selected, text).on_hover_text(*label).clicked() {
                action = Some(SelectionAction::SelectType(i));
            }
        }
    });
    action
}

// ---------------------------------------------------------------------------
// Clear buttons
// ---------------------------------------------------------------------------

pub fn clear_buttons(ui: &mut Ui) -> Option<SelectionAction> {
    let mut action = None;
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Clear chromosome selection").clicked() {
            action = Some(SelectionAction::ClearChromosome);
        }
        if ui.button("Clear type selection").clicked() {
            action = Some(SelectionAction::ClearType);
        }
        if ui.button("Clear all").clicked() {
            action = Some(SelectionAction::ClearAll);
        }
    });
    action
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState, source: &mut DataSource) {
    let file = rfd::FileDialog::new()
        .set_title("Open mutation data")
        .add_filter("Supported files", &["json", "csv", "tsv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV / TSV", &["csv", "tsv"])
        .pick_file();

    if let Some(path) = file {
        load_into(state, source, DataSource::File(path));
    }
}

/// Load `next`; on failure keep the current data and show the error.
fn load_into(state: &mut AppState, source: &mut DataSource, next: DataSource) {
    match loader::load(&next) {
        Ok(data) => {
            log::info!("Loaded {} mutations from {}", data.len(), next.describe());
            state.set_data(data);
            *source = next;
        }
        Err(e) => {
            log::error!("Failed to load {}: {e:#}", next.describe());
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
