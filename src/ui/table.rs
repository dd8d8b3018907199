use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::MutationRecord;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Table of the records behind the current bars.
pub fn record_table(ui: &mut Ui, state: &AppState) {
    let records = state.view.records();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(220.0))
        .column(Column::remainder())
        .header(ROW_HEIGHT + 2.0, |mut header| {
            for title in ["ID", "Chromosome", "Start", "End", "Type", "Mutation"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, records.len(), |mut row| {
                let rec: &MutationRecord = &records[row.index()];
                row.col(|ui| {
                    ui.label(&rec.id);
                });
                row.col(|ui| {
                    ui.label(&rec.chromosome);
                });
                row.col(|ui| {
                    ui.label(position_text(rec.start));
                });
                row.col(|ui| {
                    ui.label(position_text(rec.end));
                });
                row.col(|ui| {
                    ui.label(&rec.mutation_type);
                });
                row.col(|ui| {
                    ui.label(&rec.mutation);
                });
            });
        });
}

fn position_text(pos: Option<i64>) -> String {
    pos.map(|p| p.to_string()).unwrap_or_default()
}
