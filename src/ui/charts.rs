use eframe::egui::{self, Align2, RichText, Ui};
use egui_plot::{Bar, BarChart, Plot, PlotPoint, Text};

use crate::color::{self, COUNT_TEXT, COUNT_TEXT_INSIDE};
use crate::data::model::{
    CHROMOSOME_LABELS, MUTATION_TYPE_LABELS, N_CHROMOSOMES, N_MUTATION_TYPES,
};
use crate::state::{AppState, SelectionAction};

/// Bar height transition after a selection change.
pub const TRANSITION_SECS: f32 = 0.5;

const BAR_WIDTH: f64 = 0.7;

/// Headroom above the tallest bar for the count text.
const AXIS_HEADROOM: f64 = 1.15;

/// Bars shorter than this share of the axis get their count drawn above.
const INSIDE_LABEL_MIN_FRACTION: f64 = 0.05;

// ---------------------------------------------------------------------------
// Chromosome chart (vertical bars)
// ---------------------------------------------------------------------------

/// Render counts per chromosome.  Returns a selection when a bar is clicked.
pub fn chromosome_chart(ui: &mut Ui, state: &AppState, height: f32) -> Option<SelectionAction> {
    let counts = state.view.chromosome_counts();
    let y_max = state.chromosome_axis_max().max(1) as f64 * AXIS_HEADROOM;

    let heights: Vec<f64> = counts
        .iter()
        .enumerate()
        .map(|(i, &c)| animated(ui, ("chromosome_bar", i), c))
        .collect();

    let bars: Vec<Bar> = heights
        .iter()
        .enumerate()
        .map(|(i, &h)| {
            Bar::new(i as f64, h)
                .width(BAR_WIDTH)
                .fill(color::CHROMOSOME_BAR)
                .name(format!("chromosome {}", CHROMOSOME_LABELS[i]))
        })
        .collect();

    let resp = Plot::new("chromosome_chart")
        .height(height)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show_x(false)
        .show_y(false)
        .show_axes([false, true])
        .include_x(-0.5)
        .include_x(N_CHROMOSOMES as f64 - 0.5)
        .include_y(0.0)
        .include_y(y_max)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
            for (i, (&count, &h)) in counts.iter().zip(&heights).enumerate() {
                let text = RichText::new(count.to_string()).small();
                let label = if count_fits_inside(h, y_max) {
                    Text::new(PlotPoint::new(i as f64, h), text)
                        .color(COUNT_TEXT_INSIDE)
                        .anchor(Align2::CENTER_TOP)
                } else {
                    Text::new(PlotPoint::new(i as f64, h), text)
                        .color(COUNT_TEXT)
                        .anchor(Align2::CENTER_BOTTOM)
                };
                plot_ui.text(label);
            }
            plot_ui.pointer_coordinate()
        });

    if !resp.response.clicked() {
        return None;
    }
    resp.inner
        .and_then(|p| bar_index_at(p.x, N_CHROMOSOMES))
        .map(SelectionAction::SelectChromosome)
}

// ---------------------------------------------------------------------------
// Mutation type chart (horizontal bars)
// ---------------------------------------------------------------------------

/// Render counts per mutation type, first label on top.
pub fn type_chart(ui: &mut Ui, state: &AppState, height: f32) -> Option<SelectionAction> {
    let counts = state.view.type_counts();
    let x_max = state.type_axis_max().max(1) as f64 * AXIS_HEADROOM;
    let fills = color::type_bar_colors();

    let lengths: Vec<f64> = counts
        .iter()
        .enumerate()
        .map(|(i, &c)| animated(ui, ("type_bar", i), c))
        .collect();

    let bars: Vec<Bar> = lengths
        .iter()
        .enumerate()
        .map(|(i, &len)| {
            Bar::new(type_row(i), len)
                .width(BAR_WIDTH)
                .fill(fills[i])
                .name(MUTATION_TYPE_LABELS[i])
        })
        .collect();

    let resp = Plot::new("type_chart")
        .height(height)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show_x(false)
        .show_y(false)
        .show_axes([true, false])
        .include_y(-0.5)
        .include_y(N_MUTATION_TYPES as f64 - 0.5)
        .include_x(0.0)
        .include_x(x_max)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
            for (i, (&count, &len)) in counts.iter().zip(&lengths).enumerate() {
                let text = RichText::new(format!(" {count}")).small();
                plot_ui.text(
                    Text::new(PlotPoint::new(len, type_row(i)), text)
                        .color(COUNT_TEXT)
                        .anchor(Align2::LEFT_CENTER),
                );
            }
            plot_ui.pointer_coordinate()
        });

    if !resp.response.clicked() {
        return None;
    }
    resp.inner
        .and_then(|p| bar_index_at(p.y, N_MUTATION_TYPES))
        .map(|row| SelectionAction::SelectType(N_MUTATION_TYPES - 1 - row))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Plot row of type `i`; vocabulary order runs top to bottom.
fn type_row(i: usize) -> f64 {
    (N_MUTATION_TYPES - 1 - i) as f64
}

/// Eased bar size.  The first frame for a given id jumps straight to the
/// target, later changes transition over [`TRANSITION_SECS`].
fn animated(ui: &Ui, key: (&'static str, usize), count: usize) -> f64 {
    ui.ctx()
        .animate_value_with_time(egui::Id::new(key), count as f32, TRANSITION_SECS) as f64
}

/// Index of the bar under plot coordinate `coord`, if any.
pub fn bar_index_at(coord: f64, n_bars: usize) -> Option<usize> {
    let idx = coord.round();
    if idx < 0.0 || idx >= n_bars as f64 {
        return None;
    }
    if (coord - idx).abs() > BAR_WIDTH / 2.0 {
        return None;
    }
    Some(idx as usize)
}

/// Whether a bar of height `h` has room for its count inside the bar top.
fn count_fits_inside(h: f64, axis_max: f64) -> bool {
    axis_max > 0.0 && h / axis_max >= INSIDE_LABEL_MIN_FRACTION
}
