use eframe::egui::{Color32, RichText};
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::N_MUTATION_TYPES;

/// Fill of the chromosome bars.
pub const CHROMOSOME_BAR: Color32 = Color32::from_rgb(70, 130, 180);

/// Text colour of the selected axis label.
pub const SELECTED_LABEL: Color32 = Color32::RED;

/// Count text that does not fit inside its bar.
pub const COUNT_TEXT: Color32 = Color32::GRAY;

/// Count text drawn inside the top of a bar.
pub const COUNT_TEXT_INSIDE: Color32 = Color32::WHITE;

/// Axis label text, red when selected.
pub fn label_text(label: &str, selected: bool) -> RichText {
    let text = RichText::new(label);
    if selected {
        text.color(SELECTED_LABEL).strong()
    } else {
        text
    }
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.55, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// One fill per mutation type, in vocabulary order.
pub fn type_bar_colors() -> [Color32; N_MUTATION_TYPES] {
    let mut out = [CHROMOSOME_BAR; N_MUTATION_TYPES];
    for (slot, c) in out.iter_mut().zip(generate_palette(N_MUTATION_TYPES)) {
        *slot = c;
    }
    out
}
