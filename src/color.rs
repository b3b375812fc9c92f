use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::OrderStatus;

pub const COMPLETED_COLOR: Color32 = Color32::from_rgb(0x63, 0x6E, 0xFA);
pub const CANCELLED_COLOR: Color32 = Color32::from_rgb(0xEF, 0x55, 0x3B);

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
            // offset keeps the first hue away from the fixed cancelled red
            let hue = 40.0 + (i as f32 / n as f32) * 300.0;
            let hsl = Hsl::new(hue, 0.65, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: order status → Color32
// ---------------------------------------------------------------------------

/// Fixed colours for completed/cancelled, generated ones for anything else.
#[derive(Debug, Clone)]
pub struct StatusColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl StatusColors {
    /// Build the mapping from the distinct status values of a store.
    pub fn new<'a>(statuses: impl IntoIterator<Item = &'a String>) -> Self {
        let others: Vec<&String> = statuses
            .into_iter()
            .filter(|s| matches!(OrderStatus::parse(s), OrderStatus::Other(_)))
            .collect();
        let palette = generate_palette(others.len());

        let mut mapping: BTreeMap<String, Color32> = others
            .into_iter()
            .zip(palette)
            .map(|(s, c)| (s.clone(), c))
            .collect();
        mapping.insert(OrderStatus::Completed.to_string(), COMPLETED_COLOR);
        mapping.insert(OrderStatus::Cancelled.to_string(), CANCELLED_COLOR);

        StatusColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, status: &str) -> Color32 {
        self.mapping
            .get(status)
            .copied()
            .unwrap_or(self.default_color)
    }
}

impl Default for StatusColors {
    fn default() -> Self {
        StatusColors::new(std::iter::empty())
    }
}
