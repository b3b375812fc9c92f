use eframe::egui::{self, Color32, RichText, Ui};
use num_format::{Locale, ToFormattedString};

use crate::color::CANCELLED_COLOR;
use crate::data::metrics::Metrics;

// ---------------------------------------------------------------------------
// Number formatting for the KPI cards
// ---------------------------------------------------------------------------

/// `12345` → `"12,345"`.
pub fn format_count(n: usize) -> String {
    n.to_formatted_string(&Locale::en)
}

/// One decimal with a percent sign.
pub fn format_percent(rate: f64) -> String {
    format!("{rate:.1}%")
}

/// Monetary amount in millions, e.g. `2_460_000.0` → `"2.5M"`.
pub fn format_millions(amount: f64) -> String {
    format!("{:.1}M", amount / 1e6)
}

// ---------------------------------------------------------------------------
// KPI card row
// ---------------------------------------------------------------------------

pub fn kpi_row(ui: &mut Ui, metrics: &Metrics) {
    let cards = [
        ("Total orders", format_count(metrics.total), None),
        ("Fulfillment rate", format_percent(metrics.fulfillment_rate), None),
        (
            "Cancellation rate",
            format_percent(metrics.cancellation_rate),
            Some(CANCELLED_COLOR),
        ),
        ("Completed GMV", format_millions(metrics.gmv_completed), None),
        (
            "Lost GMV (cancelled)",
            format_millions(metrics.gmv_lost),
            Some(CANCELLED_COLOR),
        ),
    ];

    ui.columns(cards.len(), |columns: &mut [Ui]| {
        for (col, (label, value, color)) in columns.iter_mut().zip(cards) {
            egui::Frame::group(col.style()).show(col, |ui: &mut Ui| {
                ui.set_min_width(ui.available_width());
                ui.label(RichText::new(label).small().color(Color32::GRAY));
                let mut text = RichText::new(value).size(22.0).strong();
                if let Some(c) = color {
                    text = text.color(c);
                }
                ui.label(text);
            });
        }
    });
}
