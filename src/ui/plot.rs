use std::collections::BTreeMap;

use eframe::egui::{Color32, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::color::{StatusColors, CANCELLED_COLOR};
use crate::data::metrics::Metrics;
use crate::data::snapshot::DashboardSnapshot;

const MAP_HEIGHT: f32 = 460.0;
const CHART_HEIGHT: f32 = 220.0;

// ---------------------------------------------------------------------------
// Density map
// ---------------------------------------------------------------------------

/// Scatter of density points (x = longitude, y = latitude) with the mean
/// position marked. An empty snapshot shows a warning instead.
pub fn density_map(ui: &mut Ui, snapshot: &DashboardSnapshot) {
    let Some(focal) = snapshot.focal else {
        ui.colored_label(Color32::YELLOW, "No data to display on the map.");
        return;
    };

    let points: PlotPoints = snapshot.density.iter().map(|p| [p.lng, p.lat]).collect();
    let centre: PlotPoints = std::iter::once([focal.lng, focal.lat]).collect();

    Plot::new("density_map")
        .legend(Legend::default())
        .height(MAP_HEIGHT)
        .data_aspect(1.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(points)
                    .radius(2.5)
                    .color(Color32::from_rgba_unmultiplied(0xEF, 0x55, 0x3B, 90))
                    .name(format!("{} ({})", snapshot.role, snapshot.density.len())),
            );
            plot_ui.points(
                Points::new(centre)
                    .radius(6.0)
                    .shape(MarkerShape::Cross)
                    .color(Color32::BLACK)
                    .name("Centre"),
            );
        });
}

// ---------------------------------------------------------------------------
// Status and cancellation breakdowns
// ---------------------------------------------------------------------------

pub fn status_chart(ui: &mut Ui, metrics: &Metrics, colors: &StatusColors) {
    Plot::new("status_distribution")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .show_x(false)
        .allow_drag(false)
        .allow_scroll(false)
        .y_axis_label("Orders")
        .show(ui, |plot_ui| {
            for (i, (status, count)) in metrics.status_distribution.iter().enumerate() {
                let color = colors.color_for(status);
                let bar = Bar::new(i as f64, *count as f64)
                    .name(status)
                    .fill(color)
                    .width(0.7);
                plot_ui.bar_chart(BarChart::new(vec![bar]).color(color).name(status));
            }
        });
}

/// Bar chart plus table of cancellation reasons.
pub fn cancel_reasons(ui: &mut Ui, metrics: &Metrics) {
    let reasons = &metrics.cancel_reason_distribution;
    let bars: Vec<Bar> = reasons
        .iter()
        .enumerate()
        .map(|(i, (reason, count))| Bar::new(i as f64, *count as f64).name(reason).width(0.7))
        .collect();

    Plot::new("cancel_reasons")
        .height(CHART_HEIGHT)
        .show_x(false)
        .allow_drag(false)
        .allow_scroll(false)
        .y_axis_label("Cancelled orders")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(CANCELLED_COLOR).name("Cancel reasons"));
        });

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::remainder())
        .column(Column::auto())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Reason");
            });
            header.col(|ui| {
                ui.strong("Count");
            });
        })
        .body(|mut body| {
            for (reason, count) in reasons {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(if reason.is_empty() { "(blank)" } else { reason.as_str() });
                    });
                    row.col(|ui| {
                        ui.label(count.to_string());
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Hourly trend
// ---------------------------------------------------------------------------

/// One line per status over the hours present in the view.
pub fn hourly_trend(ui: &mut Ui, metrics: &Metrics, colors: &StatusColors) {
    let mut series: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for bucket in &metrics.hourly_status_trend {
        series
            .entry(bucket.status.as_str())
            .or_default()
            .push([bucket.hour as f64, bucket.count as f64]);
    }

    Plot::new("hourly_trend")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .x_axis_label("Hour")
        .y_axis_label("Orders")
        .show(ui, |plot_ui| {
            for (status, points) in series {
                let color = colors.color_for(status);
                let markers: PlotPoints = points.iter().copied().collect();
                let line: PlotPoints = points.into_iter().collect();
                plot_ui.line(Line::new(line).name(status).color(color).width(2.0));
                plot_ui.points(Points::new(markers).radius(3.0).color(color).name(status));
            }
        });
}
