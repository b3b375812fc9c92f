use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::data::geo::Role;
use crate::data::model::Dimension;
use crate::state::AppState;
use crate::ui::{kpi, plot};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(store) = &state.store else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state inside the loop.
    let options: Vec<(Dimension, Vec<String>)> = Dimension::ALL
        .iter()
        .map(|dim| (*dim, store.distinct_values(*dim).iter().cloned().collect()))
        .collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Hour window ----
            ui.strong("Hour of day");
            let mut min = state.selection.hours.min;
            let mut max = state.selection.hours.max;
            let from = ui.add(Slider::new(&mut min, 0..=23).text("from")).changed();
            let to = ui.add(Slider::new(&mut max, 0..=23).text("to")).changed();
            if from || to {
                state.set_hours(min, max);
            }
            ui.separator();

            // ---- Per-dimension filter widgets (collapsible) ----
            for (dim, values) in &options {
                let selection = state.selection.selection(*dim).clone();
                let covers_all = state
                    .store
                    .as_ref()
                    .is_some_and(|store| state.selection.covers_all(store, *dim));
                let n_selected = values.iter().filter(|v| selection.contains(v)).count();
                let header_text = format!("{dim}  ({n_selected}/{})", values.len());

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(dim.column())
                    .default_open(false)
                    .show(ui, |ui: &mut Ui| {
                        let mut all = covers_all;
                        if ui
                            .checkbox(&mut all, format!("Select all {}", dim.label().to_lowercase()))
                            .changed()
                        {
                            if all {
                                state.select_all(*dim);
                            } else {
                                state.select_none(*dim);
                            }
                        }

                        for value in values {
                            let mut checked = selection.contains(value);
                            let label = if value.is_empty() { "(blank)" } else { value.as_str() };
                            let mut text = RichText::new(label);
                            if *dim == Dimension::Status {
                                text = text.color(state.status_colors.color_for(value));
                            }
                            if ui.checkbox(&mut checked, text).changed() {
                                state.toggle_value(*dim, value);
                            }
                        }
                    });
            }
        });
}

// ---------------------------------------------------------------------------
// Central panel – KPIs, map and charts
// ---------------------------------------------------------------------------

pub fn dashboard(ui: &mut Ui, state: &mut AppState) {
    if state.store.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open an order dataset to begin  (File → Open…)");
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Long Haul Operations");
            kpi::kpi_row(ui, &state.snapshot.metrics);
            ui.separator();

            ui.columns(2, |columns: &mut [Ui]| {
                let [left, right] = columns else {
                    return;
                };

                left.strong("Order density");
                let mut role = state.role;
                left.horizontal(|ui: &mut Ui| {
                    ui.radio_value(&mut role, Role::Pickup, "Pickup");
                    ui.radio_value(&mut role, Role::Dropoff, "Dropoff");
                });
                if role != state.role {
                    state.set_role(role);
                }
                plot::density_map(left, &state.snapshot);

                right.strong("Status breakdown");
                plot::status_chart(right, &state.snapshot.metrics, &state.status_colors);
                if !state.snapshot.metrics.cancel_reason_distribution.is_empty() {
                    right.strong("Cancellation reasons");
                    plot::cancel_reasons(right, &state.snapshot.metrics);
                }
            });

            ui.separator();
            ui.strong("Hourly trend");
            plot::hourly_trend(ui, &state.snapshot.metrics, &state.status_colors);
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let has_data = state.store.is_some();
            if ui
                .add_enabled(has_data, egui::Button::new("Export summary…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(store) = &state.store {
            ui.label(format!(
                "{} orders loaded, {} matching",
                kpi::format_count(store.len()),
                kpi::format_count(state.snapshot.metrics.total)
            ));
            let dropped = store.report().missing_coordinates;
            if dropped > 0 {
                ui.label(
                    RichText::new(format!(
                        "({} without coordinates skipped)",
                        kpi::format_count(dropped)
                    ))
                    .color(Color32::GRAY),
                );
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open order data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export summary")
        .set_file_name("summary.json")
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        if let Err(e) = state.export_summary(&path) {
            log::error!("Export failed: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
