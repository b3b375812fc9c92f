use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::color::StatusColors;
use crate::config::DashboardConfig;
use crate::data::filter::FilterSelection;
use crate::data::geo::Role;
use crate::data::loader;
use crate::data::model::{Dimension, LoadReport, OrderStore};
use crate::data::snapshot::DashboardSnapshot;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The store is replaced wholesale on load and never mutated; every filter
/// or role change recomputes `snapshot` in one pass.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a file is opened).
    pub store: Option<OrderStore>,

    /// Where `store` was loaded from.
    pub source_path: Option<PathBuf>,

    /// Current filter choices, "all" still unresolved.
    pub selection: FilterSelection,

    /// Which trip endpoint feeds the density map.
    pub role: Role,

    /// Outputs of the latest recomputation.
    pub snapshot: DashboardSnapshot,

    /// Colour per order status.
    pub status_colors: StatusColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

/// What "Export summary" writes.
#[derive(Serialize)]
struct SummaryExport<'a> {
    source: Option<&'a Path>,
    load_report: &'a LoadReport,
    snapshot: &'a DashboardSnapshot,
}

impl AppState {
    pub fn new(config: &DashboardConfig) -> Self {
        let mut state = AppState {
            role: config.role,
            ..Default::default()
        };
        if let Some(path) = &config.dataset_path {
            state.load_path(path);
        }
        state
    }

    /// Load a dataset. On failure the previous store stays in place.
    pub fn load_path(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(store) => self.set_store(store, Some(path.to_path_buf())),
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Ingest a newly loaded store, reset filters to "all" and recompute.
    pub fn set_store(&mut self, store: OrderStore, source: Option<PathBuf>) {
        self.selection = FilterSelection::default();
        self.status_colors = StatusColors::new(store.distinct_values(Dimension::Status));
        self.store = Some(store);
        self.source_path = source;
        self.status_message = None;
        self.refresh();
    }

    /// Recompute every output from the store and current selection.
    pub fn refresh(&mut self) {
        if let Some(store) = &self.store {
            let filters = self.selection.resolve(store);
            self.snapshot = DashboardSnapshot::compute(store, &filters, self.role);
        }
    }

    pub fn toggle_value(&mut self, dim: Dimension, value: &str) {
        if let Some(store) = &self.store {
            self.selection.toggle(store, dim, value);
        }
        self.refresh();
    }

    pub fn select_all(&mut self, dim: Dimension) {
        self.selection.select_all(dim);
        self.refresh();
    }

    pub fn select_none(&mut self, dim: Dimension) {
        self.selection.select_none(dim);
        self.refresh();
    }

    pub fn set_hours(&mut self, min: i32, max: i32) {
        self.selection.set_hours(min, max);
        self.refresh();
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.refresh();
    }

    /// Write the current snapshot and load report as pretty JSON.
    pub fn export_summary(&self, path: &Path) -> Result<()> {
        let store = self.store.as_ref().context("no dataset loaded")?;
        let export = SummaryExport {
            source: self.source_path.as_deref(),
            load_report: store.report(),
            snapshot: &self.snapshot,
        };
        let text = serde_json::to_string_pretty(&export).context("serializing summary")?;
        std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
        log::info!("Exported summary to {}", path.display());
        Ok(())
    }
}
