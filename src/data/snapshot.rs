use serde::Serialize;

use super::filter::{apply, FilterSet};
use super::geo::{extract, focal_point, GeoPoint, Role};
use super::metrics::{summarize, Metrics};
use super::model::OrderStore;

/// Every output of one recomputation cycle, derived from a single
/// [`FilterSet`] so no consumer sees a mix of selections.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardSnapshot {
    pub role: Role,
    pub metrics: Metrics,
    pub density: Vec<GeoPoint>,
    pub focal: Option<GeoPoint>,
}

impl DashboardSnapshot {
    pub fn compute(store: &OrderStore, filters: &FilterSet, role: Role) -> Self {
        let view = apply(store, filters);
        let metrics = summarize(&view);
        let density = extract(&view, role);
        let focal = focal_point(&density);
        log::debug!(
            "recomputed snapshot: {} of {} orders match, {} {} points",
            view.len(),
            store.len(),
            density.len(),
            role
        );
        DashboardSnapshot {
            role,
            metrics,
            density,
            focal,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.total == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::order;
    use crate::data::model::{Dimension, LoadReport};

    #[test]
    fn outputs_agree_on_one_filter_set() {
        let store = OrderStore::from_records(
            vec![
                order("1", "COMPLETED", 9, Some(1000.0)),
                order("1", "CANCELLED", 9, Some(500.0)),
                order("2", "COMPLETED", 14, Some(2000.0)),
            ],
            LoadReport::default(),
        );
        let filters = FilterSet::all(&store).with_values(Dimension::City, ["1"]);
        let snapshot = DashboardSnapshot::compute(&store, &filters, Role::Dropoff);

        assert_eq!(snapshot.metrics.total, 2);
        assert_eq!(snapshot.density.len(), snapshot.metrics.total);
        assert_eq!(snapshot.role, Role::Dropoff);
        assert!(snapshot.focal.is_some());
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn empty_selection_is_representable() {
        let store = OrderStore::from_records(
            vec![order("1", "COMPLETED", 9, Some(1000.0))],
            LoadReport::default(),
        );
        let filters = FilterSet::all(&store).with_values(Dimension::Service, Vec::<String>::new());
        let snapshot = DashboardSnapshot::compute(&store, &filters, Role::Pickup);
        assert!(snapshot.is_empty());
        assert!(snapshot.density.is_empty());
        assert_eq!(snapshot.focal, None);
        assert_eq!(snapshot.metrics, Metrics::default());
    }
}
