use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::model::{Dimension, OrderRecord, OrderStore};

// ---------------------------------------------------------------------------
// Hour range
// ---------------------------------------------------------------------------

/// Inclusive `[min, max]` window over `hour_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourRange {
    pub min: i32,
    pub max: i32,
}

impl HourRange {
    pub const FULL_DAY: HourRange = HourRange { min: 0, max: 23 };

    pub fn new(min: i32, max: i32) -> Self {
        HourRange { min, max }
    }

    pub fn contains(&self, hour: i32) -> bool {
        self.min <= hour && hour <= self.max
    }
}

impl Default for HourRange {
    fn default() -> Self {
        HourRange::FULL_DAY
    }
}

// ---------------------------------------------------------------------------
// FilterSet – fully explicit selection, the only input of `apply`
// ---------------------------------------------------------------------------

/// Explicit per-dimension value sets plus an hour range.
///
/// A dimension that is absent or has an empty set matches nothing: the
/// dimensions are combined with a strict AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub values: BTreeMap<Dimension, BTreeSet<String>>,
    pub hours: HourRange,
}

impl FilterSet {
    /// Every currently-known value selected and the whole day in range.
    pub fn all(store: &OrderStore) -> Self {
        FilterSelection::default().resolve(store)
    }

    pub fn with_values<I, S>(mut self, dim: Dimension, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values
            .insert(dim, values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_hours(mut self, hours: HourRange) -> Self {
        self.hours = hours;
        self
    }

    /// Whether `record` satisfies every dimension.
    pub fn matches(&self, record: &OrderRecord) -> bool {
        if !self.hours.contains(record.hour_time) {
            return false;
        }
        Dimension::ALL.iter().all(|dim| {
            self.values
                .get(dim)
                .is_some_and(|selected| selected.contains(dim.value_of(record)))
        })
    }
}

// ---------------------------------------------------------------------------
// FilterSelection – what the side panel edits
// ---------------------------------------------------------------------------

/// One dimension's choice as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Whatever values the store currently holds.
    #[default]
    All,
    Only(BTreeSet<String>),
}

impl Selection {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn contains(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(set) => set.contains(value),
        }
    }
}

/// Per-dimension selections that may still say "all".
///
/// [`FilterSelection::resolve`] is the boundary where "all" becomes the
/// concrete distinct-value set of the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    selections: BTreeMap<Dimension, Selection>,
    pub hours: HourRange,
}

impl FilterSelection {
    pub fn selection(&self, dim: Dimension) -> &Selection {
        const ALL: &Selection = &Selection::All;
        self.selections.get(&dim).unwrap_or(ALL)
    }

    /// True when every known value of `dim` is selected, whether through
    /// "all" or an explicit set that happens to list them all.
    pub fn covers_all(&self, store: &OrderStore, dim: Dimension) -> bool {
        match self.selection(dim) {
            Selection::All => true,
            Selection::Only(set) => store.distinct_values(dim).is_subset(set),
        }
    }

    pub fn select_all(&mut self, dim: Dimension) {
        self.selections.insert(dim, Selection::All);
    }

    pub fn select_none(&mut self, dim: Dimension) {
        self.selections.insert(dim, Selection::Only(BTreeSet::new()));
    }

    /// Flip one value. Unchecking a value while "all" is active narrows
    /// the selection to every other known value.
    pub fn toggle(&mut self, store: &OrderStore, dim: Dimension, value: &str) {
        let mut set = match self.selection(dim) {
            Selection::All => store.distinct_values(dim).clone(),
            Selection::Only(set) => set.clone(),
        };
        if !set.remove(value) {
            set.insert(value.to_string());
        }
        self.selections.insert(dim, Selection::Only(set));
    }

    /// Set the hour window, swapping the bounds if they arrive reversed.
    pub fn set_hours(&mut self, a: i32, b: i32) {
        self.hours = HourRange::new(a.min(b), a.max(b));
    }

    pub fn resolve(&self, store: &OrderStore) -> FilterSet {
        let values = Dimension::ALL
            .iter()
            .map(|dim| {
                let set = match self.selection(*dim) {
                    Selection::All => store.distinct_values(*dim).clone(),
                    Selection::Only(set) => set.clone(),
                };
                (*dim, set)
            })
            .collect();
        FilterSet {
            values,
            hours: self.hours,
        }
    }
}

// ---------------------------------------------------------------------------
// Filter engine
// ---------------------------------------------------------------------------

/// Records of a store that satisfy one [`FilterSet`], in load order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    records: Vec<&'a OrderRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn records(&self) -> &[&'a OrderRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a OrderRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Single linear pass over the store; keeps records matching every dimension.
pub fn apply<'a>(store: &'a OrderStore, filters: &FilterSet) -> FilteredView<'a> {
    let records = store
        .records()
        .iter()
        .filter(|rec| filters.matches(rec))
        .collect();
    FilteredView { records }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::order;
    use crate::data::model::LoadReport;

    fn sample_store() -> OrderStore {
        let mut c = order("2", "COMPLETED", 14, Some(2000.0));
        c.order_distance = "20-50km".to_string();
        OrderStore::from_records(
            vec![
                order("1", "COMPLETED", 9, Some(1000.0)),
                order("1", "CANCELLED", 9, Some(500.0)),
                c,
            ],
            LoadReport::default(),
        )
    }

    fn ids<'a>(view: &FilteredView<'a>) -> Vec<&'a str> {
        view.iter().map(|r| r.order_id.as_str()).collect()
    }

    #[test]
    fn all_selected_over_full_day_keeps_every_record() {
        let store = sample_store();
        let view = apply(&store, &FilterSet::all(&store));
        assert_eq!(view.len(), store.len());
        let expected: Vec<&OrderRecord> = store.records().iter().collect();
        assert_eq!(view.records(), expected.as_slice());
    }

    #[test]
    fn empty_explicit_list_matches_nothing() {
        let store = sample_store();
        for dim in Dimension::ALL {
            let filters = FilterSet::all(&store).with_values(dim, Vec::<String>::new());
            assert!(apply(&store, &filters).is_empty(), "{dim} should exclude all");
        }
    }

    #[test]
    fn missing_dimension_matches_nothing() {
        let store = sample_store();
        let mut filters = FilterSet::all(&store);
        filters.values.remove(&Dimension::Service);
        assert!(apply(&store, &filters).is_empty());
    }

    #[test]
    fn dimensions_combine_with_and() {
        let store = sample_store();
        let filters = FilterSet::all(&store)
            .with_values(Dimension::City, ["1"])
            .with_values(Dimension::Status, ["COMPLETED", "CANCELLED"]);
        let view = apply(&store, &filters);
        assert_eq!(ids(&view), vec!["1-COMPLETED-9", "1-CANCELLED-9"]);

        let narrower = filters.with_values(Dimension::Status, ["CANCELLED"]);
        assert_eq!(ids(&apply(&store, &narrower)), vec!["1-CANCELLED-9"]);
    }

    #[test]
    fn hour_range_is_inclusive() {
        let store = sample_store();
        let filters = FilterSet::all(&store).with_hours(HourRange::new(14, 14));
        assert_eq!(ids(&apply(&store, &filters)), vec!["2-COMPLETED-14"]);

        let none = FilterSet::all(&store).with_hours(HourRange::new(10, 13));
        assert!(apply(&store, &none).is_empty());
    }

    #[test]
    fn applying_twice_is_identical() {
        let store = sample_store();
        let filters = FilterSet::all(&store).with_values(Dimension::Distance, ["10-20km"]);
        let first = apply(&store, &filters);
        let second = apply(&store, &filters);
        assert_eq!(first.records(), second.records());
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn selection_all_resolves_to_current_distinct_values() {
        let store = sample_store();
        let resolved = FilterSelection::default().resolve(&store);
        for dim in Dimension::ALL {
            assert_eq!(&resolved.values[&dim], store.distinct_values(dim));
        }
        assert_eq!(resolved.hours, HourRange::FULL_DAY);
    }

    #[test]
    fn toggling_from_all_narrows_to_remaining_values() {
        let store = sample_store();
        let mut selection = FilterSelection::default();
        selection.toggle(&store, Dimension::City, "2");
        assert!(!selection.selection(Dimension::City).is_all());
        assert!(selection.selection(Dimension::City).contains("1"));
        assert!(!selection.selection(Dimension::City).contains("2"));

        selection.toggle(&store, Dimension::City, "2");
        assert!(selection.selection(Dimension::City).contains("2"));

        selection.select_none(Dimension::Status);
        assert!(apply(&store, &selection.resolve(&store)).is_empty());

        selection.select_all(Dimension::Status);
        assert_eq!(apply(&store, &selection.resolve(&store)).len(), 3);
    }

    #[test]
    fn re_checking_every_value_counts_as_all_selected() {
        let store = sample_store();
        let mut selection = FilterSelection::default();
        assert!(selection.covers_all(&store, Dimension::City));

        selection.toggle(&store, Dimension::City, "1");
        assert!(!selection.covers_all(&store, Dimension::City));

        selection.toggle(&store, Dimension::City, "1");
        assert!(!selection.selection(Dimension::City).is_all());
        assert!(selection.covers_all(&store, Dimension::City));

        selection.select_none(Dimension::Status);
        assert!(!selection.covers_all(&store, Dimension::Status));
    }

    #[test]
    fn reversed_hour_bounds_are_reordered() {
        let mut selection = FilterSelection::default();
        selection.set_hours(20, 6);
        assert_eq!(selection.hours, HourRange::new(6, 20));
    }
}
