use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

// ---------------------------------------------------------------------------
// OrderStatus – enumerated order state with passthrough for unknown values
// ---------------------------------------------------------------------------

/// Lifecycle state of an order. Only `COMPLETED` and `CANCELLED` drive the
/// KPIs; every other value is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrderStatus {
    Completed,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "COMPLETED" => OrderStatus::Completed,
            "CANCELLED" => OrderStatus::Cancelled,
            other => OrderStatus::Other(other.to_string()),
        }
    }

    /// Text form used for filtering and grouping.
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Other(s) => s,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, OrderStatus::Completed)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OrderRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single normalized order. All four coordinates are guaranteed present.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub order_id: String,
    pub city_id: String,
    pub service_id: String,
    pub cancel_type: String,
    /// Distance bucket label, kept as a category.
    pub order_distance: String,
    pub status: OrderStatus,
    /// `None` when the source timestamp could not be parsed.
    pub order_date: Option<NaiveDateTime>,
    pub hour_time: i32,
    /// `None` when the fee cell was blank or not a number.
    pub total_fee: Option<f64>,
    pub pickup_lat: f64,
    pub pickup_lng: f64,
    pub dropoff_lat: f64,
    pub dropoff_lng: f64,
    pub final_main_reason: String,
}

// ---------------------------------------------------------------------------
// Dimension – categorical filter axes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    City,
    Status,
    Service,
    Distance,
    CancelType,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::City,
        Dimension::Status,
        Dimension::Service,
        Dimension::Distance,
        Dimension::CancelType,
    ];

    /// Column name in the source dataset.
    pub fn column(self) -> &'static str {
        match self {
            Dimension::City => "city_id",
            Dimension::Status => "status",
            Dimension::Service => "service_id",
            Dimension::Distance => "order_distance",
            Dimension::CancelType => "cancel_type",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::City => "City",
            Dimension::Status => "Status",
            Dimension::Service => "Service",
            Dimension::Distance => "Distance",
            Dimension::CancelType => "Cancel type",
        }
    }

    /// String form of the record's value along this dimension.
    pub fn value_of(self, record: &OrderRecord) -> &str {
        match self {
            Dimension::City => &record.city_id,
            Dimension::Status => record.status.as_str(),
            Dimension::Service => &record.service_id,
            Dimension::Distance => &record.order_distance,
            Dimension::CancelType => &record.cancel_type,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LoadReport – per-row coercion bookkeeping
// ---------------------------------------------------------------------------

/// Counts of rows read, kept and degraded while building an [`OrderStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub total_rows: usize,
    pub kept_rows: usize,
    pub missing_coordinates: usize,
    pub null_timestamps: usize,
    pub defaulted_hours: usize,
    pub absent_fees: usize,
}

// ---------------------------------------------------------------------------
// OrderStore – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Immutable record set with per-dimension distinct values.
#[derive(Debug, Clone)]
pub struct OrderStore {
    records: Vec<OrderRecord>,
    distinct: BTreeMap<Dimension, BTreeSet<String>>,
    report: LoadReport,
}

impl OrderStore {
    /// Build the dimension indices from already-normalized records.
    pub fn from_records(records: Vec<OrderRecord>, report: LoadReport) -> Self {
        let mut distinct: BTreeMap<Dimension, BTreeSet<String>> =
            Dimension::ALL.iter().map(|d| (*d, BTreeSet::new())).collect();

        for rec in &records {
            for dim in Dimension::ALL {
                if let Some(values) = distinct.get_mut(&dim) {
                    if !values.contains(dim.value_of(rec)) {
                        values.insert(dim.value_of(rec).to_string());
                    }
                }
            }
        }

        OrderStore {
            records,
            distinct,
            report,
        }
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    /// Sorted set of values currently present for `dim`.
    pub fn distinct_values(&self, dim: Dimension) -> &BTreeSet<String> {
        // every dimension is seeded in `from_records`
        &self.distinct[&dim]
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
