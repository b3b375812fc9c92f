use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::filter::FilteredView;

/// Count of orders in one (hour, status) bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyStatusCount {
    pub hour: i32,
    pub status: String,
    pub count: usize,
}

/// KPI scalars and breakdown tables for one filtered view.
///
/// `Metrics::default()` is exactly what an empty view summarizes to.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metrics {
    pub total: usize,
    pub completed: usize,
    pub cancelled: usize,
    /// Percent of orders completed, 0 for an empty view.
    pub fulfillment_rate: f64,
    /// Percent of orders cancelled, 0 for an empty view.
    pub cancellation_rate: f64,
    pub gmv_completed: f64,
    pub gmv_lost: f64,
    /// `(status, count)`, largest first. Blank statuses are left out.
    pub status_distribution: Vec<(String, usize)>,
    /// `(final_main_reason, count)` over cancelled orders, largest first.
    /// Blank reasons are left out.
    pub cancel_reason_distribution: Vec<(String, usize)>,
    /// Only buckets that hold at least one order, by hour then status.
    pub hourly_status_trend: Vec<HourlyStatusCount>,
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Value-counts ordering: descending count, ties broken by label.
fn ranked(counts: HashMap<&str, usize>) -> Vec<(String, usize)> {
    let mut rows: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

pub fn summarize(view: &FilteredView<'_>) -> Metrics {
    let total = view.len();
    let mut completed = 0usize;
    let mut cancelled = 0usize;
    let mut gmv_completed = 0.0;
    let mut gmv_lost = 0.0;
    let mut by_status: HashMap<&str, usize> = HashMap::new();
    let mut by_reason: HashMap<&str, usize> = HashMap::new();
    let mut by_hour: BTreeMap<(i32, &str), usize> = BTreeMap::new();

    for rec in view.iter() {
        // blank labels count toward the totals but get no bar of their own
        let status = rec.status.as_str();
        if !status.is_empty() {
            *by_status.entry(status).or_default() += 1;
            *by_hour.entry((rec.hour_time, status)).or_default() += 1;
        }

        if rec.status.is_completed() {
            completed += 1;
            gmv_completed += rec.total_fee.unwrap_or(0.0);
        } else if rec.status.is_cancelled() {
            cancelled += 1;
            gmv_lost += rec.total_fee.unwrap_or(0.0);
            if !rec.final_main_reason.is_empty() {
                *by_reason.entry(rec.final_main_reason.as_str()).or_default() += 1;
            }
        }
    }

    let hourly_status_trend = by_hour
        .into_iter()
        .map(|((hour, status), count)| HourlyStatusCount {
            hour,
            status: status.to_string(),
            count,
        })
        .collect();

    log::debug!("summarized {total} orders: {completed} completed, {cancelled} cancelled");

    Metrics {
        total,
        completed,
        cancelled,
        fulfillment_rate: percent(completed, total),
        cancellation_rate: percent(cancelled, total),
        gmv_completed,
        gmv_lost,
        status_distribution: ranked(by_status),
        cancel_reason_distribution: ranked(by_reason),
        hourly_status_trend,
    }
}
