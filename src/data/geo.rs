use std::fmt;

use serde::Serialize;

use super::filter::FilteredView;
use super::model::OrderRecord;

/// Which end of the trip a coordinate refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Pickup,
    Dropoff,
}

impl Role {
    pub fn parse(s: &str) -> Option<Role> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pickup" => Some(Role::Pickup),
            "dropoff" => Some(Role::Dropoff),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Pickup => write!(f, "Pickup"),
            Role::Dropoff => write!(f, "Dropoff"),
        }
    }
}

/// One density sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    fn of(record: &OrderRecord, role: Role) -> Self {
        match role {
            Role::Pickup => GeoPoint {
                lat: record.pickup_lat,
                lng: record.pickup_lng,
            },
            Role::Dropoff => GeoPoint {
                lat: record.dropoff_lat,
                lng: record.dropoff_lng,
            },
        }
    }
}

/// Coordinates for `role` from every record, in view order.
pub fn extract(view: &FilteredView<'_>, role: Role) -> Vec<GeoPoint> {
    view.iter().map(|rec| GeoPoint::of(rec, role)).collect()
}

/// Mean latitude and longitude, used as the default map centre.
/// `None` when there are no points.
pub fn focal_point(points: &[GeoPoint]) -> Option<GeoPoint> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (lat, lng) = points
        .iter()
        .fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat, lng + p.lng));
    Some(GeoPoint {
        lat: lat / n,
        lng: lng / n,
    })
}
