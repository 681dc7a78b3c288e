//! Geolocation cache types

use serde::{Deserialize, Serialize};

/// A single geolocation reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub lat: f64,
    pub lng: f64,
}

impl UserLocation {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Derived state of the location cache. Only `denied` is stored; the other
/// labels are computed from the reading and its age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationStatus {
    /// No reading recorded.
    Unset,
    /// Reading younger than the staleness window.
    Fresh,
    /// Reading older than the staleness window.
    Stale,
    /// The user refused the platform location prompt.
    Denied,
}

/// Point-in-time copy of the location cache.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSnapshot {
    pub coords: Option<UserLocation>,
    /// Epoch milliseconds of the reading; present exactly when `coords` is.
    pub last_updated: Option<u64>,
    pub denied: bool,
}
