//! Wire records for route and station data.
//!
//! These are the plain data-transfer shapes the store reads from its backing
//! files and the web layer serves back out. Records carry the data verbatim;
//! validation and indexing happen in the planner.

use serde::{Deserialize, Serialize};

use crate::domain::RouteId;

/// One row of a route's schedule as it appears in the data.
///
/// All fields are optional: a row missing either bound is dropped during
/// preparation rather than rejected at load time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleEntry {
    pub day: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// A route as stored: identity, display name, schedule rows and the ordered
/// station sequence. The sequence defines stop order and, for unidirectional
/// routes, the direction of travel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRecord {
    pub id: RouteId,
    pub name: String,
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
    #[serde(default)]
    pub stations: Vec<String>,
}

/// A station as stored: identity, display name and the routes serving it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub routes: Vec<RouteId>,
}

/// An immutable snapshot of the full dataset.
///
/// Queries hold an `Arc<NetworkRecords>`; reloads publish a fresh snapshot
/// and never mutate one in flight.
#[derive(Debug, Clone, Default)]
pub struct NetworkRecords {
    pub routes: Vec<RouteRecord>,
    pub stations: Vec<StationRecord>,
}
