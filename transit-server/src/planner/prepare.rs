//! Index preparation.
//!
//! Turns a records snapshot into the three lookup structures every query
//! runs on: station → serving routes, route → per-day schedule windows, and
//! route → ordered station sequence.

use std::collections::{HashMap, HashSet};

use crate::domain::RouteId;
use crate::store::NetworkRecords;

/// Station name → routes serving it.
pub type StationIndex = HashMap<String, HashSet<RouteId>>;

/// Route → lowercase weekday name → `"HH:MM - HH:MM"` operating window.
pub type ScheduleIndex = HashMap<RouteId, HashMap<String, String>>;

/// Route → ordered station sequence.
pub type StopIndex = HashMap<RouteId, Vec<String>>;

/// Lookup structures for one query, built fresh from the current snapshot.
#[derive(Debug, Default)]
pub struct NetworkIndex {
    /// Serving sets are unioned when the same station name appears in more
    /// than one record.
    pub stations: StationIndex,
    /// Only schedule rows with both bounds survive preparation.
    pub schedules: ScheduleIndex,
    pub route_stations: StopIndex,
}

/// Build the query indices from a snapshot.
///
/// Malformed schedule rows are skipped, never an error.
pub fn prepare(records: &NetworkRecords) -> NetworkIndex {
    let mut stations: StationIndex = HashMap::new();
    for station in &records.stations {
        stations
            .entry(station.name.clone())
            .or_default()
            .extend(station.routes.iter().cloned());
    }

    let mut schedules: ScheduleIndex = HashMap::new();
    let mut route_stations: StopIndex = HashMap::new();
    for route in &records.routes {
        let windows: HashMap<String, String> = route
            .schedule
            .iter()
            .filter_map(|row| {
                let start = row.start_time.as_deref().filter(|s| !s.is_empty())?;
                let end = row.end_time.as_deref().filter(|s| !s.is_empty())?;
                let day = row.day.as_deref().unwrap_or_default().to_lowercase();
                Some((day, format!("{start} - {end}")))
            })
            .collect();

        schedules.insert(route.id.clone(), windows);
        route_stations.insert(route.id.clone(), route.stations.clone());
    }

    NetworkIndex {
        stations,
        schedules,
        route_stations,
    }
}
