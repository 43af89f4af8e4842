//! Candidate enumeration.
//!
//! Enumerates direct routes and single-transfer combinations between two
//! stations, filtering by schedule availability and travel direction and
//! scoring by stations traversed.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::trace;

use crate::domain::{Moment, RouteId, RouteKind};

use super::prepare::{ScheduleIndex, StationIndex, StopIndex};
use super::validate::{is_available, is_valid_direction};

/// Transfer candidates are capped here, before ranking, to bound the
/// combinatorics on dense station sets.
const MAX_TRANSFERS: usize = 5;

/// One leg of a transfer itinerary, as rendered into the response.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentDetail {
    pub route: RouteId,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub from: String,
    pub to: String,
    pub intermediate_stations: usize,
}

/// A scored origin → transfer station → destination combination.
#[derive(Debug, Clone)]
pub struct TransferCandidate {
    /// Sum of both segments' absolute station-index distances.
    pub score: usize,
    pub transfer_station: String,
    pub first: SegmentDetail,
    pub second: SegmentDetail,
}

/// Direct routes serving both endpoints in a travelable order and currently
/// operating.
///
/// Sorted with bidirectional routes first, ties broken by id. No cap is
/// applied at this stage.
pub fn direct_routes(
    origin: &str,
    destination: &str,
    common_routes: &HashSet<RouteId>,
    schedules: &ScheduleIndex,
    stops: &StopIndex,
    moment: &Moment,
) -> Vec<RouteId> {
    let mut routes: Vec<RouteId> = common_routes
        .iter()
        .filter(|route| {
            is_valid_direction(route, origin, destination, stops)
                && is_available(schedules, route, moment)
        })
        .cloned()
        .collect();

    routes.sort_by(|a, b| {
        (a.kind() == RouteKind::Unidirectional, a).cmp(&(b.kind() == RouteKind::Unidirectional, b))
    });
    routes
}

/// Single-transfer combinations from `origin` to `destination`.
///
/// For each operating route at the origin, every station reachable without
/// changing route is a potential transfer point; any operating,
/// direction-valid route from there to the destination completes a
/// candidate. Returns the five best by score.
pub fn transfer_routes(
    origin: &str,
    destination: &str,
    origin_routes: &HashSet<RouteId>,
    stations: &StationIndex,
    schedules: &ScheduleIndex,
    stops: &StopIndex,
    moment: &Moment,
) -> Vec<TransferCandidate> {
    let Some(destination_routes) = stations.get(destination) else {
        return Vec::new();
    };

    let mut candidates = Vec::new();
    // Reachable stations per first route, computed once per call.
    let mut reachable_cache: HashMap<RouteId, Vec<String>> = HashMap::new();

    for first in origin_routes {
        if !is_available(schedules, first, moment) {
            continue;
        }

        if !reachable_cache.contains_key(first) {
            let Some(route_stops) = stops.get(first) else {
                continue;
            };
            let Some(origin_idx) = route_stops.iter().position(|s| s == origin) else {
                continue;
            };
            let reachable: Vec<String> = if first.is_bidirectional() {
                route_stops
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != origin_idx)
                    .map(|(_, s)| s.clone())
                    .collect()
            } else {
                route_stops[origin_idx + 1..].to_vec()
            };
            reachable_cache.insert(first.clone(), reachable);
        }

        for transfer_station in &reachable_cache[first] {
            let Some(serving) = stations.get(transfer_station) else {
                continue;
            };

            for second in serving.intersection(destination_routes) {
                if !is_available(schedules, second, moment) {
                    continue;
                }
                if !is_valid_direction(second, transfer_station, destination, stops) {
                    continue;
                }

                let Some(first_distance) = index_distance(stops, first, origin, transfer_station)
                else {
                    continue;
                };
                let Some(second_distance) =
                    index_distance(stops, second, transfer_station, destination)
                else {
                    continue;
                };

                trace!(
                    first = %first,
                    second = %second,
                    transfer = %transfer_station,
                    score = first_distance + second_distance,
                    "transfer candidate"
                );

                candidates.push(TransferCandidate {
                    score: first_distance + second_distance,
                    transfer_station: transfer_station.clone(),
                    first: SegmentDetail {
                        route: first.clone(),
                        kind: first.kind().as_str(),
                        from: origin.to_string(),
                        to: transfer_station.clone(),
                        intermediate_stations: first_distance,
                    },
                    second: SegmentDetail {
                        route: second.clone(),
                        kind: second.kind().as_str(),
                        from: transfer_station.clone(),
                        to: destination.to_string(),
                        intermediate_stations: second_distance,
                    },
                });
            }
        }
    }

    candidates.sort_by_key(|c| c.score);
    candidates.truncate(MAX_TRANSFERS);
    candidates
}

/// Absolute station-index distance between two stops on a route.
fn index_distance(stops: &StopIndex, route: &RouteId, a: &str, b: &str) -> Option<usize> {
    let stations = stops.get(route)?;
    let ia = stations.iter().position(|s| s == a)?;
    let ib = stations.iter().position(|s| s == b)?;
    Some(ia.abs_diff(ib))
}
