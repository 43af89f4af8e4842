//! Route validation predicates.
//!
//! Stateless checks consulted during candidate enumeration: is a route
//! currently operating, and can it carry a rider from A to B. The syntactic
//! bidirectionality check lives on [`crate::domain::RouteId`] itself.

use crate::domain::{Moment, RouteId, split_window};

use super::prepare::{ScheduleIndex, StopIndex};

/// Whether a route is operating at the given moment.
///
/// False when the route is unknown, the weekday has no window, or the
/// stored window does not split into two bounds. Bounds are inclusive and
/// compared lexicographically, which is exact for zero-padded 24-hour
/// times.
pub fn is_available(schedules: &ScheduleIndex, route: &RouteId, moment: &Moment) -> bool {
    let Some(window) = schedules.get(route).and_then(|days| days.get(moment.day)) else {
        return false;
    };

    match split_window(window) {
        Some((start, end)) => start <= moment.time.as_str() && moment.time.as_str() <= end,
        None => false,
    }
}

/// Whether a route can carry a rider from `origin` to `destination`.
///
/// Both stations must appear on the route's sequence. Bidirectional routes
/// work in either direction; unidirectional routes only in strictly
/// increasing stop order.
pub fn is_valid_direction(
    route: &RouteId,
    origin: &str,
    destination: &str,
    stops: &StopIndex,
) -> bool {
    let Some(stations) = stops.get(route) else {
        return false;
    };

    let origin_idx = stations.iter().position(|s| s == origin);
    let destination_idx = stations.iter().position(|s| s == destination);

    match (origin_idx, destination_idx) {
        (Some(o), Some(d)) => route.is_bidirectional() || o < d,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn schedules(route: &str, day: &str, window: &str) -> ScheduleIndex {
        let mut days = HashMap::new();
        days.insert(day.to_string(), window.to_string());
        let mut index = HashMap::new();
        index.insert(RouteId::new(route), days);
        index
    }

    fn stops(route: &str, stations: &[&str]) -> StopIndex {
        let mut index = HashMap::new();
        index.insert(
            RouteId::new(route),
            stations.iter().map(|s| s.to_string()).collect(),
        );
        index
    }

    fn monday(time: &str) -> Moment {
        Moment {
            day: "monday",
            time: time.to_string(),
        }
    }

    #[test]
    fn available_inside_window() {
        let index = schedules("71", "monday", "06:00 - 22:00");
        assert!(is_available(&index, &RouteId::new("71"), &monday("10:30")));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let index = schedules("71", "monday", "06:00 - 22:00");
        assert!(is_available(&index, &RouteId::new("71"), &monday("06:00")));
        assert!(is_available(&index, &RouteId::new("71"), &monday("22:00")));
    }

    #[test]
    fn unavailable_outside_window() {
        let index = schedules("71", "monday", "06:00 - 22:00");
        assert!(!is_available(&index, &RouteId::new("71"), &monday("23:00")));
        assert!(!is_available(&index, &RouteId::new("71"), &monday("05:59")));
    }

    #[test]
    fn unavailable_for_unknown_route() {
        let index = schedules("71", "monday", "06:00 - 22:00");
        assert!(!is_available(&index, &RouteId::new("99"), &monday("10:00")));
    }

    #[test]
    fn unavailable_on_unscheduled_day() {
        let index = schedules("71", "monday", "06:00 - 22:00");
        let sunday = Moment {
            day: "sunday",
            time: "10:00".to_string(),
        };
        assert!(!is_available(&index, &RouteId::new("71"), &sunday));
    }

    #[test]
    fn unavailable_when_window_is_malformed() {
        let index = schedules("71", "monday", "06:00-22:00");
        assert!(!is_available(&index, &RouteId::new("71"), &monday("10:00")));
    }

    #[test]
    fn direction_requires_both_stations() {
        let index = stops("A1", &["a", "b", "c"]);
        assert!(!is_valid_direction(&RouteId::new("A1"), "a", "z", &index));
        assert!(!is_valid_direction(&RouteId::new("A1"), "z", "c", &index));
    }

    #[test]
    fn direction_requires_known_route() {
        let index = stops("A1", &["a", "b"]);
        assert!(!is_valid_direction(&RouteId::new("B2"), "a", "b", &index));
    }

    #[test]
    fn bidirectional_routes_work_both_ways() {
        let index = stops("71", &["a", "b", "c"]);
        assert!(is_valid_direction(&RouteId::new("71"), "a", "c", &index));
        assert!(is_valid_direction(&RouteId::new("71"), "c", "a", &index));
    }

    #[test]
    fn unidirectional_routes_require_increasing_order() {
        let index = stops("A1", &["a", "b", "c"]);
        assert!(is_valid_direction(&RouteId::new("A1"), "a", "c", &index));
        assert!(!is_valid_direction(&RouteId::new("A1"), "c", "a", &index));
    }

    #[test]
    fn same_station_is_not_a_unidirectional_trip() {
        let index = stops("A1", &["a", "b"]);
        assert!(!is_valid_direction(&RouteId::new("A1"), "a", "a", &index));
    }
}
