//! Ranking strategies.
//!
//! The two optimization policies turn the candidate sets into the final
//! ordered options: minimize stations traveled regardless of transfers, or
//! prefer direct routes and fall back to transfers only when none exist.

use serde::Serialize;

use crate::domain::RouteId;

use super::prepare::StopIndex;
use super::process::{SegmentDetail, TransferCandidate};

/// At most this many options are returned to the caller.
const MAX_OPTIONS: usize = 5;

/// Sentinel score that sorts an option last when an index lookup
/// unexpectedly fails during scoring.
const UNREACHABLE: usize = usize::MAX;

/// A ranked travel option.
#[derive(Debug, Clone, Serialize)]
pub struct RouteOption {
    /// Route id, or `"<first> + <second>"` for a transfer.
    pub route: String,

    /// Directionality label, composite for transfers.
    #[serde(rename = "type")]
    pub kind: String,

    /// Number of route changes (0 or 1).
    pub transfers: u8,

    /// Stations traversed end to end; the ranking key.
    pub stations_traveled: usize,

    pub details: RouteDetails,
}

/// Details payload of a travel option.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RouteDetails {
    Direct {
        from: String,
        to: String,
        total_stations: usize,
    },
    Transfer {
        first_segment: SegmentDetail,
        second_segment: SegmentDetail,
        total_stations: usize,
        transfer_station: String,
        transfers: u8,
    },
}

/// Ranking policy for candidate itineraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Optimization {
    /// Fewest stations traveled, direct or not.
    #[default]
    MinStations,

    /// Direct routes whenever any exist, otherwise the best transfers.
    MinTransfers,
}

impl Optimization {
    /// Resolve an optimization key.
    ///
    /// Unrecognized keys (including the empty string) behave as
    /// [`Optimization::MinStations`].
    pub fn from_key(key: &str) -> Self {
        match key {
            "min_transfers" => Optimization::MinTransfers,
            _ => Optimization::MinStations,
        }
    }

    /// The canonical key for this policy.
    pub fn as_key(&self) -> &'static str {
        match self {
            Optimization::MinStations => "min_stations",
            Optimization::MinTransfers => "min_transfers",
        }
    }

    /// Rank the candidate sets and select at most five options.
    pub fn select_routes(
        &self,
        direct: &[RouteId],
        transfers: &[TransferCandidate],
        stops: &StopIndex,
        origin: &str,
        destination: &str,
    ) -> Vec<RouteOption> {
        let mut options = match self {
            Optimization::MinTransfers if !direct.is_empty() => {
                // Any direct route beats every transfer; transfers are not
                // even considered.
                let mut options = direct_options(direct, stops, origin, destination);
                options.sort_by_key(|option| option.stations_traveled);
                options
            }
            Optimization::MinTransfers => {
                let mut options = transfer_options(transfers);
                options.sort_by_key(|option| (option.transfers, option.stations_traveled));
                options
            }
            Optimization::MinStations => {
                let mut options = direct_options(direct, stops, origin, destination);
                options.extend(transfer_options(transfers));
                options.sort_by_key(|option| option.stations_traveled);
                options
            }
        };

        options.truncate(MAX_OPTIONS);
        options
    }
}

fn direct_options(
    direct: &[RouteId],
    stops: &StopIndex,
    origin: &str,
    destination: &str,
) -> Vec<RouteOption> {
    direct
        .iter()
        .map(|route| {
            let stations = stops.get(route);
            let stations_traveled = stations
                .and_then(|seq| {
                    let o = seq.iter().position(|s| s == origin)?;
                    let d = seq.iter().position(|s| s == destination)?;
                    Some(o.abs_diff(d))
                })
                .unwrap_or(UNREACHABLE);

            RouteOption {
                route: route.as_str().to_string(),
                kind: route.kind().as_str().to_string(),
                transfers: 0,
                stations_traveled,
                details: RouteDetails::Direct {
                    from: origin.to_string(),
                    to: destination.to_string(),
                    total_stations: stations.map(Vec::len).unwrap_or_default(),
                },
            }
        })
        .collect()
}

fn transfer_options(transfers: &[TransferCandidate]) -> Vec<RouteOption> {
    transfers
        .iter()
        .map(|candidate| RouteOption {
            route: format!("{} + {}", candidate.first.route, candidate.second.route),
            kind: format!("{} + {}", candidate.first.kind, candidate.second.kind),
            transfers: 1,
            stations_traveled: candidate.score,
            details: RouteDetails::Transfer {
                first_segment: candidate.first.clone(),
                second_segment: candidate.second.clone(),
                total_stations: candidate.score,
                transfer_station: candidate.transfer_station.clone(),
                transfers: 1,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn stops_index(routes: &[(&str, &[&str])]) -> StopIndex {
        routes
            .iter()
            .map(|(id, stations)| {
                (
                    RouteId::new(*id),
                    stations.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect()
    }

    fn candidate(first: &str, second: &str, via: &str, score: usize) -> TransferCandidate {
        let first = RouteId::new(first);
        let second = RouteId::new(second);
        TransferCandidate {
            score,
            transfer_station: via.to_string(),
            first: SegmentDetail {
                kind: first.kind().as_str(),
                route: first,
                from: "o".to_string(),
                to: via.to_string(),
                intermediate_stations: score / 2,
            },
            second: SegmentDetail {
                kind: second.kind().as_str(),
                route: second,
                from: via.to_string(),
                to: "d".to_string(),
                intermediate_stations: score - score / 2,
            },
        }
    }

    #[test]
    fn key_resolution_defaults_to_min_stations() {
        assert_eq!(Optimization::from_key("min_stations"), Optimization::MinStations);
        assert_eq!(Optimization::from_key("min_transfers"), Optimization::MinTransfers);
        assert_eq!(Optimization::from_key("unknown"), Optimization::MinStations);
        assert_eq!(Optimization::from_key(""), Optimization::MinStations);
        assert_eq!(Optimization::default(), Optimization::MinStations);
    }

    #[test]
    fn canonical_keys_round_trip() {
        for policy in [Optimization::MinStations, Optimization::MinTransfers] {
            assert_eq!(Optimization::from_key(policy.as_key()), policy);
        }
    }

    #[test]
    fn direct_option_shape() {
        let stops = stops_index(&[("71", &["a", "b", "c", "d"])]);
        let direct = [RouteId::new("71")];

        let options =
            Optimization::MinStations.select_routes(&direct, &[], &stops, "a", "c");

        assert_eq!(options.len(), 1);
        let option = &options[0];
        assert_eq!(option.route, "71");
        assert_eq!(option.kind, "bidirectional");
        assert_eq!(option.transfers, 0);
        assert_eq!(option.stations_traveled, 2);
        match &option.details {
            RouteDetails::Direct {
                from,
                to,
                total_stations,
            } => {
                assert_eq!(from, "a");
                assert_eq!(to, "c");
                assert_eq!(*total_stations, 4);
            }
            RouteDetails::Transfer { .. } => panic!("expected direct details"),
        }
    }

    #[test]
    fn transfer_option_shape() {
        let stops = StopIndex::new();
        let transfers = [candidate("A1", "12", "t", 5)];

        let options =
            Optimization::MinStations.select_routes(&[], &transfers, &stops, "o", "d");

        assert_eq!(options.len(), 1);
        let option = &options[0];
        assert_eq!(option.route, "A1 + 12");
        assert_eq!(option.kind, "unidirectional + bidirectional");
        assert_eq!(option.transfers, 1);
        assert_eq!(option.stations_traveled, 5);
        match &option.details {
            RouteDetails::Transfer {
                transfer_station,
                total_stations,
                transfers,
                ..
            } => {
                assert_eq!(transfer_station, "t");
                assert_eq!(*total_stations, 5);
                assert_eq!(*transfers, 1);
            }
            RouteDetails::Direct { .. } => panic!("expected transfer details"),
        }
    }

    #[test]
    fn min_transfers_ignores_transfers_when_direct_exists() {
        let stops = stops_index(&[("71", &["a", "b", "c"])]);
        let direct = [RouteId::new("71")];
        // A transfer with a better score must still lose.
        let transfers = [candidate("A1", "12", "t", 1)];

        let options =
            Optimization::MinTransfers.select_routes(&direct, &transfers, &stops, "a", "c");

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].transfers, 0);
        assert_eq!(options[0].route, "71");
    }

    #[test]
    fn min_transfers_falls_back_to_transfers() {
        let stops = StopIndex::new();
        let transfers = [candidate("A1", "12", "t", 7), candidate("B2", "12", "u", 3)];

        let options =
            Optimization::MinTransfers.select_routes(&[], &transfers, &stops, "o", "d");

        assert_eq!(options.len(), 2);
        assert_eq!(options[0].stations_traveled, 3);
        assert_eq!(options[1].stations_traveled, 7);
    }

    #[test]
    fn min_stations_mixes_direct_and_transfers_by_score() {
        let stops = stops_index(&[("71", &["a", "x1", "x2", "x3", "c"])]);
        let direct = [RouteId::new("71")]; // 4 stations traveled
        let transfers = [candidate("A1", "12", "t", 2), candidate("B2", "12", "u", 6)];

        let options =
            Optimization::MinStations.select_routes(&direct, &transfers, &stops, "a", "c");

        let scores: Vec<usize> = options.iter().map(|o| o.stations_traveled).collect();
        assert_eq!(scores, vec![2, 4, 6]);
        assert_eq!(options[0].transfers, 1);
        assert_eq!(options[1].transfers, 0);
    }

    #[test]
    fn results_are_capped_at_five() {
        let stops = stops_index(&[
            ("10", &["a", "b"]),
            ("20", &["a", "b"]),
            ("30", &["a", "b"]),
            ("40", &["a", "b"]),
        ]);
        let direct: Vec<RouteId> = ["10", "20", "30", "40"]
            .iter()
            .map(|id| RouteId::new(*id))
            .collect();
        let transfers = [candidate("A1", "12", "t", 9), candidate("B2", "12", "u", 9)];

        let options =
            Optimization::MinStations.select_routes(&direct, &transfers, &stops, "a", "b");

        assert_eq!(options.len(), 5);
    }

    #[test]
    fn missing_station_scores_as_unreachable_and_sorts_last() {
        // "99" does not list the destination; upstream filtering should
        // prevent this, but the option must sort last, not panic.
        let stops = stops_index(&[("71", &["a", "b", "c"]), ("99", &["a", "x"])]);
        let direct = [RouteId::new("99"), RouteId::new("71")];

        let options =
            Optimization::MinStations.select_routes(&direct, &[], &stops, "a", "c");

        assert_eq!(options.len(), 2);
        assert_eq!(options[0].route, "71");
        assert_eq!(options[1].route, "99");
        assert_eq!(options[1].stations_traveled, usize::MAX);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn candidates() -> impl Strategy<Value = Vec<TransferCandidate>> {
        prop::collection::vec((0usize..40, 0usize..40), 0..12).prop_map(|scores| {
            scores
                .into_iter()
                .map(|(a, b)| {
                    let first = RouteId::new(format!("A{a}"));
                    let second = RouteId::new(format!("{b}"));
                    TransferCandidate {
                        score: a + b,
                        transfer_station: "t".to_string(),
                        first: SegmentDetail {
                            kind: first.kind().as_str(),
                            route: first,
                            from: "o".to_string(),
                            to: "t".to_string(),
                            intermediate_stations: a,
                        },
                        second: SegmentDetail {
                            kind: second.kind().as_str(),
                            route: second,
                            from: "t".to_string(),
                            to: "d".to_string(),
                            intermediate_stations: b,
                        },
                    }
                })
                .collect()
        })
    }

    proptest! {
        /// Both policies return at most five options.
        #[test]
        fn never_more_than_five(transfers in candidates()) {
            let stops = StopIndex::new();
            for policy in [Optimization::MinStations, Optimization::MinTransfers] {
                let options = policy.select_routes(&[], &transfers, &stops, "o", "d");
                prop_assert!(options.len() <= 5);
            }
        }

        /// MinStations output is non-decreasing in stations traveled.
        #[test]
        fn min_stations_is_sorted(transfers in candidates()) {
            let stops = StopIndex::new();
            let options =
                Optimization::MinStations.select_routes(&[], &transfers, &stops, "o", "d");
            for pair in options.windows(2) {
                prop_assert!(pair[0].stations_traveled <= pair[1].stations_traveled);
            }
        }
    }
}
