//! Travel query orchestration.
//!
//! Pulls a fresh snapshot, indexes it, enumerates candidates, and hands them
//! to the requested ranking policy. Every query computes over the snapshot
//! and clock reading it started with.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{Clock, RouteId};
use crate::store::NetworkStore;

use super::prepare::prepare;
use super::process::{direct_routes, transfer_routes};
use super::strategy::{Optimization, RouteOption};

/// Why a query produced no plan.
///
/// The `Display` strings are the exact messages surfaced to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Origin or destination is not in the station index.
    #[error("Station not found")]
    StationNotFound,

    /// Both candidate sets came up empty after filtering.
    #[error("No available routes found")]
    NoRoutesFound,
}

/// A successful query result: at most five ranked options.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TravelPlan {
    pub routes: Vec<RouteOption>,
}

/// Finds the best itineraries between two stations.
pub struct TravelFinder {
    store: Arc<NetworkStore>,
    clock: Box<dyn Clock>,
}

impl TravelFinder {
    /// Create a finder over a snapshot store and a clock.
    pub fn new(store: Arc<NetworkStore>, clock: Box<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Find up to five itineraries from `origin` to `destination`, ranked by
    /// the requested optimization.
    pub fn find_routes(
        &self,
        origin: &str,
        destination: &str,
        optimization: Optimization,
    ) -> Result<TravelPlan, PlanError> {
        let snapshot = self.store.snapshot();
        let index = prepare(&snapshot);

        let (Some(origin_routes), Some(destination_routes)) =
            (index.stations.get(origin), index.stations.get(destination))
        else {
            return Err(PlanError::StationNotFound);
        };

        let common: HashSet<RouteId> = origin_routes
            .intersection(destination_routes)
            .cloned()
            .collect();

        // One clock reading covers the whole query.
        let moment = self.clock.moment();

        let direct = direct_routes(
            origin,
            destination,
            &common,
            &index.schedules,
            &index.route_stations,
            &moment,
        );
        let transfers = transfer_routes(
            origin,
            destination,
            origin_routes,
            &index.stations,
            &index.schedules,
            &index.route_stations,
            &moment,
        );

        debug!(
            origin,
            destination,
            policy = optimization.as_key(),
            direct = direct.len(),
            transfers = transfers.len(),
            "candidates enumerated"
        );

        let routes = optimization.select_routes(
            &direct,
            &transfers,
            &index.route_stations,
            origin,
            destination,
        );

        if routes.is_empty() {
            return Err(PlanError::NoRoutesFound);
        }
        Ok(TravelPlan { routes })
    }
}
