//! Data transfer objects for web requests and responses.
//!
//! Successful payloads reuse the planner's [`crate::planner::TravelPlan`]
//! and the store's records directly; only the request shapes and the error
//! envelope live here.

use serde::{Deserialize, Serialize};

/// Query parameters for the trip search endpoint.
#[derive(Debug, Deserialize)]
pub struct FindRouteRequest {
    /// Exact origin station name.
    pub origin: String,

    /// Exact destination station name.
    pub destination: String,

    /// `"min_stations"` (default) or `"min_transfers"`. Unrecognized values
    /// behave as the default.
    pub optimization: Option<String>,
}

/// Error response envelope.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}
