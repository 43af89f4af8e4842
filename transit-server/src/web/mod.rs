//! Web layer for the transit trip planner.
//!
//! Provides the HTTP endpoints for trip search and for browsing the raw
//! route and station records.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
