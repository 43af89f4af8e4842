//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::TravelFinder;
use crate::store::NetworkStore;

/// Shared application state.
///
/// Contains the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Published dataset snapshots.
    pub store: Arc<NetworkStore>,

    /// Travel query engine.
    pub finder: Arc<TravelFinder>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: Arc<NetworkStore>, finder: TravelFinder) -> Self {
        Self {
            store,
            finder: Arc::new(finder),
        }
    }
}
