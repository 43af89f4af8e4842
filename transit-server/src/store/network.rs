//! Published dataset snapshots.
//!
//! The planner computes over immutable snapshots. A reload never mutates
//! shared structures in place; it builds a whole new snapshot and swaps the
//! published `Arc`, so in-flight queries keep the data they started with.

use std::sync::{Arc, PoisonError, RwLock};

use super::records::NetworkRecords;
use super::source::{RecordSource, StoreError};

/// Holder of the current dataset snapshot.
///
/// Loads once at construction (failing fast if the source is unusable) and
/// republishes on [`NetworkStore::refresh`].
pub struct NetworkStore {
    current: RwLock<Arc<NetworkRecords>>,
    source: Box<dyn RecordSource>,
}

impl NetworkStore {
    /// Load the initial snapshot from the source.
    pub fn new(source: Box<dyn RecordSource>) -> Result<Self, StoreError> {
        let records = source.load()?;
        Ok(Self {
            current: RwLock::new(Arc::new(records)),
            source,
        })
    }

    /// The currently published snapshot.
    pub fn snapshot(&self) -> Arc<NetworkRecords> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reload from the source and publish a new snapshot.
    ///
    /// On failure the previous snapshot stays published and the error is
    /// returned. On success, returns the (routes, stations) counts of the
    /// new snapshot for logging.
    pub fn refresh(&self) -> Result<(usize, usize), StoreError> {
        let records = self.source.load()?;
        let counts = (records.routes.len(), records.stations.len());

        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(records);

        Ok(counts)
    }
}
