//! Dataset loading and snapshot publication.
//!
//! Route and station records live in JSON files external to the service.
//! This module reads them through the narrow [`RecordSource`] capability and
//! hands out immutable snapshots for the planner to index.

mod network;
mod records;
mod source;

pub use network::NetworkStore;
pub use records::{NetworkRecords, RouteRecord, ScheduleEntry, StationRecord};
pub use source::{JsonDataSource, RecordSource, StoreError};
