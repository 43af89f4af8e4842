//! Travel-finding engine.
//!
//! Turns raw route/station records into indexed lookups, enumerates direct
//! and single-transfer itineraries, filters them by schedule and travel
//! direction, and ranks a bounded top-five result. The engine deliberately
//! never searches beyond one transfer.

mod finder;
mod prepare;
mod process;
mod strategy;
mod validate;

pub use finder::{PlanError, TravelFinder, TravelPlan};
pub use prepare::{NetworkIndex, ScheduleIndex, StationIndex, StopIndex, prepare};
pub use process::{SegmentDetail, TransferCandidate, direct_routes, transfer_routes};
pub use strategy::{Optimization, RouteDetails, RouteOption};
pub use validate::{is_available, is_valid_direction};
