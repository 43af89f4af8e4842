//! Domain types for the transit trip planner.
//!
//! Core vocabulary shared by the store, the planner and the web layer:
//! route identity, schedule time handling and the clock capability.

mod clock;
mod route;
mod time;

pub use clock::{Clock, FixedClock, SystemClock};
pub use route::{RouteId, RouteKind};
pub use time::{Moment, split_window, weekday_name};
