//! Clock capability.
//!
//! Availability checks depend on "now". The planner never reads the system
//! clock directly; it is handed a `Clock` at construction so tests can pin
//! the time.

use chrono::{Local, NaiveDateTime};

use super::time::Moment;

/// Source of the current local date and time.
pub trait Clock: Send + Sync {
    /// The current local datetime.
    fn now(&self) -> NaiveDateTime;

    /// The schedule-checking view of [`Clock::now`].
    fn moment(&self) -> Moment {
        Moment::from_datetime(self.now())
    }
}

/// Clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a fixed instant, for tests and deterministic runs.
#[derive(Debug, Clone)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
