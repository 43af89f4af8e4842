//! Schedule time handling.
//!
//! Schedules are keyed by lowercase weekday name and store operating windows
//! as `"HH:MM - HH:MM"` strings. Both bounds are zero-padded 24-hour times,
//! so window checks are plain lexicographic string comparisons.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Lowercase full English name of a weekday, as used in schedule keys.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// A reading of the clock in schedule terms: the weekday and wall time an
/// operating window is checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moment {
    /// Lowercase weekday name (`"monday"` .. `"sunday"`).
    pub day: &'static str,

    /// Zero-padded 24-hour wall time, `"HH:MM"`.
    pub time: String,
}

impl Moment {
    /// Capture the schedule view of a local datetime.
    pub fn from_datetime(now: NaiveDateTime) -> Self {
        Moment {
            day: weekday_name(now.weekday()),
            time: format!("{:02}:{:02}", now.hour(), now.minute()),
        }
    }
}

/// Split an `"HH:MM - HH:MM"` window into its bounds.
///
/// Returns `None` when the separator is missing. The bounds themselves are
/// not validated; a malformed bound simply never brackets a real time.
pub fn split_window(window: &str) -> Option<(&str, &str)> {
    window.split_once(" - ")
}
