//! Remaining-time and year-progress calculations.
//!
//! All functions are pure over naive wall-clock instants so they can be
//! exercised with fixed dates in tests.

use std::fmt;

use chrono::{Duration, NaiveDateTime};

pub const SECONDS_PER_DAY: i64 = 24 * 3600;
/// Length of the progress window that ends at a countdown's target.
pub const SECONDS_IN_YEAR: i64 = 365 * SECONDS_PER_DAY;

/// Time left until a target, split into calendar-style fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub total_seconds: i64,
}

impl Remaining {
    pub fn is_zero(&self) -> bool {
        self.total_seconds == 0
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Time remaining until `target`. Every field is zero once `target <= now`.
pub fn remaining(target: NaiveDateTime, now: NaiveDateTime) -> Remaining {
    let total_seconds = target.signed_duration_since(now).num_seconds();
    if total_seconds <= 0 {
        return Remaining::default();
    }

    let days = total_seconds / SECONDS_PER_DAY;
    let rest = total_seconds % SECONDS_PER_DAY;
    Remaining {
        days,
        hours: rest / 3600,
        minutes: rest % 3600 / 60,
        seconds: rest % 60,
        total_seconds,
    }
}

/// Fraction of the 365-day window before `target` that has elapsed at `now`.
///
/// 0 at or before the window start, 1 at or after `target`.
pub fn year_progress(target: NaiveDateTime, now: NaiveDateTime) -> f64 {
    let window_start = target - Duration::seconds(SECONDS_IN_YEAR);
    let elapsed = now.signed_duration_since(window_start);
    let elapsed_secs = elapsed.num_milliseconds() as f64 / 1000.0;
    (elapsed_secs / SECONDS_IN_YEAR as f64).clamp(0.0, 1.0)
}
