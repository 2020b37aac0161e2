// Date utility functions
// Naive (wall-clock) helpers used by the countdown math

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Midnight at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Current local wall-clock time.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Move `date` into `year`, keeping month and day.
///
/// 29 February becomes 28 February when `year` is not a leap year.
pub fn with_year_clamped(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    date.with_year(year).or_else(|| {
        if date.month() == 2 && date.day() == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}
