// Property-based tests for countdown time calculations
// Checks remaining-time and year-progress invariants over random instants

use birthday_countdown::services::countdown::{next_anniversary, remaining, year_progress};
use birthday_countdown::services::countdown::time_math::SECONDS_PER_DAY;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

fn instant(base_day: i64, offset_secs: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        + Duration::days(base_day)
        + Duration::seconds(offset_secs)
}

proptest! {
    /// Property: the split fields recombine into the total and stay in range
    #[test]
    fn prop_remaining_fields_recombine(
        day in 0..20_000i64,
        delta in -100_000_000..100_000_000i64,
    ) {
        let now = instant(day, 0);
        let left = remaining(now + Duration::seconds(delta), now);

        prop_assert!(left.total_seconds >= 0);
        prop_assert!((0..24).contains(&left.hours));
        prop_assert!((0..60).contains(&left.minutes));
        prop_assert!((0..60).contains(&left.seconds));
        prop_assert_eq!(
            left.days * SECONDS_PER_DAY + left.hours * 3600 + left.minutes * 60 + left.seconds,
            left.total_seconds
        );
        if delta <= 0 {
            prop_assert!(left.is_zero());
        } else {
            prop_assert_eq!(left.total_seconds, delta);
        }
    }

    /// Property: progress stays in [0, 1] and never decreases as time passes
    #[test]
    fn prop_year_progress_is_clamped_and_monotonic(
        day in 0..20_000i64,
        a in -60_000_000..60_000_000i64,
        b in -60_000_000..60_000_000i64,
    ) {
        let target = instant(day, 0);
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        let p_early = year_progress(target, target + Duration::seconds(early));
        let p_late = year_progress(target, target + Duration::seconds(late));

        prop_assert!((0.0..=1.0).contains(&p_early));
        prop_assert!((0.0..=1.0).contains(&p_late));
        prop_assert!(p_early <= p_late);
        if late >= 0 {
            prop_assert_eq!(p_late, 1.0);
        }
    }

    /// Property: the next birthday is never in the past and at most a year away
    #[test]
    fn prop_next_anniversary_within_a_year(
        birth_day in 0..9_000i64,
        now_day in 9_000..20_000i64,
        now_secs in 0..86_400i64,
    ) {
        let dob = instant(birth_day, 0).date();
        let now = instant(now_day, now_secs);
        let target = next_anniversary(dob, now);

        prop_assert!(target >= now);
        prop_assert!(target - now <= Duration::days(366));
        prop_assert_eq!(target.month(), dob.month());
        prop_assert!(target.day() == dob.day() || (dob.month() == 2 && dob.day() == 29));
    }
}
