// Property-based tests for the countdown calculation
// Checks the calculator's invariants across random dates

use chrono::{Datelike, NaiveDate};
use mens_day_greeter::services::countdown::compute;
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // Every day from 1900-01-01 onwards for roughly 300 years
    (0i64..110_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + chrono::Duration::days(offset)
    })
}

proptest! {
    /// Property: November 19 is always "today" with nothing left to count
    #[test]
    fn prop_occurrence_day_is_today(year in 1900..2200i32) {
        let today = NaiveDate::from_ymd_opt(year, 11, 19).unwrap();
        let info = compute(today);

        prop_assert!(info.is_today);
        prop_assert_eq!(info.days_left, 0);
        prop_assert_eq!(info.year, year);
        prop_assert_eq!(info.progress_percent, None);
    }

    /// Property: any other date counts down to a November 19 strictly ahead
    #[test]
    fn prop_other_days_count_down(today in any_date()) {
        prop_assume!(!(today.month() == 11 && today.day() == 19));
        let info = compute(today);

        prop_assert!(!info.is_today);
        prop_assert!(info.days_left > 0);
        prop_assert!(info.days_left <= 365);
        prop_assert!(info.year == today.year() || info.year == today.year() + 1);

        let target = NaiveDate::from_ymd_opt(info.year, 11, 19).unwrap();
        prop_assert!(target > today);
        prop_assert_eq!((target - today).num_days(), info.days_left);
    }

    /// Property: the progress figure follows the fixed 365-day formula
    #[test]
    fn prop_progress_uses_fixed_divisor(today in any_date()) {
        let info = compute(today);
        if let Some(percent) = info.progress_percent {
            let expected = (365 - info.days_left) as f64 / 365.0 * 100.0;
            prop_assert!((percent - expected).abs() < 1e-9);
            prop_assert!((0.0..100.0).contains(&percent));
        }
    }

    /// Property: same input, same output
    #[test]
    fn prop_compute_is_idempotent(today in any_date()) {
        prop_assert_eq!(compute(today), compute(today));
    }

    /// Property: consecutive days before the occurrence count down by one
    #[test]
    fn prop_next_day_has_one_less(today in any_date()) {
        let tomorrow = today.succ_opt().unwrap();
        let (a, b) = (compute(today), compute(tomorrow));
        prop_assume!(!a.is_today && !b.is_today);
        prop_assert_eq!(a.days_left - 1, b.days_left);
    }
}
