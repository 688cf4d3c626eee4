// Unit tests for occurrence boundaries and display text

#[path = "../../fixtures/mod.rs"]
mod fixtures;

use chrono::NaiveDate;
use fixtures::dates;
use mens_day_greeter::services::countdown::compute;

#[cfg(test)]
mod boundaries {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(dates::eve_2024(), 2024, 1; "day before")]
    #[test_case(dates::day_after_2024(), 2025, 364; "day after")]
    #[test_case(dates::new_years_day_2024(), 2024, 323; "new years day")]
    #[test_case(dates::leap_day_2024(), 2024, 264; "leap day")]
    #[test_case(dates::new_years_eve_2025(), 2026, 323; "new years eve")]
    fn test_days_left(today: NaiveDate, year: i32, days_left: i64) {
        let info = compute(today);
        assert_eq!(info.year, year);
        assert_eq!(info.days_left, days_left);
        assert!(!info.is_today);
    }

    #[test]
    fn test_day_after_before_leap_year() {
        let info = compute(NaiveDate::from_ymd_opt(2027, 11, 20).unwrap());
        assert_eq!(info.year, 2028);
        assert_eq!(info.days_left, 365);
        assert_eq!(info.progress_label().as_deref(), Some("Year progress: 0.0%"));
    }
}

#[cfg(test)]
mod display {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(1, "⏳ Only 1 day until International Men's Day!"; "singular")]
    #[test_case(2, "⏳ Only 2 days until International Men's Day!"; "plural")]
    #[test_case(323, "⏳ Only 323 days until International Men's Day!"; "far away")]
    fn test_headline(days_left: i64, expected: &str) {
        let info = mens_day_greeter::models::occurrence::OccurrenceInfo::upcoming(2024, days_left);
        assert_eq!(info.headline(), expected);
    }

    #[test]
    fn test_today_banner() {
        let info = compute(dates::mens_day_2024());
        assert_eq!(
            info.headline(),
            "🎉 TODAY WE CELEBRATE EVERY AMAZING MAN AROUND THE WORLD! 🎉"
        );
        assert_eq!(info.progress_fraction(), None);
    }

    #[test]
    fn test_progress_fraction_matches_label() {
        let info = compute(dates::new_years_day_2024());
        let fraction = info.progress_fraction().unwrap();
        assert!((fraction - 0.11506849).abs() < 1e-4);
    }
}
