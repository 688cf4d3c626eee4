// Date utility functions

use chrono::{Local, NaiveDate};

/// Today's date on the local wall clock.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Gregorian leap-year rule. Works for years chrono cannot represent.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2025));
        assert!(!is_leap_year(262_143));
    }

    #[test]
    fn test_leap_rule_agrees_with_chrono() {
        for year in 1582..2500 {
            assert_eq!(
                is_leap_year(year),
                NaiveDate::from_ymd_opt(year, 2, 29).is_some(),
                "year {}",
                year
            );
        }
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2025), 365);
    }
}
