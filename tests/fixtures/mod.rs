// Test fixtures - reusable test data
// Provides consistent dates across all test files

#![allow(dead_code)]

use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Jan 1, 2024 (leap year, 323 days before the occurrence)
    pub fn new_years_day_2024() -> NaiveDate {
        ymd(2024, 1, 1)
    }

    /// Feb 29, 2024
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }

    /// Nov 18, 2024, the day before
    pub fn eve_2024() -> NaiveDate {
        ymd(2024, 11, 18)
    }

    /// Nov 19, 2024, the occurrence itself
    pub fn mens_day_2024() -> NaiveDate {
        ymd(2024, 11, 19)
    }

    /// Nov 20, 2024, the day after
    pub fn day_after_2024() -> NaiveDate {
        ymd(2024, 11, 20)
    }

    /// Dec 31, 2025
    pub fn new_years_eve_2025() -> NaiveDate {
        ymd(2025, 12, 31)
    }
}

/// Settings file contents for testing
pub mod settings {
    pub const FULL: &str = r#"
use_icon = false
icon_path = "icons/imd.png"
font_family = "DejaVu Sans"
today_override = "2024-11-18"
"#;

    pub const SYSTEM_FONT_ONLY: &str = "font_family = \"system-default\"\n";

    pub const MALFORMED: &str = "use_icon = [";
}
