//! Occurrence model for the tracked annual date.
//!
//! An `OccurrenceInfo` is produced fresh by the countdown service and only
//! ever read by the presentation layer.

use serde::{Deserialize, Serialize};

/// Month of International Men's Day.
pub const OCCURRENCE_MONTH: u32 = 11;
/// Day of month of International Men's Day.
pub const OCCURRENCE_DAY: u32 = 19;

/// Divisor used for the cosmetic year-progress figure. Always 365, even in
/// leap years.
pub const PROGRESS_YEAR_DAYS: i64 = 365;

/// Where a given date sits relative to the next (or current) occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OccurrenceInfo {
    /// Calendar year of the applicable occurrence
    pub year: i32,
    /// True when the input date is November 19
    pub is_today: bool,
    /// Whole days until the occurrence, 0 when `is_today`
    pub days_left: i64,
    /// Approximate year progress, only present when not `is_today`
    pub progress_percent: Option<f64>,
}

impl OccurrenceInfo {
    /// Occurrence that falls on the input date itself.
    pub fn today(year: i32) -> Self {
        Self {
            year,
            is_today: true,
            days_left: 0,
            progress_percent: None,
        }
    }

    /// Upcoming occurrence `days_left` days away.
    pub fn upcoming(year: i32, days_left: i64) -> Self {
        Self {
            year,
            is_today: false,
            days_left,
            progress_percent: Some(progress_for(days_left)),
        }
    }

    /// Window title, e.g. "International Men's Day 2024".
    pub fn title(&self) -> String {
        format!("International Men's Day {}", self.year)
    }

    /// Long-form date label, e.g. "November 19, 2024".
    pub fn date_label(&self) -> String {
        format!("November {}, {}", OCCURRENCE_DAY, self.year)
    }

    /// Banner on the day itself, countdown line otherwise.
    pub fn headline(&self) -> String {
        if self.is_today {
            "🎉 TODAY WE CELEBRATE EVERY AMAZING MAN AROUND THE WORLD! 🎉".to_string()
        } else {
            format!(
                "⏳ Only {} day{} until International Men's Day!",
                self.days_left,
                if self.days_left == 1 { "" } else { "s" }
            )
        }
    }

    pub fn progress_label(&self) -> Option<String> {
        self.progress_percent
            .map(|percent| format!("Year progress: {:.1}%", percent))
    }

    /// Fill fraction for a progress bar. The label keeps the raw value; only
    /// the drawn bar is clamped.
    pub fn progress_fraction(&self) -> Option<f32> {
        self.progress_percent
            .map(|percent| ((percent / 100.0) as f32).clamp(0.0, 1.0))
    }
}

fn progress_for(days_left: i64) -> f64 {
    (PROGRESS_YEAR_DAYS - days_left) as f64 / PROGRESS_YEAR_DAYS as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_has_no_progress() {
        let info = OccurrenceInfo::today(2024);
        assert!(info.is_today);
        assert_eq!(info.days_left, 0);
        assert_eq!(info.progress_percent, None);
        assert_eq!(info.progress_label(), None);
        assert_eq!(info.progress_fraction(), None);
    }

    #[test]
    fn test_upcoming_progress() {
        let info = OccurrenceInfo::upcoming(2024, 323);
        let percent = info.progress_percent.unwrap();
        assert!((percent - 11.506849).abs() < 1e-4);
        assert_eq!(info.progress_label().as_deref(), Some("Year progress: 11.5%"));
    }

    #[test]
    fn test_progress_is_not_clamped() {
        let info = OccurrenceInfo::upcoming(2024, 366);
        assert!(info.progress_percent.unwrap() < 0.0);
        assert_eq!(info.progress_fraction(), Some(0.0));
    }

    #[test]
    fn test_title_and_date_label() {
        let info = OccurrenceInfo::upcoming(2025, 10);
        assert_eq!(info.title(), "International Men's Day 2025");
        assert_eq!(info.date_label(), "November 19, 2025");
    }

    #[test]
    fn test_headline_plural() {
        assert_eq!(
            OccurrenceInfo::upcoming(2024, 1).headline(),
            "⏳ Only 1 day until International Men's Day!"
        );
        assert_eq!(
            OccurrenceInfo::upcoming(2024, 2).headline(),
            "⏳ Only 2 days until International Men's Day!"
        );
    }

    #[test]
    fn test_headline_today() {
        assert!(OccurrenceInfo::today(2024).headline().starts_with("🎉 TODAY"));
    }
}
