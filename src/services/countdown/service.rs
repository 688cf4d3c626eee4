use crate::models::occurrence::{OccurrenceInfo, OCCURRENCE_DAY, OCCURRENCE_MONTH};
use crate::utils::date::{days_in_year, is_leap_year, local_today};
use chrono::{Datelike, NaiveDate};

/// Days in January through October of a common year.
const DAYS_BEFORE_NOVEMBER: u32 = 304;

/// Work out where `today` sits relative to November 19.
///
/// On the day itself the occurrence is "today". Otherwise the target is this
/// year's November 19 if it is still ahead, or next year's if it has passed.
/// Counts come from day-of-year ordinals, so next year's date is never built
/// and the last year chrono can represent still gets a real answer.
pub fn compute(today: NaiveDate) -> OccurrenceInfo {
    if today.month() == OCCURRENCE_MONTH && today.day() == OCCURRENCE_DAY {
        return OccurrenceInfo::today(today.year());
    }

    let year = today.year();
    let ordinal = today.ordinal();
    let this_year = occurrence_ordinal(year);

    if ordinal < this_year {
        OccurrenceInfo::upcoming(year, i64::from(this_year - ordinal))
    } else {
        let days_left = days_in_year(year) - ordinal + occurrence_ordinal(year + 1);
        OccurrenceInfo::upcoming(year + 1, i64::from(days_left))
    }
}

/// `compute` against the local wall-clock date.
pub fn compute_now() -> OccurrenceInfo {
    compute(local_today())
}

/// `compute` against an injected date if one is configured, else the clock.
pub fn compute_for(today_override: Option<NaiveDate>) -> OccurrenceInfo {
    match today_override {
        Some(date) => {
            log::info!("Using configured date {} instead of the clock", date);
            compute(date)
        }
        None => compute_now(),
    }
}

/// Day-of-year of November 19 in `year`.
fn occurrence_ordinal(year: i32) -> u32 {
    DAYS_BEFORE_NOVEMBER + u32::from(is_leap_year(year)) + OCCURRENCE_DAY
}
