//! Calendar helpers shared by pay periods and reports.
//!
//! All helpers work on calendar dates only. Conversions to instants always land
//! in UTC, which is the reference time zone for period boundaries.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

const SECONDS_PER_DAY_MINUS_ONE: i64 = 86_399;

/// Returns 00:00:00 UTC of `date`.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(date.and_time(NaiveTime::MIN), Utc)
}

/// Returns 23:59:59 UTC of `date`.
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    start_of_day(date) + Duration::seconds(SECONDS_PER_DAY_MINUS_ONE)
}

/// Returns the Monday of the week containing `date`.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let delta = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(delta)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_next| first_next.pred_opt())
        .map(|last_current| last_current.day())
        .unwrap_or(28)
}

/// Moves `date` to the given day of its month, clamped to the month's length.
pub fn with_day_clamped(date: NaiveDate, day: u32) -> NaiveDate {
    let day = day.clamp(1, days_in_month(date.year(), date.month()));
    date.with_day(day).unwrap_or(date)
}

pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    with_day_clamped(date, days_in_month(date.year(), date.month()))
}
