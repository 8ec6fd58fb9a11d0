//! Elapsed-time conversions between instants, hours, seconds and `HH:MM:SS`.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_MINUTE: f64 = 60.0;
const MILLIS_PER_SECOND: f64 = 1000.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Unit of a decimal duration passed to [`DurationCalculator::format_duration`].
pub enum DurationUnit {
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
}

pub struct DurationCalculator;

impl DurationCalculator {
    /// Hours elapsed from `start` to `end`, or `0.0` while the entry has no end.
    pub fn hours_between(start: DateTime<FixedOffset>, end: Option<DateTime<FixedOffset>>) -> f64 {
        match end {
            Some(end) => {
                let seconds = (end - start).num_milliseconds() as f64 / MILLIS_PER_SECOND;
                Self::seconds_to_hours(seconds)
            }
            None => 0.0,
        }
    }

    /// Formats seconds as zero-padded `HH:MM:SS`, truncating fractional seconds.
    ///
    /// Negative input is clamped to zero.
    pub fn seconds_to_hms(seconds: f64) -> String {
        let total = seconds.max(0.0).floor() as u64;
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        let secs = total % 60;
        format!("{hours:02}:{minutes:02}:{secs:02}")
    }

    /// Scales `value` to seconds and formats it as `HH:MM:SS`.
    pub fn format_duration(value: f64, unit: DurationUnit) -> String {
        let seconds = match unit {
            DurationUnit::Hours => Self::hours_to_seconds(value),
            DurationUnit::Minutes => Self::minutes_to_seconds(value),
            DurationUnit::Seconds => value,
            DurationUnit::Milliseconds => value / MILLIS_PER_SECOND,
        };
        Self::seconds_to_hms(seconds)
    }

    pub fn hours_to_seconds(hours: f64) -> f64 {
        hours * SECONDS_PER_HOUR
    }

    pub fn minutes_to_seconds(minutes: f64) -> f64 {
        minutes * SECONDS_PER_MINUTE
    }

    pub fn seconds_to_hours(seconds: f64) -> f64 {
        seconds / SECONDS_PER_HOUR
    }
}
