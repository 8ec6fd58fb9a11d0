//! Pay-period windows used to scope and label invoices.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{end_of_day, start_of_day};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
/// Enumerates the supported billing cadences.
pub enum PeriodKind {
    #[default]
    Weekly,
    SemiMonthly,
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PeriodKind::Weekly => "weekly",
            PeriodKind::SemiMonthly => "semi-monthly",
        };
        f.write_str(label)
    }
}

impl FromStr for PeriodKind {
    type Err = PeriodKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(PeriodKind::Weekly),
            "semi-monthly" | "semimonthly" => Ok(PeriodKind::SemiMonthly),
            other => Err(PeriodKindError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Returned when a period kind name is not recognised.
pub struct PeriodKindError(pub String);

impl fmt::Display for PeriodKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown period kind `{}` (expected `weekly` or `semi-monthly`)",
            self.0
        )
    }
}

impl std::error::Error for PeriodKindError {}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// A billing window of whole UTC days.
///
/// `start` is 00:00:00 of the first included day and `end` is 23:59:59 of the
/// last included day.
pub struct PayPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub kind: PeriodKind,
}

impl PayPeriod {
    /// Builds a period from its first and last calendar days, normalizing both bounds.
    pub fn from_days(first: NaiveDate, last: NaiveDate, kind: PeriodKind) -> Self {
        Self {
            start: start_of_day(first),
            end: end_of_day(last),
            kind,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.start.date_naive()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.end.date_naive()
    }

    /// True when `instant`, seen in UTC, falls on one of the period's days.
    pub fn contains<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        let day = instant.with_timezone(&Utc).date_naive();
        self.contains_date(day)
    }

    /// True when `day` is one of the period's calendar days.
    pub fn contains_date(&self, day: NaiveDate) -> bool {
        day >= self.first_day() && day <= self.last_day()
    }
}
