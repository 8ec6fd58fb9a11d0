use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// A single recorded interval of work as supplied by the time-tracking provider.
///
/// Timestamps keep the offset they were recorded with; that offset is the
/// entry's local time zone.
pub struct RawEntry {
    pub description: String,
    pub start: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<FixedOffset>>,
}

impl RawEntry {
    pub fn new(
        description: impl Into<String>,
        start: DateTime<FixedOffset>,
        end: Option<DateTime<FixedOffset>>,
    ) -> Self {
        Self {
            description: description.into(),
            start,
            end,
        }
    }

    /// Calendar date of `start` in the entry's own offset. `end` is never consulted.
    pub fn date_key(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// True while the timer is still running (no end recorded).
    pub fn is_running(&self) -> bool {
        self.end.is_none()
    }
}
