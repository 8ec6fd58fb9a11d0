//! Ingestion of provider records into validated [`RawEntry`] values.

use chrono::{DateTime, FixedOffset};
use klakie_domain::RawEntry;
use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, Result};

/// A time entry as delivered by the provider, timestamps still unparsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RawRecord {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

/// Detailed-report payload: entries nest their timestamps in `timeInterval`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DetailedReport {
    pub timeentries: Vec<ReportTimeEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTimeEntry {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub time_interval: ReportInterval,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportInterval {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl From<ReportTimeEntry> for RawRecord {
    fn from(entry: ReportTimeEntry) -> Self {
        RawRecord {
            description: entry.description,
            start: entry.time_interval.start,
            end: entry.time_interval.end,
        }
    }
}

impl DetailedReport {
    pub fn into_records(self) -> Vec<RawRecord> {
        self.timeentries.into_iter().map(RawRecord::from).collect()
    }
}

/// Parses every record or none.
///
/// A missing, blank or unparseable `start` rejects the whole batch, as does an
/// `end` that is present but unparseable. A missing or blank `end` marks a
/// running entry.
pub fn parse_entries(records: &[RawRecord]) -> Result<Vec<RawEntry>> {
    let parsed = records
        .iter()
        .enumerate()
        .map(|(index, record)| parse_record(index, record))
        .collect::<Result<Vec<_>>>();

    match &parsed {
        Ok(entries) => tracing::debug!(entries = entries.len(), "parsed raw entries"),
        Err(err) => tracing::warn!(records = records.len(), "rejected entry batch: {err}"),
    }
    parsed
}

fn parse_record(index: usize, record: &RawRecord) -> Result<RawEntry> {
    let start = match non_blank(record.start.as_deref()) {
        Some(raw) => parse_instant(index, "start", raw)?,
        None => {
            return Err(EngineError::MalformedEntry {
                index,
                reason: "missing start timestamp".into(),
            })
        }
    };
    let end = non_blank(record.end.as_deref())
        .map(|raw| parse_instant(index, "end", raw))
        .transpose()?;
    Ok(RawEntry::new(record.description.clone(), start, end))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|raw| !raw.is_empty())
}

fn parse_instant(index: usize, field: &str, raw: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).map_err(|err| EngineError::MalformedEntry {
        index,
        reason: format!("invalid {field} timestamp `{raw}`: {err}"),
    })
}
