//! Derived reporting structures. Built fresh per request and never patched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entry::RawEntry;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Entries of a single day sharing one exact description.
pub struct DescriptionGroup {
    pub key: String,
    pub entries: Vec<RawEntry>,
    pub total_hours: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// All entries whose start falls on `date_key`, sub-grouped by description.
pub struct DailyBucket {
    pub date_key: NaiveDate,
    pub entries: Vec<RawEntry>,
    pub total_hours: f64,
    pub groups: Vec<DescriptionGroup>,
}

impl DailyBucket {
    pub fn group(&self, key: &str) -> Option<&DescriptionGroup> {
        self.groups.iter().find(|group| group.key == key)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct EarningsResult {
    pub gross_earnings: f64,
    pub tax_withheld: f64,
    pub net_earnings: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
/// Grand totals for an invoice. Earnings come from the aggregate hours only.
pub struct InvoiceTotals {
    pub total_hours: f64,
    pub total_seconds: f64,
    pub gross_earnings: f64,
    pub tax_withheld: f64,
    pub net_earnings: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One line of the invoice table. `due` is a per-day display figure and is not
/// a component of [`InvoiceTotals`].
pub struct InvoiceRow {
    pub date: NaiveDate,
    pub descriptions: String,
    pub week_number: u32,
    pub hours: f64,
    pub due: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Reporting payload consumed by document generation.
pub struct InvoiceAggregate {
    pub daily_buckets: Vec<DailyBucket>,
    pub rows: Vec<InvoiceRow>,
    pub totals: InvoiceTotals,
    pub period_label: String,
}
