//! Groups raw entries into calendar days and, within each day, by description.

use chrono::NaiveDate;
use klakie_domain::{DailyBucket, DescriptionGroup, RawEntry};

use crate::{duration::DurationCalculator, utils::OrderedMap};

/// Stateless grouping utilities that operate over entry snapshots.
pub struct TimeEntryAggregator;

impl TimeEntryAggregator {
    /// Buckets entries by the local date of their start, in first-seen order.
    ///
    /// Description groups are scoped to their day: the same description on two
    /// days yields two independent groups.
    pub fn group_by_day(entries: &[RawEntry]) -> Vec<DailyBucket> {
        let mut by_day: OrderedMap<NaiveDate, Vec<RawEntry>> = OrderedMap::new();
        for entry in entries {
            by_day
                .get_or_insert_with(entry.date_key(), Vec::new)
                .push(entry.clone());
        }

        let buckets: Vec<DailyBucket> = by_day
            .into_iter()
            .map(|(date_key, day_entries)| Self::build_bucket(date_key, day_entries))
            .collect();

        tracing::debug!(
            entries = entries.len(),
            days = buckets.len(),
            "grouped time entries by day"
        );
        buckets
    }

    /// Sum of [`DurationCalculator::hours_between`] over `entries`.
    pub fn total_hours(entries: &[RawEntry]) -> f64 {
        entries
            .iter()
            .map(|entry| DurationCalculator::hours_between(entry.start, entry.end))
            .sum()
    }

    fn build_bucket(date_key: NaiveDate, entries: Vec<RawEntry>) -> DailyBucket {
        let mut by_description: OrderedMap<String, Vec<RawEntry>> = OrderedMap::new();
        for entry in &entries {
            by_description
                .get_or_insert_with(entry.description.clone(), Vec::new)
                .push(entry.clone());
        }

        let groups: Vec<DescriptionGroup> = by_description
            .into_iter()
            .map(|(key, group_entries)| DescriptionGroup {
                total_hours: Self::total_hours(&group_entries),
                key,
                entries: group_entries,
            })
            .collect();
        let total_hours = groups.iter().map(|group| group.total_hours).sum();

        DailyBucket {
            date_key,
            entries,
            total_hours,
            groups,
        }
    }
}
