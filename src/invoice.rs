//! Composes grouping, period labelling and earnings into an invoice payload.

use chrono::Datelike;
use klakie_config::InvoiceConfig;
use klakie_domain::{DailyBucket, InvoiceAggregate, InvoiceRow, InvoiceTotals, PayPeriod, RawEntry};

use crate::{
    aggregation::TimeEntryAggregator,
    duration::DurationCalculator,
    earnings::EarningsCalculator,
    entries::{parse_entries, RawRecord},
    errors::Result,
    pay_period,
};

const ROW_DESCRIPTION_LIMIT: usize = 48;
const ROW_DESCRIPTION_OMISSION: &str = "...";

pub struct InvoiceAggregateBuilder;

impl InvoiceAggregateBuilder {
    /// Builds the invoice payload for entries already scoped to `period`.
    ///
    /// `tax_percent` is a whole-number percentage (12.0 for 12%). Earnings are
    /// computed once over the grand-total hours; each row's `due` is an
    /// independent per-day figure and may not sum exactly to the gross total.
    pub fn build(
        entries: &[RawEntry],
        hourly_rate: f64,
        tax_percent: f64,
        period: &PayPeriod,
    ) -> InvoiceAggregate {
        let mut daily_buckets = TimeEntryAggregator::group_by_day(entries);
        daily_buckets.sort_by_key(|bucket| bucket.date_key);

        let total_hours: f64 = daily_buckets.iter().map(|bucket| bucket.total_hours).sum();
        let earnings = EarningsCalculator::calculate(
            total_hours,
            hourly_rate,
            EarningsCalculator::percent_to_decimal(tax_percent),
        );
        let totals = InvoiceTotals {
            total_hours,
            total_seconds: DurationCalculator::hours_to_seconds(total_hours),
            gross_earnings: earnings.gross_earnings,
            tax_withheld: earnings.tax_withheld,
            net_earnings: earnings.net_earnings,
        };

        let rows = daily_buckets
            .iter()
            .map(|bucket| Self::row_for(bucket, hourly_rate))
            .collect();
        let period_label = pay_period::label(period);

        tracing::debug!(
            period = %period_label,
            days = daily_buckets.len(),
            total_hours,
            "built invoice aggregate"
        );

        InvoiceAggregate {
            daily_buckets,
            rows,
            totals,
            period_label,
        }
    }

    /// Same as [`Self::build`], reading rate and tax from the configuration record.
    pub fn build_for_config(
        entries: &[RawEntry],
        config: &InvoiceConfig,
        period: &PayPeriod,
    ) -> InvoiceAggregate {
        Self::build(entries, config.hourly_rate, config.tax_percent, period)
    }

    /// Parses provider records and builds the payload; any malformed record fails the request.
    pub fn build_from_records(
        records: &[RawRecord],
        hourly_rate: f64,
        tax_percent: f64,
        period: &PayPeriod,
    ) -> Result<InvoiceAggregate> {
        let entries = parse_entries(records)?;
        Ok(Self::build(&entries, hourly_rate, tax_percent, period))
    }

    fn row_for(bucket: &DailyBucket, hourly_rate: f64) -> InvoiceRow {
        let joined = bucket
            .groups
            .iter()
            .map(|group| group.key.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        InvoiceRow {
            date: bucket.date_key,
            descriptions: truncate(&joined, ROW_DESCRIPTION_LIMIT),
            week_number: bucket.date_key.iso_week().week(),
            hours: bucket.total_hours,
            due: bucket.total_hours * hourly_rate,
        }
    }
}

/// Shortens `text` to at most `limit` characters, ending in `...` when cut.
fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let keep = limit.saturating_sub(ROW_DESCRIPTION_OMISSION.len());
    let mut shortened: String = text.chars().take(keep).collect();
    shortened.push_str(ROW_DESCRIPTION_OMISSION);
    shortened
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, NaiveDate};
    use klakie_domain::PeriodKind;

    fn at(raw: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(raw).unwrap()
    }

    fn entry(description: &str, start: &str, end: Option<&str>) -> RawEntry {
        RawEntry::new(description, at(start), end.map(at))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn week() -> PayPeriod {
        pay_period::weekly_containing(date(2021, 8, 4))
    }

    fn sample() -> Vec<RawEntry> {
        vec![
            entry("Deploy", "2021-08-04T09:00:00Z", Some("2021-08-04T13:00:00Z")),
            entry("Bug fix", "2021-08-02T09:00:00Z", Some("2021-08-02T15:00:00Z")),
            entry("Review", "2021-08-04T14:00:00Z", None),
        ]
    }

    #[test]
    fn buckets_are_sorted_ascending_and_totals_use_aggregate_hours() {
        let aggregate = InvoiceAggregateBuilder::build(&sample(), 500.0, 2.0, &week());

        let dates: Vec<_> = aggregate.daily_buckets.iter().map(|b| b.date_key).collect();
        assert_eq!(dates, vec![date(2021, 8, 2), date(2021, 8, 4)]);
        assert_eq!(aggregate.totals.total_hours, 10.0);
        assert_eq!(aggregate.totals.total_seconds, 36_000.0);
        assert_eq!(aggregate.totals.gross_earnings, 5000.0);
        assert_eq!(aggregate.totals.tax_withheld, 100.0);
        assert_eq!(aggregate.totals.net_earnings, 4900.0);
        assert_eq!(aggregate.period_label, "Aug 02 - Aug 08");
    }

    #[test]
    fn rows_carry_per_day_display_figures() {
        let aggregate = InvoiceAggregateBuilder::build(&sample(), 500.0, 2.0, &week());
        let row = &aggregate.rows[1];
        assert_eq!(row.date, date(2021, 8, 4));
        assert_eq!(row.descriptions, "Deploy, Review");
        assert_eq!(row.week_number, 31);
        assert_eq!(row.hours, 4.0);
        assert_eq!(row.due, 2000.0);
    }

    #[test]
    fn build_is_idempotent() {
        let first = InvoiceAggregateBuilder::build(&sample(), 437.5, 12.0, &week());
        let second = InvoiceAggregateBuilder::build(&sample(), 437.5, 12.0, &week());
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn config_record_supplies_rate_and_tax() {
        let config = InvoiceConfig {
            hourly_rate: 100.0,
            tax_percent: 10.0,
            ..InvoiceConfig::default()
        };
        let period = pay_period::semi_monthly_containing(date(2021, 8, 4));
        let aggregate = InvoiceAggregateBuilder::build_for_config(&sample(), &config, &period);
        assert_eq!(aggregate.totals.gross_earnings, 1000.0);
        assert_eq!(aggregate.totals.tax_withheld, 100.0);
        assert_eq!(aggregate.period_label, "aug2021a");
        assert_eq!(period.kind, PeriodKind::SemiMonthly);
    }

    #[test]
    fn malformed_record_produces_no_aggregate() {
        let records = vec![RawRecord {
            description: "No start".into(),
            start: None,
            end: None,
        }];
        assert!(InvoiceAggregateBuilder::build_from_records(&records, 1.0, 2.0, &week()).is_err());
    }

    #[test]
    fn long_descriptions_are_truncated() {
        let text = "a".repeat(60);
        let shortened = truncate(&text, 48);
        assert_eq!(shortened.chars().count(), 48);
        assert!(shortened.ends_with("..."));
        assert_eq!(truncate("short", 48), "short");
    }
}
