//! Weekly and semi-monthly pay-period resolution and navigation.
//!
//! Every function here is a pure function of its inputs. Weeks run Monday
//! through Sunday. Semi-monthly windows split each month into the 1st-15th and
//! the 16th-last day.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use klakie_domain::{last_day_of_month, monday_of, with_day_clamped, PayPeriod, PeriodKind};

use crate::time::Clock;

const FIRST_HALF_LAST_DAY: u32 = 15;
const SECOND_HALF_FIRST_DAY: u32 = 16;

/// Monday 00:00:00 through the following Sunday 23:59:59 around `date`.
pub fn weekly_containing(date: NaiveDate) -> PayPeriod {
    let monday = monday_of(date);
    PayPeriod::from_days(monday, monday + Duration::days(6), PeriodKind::Weekly)
}

/// Days before the 15th resolve to the first half; the 15th onwards to the second.
pub fn semi_monthly_containing(date: NaiveDate) -> PayPeriod {
    if date.day() < FIRST_HALF_LAST_DAY {
        PayPeriod::from_days(
            with_day_clamped(date, 1),
            with_day_clamped(date, FIRST_HALF_LAST_DAY),
            PeriodKind::SemiMonthly,
        )
    } else {
        PayPeriod::from_days(
            with_day_clamped(date, SECOND_HALF_FIRST_DAY),
            last_day_of_month(date),
            PeriodKind::SemiMonthly,
        )
    }
}

pub fn containing(kind: PeriodKind, date: NaiveDate) -> PayPeriod {
    match kind {
        PeriodKind::Weekly => weekly_containing(date),
        PeriodKind::SemiMonthly => semi_monthly_containing(date),
    }
}

/// Re-resolves around the current window's first day, not around today.
pub fn switch_kind(period: &PayPeriod, kind: PeriodKind) -> PayPeriod {
    containing(kind, period.first_day())
}

pub fn next(period: &PayPeriod) -> PayPeriod {
    match period.kind {
        PeriodKind::Weekly => shift_weeks(period, 1),
        PeriodKind::SemiMonthly => {
            let start = period.last_day() + Duration::days(1);
            let end = if start.day() > FIRST_HALF_LAST_DAY {
                last_day_of_month(start)
            } else {
                with_day_clamped(start, FIRST_HALF_LAST_DAY)
            };
            PayPeriod::from_days(start, end, PeriodKind::SemiMonthly)
        }
    }
}

pub fn prev(period: &PayPeriod) -> PayPeriod {
    match period.kind {
        PeriodKind::Weekly => shift_weeks(period, -1),
        PeriodKind::SemiMonthly => {
            let end = period.first_day() - Duration::days(1);
            let start = if end.day() > FIRST_HALF_LAST_DAY {
                with_day_clamped(end, SECOND_HALF_FIRST_DAY)
            } else {
                with_day_clamped(end, 1)
            };
            PayPeriod::from_days(start, end, PeriodKind::SemiMonthly)
        }
    }
}

/// Applies `next` (positive) or `prev` (negative) `steps` times.
pub fn step(period: &PayPeriod, steps: i32) -> PayPeriod {
    let advance = if steps >= 0 { next } else { prev };
    (0..steps.unsigned_abs()).fold(*period, |current, _| advance(&current))
}

/// Document-header label derived from the period alone.
///
/// Semi-monthly: `aug2021a` for the first half, `aug2021b` for the second.
/// Weekly: `Aug 02 - Aug 08`.
pub fn label(period: &PayPeriod) -> String {
    let first = period.first_day();
    match period.kind {
        PeriodKind::SemiMonthly => {
            let half = if first.day() == 1 { 'a' } else { 'b' };
            format!("{}{}", first.format("%b%Y"), half).to_lowercase()
        }
        PeriodKind::Weekly => format!(
            "{} - {}",
            first.format("%b %d"),
            period.last_day().format("%b %d")
        ),
    }
}

fn shift_weeks(period: &PayPeriod, weeks: i64) -> PayPeriod {
    PayPeriod::from_days(
        period.first_day() + Duration::weeks(weeks),
        period.last_day() + Duration::weeks(weeks),
        period.kind,
    )
}

/// Navigation state for callers that page through periods.
///
/// Each transition replaces the held period with a freshly built one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayPeriodResolver {
    current: PayPeriod,
}

impl PayPeriodResolver {
    /// Starts on the weekly period containing `reference`.
    pub fn new(reference: DateTime<Utc>) -> Self {
        Self::with_period(weekly_containing(reference.date_naive()))
    }

    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::with_period(weekly_containing(clock.today()))
    }

    pub fn with_period(current: PayPeriod) -> Self {
        Self { current }
    }

    pub fn current(&self) -> PayPeriod {
        self.current
    }

    pub fn kind(&self) -> PeriodKind {
        self.current.kind
    }

    pub fn switch_kind(&mut self, kind: PeriodKind) -> PayPeriod {
        self.replace(switch_kind(&self.current, kind))
    }

    pub fn next_period(&mut self) -> PayPeriod {
        self.replace(next(&self.current))
    }

    pub fn prev_period(&mut self) -> PayPeriod {
        self.replace(prev(&self.current))
    }

    pub fn step(&mut self, steps: i32) -> PayPeriod {
        self.replace(step(&self.current, steps))
    }

    pub fn label(&self) -> String {
        label(&self.current)
    }

    fn replace(&mut self, period: PayPeriod) -> PayPeriod {
        tracing::debug!(
            kind = %period.kind,
            start = %period.start,
            end = %period.end,
            "pay period resolved"
        );
        self.current = period;
        period
    }
}
