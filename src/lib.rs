#![doc(test(attr(deny(warnings))))]

//! Klakie Core turns raw time-tracking entries into daily buckets, pay-period
//! windows and earnings figures ready for invoicing.
//!
//! The engine is pure and synchronous: every function takes its inputs
//! explicitly (including the reference date for period resolution) and builds
//! fresh results on each call.

pub mod aggregation;
pub mod cli;
pub mod duration;
pub mod earnings;
pub mod entries;
pub mod errors;
pub mod invoice;
pub mod pay_period;
pub mod time;
pub mod utils;

pub use aggregation::TimeEntryAggregator;
pub use duration::{DurationCalculator, DurationUnit};
pub use earnings::{EarningsCalculator, DEFAULT_TAX_DEDUCTION_PERCENT};
pub use entries::{parse_entries, DetailedReport, RawRecord};
pub use errors::{EngineError, Result};
pub use invoice::InvoiceAggregateBuilder;
pub use pay_period::PayPeriodResolver;
pub use time::{Clock, FixedClock, SystemClock};

pub use klakie_config as config;
pub use klakie_domain as domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Klakie Core tracing initialized.");
    });
}
