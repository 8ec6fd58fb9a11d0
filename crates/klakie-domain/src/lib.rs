//! klakie-domain
//!
//! Pure data types for time entries, daily buckets, pay periods and invoices.
//! No I/O, no CLI, no persistence. Only data types and calendar helpers.

pub mod common;
pub mod entry;
pub mod period;
pub mod report;

pub use common::*;
pub use entry::*;
pub use period::*;
pub use report::*;
