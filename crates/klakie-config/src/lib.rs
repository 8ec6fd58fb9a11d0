//! klakie-config
//!
//! The invoice configuration record (identity, bank details, hourly rate, tax
//! percentage) plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::InvoiceConfig;
