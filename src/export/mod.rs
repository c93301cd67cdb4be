//! Export module for the expense tracker
//!
//! Provides data export in two formats:
//! - Text: a human-readable category report
//! - JSON: the full ledger plus budget, machine-readable

pub mod json;
pub mod report;

pub use json::{export_ledger_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use report::{export_report, write_report};
