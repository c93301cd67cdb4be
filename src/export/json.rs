//! JSON Export functionality
//!
//! Exports the ledger and the current budget to JSON with schema versioning.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Budget, Entry, Money};
use crate::storage::{BudgetLoad, Storage};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Stored budget, if a valid one exists
    pub budget: Option<Budget>,

    /// Every readable ledger entry in file order
    pub entries: Vec<Entry>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub entry_count: usize,

    /// Ledger lines that could not be read and were left out
    pub skipped_lines: usize,

    /// Sum of all exported amounts
    pub total: Money,
}

impl LedgerExport {
    /// Build an export from storage
    pub fn from_storage(storage: &Storage) -> ExpenseResult<Self> {
        let load = storage.ledger.load_all()?;
        let budget = match storage.budget.load()? {
            BudgetLoad::Loaded(budget) => Some(budget),
            BudgetLoad::Missing | BudgetLoad::Invalid(_) => None,
        };

        let metadata = ExportMetadata {
            entry_count: load.entries.len(),
            skipped_lines: load.diagnostics.len(),
            total: load.entries.iter().map(Entry::amount).sum(),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            budget,
            entries: load.entries,
            metadata,
        })
    }
}

/// Export the ledger to JSON
pub fn export_ledger_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = LedgerExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
