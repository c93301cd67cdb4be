//! Text report export
//!
//! Writes a human-readable expense report: the category breakdown followed by
//! the grand total.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::display::DisplayOptions;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Entry, Money};
use crate::services::totals_by_category;
use crate::storage::file_io::ensure_parent;

/// Write the report for `entries` to any writer
pub fn write_report<W: Write>(
    entries: &[Entry],
    writer: &mut W,
    options: &DisplayOptions,
) -> ExpenseResult<()> {
    let export_err = |e: std::io::Error| ExpenseError::Export(e.to_string());

    writeln!(writer, "Expense Report").map_err(export_err)?;
    writeln!(writer, "{}", "=".repeat(40)).map_err(export_err)?;
    writeln!(writer, "Expenses by Category:").map_err(export_err)?;

    for total in totals_by_category(entries) {
        writeln!(writer, "  {}: {}", total.category, options.money(total.total))
            .map_err(export_err)?;
    }

    let grand_total: Money = entries.iter().map(Entry::amount).sum();
    writeln!(writer).map_err(export_err)?;
    writeln!(writer, "Total Expenses: {}", options.money(grand_total)).map_err(export_err)?;

    Ok(())
}

/// Write the report to a file, replacing it if it exists
pub fn export_report<P: AsRef<Path>>(
    entries: &[Entry],
    path: P,
    options: &DisplayOptions,
) -> ExpenseResult<()> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    write_report(entries, &mut writer, options)?;
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    tracing::info!(path = %path.display(), entries = entries.len(), "wrote expense report");
    Ok(())
}
