//! CLI commands for report and data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::settings::Settings;
use crate::display::DisplayOptions;
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_ledger_json, export_report};
use crate::storage::Storage;

/// Write the text expense report
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    output: &Path,
) -> ExpenseResult<()> {
    let load = storage.ledger.load_all()?;
    for diagnostic in &load.diagnostics {
        eprintln!("{}", diagnostic);
    }

    export_report(
        &load.entries,
        output,
        &DisplayOptions::from_settings(settings),
    )?;
    println!(
        "Report with {} expenses written to: {}",
        load.entries.len(),
        output.display()
    );

    Ok(())
}

/// Write the ledger and budget as JSON
pub fn handle_export_command(storage: &Storage, output: &Path, pretty: bool) -> ExpenseResult<()> {
    let file = File::create(output).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    export_ledger_json(storage, &mut writer, pretty)?;
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    println!("Ledger exported to: {}", output.display());
    Ok(())
}
