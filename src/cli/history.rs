//! Audit history CLI command

use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_history_command(storage: &Storage, count: usize) -> ExpenseResult<()> {
    let Some(audit) = storage.audit() else {
        println!("Audit logging is disabled in settings.");
        return Ok(());
    };

    let entries = audit.read_recent(count)?;
    if entries.is_empty() {
        println!("No recorded changes yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
