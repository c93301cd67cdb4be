//! Expense CLI commands
//!
//! Scripted counterparts of the menu's "add" and "summary" actions.

use chrono::Local;

use crate::config::settings::Settings;
use crate::display::{format_ledger_summary, format_summary_table, DisplayOptions};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_entry_date, Category, Money};
use crate::services::{BudgetService, ExpenseService, NewExpense, SummaryOutcome};
use crate::storage::Storage;

/// Append one expense to the ledger
pub fn handle_add_command(
    storage: &Storage,
    settings: &Settings,
    description: String,
    amount: &str,
    category: Category,
    date: Option<&str>,
) -> ExpenseResult<()> {
    let amount = Money::parse(amount).map_err(|e| ExpenseError::Validation(e.to_string()))?;
    let date = match date {
        Some(text) => parse_entry_date(text).map_err(|e| ExpenseError::Validation(e.to_string()))?,
        None => Local::now().date_naive(),
    };

    let entry = ExpenseService::new(storage).record(NewExpense {
        description,
        category,
        amount,
        date,
    })?;

    let display = DisplayOptions::from_settings(settings);
    println!(
        "Added: {} {} {} on {}",
        entry.description(),
        entry.category(),
        display.money(entry.amount()),
        entry.date()
    );

    Ok(())
}

/// Print the summary against the stored budget
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    table: bool,
) -> ExpenseResult<()> {
    let budget = BudgetService::new(storage).require()?;
    let summary = ExpenseService::new(storage).summarize(budget, Local::now().date_naive())?;
    let display = DisplayOptions::from_settings(settings);

    match &summary.outcome {
        SummaryOutcome::Report(report) if table => {
            for diagnostic in &summary.diagnostics {
                eprintln!("{}", diagnostic);
            }
            print!("{}", format_summary_table(report, &display));
        }
        _ => print!("{}", format_ledger_summary(&summary, &display)),
    }

    Ok(())
}
