//! Summary display formatting
//!
//! Renders a ledger summary for the terminal, either as the classic list
//! used by the interactive menu or as a table.

use std::io::IsTerminal;

use crossterm::style::Stylize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Money;
use crate::services::{DailyBudget, LedgerSummary, Summary, SummaryOutcome};

/// Presentation options taken from settings
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub color: bool,
}

impl DisplayOptions {
    /// Colors are only used when stdout is a terminal
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            color: settings.color && std::io::stdout().is_terminal(),
        }
    }

    /// Format an amount with the configured currency symbol
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    fn highlight(&self, text: String) -> String {
        if self.color {
            text.magenta().to_string()
        } else {
            text
        }
    }

    fn warn(&self, text: String) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text
        }
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Message shown when the ledger file does not exist
pub const NO_LEDGER_MESSAGE: &str = "No expenses file found. Please add expenses first.";

/// Message shown when there is nothing to summarize
pub const NOTHING_TO_SUMMARIZE_MESSAGE: &str = "No valid expenses to summarize.";

/// Message shown on the last day of the month
pub const NO_DAYS_LEFT_MESSAGE: &str =
    "⚠️ No remaining days in the current month to calculate daily budget.";

/// Format a summary as the category list followed by the budget lines
pub fn format_summary(summary: &Summary, options: &DisplayOptions) -> String {
    let mut output = String::new();

    output.push_str("Expenses by category 📉:\n");
    for total in &summary.by_category {
        output.push_str(&format!(
            "  {}: {}\n",
            total.category,
            options.money(total.total)
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "💵 Total spent: {}\n",
        options.money(summary.grand_total)
    ));

    let remaining = format!(
        "💵 Budget remaining: {}",
        options.money(summary.remaining)
    );
    if summary.is_over_budget() {
        output.push_str(&options.warn(remaining));
    } else {
        output.push_str(&remaining);
    }
    output.push('\n');

    match summary.daily {
        DailyBudget::Recommended { per_day, .. } => {
            output.push_str(&options.highlight(format!(
                "👌 Recommended Daily Budget: {}",
                options.money(per_day)
            )));
            output.push('\n');
        }
        DailyBudget::NoDaysLeft => {
            output.push_str(NO_DAYS_LEFT_MESSAGE);
            output.push('\n');
        }
    }

    output
}

/// Format a full ledger summary including skipped-line diagnostics
pub fn format_ledger_summary(summary: &LedgerSummary, options: &DisplayOptions) -> String {
    if summary.ledger_missing {
        return format!("{}\n", NO_LEDGER_MESSAGE);
    }

    let mut output = String::new();
    for diagnostic in &summary.diagnostics {
        output.push_str(&format!("{}\n", diagnostic));
    }

    match &summary.outcome {
        SummaryOutcome::Empty => {
            output.push_str(NOTHING_TO_SUMMARIZE_MESSAGE);
            output.push('\n');
        }
        SummaryOutcome::Report(report) => {
            if !summary.diagnostics.is_empty() {
                output.push('\n');
            }
            output.push_str(&format_summary(report, options));
        }
    }

    output
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Entries")]
    count: usize,
    #[tabled(rename = "Spent")]
    spent: String,
}

/// Format a summary as a table of categories followed by totals
pub fn format_summary_table(summary: &Summary, options: &DisplayOptions) -> String {
    let mut rows: Vec<CategoryRow> = summary
        .by_category
        .iter()
        .map(|total| CategoryRow {
            category: total.category.clone(),
            count: total.count,
            spent: options.money(total.total),
        })
        .collect();

    rows.push(CategoryRow {
        category: "TOTAL".to_string(),
        count: summary.entry_count,
        spent: options.money(summary.grand_total),
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output.push_str(&format!("Budget:    {}\n", options.money(summary.budget.amount())));
    output.push_str(&format!("Remaining: {}\n", options.money(summary.remaining)));
    match summary.daily {
        DailyBudget::Recommended {
            per_day,
            remaining_days,
        } => output.push_str(&format!(
            "Daily:     {} ({} days left)\n",
            options.money(per_day),
            remaining_days
        )),
        DailyBudget::NoDaysLeft => {
            output.push_str(NO_DAYS_LEFT_MESSAGE);
            output.push('\n');
        }
    }

    output
}
