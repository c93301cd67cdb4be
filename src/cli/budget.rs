//! Budget CLI commands
//!
//! Shows or replaces the stored monthly budget without entering the menu.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::DisplayOptions;
use crate::error::ExpenseResult;
use crate::models::Budget;
use crate::services::BudgetService;
use crate::storage::{BudgetLoad, Storage};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the stored monthly budget
    Show,

    /// Set the monthly budget
    Set {
        /// Amount (e.g., "1500" or "1500.00")
        amount: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> ExpenseResult<()> {
    let service = BudgetService::new(storage);
    let display = DisplayOptions::from_settings(settings);

    match cmd {
        BudgetCommands::Show => match service.load()? {
            BudgetLoad::Loaded(budget) => {
                println!("Monthly budget: {}", display.money(budget.amount()));
            }
            BudgetLoad::Missing => {
                println!("No budget set.");
                println!("Run 'expense budget set <amount>' to set one.");
            }
            BudgetLoad::Invalid(reason) => {
                println!("Invalid data in budget file: {}", reason);
                println!("Run 'expense budget set <amount>' to reset it.");
            }
        },
        BudgetCommands::Set { amount } => {
            let budget = service.set(Budget::parse(&amount)?)?;
            println!("New budget set to {}", display.money(budget.amount()));
        }
    }

    Ok(())
}
