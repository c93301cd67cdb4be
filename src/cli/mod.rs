//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod export;
pub mod history;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_add_command, handle_summary_command};
pub use export::{handle_export_command, handle_report_command};
pub use history::handle_history_command;
