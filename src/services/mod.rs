//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer:
//! validation, auditing and the budget summary.

pub mod budget;
pub mod expense;
pub mod summary;

pub use budget::BudgetService;
pub use expense::{ExpenseService, LedgerSummary, NewExpense};
pub use summary::{
    days_in_month, remaining_days_in_month, summarize, totals_by_category, CategoryTotal,
    DailyBudget, Summary, SummaryOutcome,
};
