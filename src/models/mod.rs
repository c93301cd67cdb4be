//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the expense
//! domain: money amounts, categories, entries and the monthly budget.

pub mod budget;
pub mod category;
pub mod entry;
pub mod money;

pub use budget::Budget;
pub use category::{Category, UnknownCategory};
pub use entry::{parse_entry_date, Entry, EntryValidationError, ENTRY_DATE_FORMAT};
pub use money::{Money, MoneyParseError};
