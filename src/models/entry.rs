//! Expense entry model
//!
//! An entry is one recorded expense. Entries are immutable once built: fields
//! are only reachable through accessors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// Date format used for entry dates, both when typed and when stored
pub const ENTRY_DATE_FORMAT: &str = "%d/%m/%Y";

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    description: String,

    /// Category text as stored; only validated against [`Category`] when the
    /// entry is first created
    category: String,

    amount: Money,

    /// Date as `dd/mm/yyyy` text
    date: String,
}

impl Entry {
    /// Create a new validated entry from user input
    pub fn new(
        description: impl Into<String>,
        category: Category,
        amount: Money,
        date: NaiveDate,
    ) -> Result<Self, EntryValidationError> {
        let description = description.into();

        if description.trim().is_empty() {
            return Err(EntryValidationError::EmptyDescription);
        }

        if amount.is_negative() {
            return Err(EntryValidationError::NegativeAmount(amount));
        }

        Ok(Self {
            description,
            category: category.label().to_string(),
            amount,
            date: date.format(ENTRY_DATE_FORMAT).to_string(),
        })
    }

    /// Rebuild an entry from a ledger line
    ///
    /// The category and date are kept as the text that was stored.
    pub fn from_stored(
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        date: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            category: category.into(),
            amount,
            date: date.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Date text exactly as stored
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Category text with surrounding whitespace removed (the grouping key)
    pub fn category_key(&self) -> &str {
        self.category.trim()
    }

    /// Best-effort parse of the stored date text
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), ENTRY_DATE_FORMAT).ok()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Expense: {}, {} {}, {}>",
            self.description, self.category, self.amount, self.date
        )
    }
}

/// Parse a typed `dd/mm/yyyy` date
pub fn parse_entry_date(input: &str) -> Result<NaiveDate, EntryValidationError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, ENTRY_DATE_FORMAT)
        .map_err(|_| EntryValidationError::InvalidDate(input.to_string()))
}

/// Validation errors for entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyDescription,
    NegativeAmount(Money),
    InvalidDate(String),
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Expense amount cannot be negative ({})", amount)
            }
            Self::InvalidDate(text) => {
                write!(f, "Invalid date '{}' (expected dd/mm/yyyy)", text)
            }
        }
    }
}

impl std::error::Error for EntryValidationError {}
