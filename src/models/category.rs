//! Expense categories
//!
//! The category set is closed: every new expense is tagged with one of the
//! variants below. The decorated label is what gets written to the ledger and
//! shown in menus; the plain name is what users type on the command line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Home,
    Others,
    Fun,
}

impl Category {
    /// Get all categories in menu order
    pub fn all() -> &'static [Self] {
        &[Self::Food, Self::Home, Self::Others, Self::Fun]
    }

    /// Plain tag name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Home => "Home",
            Self::Others => "Others",
            Self::Fun => "Fun",
        }
    }

    /// Decorated label used for display and storage
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "🍔 Food",
            Self::Home => "🏠 Home",
            Self::Others => "✨ Others",
            Self::Fun => "🎉 Fun",
        }
    }

    /// Look up a category by its menu index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Parse a typed menu index; non-numeric input is treated like an
    /// out-of-range index
    pub fn parse_index(input: &str) -> Option<Self> {
        input.trim().parse::<usize>().ok().and_then(Self::from_index)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when text does not name a known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Category::all().iter().map(|c| c.name()).collect();
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts the plain name or the decorated label, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| {
                c.name().eq_ignore_ascii_case(needle) || c.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| UnknownCategory(needle.to_string()))
    }
}
