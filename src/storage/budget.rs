//! Budget repository
//!
//! Persists the monthly budget as a single line of plain decimal text
//! (e.g. `1500.00`). Saving replaces the previous value.

use std::path::{Path, PathBuf};

use crate::error::ExpenseResult;
use crate::models::Budget;

use super::file_io::{read_bytes, write_text_atomic};

/// Outcome of reading the budget file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetLoad {
    /// A valid positive budget was stored
    Loaded(Budget),
    /// No budget file exists yet
    Missing,
    /// The file exists but does not hold a positive number
    Invalid(String),
}

/// Repository for the persisted budget value
pub struct BudgetRepository {
    path: PathBuf,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored budget
    ///
    /// Malformed content is reported as [`BudgetLoad::Invalid`] rather than an
    /// error so callers can fall back to asking the user.
    pub fn load(&self) -> ExpenseResult<BudgetLoad> {
        let Some(bytes) = read_bytes(&self.path)? else {
            tracing::info!(path = %self.path.display(), "budget file not found");
            return Ok(BudgetLoad::Missing);
        };

        let Ok(contents) = String::from_utf8(bytes) else {
            tracing::warn!(path = %self.path.display(), "budget file is not valid UTF-8");
            return Ok(BudgetLoad::Invalid("budget file is not valid text".into()));
        };

        match Budget::parse(contents.trim()) {
            Ok(budget) => {
                tracing::debug!(%budget, "loaded budget");
                Ok(BudgetLoad::Loaded(budget))
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "invalid budget file");
                Ok(BudgetLoad::Invalid(e.to_string()))
            }
        }
    }

    /// Save the budget, overwriting any previous value
    pub fn save(&self, budget: Budget) -> ExpenseResult<()> {
        write_text_atomic(
            &self.path,
            &format!("{}\n", budget.amount().to_decimal_string()),
        )?;
        tracing::debug!(%budget, path = %self.path.display(), "saved budget");
        Ok(())
    }
}
