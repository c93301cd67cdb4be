//! Path management for the expense tracker
//!
//! Resolves where the budget file, the expense ledger, settings and the audit
//! log live.
//!
//! ## Path Resolution Order
//!
//! 1. An explicit base directory (the `--data-dir` flag)
//! 2. `EXPENSE_TRACKER_DATA_DIR` environment variable (if set)
//! 3. The current working directory
//!
//! The ledger and budget files can additionally be pointed anywhere with
//! [`ExpensePaths::with_ledger_file`] and [`ExpensePaths::with_budget_file`].

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

/// Default budget file name
pub const BUDGET_FILE_NAME: &str = "budget.txt";

/// Default ledger file name
pub const LEDGER_FILE_NAME: &str = "expenses.csv";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for all expense tracker data
    base_dir: PathBuf,
    ledger_override: Option<PathBuf>,
    budget_override: Option<PathBuf>,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance
    ///
    /// Uses `EXPENSE_TRACKER_DATA_DIR` when set, otherwise the current
    /// working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            std::env::current_dir().map_err(|e| {
                ExpenseError::Config(format!("Could not determine current directory: {}", e))
            })?
        };

        Ok(Self::with_base_dir(base_dir))
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            ledger_override: None,
            budget_override: None,
        }
    }

    /// Point the ledger at a specific file
    pub fn with_ledger_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.ledger_override = Some(path.into());
        self
    }

    /// Point the budget at a specific file
    pub fn with_budget_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.budget_override = Some(path.into());
        self
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the expense ledger (expenses.csv)
    pub fn ledger_file(&self) -> PathBuf {
        self.ledger_override
            .clone()
            .unwrap_or_else(|| self.base_dir.join(LEDGER_FILE_NAME))
    }

    /// Get the path to the budget file (budget.txt)
    pub fn budget_file(&self) -> PathBuf {
        self.budget_override
            .clone()
            .unwrap_or_else(|| self.base_dir.join(BUDGET_FILE_NAME))
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("expense-tracker.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.ledger_file(), temp_dir.path().join("expenses.csv"));
        assert_eq!(paths.budget_file(), temp_dir.path().join("budget.txt"));
        assert_eq!(
            paths.settings_file(),
            temp_dir.path().join("expense-tracker.json")
        );
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_file_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = temp_dir.path().join("other").join("spend.csv");
        let budget = temp_dir.path().join("limit.txt");

        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf())
            .with_ledger_file(&ledger)
            .with_budget_file(&budget);

        assert_eq!(paths.ledger_file(), ledger);
        assert_eq!(paths.budget_file(), budget);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("data");
        let paths = ExpensePaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();
        assert!(base.exists());
    }
}
