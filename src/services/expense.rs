//! Expense service
//!
//! Records new expenses to the ledger and produces summaries of everything
//! recorded so far.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Budget, Category, Entry, Money};
use crate::storage::{LedgerLoad, ParseDiagnostic, Storage};

use super::summary::{summarize, SummaryOutcome};

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub description: String,
    pub category: Category,
    pub amount: Money,
    pub date: NaiveDate,
}

/// A summary together with what happened while reading the ledger
#[derive(Debug, Clone)]
pub struct LedgerSummary {
    pub outcome: SummaryOutcome,
    /// Ledger lines that were skipped
    pub diagnostics: Vec<ParseDiagnostic>,
    /// True when no ledger file exists yet
    pub ledger_missing: bool,
}

/// Service for recording and summarizing expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and append a new expense
    pub fn record(&self, input: NewExpense) -> ExpenseResult<Entry> {
        let entry = Entry::new(input.description, input.category, input.amount, input.date)
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.storage.ledger.append(&entry)?;
        self.storage
            .log_create(EntityType::Expense, entry.description(), &entry);

        tracing::info!(
            description = entry.description(),
            amount = %entry.amount(),
            category = entry.category(),
            "recorded expense"
        );
        Ok(entry)
    }

    /// Load every readable ledger entry
    pub fn load(&self) -> ExpenseResult<LedgerLoad> {
        self.storage.ledger.load_all()
    }

    /// Summarize the ledger against `budget` as of `today`
    pub fn summarize(&self, budget: Budget, today: NaiveDate) -> ExpenseResult<LedgerSummary> {
        let load = self.load()?;
        let outcome = summarize(&load.entries, budget, today);

        Ok(LedgerSummary {
            outcome,
            diagnostics: load.diagnostics,
            ledger_missing: load.missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::ExpensePaths;
    use crate::services::summary::DailyBudget;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn expense(description: &str, category: Category, cents: i64) -> NewExpense {
        NewExpense {
            description: description.to_string(),
            category,
            amount: Money::from_cents(cents),
            date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
        }
    }

    #[test]
    fn test_record_appends_and_audits() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let entry = service
            .record(expense("Groceries", Category::Food, 4550))
            .unwrap();
        assert_eq!(entry.category(), "🍔 Food");

        let load = service.load().unwrap();
        assert_eq!(load.entries, vec![entry]);

        let audit = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].operation, Operation::Create);
        assert_eq!(audit[0].summary, "Groceries");
    }

    #[test]
    fn test_record_rejects_negative_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service
            .record(expense("Refund", Category::Home, -100))
            .unwrap_err();
        assert!(matches!(err, ExpenseError::Validation(_)));
        assert!(!storage.ledger.exists());
    }

    #[test]
    fn test_summarize_missing_ledger() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let budget = Budget::new(Money::from_cents(100000)).unwrap();

        let summary = service
            .summarize(budget, NaiveDate::from_ymd_opt(2025, 1, 11).unwrap())
            .unwrap();
        assert!(summary.ledger_missing);
        assert_eq!(summary.outcome, SummaryOutcome::Empty);
    }

    #[test]
    fn test_summarize_recorded_expenses() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.record(expense("Rent", Category::Home, 30000)).unwrap();
        service.record(expense("Pizza", Category::Food, 10000)).unwrap();
        std::fs::OpenOptions::new()
            .append(true)
            .open(storage.ledger.path())
            .and_then(|mut f| std::io::Write::write_all(&mut f, b"broken,line\n"))
            .unwrap();

        let budget = Budget::new(Money::from_cents(100000)).unwrap();
        let summary = service
            .summarize(budget, NaiveDate::from_ymd_opt(2025, 1, 11).unwrap())
            .unwrap();

        assert_eq!(summary.diagnostics.len(), 1);
        let SummaryOutcome::Report(report) = summary.outcome else {
            panic!("expected a summary");
        };
        assert_eq!(report.grand_total, Money::from_cents(40000));
        assert_eq!(report.by_category.len(), 2);
        assert_eq!(
            report.daily,
            DailyBudget::Recommended {
                per_day: Money::from_cents(3000),
                remaining_days: 20
            }
        );
    }
}
