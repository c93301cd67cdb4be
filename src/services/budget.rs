//! Budget service
//!
//! Reads and replaces the persisted monthly budget, auditing every change.

use crate::audit::EntityType;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Budget;
use crate::storage::{BudgetLoad, Storage};

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Read the stored budget file
    pub fn load(&self) -> ExpenseResult<BudgetLoad> {
        self.storage.budget.load()
    }

    /// Get the stored budget, failing if none is usable
    pub fn require(&self) -> ExpenseResult<Budget> {
        match self.load()? {
            BudgetLoad::Loaded(budget) => Ok(budget),
            BudgetLoad::Missing => Err(ExpenseError::Budget(
                "No budget set. Run 'expense budget set <amount>' first".into(),
            )),
            BudgetLoad::Invalid(reason) => Err(ExpenseError::Budget(format!(
                "Invalid data in budget file ({}). Run 'expense budget set <amount>'",
                reason
            ))),
        }
    }

    /// Persist a new budget, replacing any previous value
    pub fn set(&self, budget: Budget) -> ExpenseResult<Budget> {
        // An unreadable old value only affects how the change is audited
        let previous = match self.load() {
            Ok(BudgetLoad::Loaded(previous)) => Some(previous),
            Ok(BudgetLoad::Missing | BudgetLoad::Invalid(_)) => None,
            Err(e) => {
                tracing::warn!(error = %e, "could not read previous budget");
                None
            }
        };

        self.storage.budget.save(budget)?;

        match previous {
            Some(before) => self.storage.log_update(
                EntityType::Budget,
                format!("monthly budget: {} -> {}", before, budget),
                &before,
                &budget,
            ),
            None => self.storage.log_create(
                EntityType::Budget,
                format!("monthly budget: {}", budget),
                &budget,
            ),
        }

        tracing::info!(%budget, "budget updated");
        Ok(budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::ExpensePaths;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn budget(cents: i64) -> Budget {
        Budget::new(Money::from_cents(cents)).unwrap()
    }

    #[test]
    fn test_require_without_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        assert!(matches!(service.require(), Err(ExpenseError::Budget(_))));
    }

    #[test]
    fn test_set_and_require() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set(budget(120000)).unwrap();
        assert_eq!(service.require().unwrap(), budget(120000));

        service.set(budget(90000)).unwrap();
        assert_eq!(service.load().unwrap(), BudgetLoad::Loaded(budget(90000)));
    }

    #[test]
    fn test_set_is_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set(budget(100000)).unwrap();
        service.set(budget(150000)).unwrap();

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[1].operation, Operation::Update);
        assert_eq!(entries[1].before, Some(serde_json::json!(100000)));
        assert_eq!(entries[1].after, Some(serde_json::json!(150000)));
    }

    #[test]
    fn test_set_replaces_invalid_file() {
        let (_temp_dir, storage) = create_test_storage();
        std::fs::write(storage.budget.path(), "garbage").unwrap();
        let service = BudgetService::new(&storage);

        assert!(service.require().is_err());
        service.set(budget(5000)).unwrap();
        assert_eq!(service.require().unwrap(), budget(5000));
    }

    #[test]
    fn test_set_replaces_undecodable_file() {
        let (_temp_dir, storage) = create_test_storage();
        std::fs::write(storage.budget.path(), [0xff, 0xfe, b'1', b'\n']).unwrap();
        let service = BudgetService::new(&storage);

        service.set(budget(25000)).unwrap();
        assert_eq!(service.require().unwrap(), budget(25000));

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries[0].operation, Operation::Create);
    }
}
