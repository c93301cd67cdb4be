//! Interactive session
//!
//! The session owns the in-memory budget for the lifetime of the menu loop
//! and threads it through each handler.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};

use crate::display::{format_ledger_summary, DisplayOptions};
use crate::error::ExpenseResult;
use crate::models::{Budget, Entry};
use crate::services::{BudgetService, ExpenseService, NewExpense};
use crate::storage::{BudgetLoad, Storage};

use super::console::Console;
use super::menu::{format_menu, MenuChoice};

pub const GOODBYE_MESSAGE: &str = "Exiting expense tracker. Goodbye!";
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice. Please try again.";
pub const INVALID_BUDGET_FILE_MESSAGE: &str = "Invalid data in budget file. Resetting budget.";
pub const UNSAVED_BUDGET_MESSAGE: &str = "Budget could not be saved and applies to this session only";

/// State carried across menu iterations
pub struct Session<'a> {
    storage: &'a Storage,
    budget: Budget,
    display: DisplayOptions,
}

impl<'a> Session<'a> {
    pub fn new(storage: &'a Storage, budget: Budget, display: DisplayOptions) -> Self {
        Self {
            storage,
            budget,
            display,
        }
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }

    /// Prompt for an expense and append it to the ledger
    pub fn add_expense<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> ExpenseResult<Entry> {
        let description = console.prompt_description()?;
        let amount = console.prompt_amount()?;
        let date = console.prompt_date()?;
        let category = console.prompt_category()?;

        let entry = ExpenseService::new(self.storage).record(NewExpense {
            description,
            category,
            amount,
            date,
        })?;

        console.say(format!(
            "Saved {} to {}",
            entry,
            self.storage.ledger.path().display()
        ))?;
        Ok(entry)
    }

    /// Print the summary of the ledger as of `today`
    pub fn view_summary<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        today: NaiveDate,
    ) -> ExpenseResult<()> {
        let summary = ExpenseService::new(self.storage).summarize(self.budget, today)?;
        console.write_text(&format_ledger_summary(&summary, &self.display))
    }

    /// Prompt for a new budget, save it and make it current
    pub fn update_budget<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> ExpenseResult<Budget> {
        self.budget = console.prompt_budget()?;
        save_prompted_budget(self.storage, console, self.budget)?;

        console.say(format!(
            "New budget set to {}",
            self.display.money(self.budget.amount())
        ))?;
        Ok(self.budget)
    }
}

/// Load the stored budget, prompting for one when it is missing or invalid
///
/// A prompted budget is saved so the next run picks it up.
pub fn resolve_budget<R: BufRead, W: Write>(
    storage: &Storage,
    console: &mut Console<R, W>,
    display: &DisplayOptions,
) -> ExpenseResult<Budget> {
    match BudgetService::new(storage).load() {
        Ok(BudgetLoad::Loaded(budget)) => {
            console.say(format!(
                "Loaded saved budget: {}",
                display.money(budget.amount())
            ))?;
            return Ok(budget);
        }
        Ok(BudgetLoad::Invalid(reason)) => {
            tracing::warn!(%reason, path = %storage.budget.path().display(), "ignoring budget file");
            console.say(INVALID_BUDGET_FILE_MESSAGE)?;
        }
        Err(e) => {
            tracing::warn!(error = %e, "budget file unreadable");
            console.say(INVALID_BUDGET_FILE_MESSAGE)?;
        }
        Ok(BudgetLoad::Missing) => {}
    }

    let budget = console.prompt_budget()?;
    save_prompted_budget(storage, console, budget)?;
    Ok(budget)
}

/// Persist a budget typed at a prompt; a failed save keeps the session going
fn save_prompted_budget<R: BufRead, W: Write>(
    storage: &Storage,
    console: &mut Console<R, W>,
    budget: Budget,
) -> ExpenseResult<()> {
    if let Err(e) = BudgetService::new(storage).set(budget) {
        tracing::error!(error = %e, "failed to save budget");
        console.say(format!("{}: {}", UNSAVED_BUDGET_MESSAGE, e))?;
    }
    Ok(())
}

/// Run the menu loop until the user exits or input ends
pub fn run<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    console: &mut Console<R, W>,
) -> ExpenseResult<()> {
    loop {
        console.write_text(&format_menu())?;

        let input = match console.prompt_line("Enter your choice: ") {
            Ok(input) => input,
            Err(e) if e.is_input_closed() => break,
            Err(e) => return Err(e),
        };

        let result = match MenuChoice::parse(&input) {
            Some(MenuChoice::AddExpense) => session.add_expense(console).map(|_| ()),
            Some(MenuChoice::ViewSummary) => {
                session.view_summary(console, Local::now().date_naive())
            }
            Some(MenuChoice::UpdateBudget) => session.update_budget(console).map(|_| ()),
            Some(MenuChoice::Exit) => break,
            None => console.say(INVALID_CHOICE_MESSAGE),
        };

        match result {
            Ok(()) => {}
            Err(e) if e.is_input_closed() => break,
            Err(e) => {
                tracing::error!(error = %e, "menu action failed");
                console.say(format!("Error: {}", e))?;
            }
        }
    }

    console.say(GOODBYE_MESSAGE)
}

/// Resolve the budget and run the menu loop
pub fn run_interactive<R: BufRead, W: Write>(
    storage: &Storage,
    display: DisplayOptions,
    console: &mut Console<R, W>,
) -> ExpenseResult<()> {
    console.say("Running expense tracker...")?;

    let budget = match resolve_budget(storage, console, &display) {
        Ok(budget) => budget,
        Err(e) if e.is_input_closed() => {
            console.say("")?;
            return console.say(GOODBYE_MESSAGE);
        }
        Err(e) => return Err(e),
    };

    let mut session = Session::new(storage, budget, display);
    run(&mut session, console)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::display::{NOTHING_TO_SUMMARIZE_MESSAGE, NO_LEDGER_MESSAGE};
    use crate::interactive::console::INVALID_CATEGORY_MESSAGE;
    use crate::models::Money;
    use std::io::Cursor;
    use tempfile::TempDir;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn console(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: &TestConsole) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    fn plain() -> DisplayOptions {
        DisplayOptions {
            currency_symbol: "$".into(),
            color: false,
        }
    }

    fn budget(cents: i64) -> Budget {
        Budget::new(Money::from_cents(cents)).unwrap()
    }

    #[test]
    fn test_resolve_loads_saved_budget() {
        let (_temp_dir, storage) = create_test_storage();
        storage.budget.save(budget(120000)).unwrap();

        let mut console = console("");
        let loaded = resolve_budget(&storage, &mut console, &plain()).unwrap();

        assert_eq!(loaded, budget(120000));
        assert!(output(&console).contains("Loaded saved budget: $1200.00"));
    }

    #[test]
    fn test_resolve_prompts_and_saves_when_missing() {
        let (_temp_dir, storage) = create_test_storage();

        let mut console = console("750\n");
        let resolved = resolve_budget(&storage, &mut console, &plain()).unwrap();

        assert_eq!(resolved, budget(75000));
        assert_eq!(storage.budget.load().unwrap(), BudgetLoad::Loaded(budget(75000)));
    }

    #[test]
    fn test_resolve_resets_invalid_budget_file() {
        let (_temp_dir, storage) = create_test_storage();
        std::fs::write(storage.budget.path(), "not a number\n").unwrap();

        let mut console = console("300\n");
        let resolved = resolve_budget(&storage, &mut console, &plain()).unwrap();

        assert_eq!(resolved, budget(30000));
        assert!(output(&console).contains(INVALID_BUDGET_FILE_MESSAGE));
    }

    #[test]
    fn test_add_expense_appends_to_ledger() {
        let (_temp_dir, storage) = create_test_storage();
        let mut session = Session::new(&storage, budget(100000), plain());

        let mut console = console("Lunch\n12.50\n15/01/2025\nx\n0\n");
        let entry = session.add_expense(&mut console).unwrap();

        assert_eq!(entry.category(), "🍔 Food");
        assert!(output(&console).contains(INVALID_CATEGORY_MESSAGE));
        assert_eq!(
            std::fs::read_to_string(storage.ledger.path()).unwrap(),
            "Lunch,12.50,🍔 Food,15/01/2025\n"
        );
    }

    #[test]
    fn test_view_summary() {
        let (_temp_dir, storage) = create_test_storage();
        let mut session = Session::new(&storage, budget(100000), plain());
        let today = NaiveDate::from_ymd_opt(2025, 1, 11).unwrap();

        let mut console = console("");
        session.view_summary(&mut console, today).unwrap();
        assert!(output(&console).contains(NO_LEDGER_MESSAGE));

        std::fs::write(
            storage.ledger.path(),
            "Rent,300.00,🏠 Home,01/01/2025\nbad\nPizza,100,🍔 Food,02/01/2025\n",
        )
        .unwrap();
        let mut console = self::console("");
        session.view_summary(&mut console, today).unwrap();

        let text = output(&console);
        assert!(text.contains("Skipping invalid row at line 2"));
        assert!(text.contains("💵 Total spent: $400.00"));
        assert!(text.contains("👌 Recommended Daily Budget: $30.00"));
    }

    #[test]
    fn test_view_summary_empty_ledger() {
        let (_temp_dir, storage) = create_test_storage();
        std::fs::write(storage.ledger.path(), "").unwrap();
        let mut session = Session::new(&storage, budget(100000), plain());

        let mut console = console("");
        session
            .view_summary(&mut console, NaiveDate::from_ymd_opt(2025, 1, 11).unwrap())
            .unwrap();
        assert!(output(&console).contains(NOTHING_TO_SUMMARIZE_MESSAGE));
    }

    #[test]
    fn test_update_budget() {
        let (_temp_dir, storage) = create_test_storage();
        storage.budget.save(budget(100000)).unwrap();
        let mut session = Session::new(&storage, budget(100000), plain());

        let mut console = console("2500.5\n");
        session.update_budget(&mut console).unwrap();

        assert_eq!(session.budget(), budget(250050));
        assert!(output(&console).contains("New budget set to $2500.50"));
        assert_eq!(
            std::fs::read_to_string(storage.budget.path()).unwrap(),
            "2500.50\n"
        );
    }

    #[test]
    fn test_run_handles_invalid_choice_and_exit() {
        let (_temp_dir, storage) = create_test_storage();
        let mut session = Session::new(&storage, budget(100000), plain());

        let mut console = console("9\n4\n");
        run(&mut session, &mut console).unwrap();

        let text = output(&console);
        assert_eq!(text.matches("What would you like to do?").count(), 2);
        assert!(text.contains(INVALID_CHOICE_MESSAGE));
        assert!(text.ends_with(&format!("{}\n", GOODBYE_MESSAGE)));
    }

    #[test]
    fn test_run_stops_when_input_ends_mid_prompt() {
        let (_temp_dir, storage) = create_test_storage();
        let mut session = Session::new(&storage, budget(100000), plain());

        let mut console = console("1\nCoffee\n");
        run(&mut session, &mut console).unwrap();

        assert!(output(&console).contains(GOODBYE_MESSAGE));
        assert!(!storage.ledger.exists());
    }

    #[test]
    fn test_run_interactive_full_session() {
        let (_temp_dir, storage) = create_test_storage();

        let mut console = console("1000\n1\nBooks\n40\n03/01/2025\n2\n3\n1200\n4\n");
        run_interactive(&storage, plain(), &mut console).unwrap();

        let text = output(&console);
        assert!(text.starts_with("Running expense tracker...\n"));
        assert!(text.contains("New budget set to $1200.00"));
        assert!(text.contains(GOODBYE_MESSAGE));
        assert_eq!(storage.budget.load().unwrap(), BudgetLoad::Loaded(budget(120000)));
        assert_eq!(storage.ledger.load_all().unwrap().entries.len(), 1);
    }

    #[test]
    fn test_undecodable_budget_file_prompts_instead_of_failing() {
        let (_temp_dir, storage) = create_test_storage();
        std::fs::write(storage.budget.path(), [0xff, 0xfe, b'1', b'\n']).unwrap();

        let mut console = console("500\n4\n");
        run_interactive(&storage, plain(), &mut console).unwrap();

        let text = output(&console);
        assert!(text.contains(INVALID_BUDGET_FILE_MESSAGE));
        assert!(text.contains("Please set your monthly budget: "));
        assert!(text.contains(GOODBYE_MESSAGE));
        assert_eq!(storage.budget.load().unwrap(), BudgetLoad::Loaded(budget(50000)));
    }

    #[test]
    fn test_unsaveable_budget_is_kept_for_the_session() {
        let temp_dir = TempDir::new().unwrap();
        let blocked = temp_dir.path().join("budget-dir");
        std::fs::create_dir(&blocked).unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf())
            .with_budget_file(&blocked);
        let storage = Storage::new(paths).unwrap();

        let mut console = console("640\n3\n720\n4\n");
        run_interactive(&storage, plain(), &mut console).unwrap();

        let text = output(&console);
        assert_eq!(text.matches(UNSAVED_BUDGET_MESSAGE).count(), 2);
        assert!(text.contains("New budget set to $720.00"));
        assert!(text.contains(GOODBYE_MESSAGE));
    }
}
