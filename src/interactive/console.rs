//! Line-oriented console prompts
//!
//! Every prompt re-asks until it gets a usable answer. End of input surfaces
//! as [`ExpenseError::InputClosed`] so callers can stop cleanly.

use std::fmt;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_entry_date, Budget, Category, Money};

pub const INVALID_NUMBER_MESSAGE: &str = "Invalid input! Please enter a valid number.";
pub const INVALID_CATEGORY_MESSAGE: &str = "Invalid category !";
pub const NON_POSITIVE_BUDGET_MESSAGE: &str = "Budget must be a positive number. Try again.";

/// A prompt/answer console over any reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

/// Console bound to the process's stdin and stdout
pub fn stdio() -> Console<StdinLock<'static>, Stdout> {
    Console::new(io::stdin().lock(), io::stdout())
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line
    pub fn say(&mut self, text: impl fmt::Display) -> ExpenseResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print preformatted text as-is
    pub fn write_text(&mut self, text: &str) -> ExpenseResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Show `prompt` and read one trimmed line
    pub fn prompt_line(&mut self, prompt: &str) -> ExpenseResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Err(ExpenseError::InputClosed);
        }

        Ok(input.trim().to_string())
    }

    pub fn prompt_description(&mut self) -> ExpenseResult<String> {
        loop {
            let description = self.prompt_line("Enter expense description: ")?;
            if !description.is_empty() {
                return Ok(description);
            }
            self.say("Expense description cannot be empty.")?;
        }
    }

    pub fn prompt_amount(&mut self) -> ExpenseResult<Money> {
        loop {
            let input = self.prompt_line("Enter expense amount: ")?;
            match Money::parse(&input) {
                Ok(amount) if amount.is_negative() => {
                    self.say("Expense amount cannot be negative.")?;
                }
                Ok(amount) => return Ok(amount),
                Err(_) => self.say(INVALID_NUMBER_MESSAGE)?,
            }
        }
    }

    pub fn prompt_date(&mut self) -> ExpenseResult<NaiveDate> {
        loop {
            let input = self.prompt_line("Date of expense dd/mm/yyyy: ")?;
            match parse_entry_date(&input) {
                Ok(date) => return Ok(date),
                Err(e) => self.say(e)?,
            }
        }
    }

    /// Show the category list and read a 0-based index
    pub fn prompt_category(&mut self) -> ExpenseResult<Category> {
        let categories = Category::all();
        loop {
            self.say("Select a category:")?;
            for (index, category) in categories.iter().enumerate() {
                self.say(format!("   {}. {}", index, category.label()))?;
            }

            let input = self.prompt_line(&format!(
                "Enter a category number [0 - {}]: ",
                categories.len() - 1
            ))?;
            match Category::parse_index(&input) {
                Some(category) => return Ok(category),
                None => self.say(INVALID_CATEGORY_MESSAGE)?,
            }
        }
    }

    pub fn prompt_budget(&mut self) -> ExpenseResult<Budget> {
        loop {
            let input = self.prompt_line("Please set your monthly budget: ")?;
            let Ok(amount) = Money::parse(&input) else {
                self.say(INVALID_NUMBER_MESSAGE)?;
                continue;
            };
            match Budget::new(amount) {
                Ok(budget) => return Ok(budget),
                Err(_) => self.say(NON_POSITIVE_BUDGET_MESSAGE)?,
            }
        }
    }

    /// Get the underlying writer
    pub fn output(&self) -> &W {
        &self.output
    }
}
