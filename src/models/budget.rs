//! Monthly budget model
//!
//! The budget is a single positive amount: the user's spending ceiling for the
//! current month.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// A positive monthly spending ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Money", into = "Money")]
pub struct Budget(Money);

impl Budget {
    /// Create a budget, rejecting zero and negative amounts
    pub fn new(amount: Money) -> ExpenseResult<Self> {
        if !amount.is_positive() {
            return Err(ExpenseError::Budget(
                "Budget must be a positive number".into(),
            ));
        }
        Ok(Self(amount))
    }

    /// Parse budget text such as "1500" or "$1500.00"
    pub fn parse(s: &str) -> ExpenseResult<Self> {
        let amount = Money::parse(s)
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;
        Self::new(amount)
    }

    pub fn amount(&self) -> Money {
        self.0
    }
}

impl TryFrom<Money> for Budget {
    type Error = ExpenseError;

    fn try_from(amount: Money) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Budget> for Money {
    fn from(budget: Budget) -> Self {
        budget.0
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
