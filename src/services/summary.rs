//! Budget-vs-spend summary
//!
//! Groups entries by category, totals them against the monthly budget and
//! works out how much can still be spent per day for the rest of the month.
//! Everything here is pure: the current date is passed in.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{Budget, Entry, Money};

/// Spending for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category text with surrounding whitespace trimmed
    pub category: String,
    pub total: Money,
    /// Number of entries in this category
    pub count: usize,
}

/// Recommended spending per remaining day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyBudget {
    Recommended { per_day: Money, remaining_days: i64 },
    /// Today is the last day of the month
    NoDaysLeft,
}

impl DailyBudget {
    pub fn per_day(&self) -> Option<Money> {
        match self {
            Self::Recommended { per_day, .. } => Some(*per_day),
            Self::NoDaysLeft => None,
        }
    }
}

/// Aggregated view of the ledger against the budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub budget: Budget,
    /// Per-category totals in first-seen order
    pub by_category: Vec<CategoryTotal>,
    pub grand_total: Money,
    /// Budget minus grand total; negative when overspent
    pub remaining: Money,
    pub daily: DailyBudget,
    pub entry_count: usize,
}

impl Summary {
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Result of summarizing a ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// There were no entries to summarize
    Empty,
    Report(Summary),
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Days left in the month after `today` (0 on the last day)
pub fn remaining_days_in_month(today: NaiveDate) -> i64 {
    i64::from(days_in_month(today)) - i64::from(today.day())
}

/// Total entries per trimmed category, keeping first-seen order
pub fn totals_by_category(entries: &[Entry]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        let key = entry.category_key();
        let slot = *index.entry(key).or_insert_with(|| {
            totals.push(CategoryTotal {
                category: key.to_string(),
                total: Money::zero(),
                count: 0,
            });
            totals.len() - 1
        });

        totals[slot].total += entry.amount();
        totals[slot].count += 1;
    }

    totals
}

/// Summarize `entries` against `budget` as of `today`
pub fn summarize(entries: &[Entry], budget: Budget, today: NaiveDate) -> SummaryOutcome {
    if entries.is_empty() {
        return SummaryOutcome::Empty;
    }

    let by_category = totals_by_category(entries);
    let grand_total: Money = entries.iter().map(Entry::amount).sum();
    let remaining = budget.amount() - grand_total;

    let remaining_days = remaining_days_in_month(today);
    let daily = match remaining.divide_by(remaining_days) {
        Some(per_day) => DailyBudget::Recommended {
            per_day,
            remaining_days,
        },
        None => DailyBudget::NoDaysLeft,
    };

    SummaryOutcome::Report(Summary {
        budget,
        by_category,
        grand_total,
        remaining,
        daily,
        entry_count: entries.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(category: &str, cents: i64) -> Entry {
        Entry::from_stored("item", category, Money::from_cents(cents), "01/01/2025")
    }

    fn budget(cents: i64) -> Budget {
        Budget::new(Money::from_cents(cents)).unwrap()
    }

    fn report(outcome: SummaryOutcome) -> Summary {
        match outcome {
            SummaryOutcome::Report(summary) => summary,
            SummaryOutcome::Empty => panic!("expected a summary"),
        }
    }

    #[test]
    fn test_huge_totals_do_not_overflow() {
        let entries = vec![
            entry("🍔 Food", i64::MAX / 2),
            entry("🍔 Food", i64::MAX / 2),
            entry("🍔 Food", i64::MAX / 2),
        ];
        let summary = report(summarize(&entries, budget(100), date(2025, 1, 11)));

        assert_eq!(summary.grand_total, Money::from_cents(i64::MAX));
        assert_eq!(summary.by_category[0].total, Money::from_cents(i64::MAX));
        assert!(summary.is_over_budget());
        assert!(summary.daily.per_day().is_some());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(date(2025, 1, 15)), 31);
        assert_eq!(days_in_month(date(2025, 2, 1)), 28);
        assert_eq!(days_in_month(date(2024, 2, 29)), 29);
        assert_eq!(days_in_month(date(2025, 4, 30)), 30);
        assert_eq!(days_in_month(date(2025, 12, 31)), 31);
    }

    #[test]
    fn test_remaining_days() {
        assert_eq!(remaining_days_in_month(date(2025, 1, 11)), 20);
        assert_eq!(remaining_days_in_month(date(2025, 1, 31)), 0);
        assert_eq!(remaining_days_in_month(date(2025, 2, 1)), 27);
    }

    #[test]
    fn test_empty_entries() {
        assert_eq!(
            summarize(&[], budget(100000), date(2025, 1, 31)),
            SummaryOutcome::Empty
        );
    }

    #[test]
    fn test_recommended_daily_budget() {
        let entries = vec![entry("🍔 Food", 25000), entry("🏠 Home", 15000)];

        // 20 days left after January 11th
        let summary = report(summarize(&entries, budget(100000), date(2025, 1, 11)));

        assert_eq!(summary.grand_total, Money::from_cents(40000));
        assert_eq!(summary.remaining, Money::from_cents(60000));
        assert_eq!(
            summary.daily,
            DailyBudget::Recommended {
                per_day: Money::from_cents(3000),
                remaining_days: 20
            }
        );
        assert_eq!(summary.daily.per_day(), Some(Money::from_cents(3000)));
    }

    #[test]
    fn test_no_days_left() {
        let entries = vec![entry("🍔 Food", 100)];
        let summary = report(summarize(&entries, budget(100000), date(2025, 4, 30)));

        assert_eq!(summary.daily, DailyBudget::NoDaysLeft);
        assert_eq!(summary.daily.per_day(), None);
    }

    #[test]
    fn test_over_budget() {
        let entries = vec![entry("🎉 Fun", 150000)];
        let summary = report(summarize(&entries, budget(100000), date(2025, 1, 21)));

        assert!(summary.is_over_budget());
        assert_eq!(summary.remaining, Money::from_cents(-50000));
        assert_eq!(summary.daily.per_day(), Some(Money::from_cents(-5000)));
    }

    #[test]
    fn test_grouping_trims_and_keeps_first_seen_order() {
        let entries = vec![
            entry("🏠 Home", 1000),
            entry(" Food", 250),
            entry("Food", 125),
            entry("Fun ", 10),
            entry("🏠 Home", 1),
        ];

        let totals = totals_by_category(&entries);
        let names: Vec<_> = totals.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(names, vec!["🏠 Home", "Food", "Fun"]);
        assert_eq!(totals[0].total, Money::from_cents(1001));
        assert_eq!(totals[0].count, 2);
        assert_eq!(totals[1].total, Money::from_cents(375));
        assert_eq!(totals[1].count, 2);
    }

    #[test]
    fn test_category_totals_add_up_to_grand_total() {
        let amounts = [1, 99, 1999, 5, 123456, 10, 333];
        let categories = ["A", "B", " A", "C", "B ", "D", "A"];
        let entries: Vec<_> = categories
            .iter()
            .zip(amounts)
            .map(|(c, a)| entry(c, a))
            .collect();

        let summary = report(summarize(&entries, budget(1), date(2025, 6, 1)));
        let category_sum: Money = summary.by_category.iter().map(|t| t.total).sum();

        assert_eq!(summary.grand_total, Money::from_cents(amounts.iter().sum()));
        assert_eq!(category_sum, summary.grand_total);
        assert_eq!(summary.entry_count, entries.len());
    }
}
