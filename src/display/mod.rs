//! Display formatting for terminal output
//!
//! Provides utilities for formatting summaries for terminal display,
//! including tables and colors.

pub mod summary;

pub use summary::{
    format_ledger_summary, format_summary, format_summary_table, DisplayOptions,
    NOTHING_TO_SUMMARIZE_MESSAGE, NO_DAYS_LEFT_MESSAGE, NO_LEDGER_MESSAGE,
};
