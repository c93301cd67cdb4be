//! Expense Tracker - personal expense tracking against a monthly budget
//!
//! This library records expenses to an append-only CSV ledger, keeps a single
//! monthly budget in a text file, and summarizes spending per category with a
//! recommended daily allowance for the rest of the month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, entries, budget)
//! - `storage`: Ledger and budget file storage
//! - `services`: Business logic and the summary engine
//! - `audit`: Audit logging of recorded expenses and budget changes
//! - `display`: Terminal formatting
//! - `export`: Text report and JSON export
//! - `interactive`: The menu-driven console loop
//! - `cli`: Handlers for the scripted subcommands
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod interactive;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
