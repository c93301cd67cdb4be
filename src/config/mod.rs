//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Data file path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
