//! Audit logging for the expense tracker
//!
//! Records every new expense and every budget change in an append-only,
//! line-delimited JSON log (`audit.log`).
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(EntityType::Expense, entry.description(), &entry))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
