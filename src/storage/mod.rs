//! Storage layer for the expense tracker
//!
//! Provides the append-only CSV ledger and the plain-text budget file.

pub mod budget;
pub mod file_io;
pub mod ledger;

pub use budget::{BudgetLoad, BudgetRepository};
pub use file_io::{read_bytes, write_text_atomic};
pub use ledger::{
    parse_line, parse_record, LedgerLoad, LedgerRepository, ParseDiagnostic, ParseDiagnosticKind,
};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    pub ledger: LedgerRepository,
    pub budget: BudgetRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.ledger_file()),
            budget: BudgetRepository::new(paths.budget_file()),
            audit: Some(AuditLogger::new(paths.audit_log())),
        })
    }

    /// Turn off audit logging for this storage
    pub fn without_audit(mut self) -> Self {
        self.audit = None;
        self
    }

    /// Get the audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        summary: impl Into<String>,
        entity: &T,
    ) {
        if let Some(audit) = &self.audit {
            audit.record(&AuditEntry::create(entity_type, summary, entity));
        }
    }

    /// Record an update operation in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        summary: impl Into<String>,
        before: &T,
        after: &T,
    ) {
        if let Some(audit) = &self.audit {
            audit.record(&AuditEntry::update(entity_type, summary, before, after));
        }
    }
}
