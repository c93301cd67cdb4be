//! Expense ledger stored as comma-separated text
//!
//! Each line holds one entry with four fields in fixed order:
//! `description, amount, category, date`. There is no header row. The ledger
//! is append-only; loading is best effort and skips lines it cannot read,
//! reporting each one as a [`ParseDiagnostic`].

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Entry, Money};

use super::file_io::ensure_parent;

/// Number of fields in a ledger line
pub const LEDGER_FIELD_COUNT: usize = 4;

/// Why a ledger line was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDiagnosticKind {
    /// The line did not split into exactly four fields
    FieldCount(usize),
    /// The amount field is not a number
    InvalidAmount(String),
    /// The amount field is a negative number
    NegativeAmount(String),
    /// The line could not be decoded at all
    Unreadable(String),
}

/// A skipped ledger line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    /// 1-based line number in the ledger file (0 when unknown)
    pub line: u64,
    pub kind: ParseDiagnosticKind,
    /// The fields of the offending line, re-joined with commas
    pub raw: String,
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseDiagnosticKind::FieldCount(count) => write!(
                f,
                "Skipping invalid row at line {} ({} fields, expected {}): {}",
                self.line, count, LEDGER_FIELD_COUNT, self.raw
            ),
            ParseDiagnosticKind::InvalidAmount(amount) => write!(
                f,
                "Skipping malformed row at line {} (invalid amount '{}'): {}",
                self.line, amount, self.raw
            ),
            ParseDiagnosticKind::NegativeAmount(amount) => write!(
                f,
                "Skipping malformed row at line {} (negative amount '{}'): {}",
                self.line, amount, self.raw
            ),
            ParseDiagnosticKind::Unreadable(reason) => write!(
                f,
                "Skipping unreadable row at line {}: {}",
                self.line, reason
            ),
        }
    }
}

impl std::error::Error for ParseDiagnostic {}

/// Result of loading the whole ledger
#[derive(Debug, Clone, Default)]
pub struct LedgerLoad {
    /// Successfully parsed entries in file order
    pub entries: Vec<Entry>,
    /// Lines that were skipped
    pub diagnostics: Vec<ParseDiagnostic>,
    /// True when the ledger file does not exist yet
    pub missing: bool,
}

impl LedgerLoad {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse one CSV record into an entry
pub fn parse_record(record: &StringRecord, line: u64) -> Result<Entry, ParseDiagnostic> {
    let raw = record.iter().collect::<Vec<_>>().join(",");

    if record.len() != LEDGER_FIELD_COUNT {
        return Err(ParseDiagnostic {
            line,
            kind: ParseDiagnosticKind::FieldCount(record.len()),
            raw,
        });
    }

    let amount_text = &record[1];
    let amount = Money::parse(amount_text).map_err(|_| ParseDiagnostic {
        line,
        kind: ParseDiagnosticKind::InvalidAmount(amount_text.to_string()),
        raw: raw.clone(),
    })?;

    if amount.is_negative() {
        return Err(ParseDiagnostic {
            line,
            kind: ParseDiagnosticKind::NegativeAmount(amount_text.to_string()),
            raw,
        });
    }

    Ok(Entry::from_stored(&record[0], &record[2], amount, &record[3]))
}

/// Parse a single ledger line of text
pub fn parse_line(text: &str) -> Result<Entry, ParseDiagnostic> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut record = StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => parse_record(&record, 1),
        Ok(false) => Err(ParseDiagnostic {
            line: 1,
            kind: ParseDiagnosticKind::FieldCount(0),
            raw: String::new(),
        }),
        Err(e) => Err(ParseDiagnostic {
            line: 1,
            kind: ParseDiagnosticKind::Unreadable(e.to_string()),
            raw: text.to_string(),
        }),
    }
}

/// Repository for the append-only expense ledger
pub struct LedgerRepository {
    path: PathBuf,
}

impl LedgerRepository {
    /// Create a new ledger repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the ledger file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Append one entry, creating the file if needed
    pub fn append(&self, entry: &Entry) -> ExpenseResult<()> {
        ensure_parent(&self.path)?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                ExpenseError::Storage(format!(
                    "Failed to open ledger {}: {}",
                    self.path.display(),
                    e
                ))
            })?;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record([
            entry.description(),
            entry.amount().to_decimal_string().as_str(),
            entry.category(),
            entry.date(),
        ])?;
        writer
            .flush()
            .map_err(|e| ExpenseError::Storage(format!("Failed to flush ledger: {}", e)))?;

        tracing::debug!(path = %self.path.display(), "appended ledger entry");
        Ok(())
    }

    /// Load every readable entry, collecting diagnostics for skipped lines
    pub fn load_all(&self) -> ExpenseResult<LedgerLoad> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "ledger file not found");
            return Ok(LedgerLoad {
                missing: true,
                ..LedgerLoad::default()
            });
        }

        let file = File::open(&self.path).map_err(|e| {
            ExpenseError::Storage(format!(
                "Failed to open ledger {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let load = reader
            .records()
            .fold(LedgerLoad::default(), |mut load, result| {
                let parsed = match result {
                    Ok(record) => {
                        let line = record.position().map(|p| p.line()).unwrap_or(0);
                        parse_record(&record, line)
                    }
                    Err(e) => Err(ParseDiagnostic {
                        line: e.position().map(|p| p.line()).unwrap_or(0),
                        kind: ParseDiagnosticKind::Unreadable(e.to_string()),
                        raw: String::new(),
                    }),
                };

                match parsed {
                    Ok(entry) => load.entries.push(entry),
                    Err(diagnostic) => {
                        tracing::warn!(line = diagnostic.line, "{}", diagnostic);
                        load.diagnostics.push(diagnostic);
                    }
                }
                load
            });

        tracing::debug!(
            entries = load.entries.len(),
            skipped = load.diagnostics.len(),
            "loaded ledger"
        );

        Ok(load)
    }
}
