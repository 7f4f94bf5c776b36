//! Parse diagnostics.
//!
//! Parse gaps are never errors; this report only makes them visible to
//! `crudgen parse --with-report` and to debug logging.

use serde::{Deserialize, Serialize};

/// Line dropped while classifying one table body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedLine {
    pub table: String,
    /// One-based position among the non-blank lines of the table body.
    pub line: usize,
    pub text: String,
}

/// Summary of one schema parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    /// Database name recovered from the SQL, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Number of tables in the model.
    pub table_count: usize,
    /// Number of columns across all tables.
    pub column_count: usize,
    /// Number of key/constraint lines excluded from column parsing.
    pub constraint_lines: usize,
    /// Candidate lines that did not have the column shape.
    pub dropped_lines: Vec<DroppedLine>,
    /// Tables declared more than once; only the first declaration is kept.
    pub duplicate_tables: Vec<String>,
    /// `CREATE TABLE` statements whose body could not be delimited.
    pub skipped_statements: Vec<String>,
}

impl ParseReport {
    /// Returns `true` when every statement and line was used.
    pub fn is_clean(&self) -> bool {
        self.dropped_lines.is_empty()
            && self.duplicate_tables.is_empty()
            && self.skipped_statements.is_empty()
    }
}
