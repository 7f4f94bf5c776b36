//! Schema model builder.
//!
//! Composes statement extraction and column classification into the
//! [`SchemaModel`] consumed by every generator.

use std::collections::HashSet;

use crudgen_core::{SchemaModel, TableSchema};
use tracing::debug;

use crate::columns::classify_columns_with_report;
use crate::extractor::{extract_create_table_blocks, extract_database_name, extract_table_names};
use crate::report::{DroppedLine, ParseReport};

/// Model plus diagnostics from one parse.
#[derive(Debug, Clone)]
pub struct ParseRun {
    pub model: SchemaModel,
    pub report: ParseReport,
}

/// Builds the schema model and its parse report.
pub fn build_model(sql: &str) -> ParseRun {
    let mut report = ParseReport {
        database: extract_database_name(sql),
        ..ParseReport::default()
    };
    let mut tables = Vec::new();
    let mut seen = HashSet::new();

    for block in extract_create_table_blocks(sql) {
        if !seen.insert(block.name.clone()) {
            debug!(table = %block.name, "Ignoring duplicate table declaration");
            report.duplicate_tables.push(block.name);
            continue;
        }

        let classified = classify_columns_with_report(&block.body);
        report.constraint_lines += classified.constraint_lines.len();
        report
            .dropped_lines
            .extend(classified.unmatched_lines.into_iter().map(|line| DroppedLine {
                table: block.name.clone(),
                line: line.index + 1,
                text: line.text,
            }));

        debug!(
            table = %block.name,
            columns = classified.columns.len(),
            "Parsed table"
        );
        tables.push(TableSchema {
            name: block.name,
            columns: classified.columns,
        });
    }

    report.skipped_statements = extract_table_names(sql)
        .into_iter()
        .filter(|name| !seen.contains(name))
        .collect();
    for name in &report.skipped_statements {
        debug!(table = %name, "CREATE TABLE statement without a readable body");
    }

    let model = SchemaModel {
        database: report.database.clone(),
        tables,
    };
    report.table_count = model.tables.len();
    report.column_count = model.column_count();

    ParseRun { model, report }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_duplicate_wins() {
        let sql = "
CREATE TABLE users (
  id INT AUTO_INCREMENT
) ENGINE=InnoDB;
CREATE TABLE users (
  id INT,
  extra TEXT
) ENGINE=InnoDB;
";
        let run = build_model(sql);
        assert_eq!(run.model.tables.len(), 1);
        assert_eq!(run.model.tables[0].columns.len(), 1);
        assert!(run.model.tables[0].columns[0].is_auto_increment);
        assert_eq!(run.report.duplicate_tables, vec!["users"]);
    }

    #[test]
    fn test_report_counts() {
        let sql = "
CREATE DATABASE demo;
CREATE TABLE a (
  id INT NOT NULL,
  PRIMARY KEY (id),
  ???
) ENGINE=InnoDB;
CREATE TABLE b (id INT);
";
        let run = build_model(sql);
        assert_eq!(run.report.database.as_deref(), Some("demo"));
        assert_eq!(run.model.database.as_deref(), Some("demo"));
        assert_eq!(run.report.table_count, 1);
        assert_eq!(run.report.column_count, 1);
        assert_eq!(run.report.constraint_lines, 1);
        assert_eq!(run.report.dropped_lines.len(), 1);
        assert_eq!(run.report.dropped_lines[0].table, "a");
        assert_eq!(run.report.dropped_lines[0].line, 3);
        assert_eq!(run.report.dropped_lines[0].text, "???");
        assert_eq!(run.report.skipped_statements, vec!["b"]);
        assert!(!run.report.is_clean());
    }
}
