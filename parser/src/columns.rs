//! Column classification for one table body.
//!
//! Pipeline: [`tokenize`] → [`classify_line`] → column shape match. Lines
//! that are constraints or do not have the column shape are dropped; the
//! `_with_report` variant keeps track of them for diagnostics.

use crudgen_core::ColumnSchema;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::lines::{LineKind, SourceLine, classify_line, tokenize};

// optional backtick, identifier, optional backtick, whitespace, remainder up
// to an optional trailing comma
static COLUMN_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^`?([a-zA-Z0-9_]+)`?\s+(.+?),?$").expect("static regex must compile")
});

/// Columns of one body plus the lines that did not become columns.
#[derive(Debug, Clone, Default)]
pub struct ColumnClassification {
    pub columns: Vec<ColumnSchema>,
    /// Lines excluded as key/constraint clauses.
    pub constraint_lines: Vec<SourceLine>,
    /// Candidate lines without the column shape.
    pub unmatched_lines: Vec<SourceLine>,
}

/// Parses one candidate line into a column, if it has the column shape.
pub fn parse_column_line(line: &str) -> Option<ColumnSchema> {
    let caps = COLUMN_LINE.captures(line.trim())?;
    let definition = caps[2].trim_end();
    if definition.is_empty() {
        return None;
    }
    Some(ColumnSchema::from_definition(&caps[1], definition))
}

/// Classifies a table body into ordered columns.
///
/// # Examples
///
/// ```
/// use crudgen_parser::columns::classify_columns;
///
/// let body = "`id` INT AUTO_INCREMENT,\n`name` VARCHAR(50) NOT NULL,\nPRIMARY KEY (`id`)";
/// let columns = classify_columns(body);
/// assert_eq!(columns.len(), 2);
/// assert!(columns[0].is_auto_increment);
/// assert!(!columns[1].is_nullable);
/// ```
pub fn classify_columns(body: &str) -> Vec<ColumnSchema> {
    classify_columns_with_report(body).columns
}

/// Like [`classify_columns`], also returning the lines that were dropped.
pub fn classify_columns_with_report(body: &str) -> ColumnClassification {
    let mut result = ColumnClassification::default();

    for line in tokenize(body) {
        match classify_line(&line.text) {
            LineKind::Constraint(keyword) => {
                debug!(line = %line.text, keyword, "Skipping constraint line");
                result.constraint_lines.push(line);
            }
            LineKind::Candidate => match parse_column_line(&line.text) {
                Some(column) => result.columns.push(column),
                None => {
                    debug!(line = %line.text, "Dropping line without column shape");
                    result.unmatched_lines.push(line);
                }
            },
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_body() {
        let body = "`id` INT AUTO_INCREMENT PRIMARY KEY,\n`name` VARCHAR(50) NOT NULL,\n`created_at` TIMESTAMP DEFAULT CURRENT_TIMESTAMP";
        let columns = classify_columns(body);
        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "created_at"]);

        assert!(columns[0].is_auto_increment);
        assert!(!columns[1].is_nullable);
        assert!(columns[2].has_default);
        assert!(columns[2].is_nullable);
        assert_eq!(columns[1].raw_definition, "VARCHAR(50) NOT NULL");
    }

    #[test]
    fn test_standalone_keys_are_excluded() {
        let body = "
            user_id INT NOT NULL,
            PRIMARY KEY (user_id),
            UNIQUE KEY uq (user_id),
            KEY idx (user_id),
            CONSTRAINT fk FOREIGN KEY (user_id) REFERENCES users (id)
        ";
        let run = classify_columns_with_report(body);
        assert_eq!(run.columns.len(), 1);
        assert_eq!(run.columns[0].name, "user_id");
        assert_eq!(run.constraint_lines.len(), 4);
        assert!(run.unmatched_lines.is_empty());
    }

    #[test]
    fn test_definition_may_contain_commas() {
        let columns = classify_columns(
            "`price` DECIMAL(10,2) NOT NULL,\n`state` ENUM('new','done') DEFAULT 'new',",
        );
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].raw_definition, "DECIMAL(10,2) NOT NULL");
        assert_eq!(columns[1].raw_definition, "ENUM('new','done') DEFAULT 'new'");
        assert!(columns[1].has_default);
    }

    #[test]
    fn test_non_column_lines_are_dropped() {
        let run = classify_columns_with_report("`id`\n-- comment line\n(x INT)\nok INT");
        let names: Vec<&str> = run.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["ok"]);
        assert_eq!(run.unmatched_lines.len(), 3);
    }

    #[test]
    fn test_empty_body() {
        assert!(classify_columns("").is_empty());
        assert!(classify_columns("   \n\n").is_empty());
    }

    #[test]
    fn test_parse_column_line_trailing_comma_only() {
        let column = parse_column_line("`done` TINYINT(1) NOT NULL DEFAULT 0,").unwrap();
        assert_eq!(column.name, "done");
        assert_eq!(column.raw_definition, "TINYINT(1) NOT NULL DEFAULT 0");
        assert!(parse_column_line("lonely,").is_none());
    }
}
