//! Statement-level extraction from raw SQL text.
//!
//! Finds `CREATE TABLE ... ENGINE` statements and the database name. This is
//! pattern matching over free-form text, not a SQL grammar: statements whose
//! body cannot be delimited (no `ENGINE` clause, a `;` inside the body) are
//! skipped without error.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Regex patterns for statement extraction.
static PATTERNS: LazyLock<SqlPatterns> = LazyLock::new(SqlPatterns::new);

struct SqlPatterns {
    create_table_block: Regex,
    create_table_name: Regex,
    create_database: Regex,
    use_database: Regex,
}

impl SqlPatterns {
    fn new() -> Self {
        // Patterns are literals; expect() only fires on a malformed pattern.
        Self {
            // CREATE TABLE [IF NOT EXISTS] `name` ( body ) ENGINE
            // body is the shortest run without ';'
            create_table_block: Regex::new(
                r"(?i)CREATE\s+TABLE(?:\s+IF\s+NOT\s+EXISTS)?\s+`?([a-zA-Z0-9_]+)`?\s*\(([^;]*?)\)\s*ENGINE",
            )
            .expect("static regex must compile"),
            create_table_name: Regex::new(
                r"(?i)CREATE\s+TABLE(?:\s+IF\s+NOT\s+EXISTS)?\s+`?([a-zA-Z0-9_]+)`?",
            )
            .expect("static regex must compile"),
            create_database: Regex::new(
                r"(?i)CREATE\s+DATABASE\s+(?:IF\s+NOT\s+EXISTS\s+)?`?([a-zA-Z0-9_]+)`?",
            )
            .expect("static regex must compile"),
            use_database: Regex::new(r"(?i)\bUSE\s+`?([a-zA-Z0-9_]+)`?\s*;?")
                .expect("static regex must compile"),
        }
    }
}

/// Raw text of one `CREATE TABLE` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    /// Table identifier without backticks.
    pub name: String,
    /// Text between the outer parentheses.
    pub body: String,
}

/// Extracts every well-formed `CREATE TABLE ... ENGINE` statement in order
/// of appearance.
///
/// Duplicated names are returned as-is; de-duplication is the model
/// builder's job.
pub fn extract_create_table_blocks(sql: &str) -> Vec<TableBlock> {
    PATTERNS
        .create_table_block
        .captures_iter(sql)
        .map(|caps| TableBlock {
            name: caps[1].to_string(),
            body: caps[2].to_string(),
        })
        .collect()
}

/// Returns every `CREATE TABLE` name, first occurrence order, without
/// requiring a well-formed body.
pub fn extract_table_names(sql: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    PATTERNS
        .create_table_name
        .captures_iter(sql)
        .map(|caps| caps[1].to_string())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Recovers the database name from `CREATE DATABASE`, falling back to
/// `USE <name>`.
///
/// `None` means neither statement is present and the caller has to ask for
/// the name some other way.
pub fn extract_database_name(sql: &str) -> Option<String> {
    PATTERNS
        .create_database
        .captures(sql)
        .or_else(|| PATTERNS.use_database.captures(sql))
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_TABLES: &str = "
CREATE DATABASE IF NOT EXISTS todo_list;
USE todo_list;

CREATE TABLE IF NOT EXISTS `users` (
  `id` INT AUTO_INCREMENT PRIMARY KEY,
  `email` VARCHAR(120) NOT NULL
) ENGINE=InnoDB;

INSERT INTO users (email) VALUES ('a@b.c');

create table tasks (
  id int auto_increment,
  title varchar(80) not null,
  primary key (id)
) engine=InnoDB;
";

    #[test]
    fn test_blocks_in_source_order() {
        let blocks = extract_create_table_blocks(TWO_TABLES);
        let names: Vec<&str> = blocks.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["users", "tasks"]);
        assert!(blocks[0].body.contains("`email` VARCHAR(120) NOT NULL"));
        assert!(blocks[1].body.contains("primary key (id)"));
    }

    #[test]
    fn test_body_keeps_nested_parentheses_before_engine() {
        let sql = "CREATE TABLE prices (\n amount DECIMAL(10,2) NOT NULL\n) ENGINE=InnoDB;";
        let blocks = extract_create_table_blocks(sql);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body.trim(), "amount DECIMAL(10,2) NOT NULL");
    }

    #[test]
    fn test_missing_engine_is_skipped() {
        let sql = "CREATE TABLE a (id INT);\nCREATE TABLE b (id INT) ENGINE=InnoDB;";
        let blocks = extract_create_table_blocks(sql);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "b");
        assert_eq!(extract_table_names(sql), vec!["a", "b"]);
    }

    #[test]
    fn test_no_tables() {
        assert!(extract_create_table_blocks("SELECT 1;").is_empty());
        assert!(extract_table_names("").is_empty());
    }

    #[test]
    fn test_database_name_prefers_create_database() {
        let sql = "USE other;\nCREATE DATABASE `shop`;";
        assert_eq!(extract_database_name(sql).as_deref(), Some("shop"));
        assert_eq!(
            extract_database_name(TWO_TABLES).as_deref(),
            Some("todo_list")
        );
    }

    #[test]
    fn test_database_name_falls_back_to_use() {
        assert_eq!(
            extract_database_name("use `inventory`;\nCREATE TABLE x (id INT) ENGINE=InnoDB;")
                .as_deref(),
            Some("inventory")
        );
    }

    #[test]
    fn test_database_name_absent() {
        assert_eq!(
            extract_database_name("CREATE TABLE x (id INT) ENGINE=InnoDB;"),
            None
        );
        // USE must stand alone, not end another word.
        assert_eq!(extract_database_name("SELECT cause FROM t;"), None);
    }
}
