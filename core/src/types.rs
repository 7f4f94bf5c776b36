//! Schema type definitions for the parsed SQL model.
//!
//! This module defines the data model produced by the parser and consumed by
//! every generator. The types are designed for serialization with [`serde`]
//! so a parsed model can be dumped as JSON or YAML.

use serde::{Deserialize, Serialize};

use crate::naming::EntityNames;

/// Marker that flags a column as auto-incrementing.
pub const AUTO_INCREMENT_MARKER: &str = "AUTO_INCREMENT";
/// Marker that flags a column as non-nullable.
pub const NOT_NULL_MARKER: &str = "NOT NULL";
/// Marker that flags a column as having a default value.
pub const DEFAULT_MARKER: &str = "DEFAULT";
/// Default expression that makes a column server-populated.
pub const CURRENT_TIMESTAMP_MARKER: &str = "CURRENT_TIMESTAMP";

/// Schema for one table column.
///
/// The raw definition is kept verbatim; flags are derived from it by
/// case-insensitive substring search and never re-derived afterwards.
///
/// # Examples
///
/// ```
/// use crudgen_core::ColumnSchema;
///
/// let col = ColumnSchema::from_definition("name", "VARCHAR(50) NOT NULL");
/// assert!(!col.is_nullable);
/// assert!(!col.has_default);
/// assert!(col.is_required_input());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column identifier (without backticks).
    pub name: String,
    /// Unparsed type and constraint text.
    pub raw_definition: String,
    /// Definition contains `AUTO_INCREMENT`.
    pub is_auto_increment: bool,
    /// Definition does not contain `NOT NULL`.
    pub is_nullable: bool,
    /// Definition contains `DEFAULT`.
    pub has_default: bool,
}

impl ColumnSchema {
    /// Builds a column and derives its flags from `raw_definition`.
    pub fn from_definition(name: &str, raw_definition: &str) -> Self {
        let upper = raw_definition.to_ascii_uppercase();
        Self {
            name: name.to_string(),
            raw_definition: raw_definition.to_string(),
            is_auto_increment: upper.contains(AUTO_INCREMENT_MARKER),
            is_nullable: !upper.contains(NOT_NULL_MARKER),
            has_default: upper.contains(DEFAULT_MARKER),
        }
    }

    /// Returns `true` when the column defaults to `CURRENT_TIMESTAMP`.
    pub fn has_timestamp_default(&self) -> bool {
        self.has_default
            && self
                .raw_definition
                .to_ascii_uppercase()
                .contains(CURRENT_TIMESTAMP_MARKER)
    }

    /// Returns `true` when clients are expected to send this column.
    ///
    /// Auto-increment keys and timestamp-default columns are populated by
    /// the database and therefore excluded from request bodies.
    pub fn is_input_field(&self) -> bool {
        !self.is_auto_increment && !self.has_timestamp_default()
    }

    /// Returns `true` when an input body must include this column.
    pub fn is_required_input(&self) -> bool {
        self.is_input_field() && !self.is_nullable && !self.has_default
    }
}

/// Schema for one `CREATE TABLE` statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Raw table identifier.
    pub name: String,
    /// Columns in declaration order.
    pub columns: Vec<ColumnSchema>,
}

impl TableSchema {
    /// Creates a table without columns.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            columns: Vec::new(),
        }
    }

    /// Adds a column (builder style).
    pub fn with_column(mut self, column: ColumnSchema) -> Self {
        self.columns.push(column);
        self
    }

    /// Derives the entity identifiers used for generated files and symbols.
    pub fn entity_names(&self) -> EntityNames {
        EntityNames::from_table(&self.name)
    }

    /// Finds a column by exact name.
    pub fn find_column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Iterates over the columns clients send on create/update.
    pub fn input_columns(&self) -> impl Iterator<Item = &ColumnSchema> {
        self.columns.iter().filter(|c| c.is_input_field())
    }
}

/// Parsed schema: database name and ordered tables.
///
/// Built once per invocation and consumed read-only by the generators.
///
/// # Examples
///
/// ```
/// use crudgen_core::{SchemaModel, TableSchema};
///
/// let mut model = SchemaModel::default();
/// model.tables.push(TableSchema::new("users"));
/// model.tables.push(TableSchema::new("tasks"));
/// assert_eq!(model.table_names(), vec!["users", "tasks"]);
/// assert!(model.find_table("tasks").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaModel {
    /// Database name from `CREATE DATABASE` or `USE`, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Tables in order of first appearance.
    pub tables: Vec<TableSchema>,
}

impl SchemaModel {
    /// Returns table names in model order.
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }

    /// Finds a table by exact name.
    pub fn find_table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Total number of columns across all tables.
    pub fn column_count(&self) -> usize {
        self.tables.iter().map(|t| t.columns.len()).sum()
    }

    /// Returns `true` when no table was parsed.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_case_insensitive() {
        let col = ColumnSchema::from_definition("id", "int auto_increment not null");
        assert!(col.is_auto_increment);
        assert!(!col.is_nullable);
        assert!(!col.has_default);
    }

    #[test]
    fn test_timestamp_default_is_not_input() {
        let col =
            ColumnSchema::from_definition("created_at", "TIMESTAMP DEFAULT CURRENT_TIMESTAMP");
        assert!(col.has_timestamp_default());
        assert!(!col.is_input_field());
        assert!(!col.is_required_input());
    }

    #[test]
    fn test_plain_default_is_optional_input() {
        let col = ColumnSchema::from_definition("status", "VARCHAR(20) NOT NULL DEFAULT 'open'");
        assert!(col.is_input_field());
        assert!(!col.is_required_input());
    }

    #[test]
    fn test_nullable_column_is_optional_input() {
        let col = ColumnSchema::from_definition("notes", "TEXT");
        assert!(col.is_nullable);
        assert!(col.is_input_field());
        assert!(!col.is_required_input());
    }

    #[test]
    fn test_input_columns_skip_generated() {
        let table = TableSchema::new("tasks")
            .with_column(ColumnSchema::from_definition("id", "INT AUTO_INCREMENT"))
            .with_column(ColumnSchema::from_definition("title", "VARCHAR(80) NOT NULL"))
            .with_column(ColumnSchema::from_definition(
                "updated_at",
                "DATETIME DEFAULT CURRENT_TIMESTAMP",
            ));
        let names: Vec<&str> = table.input_columns().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["title"]);
    }

    #[test]
    fn test_model_serializes_without_database() {
        let model = SchemaModel {
            database: None,
            tables: vec![TableSchema::new("users")],
        };
        let json = serde_json::to_string(&model).unwrap();
        assert!(!json.contains("database"));
        assert!(json.contains("\"name\":\"users\""));
    }
}
