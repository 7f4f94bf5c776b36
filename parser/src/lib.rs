//! Best-effort SQL schema parsing for CRUD boilerplate generation.
//!
//! This crate recovers a [`SchemaModel`] from free-form MySQL-style DDL:
//! table names from `CREATE TABLE ... ENGINE` statements, their columns in
//! declaration order, and the database name from `CREATE DATABASE` or
//! `USE`. It is a small deterministic pipeline, not a SQL grammar:
//!
//! 1. [`extractor`] finds statements and table bodies.
//! 2. [`lines`] tokenizes a body into trimmed lines and classifies
//!    key/constraint clauses.
//! 3. [`columns`] matches the column shape and derives column flags.
//! 4. [`model`] assembles tables, dropping duplicate declarations.
//!
//! Lines and statements that do not fit are skipped, never reported as
//! errors; [`parse_schema_with_report`] exposes them as diagnostics.
//!
//! # Example
//!
//! ```
//! use crudgen_parser::parse_schema;
//!
//! let sql = "\
//! CREATE DATABASE shop;
//! CREATE TABLE `products` (
//!   `id` INT AUTO_INCREMENT,
//!   `name` VARCHAR(80) NOT NULL,
//!   PRIMARY KEY (`id`)
//! ) ENGINE=InnoDB;
//! ";
//!
//! let model = parse_schema(sql);
//! assert_eq!(model.database.as_deref(), Some("shop"));
//! assert_eq!(model.table_names(), vec!["products"]);
//! assert_eq!(model.tables[0].columns.len(), 2);
//! ```
//!
//! [`SchemaModel`]: crudgen_core::SchemaModel

pub mod columns;
pub mod extractor;
pub mod lines;
pub mod model;
pub mod output;
pub mod report;

use crudgen_core::SchemaModel;
use model::{ParseRun, build_model};

/// Parses SQL text into the schema model.
///
/// # Examples
///
/// ```
/// use crudgen_parser::parse_schema;
///
/// let model = parse_schema("SELECT 1;");
/// assert!(model.is_empty());
/// assert!(model.database.is_none());
/// ```
pub fn parse_schema(sql: &str) -> SchemaModel {
    build_model(sql).model
}

/// Parses SQL text and returns the model with a [`report::ParseReport`].
///
/// # Examples
///
/// ```
/// use crudgen_parser::parse_schema_with_report;
///
/// let run = parse_schema_with_report("CREATE TABLE t (id INT) ENGINE=InnoDB;");
/// assert_eq!(run.report.table_count, 1);
/// assert!(run.report.is_clean());
/// ```
pub fn parse_schema_with_report(sql: &str) -> ParseRun {
    build_model(sql)
}
