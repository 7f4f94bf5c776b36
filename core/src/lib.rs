//! Core schema types and shared naming/type primitives.
//!
//! This crate defines the data model every generator consumes:
//!
//! - [`SchemaModel`]: the parsed schema, an optional database name plus the
//!   ordered list of tables.
//! - [`TableSchema`]: one `CREATE TABLE` statement with its ordered columns.
//! - [`ColumnSchema`]: one column line with its raw definition and derived
//!   flags.
//! - [`EntityNames`]: the identifiers derived from a table name
//!   (singular, `PascalCase`, `camelCase`).
//!
//! Naming ([`singularize`], [`to_pascal_case`], [`to_camel_case`]) and type
//! mapping ([`map_type`], [`example_value`]) are pure, total functions.
//!
//! # Example
//!
//! ```
//! use crudgen_core::*;
//!
//! let mut table = TableSchema::new("order_items");
//! table.columns.push(ColumnSchema::from_definition("id", "INT AUTO_INCREMENT PRIMARY KEY"));
//! table.columns.push(ColumnSchema::from_definition("price", "DECIMAL(10,2) NOT NULL"));
//!
//! let names = table.entity_names();
//! assert_eq!(names.pascal, "OrderItem");
//! assert_eq!(names.camel, "orderItem");
//!
//! assert_eq!(map_type(&table.columns[1].raw_definition).kind, FieldKind::Number);
//! assert!(!table.columns[0].is_input_field());
//! ```

mod naming;
mod type_map;
mod types;

pub use naming::{EntityNames, singularize, to_camel_case, to_pascal_case};
pub use type_map::{
    ExampleValue, FieldKind, OpenApiType, TYPE_RULES, TypeRule, example_value, map_type,
    matching_rule,
};
pub use types::*;
