use std::fs;
use std::path::PathBuf;

use crudgen_core::{ExampleValue, FieldKind, example_value, map_type};
use crudgen_parser::extractor::extract_create_table_blocks;
use crudgen_parser::{parse_schema, parse_schema_with_report};

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

#[test]
fn test_todo_fixture_tables_in_order() {
    let sql = fixture("todo_list.sql");
    let model = parse_schema(&sql);

    assert_eq!(model.database.as_deref(), Some("todo_list"));
    assert_eq!(model.table_names(), vec!["users", "categories", "tasks"]);
}

#[test]
fn test_todo_fixture_columns() {
    let sql = fixture("todo_list.sql");
    let model = parse_schema(&sql);

    let users = model.find_table("users").expect("users table");
    let names: Vec<&str> = users.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["id", "email", "full_name", "created_at"]);
    assert!(users.columns[0].is_auto_increment);
    assert!(users.columns[2].is_nullable);
    assert!(users.columns[3].has_timestamp_default());

    let tasks = model.find_table("tasks").expect("tasks table");
    assert_eq!(tasks.columns.len(), 10);
    let priority = tasks.find_column("priority").expect("priority column");
    assert!(priority.has_default);
    assert_eq!(
        example_value(&priority.raw_definition),
        ExampleValue::Text("low".to_string())
    );
    let estimate = tasks.find_column("estimate_hours").expect("estimate column");
    assert_eq!(map_type(&estimate.raw_definition).kind, FieldKind::Number);
}

#[test]
fn test_todo_fixture_report_counts_constraints() {
    let sql = fixture("todo_list.sql");
    let run = parse_schema_with_report(&sql);

    // users: PRIMARY + UNIQUE, categories: PRIMARY, tasks: PRIMARY + KEY + 2 CONSTRAINT
    assert_eq!(run.report.constraint_lines, 7);
    assert_eq!(run.report.table_count, 3);
    assert_eq!(run.report.column_count, 16);
    assert!(run.report.is_clean(), "unexpected gaps: {:?}", run.report);
}

#[test]
fn test_block_count_ignores_unrelated_sql() {
    let mut sql = String::from("SET NAMES utf8mb4;\n");
    for i in 0..5 {
        sql.push_str(&format!(
            "CREATE TABLE t{i} (\n  id INT NOT NULL\n) ENGINE=InnoDB;\nINSERT INTO t{i} VALUES (1);\n-- note\n"
        ));
    }
    let blocks = extract_create_table_blocks(&sql);
    let names: Vec<String> = blocks.into_iter().map(|b| b.name).collect();
    assert_eq!(names, vec!["t0", "t1", "t2", "t3", "t4"]);
}

#[test]
fn test_parse_is_deterministic() {
    let sql = fixture("todo_list.sql");
    assert_eq!(parse_schema(&sql), parse_schema(&sql));
}
