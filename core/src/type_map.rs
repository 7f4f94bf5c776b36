//! Mapping from raw SQL column definitions to API types and sample values.
//!
//! The mapping is an explicit ordered rule list ([`TYPE_RULES`]); the first
//! rule whose matcher accepts the upper-cased definition wins. Order is part
//! of the contract: `DATE` must be tested before `DATETIME`/`TIMESTAMP`,
//! `ENUM` before `CHAR`, and `VARCHAR` resolves through the `CHAR` rule.

use std::fmt;

use serde::{Deserialize, Serialize};

/// JSON-schema kind of a mapped column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Integer,
    Number,
    String,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
        }
    }
}

/// OpenAPI `type` plus optional `format` for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenApiType {
    pub kind: FieldKind,
    pub format: Option<&'static str>,
}

/// Example value used in generated request bodies.
///
/// Serializes as a bare JSON number or string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExampleValue {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl ExampleValue {
    fn text(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One entry of the ordered type-mapping table.
#[derive(Debug, Clone, Copy)]
pub struct TypeRule {
    /// Short label used in diagnostics and tests.
    pub name: &'static str,
    /// Resulting OpenAPI type.
    pub output: OpenApiType,
    matches: fn(&str) -> bool,
    example: fn(&str) -> ExampleValue,
}

impl TypeRule {
    /// Returns `true` if this rule accepts the upper-cased definition.
    pub fn matches(&self, upper: &str) -> bool {
        (self.matches)(upper)
    }

    /// Builds the example value for the raw definition, case preserved.
    pub fn example(&self, raw_definition: &str) -> ExampleValue {
        (self.example)(raw_definition)
    }
}

const fn string_type(format: Option<&'static str>) -> OpenApiType {
    OpenApiType {
        kind: FieldKind::String,
        format,
    }
}

/// Ordered mapping rules; the last entry always matches.
pub static TYPE_RULES: &[TypeRule] = &[
    TypeRule {
        name: "integer",
        output: OpenApiType {
            kind: FieldKind::Integer,
            format: None,
        },
        matches: |upper| upper.contains("INT"),
        example: |_| ExampleValue::Integer(1),
    },
    TypeRule {
        name: "number",
        output: OpenApiType {
            kind: FieldKind::Number,
            format: None,
        },
        matches: |upper| {
            ["DECIMAL", "NUMERIC", "FLOAT", "DOUBLE"]
                .iter()
                .any(|marker| upper.contains(marker))
        },
        example: |_| ExampleValue::Number(1.5),
    },
    TypeRule {
        name: "date",
        output: string_type(Some("date")),
        matches: |upper| upper.contains("DATE") && !upper.contains("DATETIME"),
        example: |_| ExampleValue::text("2026-02-01"),
    },
    TypeRule {
        name: "date-time",
        output: string_type(Some("date-time")),
        matches: |upper| upper.contains("DATETIME") || upper.contains("TIMESTAMP"),
        example: |_| ExampleValue::text("2026-02-01 10:00:00"),
    },
    TypeRule {
        name: "enum",
        output: string_type(None),
        matches: |upper| upper.contains("ENUM"),
        example: first_enum_literal,
    },
    TypeRule {
        name: "text",
        output: string_type(None),
        matches: |upper| upper.contains("TEXT"),
        example: |_| ExampleValue::text("text"),
    },
    TypeRule {
        name: "char",
        output: string_type(None),
        matches: |upper| upper.contains("CHAR"),
        example: |_| ExampleValue::text("string"),
    },
    TypeRule {
        name: "fallback",
        output: string_type(None),
        matches: |_| true,
        example: |_| ExampleValue::text("value"),
    },
];

/// Returns the first rule matching `raw_definition`.
///
/// # Examples
///
/// ```
/// use crudgen_core::matching_rule;
///
/// assert_eq!(matching_rule("VARCHAR(100) NOT NULL").name, "char");
/// assert_eq!(matching_rule("DATETIME").name, "date-time");
/// assert_eq!(matching_rule("BLOB").name, "fallback");
/// ```
pub fn matching_rule(raw_definition: &str) -> &'static TypeRule {
    let upper = raw_definition.to_ascii_uppercase();
    TYPE_RULES
        .iter()
        .find(|rule| rule.matches(&upper))
        .unwrap_or(&TYPE_RULES[TYPE_RULES.len() - 1])
}

/// Maps a raw column definition to its OpenAPI type.
///
/// # Examples
///
/// ```
/// use crudgen_core::{FieldKind, map_type};
///
/// let t = map_type("DATE NOT NULL");
/// assert_eq!(t.kind, FieldKind::String);
/// assert_eq!(t.format, Some("date"));
/// ```
pub fn map_type(raw_definition: &str) -> OpenApiType {
    matching_rule(raw_definition).output
}

/// Builds an example request value for a raw column definition.
///
/// # Examples
///
/// ```
/// use crudgen_core::{ExampleValue, example_value};
///
/// assert_eq!(example_value("INT NOT NULL"), ExampleValue::Integer(1));
/// assert_eq!(
///     example_value("ENUM('pending','done') NOT NULL"),
///     ExampleValue::Text("pending".into())
/// );
/// ```
pub fn example_value(raw_definition: &str) -> ExampleValue {
    matching_rule(raw_definition).example(raw_definition)
}

fn first_enum_literal(raw_definition: &str) -> ExampleValue {
    let upper = raw_definition.to_ascii_uppercase();
    let literal = upper.find("ENUM(").and_then(|start| {
        let inner = &raw_definition[start + "ENUM(".len()..];
        let end = inner.find(')')?;
        let values = &inner[..end];
        if values.is_empty() {
            return None;
        }
        let first = values.split(',').next().unwrap_or_default().trim();
        Some(first.trim_matches(|ch| ch == '\'' || ch == '"').to_string())
    });
    literal.map_or_else(|| ExampleValue::text("value"), ExampleValue::Text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_varchar_is_string_not_char_misorder() {
        let t = map_type("VARCHAR(100)");
        assert_eq!(t.kind, FieldKind::String);
        assert_eq!(t.format, None);
        assert_eq!(example_value("VARCHAR(100)"), ExampleValue::text("string"));
    }

    #[test]
    fn test_datetime_is_not_plain_date() {
        assert_eq!(map_type("DATETIME").format, Some("date-time"));
        assert_eq!(map_type("TIMESTAMP NULL").format, Some("date-time"));
        assert_eq!(map_type("DATE").format, Some("date"));
        assert_eq!(
            example_value("DATETIME NOT NULL"),
            ExampleValue::text("2026-02-01 10:00:00")
        );
    }

    #[test]
    fn test_numeric_kinds() {
        assert_eq!(map_type("BIGINT UNSIGNED").kind, FieldKind::Integer);
        assert_eq!(map_type("TINYINT(1)").kind, FieldKind::Integer);
        assert_eq!(map_type("DECIMAL(10,2)").kind, FieldKind::Number);
        assert_eq!(map_type("double").kind, FieldKind::Number);
        assert_eq!(example_value("FLOAT"), ExampleValue::Number(1.5));
    }

    #[test]
    fn test_integer_rule_wins_over_later_rules() {
        // POINT contains INT; first match wins.
        assert_eq!(matching_rule("POINT").name, "integer");
    }

    #[test]
    fn test_enum_examples() {
        assert_eq!(
            example_value("enum('low','high') DEFAULT 'low'"),
            ExampleValue::text("low")
        );
        assert_eq!(
            example_value("ENUM( \"a\" , \"b\")"),
            ExampleValue::text("a")
        );
        assert_eq!(example_value("ENUM()"), ExampleValue::text("value"));
        assert_eq!(example_value("ENUM"), ExampleValue::text("value"));
        assert_eq!(map_type("ENUM('x')").kind, FieldKind::String);
    }

    #[test]
    fn test_text_and_fallback() {
        assert_eq!(example_value("LONGTEXT"), ExampleValue::text("text"));
        assert_eq!(example_value("CHAR(2)"), ExampleValue::text("string"));
        assert_eq!(example_value("BOOLEAN"), ExampleValue::text("value"));
        assert_eq!(map_type("JSON").kind, FieldKind::String);
    }

    #[test]
    fn test_rule_order_is_stable() {
        let names: Vec<&str> = TYPE_RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "integer", "number", "date", "date-time", "enum", "text", "char", "fallback"
            ]
        );
    }

    #[test]
    fn test_example_value_serializes_bare() {
        assert_eq!(
            serde_json::to_string(&ExampleValue::Integer(1)).unwrap(),
            "1"
        );
        assert_eq!(
            serde_json::to_string(&ExampleValue::Number(1.5)).unwrap(),
            "1.5"
        );
        assert_eq!(
            serde_json::to_string(&ExampleValue::text("x")).unwrap(),
            "\"x\""
        );
    }
}
