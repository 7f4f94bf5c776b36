//! Naming conventions derived from table identifiers.
//!
//! Singularization is a deliberately small suffix heuristic, not English
//! morphology: `status` becomes `statu` and `classes` becomes `class`.

use serde::{Deserialize, Serialize};

/// Converts a plural table name into its singular form.
///
/// Rules are tried in order: `ies` → `y`, `ses` → strip `es`, trailing `s`
/// (but not `ss`) → strip `s`, otherwise unchanged.
///
/// # Examples
///
/// ```
/// use crudgen_core::singularize;
///
/// assert_eq!(singularize("categories"), "category");
/// assert_eq!(singularize("users"), "user");
/// assert_eq!(singularize("address"), "address");
/// ```
pub fn singularize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if name.ends_with("ses") {
        return name[..name.len() - 2].to_string();
    }
    if name.ends_with('s') && !name.ends_with("ss") {
        return name[..name.len() - 1].to_string();
    }
    name.to_string()
}

/// Converts `snake_case` into `PascalCase`.
///
/// Empty segments (leading, trailing or doubled underscores) are dropped.
///
/// # Examples
///
/// ```
/// use crudgen_core::to_pascal_case;
///
/// assert_eq!(to_pascal_case("order_item"), "OrderItem");
/// assert_eq!(to_pascal_case("_user__role_"), "UserRole");
/// ```
pub fn to_pascal_case(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Converts `snake_case` into `camelCase`.
///
/// # Examples
///
/// ```
/// use crudgen_core::to_camel_case;
///
/// assert_eq!(to_camel_case("order_item"), "orderItem");
/// ```
pub fn to_camel_case(name: &str) -> String {
    let pascal = to_pascal_case(name);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Identifiers derived from one table name.
///
/// These feed the `{{table}}`, `{{Entity}}` and `{{entity}}` template
/// tokens as well as schema and file names.
///
/// # Examples
///
/// ```
/// use crudgen_core::EntityNames;
///
/// let names = EntityNames::from_table("task_categories");
/// assert_eq!(names.table, "task_categories");
/// assert_eq!(names.singular, "task_category");
/// assert_eq!(names.pascal, "TaskCategory");
/// assert_eq!(names.camel, "taskCategory");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityNames {
    /// Raw table name.
    pub table: String,
    /// Singular form of the table name.
    pub singular: String,
    /// `PascalCase` singular (`{{Entity}}`).
    pub pascal: String,
    /// `camelCase` singular (`{{entity}}`).
    pub camel: String,
}

impl EntityNames {
    /// Derives every identifier from a raw table name.
    pub fn from_table(table: &str) -> Self {
        let singular = singularize(table);
        Self {
            table: table.to_string(),
            pascal: to_pascal_case(&singular),
            camel: to_camel_case(&singular),
            singular,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singularize_rules() {
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("users"), "user");
        assert_eq!(singularize("classes"), "class");
        assert_eq!(singularize("addresses"), "address");
        assert_eq!(singularize("status"), "statu");
        assert_eq!(singularize("boss"), "boss");
    }

    #[test]
    fn test_singularize_keeps_singular_nouns() {
        for name in ["person", "task", "inventory", "data"] {
            assert_eq!(singularize(name), name);
            assert_eq!(singularize(&singularize(name)), name);
        }
    }

    #[test]
    fn test_singularize_short_inputs() {
        assert_eq!(singularize(""), "");
        assert_eq!(singularize("s"), "");
        assert_eq!(singularize("ies"), "y");
    }

    #[test]
    fn test_case_conversion() {
        assert_eq!(to_pascal_case("order_item"), "OrderItem");
        assert_eq!(to_camel_case("order_item"), "orderItem");
        assert_eq!(to_pascal_case("users"), "Users");
        assert_eq!(to_camel_case("Users"), "users");
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_camel_case("___"), "");
    }

    #[test]
    fn test_entity_names_for_plural_snake_table() {
        let names = EntityNames::from_table("order_items");
        assert_eq!(names.singular, "order_item");
        assert_eq!(names.pascal, "OrderItem");
        assert_eq!(names.camel, "orderItem");
    }
}
