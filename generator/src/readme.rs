//! README renderer for the generated backend.

use crudgen_core::SchemaModel;

/// CRUD endpoints documented for every table, as `(method, suffix, summary)`.
const TABLE_ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "", "List records."),
    ("GET", "/:id", "Get one record by id."),
    ("POST", "", "Create a new record."),
    ("PUT", "/:id", "Update a record by id."),
    ("DELETE", "/:id", "Delete a record by id."),
];

/// Renders `README.md` describing the stack, layout and endpoints.
pub fn render_readme(model: &SchemaModel) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut push = |line: &str| lines.push(line.to_string());

    push("# Backend API (Node.js + Express)");
    push("");
    push("## What it does");
    push("REST API that manages the entities defined in the database (CRUD per table).");
    push("");
    push("## Tech stack");
    push("- Node.js 18+");
    push("- Express");
    push("- MySQL 8+");
    push("");
    push("## Installation");
    push("1. Go to the backend root directory.");
    push("2. Install dependencies:");
    push("   ```");
    push("   npm install");
    push("   ```");
    push("");
    push("## Running");
    push("```");
    push("npm run dev");
    push("```");
    push("");
    push("## Project structure");
    push("- `server.js`");
    push("- `src/app.js`");
    push("- `src/controllers/*Controller.js`");
    push("- `src/services/*Service.js`");
    push("- `src/repositories/*Repository.js`");
    push("- `src/routes/*.js`");
    push("- `src/db/pool.js`");
    push("");
    push("## Tests");
    push("No automated tests are configured by default.");
    push("Test resources:");
    push("- `test/BD_creada.postman_collection.json`");
    push("- `test/openapi.yaml`");
    push("");
    push("## Base endpoints");
    push("- `GET /health`");
    push("");
    push("## Endpoints per table");

    for table in &model.tables {
        lines.push(String::new());
        lines.push(format!("### Table: {}", table.name));
        lines.push("| Endpoint | Description |".to_string());
        lines.push("| --- | --- |".to_string());
        for (method, suffix, summary) in TABLE_ENDPOINTS {
            lines.push(format!(
                "| `{method} /{}{suffix}` | {summary} |",
                table.name
            ));
        }
    }

    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crudgen_core::TableSchema;

    #[test]
    fn test_readme_lists_endpoints_per_table() {
        let model = SchemaModel {
            database: None,
            tables: vec![TableSchema::new("users"), TableSchema::new("tasks")],
        };
        let readme = render_readme(&model);
        assert!(readme.starts_with("# Backend API (Node.js + Express)\n"));
        assert!(readme.contains("### Table: users\n| Endpoint | Description |"));
        assert!(readme.contains("| `GET /tasks/:id` | Get one record by id. |"));
        assert!(readme.contains("| `DELETE /users/:id` | Delete a record by id. |"));
        assert!(readme.ends_with("Delete a record by id. |\n"));
    }

    #[test]
    fn test_readme_without_tables_still_renders() {
        let readme = render_readme(&SchemaModel::default());
        assert!(readme.contains("## Endpoints per table"));
        assert!(readme.contains("- `GET /health`"));
    }
}
