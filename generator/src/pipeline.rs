//! End-to-end generation runs.
//!
//! Each run checks every precondition before the first write, so a failed
//! run leaves the project root exactly as it found it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crudgen_core::SchemaModel;
use crudgen_parser::parse_schema_with_report;

use crate::config::GeneratorConfig;
use crate::env::render_env;
use crate::error::{GenerateError, Result};
use crate::openapi::render_openapi;
use crate::postman::render_collection;
use crate::readme::render_readme;
use crate::scaffold::{self, ScaffoldOutcome};
use crate::writer::{WriteOutcome, WritePolicy, write_file};

pub const README_PATH: &str = "README.md";
pub const OPENAPI_PATH: &str = "test/openapi.yaml";
pub const POSTMAN_PATH: &str = "test/BD_creada.postman_collection.json";
pub const ENV_PATH: &str = ".env";

/// What a run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Files created or overwritten.
    pub written: Vec<PathBuf>,
    /// Files left untouched because they already existed.
    pub skipped: Vec<PathBuf>,
    /// Tables newly registered in the routes index.
    pub patched: Vec<String>,
    /// Tables processed, in model order.
    pub tables: Vec<String>,
    /// Database name written to `.env`.
    pub database: Option<String>,
}

impl GenerationSummary {
    fn absorb(&mut self, outcome: ScaffoldOutcome) {
        self.written.extend(outcome.written);
        self.skipped.extend(outcome.skipped);
    }

    fn overwrite(&mut self, path: PathBuf, contents: &str) -> Result<()> {
        match write_file(&path, contents, WritePolicy::Overwrite)? {
            WriteOutcome::Written => self.written.push(path),
            WriteOutcome::Skipped => self.skipped.push(path),
        }
        Ok(())
    }
}

/// Reads and parses the SQL input, failing on a missing file, blank input
/// or a schema without tables.
fn load_model(sql_path: &Path, templates_dir: Option<&Path>) -> Result<SchemaModel> {
    if !sql_path.is_file() {
        return Err(GenerateError::InputNotFound(sql_path.to_path_buf()));
    }
    if let Some(dir) = templates_dir {
        if !dir.is_dir() {
            return Err(GenerateError::TemplatesNotFound(dir.to_path_buf()));
        }
    }

    let sql = fs::read_to_string(sql_path)?;
    if sql.trim().is_empty() {
        return Err(GenerateError::EmptySql);
    }

    let run = parse_schema_with_report(&sql);
    debug!(
        tables = run.report.table_count,
        columns = run.report.column_count,
        dropped = run.report.dropped_lines.len(),
        duplicates = run.report.duplicate_tables.len(),
        "Parsed SQL schema"
    );
    if run.model.is_empty() {
        return Err(GenerateError::NoTables);
    }
    Ok(run.model)
}

fn resolve_database<F>(
    model: &SchemaModel,
    database_override: Option<&str>,
    prompt: F,
) -> Result<String>
where
    F: FnOnce() -> io::Result<String>,
{
    let name = match database_override.or(model.database.as_deref()) {
        Some(name) => name.trim().to_string(),
        None => prompt()?.trim().to_string(),
    };
    if name.is_empty() {
        return Err(GenerateError::MissingDatabaseName);
    }
    Ok(name)
}

/// Runs the full structure generation.
///
/// An explicit `sql_path` is used as given, so a relative one resolves
/// against the current directory. Without it the configured input under
/// the project root is read.
///
/// The database name comes from `database_override`, then from the SQL,
/// and finally from `prompt`, which is only called when both are absent.
///
/// # Errors
///
/// Fails before writing anything when the SQL file or templates directory
/// is missing, the SQL is blank, no table parses, or the database name
/// resolves to an empty string.
pub fn generate_full<F>(
    config: &GeneratorConfig,
    sql_path: Option<&Path>,
    database_override: Option<&str>,
    prompt: F,
) -> Result<GenerationSummary>
where
    F: FnOnce() -> io::Result<String>,
{
    let root = config.project_root.as_path();
    let sql_path = sql_path.map_or_else(|| config.sql_input_path(), Path::to_path_buf);
    let templates_dir = config.templates_path();

    let model = load_model(&sql_path, Some(templates_dir.as_path()))?;
    let database = resolve_database(&model, database_override, prompt)?;
    scaffold::check_table_templates(&templates_dir)?;
    info!(
        database = %database,
        tables = model.tables.len(),
        sql = %sql_path.display(),
        "Generating full structure"
    );

    let mut summary = GenerationSummary {
        tables: model.table_names().into_iter().map(str::to_string).collect(),
        database: Some(database.clone()),
        ..GenerationSummary::default()
    };

    for table in &model.tables {
        let outcome = scaffold::generate_table_files(root, &templates_dir, table)?;
        if outcome.routes_patched {
            summary.patched.push(table.name.clone());
        }
        summary.absorb(outcome);
    }

    summary.overwrite(root.join(README_PATH), &render_readme(&model))?;
    summary.overwrite(root.join(OPENAPI_PATH), &render_openapi(&model, &config.api)?)?;
    summary.overwrite(root.join(POSTMAN_PATH), &render_collection(&model, &config.api)?)?;
    summary.overwrite(root.join(ENV_PATH), &render_env(&database, &config.env))?;

    info!(
        written = summary.written.len(),
        skipped = summary.skipped.len(),
        "Full structure generated"
    );
    Ok(summary)
}

/// Writes only the Postman collection.
///
/// `sql_path` follows the same rules as in [`generate_full`].
pub fn generate_postman(
    config: &GeneratorConfig,
    sql_path: Option<&Path>,
) -> Result<GenerationSummary> {
    let sql_path = sql_path.map_or_else(|| config.sql_input_path(), Path::to_path_buf);
    let model = load_model(&sql_path, None)?;
    let collection = render_collection(&model, &config.api)?;

    let mut summary = GenerationSummary {
        tables: model.table_names().into_iter().map(str::to_string).collect(),
        database: model.database.clone(),
        ..GenerationSummary::default()
    };
    summary.overwrite(config.project_root.join(POSTMAN_PATH), &collection)?;
    info!(tables = summary.tables.len(), "Postman collection generated");
    Ok(summary)
}

/// Copies the base boilerplate into the project root.
pub fn generate_base(config: &GeneratorConfig) -> Result<GenerationSummary> {
    let outcome = scaffold::generate_base(&config.project_root, &config.base_templates_path())?;
    let mut summary = GenerationSummary::default();
    summary.absorb(outcome);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQL: &str = "CREATE TABLE users (
  id INT AUTO_INCREMENT,
  name VARCHAR(50) NOT NULL,
  PRIMARY KEY (id)
) ENGINE=InnoDB;
";

    fn no_prompt() -> io::Result<String> {
        panic!("prompt must not be called")
    }

    #[test]
    fn test_resolve_database_order() {
        let mut model = SchemaModel::default();
        model.database = Some("from_sql".to_string());
        assert_eq!(resolve_database(&model, Some("cli"), no_prompt).unwrap(), "cli");
        assert_eq!(resolve_database(&model, None, no_prompt).unwrap(), "from_sql");

        model.database = None;
        let name = resolve_database(&model, None, || Ok("  typed \n".to_string())).unwrap();
        assert_eq!(name, "typed");
    }

    #[test]
    fn test_resolve_database_empty_answer() {
        let err = resolve_database(&SchemaModel::default(), None, || Ok("\n".to_string()))
            .unwrap_err();
        assert!(matches!(err, GenerateError::MissingDatabaseName));
    }

    #[test]
    fn test_load_model_preconditions() {
        let dir = tempfile::tempdir().unwrap();
        let sql = dir.path().join("schema.sql");

        let err = load_model(&sql, None).unwrap_err();
        assert!(matches!(err, GenerateError::InputNotFound(_)));

        fs::write(&sql, SQL).unwrap();
        let err = load_model(&sql, Some(dir.path().join("templates").as_path())).unwrap_err();
        assert!(matches!(err, GenerateError::TemplatesNotFound(_)));

        fs::write(&sql, "  \n\t").unwrap();
        assert!(matches!(load_model(&sql, None).unwrap_err(), GenerateError::EmptySql));

        fs::write(&sql, "CREATE TABLE t (id INT);").unwrap();
        assert!(matches!(load_model(&sql, None).unwrap_err(), GenerateError::NoTables));

        fs::write(&sql, SQL).unwrap();
        assert_eq!(load_model(&sql, None).unwrap().table_names(), vec!["users"]);
    }

    #[test]
    fn test_generate_postman_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("schema.sql"), SQL).unwrap();
        let config = GeneratorConfig::with_root(dir.path());

        let sql = dir.path().join("schema.sql");
        let summary = generate_postman(&config, Some(sql.as_path())).unwrap();
        assert_eq!(summary.written, vec![dir.path().join(POSTMAN_PATH)]);
        assert_eq!(summary.tables, vec!["users"]);
        assert!(!dir.path().join(ENV_PATH).exists());
    }

    #[test]
    fn test_explicit_sql_path_is_not_joined_onto_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("schema.sql"), SQL).unwrap();
        let config = GeneratorConfig::with_root(dir.path().join("out"));

        let err = generate_postman(&config, Some(Path::new("schema.sql"))).unwrap_err();
        assert!(
            matches!(&err, GenerateError::InputNotFound(p) if p == Path::new("schema.sql")),
            "{err}"
        );

        let summary = generate_postman(&config, Some(&dir.path().join("schema.sql"))).unwrap();
        assert_eq!(summary.written, vec![dir.path().join("out").join(POSTMAN_PATH)]);
    }
}
