//! Template-driven file scaffolding.
//!
//! Per-table files render the `{{Entity}}`/`{{entity}}`/`{{table}}` tokens;
//! base boilerplate is copied as-is. Both only create missing files.

use std::path::{Path, PathBuf};

use tracing::info;

use crudgen_core::TableSchema;

use crate::error::{GenerateError, Result};
use crate::routes::update_routes_index;
use crate::template::{Template, entity_tokens};
use crate::writer::{WriteOutcome, WritePolicy, write_file};

/// Shared database pool template and its destination.
pub const POOL_TEMPLATE: (&str, &str) = ("db.pool.js.tmpl", "src/db/pool.js");

/// Routes index, relative to the project root.
pub const ROUTES_INDEX: &str = "src/routes/index.js";

/// Per-table templates and their destination patterns.
///
/// Destinations use the same tokens as the templates.
pub const TABLE_TEMPLATES: &[(&str, &str)] = &[
    ("controller.js.tmpl", "src/controllers/{{entity}}Controller.js"),
    ("service.js.tmpl", "src/services/{{entity}}Service.js"),
    ("repository.js.tmpl", "src/repositories/{{entity}}Repository.js"),
    ("routes.js.tmpl", "src/routes/{{table}}.js"),
];

/// Base boilerplate templates and their destinations.
pub const BASE_FILES: &[(&str, &str)] = &[
    ("server.js.tmpl", "server.js"),
    ("package.json.tmpl", "package.json"),
    ("README.md.tmpl", "README.md"),
    ("app.js.tmpl", "src/app.js"),
    ("routes.index.js.tmpl", ROUTES_INDEX),
    ("middlewares.auth.js.tmpl", "src/middlewares/auth.js"),
    ("middlewares.errorHandler.js.tmpl", "src/middlewares/errorHandler.js"),
    ("middlewares.notFound.js.tmpl", "src/middlewares/notFound.js"),
];

/// Files touched while scaffolding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    /// Newly created files.
    pub written: Vec<PathBuf>,
    /// Files that already existed.
    pub skipped: Vec<PathBuf>,
    /// Whether the routes index was modified.
    pub routes_patched: bool,
}

impl ScaffoldOutcome {
    fn record(&mut self, path: PathBuf, outcome: WriteOutcome) {
        match outcome {
            WriteOutcome::Written => self.written.push(path),
            WriteOutcome::Skipped => self.skipped.push(path),
        }
    }
}

fn ensure_templates_dir(templates_dir: &Path) -> Result<()> {
    if templates_dir.is_dir() {
        Ok(())
    } else {
        Err(GenerateError::TemplatesNotFound(templates_dir.to_path_buf()))
    }
}

/// Fails unless every per-table template is present in `templates_dir`.
pub fn check_table_templates(templates_dir: &Path) -> Result<()> {
    ensure_templates_dir(templates_dir)?;
    for &(name, _) in TABLE_TEMPLATES.iter().chain(std::iter::once(&POOL_TEMPLATE)) {
        let path = templates_dir.join(name);
        if !path.is_file() {
            return Err(GenerateError::TemplateMissing(path));
        }
    }
    Ok(())
}

/// Renders the per-table files for `table` under `root` and registers its
/// router in the routes index when one exists.
pub fn generate_table_files(
    root: &Path,
    templates_dir: &Path,
    table: &TableSchema,
) -> Result<ScaffoldOutcome> {
    ensure_templates_dir(templates_dir)?;
    let names = table.entity_names();
    let tokens = entity_tokens(&names);
    let mut outcome = ScaffoldOutcome::default();

    for (template_name, destination) in TABLE_TEMPLATES {
        let template = Template::load(templates_dir, template_name)?;
        let path = root.join(crate::template::render(destination, &tokens));
        let result = write_file(&path, &template.render(&tokens), WritePolicy::SkipIfExists)?;
        outcome.record(path, result);
    }

    let (pool_template, pool_destination) = POOL_TEMPLATE;
    let pool = Template::load(templates_dir, pool_template)?;
    let path = root.join(pool_destination);
    let result = write_file(&path, &pool.text, WritePolicy::SkipIfExists)?;
    outcome.record(path, result);

    outcome.routes_patched = update_routes_index(&root.join(ROUTES_INDEX), &table.name)?;

    info!(
        table = %table.name,
        written = outcome.written.len(),
        skipped = outcome.skipped.len(),
        "Scaffolded table"
    );
    Ok(outcome)
}

/// Copies the base boilerplate into `root`, keeping existing files.
///
/// All templates are read before anything is written, so a missing
/// template leaves the project untouched.
pub fn generate_base(root: &Path, templates_dir: &Path) -> Result<ScaffoldOutcome> {
    ensure_templates_dir(templates_dir)?;
    let templates = BASE_FILES
        .iter()
        .map(|&(name, destination)| -> Result<(Template, &str)> {
            Ok((Template::load(templates_dir, name)?, destination))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut outcome = ScaffoldOutcome::default();
    for (template, destination) in templates {
        let path = root.join(destination);
        let result = write_file(&path, &template.text, WritePolicy::SkipIfExists)?;
        outcome.record(path, result);
    }

    info!(
        written = outcome.written.len(),
        skipped = outcome.skipped.len(),
        "Scaffolded base boilerplate"
    );
    Ok(outcome)
}
