//! Registration of generated routers in `src/routes/index.js`.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use crate::error::Result;

struct RoutesPatterns {
    router_decl: Regex,
    trailing_export: Regex,
}

static PATTERNS: LazyLock<RoutesPatterns> = LazyLock::new(|| RoutesPatterns {
    router_decl: Regex::new(r"const router = express\.Router\(\);(\r?\n)?")
        .expect("static regex must compile"),
    trailing_export: Regex::new(r"module\.exports = router;\r?\n?\z")
        .expect("static regex must compile"),
});

/// `const <table>Routes = require('./<table>');`
pub fn require_line(table: &str) -> String {
    format!("const {table}Routes = require('./{table}');")
}

/// `router.use('/<table>', <table>Routes);`
pub fn use_line(table: &str) -> String {
    format!("router.use('/{table}', {table}Routes);")
}

/// Adds the `require` and `router.use` lines for `table` to an index file.
///
/// The `require` goes right after the router declaration (or at the top
/// when there is none); the `use` goes before a trailing
/// `module.exports = router;` (or at the end). Lines already present are
/// left alone, so patching twice is the same as patching once.
///
/// # Examples
///
/// ```
/// use crudgen_generator::routes::patch_routes_index;
///
/// let index = "const express = require('express');\nconst router = express.Router();\n\nmodule.exports = router;\n";
/// let patched = patch_routes_index(index, "users");
/// assert_eq!(
///     patched,
///     "const express = require('express');\n\
///      const router = express.Router();\n\
///      const usersRoutes = require('./users');\n\
///      \n\
///      router.use('/users', usersRoutes);\n\
///      \n\
///      module.exports = router;\n"
/// );
/// assert_eq!(patch_routes_index(&patched, "users"), patched);
/// ```
pub fn patch_routes_index(content: &str, table: &str) -> String {
    let require = require_line(table);
    let register = use_line(table);
    let mut content = content.to_string();

    if !content.contains(&require) {
        content = match PATTERNS.router_decl.find(&content) {
            Some(m) => {
                let (head, tail) = content.split_at(m.end());
                let sep = if m.as_str().ends_with('\n') { "" } else { "\n" };
                format!("{head}{sep}{require}\n{tail}")
            }
            None => format!("{require}\n{content}"),
        };
    }

    if !content.contains(&register) {
        content = match PATTERNS.trailing_export.find(&content) {
            Some(m) => format!(
                "{}{register}\n\nmodule.exports = router;\n",
                &content[..m.start()]
            ),
            None => format!("{content}\n{register}\n"),
        };
    }

    content
}

/// Patches the index file at `path` in place.
///
/// Returns `Ok(false)` without touching anything when the file does not
/// exist or already registers `table`.
pub fn update_routes_index(path: &Path, table: &str) -> Result<bool> {
    if !path.is_file() {
        debug!(path = %path.display(), "No routes index, skipping registration");
        return Ok(false);
    }
    let content = fs::read_to_string(path)?;
    let patched = patch_routes_index(&content, table);
    if patched == content {
        debug!(table, "Routes already registered");
        return Ok(false);
    }
    fs::write(path, patched)?;
    info!(table, path = %path.display(), "Registered routes");
    Ok(true)
}
