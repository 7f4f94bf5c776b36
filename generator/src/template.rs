//! `{{token}}` substitution over opaque template text.

use std::fs;
use std::path::Path;

use crudgen_core::EntityNames;

use crate::error::{GenerateError, Result};

/// Replaces every `{{key}}` occurrence for each `(key, value)` pair.
///
/// Unknown tokens are left as-is.
///
/// # Examples
///
/// ```
/// use crudgen_generator::template::render;
///
/// let tokens = [("Entity", "User"), ("table", "users")];
/// let out = render("{{Entity}} in {{table}} {{other}}", &tokens);
/// assert_eq!(out, "User in users {{other}}");
/// ```
pub fn render(template: &str, tokens: &[(&str, &str)]) -> String {
    tokens
        .iter()
        .fold(template.to_string(), |acc, (key, value)| {
            acc.replace(&format!("{{{{{key}}}}}"), value)
        })
}

/// Token set for one table: `{{Entity}}`, `{{entity}}`, `{{table}}`.
pub fn entity_tokens(names: &EntityNames) -> [(&str, &str); 3] {
    [
        ("Entity", names.pascal.as_str()),
        ("entity", names.camel.as_str()),
        ("table", names.table.as_str()),
    ]
}

/// A template file loaded from a template directory.
#[derive(Debug, Clone)]
pub struct Template {
    pub text: String,
}

impl Template {
    /// Reads `name` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::TemplateMissing`] if the file does not exist.
    pub fn load(dir: &Path, name: &str) -> Result<Self> {
        let source = dir.join(name);
        if !source.is_file() {
            return Err(GenerateError::TemplateMissing(source));
        }
        let text = fs::read_to_string(&source)?;
        Ok(Self { text })
    }

    /// Renders the template text with [`render`].
    pub fn render(&self, tokens: &[(&str, &str)]) -> String {
        render(&self.text, tokens)
    }
}
