//! Error types for generation runs.
//!
//! Precondition failures (missing input, missing templates, empty SQL, no
//! tables, no database name) abort a run before anything is written. File
//! collisions under [`WritePolicy::SkipIfExists`](crate::writer::WritePolicy)
//! are not errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating a project.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configured base URL is not a valid absolute URL.
    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// SQL input file does not exist.
    #[error("SQL file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Templates directory does not exist.
    #[error("templates dir not found: {}", .0.display())]
    TemplatesNotFound(PathBuf),

    /// A template file is missing from an existing templates directory.
    #[error("template not found: {}", .0.display())]
    TemplateMissing(PathBuf),

    /// SQL input contains only whitespace.
    #[error("SQL file is empty")]
    EmptySql,

    /// No `CREATE TABLE ... ENGINE` statement could be parsed.
    #[error("no CREATE TABLE statements found")]
    NoTables,

    /// Database name was neither in the SQL nor supplied by the user.
    #[error("database name is required")]
    MissingDatabaseName,

    /// Destination exists and the write policy forbids touching it.
    #[error("refusing to overwrite existing file: {}", .0.display())]
    AlreadyExists(PathBuf),
}

/// Convenience alias for results with [`GenerateError`].
pub type Result<T> = std::result::Result<T, GenerateError>;
