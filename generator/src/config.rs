//! Generator configuration.
//!
//! Every path a run touches is derived from an explicit [`GeneratorConfig`];
//! there is no process-wide working-directory state. Relative paths are
//! resolved against [`GeneratorConfig::project_root`].
//!
//! # Example YAML
//!
//! ```yaml
//! project_root: ./backend
//! templates_dir: templates/nodejs-full-structure
//! base_templates_dir: templates/nodejs-base-boilerplate
//! sql_path: docs/scripts/BD/BD_ToDoList.sql
//! api:
//!   title: Backend API
//!   version: 1.0.0
//!   base_url: http://localhost:3000
//! env:
//!   port: 3000
//!   db_host: localhost
//!   db_port: 3306
//!   db_user: root
//!   db_password: ""
//! ```

use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default SQL input, relative to the project root.
pub const DEFAULT_SQL_PATH: &str = "docs/scripts/BD/BD_ToDoList.sql";
/// Default per-table template set, relative to the project root.
pub const DEFAULT_TEMPLATES_DIR: &str = "templates/nodejs-full-structure";
/// Default base boilerplate template set, relative to the project root.
pub const DEFAULT_BASE_TEMPLATES_DIR: &str = "templates/nodejs-base-boilerplate";

/// API metadata used by the README, OpenAPI and Postman emitters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// OpenAPI `info.title`.
    pub title: String,
    /// OpenAPI `info.version`.
    pub version: String,
    /// OpenAPI `info.description`.
    pub description: String,
    /// Server URL used by OpenAPI `servers` and Postman requests.
    pub base_url: String,
    /// Postman collection name.
    pub collection_name: String,
    /// Postman collection description.
    pub collection_description: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            title: "Backend API".to_string(),
            version: "1.0.0".to_string(),
            description: "Specification generated automatically from the SQL schema.".to_string(),
            base_url: "http://localhost:3000".to_string(),
            collection_name: "Generated API".to_string(),
            collection_description:
                "Collection generated automatically to exercise the CRUD endpoints of every table."
                    .to_string(),
        }
    }
}

/// Fixed `.env` values; `DB_NAME` always comes from the resolved database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvDefaults {
    pub port: u16,
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
}

impl Default for EnvDefaults {
    fn default() -> Self {
        Self {
            port: 3000,
            db_host: "localhost".to_string(),
            db_port: 3306,
            db_user: "root".to_string(),
            db_password: String::new(),
        }
    }
}

/// Top-level generator configuration.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use crudgen_generator::config::GeneratorConfig;
///
/// let config = GeneratorConfig::with_root("/srv/backend");
/// assert_eq!(
///     config.templates_path(),
///     Path::new("/srv/backend/templates/nodejs-full-structure")
/// );
/// assert_eq!(config.env.db_port, 3306);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Root of the generated backend project.
    pub project_root: PathBuf,
    /// Per-table template set (controller/service/repository/routes/pool).
    pub templates_dir: PathBuf,
    /// Base boilerplate template set.
    pub base_templates_dir: PathBuf,
    /// SQL schema used when no input path is given.
    pub sql_path: PathBuf,
    pub api: ApiConfig,
    pub env: EnvDefaults,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
            base_templates_dir: PathBuf::from(DEFAULT_BASE_TEMPLATES_DIR),
            sql_path: PathBuf::from(DEFAULT_SQL_PATH),
            api: ApiConfig::default(),
            env: EnvDefaults::default(),
        }
    }
}

impl GeneratorConfig {
    /// Default configuration rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: root.into(),
            ..Self::default()
        }
    }

    /// Loads configuration from a YAML file.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::GenerateError::Io) if the file cannot be read,
    /// or [`Yaml`](crate::GenerateError::Yaml) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Resolves `path` against the project root unless it is absolute.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }

    /// Per-table templates directory, resolved against the root.
    pub fn templates_path(&self) -> PathBuf {
        self.resolve(&self.templates_dir)
    }

    /// Base boilerplate templates directory, resolved against the root.
    pub fn base_templates_path(&self) -> PathBuf {
        self.resolve(&self.base_templates_dir)
    }

    /// Default SQL script read when no path is given on the command line.
    pub fn sql_input_path(&self) -> PathBuf {
        self.resolve(&self.sql_path)
    }
}
