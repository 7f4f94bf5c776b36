//! CRUD backend generation from a parsed SQL schema.
//!
//! This crate turns a [`SchemaModel`] into the files of a Node.js/Express
//! backend: per-table controller/service/repository/route modules rendered
//! from templates, a README, an OpenAPI 3.0.3 document, a Postman v2.1.0
//! collection and a `.env` file.
//!
//! # Main entry points
//!
//! - [`pipeline::generate_full`]: every artifact for every table.
//! - [`pipeline::generate_postman`]: the Postman collection only.
//! - [`pipeline::generate_base`]: the base boilerplate (server, app,
//!   middlewares, routes index).
//!
//! The emitters ([`readme`], [`openapi`], [`postman`], [`env`]) are pure
//! functions from the model to text and can be used on their own.
//!
//! # Example
//!
//! ```
//! use crudgen_generator::config::ApiConfig;
//! use crudgen_generator::openapi::render_openapi;
//! use crudgen_parser::parse_schema;
//!
//! let model = parse_schema(
//!     "CREATE TABLE notes (\n  id INT AUTO_INCREMENT,\n  body TEXT NOT NULL\n) ENGINE=InnoDB;",
//! );
//! let yaml = render_openapi(&model, &ApiConfig::default()).unwrap();
//! assert!(yaml.contains("openapi: 3.0.3"));
//! assert!(yaml.contains("NoteInput:"));
//! ```
//!
//! [`SchemaModel`]: crudgen_core::SchemaModel

pub mod config;
pub mod env;
pub mod error;
pub mod openapi;
pub mod pipeline;
pub mod postman;
pub mod readme;
pub mod routes;
pub mod scaffold;
pub mod template;
pub mod writer;

pub use config::GeneratorConfig;
pub use error::{GenerateError, Result};
pub use pipeline::{GenerationSummary, generate_base, generate_full, generate_postman};
