//! Postman v2.1.0 collection builder.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;
use url::Url;

use crudgen_core::{SchemaModel, TableSchema, example_value};

use crate::config::ApiConfig;
use crate::error::{GenerateError, Result};

pub const POSTMAN_SCHEMA_URL: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// Top-level collection document.
#[derive(Debug, Clone, Serialize)]
pub struct PostmanCollection {
    pub info: CollectionInfo,
    pub variable: Vec<Variable>,
    pub item: Vec<Folder>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionInfo {
    pub name: String,
    pub description: String,
    pub schema: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Variable {
    pub key: String,
    pub value: String,
}

/// One folder per table.
#[derive(Debug, Clone, Serialize)]
pub struct Folder {
    pub name: String,
    pub item: Vec<RequestItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestItem {
    pub name: String,
    pub request: Request,
}

#[derive(Debug, Clone, Serialize)]
pub struct Request {
    pub method: String,
    pub header: Vec<Header>,
    pub url: RequestUrl,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

/// Structured request URL as Postman stores it.
#[derive(Debug, Clone, Serialize)]
pub struct RequestUrl {
    pub raw: String,
    pub protocol: String,
    pub host: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    pub path: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestBody {
    pub mode: String,
    pub raw: String,
}

/// Example request body in column declaration order.
struct ExampleBody<'a>(&'a TableSchema);

impl ExampleBody<'_> {
    fn columns(&self) -> impl Iterator<Item = &crudgen_core::ColumnSchema> {
        self.0.input_columns().filter(|c| c.name != "id")
    }
}

impl Serialize for ExampleBody<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for column in self.columns() {
            map.serialize_entry(&column.name, &example_value(&column.raw_definition))?;
        }
        map.end()
    }
}

/// Base URL split into the pieces every request URL is built from.
struct UrlBase {
    raw: String,
    protocol: String,
    host: Vec<String>,
    port: Option<String>,
    path: Vec<String>,
}

impl UrlBase {
    fn parse(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url).map_err(|source| GenerateError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        let host = url
            .host_str()
            .map(|h| h.split('.').map(str::to_string).collect())
            .unwrap_or_default();
        let path = url
            .path_segments()
            .map(|segments| {
                segments
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Ok(Self {
            raw: base_url.trim_end_matches('/').to_string(),
            protocol: url.scheme().to_string(),
            host,
            port: url.port().map(|p| p.to_string()),
            path,
        })
    }

    fn request_url(&self, segments: &[&str]) -> RequestUrl {
        let mut path = self.path.clone();
        path.extend(segments.iter().map(|s| s.to_string()));
        RequestUrl {
            raw: format!("{}/{}", self.raw, segments.join("/")),
            protocol: self.protocol.clone(),
            host: self.host.clone(),
            port: self.port.clone(),
            path,
        }
    }
}

fn request(name: String, method: &str, url: RequestUrl, body: Option<&str>) -> RequestItem {
    RequestItem {
        name,
        request: Request {
            method: method.to_string(),
            header: vec![Header {
                key: "Content-Type".to_string(),
                value: "application/json".to_string(),
            }],
            url,
            body: body.map(|raw| RequestBody {
                mode: "raw".to_string(),
                raw: raw.to_string(),
            }),
        },
    }
}

fn table_folder(table: &TableSchema, base: &UrlBase) -> Result<Folder> {
    let t = table.name.as_str();
    let body = serde_json::to_string_pretty(&ExampleBody(table))?;
    let list = base.request_url(&[t]);
    let by_id = base.request_url(&[t, "1"]);

    Ok(Folder {
        name: t.to_string(),
        item: vec![
            request(format!("GET /{t}"), "GET", list.clone(), None),
            request(format!("GET /{t}/:id"), "GET", by_id.clone(), None),
            request(format!("POST /{t}"), "POST", list, Some(&body)),
            request(format!("PUT /{t}/:id"), "PUT", by_id.clone(), Some(&body)),
            request(format!("DELETE /{t}/:id"), "DELETE", by_id, None),
        ],
    })
}

/// Builds the collection for every table in `model`.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidBaseUrl`] if `api.base_url` does not parse.
pub fn build_collection(model: &SchemaModel, api: &ApiConfig) -> Result<PostmanCollection> {
    let base = UrlBase::parse(&api.base_url)?;
    let item = model
        .tables
        .iter()
        .map(|table| table_folder(table, &base))
        .collect::<Result<Vec<_>>>()?;
    debug!(folders = item.len(), base_url = %api.base_url, "Built Postman collection");

    Ok(PostmanCollection {
        info: CollectionInfo {
            name: api.collection_name.clone(),
            description: api.collection_description.clone(),
            schema: POSTMAN_SCHEMA_URL.to_string(),
        },
        variable: vec![Variable {
            key: "baseUrl".to_string(),
            value: api.base_url.clone(),
        }],
        item,
    })
}

/// Renders the collection as pretty-printed JSON.
pub fn render_collection(model: &SchemaModel, api: &ApiConfig) -> Result<String> {
    let collection = build_collection(model, api)?;
    Ok(serde_json::to_string_pretty(&collection)?)
}
