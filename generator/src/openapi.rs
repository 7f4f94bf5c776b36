//! OpenAPI 3.0.3 document renderer.
//!
//! The document is assembled as insertion-ordered YAML mappings so the
//! output follows table and column order and is byte-for-byte reproducible.

use crudgen_core::{ColumnSchema, SchemaModel, TableSchema, map_type};
use serde_yaml::{Mapping, Value};

use crate::config::ApiConfig;
use crate::error::Result;

pub const OPENAPI_VERSION: &str = "3.0.3";

const ERROR_RESPONSE_REF: &str = "#/components/schemas/ErrorResponse";
const INVALID_ID_REF: &str = "#/components/responses/InvalidId";
const INTERNAL_ERROR_REF: &str = "#/components/responses/InternalServerError";

fn s(value: &str) -> Value {
    Value::String(value.to_string())
}

fn map<I>(entries: I) -> Value
where
    I: IntoIterator<Item = (String, Value)>,
{
    let mut mapping = Mapping::new();
    for (key, value) in entries {
        mapping.insert(Value::String(key), value);
    }
    Value::Mapping(mapping)
}

macro_rules! yaml {
    ($($key:expr => $value:expr),* $(,)?) => {
        map(vec![$((String::from($key), $value)),*])
    };
}

fn reference(target: &str) -> Value {
    yaml! { "$ref" => s(target) }
}

fn json_schema_ref(target: &str) -> Value {
    yaml! { "application/json" => yaml! { "schema" => reference(target) } }
}

fn error_response(description: &str) -> Value {
    yaml! {
        "description" => s(description),
        "content" => yaml! {
            "application/json" => yaml! {
                "schema" => reference(ERROR_RESPONSE_REF),
                "example" => yaml! { "error" => s(description) },
            },
        },
    }
}

fn id_parameter() -> Value {
    Value::Sequence(vec![yaml! {
        "in" => s("path"),
        "name" => s("id"),
        "required" => Value::Bool(true),
        "schema" => yaml! { "type" => s("integer") },
    }])
}

fn request_body(input_ref: &str) -> Value {
    yaml! {
        "required" => Value::Bool(true),
        "content" => json_schema_ref(input_ref),
    }
}

fn ok(code: &str, description: &str) -> (String, Value) {
    (code.to_string(), yaml! { "description" => s(description) })
}

fn code_ref(code: &str, target: &str) -> (String, Value) {
    (code.to_string(), reference(target))
}

fn operation(
    summary: String,
    extra: Vec<(String, Value)>,
    responses: Vec<(String, Value)>,
) -> Value {
    let mut entries = vec![("summary".to_string(), Value::String(summary))];
    entries.extend(extra);
    entries.push(("responses".to_string(), map(responses)));
    map(entries)
}

fn column_property(column: &ColumnSchema) -> (String, Value) {
    let mapped = map_type(&column.raw_definition);
    let mut entries = vec![("type".to_string(), s(&mapped.kind.to_string()))];
    if let Some(format) = mapped.format {
        entries.push(("format".to_string(), s(format)));
    }
    (column.name.clone(), map(entries))
}

fn table_paths(table: &TableSchema) -> Vec<(String, Value)> {
    let names = table.entity_names();
    let input_ref = format!("#/components/schemas/{}Input", names.pascal);
    let not_found_ref = format!("#/components/responses/{}NotFound", names.pascal);
    let t = &table.name;

    let by_id_responses = |success: (String, Value)| {
        vec![
            success,
            code_ref("400", INVALID_ID_REF),
            code_ref("404", &not_found_ref),
            code_ref("500", INTERNAL_ERROR_REF),
        ]
    };

    let collection = yaml! {
        "get" => operation(
            format!("List {t}"),
            Vec::new(),
            vec![ok("200", "OK"), code_ref("500", INTERNAL_ERROR_REF)],
        ),
        "post" => operation(
            format!("Create {t}"),
            vec![("requestBody".to_string(), request_body(&input_ref))],
            vec![ok("201", "Created"), code_ref("500", INTERNAL_ERROR_REF)],
        ),
    };

    let item = yaml! {
        "get" => operation(
            format!("Get {t} by id"),
            vec![("parameters".to_string(), id_parameter())],
            by_id_responses(ok("200", "OK")),
        ),
        "put" => operation(
            format!("Update {t} by id"),
            vec![
                ("parameters".to_string(), id_parameter()),
                ("requestBody".to_string(), request_body(&input_ref)),
            ],
            by_id_responses(ok("200", "OK")),
        ),
        "delete" => operation(
            format!("Delete {t} by id"),
            vec![("parameters".to_string(), id_parameter())],
            by_id_responses(ok("200", "OK")),
        ),
    };

    vec![(format!("/{t}"), collection), (format!("/{t}/{{id}}"), item)]
}

fn build_paths(model: &SchemaModel) -> Value {
    let mut entries = vec![(
        "/health".to_string(),
        yaml! {
            "get" => operation(
                "Health check".to_string(),
                Vec::new(),
                vec![ok("200", "OK"), code_ref("500", INTERNAL_ERROR_REF)],
            ),
        },
    )];
    for table in &model.tables {
        entries.extend(table_paths(table));
    }
    map(entries)
}

fn build_responses(model: &SchemaModel) -> Value {
    let mut entries = vec![
        ("InvalidId".to_string(), error_response("Invalid id")),
        (
            "InternalServerError".to_string(),
            error_response("Internal Server Error"),
        ),
    ];
    for table in &model.tables {
        let pascal = table.entity_names().pascal;
        entries.push((
            format!("{pascal}NotFound"),
            error_response(&format!("{pascal} not found")),
        ));
    }
    map(entries)
}

fn build_schemas(model: &SchemaModel) -> Value {
    let mut entries = vec![(
        "ErrorResponse".to_string(),
        yaml! {
            "type" => s("object"),
            "properties" => yaml! { "error" => yaml! { "type" => s("string") } },
            "required" => Value::Sequence(vec![s("error")]),
        },
    )];

    for table in &model.tables {
        let pascal = table.entity_names().pascal;

        entries.push((
            pascal.clone(),
            yaml! {
                "type" => s("object"),
                "properties" => map(table.columns.iter().map(column_property)),
            },
        ));

        let mut input = vec![
            ("type".to_string(), s("object")),
            (
                "properties".to_string(),
                map(table.input_columns().map(column_property)),
            ),
        ];
        let required: Vec<Value> = table
            .input_columns()
            .filter(|c| c.is_required_input())
            .map(|c| s(&c.name))
            .collect();
        if !required.is_empty() {
            input.push(("required".to_string(), Value::Sequence(required)));
        }
        entries.push((format!("{pascal}Input"), map(input)));
    }

    map(entries)
}

/// Builds the OpenAPI document as a YAML value.
pub fn build_openapi(model: &SchemaModel, api: &ApiConfig) -> Value {
    yaml! {
        "openapi" => s(OPENAPI_VERSION),
        "info" => yaml! {
            "title" => s(&api.title),
            "version" => s(&api.version),
            "description" => s(&api.description),
        },
        "servers" => Value::Sequence(vec![yaml! { "url" => s(&api.base_url) }]),
        "paths" => build_paths(model),
        "components" => yaml! {
            "responses" => build_responses(model),
            "schemas" => build_schemas(model),
        },
    }
}

/// Renders `test/openapi.yaml`.
pub fn render_openapi(model: &SchemaModel, api: &ApiConfig) -> Result<String> {
    Ok(serde_yaml::to_string(&build_openapi(model, api))?)
}
