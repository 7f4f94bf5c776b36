//! Output formatting for parsed models and parse reports.

use crudgen_core::{SchemaModel, map_type};

use crate::report::ParseReport;

/// Supported output formats.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Json,
    Yaml,
    Markdown,
    Table,
}

/// Formats a schema model in the requested output format.
pub fn format_model(model: &SchemaModel, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(model)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(model).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Markdown => Ok(model_to_markdown(model)),
        OutputFormat::Table => Ok(model_to_table(model)),
    }
}

/// Formats a parse report in the requested output format.
pub fn format_report(report: &ParseReport, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(report).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Markdown => Ok(report_to_markdown(report)),
        OutputFormat::Table => Ok(report_to_table(report)),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn model_to_markdown(model: &SchemaModel) -> String {
    let mut out = String::new();

    match model.database {
        Some(ref db) => out.push_str(&format!("# Database: {db}\n\n")),
        None => out.push_str("# Schema\n\n"),
    }

    for table in &model.tables {
        let names = table.entity_names();
        out.push_str(&format!("## {} (`{}`)\n\n", table.name, names.pascal));
        if table.columns.is_empty() {
            out.push_str("_No columns parsed._\n\n");
            continue;
        }
        out.push_str("| Column | Definition | Type | Nullable | Default | Auto |\n");
        out.push_str("|--------|------------|------|----------|---------|------|\n");
        for col in &table.columns {
            let mapped = map_type(&col.raw_definition);
            let ty = match mapped.format {
                Some(format) => format!("{} ({format})", mapped.kind),
                None => mapped.kind.to_string(),
            };
            out.push_str(&format!(
                "| `{}` | {} | {ty} | {} | {} | {} |\n",
                col.name,
                col.raw_definition,
                yes_no(col.is_nullable),
                yes_no(col.has_default),
                yes_no(col.is_auto_increment),
            ));
        }
        out.push('\n');
    }

    out
}

fn model_to_table(model: &SchemaModel) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Database: {}  Tables: {}  Columns: {}\n",
        model.database.as_deref().unwrap_or("-"),
        model.tables.len(),
        model.column_count()
    ));

    for table in &model.tables {
        out.push_str(&format!("\n{}:\n", table.name));
        let max_name = table
            .columns
            .iter()
            .map(|c| c.name.len())
            .max()
            .unwrap_or(4);

        for col in &table.columns {
            let mut flags = Vec::new();
            if col.is_auto_increment {
                flags.push("auto");
            }
            if !col.is_nullable {
                flags.push("not-null");
            }
            if col.has_default {
                flags.push("default");
            }
            out.push_str(&format!(
                "  {:<width$}  {:<8}  {}\n",
                col.name,
                map_type(&col.raw_definition).kind.to_string(),
                flags.join(","),
                width = max_name
            ));
        }
    }

    out
}

fn report_to_markdown(report: &ParseReport) -> String {
    let mut out = String::new();

    out.push_str("# Parse Report\n\n");
    if let Some(ref db) = report.database {
        out.push_str(&format!("- **Database:** {db}\n"));
    }
    out.push_str(&format!("- **Tables:** {}\n", report.table_count));
    out.push_str(&format!("- **Columns:** {}\n", report.column_count));
    out.push_str(&format!(
        "- **Constraint lines:** {}\n",
        report.constraint_lines
    ));

    if !report.duplicate_tables.is_empty() {
        out.push_str("\n## Duplicate tables\n\n");
        for name in &report.duplicate_tables {
            out.push_str(&format!("- `{name}`\n"));
        }
    }

    if !report.skipped_statements.is_empty() {
        out.push_str("\n## Skipped statements\n\n");
        for name in &report.skipped_statements {
            out.push_str(&format!("- `{name}`\n"));
        }
    }

    if !report.dropped_lines.is_empty() {
        out.push_str("\n## Dropped lines\n\n");
        for line in &report.dropped_lines {
            out.push_str(&format!(
                "- `{}` line {}: {}\n",
                line.table, line.line, line.text
            ));
        }
    }

    out
}

fn report_to_table(report: &ParseReport) -> String {
    let status = if report.is_clean() { "CLEAN" } else { "GAPS" };
    format!(
        "{:<20} {:<6} tables={} columns={} dropped={} duplicates={} skipped={}\n",
        report.database.as_deref().unwrap_or("-"),
        status,
        report.table_count,
        report.column_count,
        report.dropped_lines.len(),
        report.duplicate_tables.len(),
        report.skipped_statements.len(),
    )
}
