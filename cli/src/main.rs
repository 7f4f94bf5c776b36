use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use crudgen_generator::{GenerationSummary, GeneratorConfig};
use crudgen_parser::output::{OutputFormat, format_model, format_report};

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
    Markdown,
    Table,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(fmt: CliOutputFormat) -> Self {
        match fmt {
            CliOutputFormat::Json => Self::Json,
            CliOutputFormat::Yaml => Self::Yaml,
            CliOutputFormat::Markdown => Self::Markdown,
            CliOutputFormat::Table => Self::Table,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "crudgen", version)]
#[command(about = "Generate CRUD backend boilerplate from SQL CREATE TABLE scripts")]
struct Cli {
    /// Log debug details to stderr (RUST_LOG takes precedence).
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate per-table files, README, OpenAPI, Postman and .env.
    Full(FullArgs),
    /// Generate only the Postman collection.
    Postman(PostmanArgs),
    /// Copy the base boilerplate (server, app, middlewares, routes index).
    Base(BaseArgs),
    /// Parse SQL and print the schema model without writing files.
    Parse(ParseArgs),
}

/// Options shared by every command that writes into a project.
#[derive(Debug, Args)]
struct ProjectArgs {
    /// Project root; generated paths are relative to it.
    #[arg(long)]
    root: Option<PathBuf>,
    /// YAML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct FullArgs {
    /// SQL script (default: docs/scripts/BD/BD_ToDoList.sql under the root).
    sql: Option<PathBuf>,
    #[command(flatten)]
    project: ProjectArgs,
    /// Per-table templates directory.
    #[arg(long)]
    templates: Option<PathBuf>,
    /// Database name, used instead of the SQL or the interactive prompt.
    #[arg(long)]
    database: Option<String>,
}

#[derive(Debug, Args)]
struct PostmanArgs {
    /// SQL script (default: docs/scripts/BD/BD_ToDoList.sql under the root).
    sql: Option<PathBuf>,
    #[command(flatten)]
    project: ProjectArgs,
}

#[derive(Debug, Args)]
struct BaseArgs {
    #[command(flatten)]
    project: ProjectArgs,
    /// Base boilerplate templates directory.
    #[arg(long)]
    templates: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// SQL script; reads stdin when omitted.
    sql: Option<PathBuf>,
    /// Output both the model and the parse report.
    #[arg(long)]
    with_report: bool,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let result = match cli.command {
        Command::Full(args) => run_full(args),
        Command::Postman(args) => run_postman(args),
        Command::Base(args) => run_base(args),
        Command::Parse(args) => run_parse(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn setup_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .init();
}

fn load_config(project: &ProjectArgs) -> Result<GeneratorConfig, String> {
    let mut config = match &project.config {
        Some(path) => GeneratorConfig::load(path)
            .map_err(|e| format!("Failed to load config {}: {e}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if let Some(root) = &project.root {
        config.project_root = root.clone();
    }
    tracing::debug!(root = %config.project_root.display(), "Resolved configuration");
    Ok(config)
}

/// Anchors a command-line path to the current directory, leaving the
/// config-file defaults to resolve against the project root.
fn from_cwd(path: PathBuf) -> Result<PathBuf, String> {
    std::path::absolute(&path).map_err(|e| format!("Failed to resolve {}: {e}", path.display()))
}

fn prompt_database_name() -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "Database name: ")?;
    stdout.flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer)
}

fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

fn print_summary(root: &Path, summary: &GenerationSummary) {
    for path in &summary.written {
        println!("  wrote   {}", display_relative(root, path));
    }
    for path in &summary.skipped {
        println!("  exists  {}", display_relative(root, path));
    }
    for table in &summary.patched {
        println!("  routed  {table}");
    }
}

fn run_full(args: FullArgs) -> Result<(), String> {
    let mut config = load_config(&args.project)?;
    if let Some(templates) = args.templates {
        config.templates_dir = from_cwd(templates)?;
    }
    let sql = args.sql.map(from_cwd).transpose()?;

    let summary = crudgen_generator::generate_full(
        &config,
        sql.as_deref(),
        args.database.as_deref(),
        prompt_database_name,
    )
    .map_err(|e| e.to_string())?;

    print_summary(&config.project_root, &summary);
    println!(
        "Generated structure for tables: {}",
        summary.tables.join(", ")
    );
    Ok(())
}

fn run_postman(args: PostmanArgs) -> Result<(), String> {
    let config = load_config(&args.project)?;
    let sql = args.sql.map(from_cwd).transpose()?;
    let summary = crudgen_generator::generate_postman(&config, sql.as_deref())
        .map_err(|e| e.to_string())?;
    for path in &summary.written {
        println!("Postman collection generated: {}", path.display());
    }
    Ok(())
}

fn run_base(args: BaseArgs) -> Result<(), String> {
    let mut config = load_config(&args.project)?;
    if let Some(templates) = args.templates {
        config.base_templates_dir = from_cwd(templates)?;
    }

    let summary = crudgen_generator::generate_base(&config).map_err(|e| e.to_string())?;
    if summary.written.is_empty() {
        println!("Base boilerplate already exists. No new files were generated.");
        return Ok(());
    }
    let created: Vec<String> = summary
        .written
        .iter()
        .map(|p| display_relative(&config.project_root, p))
        .collect();
    println!("Base boilerplate generated: {}", created.join(", "));
    Ok(())
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let sql = match &args.sql {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?,
        None => {
            let mut sql = String::new();
            io::stdin()
                .read_to_string(&mut sql)
                .map_err(|err| format!("Failed to read stdin: {err}"))?;
            sql
        }
    };
    let format: OutputFormat = args.format.into();

    if !args.with_report {
        let model = crudgen_parser::parse_schema(&sql);
        println!("{}", format_model(&model, format)?);
        return Ok(());
    }

    let run = crudgen_parser::parse_schema_with_report(&sql);

    #[derive(serde::Serialize)]
    struct ParseOutput<'a> {
        model: &'a crudgen_core::SchemaModel,
        report: &'a crudgen_parser::report::ParseReport,
    }

    let output = ParseOutput {
        model: &run.model,
        report: &run.report,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| format!("Failed to serialize output: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&output)
                .map_err(|e| format!("Failed to serialize output: {e}"))?;
            println!("{yaml}");
        }
        _ => {
            print!("{}", format_model(&run.model, format)?);
            print!("{}", format_report(&run.report, format)?);
        }
    }
    Ok(())
}
