//! schema2cs CLI
//!
//! Command-line interface for generating C# class declarations from JSON
//! Schema documents.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use schema2cs::{
    construct_declaration, emit, load_schema_auto, parse_schema, BuildOptions, RenderOptions,
    DEFAULT_MAX_DEPTH,
};

#[derive(Parser)]
#[command(name = "schema2cs")]
#[command(about = "Generate C# class declarations from JSON Schema documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate C# source from a schema
    Generate {
        /// Schema source: file path or URL (http:// or https://)
        schema: String,

        /// Namespace to wrap the generated class in
        #[arg(long)]
        namespace: Option<String>,

        /// Attach JsonProperty serialization annotations
        #[arg(long)]
        serializable: bool,

        /// Class name for the root (overrides the schema title)
        #[arg(long)]
        root_name: Option<String>,

        /// Maximum allowed schema nesting depth
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        /// Output format: source (default) or json (the declaration tree)
        #[arg(long, default_value = "source")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Dump the symbol tree of a schema as JSON
    Symbols {
        /// Schema source: file path or URL (http:// or https://)
        schema: String,

        /// Class name for the root (overrides the schema title)
        #[arg(long)]
        root_name: Option<String>,

        /// Maximum allowed schema nesting depth
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            schema,
            namespace,
            serializable,
            root_name,
            max_depth,
            format,
            output,
        } => run_generate(GenerateArgs {
            schema,
            namespace,
            serializable,
            root_name,
            max_depth,
            format,
            output,
        }),

        Commands::Symbols {
            schema,
            root_name,
            max_depth,
        } => run_symbols(&schema, root_name, max_depth),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

struct GenerateArgs {
    schema: String,
    namespace: Option<String>,
    serializable: bool,
    root_name: Option<String>,
    max_depth: usize,
    format: String,
    output: Option<PathBuf>,
}

fn run_generate(args: GenerateArgs) -> Result<(), u8> {
    let schema = load_schema_auto(&args.schema).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let mut build = BuildOptions::new().max_depth(args.max_depth);
    if let Some(name) = args.root_name {
        build = build.root_name(name);
    }

    let mut render = RenderOptions::new().json_serializable(args.serializable);
    if let Some(namespace) = args.namespace {
        render = render.namespace(namespace);
    }

    let symbol = parse_schema(&schema, &build).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let unit = construct_declaration(&symbol, &render).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let mut rendered = if args.format == "json" {
        serde_json::to_string_pretty(&unit).map_err(|e| {
            eprintln!("Error serializing output: {}", e);
            2u8
        })?
    } else {
        emit(&unit)
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    match args.output {
        Some(path) => {
            std::fs::write(&path, &rendered).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            print!("{}", rendered);
        }
    }

    Ok(())
}

fn run_symbols(
    schema_source: &str,
    root_name: Option<String>,
    max_depth: usize,
) -> Result<(), u8> {
    let schema = load_schema_auto(schema_source).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let mut build = BuildOptions::new().max_depth(max_depth);
    if let Some(name) = root_name {
        build = build.root_name(name);
    }

    let symbol = parse_schema(&schema, &build).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let rendered = serde_json::to_string_pretty(&symbol.to_value()).map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })?;
    println!("{}", rendered);

    Ok(())
}
