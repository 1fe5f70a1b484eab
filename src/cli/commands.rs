//! Command implementations for Lancea CLI.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use crate::cli::args::{AnalyzeArgs, Command, LanceaArgs};
use crate::cli::output::{AnalyzeCommandResult, StagesResult, output_result};
use crate::error::Result;
use crate::protocol::request::AnalyzeRequest;
use crate::schema::Schema;
use crate::service::AnalyzeService;

/// Execute a CLI command.
pub fn execute_command(args: LanceaArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze_text(analyze_args.clone(), &args),
        Command::Stages => list_stages(&args),
    }
}

/// Analyze text through the requested pipeline.
fn analyze_text(args: AnalyzeArgs, cli_args: &LanceaArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Analyzing against index: {}", args.index);
        if let Some(analyzer) = &args.analyzer {
            println!("Analyzer: {analyzer}");
        }
        if let Some(field) = &args.field {
            println!("Field: {field}");
        }
    }

    let service = AnalyzeService::with_default_registry()?;

    // Register a schema for the target index if one was provided
    if let Some(schema_file) = &args.schema_file {
        if cli_args.verbosity() > 1 {
            println!("Loading schema from: {}", schema_file.display());
        }
        let schema = load_schema_from_file(schema_file)?;
        service.register_index(&args.index, schema);
    }

    let request = build_request(&args)?;

    let start_time = Instant::now();
    let response = service.analyze(&request)?;
    let duration = start_time.elapsed();

    output_result(
        "Analysis completed",
        &AnalyzeCommandResult {
            index: args.index.clone(),
            token_count: response.tokens.len(),
            duration_ms: duration.as_millis() as u64,
            tokens: response.tokens,
        },
        cli_args,
    )?;

    Ok(())
}

/// List registered analysis stages.
fn list_stages(cli_args: &LanceaArgs) -> Result<()> {
    let service = AnalyzeService::with_default_registry()?;
    let registry = service.registry();

    output_result(
        "Registered stages",
        &StagesResult {
            char_filters: registry.char_filter_names(),
            tokenizers: registry.tokenizer_names(),
            token_filters: registry.token_filter_names(),
            analyzers: registry.analyzer_names(),
        },
        cli_args,
    )?;

    Ok(())
}

/// Build an analyze request from command line arguments.
fn build_request(args: &AnalyzeArgs) -> Result<AnalyzeRequest> {
    let mut builder = AnalyzeRequest::builder(&args.index)
        .text(args.text.clone())
        .token_filters(args.token_filters.clone())
        .char_filters(args.char_filters.clone())
        .attributes(args.attributes.clone())
        .short_attribute_name(args.short_attribute_name);

    if let Some(analyzer) = &args.analyzer {
        builder = builder.analyzer(analyzer);
    }
    if let Some(tokenizer) = &args.tokenizer {
        builder = builder.tokenizer(tokenizer);
    }
    if let Some(field) = &args.field {
        builder = builder.field(field);
    }

    builder.build()
}

/// Load a schema definition from a JSON file.
fn load_schema_from_file(path: &Path) -> Result<Schema> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let schema: Schema = serde_json::from_reader(reader)?;
    Ok(schema)
}
