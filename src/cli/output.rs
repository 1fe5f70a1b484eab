//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LanceaArgs, OutputFormat};
use crate::error::Result;
use crate::protocol::response::AnalyzedToken;

/// Result structure for the analyze command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeCommandResult {
    pub index: String,
    pub token_count: usize,
    pub duration_ms: u64,
    pub tokens: Vec<AnalyzedToken>,
}

/// Result structure for the stages command.
#[derive(Debug, Serialize, Deserialize)]
pub struct StagesResult {
    pub char_filters: Vec<String>,
    pub tokenizers: Vec<String>,
    pub token_filters: Vec<String>,
    pub analyzers: Vec<String>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &LanceaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &LanceaArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("AnalyzeCommandResult") => {
            output_analyze_result_human(&value, args)
        }
        _ if std::any::type_name::<T>().contains("StagesResult") => {
            output_stages_human(&value, args)
        }
        _ => output_generic_human(&value, args),
    }
}

/// Output analyzed tokens in human format.
fn output_analyze_result_human(value: &serde_json::Value, _args: &LanceaArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(tokens) = obj.get("tokens").and_then(|t| t.as_array()) {
            println!("Tokens:");
            println!("═══════");

            for token in tokens {
                println!();
                let term = token.get("term").and_then(|t| t.as_str()).unwrap_or("");
                let position = token.get("position").and_then(|p| p.as_u64()).unwrap_or(0);
                let start = token
                    .get("start_offset")
                    .and_then(|o| o.as_u64())
                    .unwrap_or(0);
                let end = token
                    .get("end_offset")
                    .and_then(|o| o.as_u64())
                    .unwrap_or(0);
                println!("[{position}] {term} ({start}..{end})");

                if let Some(attributes) = token.get("attributes").and_then(|a| a.as_object()) {
                    for (name, attr_value) in attributes {
                        let formatted = format_value(attr_value);
                        println!("    {name}: {formatted}");
                    }
                }
            }

            println!();
        }

        if let Some(count) = obj.get("token_count").and_then(|c| c.as_u64()) {
            println!("Token count: {count}");
        }

        if let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64()) {
            println!("Analysis time: {duration}ms");
        }
    }
    Ok(())
}

/// Output registered stages in human format.
fn output_stages_human(value: &serde_json::Value, _args: &LanceaArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        println!("Registered Stages:");
        println!("═════════════════");

        let sections = [
            ("char_filters", "Char filters"),
            ("tokenizers", "Tokenizers"),
            ("token_filters", "Token filters"),
            ("analyzers", "Analyzers"),
        ];

        for (key, title) in sections {
            if let Some(names) = obj.get(key).and_then(|n| n.as_array()) {
                println!();
                println!("{title}:");
                for name in names {
                    if let Some(name) = name.as_str() {
                        println!("  {name}");
                    }
                }
            }
        }
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value, _args: &LanceaArgs) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LanceaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
