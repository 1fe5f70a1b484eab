//! Command line argument parsing for the Lancea CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Lancea - text analysis pipeline troubleshooting
#[derive(Parser, Debug, Clone)]
#[command(name = "lancea")]
#[command(about = "Run text through configurable analysis pipelines")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Lancea Contributors")]
#[command(long_about = None)]
pub struct LanceaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LanceaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze text through a pipeline
    Analyze(AnalyzeArgs),

    /// List the registered analysis stages
    Stages,
}

/// Arguments for analyzing text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze (repeatable; positions continue across values)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Index the request addresses
    #[arg(short, long, default_value = "default")]
    pub index: String,

    /// Named analyzer to use (overrides explicit stages)
    #[arg(short, long)]
    pub analyzer: Option<String>,

    /// Named tokenizer to use
    #[arg(short, long)]
    pub tokenizer: Option<String>,

    /// Token filter to apply, in order (repeatable)
    #[arg(long = "token-filter", value_name = "NAME")]
    pub token_filters: Vec<String>,

    /// Char filter to apply before tokenization, in order (repeatable)
    #[arg(long = "char-filter", value_name = "NAME")]
    pub char_filters: Vec<String>,

    /// Schema field whose configured analyzer is used
    #[arg(long)]
    pub field: Option<String>,

    /// Schema definition file path (JSON), registered under --index
    #[arg(short, long, value_name = "SCHEMA_FILE")]
    pub schema_file: Option<PathBuf>,

    /// Attribute to include in the output (repeatable; default all)
    #[arg(long = "attribute", value_name = "NAME")]
    pub attributes: Vec<String>,

    /// Report abbreviated attribute names
    #[arg(long)]
    pub short_attribute_name: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_basic_analyze_command() {
        let args = LanceaArgs::try_parse_from([
            "lancea",
            "analyze",
            "hello world",
            "--tokenizer",
            "whitespace",
            "--token-filter",
            "lowercase",
            "--token-filter",
            "stop",
        ])
        .unwrap();

        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(analyze_args.text, vec!["hello world"]);
            assert_eq!(analyze_args.index, "default");
            assert_eq!(analyze_args.tokenizer.as_deref(), Some("whitespace"));
            assert_eq!(analyze_args.token_filters, vec!["lowercase", "stop"]);
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_analyze_with_field_and_schema() {
        let args = LanceaArgs::try_parse_from([
            "lancea",
            "analyze",
            "some text",
            "--index",
            "products",
            "--field",
            "title",
            "--schema-file",
            "schema.json",
        ])
        .unwrap();

        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(analyze_args.index, "products");
            assert_eq!(analyze_args.field.as_deref(), Some("title"));
            assert_eq!(
                analyze_args.schema_file,
                Some(PathBuf::from("schema.json"))
            );
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_analyze_attribute_selection() {
        let args = LanceaArgs::try_parse_from([
            "lancea",
            "analyze",
            "text",
            "--attribute",
            "keyword",
            "--attribute",
            "boost",
            "--short-attribute-name",
        ])
        .unwrap();

        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(analyze_args.attributes, vec!["keyword", "boost"]);
            assert!(analyze_args.short_attribute_name);
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_analyze_accepts_multiple_texts() {
        let args =
            LanceaArgs::try_parse_from(["lancea", "analyze", "first", "second"]).unwrap();

        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(analyze_args.text, vec!["first", "second"]);
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_stages_command() {
        let args = LanceaArgs::try_parse_from(["lancea", "stages"]).unwrap();
        assert!(matches!(args.command, Command::Stages));
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = LanceaArgs::try_parse_from(["lancea", "stages"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = LanceaArgs::try_parse_from(["lancea", "-vv", "stages"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = LanceaArgs::try_parse_from(["lancea", "--quiet", "stages"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = LanceaArgs::try_parse_from(["lancea", "--format", "json", "stages"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
