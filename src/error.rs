//! Error types for the Lancea library.
//!
//! All failures are represented by the [`LanceaError`] enum. The variants map
//! onto the phases of an analyze call: validation before transmission,
//! decoding on the receiving side, stage resolution, and pipeline execution.
//!
//! # Examples
//!
//! ```
//! use lancea::error::{LanceaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(LanceaError::validation("text is missing"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::fmt;
use std::io;

use anyhow;
use thiserror::Error;

/// The kind of pipeline stage a name resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    /// Pre-tokenization text transformer.
    CharFilter,
    /// Text-to-token splitter.
    Tokenizer,
    /// Post-tokenization token transformer.
    TokenFilter,
    /// Named, pre-configured pipeline.
    Analyzer,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StageKind::CharFilter => "char filter",
            StageKind::Tokenizer => "tokenizer",
            StageKind::TokenFilter => "token filter",
            StageKind::Analyzer => "analyzer",
        };
        f.write_str(label)
    }
}

/// The main error type for Lancea operations.
///
/// This enum represents all possible errors that can occur in the Lancea
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum LanceaError {
    /// I/O errors (schema files, output streams, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Request validation failures; an invalid request must not be sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A named stage is not present in the registry namespace it was
    /// looked up in.
    #[error("Unknown {kind} '{name}'")]
    UnknownStage {
        /// Registry namespace that was consulted.
        kind: StageKind,
        /// The name that failed to resolve.
        name: String,
    },

    /// A stage failed while processing text, tagged with the stage name and
    /// its 0-based index in the declared sequence (char filters first, then
    /// the tokenizer, then token filters).
    #[error("Stage '{stage}' at position {position} failed: {source}")]
    PipelineExecution {
        /// Name of the failing stage.
        stage: String,
        /// Index of the stage in the declared sequence.
        position: usize,
        /// The underlying failure.
        source: Box<LanceaError>,
    },

    /// An index or field could not be located during resolution.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed wire bytes (truncation, bad flag bytes, length overflow).
    #[error("Decode error: {0}")]
    Decode(String),

    /// Analysis-related errors (stage configuration, tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Schema-related errors
    #[error("Schema error: {0}")]
    Schema(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LanceaError.
pub type Result<T> = std::result::Result<T, LanceaError>;

impl LanceaError {
    /// Create a new validation error.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        LanceaError::Validation(msg.into())
    }

    /// Create a new unknown-stage error.
    pub fn unknown_stage<S: Into<String>>(kind: StageKind, name: S) -> Self {
        LanceaError::UnknownStage {
            kind,
            name: name.into(),
        }
    }

    /// Create a new pipeline-execution error wrapping the stage failure.
    pub fn stage_failed<S: Into<String>>(stage: S, position: usize, source: LanceaError) -> Self {
        LanceaError::PipelineExecution {
            stage: stage.into(),
            position,
            source: Box::new(source),
        }
    }

    /// Create a new not-found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        LanceaError::NotFound(msg.into())
    }

    /// Create a new decode error.
    pub fn decode<S: Into<String>>(msg: S) -> Self {
        LanceaError::Decode(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LanceaError::Analysis(msg.into())
    }

    /// Create a new schema error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        LanceaError::Schema(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LanceaError::validation("text is missing");
        assert_eq!(error.to_string(), "Validation error: text is missing");

        let error = LanceaError::unknown_stage(StageKind::Tokenizer, "nope");
        assert_eq!(error.to_string(), "Unknown tokenizer 'nope'");

        let error = LanceaError::decode("unexpected end of input");
        assert_eq!(error.to_string(), "Decode error: unexpected end of input");
    }

    #[test]
    fn test_stage_failed_wraps_source() {
        let inner = LanceaError::analysis("bad pattern");
        let error = LanceaError::stage_failed("strip", 2, inner);

        assert_eq!(
            error.to_string(),
            "Stage 'strip' at position 2 failed: Analysis error: bad pattern"
        );
        match error {
            LanceaError::PipelineExecution {
                stage, position, ..
            } => {
                assert_eq!(stage, "strip");
                assert_eq!(position, 2);
            }
            _ => panic!("Expected PipelineExecution variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let lancea_error = LanceaError::from(io_error);

        match lancea_error {
            LanceaError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_stage_kind_display() {
        assert_eq!(StageKind::CharFilter.to_string(), "char filter");
        assert_eq!(StageKind::Tokenizer.to_string(), "tokenizer");
        assert_eq!(StageKind::TokenFilter.to_string(), "token filter");
        assert_eq!(StageKind::Analyzer.to_string(), "analyzer");
    }
}
