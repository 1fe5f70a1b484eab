//! Core analyzer trait definition.
//!
//! This module defines the [`Analyzer`] trait, which is the main interface for
//! text analysis in Lancea. Analyzers combine char filters, a tokenizer, and
//! token filters to transform raw text into diagnostic token streams.
//!
//! # Role in Analysis Pipeline
//!
//! Analyzers serve as the complete text processing pipeline:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Response Encoder
//!             ↓
//!        Char Filter(s)
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1
//!             ↓
//!         Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`StandardAnalyzer`](super::standard::StandardAnalyzer) - Good defaults for most use cases
//! - [`SimpleAnalyzer`](super::simple::SimpleAnalyzer) - Tokenization only, no filtering
//! - [`KeywordAnalyzer`](super::keyword::KeywordAnalyzer) - Treats entire input as one token
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom stage chains
//!
//! # Examples
//!
//! Using a built-in analyzer:
//!
//! ```
//! use lancea::analysis::analyzer::analyzer::Analyzer;
//! use lancea::analysis::analyzer::standard::StandardAnalyzer;
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Hello World").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use lancea::analysis::analyzer::analyzer::Analyzer;
//! use lancea::analysis::token::TokenStream;
//! use lancea::error::Result;
//!
//! struct MyAnalyzer;
//!
//! impl Analyzer for MyAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         // Custom analysis logic here
//!         Ok(Box::new(std::iter::empty()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "my_analyzer"
//!     }
//!
//!     fn as_any(&self) -> &dyn std::any::Any {
//!         self
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// This is the core trait that all analyzers must implement. Analyzers are
/// responsible for the complete text processing pipeline, from raw text to
/// diagnostic tokens.
///
/// # Thread Safety
///
/// The trait requires `Send + Sync` so shared analyzer instances can serve
/// concurrent analyze requests. Implementations must not keep per-call
/// mutable state.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// This is the main method that performs the complete analysis pipeline,
    /// including char filtering, tokenization, and all configured token
    /// filters.
    ///
    /// # Arguments
    ///
    /// * `text` - The raw input text to analyze
    ///
    /// # Returns
    ///
    /// A `TokenStream` (boxed iterator of tokens), or an error if a stage
    /// fails during analysis.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Provide access to the concrete type for downcasting.
    ///
    /// This method enables downcasting from `&dyn Analyzer` to a concrete
    /// analyzer type when type-specific methods are needed.
    fn as_any(&self) -> &dyn std::any::Any;
}
