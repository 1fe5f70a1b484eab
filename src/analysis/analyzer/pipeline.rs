//! Pipeline analyzer that combines char filters, a tokenizer, and token filters.
//!
//! This is the main building block for custom analyzers. It allows you to
//! combine a tokenizer with any number of char filters and token filters to
//! create a custom analysis pipeline.
//!
//! # Architecture
//!
//! The PipelineAnalyzer applies processing in this order:
//! 1. Char Filters: Normalize raw text, in the order they were added
//! 2. Tokenizer: Splits text into tokens
//! 3. Token Filters: Applied sequentially in the order they were added
//!
//! Stages occupy a single 0-based sequence in that order; when a stage fails,
//! the error reports the stage's name and its index in that sequence.
//!
//! # Examples
//!
//! ```
//! use lancea::analysis::analyzer::analyzer::Analyzer;
//! use lancea::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use lancea::analysis::tokenizer::standard::StandardTokenizer;
//! use lancea::analysis::token_filter::lowercase::LowercaseFilter;
//! use lancea::analysis::token_filter::stop::StopFilter;
//! use std::sync::Arc;
//!
//! // Create a custom analyzer with tokenizer + filters
//! let tokenizer = Arc::new(StandardTokenizer::new().unwrap());
//! let analyzer = PipelineAnalyzer::new(tokenizer)
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["the", "and"])))
//!     .with_name("my_custom_analyzer".to_string());
//!
//! let tokens: Vec<_> = analyzer.analyze("Hello THE world AND test").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! assert_eq!(tokens[2].text, "test");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::char_filter::{CharFilter, Transformation};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::TokenFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{LanceaError, Result};

/// A configurable analyzer that combines a tokenizer with a chain of filters.
///
/// This is the main analyzer type that allows building analysis pipelines
/// by combining different tokenizers and filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn TokenFilter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a token filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the char filters used by this analyzer.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Get the token filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn TokenFilter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        // Apply char filters; each failure is tagged with the stage's index
        // in the declared sequence (char filters first).
        let mut filtered_text = text.to_string();
        let mut filter_transformations = Vec::with_capacity(self.char_filters.len());

        for (index, char_filter) in self.char_filters.iter().enumerate() {
            let (new_text, transformations) = char_filter
                .filter(&filtered_text)
                .map_err(|e| LanceaError::stage_failed(char_filter.name(), index, e))?;
            filtered_text = new_text;
            filter_transformations.push(transformations);
        }

        // The tokenizer follows the char filters in the sequence.
        let tokenizer_index = self.char_filters.len();
        let mut tokens = self
            .tokenizer
            .tokenize(&filtered_text)
            .map_err(|e| LanceaError::stage_failed(self.tokenizer.name(), tokenizer_index, e))?;

        // Apply token filters in order, continuing the sequence numbering.
        for (offset, filter) in self.filters.iter().enumerate() {
            tokens = filter.filter(tokens).map_err(|e| {
                LanceaError::stage_failed(filter.name(), tokenizer_index + 1 + offset, e)
            })?;
        }

        // If we have char filters, token offsets point into the filtered
        // text and must be mapped back to the original input.
        if !self.char_filters.is_empty() {
            let collected: Vec<_> = tokens
                .map(|mut token| {
                    // Walk the char filters in reverse: Final -> Filter N -> ... -> Original
                    for transformations in filter_transformations.iter().rev() {
                        token.start_offset =
                            Self::correct_offset(token.start_offset, transformations);
                        token.end_offset = Self::correct_offset(token.end_offset, transformations);
                    }
                    token
                })
                .collect();
            return Ok(Box::new(collected.into_iter()));
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        // The configured name is not 'static; the generic name is reported
        // through the trait and the configured one through Debug.
        "pipeline"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl PipelineAnalyzer {
    /// Maps an offset in the filtered text back to the original text using
    /// the transformations one char filter reported.
    fn correct_offset(offset: usize, transformations: &[Transformation]) -> usize {
        let mut corrected = offset;
        // Transformations are ordered by position.
        for t in transformations {
            if offset >= t.new_end {
                // Point lies after this transformation: shift by the length
                // difference it introduced.
                let original_len = t.original_end - t.original_start;
                let new_len = t.new_end - t.new_start;
                corrected =
                    (corrected as isize - new_len as isize + original_len as isize) as usize;
            } else if offset >= t.new_start {
                // Point lies inside the replaced span (new_start <= offset < new_end).
                let offset_in_new = offset - t.new_start;
                let new_len = t.new_end - t.new_start;
                let original_len = t.original_end - t.original_start;

                if new_len == 0 {
                    return t.original_start;
                }

                // Interpolate the relative position within the original span.
                let offset_in_original = (offset_in_new * original_len) / new_len;
                return t.original_start + offset_in_original;
            }
            // Offsets before t.new_start are unaffected by this transformation.
        }
        corrected
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
