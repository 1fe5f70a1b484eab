//! Text analysis module for Lancea.
//!
//! This module provides the core text analysis functionality: char filters,
//! tokenizers, token filters, the analyzers that chain them, and the registry
//! that resolves stage names from analyze requests.

pub mod analyzer;
pub mod attribute;
pub mod char_filter;
pub mod registry;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, KeywordAnalyzer, PipelineAnalyzer, SimpleAnalyzer, StandardAnalyzer};
pub use attribute::AttributeSelection;
pub use char_filter::{CharFilter, Transformation};
pub use registry::AnalysisRegistry;
pub use token::{Token, TokenMetadata, TokenStream, TokenType};
pub use token_filter::TokenFilter;
pub use tokenizer::Tokenizer;
