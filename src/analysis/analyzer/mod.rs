//! Analyzer implementations that combine tokenizers and filters.

pub mod analyzer;
pub mod keyword;
pub mod pipeline;
pub mod simple;
pub mod standard;

pub use analyzer::Analyzer;
pub use keyword::KeywordAnalyzer;
pub use pipeline::PipelineAnalyzer;
pub use simple::SimpleAnalyzer;
pub use standard::StandardAnalyzer;
