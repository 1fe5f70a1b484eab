//! Registry of named analysis stages.
//!
//! Analyze requests refer to char filters, tokenizers, token filters, and
//! analyzers by name. The registry holds those names in four independent
//! namespaces, so a tokenizer and a token filter can share a name (e.g.
//! `keyword`) without colliding.
//!
//! # Examples
//!
//! ```
//! use lancea::analysis::registry::AnalysisRegistry;
//!
//! let registry = AnalysisRegistry::with_defaults().unwrap();
//!
//! let tokenizer = registry.tokenizer("whitespace").unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//!
//! assert!(registry.analyzer("no_such_analyzer").is_err());
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::analysis::analyzer::{Analyzer, KeywordAnalyzer, SimpleAnalyzer, StandardAnalyzer};
use crate::analysis::char_filter::{
    CharFilter, MappingCharFilter, NormalizationForm, PatternReplaceCharFilter,
    UnicodeNormalizeCharFilter,
};
use crate::analysis::token_filter::{
    KeywordMarkerFilter, LimitFilter, LowercaseFilter, RemoveEmptyFilter, StopFilter, StripFilter,
    TokenFilter,
};
use crate::analysis::tokenizer::{
    KeywordTokenizer, NgramTokenizer, StandardTokenizer, Tokenizer, UnicodeWordTokenizer,
    WhitespaceTokenizer,
};
use crate::error::{LanceaError, Result, StageKind};

/// Default cap used by the registered `limit` token filter.
const DEFAULT_TOKEN_LIMIT: usize = 100;

/// Named registry for all four kinds of analysis stages.
///
/// Stages are stored behind `Arc` and shared across concurrent lookups.
/// Registering a name that already exists replaces the previous stage.
#[derive(Default)]
pub struct AnalysisRegistry {
    char_filters: RwLock<AHashMap<String, Arc<dyn CharFilter>>>,
    tokenizers: RwLock<AHashMap<String, Arc<dyn Tokenizer>>>,
    token_filters: RwLock<AHashMap<String, Arc<dyn TokenFilter>>>,
    analyzers: RwLock<AHashMap<String, Arc<dyn Analyzer>>>,
}

impl AnalysisRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the built-in stages.
    ///
    /// Char filters: `mapping` (no rules), `pattern_replace` (collapses
    /// whitespace runs), `unicode_normalize` (NFKC).
    ///
    /// Tokenizers: `standard`, `whitespace`, `unicode_word`, `ngram`
    /// (uni- and bigrams), `keyword`.
    ///
    /// Token filters: `lowercase`, `stop` (English stop words), `strip`,
    /// `limit`, `keyword_marker` (no keywords), `remove_empty`.
    ///
    /// Analyzers: `standard`, `simple`, `keyword`.
    pub fn with_defaults() -> Result<Self> {
        let registry = Self::new();

        registry.register_char_filter(
            "mapping",
            Arc::new(MappingCharFilter::new(HashMap::new())?),
        );
        registry.register_char_filter(
            "pattern_replace",
            Arc::new(PatternReplaceCharFilter::new(r"\s+", " ")?),
        );
        registry.register_char_filter(
            "unicode_normalize",
            Arc::new(UnicodeNormalizeCharFilter::new(NormalizationForm::NFKC)),
        );

        registry.register_tokenizer("standard", Arc::new(StandardTokenizer::new()?));
        registry.register_tokenizer("whitespace", Arc::new(WhitespaceTokenizer::new()));
        registry.register_tokenizer("unicode_word", Arc::new(UnicodeWordTokenizer::new()));
        registry.register_tokenizer("ngram", Arc::new(NgramTokenizer::new(1, 2)?));
        registry.register_tokenizer("keyword", Arc::new(KeywordTokenizer::new()));

        registry.register_token_filter("lowercase", Arc::new(LowercaseFilter::new()));
        registry.register_token_filter("stop", Arc::new(StopFilter::new()));
        registry.register_token_filter("strip", Arc::new(StripFilter::new()));
        registry.register_token_filter("limit", Arc::new(LimitFilter::new(DEFAULT_TOKEN_LIMIT)));
        registry.register_token_filter(
            "keyword_marker",
            Arc::new(KeywordMarkerFilter::from_words(Vec::<String>::new())),
        );
        registry.register_token_filter("remove_empty", Arc::new(RemoveEmptyFilter::new()));

        registry.register_analyzer("standard", Arc::new(StandardAnalyzer::new()?));
        registry.register_analyzer(
            "simple",
            Arc::new(SimpleAnalyzer::new(Arc::new(StandardTokenizer::new()?))),
        );
        registry.register_analyzer("keyword", Arc::new(KeywordAnalyzer::new()));

        Ok(registry)
    }

    /// Register a char filter under the given name.
    pub fn register_char_filter<S: Into<String>>(&self, name: S, filter: Arc<dyn CharFilter>) {
        self.char_filters.write().insert(name.into(), filter);
    }

    /// Register a tokenizer under the given name.
    pub fn register_tokenizer<S: Into<String>>(&self, name: S, tokenizer: Arc<dyn Tokenizer>) {
        self.tokenizers.write().insert(name.into(), tokenizer);
    }

    /// Register a token filter under the given name.
    pub fn register_token_filter<S: Into<String>>(&self, name: S, filter: Arc<dyn TokenFilter>) {
        self.token_filters.write().insert(name.into(), filter);
    }

    /// Register an analyzer under the given name.
    pub fn register_analyzer<S: Into<String>>(&self, name: S, analyzer: Arc<dyn Analyzer>) {
        self.analyzers.write().insert(name.into(), analyzer);
    }

    /// Look up a char filter by name.
    pub fn char_filter(&self, name: &str) -> Result<Arc<dyn CharFilter>> {
        self.char_filters
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| LanceaError::unknown_stage(StageKind::CharFilter, name))
    }

    /// Look up a tokenizer by name.
    pub fn tokenizer(&self, name: &str) -> Result<Arc<dyn Tokenizer>> {
        self.tokenizers
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| LanceaError::unknown_stage(StageKind::Tokenizer, name))
    }

    /// Look up a token filter by name.
    pub fn token_filter(&self, name: &str) -> Result<Arc<dyn TokenFilter>> {
        self.token_filters
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| LanceaError::unknown_stage(StageKind::TokenFilter, name))
    }

    /// Look up an analyzer by name.
    pub fn analyzer(&self, name: &str) -> Result<Arc<dyn Analyzer>> {
        self.analyzers
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| LanceaError::unknown_stage(StageKind::Analyzer, name))
    }

    /// Names of all registered char filters, sorted.
    pub fn char_filter_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.char_filters.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Names of all registered tokenizers, sorted.
    pub fn tokenizer_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tokenizers.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Names of all registered token filters, sorted.
    pub fn token_filter_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.token_filters.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Names of all registered analyzers, sorted.
    pub fn analyzer_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.analyzers.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl std::fmt::Debug for AnalysisRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisRegistry")
            .field("char_filters", &self.char_filter_names())
            .field("tokenizers", &self.tokenizer_names())
            .field("token_filters", &self.token_filter_names())
            .field("analyzers", &self.analyzer_names())
            .finish()
    }
}
