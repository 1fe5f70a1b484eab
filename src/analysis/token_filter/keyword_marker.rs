//! Keyword marker filter implementation.
//!
//! This module provides a filter that marks tokens from a configured word
//! set as keywords. Keyword-aware filters later in the chain leave marked
//! tokens untouched, and the keyword flag is reported as a token attribute.
//!
//! # Examples
//!
//! ```
//! use lancea::analysis::token_filter::TokenFilter;
//! use lancea::analysis::token_filter::keyword_marker::KeywordMarkerFilter;
//! use lancea::analysis::token::Token;
//!
//! let filter = KeywordMarkerFilter::from_words(vec!["rust"]);
//! let tokens = vec![Token::new("rust", 0), Token::new("lang", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert!(result[0].is_keyword());
//! assert!(!result[1].is_keyword());
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// A filter that marks listed terms as keywords.
///
/// Matching is exact (case-sensitive); place this filter after `lowercase`
/// when the word list is lowercase.
#[derive(Clone, Debug)]
pub struct KeywordMarkerFilter {
    keywords: Arc<HashSet<String>>,
}

impl KeywordMarkerFilter {
    /// Create a new keyword marker filter with the given word set.
    pub fn with_keywords(keywords: HashSet<String>) -> Self {
        KeywordMarkerFilter {
            keywords: Arc::new(keywords),
        }
    }

    /// Create a new keyword marker filter from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords = words.into_iter().map(|s| s.into()).collect();
        Self::with_keywords(keywords)
    }

    /// Check if a word is in the keyword set.
    pub fn is_marked(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }
}

impl TokenFilter for KeywordMarkerFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .map(|token| {
                if !token.is_stopped() && self.is_marked(&token.text) {
                    token.mark_keyword()
                } else {
                    token
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "keyword_marker"
    }
}
