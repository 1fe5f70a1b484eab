//! Standard tokenizer implementation.
//!
//! This is the default tokenizer. It extracts word-character runs using a
//! regular expression and classifies each token by character content.
//!
//! # Examples
//!
//! ```
//! use lancea::analysis::tokenizer::Tokenizer;
//! use lancea::analysis::tokenizer::standard::StandardTokenizer;
//!
//! let tokenizer = StandardTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("hello world").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::error::{LanceaError, Result};

/// A regex-based tokenizer that extracts word tokens.
///
/// The default pattern `\w+` matches sequences of word characters. A custom
/// pattern can be supplied for domain-specific token shapes.
#[derive(Clone, Debug)]
pub struct StandardTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl StandardTokenizer {
    /// Create a new standard tokenizer with the default pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a new standard tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| LanceaError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(StandardTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for StandardTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                let token_type = TokenType::detect(mat.as_str());
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
                    .with_token_type(token_type)
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}
