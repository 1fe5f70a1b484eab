//! Char filter implementations for text normalization.
//!
//! This module provides filters that pre-process the text string before it is
//! passed to the tokenizer. This allows for normalization operations like
//! Unicode normalization or regex replacement.
//!
//! # Available Filters
//!
//! - [`mapping::MappingCharFilter`] - Literal string replacement
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`unicode_normalize::UnicodeNormalizeCharFilter`] - Unicode normalization (NFC, NFD, etc.)
//!
//! # Examples
//!
//! ```
//! use lancea::analysis::char_filter::CharFilter;
//! use lancea::analysis::char_filter::unicode_normalize::{
//!     NormalizationForm, UnicodeNormalizeCharFilter,
//! };
//!
//! let filter = UnicodeNormalizeCharFilter::new(NormalizationForm::NFKC);
//! let (text, _) = filter.filter("ＡＢＣ").unwrap();
//! assert_eq!(text, "ABC");
//! ```

use crate::error::Result;

/// Represents a change in the text, mapping a range in the original text
/// to a range in the new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformation {
    pub original_start: usize,
    pub original_end: usize,
    pub new_start: usize,
    pub new_end: usize,
}

impl Transformation {
    pub fn new(
        original_start: usize,
        original_end: usize,
        new_start: usize,
        new_end: usize,
    ) -> Self {
        Self {
            original_start,
            original_end,
            new_start,
            new_end,
        }
    }
}

/// Trait for character filters that transform text before tokenization.
///
/// Implementations modify the text content and return the modified text
/// along with a list of transformations that occurred, so downstream
/// offsets can be mapped back to the original input.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    ///
    /// # Arguments
    ///
    /// * `input` - The input text to filter
    ///
    /// # Returns
    ///
    /// A tuple containing:
    /// - The filtered text.
    /// - A vector of `Transformation`s describing changes made.
    fn filter(&self, input: &str) -> Result<(String, Vec<Transformation>)>;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod mapping;
pub mod pattern_replace;
pub mod unicode_normalize;

// Re-export all char filters for convenient access
pub use mapping::MappingCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
pub use unicode_normalize::{NormalizationForm, UnicodeNormalizeCharFilter};
