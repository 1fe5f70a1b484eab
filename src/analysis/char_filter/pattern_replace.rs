//! Pattern replace char filter implementation.

use regex::Regex;

use super::{CharFilter, Transformation};
use crate::error::{LanceaError, Result};

/// A char filter that replaces text matching a regex pattern.
///
/// The replacement string is inserted literally for every match.
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| LanceaError::analysis(format!("Invalid regex pattern: {e}")))?,
            replacement: replacement.to_string(),
        })
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> Result<(String, Vec<Transformation>)> {
        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();
        let mut last_match_end = 0;

        for m in self.pattern.find_iter(input) {
            let match_start = m.start();
            let match_end = m.end();

            // Append unchanged part
            output.push_str(&input[last_match_end..match_start]);

            let replacement_start = output.len();
            output.push_str(&self.replacement);
            let replacement_end = output.len();

            transformations.push(Transformation::new(
                match_start,
                match_end,
                replacement_start,
                replacement_end,
            ));

            last_match_end = match_end;
        }

        output.push_str(&input[last_match_end..]);

        Ok((output, transformations))
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_replace() {
        let filter = PatternReplaceCharFilter::new(r"(\d+)", "NUM").unwrap();
        let input = "Year 2024";
        let (output, transformations) = filter.filter(input).unwrap();
        assert_eq!(output, "Year NUM");
        assert_eq!(transformations.len(), 1);
        assert_eq!(transformations[0].original_start, 5); // "2"
        assert_eq!(transformations[0].original_end, 9); // after "4"
        assert_eq!(transformations[0].new_start, 5); // "N"
        assert_eq!(transformations[0].new_end, 8); // after "M"
    }

    #[test]
    fn test_remove_pattern() {
        let filter = PatternReplaceCharFilter::new(r"-", "").unwrap();
        let input = "123-456-789";
        let (output, transformations) = filter.filter(input).unwrap();
        assert_eq!(output, "123456789");
        assert_eq!(transformations.len(), 2);
    }

    #[test]
    fn test_invalid_pattern() {
        let result = PatternReplaceCharFilter::new(r"(unclosed", "");
        assert!(result.is_err());
    }
}
