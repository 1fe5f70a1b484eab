//! Mapping char filter implementation.

use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::HashMap;

use super::{CharFilter, Transformation};
use crate::error::{LanceaError, Result};

/// A char filter that replaces literal strings with configured substitutions.
///
/// Matching is leftmost-longest, so when one key is a prefix of another the
/// longer key wins.
pub struct MappingCharFilter {
    ac: AhoCorasick,
    replacements: Vec<String>,
}

impl MappingCharFilter {
    /// Create a new mapping char filter from key to replacement pairs.
    pub fn new(mapping: HashMap<String, String>) -> Result<Self> {
        let mut keys = Vec::new();
        let mut replacements = Vec::new();

        for (k, v) in mapping {
            keys.push(k);
            replacements.push(v);
        }

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)
            .map_err(|e| LanceaError::analysis(format!("Invalid mapping rules: {e}")))?;

        Ok(Self { ac, replacements })
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> Result<(String, Vec<Transformation>)> {
        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();

        let mut last_match_end = 0;

        for m in self.ac.find_iter(input) {
            let match_start = m.start();
            let match_end = m.end();
            let pattern_index = m.pattern();
            let replacement = &self.replacements[pattern_index.as_usize()];

            // Text between matches is unchanged
            output.push_str(&input[last_match_end..match_start]);

            let new_start = output.len();
            output.push_str(replacement);
            let new_end = output.len();

            transformations.push(Transformation::new(
                match_start,
                match_end,
                new_start,
                new_end,
            ));

            last_match_end = match_end;
        }

        output.push_str(&input[last_match_end..]);

        Ok((output, transformations))
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}
