//! Unicode normalization char filter implementation.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::canonical_combining_class;

use super::{CharFilter, Transformation};
use crate::error::Result;

/// Supported Unicode normalization forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationForm {
    NFC,
    NFD,
    NFKC,
    NFKD,
}

/// A char filter that performs Unicode normalization.
///
/// The input is normalized segment by segment, where each segment starts at
/// a character with canonical combining class zero. Each changed segment is
/// recorded as a transformation so token offsets can be mapped back to the
/// original text. Composition that crosses starter boundaries (decomposed
/// Hangul jamo) cannot be tracked per segment; in that case the whole input
/// is normalized at once and reported as a single transformation span.
pub struct UnicodeNormalizeCharFilter {
    form: NormalizationForm,
}

impl UnicodeNormalizeCharFilter {
    pub fn new(form: NormalizationForm) -> Self {
        Self { form }
    }

    fn normalize(&self, text: &str) -> String {
        match self.form {
            NormalizationForm::NFC => text.nfc().collect(),
            NormalizationForm::NFD => text.nfd().collect(),
            NormalizationForm::NFKC => text.nfkc().collect(),
            NormalizationForm::NFKD => text.nfkd().collect(),
        }
    }

    fn push_segment(
        &self,
        segment: &str,
        segment_start: usize,
        output: &mut String,
        transformations: &mut Vec<Transformation>,
    ) {
        let normalized = self.normalize(segment);
        if normalized == segment {
            output.push_str(segment);
        } else {
            let new_start = output.len();
            output.push_str(&normalized);
            transformations.push(Transformation::new(
                segment_start,
                segment_start + segment.len(),
                new_start,
                output.len(),
            ));
        }
    }
}

impl CharFilter for UnicodeNormalizeCharFilter {
    fn filter(&self, input: &str) -> Result<(String, Vec<Transformation>)> {
        let whole = self.normalize(input);
        if whole == input {
            return Ok((whole, Vec::new()));
        }

        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();
        let mut segment_start = 0;

        for (idx, ch) in input.char_indices() {
            if idx > segment_start && canonical_combining_class(ch) == 0 {
                self.push_segment(
                    &input[segment_start..idx],
                    segment_start,
                    &mut output,
                    &mut transformations,
                );
                segment_start = idx;
            }
        }
        if segment_start < input.len() {
            self.push_segment(
                &input[segment_start..],
                segment_start,
                &mut output,
                &mut transformations,
            );
        }

        if output == whole {
            Ok((output, transformations))
        } else {
            // Segment-wise normalization diverged (composition across
            // starters); report one coarse span covering the whole input.
            let transformations = vec![Transformation::new(0, input.len(), 0, whole.len())];
            Ok((whole, transformations))
        }
    }

    fn name(&self) -> &'static str {
        "unicode_normalize"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfc_normalization() {
        let filter = UnicodeNormalizeCharFilter::new(NormalizationForm::NFC);
        // "Amélie" where 'é' is composed (U+00E9)
        let input = "Am\u{00e9}lie";
        let (output, trans) = filter.filter(input).unwrap();
        assert_eq!(output, "Amélie");
        assert!(trans.is_empty());

        // "Amélie" where 'é' is decomposed (U+0065 U+0301)
        let input_decomposed = "Am\u{0065}\u{0301}lie";
        let (output, trans) = filter.filter(input_decomposed).unwrap();
        // Should be normalized to composed form
        assert_eq!(output, "Am\u{00e9}lie");
        assert_eq!(trans.len(), 1);
        assert_eq!(trans[0].original_start, 2);
        assert_eq!(trans[0].original_end, 5); // 'e' + 2-byte combining acute
        assert_eq!(trans[0].new_start, 2);
        assert_eq!(trans[0].new_end, 4); // 2-byte composed 'é'
    }

    #[test]
    fn test_nfkc_normalization() {
        let filter = UnicodeNormalizeCharFilter::new(NormalizationForm::NFKC);
        // Fullwidth "Ａ" to halfwidth "A"
        let input = "\u{ff21}";
        let (output, trans) = filter.filter(input).unwrap();
        assert_eq!(output, "A");
        assert_eq!(trans.len(), 1);
        assert_eq!(trans[0].original_end, 3);
        assert_eq!(trans[0].new_end, 1);
    }

    #[test]
    fn test_nfkc_expansion() {
        let filter = UnicodeNormalizeCharFilter::new(NormalizationForm::NFKC);
        // Square ampere sign (3 bytes) expands to 4 katakana (12 bytes)
        let (output, trans) = filter.filter("㌂").unwrap();
        assert_eq!(output, "アンペア");
        assert_eq!(trans.len(), 1);
        assert_eq!(trans[0].original_start, 0);
        assert_eq!(trans[0].original_end, 3);
        assert_eq!(trans[0].new_start, 0);
        assert_eq!(trans[0].new_end, 12);
    }

    #[test]
    fn test_identity_has_no_transformations() {
        let filter = UnicodeNormalizeCharFilter::new(NormalizationForm::NFKC);
        let (output, trans) = filter.filter("plain ascii text").unwrap();
        assert_eq!(output, "plain ascii text");
        assert!(trans.is_empty());
    }
}
