//! Token attribute names and projection for analyze responses.
//!
//! Every piece of per-token state beyond term, position, and offsets is
//! reported as a named attribute. Attribute names are fully qualified under
//! the `lancea.attribute.` namespace; the short form is the final dot-segment
//! (e.g. `token_type` for `lancea.attribute.token_type`).
//!
//! A request can restrict which attributes are reported. Requested names are
//! matched case-sensitively against either the full or the short form, and an
//! empty selection means "all attributes".
//!
//! # Examples
//!
//! ```
//! use lancea::analysis::attribute::{self, AttributeSelection};
//! use lancea::analysis::token::Token;
//!
//! let token = Token::new("rust", 0).mark_keyword();
//! let selection = AttributeSelection::new(vec!["keyword".to_string()]);
//!
//! let attrs = attribute::collect_attributes(&token, &selection, false);
//! assert_eq!(attrs.len(), 1);
//! assert_eq!(attrs["lancea.attribute.keyword"], serde_json::json!(true));
//! ```

use std::collections::BTreeMap;

use serde_json::Value;

use crate::analysis::token::Token;

/// Namespace prefix for all attribute names.
pub const ATTRIBUTE_PREFIX: &str = "lancea.attribute.";

/// Token type classification (`alphanum`, `cjk`, ...). Reported when set.
pub const TOKEN_TYPE: &str = "lancea.attribute.token_type";

/// Position increment relative to the previous token.
pub const POSITION_INCREMENT: &str = "lancea.attribute.position_increment";

/// Number of positions the token spans.
pub const POSITION_LENGTH: &str = "lancea.attribute.position_length";

/// Scoring weight multiplier.
pub const BOOST: &str = "lancea.attribute.boost";

/// Whether a filter marked the token as stopped.
pub const STOPPED: &str = "lancea.attribute.stopped";

/// Whether the token is protected from modification by keyword-aware filters.
pub const KEYWORD: &str = "lancea.attribute.keyword";

/// The token text before filtering, when a filter recorded it.
pub const ORIGINAL_TEXT: &str = "lancea.attribute.original_text";

/// Qualify an attribute name with the namespace prefix.
///
/// Names that already carry the prefix are returned unchanged.
pub fn qualify(name: &str) -> String {
    if name.starts_with(ATTRIBUTE_PREFIX) {
        name.to_string()
    } else {
        format!("{ATTRIBUTE_PREFIX}{name}")
    }
}

/// The short form of a qualified attribute name: the final dot-segment.
pub fn short_name(full: &str) -> &str {
    full.rsplit('.').next().unwrap_or(full)
}

/// Which attributes an analyze request wants reported.
///
/// An empty selection selects everything. Otherwise a token attribute is
/// included when its full name or its short name appears in the selection,
/// compared case-sensitively.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeSelection {
    names: Vec<String>,
}

impl AttributeSelection {
    /// Create a selection from the requested attribute names.
    pub fn new(names: Vec<String>) -> Self {
        AttributeSelection { names }
    }

    /// A selection that includes every attribute.
    pub fn all() -> Self {
        AttributeSelection { names: Vec::new() }
    }

    /// Whether this selection includes every attribute.
    pub fn is_all(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether the attribute with the given full name is selected.
    pub fn includes(&self, full: &str) -> bool {
        if self.is_all() {
            return true;
        }
        let short = short_name(full);
        self.names.iter().any(|n| n == full || n == short)
    }
}

/// Project a token's attributes into a name-to-value map.
///
/// The scalar attributes (`boost`, `stopped`, `keyword`, `position_increment`,
/// `position_length`) are always present on a token and reported whenever
/// selected. `token_type`, `original_text`, and custom metadata entries are
/// reported only when the token carries them.
///
/// Keys are the full names, or the short forms when `short_names` is set.
/// The map is ordered, so the output is deterministic.
pub fn collect_attributes(
    token: &Token,
    selection: &AttributeSelection,
    short_names: bool,
) -> BTreeMap<String, Value> {
    let mut attrs = BTreeMap::new();

    let mut put = |full: String, value: Value| {
        if selection.includes(&full) {
            let key = if short_names {
                short_name(&full).to_string()
            } else {
                full
            };
            attrs.insert(key, value);
        }
    };

    put(BOOST.to_string(), Value::from(token.boost as f64));
    put(STOPPED.to_string(), Value::from(token.stopped));
    put(KEYWORD.to_string(), Value::from(token.is_keyword()));
    put(
        POSITION_INCREMENT.to_string(),
        Value::from(token.position_increment as u64),
    );
    put(
        POSITION_LENGTH.to_string(),
        Value::from(token.position_length as u64),
    );

    if let Some(metadata) = token.metadata() {
        if let Some(token_type) = metadata.token_type {
            put(TOKEN_TYPE.to_string(), Value::from(token_type.as_str()));
        }
        if let Some(original) = &metadata.original_text {
            put(ORIGINAL_TEXT.to_string(), Value::from(original.as_str()));
        }
        for (key, value) in &metadata.attributes {
            put(qualify(key), Value::from(value.as_str()));
        }
    }

    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{Token, TokenType};

    #[test]
    fn test_qualify_and_short_name() {
        assert_eq!(qualify("token_type"), "lancea.attribute.token_type");
        assert_eq!(
            qualify("lancea.attribute.token_type"),
            "lancea.attribute.token_type"
        );
        assert_eq!(short_name("lancea.attribute.token_type"), "token_type");
        assert_eq!(short_name("plain"), "plain");
    }

    #[test]
    fn test_selection_all() {
        let selection = AttributeSelection::all();
        assert!(selection.is_all());
        assert!(selection.includes("lancea.attribute.boost"));
        assert!(selection.includes("lancea.attribute.anything"));
    }

    #[test]
    fn test_selection_matches_full_or_short() {
        let selection = AttributeSelection::new(vec![
            "keyword".to_string(),
            "lancea.attribute.boost".to_string(),
        ]);

        assert!(selection.includes("lancea.attribute.keyword"));
        assert!(selection.includes("lancea.attribute.boost"));
        assert!(!selection.includes("lancea.attribute.stopped"));
    }

    #[test]
    fn test_selection_is_case_sensitive() {
        let selection = AttributeSelection::new(vec!["Keyword".to_string()]);
        assert!(!selection.includes("lancea.attribute.keyword"));
    }

    #[test]
    fn test_collect_default_token() {
        let token = Token::new("hello", 0);
        let attrs = collect_attributes(&token, &AttributeSelection::all(), false);

        assert_eq!(attrs.len(), 5);
        assert_eq!(attrs["lancea.attribute.boost"], serde_json::json!(1.0));
        assert_eq!(attrs["lancea.attribute.stopped"], serde_json::json!(false));
        assert_eq!(attrs["lancea.attribute.keyword"], serde_json::json!(false));
        assert_eq!(
            attrs["lancea.attribute.position_increment"],
            serde_json::json!(1)
        );
        assert_eq!(
            attrs["lancea.attribute.position_length"],
            serde_json::json!(1)
        );
    }

    #[test]
    fn test_collect_metadata_attributes() {
        let mut token = Token::new("hello", 0)
            .with_token_type(TokenType::Alphanum)
            .with_original_text("Hello");
        if let Some(metadata) = token.metadata_mut() {
            metadata.set_attribute("source", "title");
        }

        let attrs = collect_attributes(&token, &AttributeSelection::all(), false);

        assert_eq!(
            attrs["lancea.attribute.token_type"],
            serde_json::json!("alphanum")
        );
        assert_eq!(
            attrs["lancea.attribute.original_text"],
            serde_json::json!("Hello")
        );
        assert_eq!(attrs["lancea.attribute.source"], serde_json::json!("title"));
    }

    #[test]
    fn test_collect_short_names() {
        let token = Token::new("hello", 0).stop();
        let selection = AttributeSelection::new(vec!["stopped".to_string()]);

        let attrs = collect_attributes(&token, &selection, true);

        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs["stopped"], serde_json::json!(true));
    }

    #[test]
    fn test_collect_is_deterministic() {
        let token = Token::new("hello", 0);
        let keys: Vec<_> = collect_attributes(&token, &AttributeSelection::all(), false)
            .into_keys()
            .collect();

        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
