//! Analyze request model and its wire codec.
//!
//! An [`AnalyzeRequest`] names an index, carries one or more text strings, and
//! describes how they should be analyzed: by a named analyzer, by an explicit
//! tokenizer/filter combination, or by the analyzer configured for a schema
//! field. Requests are built through [`AnalyzeRequestBuilder`] and validated
//! before they can be encoded.
//!
//! # Wire format
//!
//! Fields are encoded in a fixed order: `index`, `text`, `analyzer`,
//! `tokenizer`, `token_filters`, `char_filters`, `field`,
//! `short_attribute_name`, `attributes`. Counts and lengths are varints;
//! see [`crate::protocol::wire`] for the primitives.
//!
//! Each array is guarded by its own count on decode, and an empty array
//! encodes as a zero count, so empty and absent round-trip unchanged.
//!
//! # Examples
//!
//! ```
//! use lancea::protocol::request::AnalyzeRequest;
//!
//! let request = AnalyzeRequest::builder("logs")
//!     .add_text("The Quick Fox")
//!     .tokenizer("standard")
//!     .add_token_filter("lowercase")
//!     .build()
//!     .unwrap();
//!
//! let bytes = request.to_bytes().unwrap();
//! let decoded = AnalyzeRequest::from_bytes(&bytes).unwrap();
//! assert_eq!(decoded, request);
//! ```

use std::io::Cursor;

use serde::{Deserialize, Serialize};

use crate::error::{LanceaError, Result};
use crate::protocol::wire;

/// A request to analyze one or more strings of text.
///
/// Instances are immutable once built; construction goes through
/// [`AnalyzeRequest::builder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    index: String,
    text: Vec<String>,
    analyzer: Option<String>,
    tokenizer: Option<String>,
    token_filters: Vec<String>,
    char_filters: Vec<String>,
    field: Option<String>,
    attributes: Vec<String>,
    short_attribute_name: bool,
}

impl AnalyzeRequest {
    /// Start building a request for the given index.
    pub fn builder<S: Into<String>>(index: S) -> AnalyzeRequestBuilder {
        AnalyzeRequestBuilder {
            request: AnalyzeRequest {
                index: index.into(),
                text: Vec::new(),
                analyzer: None,
                tokenizer: None,
                token_filters: Vec::new(),
                char_filters: Vec::new(),
                field: None,
                attributes: Vec::new(),
                short_attribute_name: false,
            },
        }
    }

    /// The index this request addresses.
    pub fn index(&self) -> &str {
        &self.index
    }

    /// The text strings to analyze, in order.
    pub fn text(&self) -> &[String] {
        &self.text
    }

    /// The named analyzer, if one was requested.
    pub fn analyzer(&self) -> Option<&str> {
        self.analyzer.as_deref()
    }

    /// The named tokenizer, if one was requested.
    pub fn tokenizer(&self) -> Option<&str> {
        self.tokenizer.as_deref()
    }

    /// The named token filters, in application order.
    pub fn token_filters(&self) -> &[String] {
        &self.token_filters
    }

    /// The named char filters, in application order.
    pub fn char_filters(&self) -> &[String] {
        &self.char_filters
    }

    /// The schema field whose analyzer should be used, if set.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// The attribute names to report; empty means all.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Whether attribute names should be abbreviated in the response.
    pub fn short_attribute_name(&self) -> bool {
        self.short_attribute_name
    }

    /// Check that the request is complete enough to execute.
    pub fn validate(&self) -> Result<()> {
        if self.text.is_empty() {
            return Err(LanceaError::validation("text is missing"));
        }
        Ok(())
    }

    /// Encode this request into wire bytes.
    ///
    /// Re-validates first: an invalid request (possible via deserialization)
    /// must never reach the wire.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.validate()?;

        let mut buf = Vec::new();
        wire::write_string(&mut buf, &self.index)?;
        wire::write_string_array(&mut buf, &self.text)?;
        wire::write_optional_string(&mut buf, self.analyzer.as_deref())?;
        wire::write_optional_string(&mut buf, self.tokenizer.as_deref())?;
        wire::write_string_array(&mut buf, &self.token_filters)?;
        wire::write_string_array(&mut buf, &self.char_filters)?;
        wire::write_optional_string(&mut buf, self.field.as_deref())?;
        wire::write_bool(&mut buf, self.short_attribute_name)?;
        wire::write_string_array(&mut buf, &self.attributes)?;
        Ok(buf)
    }

    /// Decode a request from wire bytes and validate it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = Cursor::new(bytes);

        let request = AnalyzeRequest {
            index: wire::read_string(&mut reader)?,
            text: wire::read_string_array(&mut reader)?,
            analyzer: wire::read_optional_string(&mut reader)?,
            tokenizer: wire::read_optional_string(&mut reader)?,
            token_filters: wire::read_string_array(&mut reader)?,
            char_filters: wire::read_string_array(&mut reader)?,
            field: wire::read_optional_string(&mut reader)?,
            short_attribute_name: wire::read_bool(&mut reader)?,
            attributes: wire::read_string_array(&mut reader)?,
        };

        request.validate()?;
        Ok(request)
    }
}

/// Fluent builder for [`AnalyzeRequest`].
#[derive(Debug, Clone)]
pub struct AnalyzeRequestBuilder {
    request: AnalyzeRequest,
}

impl AnalyzeRequestBuilder {
    /// Replace the text strings to analyze.
    pub fn text<I, S>(mut self, text: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.text = text.into_iter().map(Into::into).collect();
        self
    }

    /// Append one text string.
    pub fn add_text<S: Into<String>>(mut self, text: S) -> Self {
        self.request.text.push(text.into());
        self
    }

    /// Use the named analyzer.
    pub fn analyzer<S: Into<String>>(mut self, name: S) -> Self {
        self.request.analyzer = Some(name.into());
        self
    }

    /// Use the named tokenizer.
    pub fn tokenizer<S: Into<String>>(mut self, name: S) -> Self {
        self.request.tokenizer = Some(name.into());
        self
    }

    /// Replace the token filter list.
    pub fn token_filters<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.token_filters = names.into_iter().map(Into::into).collect();
        self
    }

    /// Append one token filter.
    pub fn add_token_filter<S: Into<String>>(mut self, name: S) -> Self {
        self.request.token_filters.push(name.into());
        self
    }

    /// Replace the char filter list.
    pub fn char_filters<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.char_filters = names.into_iter().map(Into::into).collect();
        self
    }

    /// Append one char filter.
    pub fn add_char_filter<S: Into<String>>(mut self, name: S) -> Self {
        self.request.char_filters.push(name.into());
        self
    }

    /// Use the analyzer configured for the given schema field.
    pub fn field<S: Into<String>>(mut self, name: S) -> Self {
        self.request.field = Some(name.into());
        self
    }

    /// Replace the attribute selection.
    pub fn attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.attributes = names.into_iter().map(Into::into).collect();
        self
    }

    /// Append one attribute name.
    pub fn add_attribute<S: Into<String>>(mut self, name: S) -> Self {
        self.request.attributes.push(name.into());
        self
    }

    /// Report abbreviated attribute names.
    pub fn short_attribute_name(mut self, short: bool) -> Self {
        self.request.short_attribute_name = short;
        self
    }

    /// Validate and return the finished request.
    pub fn build(self) -> Result<AnalyzeRequest> {
        self.request.validate()?;
        Ok(self.request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> AnalyzeRequest {
        AnalyzeRequest::builder("products")
            .add_text("first text")
            .add_text("second text")
            .analyzer("standard")
            .tokenizer("whitespace")
            .token_filters(["lowercase", "stop"])
            .char_filters(["unicode_normalize"])
            .field("title")
            .attributes(["keyword", "lancea.attribute.boost"])
            .short_attribute_name(true)
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let request = AnalyzeRequest::builder("idx")
            .add_text("hello")
            .build()
            .unwrap();

        assert_eq!(request.index(), "idx");
        assert_eq!(request.text(), ["hello"]);
        assert_eq!(request.analyzer(), None);
        assert_eq!(request.tokenizer(), None);
        assert!(request.token_filters().is_empty());
        assert!(request.char_filters().is_empty());
        assert_eq!(request.field(), None);
        assert!(request.attributes().is_empty());
        assert!(!request.short_attribute_name());
    }

    #[test]
    fn test_build_rejects_empty_text() {
        let result = AnalyzeRequest::builder("idx").build();
        match result {
            Err(LanceaError::Validation(msg)) => assert!(msg.contains("text")),
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_round_trip_full() {
        let request = full_request();
        let bytes = request.to_bytes().unwrap();
        let decoded = AnalyzeRequest::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn test_round_trip_minimal() {
        let request = AnalyzeRequest::builder("i")
            .add_text("ab")
            .build()
            .unwrap();
        let bytes = request.to_bytes().unwrap();
        let decoded = AnalyzeRequest::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn test_exact_wire_layout() {
        let request = AnalyzeRequest::builder("i")
            .add_text("ab")
            .build()
            .unwrap();

        // index "i", text ["ab"], then absent/empty trailing fields:
        // analyzer, tokenizer, token_filters, char_filters, field,
        // short_attribute_name, attributes.
        let expected = vec![
            0x01, b'i', // index
            0x01, 0x02, b'a', b'b', // text
            0x00, // analyzer absent
            0x00, // tokenizer absent
            0x00, // token_filters count
            0x00, // char_filters count
            0x00, // field absent
            0x00, // short_attribute_name false
            0x00, // attributes count
        ];
        assert_eq!(request.to_bytes().unwrap(), expected);
    }

    #[test]
    fn test_char_filters_round_trip_on_wire() {
        let request = AnalyzeRequest::builder("idx")
            .add_text("text")
            .add_char_filter("mapping")
            .add_char_filter("unicode_normalize")
            .build()
            .unwrap();

        let decoded = AnalyzeRequest::from_bytes(&request.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded.char_filters(), ["mapping", "unicode_normalize"]);
    }

    #[test]
    fn test_empty_arrays_round_trip_empty() {
        let request = AnalyzeRequest::builder("idx")
            .add_text("text")
            .build()
            .unwrap();

        let decoded = AnalyzeRequest::from_bytes(&request.to_bytes().unwrap()).unwrap();
        assert!(decoded.token_filters().is_empty());
        assert!(decoded.char_filters().is_empty());
        assert!(decoded.attributes().is_empty());
    }

    #[test]
    fn test_to_bytes_revalidates() {
        // Deserialization can produce a request the builder would refuse.
        let request: AnalyzeRequest =
            serde_json::from_str(r#"{"index":"idx","text":[],"analyzer":null,"tokenizer":null,"token_filters":[],"char_filters":[],"field":null,"attributes":[],"short_attribute_name":false}"#)
                .unwrap();

        match request.to_bytes() {
            Err(LanceaError::Validation(_)) => {}
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_truncated_bytes_fail_decode() {
        let bytes = full_request().to_bytes().unwrap();
        for cut in [1, bytes.len() / 2, bytes.len() - 1] {
            let result = AnalyzeRequest::from_bytes(&bytes[..cut]);
            match result {
                Err(LanceaError::Decode(_)) => {}
                other => panic!("Expected decode error at cut {cut}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_json_round_trip() {
        let request = full_request();
        let json = serde_json::to_string(&request).unwrap();
        let decoded: AnalyzeRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, request);
    }
}
