//! Analyze response model, structured failures, and their wire codecs.
//!
//! A successful analyze call returns an [`AnalyzeResponse`]: the ordered
//! token list with per-token attribute maps. A failed call is reported as an
//! [`AnalyzeFailure`] carrying the error taxonomy kind, the message, and the
//! failing stage when one is known. [`AnalyzeReply`] frames either outcome
//! behind a status byte so the serving side always answers with bytes.

use std::collections::BTreeMap;
use std::io::{Cursor, Read};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LanceaError, Result};
use crate::protocol::wire;
use crate::util::varint;

/// One analyzed token as reported to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedToken {
    /// The term text after all filters.
    pub term: String,
    /// 0-based position, continuing across text elements.
    pub position: usize,
    /// Byte offset where the token starts in the original text.
    pub start_offset: usize,
    /// Byte offset where the token ends in the original text.
    pub end_offset: usize,
    /// Named attributes, ordered deterministically.
    pub attributes: BTreeMap<String, Value>,
}

/// The ordered token list produced by one analyze call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Tokens across all text elements, in emission order.
    pub tokens: Vec<AnalyzedToken>,
}

impl AnalyzeResponse {
    /// Create a response from the given tokens.
    pub fn new(tokens: Vec<AnalyzedToken>) -> Self {
        AnalyzeResponse { tokens }
    }

    /// Encode this response into wire bytes.
    ///
    /// Attribute values are JSON-encoded strings so numbers, booleans, and
    /// strings survive with their native types.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        varint::write_u32(&mut buf, self.tokens.len() as u32)?;

        for token in &self.tokens {
            wire::write_string(&mut buf, &token.term)?;
            varint::write_u32(&mut buf, token.position as u32)?;
            varint::write_u32(&mut buf, token.start_offset as u32)?;
            varint::write_u32(&mut buf, token.end_offset as u32)?;

            varint::write_u32(&mut buf, token.attributes.len() as u32)?;
            for (name, value) in &token.attributes {
                wire::write_string(&mut buf, name)?;
                wire::write_string(&mut buf, &serde_json::to_string(value)?)?;
            }
        }

        Ok(buf)
    }

    /// Decode a response from wire bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = Cursor::new(bytes);
        Self::read_from(&mut reader)
    }

    fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let token_count = varint::read_u32(reader)? as usize;
        let mut tokens = Vec::with_capacity(token_count);

        for _ in 0..token_count {
            let term = wire::read_string(reader)?;
            let position = varint::read_u32(reader)? as usize;
            let start_offset = varint::read_u32(reader)? as usize;
            let end_offset = varint::read_u32(reader)? as usize;

            let attr_count = varint::read_u32(reader)? as usize;
            let mut attributes = BTreeMap::new();
            for _ in 0..attr_count {
                let name = wire::read_string(reader)?;
                let raw = wire::read_string(reader)?;
                let value: Value = serde_json::from_str(&raw)
                    .map_err(|_| LanceaError::decode("Invalid attribute value JSON"))?;
                attributes.insert(name, value);
            }

            tokens.push(AnalyzedToken {
                term,
                position,
                start_offset,
                end_offset,
                attributes,
            });
        }

        Ok(AnalyzeResponse { tokens })
    }
}

/// Which part of the error taxonomy a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Request validation failed.
    Validation,
    /// A named stage is not registered.
    UnknownStage,
    /// A stage failed during execution.
    PipelineExecution,
    /// Index or field missing during resolution.
    NotFound,
    /// Malformed request bytes.
    Decode,
    /// Stage configuration failure.
    Analysis,
    /// Schema configuration failure.
    Schema,
    /// Anything else (I/O, serialization).
    Internal,
}

impl FailureKind {
    /// The stable name used on the wire and in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Validation => "validation",
            FailureKind::UnknownStage => "unknown_stage",
            FailureKind::PipelineExecution => "pipeline_execution",
            FailureKind::NotFound => "not_found",
            FailureKind::Decode => "decode",
            FailureKind::Analysis => "analysis",
            FailureKind::Schema => "schema",
            FailureKind::Internal => "internal",
        }
    }

    fn parse(name: &str) -> Result<Self> {
        match name {
            "validation" => Ok(FailureKind::Validation),
            "unknown_stage" => Ok(FailureKind::UnknownStage),
            "pipeline_execution" => Ok(FailureKind::PipelineExecution),
            "not_found" => Ok(FailureKind::NotFound),
            "decode" => Ok(FailureKind::Decode),
            "analysis" => Ok(FailureKind::Analysis),
            "schema" => Ok(FailureKind::Schema),
            "internal" => Ok(FailureKind::Internal),
            other => Err(LanceaError::decode(format!(
                "Unknown failure kind '{other}'"
            ))),
        }
    }
}

/// A structured, serializable description of a failed analyze call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeFailure {
    /// Error taxonomy classification.
    pub kind: FailureKind,
    /// Human-readable description.
    pub message: String,
    /// Name of the failing stage, when the failure is stage-tagged.
    pub stage: Option<String>,
    /// Index of the failing stage in the declared sequence.
    pub position: Option<usize>,
}

impl AnalyzeFailure {
    /// Build a failure report from an error.
    pub fn from_error(error: &LanceaError) -> Self {
        let kind = match error {
            LanceaError::Validation(_) => FailureKind::Validation,
            LanceaError::UnknownStage { .. } => FailureKind::UnknownStage,
            LanceaError::PipelineExecution { .. } => FailureKind::PipelineExecution,
            LanceaError::NotFound(_) => FailureKind::NotFound,
            LanceaError::Decode(_) => FailureKind::Decode,
            LanceaError::Analysis(_) => FailureKind::Analysis,
            LanceaError::Schema(_) => FailureKind::Schema,
            LanceaError::Io(_) | LanceaError::Json(_) | LanceaError::Anyhow(_) => {
                FailureKind::Internal
            }
        };

        let (stage, position) = match error {
            LanceaError::PipelineExecution {
                stage, position, ..
            } => (Some(stage.clone()), Some(*position)),
            _ => (None, None),
        };

        AnalyzeFailure {
            kind,
            message: error.to_string(),
            stage,
            position,
        }
    }

    fn write_to(&self, buf: &mut Vec<u8>) -> Result<()> {
        wire::write_string(buf, self.kind.as_str())?;
        wire::write_string(buf, &self.message)?;
        wire::write_optional_string(buf, self.stage.as_deref())?;
        match self.position {
            Some(position) => {
                wire::write_bool(buf, true)?;
                varint::write_u32(buf, position as u32)?;
            }
            None => wire::write_bool(buf, false)?,
        }
        Ok(())
    }

    fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let kind = FailureKind::parse(&wire::read_string(reader)?)?;
        let message = wire::read_string(reader)?;
        let stage = wire::read_optional_string(reader)?;
        let position = if wire::read_bool(reader)? {
            Some(varint::read_u32(reader)? as usize)
        } else {
            None
        };

        Ok(AnalyzeFailure {
            kind,
            message,
            stage,
            position,
        })
    }
}

/// Status byte marking a successful reply.
const STATUS_OK: u8 = 0;
/// Status byte marking a failure reply.
const STATUS_FAILURE: u8 = 1;

/// Either outcome of an analyze call, framed for the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyzeReply {
    /// The call succeeded.
    Response(AnalyzeResponse),
    /// The call failed.
    Failure(AnalyzeFailure),
}

impl AnalyzeReply {
    /// Encode this reply with its status byte.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        match self {
            AnalyzeReply::Response(response) => {
                buf.push(STATUS_OK);
                buf.extend(response.to_bytes()?);
            }
            AnalyzeReply::Failure(failure) => {
                buf.push(STATUS_FAILURE);
                failure.write_to(&mut buf)?;
            }
        }
        Ok(buf)
    }

    /// Decode a reply from wire bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = Cursor::new(bytes);
        let status = match wire::read_bool(&mut reader) {
            Ok(false) => STATUS_OK,
            Ok(true) => STATUS_FAILURE,
            Err(_) => return Err(LanceaError::decode("Invalid reply status byte")),
        };

        if status == STATUS_OK {
            Ok(AnalyzeReply::Response(AnalyzeResponse::read_from(
                &mut reader,
            )?))
        } else {
            Ok(AnalyzeReply::Failure(AnalyzeFailure::read_from(
                &mut reader,
            )?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StageKind;

    fn sample_token() -> AnalyzedToken {
        let mut attributes = BTreeMap::new();
        attributes.insert("lancea.attribute.boost".to_string(), serde_json::json!(1.0));
        attributes.insert(
            "lancea.attribute.keyword".to_string(),
            serde_json::json!(false),
        );
        attributes.insert(
            "lancea.attribute.token_type".to_string(),
            serde_json::json!("alphanum"),
        );

        AnalyzedToken {
            term: "quick".to_string(),
            position: 0,
            start_offset: 0,
            end_offset: 5,
            attributes,
        }
    }

    #[test]
    fn test_response_round_trip() {
        let response = AnalyzeResponse::new(vec![
            sample_token(),
            AnalyzedToken {
                term: "fox".to_string(),
                position: 1,
                start_offset: 6,
                end_offset: 9,
                attributes: BTreeMap::new(),
            },
        ]);

        let decoded = AnalyzeResponse::from_bytes(&response.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded, response);
    }

    #[test]
    fn test_empty_response_round_trip() {
        let response = AnalyzeResponse::default();
        let bytes = response.to_bytes().unwrap();
        assert_eq!(bytes, vec![0x00]);
        assert_eq!(AnalyzeResponse::from_bytes(&bytes).unwrap(), response);
    }

    #[test]
    fn test_attribute_values_keep_types() {
        let response = AnalyzeResponse::new(vec![sample_token()]);
        let decoded = AnalyzeResponse::from_bytes(&response.to_bytes().unwrap()).unwrap();

        let attrs = &decoded.tokens[0].attributes;
        assert!(attrs["lancea.attribute.boost"].is_number());
        assert!(attrs["lancea.attribute.keyword"].is_boolean());
        assert!(attrs["lancea.attribute.token_type"].is_string());
    }

    #[test]
    fn test_truncated_response_fails_decode() {
        let bytes = AnalyzeResponse::new(vec![sample_token()]).to_bytes().unwrap();
        match AnalyzeResponse::from_bytes(&bytes[..bytes.len() - 1]) {
            Err(LanceaError::Decode(_)) => {}
            other => panic!("Expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_failure_from_error() {
        let error = LanceaError::stage_failed("stop", 2, LanceaError::analysis("boom"));
        let failure = AnalyzeFailure::from_error(&error);

        assert_eq!(failure.kind, FailureKind::PipelineExecution);
        assert_eq!(failure.stage.as_deref(), Some("stop"));
        assert_eq!(failure.position, Some(2));
        assert!(failure.message.contains("stop"));
    }

    #[test]
    fn test_failure_from_unknown_stage() {
        let error = LanceaError::unknown_stage(StageKind::Tokenizer, "missing_stage");
        let failure = AnalyzeFailure::from_error(&error);

        assert_eq!(failure.kind, FailureKind::UnknownStage);
        assert_eq!(failure.stage, None);
        assert!(failure.message.contains("missing_stage"));
    }

    #[test]
    fn test_reply_framing_ok() {
        let reply = AnalyzeReply::Response(AnalyzeResponse::new(vec![sample_token()]));
        let bytes = reply.to_bytes().unwrap();
        assert_eq!(bytes[0], STATUS_OK);

        assert_eq!(AnalyzeReply::from_bytes(&bytes).unwrap(), reply);
    }

    #[test]
    fn test_reply_framing_failure() {
        let failure = AnalyzeFailure::from_error(&LanceaError::validation("text is missing"));
        let reply = AnalyzeReply::Failure(failure);
        let bytes = reply.to_bytes().unwrap();
        assert_eq!(bytes[0], STATUS_FAILURE);

        assert_eq!(AnalyzeReply::from_bytes(&bytes).unwrap(), reply);
    }

    #[test]
    fn test_reply_bad_status_byte() {
        match AnalyzeReply::from_bytes(&[0x07]) {
            Err(LanceaError::Decode(_)) => {}
            other => panic!("Expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_response_json_shape() {
        let response = AnalyzeResponse::new(vec![sample_token()]);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["tokens"][0]["term"], "quick");
        assert_eq!(json["tokens"][0]["position"], 0);
        assert_eq!(
            json["tokens"][0]["attributes"]["lancea.attribute.token_type"],
            "alphanum"
        );
    }
}
