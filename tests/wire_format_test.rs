use std::collections::BTreeMap;

use lancea::error::{LanceaError, Result};
use lancea::protocol::request::AnalyzeRequest;
use lancea::protocol::response::{
    AnalyzeFailure, AnalyzeReply, AnalyzeResponse, AnalyzedToken, FailureKind,
};
use lancea::protocol::wire;
use lancea::util::varint;

fn sample_request() -> AnalyzeRequest {
    AnalyzeRequest::builder("i")
        .add_text("ab")
        .tokenizer("ws")
        .add_token_filter("lc")
        .short_attribute_name(true)
        .add_attribute("b")
        .build()
        .unwrap()
}

#[test]
fn request_encodes_fields_in_fixed_order() -> Result<()> {
    let bytes = sample_request().to_bytes()?;

    #[rustfmt::skip]
    let expected = vec![
        0x01, b'i',                   // index
        0x01, 0x02, b'a', b'b',       // text: 1 element, "ab"
        0x00,                         // analyzer: absent
        0x01, 0x02, b'w', b's',       // tokenizer: present, "ws"
        0x01, 0x02, b'l', b'c',       // token_filters: 1 element, "lc"
        0x00,                         // char_filters: empty
        0x00,                         // field: absent
        0x01,                         // short_attribute_name: true
        0x01, 0x01, b'b',             // attributes: 1 element, "b"
    ];
    assert_eq!(bytes, expected);
    Ok(())
}

#[test]
fn fully_populated_request_round_trips() -> Result<()> {
    let request = AnalyzeRequest::builder("articles")
        .text(vec!["first element", "second element"])
        .analyzer("standard")
        .tokenizer("whitespace")
        .token_filters(vec!["lowercase", "stop"])
        .char_filters(vec!["unicode_normalize"])
        .field("body")
        .attributes(vec!["boost", "stopped"])
        .short_attribute_name(true)
        .build()?;

    let decoded = AnalyzeRequest::from_bytes(&request.to_bytes()?)?;
    assert_eq!(decoded, request);
    Ok(())
}

#[test]
fn long_strings_use_multi_byte_varint_lengths() -> Result<()> {
    let long_text = "x".repeat(200);
    let request = AnalyzeRequest::builder("i").add_text(&long_text).build()?;

    let bytes = request.to_bytes()?;
    // After index (2 bytes) and text count (1 byte), the element length 200
    // spans two varint bytes.
    assert_eq!(&bytes[3..5], &[0xC8, 0x01]);

    let decoded = AnalyzeRequest::from_bytes(&bytes)?;
    assert_eq!(decoded.text(), &[long_text]);
    Ok(())
}

#[test]
fn truncated_request_bytes_fail_to_decode() -> Result<()> {
    let bytes = sample_request().to_bytes()?;

    for len in 0..bytes.len() {
        match AnalyzeRequest::from_bytes(&bytes[..len]) {
            Err(LanceaError::Decode(_)) => {}
            other => panic!("Truncation at {len} should fail to decode, got {other:?}"),
        }
    }
    Ok(())
}

#[test]
fn corrupted_presence_byte_fails_to_decode() -> Result<()> {
    let mut bytes = sample_request().to_bytes()?;

    // Byte 6 is the analyzer presence flag.
    bytes[6] = 0x05;
    match AnalyzeRequest::from_bytes(&bytes) {
        Err(LanceaError::Decode(msg)) => assert!(msg.contains("presence")),
        other => panic!("Expected decode error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn corrupted_bool_byte_fails_to_decode() -> Result<()> {
    let mut bytes = sample_request().to_bytes()?;

    // The short_attribute_name flag precedes the attributes array.
    let flag_index = bytes.len() - 4;
    assert_eq!(bytes[flag_index], 0x01);
    bytes[flag_index] = 0x02;
    match AnalyzeRequest::from_bytes(&bytes) {
        Err(LanceaError::Decode(msg)) => assert!(msg.contains("bool")),
        other => panic!("Expected decode error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn response_preserves_attribute_value_types() -> Result<()> {
    let mut attributes = BTreeMap::new();
    attributes.insert("boost".to_string(), serde_json::json!(1.5));
    attributes.insert("stopped".to_string(), serde_json::json!(false));
    attributes.insert("token_type".to_string(), serde_json::json!("alphanum"));

    let response = AnalyzeResponse::new(vec![AnalyzedToken {
        term: "quick".to_string(),
        position: 1,
        start_offset: 4,
        end_offset: 9,
        attributes,
    }]);

    let decoded = AnalyzeResponse::from_bytes(&response.to_bytes()?)?;
    assert_eq!(decoded, response);

    let attrs = &decoded.tokens[0].attributes;
    assert!(attrs["boost"].is_f64());
    assert!(attrs["stopped"].is_boolean());
    assert!(attrs["token_type"].is_string());
    Ok(())
}

#[test]
fn response_rejects_malformed_attribute_json() -> Result<()> {
    let mut bytes = Vec::new();
    varint::write_u32(&mut bytes, 1)?; // one token
    wire::write_string(&mut bytes, "term")?;
    varint::write_u32(&mut bytes, 0)?; // position
    varint::write_u32(&mut bytes, 0)?; // start_offset
    varint::write_u32(&mut bytes, 4)?; // end_offset
    varint::write_u32(&mut bytes, 1)?; // one attribute
    wire::write_string(&mut bytes, "boost")?;
    wire::write_string(&mut bytes, "not json")?;

    match AnalyzeResponse::from_bytes(&bytes) {
        Err(LanceaError::Decode(msg)) => assert!(msg.contains("JSON")),
        other => panic!("Expected decode error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn success_reply_frames_the_response() -> Result<()> {
    let response = AnalyzeResponse::new(vec![AnalyzedToken {
        term: "fox".to_string(),
        position: 0,
        start_offset: 0,
        end_offset: 3,
        attributes: BTreeMap::new(),
    }]);

    let bytes = AnalyzeReply::Response(response.clone()).to_bytes()?;
    assert_eq!(bytes[0], 0x00);

    match AnalyzeReply::from_bytes(&bytes)? {
        AnalyzeReply::Response(decoded) => assert_eq!(decoded, response),
        AnalyzeReply::Failure(failure) => panic!("Unexpected failure: {failure:?}"),
    }
    Ok(())
}

#[test]
fn failure_reply_carries_stage_and_position() -> Result<()> {
    let failure = AnalyzeFailure {
        kind: FailureKind::PipelineExecution,
        message: "Stage 'strip' at position 2 failed".to_string(),
        stage: Some("strip".to_string()),
        position: Some(2),
    };

    let bytes = AnalyzeReply::Failure(failure.clone()).to_bytes()?;
    assert_eq!(bytes[0], 0x01);

    match AnalyzeReply::from_bytes(&bytes)? {
        AnalyzeReply::Failure(decoded) => assert_eq!(decoded, failure),
        AnalyzeReply::Response(response) => panic!("Unexpected response: {response:?}"),
    }
    Ok(())
}

#[test]
fn reply_rejects_unknown_status_byte() -> Result<()> {
    match AnalyzeReply::from_bytes(&[0x07]) {
        Err(LanceaError::Decode(msg)) => assert!(msg.contains("status")),
        other => panic!("Expected decode error, got {other:?}"),
    }
    Ok(())
}
