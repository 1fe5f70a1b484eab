//! Criterion benchmarks for the Lancea analysis service.
//!
//! This module contains benchmarks for the major components of the
//! analyze path, including:
//! - Text analysis and tokenization
//! - Full request execution through the service
//! - Request/response wire codec

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lancea::analysis::analyzer::analyzer::Analyzer;
use lancea::analysis::analyzer::standard::StandardAnalyzer;
use lancea::protocol::request::AnalyzeRequest;
use lancea::service::AnalyzeService;
use std::hint::black_box;

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = vec![
        "search",
        "engine",
        "analysis",
        "pipeline",
        "token",
        "filter",
        "tokenizer",
        "analyzer",
        "attribute",
        "position",
        "offset",
        "schema",
        "field",
        "index",
        "request",
        "response",
        "stage",
        "registry",
        "normalization",
        "lowercase",
        "stopword",
        "keyword",
        "ngram",
        "whitespace",
        "standard",
        "mapping",
        "pattern",
        "replace",
        "varint",
        "wire",
        "format",
        "protocol",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100); // Variable length documents
        let mut doc_words = Vec::with_capacity(doc_length);

        for j in 0..doc_length {
            let word_index = (i * 7 + j * 3) % words.len();
            doc_words.push(words[word_index]);
        }

        documents.push(doc_words.join(" "));
    }

    documents
}

/// Benchmark text analysis and tokenization.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    let analyzer = StandardAnalyzer::new().unwrap();
    let texts = generate_test_documents(1000);

    // Single document analysis
    group.bench_function("analyze_single_document", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer.analyze(black_box(&texts[0])).unwrap().collect();
            black_box(tokens)
        })
    });

    // Batch document analysis
    group.throughput(Throughput::Elements(100));
    group.bench_function("analyze_batch_documents", |b| {
        b.iter(|| {
            for text in texts.iter().take(100) {
                let tokens: Vec<_> = analyzer.analyze(black_box(text)).unwrap().collect();
                let _ = black_box(tokens);
            }
        })
    });

    group.finish();
}

/// Benchmark full request execution through the service.
fn bench_service_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("service_analyze");

    let service = AnalyzeService::with_default_registry().unwrap();
    let texts = generate_test_documents(10);

    let default_request = AnalyzeRequest::builder("bench")
        .add_text(&texts[0])
        .build()
        .unwrap();

    group.bench_function("analyze_default_pipeline", |b| {
        b.iter(|| {
            let response = service.analyze(black_box(&default_request)).unwrap();
            black_box(response)
        })
    });

    let explicit_request = AnalyzeRequest::builder("bench")
        .add_text(&texts[0])
        .add_char_filter("unicode_normalize")
        .tokenizer("standard")
        .token_filters(vec!["lowercase", "stop"])
        .build()
        .unwrap();

    group.bench_function("analyze_explicit_stages", |b| {
        b.iter(|| {
            let response = service.analyze(black_box(&explicit_request)).unwrap();
            black_box(response)
        })
    });

    let multi_request = AnalyzeRequest::builder("bench")
        .text(texts.clone())
        .build()
        .unwrap();

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("analyze_multi_element_request", |b| {
        b.iter(|| {
            let response = service.analyze(black_box(&multi_request)).unwrap();
            black_box(response)
        })
    });

    group.finish();
}

/// Benchmark the request/response wire codec.
fn bench_wire_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("wire_format");

    let service = AnalyzeService::with_default_registry().unwrap();
    let texts = generate_test_documents(1);

    let request = AnalyzeRequest::builder("bench")
        .add_text(&texts[0])
        .attributes(vec!["boost", "stopped"])
        .short_attribute_name(true)
        .build()
        .unwrap();
    let request_bytes = request.to_bytes().unwrap();
    let response = service.analyze(&request).unwrap();

    group.bench_function("encode_request", |b| {
        b.iter(|| {
            let bytes = black_box(&request).to_bytes().unwrap();
            black_box(bytes)
        })
    });

    group.bench_function("decode_request", |b| {
        b.iter(|| {
            let decoded = AnalyzeRequest::from_bytes(black_box(&request_bytes)).unwrap();
            black_box(decoded)
        })
    });

    group.bench_function("encode_response", |b| {
        b.iter(|| {
            let bytes = black_box(&response).to_bytes().unwrap();
            black_box(bytes)
        })
    });

    group.bench_function("handle_bytes_round_trip", |b| {
        b.iter(|| {
            let reply = service.handle_bytes(black_box(&request_bytes)).unwrap();
            black_box(reply)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_text_analysis,
    bench_service_analyze,
    bench_wire_format
);
criterion_main!(benches);
