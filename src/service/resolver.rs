//! Resolution of an analyze request into an executable analyzer.
//!
//! A request can describe its pipeline four ways, tried in this order:
//!
//! 1. a named `analyzer`;
//! 2. explicit stages (`tokenizer`, `char_filters`, `token_filters`), built
//!    into an ad-hoc pipeline, with the tokenizer defaulting to `standard`
//!    when only filters are given;
//! 3. a schema `field`, resolved through the index's configuration;
//! 4. nothing, falling back to the `standard` analyzer.
//!
//! Every stage name goes through the registry; an unregistered name fails
//! with an unknown-stage error naming it.

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::registry::AnalysisRegistry;
use crate::error::{LanceaError, Result};
use crate::protocol::request::AnalyzeRequest;
use crate::schema::Schema;

/// Tokenizer used when a request names filters but no tokenizer.
const DEFAULT_TOKENIZER: &str = "standard";

/// Analyzer used when a request names no pipeline at all.
const DEFAULT_ANALYZER: &str = "standard";

/// Resolve the analyzer an analyze request asks for.
pub fn resolve(
    registry: &AnalysisRegistry,
    indexes: &AHashMap<String, Schema>,
    request: &AnalyzeRequest,
) -> Result<Arc<dyn Analyzer>> {
    if let Some(name) = request.analyzer() {
        return registry.analyzer(name);
    }

    let has_explicit_stages = request.tokenizer().is_some()
        || !request.token_filters().is_empty()
        || !request.char_filters().is_empty();
    if has_explicit_stages {
        return build_pipeline(registry, request);
    }

    if let Some(field) = request.field() {
        let schema = indexes
            .get(request.index())
            .ok_or_else(|| LanceaError::not_found(format!("Index '{}'", request.index())))?;
        let analyzer_name = schema.analyzer_name_for(field)?;
        return registry.analyzer(analyzer_name);
    }

    registry.analyzer(DEFAULT_ANALYZER)
}

/// Build an ad-hoc pipeline from the request's explicit stage names.
fn build_pipeline(
    registry: &AnalysisRegistry,
    request: &AnalyzeRequest,
) -> Result<Arc<dyn Analyzer>> {
    let tokenizer_name = request.tokenizer().unwrap_or(DEFAULT_TOKENIZER);
    let tokenizer = registry.tokenizer(tokenizer_name)?;

    let mut pipeline = PipelineAnalyzer::new(tokenizer);
    for name in request.char_filters() {
        pipeline = pipeline.add_char_filter(registry.char_filter(name)?);
    }
    for name in request.token_filters() {
        pipeline = pipeline.add_filter(registry.token_filter(name)?);
    }

    Ok(Arc::new(pipeline))
}
