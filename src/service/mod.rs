//! Node-local execution of analyze requests.
//!
//! [`AnalyzeService`] owns the stage registry and the per-index schemas,
//! resolves each request to an analyzer, runs every text element through it,
//! and projects the tokens into the response model. [`AnalyzeService::handle_bytes`]
//! is the bytes-in/bytes-out entry point a transport would call.
//!
//! # Examples
//!
//! ```
//! use lancea::protocol::request::AnalyzeRequest;
//! use lancea::service::AnalyzeService;
//!
//! let service = AnalyzeService::with_default_registry().unwrap();
//! let request = AnalyzeRequest::builder("logs")
//!     .add_text("The Quick Fox")
//!     .tokenizer("standard")
//!     .add_token_filter("lowercase")
//!     .build()
//!     .unwrap();
//!
//! let response = service.analyze(&request).unwrap();
//! let terms: Vec<_> = response.tokens.iter().map(|t| t.term.as_str()).collect();
//! assert_eq!(terms, vec!["the", "quick", "fox"]);
//! ```

pub mod encoder;
pub mod resolver;

use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::analysis::attribute::AttributeSelection;
use crate::analysis::registry::AnalysisRegistry;
use crate::error::Result;
use crate::protocol::request::AnalyzeRequest;
use crate::protocol::response::{AnalyzeFailure, AnalyzeReply, AnalyzeResponse};
use crate::schema::Schema;

/// Executes analyze requests against a registry and registered index schemas.
pub struct AnalyzeService {
    registry: Arc<AnalysisRegistry>,
    indexes: RwLock<AHashMap<String, Schema>>,
}

impl AnalyzeService {
    /// Create a service over an existing registry.
    pub fn new(registry: Arc<AnalysisRegistry>) -> Self {
        AnalyzeService {
            registry,
            indexes: RwLock::new(AHashMap::new()),
        }
    }

    /// Create a service with the built-in default stages.
    pub fn with_default_registry() -> Result<Self> {
        Ok(Self::new(Arc::new(AnalysisRegistry::with_defaults()?)))
    }

    /// The stage registry this service resolves names against.
    pub fn registry(&self) -> &Arc<AnalysisRegistry> {
        &self.registry
    }

    /// Register (or replace) the schema for an index.
    pub fn register_index<S: Into<String>>(&self, name: S, schema: Schema) {
        self.indexes.write().insert(name.into(), schema);
    }

    /// Names of the registered indexes, sorted.
    pub fn index_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.indexes.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Execute one analyze request.
    ///
    /// Each text element is analyzed in order. Positions and offsets continue
    /// across elements: the position base advances past the previous
    /// element's highest position, and the offset base advances by the
    /// element's byte length plus one separator.
    pub fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse> {
        request.validate()?;

        let analyzer = {
            let indexes = self.indexes.read();
            resolver::resolve(&self.registry, &indexes, request)?
        };
        log::debug!(
            "analyzing {} text element(s) for index '{}' with analyzer '{}'",
            request.text().len(),
            request.index(),
            analyzer.name()
        );

        let selection = AttributeSelection::new(request.attributes().to_vec());
        let short_names = request.short_attribute_name();

        let mut tokens = Vec::new();
        let mut position_base = 0usize;
        let mut offset_base = 0usize;

        for text in request.text() {
            let mut max_position = None;

            for mut token in analyzer.analyze(text)? {
                token.position += position_base;
                token.start_offset += offset_base;
                token.end_offset += offset_base;

                max_position = Some(max_position.map_or(token.position, |m: usize| {
                    m.max(token.position)
                }));
                tokens.push(encoder::encode_token(&token, &selection, short_names));
            }

            if let Some(max) = max_position {
                position_base = max + 1;
            }
            offset_base += text.len() + 1;
        }

        log::debug!("analyze produced {} token(s)", tokens.len());
        Ok(AnalyzeResponse::new(tokens))
    }

    /// Decode request bytes, execute, and encode the reply.
    ///
    /// Any failure, including undecodable request bytes, is reported inside
    /// the reply frame; `Err` is only returned if the reply itself cannot be
    /// encoded.
    pub fn handle_bytes(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let reply = match AnalyzeRequest::from_bytes(bytes) {
            Ok(request) => match self.analyze(&request) {
                Ok(response) => AnalyzeReply::Response(response),
                Err(e) => {
                    log::warn!("analyze failed: {e}");
                    AnalyzeReply::Failure(AnalyzeFailure::from_error(&e))
                }
            },
            Err(e) => {
                log::warn!("analyze request decode failed: {e}");
                AnalyzeReply::Failure(AnalyzeFailure::from_error(&e))
            }
        };

        reply.to_bytes()
    }
}

impl std::fmt::Debug for AnalyzeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzeService")
            .field("registry", &self.registry)
            .field("indexes", &self.index_names())
            .finish()
    }
}
