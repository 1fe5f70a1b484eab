//! # Lancea
//!
//! A text analysis service for Rust, exposing search-engine analysis
//! pipelines over a compact binary protocol and a CLI.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Configurable pipelines of char filters, a tokenizer, and token filters
//! - Named stage registry with sensible defaults
//! - Schema-driven per-field analyzer resolution
//! - Token attribute projection with optional short names
//! - Varint-based request/response wire format

pub mod analysis;
pub mod cli;
pub mod error;
pub mod protocol;
pub mod schema;
pub mod service;
pub mod util;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
