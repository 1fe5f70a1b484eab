//! Request/response model and wire codec for analyze calls.
//!
//! The transport itself is out of scope; this module defines the
//! bytes-in/bytes-out contract either side of it speaks.

pub mod request;
pub mod response;
pub mod wire;

pub use request::{AnalyzeRequest, AnalyzeRequestBuilder};
pub use response::{AnalyzeFailure, AnalyzeReply, AnalyzeResponse, AnalyzedToken, FailureKind};
