//! Utility modules for Lancea.

pub mod varint;

// Re-export commonly used types
pub use varint::*;
