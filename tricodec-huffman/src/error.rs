//! Huffman error types.
//!
//! Failures are reported through the shared
//! [`CodecError`](tricodec_core::CodecError), re-exported under a
//! crate-local name.

pub use tricodec_core::CodecError as HuffmanError;

/// Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;
