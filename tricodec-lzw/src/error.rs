//! LZW error types.
//!
//! Failures are reported through the shared
//! [`CodecError`](tricodec_core::CodecError), re-exported under a
//! crate-local name.

pub use tricodec_core::CodecError as LzwError;

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;
