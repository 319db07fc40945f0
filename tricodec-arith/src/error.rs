//! Arithmetic coding error types.
//!
//! Failures are reported through the shared
//! [`CodecError`](tricodec_core::CodecError), re-exported under a
//! crate-local name.

pub use tricodec_core::CodecError as ArithError;

/// Result type for arithmetic coding operations.
pub type Result<T> = std::result::Result<T, ArithError>;
