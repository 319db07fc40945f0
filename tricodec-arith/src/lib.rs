//! # tricodec-arith: Exact Arithmetic Coding
//!
//! A static, whole-message arithmetic coder. The interval `[low, high)` is
//! narrowed once per input symbol using exact rational arithmetic on
//! [`num_bigint::BigUint`], so precision grows with the input and the final
//! interval never collapses.
//!
//! ## Output
//!
//! The packed stream is the shortest binary fraction the encoder finds
//! inside the final interval, zero padded to whole bytes. The decoder needs
//! the symbol counts and the original length, both carried in
//! [`ArithmeticModel`].
//!
//! ## Example
//!
//! ```rust
//! use tricodec_arith::{compress, decompress};
//!
//! let original = b"AAAAABBBCC";
//! let encoded = compress(original).unwrap();
//! assert!(encoded.packed.len() <= 3);
//!
//! let decoded = decompress(encoded.packed.bytes(), &encoded.model).unwrap();
//! assert_eq!(decoded, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decoder;
mod encoder;
pub mod error;
pub mod intervals;
mod model;
pub mod state;

pub use decoder::ArithmeticDecoder;
pub use encoder::ArithmeticEncoder;
pub use error::{ArithError, Result};
pub use intervals::{CumulativeIntervalTable, SymbolInterval};
pub use model::{ArithmeticModel, FinalInterval};
pub use state::IntervalState;

use tricodec_core::{Codec, Encoded};

/// Arithmetic-encode `data`.
pub fn compress(data: &[u8]) -> Result<Encoded<ArithmeticModel>> {
    ArithmeticEncoder.encode(data)
}

/// Decode `packed` with the model produced by [`compress`].
pub fn decompress(packed: &[u8], model: &ArithmeticModel) -> Result<Vec<u8>> {
    ArithmeticEncoder.decode(packed, model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let original = b"The quick brown fox jumps over the lazy dog. Arithmetic coding is cool!";
        let encoded = compress(original).unwrap();
        let decoded = decompress(encoded.packed.bytes(), &encoded.model).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_all_byte_values() {
        let original: Vec<u8> = (0..=255).collect();
        let encoded = compress(&original).unwrap();
        // 256 equiprobable symbols need exactly 8 bits each.
        assert!(encoded.packed.len() <= 257);
        let decoded = decompress(encoded.packed.bytes(), &encoded.model).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_non_ascii() {
        let original = "这是一段测试".as_bytes();
        let encoded = compress(original).unwrap();
        let decoded = decompress(encoded.packed.bytes(), &encoded.model).unwrap();
        assert_eq!(decoded, original);
    }
}
