//! # tricodec-huffman: Static Huffman Coding
//!
//! Classic two-pass Huffman coding over bytes: count frequencies, build a
//! prefix-code tree by greedy minimum-frequency merging, then emit each
//! symbol's code.
//!
//! ## Properties
//!
//! - **Deterministic**: ties are broken by `(freq, tie_key)`; see [`tree`]
//! - **Never empty codes**: a one-symbol alphabet gets the 1-bit code `0`
//! - **Explicit model**: the code table, symbol count and padding length are
//!   returned as a serialisable [`HuffmanModel`] for the decoder
//!
//! ## Example
//!
//! ```rust
//! use tricodec_huffman::{compress, decompress};
//!
//! let original = b"AAAAABBBCC";
//! let encoded = compress(original).unwrap();
//! assert_eq!(encoded.model.codes.get(b'A').unwrap().len(), 1);
//!
//! let decoded = decompress(encoded.packed.bytes(), &encoded.model).unwrap();
//! assert_eq!(decoded, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod code;
mod decoder;
mod encoder;
pub mod error;
mod model;
pub mod tree;

pub use code::{CodeTable, HuffmanCode};
pub use decoder::HuffmanDecoder;
pub use encoder::HuffmanEncoder;
pub use error::{HuffmanError, Result};
pub use model::HuffmanModel;
pub use tree::{HuffmanNode, HuffmanTree};

use tricodec_core::{Codec, Encoded};

/// Huffman-encode `data`.
pub fn compress(data: &[u8]) -> Result<Encoded<HuffmanModel>> {
    HuffmanEncoder.encode(data)
}

/// Decode `packed` with the model produced by [`compress`].
pub fn decompress(packed: &[u8], model: &HuffmanModel) -> Result<Vec<u8>> {
    HuffmanEncoder.decode(packed, model)
}
