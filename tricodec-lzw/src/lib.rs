//! # tricodec-lzw: Pure Rust LZW Compression
//!
//! Dictionary coding with the 256 single-byte strings preloaded and one new
//! string learned per emitted code.
//!
//! ## Stream layout
//!
//! - **MSB-first bit order**, zero padded to a whole byte
//! - **No clear or end codes**: the stream is just the code sequence
//! - **Fixed width** ([`LzwConfig::CLASSIC`]): every code is 12 bits
//! - **Variable width** ([`LzwConfig::VARIABLE`]): codes grow from 9 to 12
//!   bits as the dictionary fills
//!
//! When every code of the configured width is assigned the dictionary is
//! frozen: encoding continues with the strings already known and codes are
//! never truncated.
//!
//! ## Example
//!
//! ```rust
//! use tricodec_lzw::{LzwConfig, compress, decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//! let encoded = compress(original, LzwConfig::CLASSIC).unwrap();
//! assert_eq!(encoded.model.code_count, 16);
//!
//! let decoded = decompress(encoded.packed.bytes(), &encoded.model).unwrap();
//! assert_eq!(decoded, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod dictionary;
mod encoder;
pub mod error;
mod model;

pub use config::{CodeWidth, LzwConfig, MAX_BITS, MIN_BITS};
pub use decoder::LzwDecoder;
pub use dictionary::{FIRST_CODE, LzwDictionary};
pub use encoder::LzwEncoder;
pub use error::{LzwError, Result};
pub use model::LzwModel;

use tricodec_core::{Codec, Encoded};

/// Compress data with LZW using the given configuration.
pub fn compress(data: &[u8], config: LzwConfig) -> Result<Encoded<LzwModel>> {
    LzwEncoder::new(config)?.encode(data)
}

/// Decompress LZW data; the configuration is taken from `model`.
pub fn decompress(packed: &[u8], model: &LzwModel) -> Result<Vec<u8>> {
    LzwDecoder::new(model.config)?.decode(packed, model)
}
