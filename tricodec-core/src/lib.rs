//! # tricodec Core
//!
//! Core components shared by the tricodec coders.
//!
//! - [`frequency`]: symbol occurrence counts ([`FrequencyTable`])
//! - [`bitstream`]: MSB-first bit packing ([`BitPacker`], [`BitUnpacker`])
//! - [`report`]: the per-codec result record ([`EncodeResult`])
//! - [`traits`]: the [`Codec`] and [`Diagnostic`] traits
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Driver                                                  │
//! │     tricodec CLI: input, artifacts, report, verify      │
//! ├─────────────────────────────────────────────────────────┤
//! │ Codecs                                                  │
//! │     Huffman, Arithmetic (exact BigUint), LZW            │
//! ├─────────────────────────────────────────────────────────┤
//! │ Core (this crate)                                       │
//! │     FrequencyTable, BitPacker/BitUnpacker, EncodeResult │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tricodec_core::{FrequencyTable, bitstream::pack_bits};
//!
//! let table = FrequencyTable::from_bytes(b"hello");
//! assert_eq!(table.count(b'l'), 2);
//!
//! let packed = pack_bits([true, false, true]);
//! assert_eq!(packed.bytes(), &[0b1010_0000]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;
pub mod frequency;
pub mod report;
pub mod traits;

// Re-exports for convenience
pub use bitstream::{BitPacker, BitUnpacker, PackedBits, pack_bits};
pub use error::{CodecError, Result};
pub use frequency::{FrequencyTable, printable};
pub use report::{EncodeResult, compression_ratio};
pub use traits::{Codec, Diagnostic, Encoded};
