//! MSB-first bit packing shared by every codec.
//!
//! All three coders produce a sequence of bits which is stored as bytes with
//! the first emitted bit in the most significant position of the first byte.
//! The final byte is padded with zero bits; the padding is only ever
//! appended at the end.
//!
//! # Example
//!
//! ```
//! use tricodec_core::bitstream::{BitPacker, BitUnpacker};
//!
//! let mut packer = BitPacker::new();
//! packer.write_bits(0b101, 3).unwrap();
//! packer.write_bits(0b1100, 4).unwrap();
//! let packed = packer.finish();
//! assert_eq!(packed.bytes(), &[0b1011_1000]);
//! assert_eq!(packed.padding_bits(), 1);
//!
//! let mut reader = BitUnpacker::new(packed.bytes(), packed.bit_len()).unwrap();
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
//! assert_eq!(reader.remaining(), 0);
//! ```

use crate::error::{CodecError, Result};

/// A byte-aligned bit sequence together with its payload length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedBits {
    /// Packed bytes, zero padded.
    bytes: Vec<u8>,
    /// Number of payload bits (excludes padding).
    bit_len: u64,
}

impl PackedBits {
    /// Packed bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume and return the packed bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of payload bits.
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    /// Number of packed bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True if nothing was packed.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of zero bits appended to reach a byte boundary (0..=7).
    pub fn padding_bits(&self) -> u8 {
        ((self.bytes.len() as u64 * 8) - self.bit_len) as u8
    }
}

/// MSB-first bit writer.
#[derive(Debug, Default)]
pub struct BitPacker {
    /// Completed bytes.
    output: Vec<u8>,
    /// Pending bits, right aligned.
    buffer: u64,
    /// Number of pending bits in `buffer`.
    bits_in_buffer: u8,
    /// Total bits written.
    bit_len: u64,
}

impl BitPacker {
    /// Create an empty packer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty packer with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            output: Vec::with_capacity(bits.div_ceil(8)),
            ..Self::default()
        }
    }

    /// Append a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.buffer = (self.buffer << 1) | bit as u64;
        self.bits_in_buffer += 1;
        self.bit_len += 1;
        if self.bits_in_buffer == 8 {
            self.output.push(self.buffer as u8);
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
    }

    /// Append the low `count` bits of `value`, most significant first.
    pub fn write_bits(&mut self, value: u32, count: u8) -> Result<()> {
        if count > 32 {
            return Err(CodecError::InvalidBitWidth(count));
        }
        if count == 0 {
            return Ok(());
        }

        let mask = (1u64 << count) - 1;
        self.buffer = (self.buffer << count) | (value as u64 & mask);
        self.bits_in_buffer += count;
        self.bit_len += count as u64;

        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.output.push(byte);
            self.bits_in_buffer -= 8;
        }
        self.buffer &= (1u64 << self.bits_in_buffer) - 1;

        Ok(())
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    /// Pad with zeros to a byte boundary and return the packed bits.
    pub fn finish(mut self) -> PackedBits {
        if self.bits_in_buffer > 0 {
            let remaining = 8 - self.bits_in_buffer;
            self.output.push((self.buffer << remaining) as u8);
        }
        PackedBits {
            bytes: self.output,
            bit_len: self.bit_len,
        }
    }
}

/// Pack an ordered bit sequence into bytes.
pub fn pack_bits(bits: impl IntoIterator<Item = bool>) -> PackedBits {
    let mut packer = BitPacker::new();
    for bit in bits {
        packer.write_bit(bit);
    }
    packer.finish()
}

/// MSB-first bit reader over a packed byte slice.
///
/// Reads are limited to the payload length so padding is never returned as
/// data.
#[derive(Debug)]
pub struct BitUnpacker<'a> {
    data: &'a [u8],
    bit_len: u64,
    position: u64,
}

impl<'a> BitUnpacker<'a> {
    /// Create a reader over the first `bit_len` bits of `data`.
    pub fn new(data: &'a [u8], bit_len: u64) -> Result<Self> {
        if bit_len > data.len() as u64 * 8 {
            return Err(CodecError::model_mismatch(format!(
                "payload of {bit_len} bits does not fit in {} bytes",
                data.len()
            )));
        }
        Ok(Self {
            data,
            bit_len,
            position: 0,
        })
    }

    /// Create a reader over every bit of `data`, padding included.
    pub fn whole(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_len: data.len() as u64 * 8,
            position: 0,
        }
    }

    /// Read one bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.position >= self.bit_len {
            return Err(CodecError::unexpected_eof(self.position));
        }
        let byte = self.data[(self.position / 8) as usize];
        let shift = 7 - (self.position % 8) as u8;
        self.position += 1;
        Ok((byte >> shift) & 1 == 1)
    }

    /// Read `count` bits (at most 32) as an unsigned value.
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        if count > 32 {
            return Err(CodecError::InvalidBitWidth(count));
        }
        if self.remaining() < count as u64 {
            return Err(CodecError::unexpected_eof(self.position));
        }
        let mut value = 0u32;
        for _ in 0..count {
            value = (value << 1) | self.read_bit()? as u32;
        }
        Ok(value)
    }

    /// Bits left before the end of the payload.
    pub fn remaining(&self) -> u64 {
        self.bit_len - self.position
    }

    /// Bits consumed so far.
    pub fn position(&self) -> u64 {
        self.position
    }
}
