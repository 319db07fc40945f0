//! LZW configuration: dictionary capacity and code width.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use tricodec_core::CodecError;

/// Smallest supported code width; one bit more than a raw byte.
pub const MIN_BITS: u8 = 9;
/// Largest supported code width.
pub const MAX_BITS: u8 = 16;

/// How codes are sized in the packed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeWidth {
    /// Every code uses `max_bits` bits.
    Fixed,
    /// Each code uses the fewest bits able to hold any code the dictionary
    /// could contain at that point, growing from 9 up to `max_bits`.
    Variable,
}

/// LZW configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LzwConfig {
    /// Maximum code size in bits; the dictionary holds `2^max_bits` codes.
    pub max_bits: u8,
    /// Code sizing strategy.
    pub width: CodeWidth,
}

impl LzwConfig {
    /// Classic layout: fixed 12-bit codes, 4096 dictionary entries.
    pub const CLASSIC: Self = Self {
        max_bits: 12,
        width: CodeWidth::Fixed,
    };

    /// 9 to 12 bit codes sized by dictionary growth.
    pub const VARIABLE: Self = Self {
        max_bits: 12,
        width: CodeWidth::Variable,
    };

    /// Create a configuration, rejecting widths outside `9..=16`.
    pub fn new(max_bits: u8, width: CodeWidth) -> Result<Self> {
        if !(MIN_BITS..=MAX_BITS).contains(&max_bits) {
            return Err(CodecError::InvalidBitWidth(max_bits));
        }
        Ok(Self { max_bits, width })
    }

    /// Check a configuration that did not come from [`LzwConfig::new`].
    pub fn validate(&self) -> Result<()> {
        Self::new(self.max_bits, self.width).map(|_| ())
    }

    /// Number of codes the dictionary can hold.
    pub fn capacity(&self) -> u32 {
        1 << self.max_bits
    }

    /// Largest code that can be assigned.
    pub fn max_code(&self) -> u32 {
        self.capacity() - 1
    }

    /// Width of the `index`-th emitted code (0-based).
    ///
    /// The encoder learns one entry per emitted code, so before emission
    /// `index` the largest possible code is `255 + index`, capped by the
    /// capacity. The decoder derives the same value from its own count.
    pub fn code_width(&self, index: u64) -> u8 {
        match self.width {
            CodeWidth::Fixed => self.max_bits,
            CodeWidth::Variable => {
                let largest = (255 + index).min(self.max_code() as u64);
                let bits = (u64::BITS - largest.leading_zeros()) as u8;
                bits.clamp(MIN_BITS, self.max_bits)
            }
        }
    }
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}
