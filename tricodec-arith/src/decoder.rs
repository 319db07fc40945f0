//! Arithmetic decoder (decompression).
//!
//! The packed bytes are read as the fraction `v = V / 2^K` with
//! `K = 8 * len`; trailing zero padding leaves the value unchanged. Rather
//! than tracking `low` and `width` separately, the decoder keeps the offset
//! of `v` inside the current interval and the interval width, both scaled by
//! `T^n * 2^K`:
//!
//! ```text
//! R = (v - low) * T^n * 2^K        S = width * T^n * 2^K
//! ```
//!
//! The next symbol is the one whose `[cl, ch)` contains `floor(R * T / S)`,
//! after which `R <- R * T - S * cl` and `S <- S * (ch - cl)`. The invariant
//! `0 <= R < S` holds throughout.

use crate::error::Result;
use crate::intervals::CumulativeIntervalTable;
use crate::model::ArithmeticModel;
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use tricodec_core::CodecError;

/// Decoder bound to one [`ArithmeticModel`].
#[derive(Debug, Clone)]
pub struct ArithmeticDecoder {
    table: CumulativeIntervalTable,
    symbol_count: u64,
    code_bits: u64,
}

impl ArithmeticDecoder {
    /// Rebuild the interval table from the model and validate it.
    pub fn new(model: &ArithmeticModel) -> Result<Self> {
        let table = CumulativeIntervalTable::new(&model.frequencies)?;
        if table.total() != model.symbol_count {
            return Err(CodecError::model_mismatch(format!(
                "frequency total {} differs from symbol count {}",
                table.total(),
                model.symbol_count
            )));
        }
        Ok(Self {
            table,
            symbol_count: model.symbol_count,
            code_bits: model.code_bits,
        })
    }

    /// Decode `symbol_count` symbols from `packed`.
    pub fn decode(&self, packed: &[u8]) -> Result<Vec<u8>> {
        if self.symbol_count == 0 {
            return Ok(Vec::new());
        }
        let available = packed.len() as u64 * 8;
        if self.code_bits > available {
            return Err(CodecError::model_mismatch(format!(
                "model expects {} code bits, stream holds {available}",
                self.code_bits
            )));
        }

        let total = self.table.total();
        let mut offset = BigUint::from_bytes_be(packed);
        let mut scale = BigUint::from(1u32) << available;

        // Capacity hint only; `symbol_count` comes from an untrusted model.
        let mut output = Vec::with_capacity(self.symbol_count.min(available) as usize);
        for step in 0..self.symbol_count {
            let target = (&offset * total / &scale)
                .to_u64()
                .ok_or_else(|| CodecError::invalid_code(u32::MAX, step))?;
            let interval = self
                .table
                .find(target)
                .ok_or_else(|| CodecError::invalid_code(target as u32, step))?;

            offset = offset * total - &scale * interval.cum_low;
            scale *= interval.count();
            output.push(interval.symbol);
        }

        tracing::debug!(symbols = output.len(), "decoded arithmetic stream");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArithmeticEncoder;
    use tricodec_core::{Codec, FrequencyTable};

    #[test]
    fn test_decode_roundtrip() {
        let input = b"hello arithmetic coding";
        let encoded = ArithmeticEncoder.encode(input).unwrap();
        let decoder = ArithmeticDecoder::new(&encoded.model).unwrap();
        assert_eq!(decoder.decode(encoded.packed.bytes()).unwrap(), input);
    }

    #[test]
    fn test_decode_empty() {
        let decoder = ArithmeticDecoder::new(&ArithmeticModel::default()).unwrap();
        assert!(decoder.decode(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_count_mismatch() {
        let model = ArithmeticModel {
            frequencies: FrequencyTable::from_bytes(b"abc"),
            symbol_count: 4,
            code_bits: 8,
            final_interval: None,
        };
        assert!(matches!(
            ArithmeticDecoder::new(&model),
            Err(CodecError::ModelMismatch { .. })
        ));
    }

    #[test]
    fn test_overflowing_frequencies() {
        let model = ArithmeticModel {
            frequencies: FrequencyTable::from_counts([(b'A', u64::MAX), (b'B', 1)]),
            symbol_count: u64::MAX,
            code_bits: 8,
            final_interval: None,
        };
        assert!(matches!(
            ArithmeticDecoder::new(&model),
            Err(CodecError::ModelMismatch { .. })
        ));
    }

    #[test]
    fn test_code_bits_exceed_stream() {
        let mut encoded = ArithmeticEncoder.encode(b"abcabc").unwrap();
        encoded.model.code_bits = 64;
        let result = ArithmeticEncoder.decode(encoded.packed.bytes(), &encoded.model);
        assert!(matches!(result, Err(CodecError::ModelMismatch { .. })));
    }
}
