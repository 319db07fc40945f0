//! Arithmetic encoder (compression).

use crate::decoder::ArithmeticDecoder;
use crate::error::Result;
use crate::intervals::CumulativeIntervalTable;
use crate::model::{ArithmeticModel, FINAL_DIGITS, FinalInterval};
use crate::state::{IntervalState, decimal};
use tricodec_core::{BitPacker, Codec, Encoded, FrequencyTable, pack_bits};

/// Static arithmetic coder with exact interval arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticEncoder;

impl ArithmeticEncoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self
    }

    /// Narrow `[0, 1)` by every symbol of `input` and return the final
    /// interval together with the table that produced it.
    pub fn narrow(&self, input: &[u8]) -> Result<(CumulativeIntervalTable, IntervalState)> {
        let table = CumulativeIntervalTable::new(&FrequencyTable::from_bytes(input))?;
        let state = IntervalState::narrow_all(&table, input)?;
        Ok((table, state))
    }
}

impl Codec for ArithmeticEncoder {
    type Model = ArithmeticModel;

    fn name(&self) -> &'static str {
        "arithmetic"
    }

    /// Encode `input`.
    ///
    /// # Algorithm
    ///
    /// 1. Assign each symbol a sub-interval of `[0, 1)` proportional to its
    ///    count, in ascending symbol order
    /// 2. Starting from `[0, 1)`, narrow to each input symbol's sub-interval
    /// 3. Emit the shortest binary fraction found inside the final interval
    #[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
    fn encode(&self, input: &[u8]) -> Result<Encoded<ArithmeticModel>> {
        let frequencies = FrequencyTable::from_bytes(input);
        if frequencies.is_empty() {
            tracing::debug!("empty input, no narrowing performed");
            return Ok(Encoded {
                packed: BitPacker::new().finish(),
                model: ArithmeticModel::default(),
            });
        }

        let table = CumulativeIntervalTable::new(&frequencies)?;
        let state = IntervalState::narrow_all(&table, input)?;
        let bits = state.to_bits();

        let denominator = state.denominator();
        tracing::debug!(
            distinct = table.len(),
            precision_bits = denominator.bits(),
            width_bits = state.width().bits(),
            code_bits = bits.len(),
            "narrowed interval"
        );

        let final_interval = FinalInterval {
            low: decimal(state.low(), &denominator, FINAL_DIGITS),
            high: decimal(&state.high(), &denominator, FINAL_DIGITS),
        };
        let model = ArithmeticModel {
            frequencies,
            symbol_count: input.len() as u64,
            code_bits: bits.len() as u64,
            final_interval: Some(final_interval),
        };

        Ok(Encoded {
            packed: pack_bits(bits),
            model,
        })
    }

    fn decode(&self, packed: &[u8], model: &ArithmeticModel) -> Result<Vec<u8>> {
        ArithmeticDecoder::new(model)?.decode(packed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn test_encode_empty() {
        let (encoded, result) = ArithmeticEncoder.compress_timed(b"").unwrap();
        assert!(encoded.packed.is_empty());
        assert!(encoded.model.frequencies.is_empty());
        assert!(encoded.model.final_interval.is_none());
        assert_eq!(result.compression_ratio, 0.0);
    }

    #[test]
    fn test_final_width_positive() {
        let (_, state) = ArithmeticEncoder.narrow(b"AAAAABBBCC").unwrap();
        assert!(!state.width().is_zero());
        assert_eq!(state.steps(), 10);
    }

    #[test]
    fn test_code_is_near_entropy() {
        // 5 A, 3 B, 2 C: ideal length is about 14.9 bits.
        let encoded = ArithmeticEncoder.encode(b"AAAAABBBCC").unwrap();
        assert!(encoded.model.code_bits <= 17);
        assert!(encoded.packed.len() <= 3);
    }

    #[test]
    fn test_single_symbol() {
        let encoded = ArithmeticEncoder.encode(b"ZZZZ").unwrap();
        assert_eq!(encoded.model.code_bits, 1);
        assert_eq!(encoded.packed.bytes(), &[0x00]);
        let decoded = ArithmeticEncoder.decode(encoded.packed.bytes(), &encoded.model).unwrap();
        assert_eq!(decoded, b"ZZZZ");
    }
}
