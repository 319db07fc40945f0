//! LZW encoder (compression).

use crate::config::LzwConfig;
use crate::decoder::LzwDecoder;
use crate::dictionary::LzwDictionary;
use crate::error::Result;
use crate::model::LzwModel;
use tricodec_core::{BitPacker, Codec, Encoded};

/// LZW encoder for compression.
#[derive(Debug, Clone, Copy, Default)]
pub struct LzwEncoder {
    config: LzwConfig,
}

impl LzwEncoder {
    /// Create a new LZW encoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &LzwConfig {
        &self.config
    }

    /// Produce the code sequence for `input` without packing it.
    ///
    /// # Algorithm
    ///
    /// 1. Seed the dictionary with the 256 single-byte strings
    /// 2. Extend the current string while `current + byte` is known
    /// 3. Otherwise emit the code for the current string, learn
    ///    `current + byte` unless the dictionary is frozen, and restart
    ///    from `byte`
    /// 4. Emit the code for the final string
    pub fn codes(&self, input: &[u8]) -> Result<(Vec<u32>, LzwDictionary)> {
        let mut dict = LzwDictionary::new(self.config)?;
        let mut codes = Vec::new();

        let Some((&first, rest)) = input.split_first() else {
            return Ok((codes, dict));
        };

        let mut current = first as u32;
        for &byte in rest {
            if let Some(code) = dict.find(current, byte) {
                current = code;
                continue;
            }
            codes.push(current);
            if !dict.is_frozen() {
                dict.insert(current, byte)?;
            }
            current = byte as u32;
        }
        codes.push(current);

        Ok((codes, dict))
    }
}

impl Codec for LzwEncoder {
    type Model = LzwModel;

    fn name(&self) -> &'static str {
        "lzw"
    }

    #[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
    fn encode(&self, input: &[u8]) -> Result<Encoded<LzwModel>> {
        let (codes, dict) = self.codes(input)?;

        let mut writer = BitPacker::with_capacity(codes.len() * self.config.max_bits as usize);
        for (index, &code) in codes.iter().enumerate() {
            writer.write_bits(code, self.config.code_width(index as u64))?;
        }
        let packed = writer.finish();

        tracing::debug!(
            codes = codes.len(),
            dictionary = dict.len(),
            frozen = dict.is_frozen(),
            bits = packed.bit_len(),
            "emitted lzw codes"
        );

        let model = LzwModel {
            config: self.config,
            symbol_count: input.len() as u64,
            code_count: codes.len() as u64,
            max_code: dict.next_code() - 1,
            codes,
        };
        Ok(Encoded { packed, model })
    }

    fn decode(&self, packed: &[u8], model: &LzwModel) -> Result<Vec<u8>> {
        LzwDecoder::new(model.config)?.decode(packed, model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CodeWidth;

    #[test]
    fn test_codes_tobeornot() {
        let (codes, dict) = LzwEncoder::default()
            .codes(b"TOBEORNOTTOBEORTOBEORNOT")
            .unwrap();
        let expected: Vec<u32> = vec![
            84, 79, 66, 69, 79, 82, 78, 79, 84, 256, 258, 260, 265, 259, 261, 263,
        ];
        assert_eq!(codes, expected);
        assert_eq!(dict.next_code(), 256 + codes.len() as u32 - 1);
    }

    #[test]
    fn test_codes_empty() {
        let (codes, dict) = LzwEncoder::default().codes(b"").unwrap();
        assert!(codes.is_empty());
        assert_eq!(dict.next_code(), 256);
    }

    #[test]
    fn test_encode_fixed_layout() {
        let encoded = LzwEncoder::default().encode(b"AB").unwrap();
        // 65 and 66 as two 12-bit codes.
        assert_eq!(encoded.packed.bit_len(), 24);
        assert_eq!(encoded.packed.bytes(), &[0x04, 0x10, 0x42]);
        assert_eq!(encoded.model.max_code, 256);
    }

    #[test]
    fn test_encode_variable_layout() {
        let encoder = LzwEncoder::new(LzwConfig::VARIABLE).unwrap();
        let encoded = encoder.encode(b"AB").unwrap();
        assert_eq!(encoded.packed.bit_len(), 18);
        assert_eq!(encoded.packed.len(), 3);
    }

    #[test]
    fn test_freeze_keeps_encoding() {
        let config = LzwConfig::new(9, CodeWidth::Fixed).unwrap();
        let encoder = LzwEncoder::new(config).unwrap();

        // Distinct pairs fill 256 slots quickly.
        let input: Vec<u8> = (0..2000u32).map(|i| (i * 7 % 251) as u8).collect();
        let (codes, dict) = encoder.codes(&input).unwrap();
        assert!(dict.is_frozen());
        assert_eq!(dict.next_code(), 512);
        assert!(codes.iter().all(|&c| c <= 511));
    }
}
