//! LZW decoder (decompression).
//!
//! The decoder rebuilds the dictionary one step behind the encoder: each
//! code after the first teaches it `previous string + first byte of this
//! string`. The only code it can see before learning it is the one about to
//! be assigned (the `KwKwK` case), whose first byte equals the previous
//! string's first byte.

use crate::config::LzwConfig;
use crate::dictionary::LzwDictionary;
use crate::error::Result;
use crate::model::LzwModel;
use tricodec_core::{BitUnpacker, CodecError};

/// LZW decoder for decompression.
#[derive(Debug)]
pub struct LzwDecoder {
    dict: LzwDictionary,
}

impl LzwDecoder {
    /// Create a new LZW decoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        Ok(Self {
            dict: LzwDictionary::new(config)?,
        })
    }

    /// Decode `packed` and check the result against `model`.
    ///
    /// Codes are read until fewer bits remain than the next code width.
    /// Padding is shorter than a byte and codes are at least 9 bits, so the
    /// padding is never mistaken for a code.
    pub fn decode(mut self, packed: &[u8], model: &LzwModel) -> Result<Vec<u8>> {
        let config = *self.dict.config();
        let mut reader = BitUnpacker::whole(packed);
        // Capacity hint only; `symbol_count` comes from an untrusted model.
        let hint = model.symbol_count.min(packed.len() as u64 * 8);
        let mut output = Vec::with_capacity(hint as usize);
        let mut prev: Option<u32> = None;
        let mut index = 0u64;

        loop {
            let width = config.code_width(index);
            if reader.remaining() < width as u64 {
                break;
            }
            let position = reader.position();
            let code = reader.read_bits(width)?;

            let first = if self.dict.contains(code) {
                self.dict.first_byte(code)?
            } else {
                match prev {
                    Some(p) if code == self.dict.next_code() && !self.dict.is_frozen() => {
                        self.dict.first_byte(p)?
                    }
                    _ => return Err(CodecError::invalid_code(code, position)),
                }
            };

            if let Some(p) = prev
                && !self.dict.is_frozen()
            {
                self.dict.push(p, first)?;
            }

            self.dict.write_string(code, &mut output)?;
            prev = Some(code);
            index += 1;
        }

        if index != model.code_count {
            return Err(CodecError::model_mismatch(format!(
                "read {index} codes, model lists {}",
                model.code_count
            )));
        }
        if output.len() as u64 != model.symbol_count {
            return Err(CodecError::model_mismatch(format!(
                "decoded {} bytes, model expects {}",
                output.len(),
                model.symbol_count
            )));
        }

        tracing::debug!(codes = index, bytes = output.len(), "decoded lzw stream");
        Ok(output)
    }
}
