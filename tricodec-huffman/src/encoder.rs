//! Huffman encoder (compression).

use crate::decoder::HuffmanDecoder;
use crate::error::Result;
use crate::model::HuffmanModel;
use crate::tree::HuffmanTree;
use tricodec_core::{BitPacker, Codec, CodecError, Encoded, FrequencyTable};

/// Static Huffman coder.
///
/// The model is built from the whole input, so the code table has to travel
/// with the packed bytes (see [`HuffmanModel`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanEncoder;

impl HuffmanEncoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self
    }
}

impl Codec for HuffmanEncoder {
    type Model = HuffmanModel;

    fn name(&self) -> &'static str {
        "huffman"
    }

    /// Encode `input`.
    ///
    /// # Algorithm
    ///
    /// 1. Count symbol frequencies
    /// 2. Build the tree by repeatedly merging the two lightest nodes
    /// 3. Read each symbol's code off its root-to-leaf path
    /// 4. Concatenate the codes in input order and pad to a byte boundary
    #[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
    fn encode(&self, input: &[u8]) -> Result<Encoded<HuffmanModel>> {
        let frequencies = FrequencyTable::from_bytes(input);

        let Some(tree) = HuffmanTree::build(&frequencies) else {
            tracing::debug!("empty input, no tree built");
            return Ok(Encoded {
                packed: BitPacker::new().finish(),
                model: HuffmanModel::default(),
            });
        };

        let codes = tree.code_table();
        let total_bits = codes.encoded_bits(&frequencies);
        tracing::debug!(
            distinct = frequencies.distinct(),
            nodes = tree.len(),
            depth = tree.depth(),
            total_bits,
            "built Huffman tree"
        );

        let lookup = codes.lookup();
        let mut packer = BitPacker::with_capacity(total_bits as usize);
        for &byte in input {
            let code = lookup[byte as usize].ok_or_else(|| {
                CodecError::model_mismatch(format!("no code for byte {byte}"))
            })?;
            for &bit in code.bits() {
                packer.write_bit(bit);
            }
        }

        let packed = packer.finish();
        let model = HuffmanModel {
            frequencies,
            padding_bits: packed.padding_bits(),
            symbol_count: input.len() as u64,
            codes,
        };

        Ok(Encoded { packed, model })
    }

    fn decode(&self, packed: &[u8], model: &HuffmanModel) -> Result<Vec<u8>> {
        HuffmanDecoder::new(&model.codes)?.decode(packed, model)
    }
}
