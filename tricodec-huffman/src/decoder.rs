//! Huffman decoder (decompression).
//!
//! The decoder rebuilds a binary trie from the transmitted code table and
//! walks it one bit at a time.

use crate::code::CodeTable;
use crate::error::Result;
use crate::model::HuffmanModel;
use tricodec_core::{BitUnpacker, CodecError};

#[derive(Debug, Clone, Copy, Default)]
struct TrieNode {
    children: [Option<usize>; 2],
    symbol: Option<u8>,
}

/// Prefix-code decoder built from a [`CodeTable`].
#[derive(Debug, Clone)]
pub struct HuffmanDecoder {
    nodes: Vec<TrieNode>,
}

impl HuffmanDecoder {
    /// Build the decoding trie.
    ///
    /// Fails if a code is empty or if the table is not prefix-free.
    pub fn new(codes: &CodeTable) -> Result<Self> {
        let mut nodes = vec![TrieNode::default()];

        for (symbol, code) in codes.iter() {
            if code.is_empty() {
                return Err(CodecError::DegenerateAlphabet { symbol });
            }

            let mut current = 0;
            for &bit in code.bits() {
                if nodes[current].symbol.is_some() {
                    return Err(CodecError::model_mismatch(format!(
                        "code table is not prefix-free at symbol {symbol}"
                    )));
                }
                current = match nodes[current].children[bit as usize] {
                    Some(next) => next,
                    None => {
                        let next = nodes.len();
                        nodes.push(TrieNode::default());
                        nodes[current].children[bit as usize] = Some(next);
                        next
                    }
                };
            }

            let leaf = &mut nodes[current];
            if leaf.symbol.is_some() || leaf.children.iter().any(Option::is_some) {
                return Err(CodecError::model_mismatch(format!(
                    "code table is not prefix-free at symbol {symbol}"
                )));
            }
            leaf.symbol = Some(symbol);
        }

        Ok(Self { nodes })
    }

    /// Decode the payload bits of `packed`.
    ///
    /// The payload length is the packed length minus `model.padding_bits`.
    pub fn decode(&self, packed: &[u8], model: &HuffmanModel) -> Result<Vec<u8>> {
        if model.padding_bits > 7 {
            return Err(CodecError::model_mismatch(format!(
                "padding of {} bits is not below a byte",
                model.padding_bits
            )));
        }
        let total_bits = packed.len() as u64 * 8;
        let payload = total_bits.checked_sub(model.padding_bits as u64).ok_or_else(|| {
            CodecError::model_mismatch("padding exceeds packed length")
        })?;

        let mut reader = BitUnpacker::new(packed, payload)?;
        // Every code is at least one bit long.
        let mut output = Vec::with_capacity(model.symbol_count.min(payload) as usize);
        let mut current = 0;

        while reader.remaining() > 0 {
            let bit = reader.read_bit()?;
            current = self.nodes[current].children[bit as usize]
                .ok_or_else(|| CodecError::invalid_code(bit as u32, reader.position()))?;

            if let Some(symbol) = self.nodes[current].symbol {
                output.push(symbol);
                current = 0;
            }
        }

        if current != 0 {
            return Err(CodecError::unexpected_eof(reader.position()));
        }
        if output.len() as u64 != model.symbol_count {
            return Err(CodecError::model_mismatch(format!(
                "decoded {} symbols, model expects {}",
                output.len(),
                model.symbol_count
            )));
        }

        Ok(output)
    }
}
