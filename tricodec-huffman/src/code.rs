//! Huffman code table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tricodec_core::{CodecError, FrequencyTable};

/// A variable-length code, stored most significant bit first.
///
/// Serialised as a string of `'0'` and `'1'` characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HuffmanCode {
    bits: Vec<bool>,
}

impl HuffmanCode {
    /// Wrap a bit path.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Code bits, root first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Code length in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True for the zero-length code.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// True if `self` is a prefix of `other` (or equal to it).
    pub fn is_prefix_of(&self, other: &HuffmanCode) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for HuffmanCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl From<HuffmanCode> for String {
    fn from(code: HuffmanCode) -> Self {
        code.to_string()
    }
}

impl TryFrom<String> for HuffmanCode {
    type Error = CodecError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        let bits = text
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(CodecError::model_mismatch(format!(
                    "invalid character {other:?} in Huffman code"
                ))),
            })
            .collect::<Result<Vec<bool>, CodecError>>()?;
        Ok(Self { bits })
    }
}

/// Mapping from symbol to its Huffman code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeTable {
    codes: BTreeMap<u8, HuffmanCode>,
}

impl CodeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, symbol: u8, code: HuffmanCode) {
        self.codes.insert(symbol, code);
    }

    /// Code for `symbol`, if present.
    pub fn get(&self, symbol: u8) -> Option<&HuffmanCode> {
        self.codes.get(&symbol)
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(symbol, code)` in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &HuffmanCode)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Entries sorted by ascending code length, ties by symbol.
    pub fn by_code_length(&self) -> Vec<(u8, &HuffmanCode)> {
        let mut entries: Vec<(u8, &HuffmanCode)> = self.iter().collect();
        entries.sort_by_key(|&(symbol, code)| (code.len(), symbol));
        entries
    }

    /// Dense lookup indexed by symbol value.
    pub fn lookup(&self) -> Vec<Option<&HuffmanCode>> {
        let mut dense = vec![None; 256];
        for (symbol, code) in self.iter() {
            dense[symbol as usize] = Some(code);
        }
        dense
    }

    /// Check that no code is a prefix of another symbol's code.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&HuffmanCode> = self.codes.values().collect();
        // After lexicographic sorting a prefix always sorts directly before
        // some code it prefixes, so adjacent pairs suffice.
        codes.sort_by(|a, b| a.bits.cmp(&b.bits));
        codes.windows(2).all(|pair| !pair[0].is_prefix_of(pair[1]))
    }

    /// Number of payload bits needed to code an input with these counts.
    pub fn encoded_bits(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .iter()
            .map(|(symbol, count)| self.get(symbol).map_or(0, |code| code.len() as u64) * count)
            .sum()
    }
}
