//! Serialisable Huffman model and its info artifact.

use crate::code::CodeTable;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use tricodec_core::{Diagnostic, FrequencyTable, printable};

/// Everything the decoder needs besides the packed bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuffmanModel {
    /// Symbol counts of the original input.
    pub frequencies: FrequencyTable,
    /// Code assigned to each symbol.
    pub codes: CodeTable,
    /// Number of symbols coded (the original length).
    pub symbol_count: u64,
    /// Zero bits appended after the last code.
    pub padding_bits: u8,
}

impl Diagnostic for HuffmanModel {
    fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("=== Frequency table ===\n");
        for (symbol, count) in self.frequencies.by_descending_frequency() {
            let _ = writeln!(
                out,
                "byte {symbol:3} (char: {}): freq = {count}",
                printable(symbol)
            );
        }

        out.push_str("\n=== Huffman code table ===\n");
        for (symbol, code) in self.codes.by_code_length() {
            let _ = writeln!(
                out,
                "byte {symbol:3} (char: {}): code = {code}",
                printable(symbol)
            );
        }

        out
    }
}
