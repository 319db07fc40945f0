//! Serialisable LZW model and its info artifact.

use crate::config::LzwConfig;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use tricodec_core::Diagnostic;

/// Codes per line in the rendered code sequence.
const CODES_PER_LINE: usize = 20;

/// Everything the decoder needs besides the packed bytes.
///
/// The dictionary itself is not stored; the decoder rebuilds it from the
/// code stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LzwModel {
    /// Capacity and code width used by the encoder.
    pub config: LzwConfig,
    /// Number of bytes coded (the original length).
    pub symbol_count: u64,
    /// Number of codes in the packed stream.
    pub code_count: u64,
    /// Largest code assigned; 255 if nothing was learned.
    pub max_code: u32,
    /// Emitted code sequence, kept for the info artifact only.
    #[serde(skip)]
    pub codes: Vec<u32>,
}

impl LzwModel {
    /// Number of dictionary entries, single bytes included.
    pub fn dictionary_size(&self) -> u32 {
        self.max_code + 1
    }
}

impl Diagnostic for LzwModel {
    fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Max code: {}", self.max_code);
        let _ = writeln!(out, "Dictionary size: {}", self.dictionary_size());

        out.push_str("\n=== Code sequence ===\n");
        for line in self.codes.chunks(CODES_PER_LINE) {
            let row: Vec<String> = line.iter().map(|code| format!("{code:4}")).collect();
            let _ = writeln!(out, "{}", row.join(" "));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LzwEncoder;
    use tricodec_core::Codec;

    #[test]
    fn test_render() {
        let model = LzwEncoder::default().encode(b"AAAAABBBCC").unwrap().model;
        let text = model.render();
        assert!(text.starts_with("Max code: "));
        assert!(model.max_code >= 257);
        assert!(text.contains("=== Code sequence ===\n  65  256"));
    }

    #[test]
    fn test_render_wraps_lines() {
        let model = LzwModel {
            codes: (0..45).collect(),
            max_code: 255,
            ..LzwModel::default()
        };
        let text = model.render();
        let sequence = text.split("=== Code sequence ===\n").nth(1).unwrap();
        let lines: Vec<&str> = sequence.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].split_whitespace().count(), 20);
        assert_eq!(lines[2].split_whitespace().count(), 5);
        assert!(lines[2].starts_with("  40"));
    }

    #[test]
    fn test_render_empty() {
        let model = LzwModel {
            max_code: 255,
            ..LzwModel::default()
        };
        assert_eq!(
            model.render(),
            "Max code: 255\nDictionary size: 256\n\n=== Code sequence ===\n"
        );
    }

    #[test]
    fn test_json_skips_codes() {
        let model = LzwEncoder::default().encode(b"lzw lzw lzw").unwrap().model;
        let json = serde_json::to_string(&model).unwrap();
        assert!(!json.contains("codes\""));
        let back: LzwModel = serde_json::from_str(&json).unwrap();
        assert!(back.codes.is_empty());
        assert_eq!(back.code_count, model.code_count);
        assert_eq!(back.config, model.config);
    }
}
