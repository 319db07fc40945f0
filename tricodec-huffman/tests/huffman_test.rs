//! Huffman integration tests.

use proptest::prelude::*;
use tricodec_core::{Codec, CodecError, Diagnostic};
use tricodec_huffman::{HuffmanEncoder, HuffmanError, HuffmanModel, compress, decompress};

#[test]
fn test_scenario_aaaaabbbcc() {
    let original = b"AAAAABBBCC";
    let encoded = compress(original).expect("compression failed");
    let model = &encoded.model;

    assert_eq!(model.frequencies.count(b'A'), 5);
    assert_eq!(model.frequencies.count(b'B'), 3);
    assert_eq!(model.frequencies.count(b'C'), 2);

    let a = model.codes.get(b'A').unwrap().len();
    let b = model.codes.get(b'B').unwrap().len();
    let c = model.codes.get(b'C').unwrap().len();
    assert_eq!(a, 1);
    assert!(b > a && c > a);
    assert!(encoded.packed.bit_len() <= 20);

    let decoded = decompress(encoded.packed.bytes(), model).expect("decompression failed");
    assert_eq!(decoded, original);
}

#[test]
fn test_single_symbol_zzzz() {
    let (encoded, result) = HuffmanEncoder.compress_timed(b"ZZZZ").expect("compression failed");
    assert!(!encoded.packed.is_empty());
    assert_eq!(result.compressed_size, 1);

    let decoded = decompress(encoded.packed.bytes(), &encoded.model).expect("decompression failed");
    assert_eq!(decoded, b"ZZZZ");
}

#[test]
fn test_empty_ratio_is_zero() {
    let (encoded, result) = HuffmanEncoder.compress_timed(b"").expect("compression failed");
    assert_eq!(result.original_size, 0);
    assert_eq!(result.compressed_size, 0);
    assert_eq!(result.compression_ratio, 0.0);
    assert_eq!(encoded.model.render(), "=== Frequency table ===\n\n=== Huffman code table ===\n");
}

#[test]
fn test_model_survives_json() {
    let original = b"The quick brown fox jumps over the lazy dog. ".repeat(20);
    let encoded = compress(&original).expect("compression failed");

    let json = serde_json::to_string_pretty(&encoded.model).expect("serialize failed");
    let model: HuffmanModel = serde_json::from_str(&json).expect("deserialize failed");

    let decoded = decompress(encoded.packed.bytes(), &model).expect("decompression failed");
    assert_eq!(decoded, original);
}

#[test]
fn test_empty_code_is_degenerate() {
    let json = r#"{"frequencies":{"90":4},"codes":{"90":""},"symbol_count":4,"padding_bits":0}"#;
    let model: HuffmanModel = serde_json::from_str(json).expect("deserialize failed");
    let result = decompress(&[], &model);
    assert!(matches!(
        result,
        Err(CodecError::DegenerateAlphabet { symbol: 90 })
    ));
}

#[test]
fn test_huge_symbol_count_in_model() {
    let encoded = compress(b"AAAAABBBCC").expect("compression failed");
    let mut value = serde_json::to_value(&encoded.model).expect("serialize failed");
    value["symbol_count"] = serde_json::json!(u64::MAX);
    let model: HuffmanModel = serde_json::from_value(value).expect("deserialize failed");

    let result = decompress(encoded.packed.bytes(), &model);
    assert!(matches!(result, Err(HuffmanError::ModelMismatch { .. })));
}

#[test]
fn test_text_compresses() {
    let original = b"This is a test of compression! ".repeat(10);
    let (_, result) = HuffmanEncoder.compress_timed(&original).expect("compression failed");
    assert!(result.compression_ratio < 0.7);
}

proptest! {
    #[test]
    fn prop_prefix_free(input in prop::collection::vec(any::<u8>(), 1..512)) {
        let encoded = compress(&input).unwrap();
        prop_assert!(encoded.model.codes.is_prefix_free());
        prop_assert!(encoded.model.codes.iter().all(|(_, code)| !code.is_empty()));
    }

    #[test]
    fn prop_roundtrip(input in prop::collection::vec(any::<u8>(), 0..1024)) {
        let encoded = compress(&input).unwrap();
        let decoded = decompress(encoded.packed.bytes(), &encoded.model).unwrap();
        prop_assert_eq!(decoded, input);
    }

    #[test]
    fn prop_skewed_roundtrip(input in prop::collection::vec(0..4u8, 1..2048)) {
        let encoded = compress(&input).unwrap();
        prop_assert!(encoded.packed.len() <= input.len().div_ceil(4) + 1);
        let decoded = decompress(encoded.packed.bytes(), &encoded.model).unwrap();
        prop_assert_eq!(decoded, input);
    }
}
