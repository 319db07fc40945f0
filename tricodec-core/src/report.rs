//! Per-codec result record consumed by reporting code.

use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// Outcome of one compression run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodeResult {
    /// Codec that produced this result.
    pub codec: &'static str,
    /// Input length in bytes.
    pub original_size: usize,
    /// Packed output length in bytes.
    pub compressed_size: usize,
    /// `compressed_size / original_size`, or 0 for empty input.
    pub compression_ratio: f64,
    /// Wall-clock time spent encoding.
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl EncodeResult {
    /// Build a result record, deriving the ratio.
    pub fn new(
        codec: &'static str,
        original_size: usize,
        compressed_size: usize,
        elapsed: Duration,
    ) -> Self {
        Self {
            codec,
            original_size,
            compressed_size,
            compression_ratio: compression_ratio(original_size, compressed_size),
            elapsed,
        }
    }

    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

impl fmt::Display for EncodeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.codec)?;
        writeln!(f, "  Original size:   {} bytes", self.original_size)?;
        writeln!(f, "  Compressed size: {} bytes", self.compressed_size)?;
        writeln!(
            f,
            "  Ratio:           {:.2}%",
            self.compression_ratio * 100.0
        )?;
        write!(f, "  Time:            {:.2}ms", self.elapsed_ms())
    }
}

/// `compressed / original`, defined as 0 when `original` is 0.
pub fn compression_ratio(original: usize, compressed: usize) -> f64 {
    if original == 0 {
        0.0
    } else {
        compressed as f64 / original as f64
    }
}

fn serialize_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_for_empty_input_is_zero() {
        assert_eq!(compression_ratio(0, 0), 0.0);
        assert_eq!(compression_ratio(0, 5), 0.0);
    }

    #[test]
    fn test_ratio() {
        let result = EncodeResult::new("huffman", 200, 50, Duration::from_millis(3));
        assert!((result.compression_ratio - 0.25).abs() < f64::EPSILON);
        assert!((result.elapsed_ms() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        let result = EncodeResult::new("lzw", 10, 8, Duration::from_micros(1500));
        let text = result.to_string();
        assert!(text.contains("lzw:"));
        assert!(text.contains("80.00%"));
        assert!(text.contains("1.50ms"));
    }
}
