//! Codec dispatch shared by the commands.
//!
//! Each codec has its own model type; a run erases it into the rendered info
//! artifact and the serialised model so the driver can treat all three
//! alike.

use clap::ValueEnum;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tricodec_arith::{ArithmeticEncoder, ArithmeticModel};
use tricodec_core::{Codec, Diagnostic, EncodeResult, PackedBits, Result as CodecResult};
use tricodec_huffman::{HuffmanEncoder, HuffmanModel};
use tricodec_lzw::{LzwConfig, LzwEncoder, LzwModel};

/// Error type that can cross rayon worker threads.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Selectable compression scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CodecKind {
    /// Huffman prefix codes
    Huffman,
    /// Exact arithmetic coding
    Arithmetic,
    /// Lempel-Ziv-Welch dictionary coding
    Lzw,
}

impl CodecKind {
    /// Every codec, in report order.
    pub const ALL: [CodecKind; 3] = [CodecKind::Huffman, CodecKind::Arithmetic, CodecKind::Lzw];

    /// Name used in reports and artifact file names.
    pub fn name(self) -> &'static str {
        match self {
            CodecKind::Huffman => "huffman",
            CodecKind::Arithmetic => "arithmetic",
            CodecKind::Lzw => "lzw",
        }
    }

    /// `<name>_compressed.bin`
    pub fn packed_file(self, dir: &Path) -> PathBuf {
        dir.join(format!("{}_compressed.bin", self.name()))
    }

    /// `<name>_info.txt`
    pub fn info_file(self, dir: &Path) -> PathBuf {
        dir.join(format!("{}_info.txt", self.name()))
    }

    /// `<name>_model.json`
    pub fn model_file(self, dir: &Path) -> PathBuf {
        dir.join(format!("{}_model.json", self.name()))
    }
}

/// Settings applied to every run.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// LZW dictionary capacity and code width.
    pub lzw: LzwConfig,
    /// Decode after encoding and compare with the input.
    pub verify: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            lzw: LzwConfig::CLASSIC,
            verify: false,
        }
    }
}

/// Output of one codec run with the model type erased.
#[derive(Debug)]
pub struct CodecRun {
    /// Which codec produced this run.
    pub kind: CodecKind,
    /// Sizes, ratio and timing.
    pub result: EncodeResult,
    /// Packed bit stream.
    pub packed: PackedBits,
    /// Rendered info artifact.
    pub info: String,
    /// Pretty-printed JSON model.
    pub model_json: String,
    /// Round-trip outcome when verification was requested.
    pub verified: Option<bool>,
}

impl CodecRun {
    /// Write the packed stream, info text and model next to each other.
    pub fn write_artifacts(&self, dir: &Path) -> CodecResult<()> {
        fs::create_dir_all(dir)?;
        fs::write(self.kind.packed_file(dir), self.packed.bytes())?;
        fs::write(self.kind.info_file(dir), &self.info)?;
        fs::write(self.kind.model_file(dir), &self.model_json)?;
        tracing::info!(codec = self.kind.name(), dir = %dir.display(), "wrote artifacts");
        Ok(())
    }
}

/// Compress `input` with one codec.
pub fn run(kind: CodecKind, input: &[u8], options: &RunOptions) -> Result<CodecRun, BoxError> {
    match kind {
        CodecKind::Huffman => run_codec(kind, &HuffmanEncoder, input, options.verify),
        CodecKind::Arithmetic => run_codec(kind, &ArithmeticEncoder, input, options.verify),
        CodecKind::Lzw => run_codec(kind, &LzwEncoder::new(options.lzw)?, input, options.verify),
    }
}

/// Compress `input` with every codec in `kinds`, keeping each failure local
/// to its codec.
pub fn run_all(
    kinds: &[CodecKind],
    input: &[u8],
    options: &RunOptions,
    parallel: bool,
) -> Vec<(CodecKind, Result<CodecRun, BoxError>)> {
    if parallel {
        kinds
            .par_iter()
            .map(|&kind| (kind, run(kind, input, options)))
            .collect()
    } else {
        kinds
            .iter()
            .map(|&kind| (kind, run(kind, input, options)))
            .collect()
    }
}

/// Read back the packed stream and model JSON a run wrote for `kind`.
pub fn read_artifacts(kind: CodecKind, dir: &Path) -> CodecResult<(Vec<u8>, String)> {
    let packed = fs::read(kind.packed_file(dir))?;
    let model_json = fs::read_to_string(kind.model_file(dir))?;
    Ok((packed, model_json))
}

/// Decode a packed stream with the serialised model written by a run.
pub fn decode(kind: CodecKind, packed: &[u8], model_json: &str) -> Result<Vec<u8>, BoxError> {
    let decoded = match kind {
        CodecKind::Huffman => {
            let model: HuffmanModel = serde_json::from_str(model_json)?;
            tricodec_huffman::decompress(packed, &model)?
        }
        CodecKind::Arithmetic => {
            let model: ArithmeticModel = serde_json::from_str(model_json)?;
            tricodec_arith::decompress(packed, &model)?
        }
        CodecKind::Lzw => {
            let model: LzwModel = serde_json::from_str(model_json)?;
            tricodec_lzw::decompress(packed, &model)?
        }
    };
    Ok(decoded)
}

fn run_codec<C: Codec>(
    kind: CodecKind,
    codec: &C,
    input: &[u8],
    verify: bool,
) -> Result<CodecRun, BoxError> {
    let (encoded, result) = codec.compress_timed(input)?;
    tracing::info!(
        codec = codec.name(),
        original = result.original_size,
        compressed = result.compressed_size,
        elapsed_ms = result.elapsed_ms(),
        "compressed"
    );

    let verified = if verify {
        let decoded = codec.decode(encoded.packed.bytes(), &encoded.model)?;
        let ok = decoded == input;
        if !ok {
            tracing::warn!(codec = codec.name(), "round trip mismatch");
        }
        Some(ok)
    } else {
        None
    };

    Ok(CodecRun {
        kind,
        info: encoded.model.render(),
        model_json: serde_json::to_string_pretty(&encoded.model)?,
        packed: encoded.packed,
        result,
        verified,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tricodec_core::CodecError;

    #[test]
    fn test_run_all_sequential_and_parallel_agree() {
        let input = b"AAAAABBBCC";
        let options = RunOptions {
            verify: true,
            ..RunOptions::default()
        };
        let sequential = run_all(&CodecKind::ALL, input, &options, false);
        let parallel = run_all(&CodecKind::ALL, input, &options, true);

        for ((k1, a), (k2, b)) in sequential.into_iter().zip(parallel) {
            assert_eq!(k1, k2);
            let (a, b) = (a.unwrap(), b.unwrap());
            assert_eq!(a.packed, b.packed);
            assert_eq!(a.verified, Some(true));
            assert_eq!(a.result.codec, k1.name());
        }
    }

    #[test]
    fn test_decode_from_model_json() {
        let input = b"The quick brown fox jumps over the lazy dog.";
        for kind in CodecKind::ALL {
            let out = run(kind, input, &RunOptions::default()).unwrap();
            let decoded = decode(kind, out.packed.bytes(), &out.model_json).unwrap();
            assert_eq!(decoded, input, "{}", kind.name());
        }
    }

    #[test]
    fn test_empty_input_reports_zero_ratio() {
        for kind in CodecKind::ALL {
            let out = run(kind, b"", &RunOptions::default()).unwrap();
            assert_eq!(out.result.compression_ratio, 0.0);
            assert_eq!(out.result.compressed_size, 0);
        }
    }

    #[test]
    fn test_artifact_names() {
        let dir = Path::new("out");
        assert_eq!(CodecKind::Huffman.packed_file(dir), dir.join("huffman_compressed.bin"));
        assert_eq!(CodecKind::Arithmetic.info_file(dir), dir.join("arithmetic_info.txt"));
        assert_eq!(CodecKind::Lzw.model_file(dir), dir.join("lzw_model.json"));
    }

    #[test]
    fn test_write_artifacts() {
        let dir = std::env::temp_dir().join(format!("tricodec-runner-{}", std::process::id()));
        let out = run(CodecKind::Lzw, b"ZZZZ", &RunOptions::default()).unwrap();
        out.write_artifacts(&dir).unwrap();

        let packed = fs::read(CodecKind::Lzw.packed_file(&dir)).unwrap();
        assert_eq!(packed, out.packed.bytes());
        let info = fs::read_to_string(CodecKind::Lzw.info_file(&dir)).unwrap();
        assert!(info.starts_with("Max code: 256"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_artifacts_under_file_is_io_error() {
        let file = std::env::temp_dir().join(format!("tricodec-runner-file-{}", std::process::id()));
        fs::write(&file, b"not a directory").unwrap();
        let out = run(CodecKind::Huffman, b"ZZZZ", &RunOptions::default()).unwrap();

        let result = out.write_artifacts(&file.join("artifacts"));
        assert!(matches!(result, Err(CodecError::Io(_))));
        fs::remove_file(&file).unwrap();
    }

    #[test]
    fn test_read_missing_artifacts_is_io_error() {
        let dir = std::env::temp_dir().join("tricodec-runner-missing");
        match read_artifacts(CodecKind::Arithmetic, &dir) {
            Err(CodecError::Io(err)) => assert_eq!(err.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected I/O error, got {other:?}"),
        }
    }
}
