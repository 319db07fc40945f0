//! Decompress command implementation.

use crate::runner::{CodecKind, decode, read_artifacts};
use std::fs;
use std::path::{Path, PathBuf};

/// Decode the artifacts `compress` wrote for `codec` in `dir`.
///
/// Writes to `output`, or `<codec>_decompressed.bin` in `dir` when unset.
pub fn cmd_decompress(
    dir: &Path,
    codec: CodecKind,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (packed, model_json) = read_artifacts(codec, dir)?;

    let decoded = decode(codec, &packed, &model_json).map_err(|e| e as Box<dyn std::error::Error>)?;

    let output: PathBuf = match output {
        Some(path) => path.to_path_buf(),
        None => dir.join(format!("{}_decompressed.bin", codec.name())),
    };
    fs::write(&output, &decoded)?;

    println!(
        "{}: {} -> {} bytes, written to {}",
        codec.name(),
        packed.len(),
        decoded.len(),
        output.display()
    );
    Ok(())
}
