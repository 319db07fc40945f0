//! Compress command implementation.

use crate::runner::{CodecKind, CodecRun, RunOptions, run_all};
use crate::utils::print_report;
use std::fs;
use std::path::{Path, PathBuf};
use tricodec_lzw::LzwConfig;

/// Options for the compress command.
pub struct CompressOptions {
    pub output: PathBuf,
    pub codecs: Vec<CodecKind>,
    pub lzw: LzwConfig,
    pub parallel: bool,
    pub verify: bool,
    pub json: bool,
    pub artifacts: bool,
}

/// Selected codecs in report order, without duplicates. Empty means all.
fn selected(codecs: &[CodecKind]) -> Vec<CodecKind> {
    if codecs.is_empty() {
        return CodecKind::ALL.to_vec();
    }
    CodecKind::ALL
        .into_iter()
        .filter(|kind| codecs.contains(kind))
        .collect()
}

pub fn cmd_compress(input: &Path, options: &CompressOptions) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    tracing::info!(input = %input.display(), bytes = data.len(), "read input");

    let kinds = selected(&options.codecs);
    let run_options = RunOptions {
        lzw: options.lzw,
        verify: options.verify,
    };

    let mut runs: Vec<CodecRun> = Vec::with_capacity(kinds.len());
    let mut failed = Vec::new();
    for (kind, outcome) in run_all(&kinds, &data, &run_options, options.parallel) {
        match outcome {
            Ok(run) => {
                if options.artifacts {
                    run.write_artifacts(&options.output)?;
                }
                runs.push(run);
            }
            Err(e) => {
                tracing::error!(codec = kind.name(), error = %e, "codec failed");
                eprintln!("Error: {}: {}", kind.name(), e);
                failed.push(kind.name());
            }
        }
    }

    print_report(&runs, options.json)?;

    let mismatched: Vec<&str> = runs
        .iter()
        .filter(|run| run.verified == Some(false))
        .map(|run| run.kind.name())
        .collect();
    if !mismatched.is_empty() {
        return Err(format!("round trip failed for {}", mismatched.join(", ")).into());
    }
    if !failed.is_empty() {
        return Err(format!("compression failed for {}", failed.join(", ")).into());
    }
    Ok(())
}
