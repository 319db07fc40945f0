//! Report formatting for the CLI.

use crate::runner::CodecRun;
use serde::Serialize;
use tricodec_core::EncodeResult;

/// JSON shape of one report entry.
#[derive(Debug, Serialize)]
struct ReportJson<'a> {
    #[serde(flatten)]
    result: &'a EncodeResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    verified: Option<bool>,
}

/// Render the human-readable report: one block per codec.
pub fn format_report(runs: &[CodecRun]) -> String {
    let mut out = String::new();
    for run in runs {
        out.push_str(&run.result.to_string());
        out.push('\n');
        if let Some(ok) = run.verified {
            out.push_str(if ok {
                "  Verified:        yes\n"
            } else {
                "  Verified:        NO\n"
            });
        }
        out.push('\n');
    }
    out
}

/// Render the report as a JSON array.
pub fn format_report_json(runs: &[CodecRun]) -> serde_json::Result<String> {
    let entries: Vec<ReportJson<'_>> = runs
        .iter()
        .map(|run| ReportJson {
            result: &run.result,
            verified: run.verified,
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}

/// Print the report to stdout.
pub fn print_report(runs: &[CodecRun], json: bool) -> serde_json::Result<()> {
    if json {
        println!("{}", format_report_json(runs)?);
    } else {
        print!("{}", format_report(runs));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{CodecKind, RunOptions, run};

    fn sample_runs(verify: bool) -> Vec<CodecRun> {
        let options = RunOptions {
            verify,
            ..RunOptions::default()
        };
        CodecKind::ALL
            .iter()
            .map(|&kind| run(kind, b"AAAAABBBCC", &options).unwrap())
            .collect()
    }

    #[test]
    fn test_human_report() {
        let text = format_report(&sample_runs(false));
        assert!(text.starts_with("huffman:\n  Original size:   10 bytes\n"));
        assert!(text.contains("arithmetic:"));
        assert!(text.contains("lzw:"));
        assert!(!text.contains("Verified"));
    }

    #[test]
    fn test_human_report_verified() {
        let text = format_report(&sample_runs(true));
        assert_eq!(text.matches("Verified:        yes").count(), 3);
    }

    #[test]
    fn test_json_report() {
        let json = format_report_json(&sample_runs(true)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["codec"], "huffman");
        assert_eq!(entries[0]["original_size"], 10);
        assert_eq!(entries[2]["verified"], true);
        assert!(entries[1]["elapsed_ms"].is_f64());
    }
}
