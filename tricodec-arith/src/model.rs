//! Serialisable arithmetic-coding model and its info artifact.

use crate::intervals::CumulativeIntervalTable;
use crate::state::decimal;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use tricodec_core::{Diagnostic, FrequencyTable, printable};

/// Digits shown for each symbol interval.
const INTERVAL_DIGITS: u32 = 10;
/// Digits shown for the final interval.
pub(crate) const FINAL_DIGITS: u32 = 20;

/// Final narrowed interval, rendered for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalInterval {
    /// Lower bound, truncated to a fixed number of decimals.
    pub low: String,
    /// Upper bound, truncated to a fixed number of decimals.
    pub high: String,
}

/// Everything the decoder needs besides the packed bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArithmeticModel {
    /// Symbol counts; the cumulative intervals are derived from these.
    pub frequencies: FrequencyTable,
    /// Number of symbols coded (the original length).
    pub symbol_count: u64,
    /// Number of payload bits before padding.
    pub code_bits: u64,
    /// Display copy of the final interval.
    #[serde(default)]
    pub final_interval: Option<FinalInterval>,
}

impl Diagnostic for ArithmeticModel {
    fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Symbol interval table ===\n");
        match CumulativeIntervalTable::new(&self.frequencies) {
            Ok(table) => {
                let total = BigUint::from(table.total());
                for iv in table.iter() {
                    let _ = writeln!(
                        out,
                        "byte {:3} (char: {}): interval = [{}, {})",
                        iv.symbol,
                        printable(iv.symbol),
                        decimal(&BigUint::from(iv.cum_low), &total, INTERVAL_DIGITS),
                        decimal(&BigUint::from(iv.cum_high), &total, INTERVAL_DIGITS),
                    );
                }
            }
            Err(err) => {
                let _ = writeln!(out, "unavailable: {err}");
            }
        }

        if let Some(interval) = &self.final_interval {
            let _ = writeln!(out, "\nFinal interval: [{}, {})", interval.low, interval.high);
        }
        let _ = writeln!(out, "Code bits: {}", self.code_bits);

        out
    }
}
