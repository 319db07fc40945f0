//! Symbol frequency model.
//!
//! Both entropy coders (Huffman and arithmetic) derive their model from a
//! [`FrequencyTable`]: the occurrence count of every byte value present in
//! the input.
//!
//! # Example
//!
//! ```
//! use tricodec_core::FrequencyTable;
//!
//! let table = FrequencyTable::from_bytes(b"AAAAABBBCC");
//! assert_eq!(table.count(b'A'), 5);
//! assert_eq!(table.count(b'Z'), 0);
//! assert_eq!(table.total(), 10);
//! assert_eq!(table.distinct(), 3);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Occurrence counts for every byte value present in an input.
///
/// Only symbols with a non-zero count are stored. Iteration is always in
/// ascending symbol order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: BTreeMap<u8, u64>,
}

impl FrequencyTable {
    /// Count every byte of `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut raw = [0u64; 256];
        for &byte in data {
            raw[byte as usize] += 1;
        }

        let counts = raw
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
            .collect();

        Self { counts }
    }

    /// Build a table from explicit `(symbol, count)` pairs.
    ///
    /// Zero counts are dropped; repeated symbols accumulate, saturating at
    /// `u64::MAX`.
    pub fn from_counts(pairs: impl IntoIterator<Item = (u8, u64)>) -> Self {
        let mut counts = BTreeMap::new();
        for (symbol, count) in pairs {
            if count > 0 {
                let entry = counts.entry(symbol).or_insert(0u64);
                *entry = entry.saturating_add(count);
            }
        }
        Self { counts }
    }

    /// Occurrence count of `symbol` (0 if absent).
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Sum of all counts, equal to the length of the counted input.
    ///
    /// Saturates at `u64::MAX`; use [`checked_total`](Self::checked_total)
    /// for tables that did not come from [`from_bytes`](Self::from_bytes).
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |sum, &count| sum.saturating_add(count))
    }

    /// Sum of all counts, or `None` if it does not fit in a `u64`.
    pub fn checked_total(&self) -> Option<u64> {
        self.counts
            .values()
            .try_fold(0u64, |sum, &count| sum.checked_add(count))
    }

    /// Number of distinct symbols present.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// True if no symbol is present (the input was empty).
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(symbol, count)` in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    /// Entries sorted by descending count, ties by ascending symbol.
    pub fn by_descending_frequency(&self) -> Vec<(u8, u64)> {
        let mut entries: Vec<(u8, u64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }
}

/// Render a byte the way the info artifacts do: printable ASCII as itself,
/// everything else as a blank.
pub fn printable(symbol: u8) -> char {
    if (32..=126).contains(&symbol) {
        symbol as char
    } else {
        ' '
    }
}
