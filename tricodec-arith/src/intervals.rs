//! Cumulative probability intervals.
//!
//! Each present symbol owns the half-open sub-interval
//! `[cum_low / total, cum_high / total)` of `[0, 1)`. Symbols are laid out
//! in ascending byte order, so the intervals are disjoint, contiguous and
//! cover `[0, 1)` exactly. The bounds are kept as integers; nothing here is
//! ever rounded.

use crate::error::Result;
use tricodec_core::{CodecError, FrequencyTable};

/// Interval owned by one symbol, in units of `1 / total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolInterval {
    /// Byte value.
    pub symbol: u8,
    /// Inclusive lower bound.
    pub cum_low: u64,
    /// Exclusive upper bound.
    pub cum_high: u64,
}

impl SymbolInterval {
    /// Width of the interval, the symbol's count.
    pub fn count(&self) -> u64 {
        self.cum_high - self.cum_low
    }
}

/// Cumulative interval table derived from a [`FrequencyTable`].
#[derive(Debug, Clone)]
pub struct CumulativeIntervalTable {
    intervals: Vec<SymbolInterval>,
    index: [Option<u8>; 256],
    total: u64,
}

impl CumulativeIntervalTable {
    /// Lay out the intervals in ascending symbol order.
    ///
    /// Fails with [`CodecError::ModelMismatch`] if the counts sum past
    /// `u64::MAX`, which only a hand-edited model can produce.
    pub fn new(frequencies: &FrequencyTable) -> Result<Self> {
        let mut intervals = Vec::with_capacity(frequencies.distinct());
        let mut index = [None; 256];
        let mut cursor = 0u64;

        for (symbol, count) in frequencies.iter() {
            let cum_high = cursor.checked_add(count).ok_or_else(|| {
                CodecError::model_mismatch(format!(
                    "frequency total overflows at symbol {symbol}"
                ))
            })?;
            index[symbol as usize] = Some(intervals.len() as u8);
            intervals.push(SymbolInterval {
                symbol,
                cum_low: cursor,
                cum_high,
            });
            cursor = cum_high;
        }

        Ok(Self {
            intervals,
            index,
            total: cursor,
        })
    }

    /// Sum of all counts (the common denominator).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// True if the table has no symbols.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Interval of `symbol`, if present.
    pub fn get(&self, symbol: u8) -> Option<&SymbolInterval> {
        self.index[symbol as usize].map(|i| &self.intervals[i as usize])
    }

    /// Interval containing the scaled position `target` in `[0, total)`.
    pub fn find(&self, target: u64) -> Option<&SymbolInterval> {
        let i = self.intervals.partition_point(|iv| iv.cum_high <= target);
        self.intervals.get(i).filter(|iv| iv.cum_low <= target)
    }

    /// Iterate intervals in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = &SymbolInterval> + '_ {
        self.intervals.iter()
    }
}
