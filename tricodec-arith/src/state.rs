//! Exact interval narrowing.
//!
//! The running interval is `[low, low + width)` with
//! `low = L / T^n` and `width = W / T^n` after `n` symbols, where `T` is the
//! table total. Narrowing by a symbol with bounds `[cl, ch)` is
//!
//! ```text
//! L <- L * T + W * cl
//! W <- W * (ch - cl)
//! ```
//!
//! which is the textbook `low + width * bound` update multiplied through by
//! the new denominator. `L` and `W` are [`BigUint`]s, so precision grows with
//! the input and no step ever rounds.

use crate::error::Result;
use crate::intervals::{CumulativeIntervalTable, SymbolInterval};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use tricodec_core::CodecError;

/// Running `[low, high)` interval of the encoder.
#[derive(Debug, Clone)]
pub struct IntervalState {
    low: BigUint,
    width: BigUint,
    total: u64,
    steps: u64,
}

impl IntervalState {
    /// The initial interval `[0, 1)`.
    pub fn new(total: u64) -> Self {
        Self {
            low: BigUint::zero(),
            width: BigUint::one(),
            total,
            steps: 0,
        }
    }

    /// Narrow to the sub-interval of `interval`.
    pub fn narrow(&mut self, interval: &SymbolInterval) -> Result<()> {
        self.low = &self.low * self.total + &self.width * interval.cum_low;
        self.width *= interval.count();
        self.steps += 1;

        if self.width.is_zero() {
            return Err(CodecError::PrecisionOverflow {
                step: (self.steps - 1) as usize,
            });
        }
        Ok(())
    }

    /// Narrow once per input symbol.
    pub fn narrow_all(table: &CumulativeIntervalTable, input: &[u8]) -> Result<Self> {
        let mut state = Self::new(table.total());
        for (step, &byte) in input.iter().enumerate() {
            let interval = table
                .get(byte)
                .ok_or_else(|| CodecError::invalid_code(byte as u32, step as u64))?;
            state.narrow(interval)?;
        }
        Ok(state)
    }

    /// Numerator of `low`.
    pub fn low(&self) -> &BigUint {
        &self.low
    }

    /// Numerator of `high - low`.
    pub fn width(&self) -> &BigUint {
        &self.width
    }

    /// Numerator of `high`.
    pub fn high(&self) -> BigUint {
        &self.low + &self.width
    }

    /// Common denominator `T^n`.
    pub fn denominator(&self) -> BigUint {
        num_traits::pow(BigUint::from(self.total), self.steps as usize)
    }

    /// Number of symbols narrowed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// The shortest binary fraction inside this interval.
    ///
    /// For `j` bits the best candidate is `m = ceil(low * 2^j)`, and it fits
    /// iff `m / 2^j < high`. Fitting is monotone in `j`, so the smallest `j`
    /// is found by bisection. The search is bounded by the `k` with
    /// `2^k * width >= 2 * denominator`, where `m / 2^k < low + width / 2`.
    ///
    /// The result is the bit sequence repeated doubling of `v` produces,
    /// stopping once the remainder is zero: minimal `j` makes the last bit a
    /// one, except for the single bit `0` when `low` is zero.
    pub fn to_bits(&self) -> Vec<bool> {
        let denominator = self.denominator();
        let high = self.high();
        let fits = |bits: u64| {
            let m = (&self.low << bits).div_ceil(&denominator);
            m * &denominator < (&high << bits)
        };

        let mut lo = 1;
        let mut hi = (denominator.bits() + 2)
            .saturating_sub(self.width.bits())
            .max(1);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if fits(mid) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }

        let m = (&self.low << lo).div_ceil(&denominator);
        (0..lo).rev().map(|i| m.bit(i)).collect()
    }
}

/// Render `numerator / denominator` with `digits` decimal places, truncated.
pub fn decimal(numerator: &BigUint, denominator: &BigUint, digits: u32) -> String {
    if denominator.is_zero() {
        return "nan".to_string();
    }
    let (int_part, rest) = numerator.div_rem(denominator);
    let fraction = rest * num_traits::pow(BigUint::from(10u32), digits as usize) / denominator;
    format!(
        "{int_part}.{:0>width$}",
        fraction.to_string(),
        width = digits as usize
    )
}
