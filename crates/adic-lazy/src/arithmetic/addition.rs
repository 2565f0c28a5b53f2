//!
//! Digit-wise addition with carry
//!

use crate::error::Result;
use crate::stream::{DigitStream, PAdicInteger, ZeroPadded};

/// Per-read state of a sum. Lives only as long as one produced stream.
struct SumDigits {
    pairs: ZeroPadded,
    base: u64,
    carry: u64,
}

impl SumDigits {
    fn new(lhs: DigitStream, rhs: DigitStream, base: u32) -> Self {
        Self {
            pairs: ZeroPadded::new(lhs, rhs),
            base: base as u64,
            carry: 0,
        }
    }
}

impl Iterator for SumDigits {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        match self.pairs.next() {
            Some((a, b)) => {
                let total = a as u64 + b as u64 + self.carry;
                self.carry = total / self.base;
                Some((total % self.base) as u32)
            }
            // Both operands ended; flush what is left of the carry
            None if self.carry > 0 => {
                let digit = self.carry % self.base;
                self.carry /= self.base;
                Some(digit as u32)
            }
            None => None,
        }
    }
}

impl PAdicInteger {
    /// Lazy sum of two values of the same base.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_base(other)?;
        Ok(self.add_unchecked(other))
    }

    pub(crate) fn add_unchecked(&self, other: &Self) -> Self {
        let base = self.base();
        let lhs = self.clone();
        let rhs = other.clone();
        tracing::trace!(base, "Building lazy sum");
        Self::from_factory(base, move || -> DigitStream {
            Box::new(SumDigits::new(lhs.digits(), rhs.digits(), base))
        })
    }
}
