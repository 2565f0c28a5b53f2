//!
//! Modular and p-adic inverses
//!
//! A p-adic integer is invertible exactly when its lowest digit is a unit
//! modulo the base. The inverse is produced digit by digit: digit `k` is the
//! unique value that makes digit `k` of the running product equal to the
//! matching digit of one.
//!

use crate::error::{PadicError, Result};
use crate::stream::{DigitStream, PAdicInteger};
use num_integer::Integer;

/// Returns `(g, x, y)` with `a*x + b*y = g = gcd(a, b)`.
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let egcd = a.extended_gcd(&b);
    (egcd.gcd, egcd.x, egcd.y)
}

/// Inverse of `value` modulo `modulus`, in `[0, modulus)`.
pub fn mod_inverse(value: i64, modulus: i64) -> Result<i64> {
    if modulus < 1 {
        return Err(PadicError::InvalidParameter(format!(
            "modulus must be positive, got {}",
            modulus
        )));
    }

    let (g, x, _) = extended_gcd(value.rem_euclid(modulus), modulus);
    if g != 1 {
        tracing::warn!(value, modulus, "No modular inverse, not coprime");
        return Err(PadicError::NoInverse { value, modulus });
    }
    Ok(x.rem_euclid(modulus))
}

/// Per-read state of an inverse: the digits of the input seen so far, the
/// digits solved so far and the product carry.
struct InverseDigits {
    source: DigitStream,
    exhausted: bool,
    known: Vec<u32>,
    solved: Vec<u32>,
    base: u128,
    unit_inverse: u128,
    carry: u128,
}

impl InverseDigits {
    fn pull(&mut self) {
        if self.exhausted {
            return;
        }
        match self.source.next() {
            Some(d) => self.known.push(d),
            None => self.exhausted = true,
        }
    }
}

impl Iterator for InverseDigits {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.pull();

        let k = self.solved.len();
        let x0 = self.known.first().copied().unwrap_or(0) as u128;
        let partial: u128 = (1..=k)
            .filter_map(|i| {
                let x = *self.known.get(i)? as u128;
                Some(x * self.solved[k - i] as u128)
            })
            .sum();
        let pending = self.carry + partial;

        // Digit k of x * y must be 1 at k = 0 and 0 afterwards
        let target = u128::from(k == 0);
        let gap = (target + self.base - pending % self.base) % self.base;
        let digit = gap * self.unit_inverse % self.base;

        let total = pending + x0 * digit;
        self.carry = total / self.base;
        self.solved.push(digit as u32);
        Some(digit as u32)
    }
}

impl PAdicInteger {
    /// The lazy multiplicative inverse.
    ///
    /// Fails with [`PadicError::NoInverse`] when the lowest digit shares a
    /// factor with the base.
    pub fn inverse(&self) -> Result<Self> {
        let base = self.base();
        let lowest = self.digits().next().unwrap_or(0);
        let unit_inverse = mod_inverse(i64::from(lowest), i64::from(base))?;
        tracing::debug!(base, lowest, unit_inverse, "Building lazy p-adic inverse");

        let source = self.clone();
        Ok(Self::from_factory(base, move || -> DigitStream {
            Box::new(InverseDigits {
                source: source.digits(),
                exhausted: false,
                known: Vec::new(),
                solved: Vec::new(),
                base: base as u128,
                unit_inverse: unit_inverse as u128,
                carry: 0,
            })
        }))
    }
}
