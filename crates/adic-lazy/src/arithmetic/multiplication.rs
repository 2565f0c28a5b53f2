//!
//! Scalar and convolution multiplication
//!

use crate::error::{PadicError, Result};
use crate::stream::{DigitStream, PAdicInteger};
use num_bigint::BigUint;

/// Right-hand side accepted by [`PAdicInteger::multiply_operand`].
#[derive(Debug, Clone)]
pub enum Operand {
    Integer(i64),
    PAdic(PAdicInteger),
    Fraction { numerator: i64, denominator: i64 },
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Integer(value)
    }
}

impl From<PAdicInteger> for Operand {
    fn from(value: PAdicInteger) -> Self {
        Operand::PAdic(value)
    }
}

impl From<&PAdicInteger> for Operand {
    fn from(value: &PAdicInteger) -> Self {
        Operand::PAdic(value.clone())
    }
}

/// Multiplication by a single digit-sized scalar, one pass with carry.
struct ScaledDigits {
    digits: DigitStream,
    exhausted: bool,
    scalar: u128,
    base: u128,
    carry: u128,
}

impl Iterator for ScaledDigits {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if !self.exhausted {
            match self.digits.next() {
                Some(d) => {
                    let total = self.carry + d as u128 * self.scalar;
                    self.carry = total / self.base;
                    return Some((total % self.base) as u32);
                }
                None => self.exhausted = true,
            }
        }

        if self.carry == 0 {
            return None;
        }
        let digit = self.carry % self.base;
        self.carry /= self.base;
        Some(digit as u32)
    }
}

/// Buffered operand of a convolution. Grows by at most one digit per step
/// and is never polled again once it has ended.
struct Buffered {
    stream: DigitStream,
    digits: Vec<u32>,
    len: Option<usize>,
}

impl Buffered {
    fn new(stream: DigitStream) -> Self {
        Self {
            stream,
            digits: Vec::new(),
            len: None,
        }
    }

    fn pull(&mut self) {
        if self.len.is_some() {
            return;
        }
        match self.stream.next() {
            Some(d) => self.digits.push(d),
            None => self.len = Some(self.digits.len()),
        }
    }

    fn get(&self, i: usize) -> Option<u128> {
        self.digits.get(i).map(|&d| d as u128)
    }
}

/// Per-read state of a product: two digit buffers, a carry and the position.
struct ProductDigits {
    lhs: Buffered,
    rhs: Buffered,
    base: u128,
    carry: u128,
    k: usize,
}

impl ProductDigits {
    fn new(lhs: DigitStream, rhs: DigitStream, base: u32) -> Self {
        Self {
            lhs: Buffered::new(lhs),
            rhs: Buffered::new(rhs),
            base: base as u128,
            carry: 0,
            k: 0,
        }
    }

    /// Both operands ended, the window is past their last digits and nothing
    /// is carried: every remaining digit is zero.
    fn settled(&self) -> bool {
        match (self.lhs.len, self.rhs.len) {
            (Some(a), Some(b)) => {
                self.carry == 0 && (a == 0 || b == 0 || self.k + 1 >= a + b)
            }
            _ => false,
        }
    }
}

impl Iterator for ProductDigits {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.lhs.pull();
        self.rhs.pull();
        if self.settled() {
            return None;
        }

        let k = self.k;
        let convolution: u128 = (0..=k)
            .filter_map(|i| Some(self.lhs.get(i)? * self.rhs.get(k - i)?))
            .sum();
        let total = self.carry + convolution;
        self.carry = total / self.base;
        self.k += 1;
        Some((total % self.base) as u32)
    }
}

impl PAdicInteger {
    /// Multiply by an integer.
    ///
    /// Zero gives `zero`, negative scalars negate the scaled magnitude and
    /// scalars of at least one base width fall back to convolution.
    pub fn multiply_scalar(&self, c: i64) -> Self {
        let scaled = self.scale(c.unsigned_abs());
        if c < 0 {
            scaled.negate()
        } else {
            scaled
        }
    }

    fn scale(&self, c: u64) -> Self {
        let base = self.base();
        if c == 0 {
            return Self::finite(&[0], base);
        }
        if c >= base as u64 {
            return self.mul_unchecked(&Self::expand(BigUint::from(c), base));
        }

        let source = self.clone();
        tracing::trace!(base, scalar = c, "Building lazy scalar product");
        Self::from_factory(base, move || -> DigitStream {
            Box::new(ScaledDigits {
                digits: source.digits(),
                exhausted: false,
                scalar: c as u128,
                base: base as u128,
                carry: 0,
            })
        })
    }

    /// Lazy product of two values of the same base.
    ///
    /// Digit `k` costs O(k), so a prefix of length n costs O(n²).
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        self.ensure_same_base(other)?;
        Ok(self.mul_unchecked(other))
    }

    pub(crate) fn mul_unchecked(&self, other: &Self) -> Self {
        let base = self.base();
        let lhs = self.clone();
        let rhs = other.clone();
        tracing::trace!(base, "Building lazy product");
        Self::from_factory(base, move || -> DigitStream {
            Box::new(ProductDigits::new(lhs.digits(), rhs.digits(), base))
        })
    }

    /// Multiply by anything that converts into an [`Operand`].
    ///
    /// Fractions are only accepted when they reduce to an integer.
    pub fn multiply_operand(&self, rhs: impl Into<Operand>) -> Result<Self> {
        match rhs.into() {
            Operand::Integer(c) => Ok(self.multiply_scalar(c)),
            Operand::PAdic(other) => self.checked_mul(&other),
            Operand::Fraction {
                numerator,
                denominator,
            } => match numerator.checked_rem(denominator) {
                Some(0) => match numerator.checked_div(denominator) {
                    Some(c) => Ok(self.multiply_scalar(c)),
                    None => Err(unsupported_fraction(numerator, denominator)),
                },
                _ => Err(unsupported_fraction(numerator, denominator)),
            },
        }
    }
}

fn unsupported_fraction(numerator: i64, denominator: i64) -> PadicError {
    tracing::warn!(numerator, denominator, "Fraction is not a p-adic integer operand");
    PadicError::UnsupportedOperand(format!("fraction {}/{}", numerator, denominator))
}
