use crate::error::{PadicError, Result};
use crate::stream::{check_base, DigitStream, PAdicInteger};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Base expansion of a non-negative integer, least significant digit first.
struct IntegerDigits {
    remaining: BigUint,
    base: BigUint,
}

impl Iterator for IntegerDigits {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.remaining.is_zero() {
            return None;
        }
        let digit = (&self.remaining % &self.base)
            .to_u32_digits()
            .first()
            .copied()
            .unwrap_or(0);
        self.remaining /= &self.base;
        Some(digit)
    }
}

impl PAdicInteger {
    /// Expand `n` in the given base. Negative values are built as the
    /// p-adic negation of their magnitude.
    pub fn from_integer(n: i64, base: u32) -> Result<Self> {
        let magnitude = Self::from_biguint(&BigUint::from(n.unsigned_abs()), base)?;
        if n < 0 {
            Ok(magnitude.negate())
        } else {
            Ok(magnitude)
        }
    }

    pub fn from_biguint(n: &BigUint, base: u32) -> Result<Self> {
        check_base(base)?;
        tracing::trace!(base, value = %n, "Expanding integer into p-adic digits");
        Ok(Self::expand(n.clone(), base))
    }

    pub(crate) fn expand(value: BigUint, base: u32) -> Self {
        Self::from_factory(base, move || -> DigitStream {
            Box::new(IntegerDigits {
                remaining: value.clone(),
                base: BigUint::from(base),
            })
        })
    }

    /// A finite value from explicit digits, least significant first.
    pub fn from_digits(digits: &[u32], base: u32) -> Result<Self> {
        check_base(base)?;
        if let Some(&digit) = digits.iter().find(|&&d| d >= base) {
            return Err(PadicError::InvalidDigit { digit, base });
        }
        Ok(Self::finite(digits, base))
    }

    pub(crate) fn finite(digits: &[u32], base: u32) -> Self {
        let digits: Arc<[u32]> = digits.into();
        Self::from_factory(base, move || -> DigitStream {
            let digits = Arc::clone(&digits);
            Box::new((0..digits.len()).map(move |i| digits[i]))
        })
    }

    pub fn zero(base: u32) -> Result<Self> {
        check_base(base)?;
        Ok(Self::finite(&[0], base))
    }

    pub fn one(base: u32) -> Result<Self> {
        check_base(base)?;
        Ok(Self::finite(&[1], base))
    }

    /// An unbounded pseudorandom value. Each read re-seeds its own generator,
    /// so every read of the same `(base, seed)` sees the same digits.
    pub fn stable(base: u32, seed: u64) -> Result<Self> {
        check_base(base)?;
        tracing::trace!(base, seed, "Creating stable p-adic integer");
        Ok(Self::from_factory(base, move || -> DigitStream {
            let mut rng = StdRng::seed_from_u64(seed);
            Box::new(std::iter::repeat_with(move || rng.gen_range(0..base)))
        }))
    }
}
