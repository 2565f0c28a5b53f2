use crate::error::Result;
use crate::stream::{DigitStream, PAdicInteger};
use std::iter;

impl PAdicInteger {
    /// Digit-wise complement against `base - 1`.
    ///
    /// The implicit zero tail of a finite value complements to an unbounded
    /// run of `base - 1` digits, so the result is always unbounded.
    pub fn complement(&self) -> Self {
        let base = self.base();
        let top = base - 1;
        let source = self.clone();
        Self::from_factory(base, move || -> DigitStream {
            Box::new(source.digits().chain(iter::repeat(0)).map(move |d| top - d))
        })
    }

    /// Additive inverse: complement, then add one.
    pub fn negate(&self) -> Self {
        let base = self.base();
        tracing::trace!(base, "Building lazy negation");
        self.complement().add_unchecked(&Self::finite(&[1], base))
    }

    /// `self + (-other)`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.ensure_same_base(other)?;
        Ok(self.add_unchecked(&other.negate()))
    }
}
