//! Digit streams and the [`PAdicInteger`] entity.
//!
//! A p-adic integer is never stored as data. It is a base paired with a
//! [`DigitFactory`], a production rule that hands out a brand new digit
//! iterator every time it is asked. Derived values wrap the factories of their
//! operands, so reading one value never disturbs another reader.

use crate::error::{PadicError, Result};
use crate::params::DEFAULT_MAX_DIGITS;
use std::fmt;
use std::sync::Arc;

/// A lazy, possibly unbounded sequence of digits, least significant first.
///
/// A finite stream stands for a value whose remaining digits are all zero.
pub type DigitStream = Box<dyn Iterator<Item = u32> + Send>;

/// A replayable production rule for digit streams.
///
/// Every call to [`produce`](DigitFactory::produce) must yield a stream with the
/// same digit at every position, and no two streams may share cursor state.
pub trait DigitFactory: Send + Sync {
    fn produce(&self) -> DigitStream;
}

impl<F> DigitFactory for F
where
    F: Fn() -> DigitStream + Send + Sync,
{
    fn produce(&self) -> DigitStream {
        self()
    }
}

/// A p-adic integer in a fixed base, backed by a replayable digit factory.
///
/// Cloning is cheap: clones share the factory, never a realized stream.
#[derive(Clone)]
pub struct PAdicInteger {
    base: u32,
    factory: Arc<dyn DigitFactory>,
}

impl PAdicInteger {
    /// Wrap a user supplied factory. Fails with [`PadicError::InvalidBase`] for bases below 2.
    pub fn new<F>(base: u32, factory: F) -> Result<Self>
    where
        F: DigitFactory + 'static,
    {
        check_base(base)?;
        Ok(Self::from_factory(base, factory))
    }

    pub(crate) fn from_factory<F>(base: u32, factory: F) -> Self
    where
        F: DigitFactory + 'static,
    {
        Self {
            base,
            factory: Arc::new(factory),
        }
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    /// A fresh, independent digit stream for this value.
    pub fn digits(&self) -> DigitStream {
        self.factory.produce()
    }

    /// Exactly `n` leading digits, padding a finite stream with zeros.
    pub fn prefix(&self, n: usize) -> Vec<u32> {
        let mut digits: Vec<u32> = self.digits().take(n).collect();
        digits.resize(n, 0);
        digits
    }

    pub(crate) fn ensure_same_base(&self, other: &Self) -> Result<()> {
        if self.base != other.base {
            tracing::warn!(
                expected = self.base,
                actual = other.base,
                "Refusing to combine p-adic integers of different bases"
            );
            return Err(PadicError::MismatchedBase {
                expected: self.base,
                actual: other.base,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for PAdicInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head: Vec<u32> = self.digits().take(DEFAULT_MAX_DIGITS).collect();
        write!(f, "PAdicInteger(p={}, digits={:?})", self.base, head)
    }
}

pub(crate) fn check_base(base: u32) -> Result<()> {
    if base < 2 {
        tracing::warn!(base, "Rejecting p-adic base below 2");
        return Err(PadicError::InvalidBase(base));
    }
    Ok(())
}

/// Walks two streams in lock-step, padding whichever ends first with zeros.
///
/// Ends once both sides are exhausted. A side that has ended is never polled
/// again.
pub(crate) struct ZeroPadded {
    lhs: DigitStream,
    rhs: DigitStream,
    lhs_done: bool,
    rhs_done: bool,
}

impl ZeroPadded {
    pub(crate) fn new(lhs: DigitStream, rhs: DigitStream) -> Self {
        Self {
            lhs,
            rhs,
            lhs_done: false,
            rhs_done: false,
        }
    }

    fn pull(stream: &mut DigitStream, done: &mut bool) -> Option<u32> {
        if *done {
            return None;
        }
        let digit = stream.next();
        if digit.is_none() {
            *done = true;
        }
        digit
    }
}

impl Iterator for ZeroPadded {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let a = Self::pull(&mut self.lhs, &mut self.lhs_done);
        let b = Self::pull(&mut self.rhs, &mut self.rhs_done);
        match (a, b) {
            (None, None) => None,
            (a, b) => Some((a.unwrap_or(0), b.unwrap_or(0))),
        }
    }
}
