use crate::error::Result;
use crate::params::DEFAULT_MAX_DIGITS;
use crate::stream::{PAdicInteger, ZeroPadded};

impl PAdicInteger {
    /// Prefix equality over at most `num_digits` positions.
    ///
    /// Shorter streams are padded with zeros. Two streams that both end
    /// inside the window are equal if no digit differed. Values in different
    /// bases never compare equal. Never fails.
    pub fn equal_prefix(&self, other: &Self, num_digits: usize) -> bool {
        if self.base() != other.base() {
            return false;
        }
        ZeroPadded::new(self.digits(), other.digits())
            .take(num_digits)
            .all(|(a, b)| a == b)
    }

    /// Position of the first differing digit within `window`, or `window`
    /// when the prefixes agree.
    pub fn agreement_depth(&self, other: &Self, window: usize) -> Result<usize> {
        self.ensure_same_base(other)?;
        Ok(ZeroPadded::new(self.digits(), other.digits())
            .take(window)
            .position(|(a, b)| a != b)
            .unwrap_or(window))
    }
}

impl PartialEq for PAdicInteger {
    fn eq(&self, other: &Self) -> bool {
        self.equal_prefix(other, DEFAULT_MAX_DIGITS)
    }
}
