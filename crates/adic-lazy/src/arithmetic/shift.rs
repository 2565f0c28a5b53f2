use crate::stream::{DigitStream, PAdicInteger};
use std::iter;

fn as_count(n: u64) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}

impl PAdicInteger {
    /// Multiply by `base^n` by prepending `n` zero digits. Negative `n`
    /// shifts right instead.
    pub fn shift_left(&self, n: i64) -> Self {
        if n < 0 {
            return self.drop_digits(as_count(n.unsigned_abs()));
        }
        self.prepend_zeros(as_count(n as u64))
    }

    /// Divide by `base^n` by dropping the `n` lowest digits. Negative `n`
    /// shifts left instead.
    ///
    /// Exact only when the dropped digits are zero; otherwise they are lost.
    pub fn shift_right(&self, n: i64) -> Self {
        if n < 0 {
            return self.prepend_zeros(as_count(n.unsigned_abs()));
        }
        self.drop_digits(as_count(n as u64))
    }

    fn prepend_zeros(&self, count: usize) -> Self {
        if count == 0 {
            return self.clone();
        }
        let source = self.clone();
        Self::from_factory(self.base(), move || -> DigitStream {
            Box::new(iter::repeat(0).take(count).chain(source.digits()))
        })
    }

    fn drop_digits(&self, count: usize) -> Self {
        if count == 0 {
            return self.clone();
        }
        tracing::trace!(base = self.base(), count, "Dropping low digits");
        let source = self.clone();
        Self::from_factory(self.base(), move || -> DigitStream {
            Box::new(source.digits().skip(count))
        })
    }
}
