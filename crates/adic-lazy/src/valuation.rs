use crate::stream::PAdicInteger;

/// p-adic valuation as far as a bounded window can tell.
///
/// `AtLeast(w)` means no non-zero digit appeared in the first `w` positions:
/// the value is zero or divisible by `base^w`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadicValuation {
    Finite(usize),
    AtLeast(usize),
}

impl PadicValuation {
    pub fn finite_value(&self) -> Option<usize> {
        match self {
            PadicValuation::Finite(v) => Some(*v),
            PadicValuation::AtLeast(_) => None,
        }
    }

    /// A valuation of zero: the value is a unit when the base is prime.
    pub fn is_zero(&self) -> bool {
        matches!(self, PadicValuation::Finite(0))
    }

    pub fn lower_bound(&self) -> usize {
        match self {
            PadicValuation::Finite(v) | PadicValuation::AtLeast(v) => *v,
        }
    }

    pub fn min(&self, other: &Self) -> Self {
        match (self, other) {
            (PadicValuation::Finite(a), PadicValuation::Finite(b)) => {
                PadicValuation::Finite(*a.min(b))
            }
            (PadicValuation::AtLeast(a), PadicValuation::AtLeast(b)) => {
                PadicValuation::AtLeast(*a.min(b))
            }
            (PadicValuation::Finite(f), PadicValuation::AtLeast(w))
            | (PadicValuation::AtLeast(w), PadicValuation::Finite(f)) => {
                if f < w {
                    PadicValuation::Finite(*f)
                } else {
                    PadicValuation::AtLeast(*w)
                }
            }
        }
    }
}

/// Valuation of a product over a prime base: valuations add.
pub fn valuation_of_product(a: &PadicValuation, b: &PadicValuation) -> PadicValuation {
    match (a, b) {
        (PadicValuation::Finite(x), PadicValuation::Finite(y)) => PadicValuation::Finite(x + y),
        _ => PadicValuation::AtLeast(a.lower_bound() + b.lower_bound()),
    }
}

impl PAdicInteger {
    /// Index of the first non-zero digit within `window`.
    pub fn valuation(&self, window: usize) -> PadicValuation {
        match self.digits().take(window).position(|d| d != 0) {
            Some(v) => PadicValuation::Finite(v),
            None => PadicValuation::AtLeast(window),
        }
    }

    /// Split off the power of the base: returns the valuation and the
    /// remaining factor, which has a non-zero lowest digit when the
    /// valuation is finite.
    pub fn split_valuation(&self, window: usize) -> (PadicValuation, PAdicInteger) {
        let valuation = self.valuation(window);
        match valuation {
            PadicValuation::Finite(v) => (valuation, self.shift_right(v as i64)),
            PadicValuation::AtLeast(_) => (valuation, self.clone()),
        }
    }
}
