//! Lazy arithmetic over digit streams.
//!
//! Every operator returns a new [`PAdicInteger`](crate::PAdicInteger) whose
//! factory holds clones of its operands. Carries and digit buffers are fields
//! of an iterator built inside each `produce()` call and die with it.

pub(crate) mod addition;
pub(crate) mod inverse;
pub(crate) mod multiplication;
pub(crate) mod negation;
pub(crate) mod shift;

pub use inverse::{extended_gcd, mod_inverse};
pub use multiplication::Operand;
