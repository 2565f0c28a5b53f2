//! p-adic integers as replayable lazy digit streams.
//!
//! A [`PAdicInteger`] never holds its digits. It holds a factory that can be
//! asked for a fresh digit iterator any number of times, so the same value
//! can feed many computations without being consumed. Arithmetic builds new
//! factories on top of the operands' factories; only comparison, formatting
//! and the prefix helpers actually pull digits.
//!
//! Equality is prefix equality over a bounded window: two unbounded streams
//! cannot be compared exhaustively.

pub mod arithmetic;
pub mod ball;
mod compare;
mod constructors;
pub mod distance;
pub mod error;
mod format;
mod impl_ops;
pub mod params;
pub mod stream;
pub mod valuation;

pub use arithmetic::{extended_gcd, mod_inverse, Operand};
pub use ball::{ball_id, count_distinct_balls, is_in_ball};
pub use distance::{are_close, find_closest, padic_distance, proximity_score};
pub use error::{PadicError, Result};
pub use params::{PadicParams, DEFAULT_INEQUALITY_DEPTH, DEFAULT_MAX_DIGITS, DEFAULT_PRIME_BASE};
pub use stream::{DigitFactory, DigitStream, PAdicInteger};
pub use valuation::{valuation_of_product, PadicValuation};
