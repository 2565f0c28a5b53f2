//! Operator overloads for [`PAdicInteger`].
//!
//! Binary operators between two p-adic integers panic when the bases differ;
//! use the `checked_*` methods to get a [`PadicError`](crate::PadicError)
//! instead.

use crate::stream::PAdicInteger;
use std::ops::{Add, Mul, Neg, Not, Shl, Shr, Sub};

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $checked:ident, $verb:literal) => {
        impl $trait<&PAdicInteger> for &PAdicInteger {
            type Output = PAdicInteger;

            fn $method(self, rhs: &PAdicInteger) -> PAdicInteger {
                match self.$checked(rhs) {
                    Ok(value) => value,
                    Err(err) => panic!("Cannot {} p-adic integers: {}", $verb, err),
                }
            }
        }

        impl $trait<PAdicInteger> for PAdicInteger {
            type Output = PAdicInteger;

            fn $method(self, rhs: PAdicInteger) -> PAdicInteger {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&PAdicInteger> for PAdicInteger {
            type Output = PAdicInteger;

            fn $method(self, rhs: &PAdicInteger) -> PAdicInteger {
                (&self).$method(rhs)
            }
        }

        impl $trait<PAdicInteger> for &PAdicInteger {
            type Output = PAdicInteger;

            fn $method(self, rhs: PAdicInteger) -> PAdicInteger {
                self.$method(&rhs)
            }
        }
    };
}

impl_binop!(Add, add, checked_add, "add");
impl_binop!(Sub, sub, checked_sub, "subtract");
impl_binop!(Mul, mul, checked_mul, "multiply");

impl Mul<i64> for &PAdicInteger {
    type Output = PAdicInteger;

    fn mul(self, rhs: i64) -> PAdicInteger {
        self.multiply_scalar(rhs)
    }
}

impl Mul<i64> for PAdicInteger {
    type Output = PAdicInteger;

    fn mul(self, rhs: i64) -> PAdicInteger {
        self.multiply_scalar(rhs)
    }
}

impl Neg for &PAdicInteger {
    type Output = PAdicInteger;

    fn neg(self) -> PAdicInteger {
        self.negate()
    }
}

impl Neg for PAdicInteger {
    type Output = PAdicInteger;

    fn neg(self) -> PAdicInteger {
        self.negate()
    }
}

/// Digit-wise complement, `~x` in the two's-complement analogy.
impl Not for &PAdicInteger {
    type Output = PAdicInteger;

    fn not(self) -> PAdicInteger {
        self.complement()
    }
}

impl Not for PAdicInteger {
    type Output = PAdicInteger;

    fn not(self) -> PAdicInteger {
        self.complement()
    }
}

impl Shl<i64> for &PAdicInteger {
    type Output = PAdicInteger;

    fn shl(self, n: i64) -> PAdicInteger {
        self.shift_left(n)
    }
}

impl Shl<i64> for PAdicInteger {
    type Output = PAdicInteger;

    fn shl(self, n: i64) -> PAdicInteger {
        self.shift_left(n)
    }
}

impl Shr<i64> for &PAdicInteger {
    type Output = PAdicInteger;

    fn shr(self, n: i64) -> PAdicInteger {
        self.shift_right(n)
    }
}

impl Shr<i64> for PAdicInteger {
    type Output = PAdicInteger;

    fn shr(self, n: i64) -> PAdicInteger {
        self.shift_right(n)
    }
}
