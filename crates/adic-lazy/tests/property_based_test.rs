use adic_lazy::{padic_distance, PAdicInteger};
use proptest::prelude::*;

/// Depth at which all axioms are checked.
const DEPTH: usize = 30;

fn prime_base() -> impl Strategy<Value = u32> {
    prop_oneof![Just(3u32), Just(5u32), Just(7u32)]
}

/// A base together with three seeded unbounded operands
fn seeded_triple() -> impl Strategy<Value = (PAdicInteger, PAdicInteger, PAdicInteger)> {
    (prime_base(), any::<u64>(), any::<u64>(), any::<u64>()).prop_map(|(p, a, b, c)| {
        (
            PAdicInteger::stable(p, a).unwrap(),
            PAdicInteger::stable(p, b).unwrap(),
            PAdicInteger::stable(p, c).unwrap(),
        )
    })
}

/// Small integers as finite streams, including negatives
fn small_integer_pair() -> impl Strategy<Value = (u32, i64, i64)> {
    (prime_base(), -500i64..500, -500i64..500)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: x + y = y + x
    #[test]
    fn prop_addition_commutative((x, y, _z) in seeded_triple()) {
        let lhs = x.checked_add(&y).unwrap();
        let rhs = y.checked_add(&x).unwrap();
        prop_assert!(lhs.equal_prefix(&rhs, DEPTH), "{} + {} != {} + {}", x, y, y, x);
    }

    /// Property: (x + y) + z = x + (y + z)
    #[test]
    fn prop_addition_associative((x, y, z) in seeded_triple()) {
        let lhs = x.checked_add(&y).unwrap().checked_add(&z).unwrap();
        let rhs = x.checked_add(&y.checked_add(&z).unwrap()).unwrap();
        prop_assert!(lhs.equal_prefix(&rhs, DEPTH), "{} != {}", lhs, rhs);
    }

    /// Property: x + 0 = x
    #[test]
    fn prop_additive_identity((x, _y, _z) in seeded_triple()) {
        let zero = PAdicInteger::zero(x.base()).unwrap();
        prop_assert!(x.checked_add(&zero).unwrap().equal_prefix(&x, DEPTH));
    }

    /// Property: -x + x = 0
    #[test]
    fn prop_additive_inverse((x, _y, _z) in seeded_triple()) {
        let zero = PAdicInteger::zero(x.base()).unwrap();
        let sum = x.negate().checked_add(&x).unwrap();
        prop_assert!(sum.equal_prefix(&zero, DEPTH), "{} + {} = {}", x.negate(), x, sum);
    }

    /// Property: x * y = y * x
    #[test]
    fn prop_multiplication_commutative((x, y, _z) in seeded_triple()) {
        let lhs = x.checked_mul(&y).unwrap();
        let rhs = y.checked_mul(&x).unwrap();
        prop_assert!(lhs.equal_prefix(&rhs, DEPTH), "{} != {}", lhs, rhs);
    }

    /// Property: (x * y) * z = x * (y * z)
    #[test]
    fn prop_multiplication_associative((x, y, z) in seeded_triple()) {
        let lhs = x.checked_mul(&y).unwrap().checked_mul(&z).unwrap();
        let rhs = x.checked_mul(&y.checked_mul(&z).unwrap()).unwrap();
        prop_assert!(lhs.equal_prefix(&rhs, DEPTH), "{} != {}", lhs, rhs);
    }

    /// Property: x * 1 = x
    #[test]
    fn prop_multiplicative_identity((x, _y, _z) in seeded_triple()) {
        let one = PAdicInteger::one(x.base()).unwrap();
        prop_assert!(x.checked_mul(&one).unwrap().equal_prefix(&x, DEPTH));
    }

    /// Property: x * (y + z) = x * y + x * z
    #[test]
    fn prop_distributive((x, y, z) in seeded_triple()) {
        let lhs = x.checked_mul(&y.checked_add(&z).unwrap()).unwrap();
        let rhs = x
            .checked_mul(&y)
            .unwrap()
            .checked_add(&x.checked_mul(&z).unwrap())
            .unwrap();
        prop_assert!(lhs.equal_prefix(&rhs, DEPTH), "{} != {}", lhs, rhs);
    }

    /// Property: x * x^-1 = 1 for units
    #[test]
    fn prop_unit_inverse((x, _y, _z) in seeded_triple()) {
        prop_assume!(x.prefix(1)[0] != 0);
        let one = PAdicInteger::one(x.base()).unwrap();
        let product = x.checked_mul(&x.inverse().unwrap()).unwrap();
        prop_assert!(product.equal_prefix(&one, DEPTH), "{} * inverse = {}", x, product);
    }

    /// Property: reading the same value twice renders identical text
    #[test]
    fn prop_replay_idempotent((x, y, _z) in seeded_triple()) {
        let product = x.checked_mul(&y).unwrap();
        prop_assert_eq!(product.to_string(), product.to_string());
        prop_assert_eq!(x.format_prefix(DEPTH), x.format_prefix(DEPTH));
    }

    /// Property: (x << n) >> n = x
    #[test]
    fn prop_shift_round_trip((x, _y, _z) in seeded_triple(), n in 0i64..10) {
        prop_assert!(x.shift_left(n).shift_right(n).equal_prefix(&x, DEPTH));
    }

    /// Property: x << n = x * p^n
    #[test]
    fn prop_shift_left_is_power_multiple((x, _y, _z) in seeded_triple(), n in 0u32..5) {
        let factor = (x.base() as i64).pow(n);
        prop_assert!(x.shift_left(n as i64).equal_prefix(&x.multiply_scalar(factor), DEPTH));
    }

    /// Property: integer arithmetic agrees with the p-adic operators
    #[test]
    fn prop_integer_homomorphism((p, a, b) in small_integer_pair()) {
        let x = PAdicInteger::from_integer(a, p).unwrap();
        let y = PAdicInteger::from_integer(b, p).unwrap();

        let sum = PAdicInteger::from_integer(a + b, p).unwrap();
        let product = PAdicInteger::from_integer(a * b, p).unwrap();
        let difference = PAdicInteger::from_integer(a - b, p).unwrap();

        prop_assert!(x.checked_add(&y).unwrap().equal_prefix(&sum, DEPTH));
        prop_assert!(x.checked_mul(&y).unwrap().equal_prefix(&product, DEPTH));
        prop_assert!(x.checked_sub(&y).unwrap().equal_prefix(&difference, DEPTH));
        prop_assert!(x.multiply_scalar(b).equal_prefix(&product, DEPTH));
    }

    /// Property: p-adic distance is symmetric and zero on equal prefixes
    #[test]
    fn prop_distance_symmetric((x, y, _z) in seeded_triple()) {
        let xy = padic_distance(&x, &y, DEPTH).unwrap();
        let yx = padic_distance(&y, &x, DEPTH).unwrap();
        prop_assert!((xy - yx).abs() < 1e-12);
        prop_assert_eq!(padic_distance(&x, &x, DEPTH).unwrap(), 0.0);
    }
}
