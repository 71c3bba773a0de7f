// ============================================================================
// Exponential Capability Registration
// Random generator, operation tables and boundedness guards
// ============================================================================

use super::registry::{BinaryOp, UnaryOp, Verifiable};
use crate::numeric::Exponential;
use rand::Rng;

/// Magnitude bound for the floating-point feasibility checks: half the i64
/// range, leaving headroom for the f64 estimate's rounding error. A passing
/// guard therefore implies the integer arithmetic stays exact.
const SAFE_MAGNITUDE: f64 = (1i64 << 62) as f64;

fn pow10_f64(digits: i128) -> f64 {
    10f64.powi(digits.clamp(0, 400) as i32)
}

/// Additive guard: rescale both significands to the smaller exponent in the
/// floating-point domain and require the rescaled values, their sum and
/// their difference to stay below the magnitude bound. An exponent gap too
/// wide to align blows past the bound and is rejected along the way.
fn additive_bounded(lhs: Exponential, rhs: Exponential) -> bool {
    let gap = lhs.exponent() as i128 - rhs.exponent() as i128;
    let (x, y) = if gap >= 0 {
        (lhs.significand() as f64 * pow10_f64(gap), rhs.significand() as f64)
    } else {
        (lhs.significand() as f64, rhs.significand() as f64 * pow10_f64(-gap))
    };
    x.abs() < SAFE_MAGNITUDE
        && y.abs() < SAFE_MAGNITUDE
        && (x + y).abs() < SAFE_MAGNITUDE
        && (x - y).abs() < SAFE_MAGNITUDE
}

/// Multiplicative guard: the significand product and the exponent sum and
/// difference must each stay in range. The difference matters because a
/// divisor's exponent is effectively negated.
fn multiplicative_bounded(lhs: Exponential, rhs: Exponential) -> bool {
    (lhs.significand() as f64 * rhs.significand() as f64).abs() < SAFE_MAGNITUDE
        && lhs.exponent().checked_add(rhs.exponent()).is_some()
        && lhs.exponent().checked_sub(rhs.exponent()).is_some()
}

/// Division guard: a nonzero divisor is required before any bound check.
fn division_bounded(lhs: Exponential, rhs: Exponential) -> bool {
    !rhs.is_zero() && multiplicative_bounded(lhs, rhs)
}

// Reference formulations: each routes the result through negation so that
// operator and reference only agree when the arithmetic is self-consistent.

fn neg_native(x: Exponential) -> Exponential {
    -x
}

fn neg_reference(x: Exponential) -> Exponential {
    Exponential::ZERO - x
}

fn add_native(a: Exponential, b: Exponential) -> Exponential {
    a + b
}

fn add_reference(a: Exponential, b: Exponential) -> Exponential {
    a - (-b)
}

fn sub_native(a: Exponential, b: Exponential) -> Exponential {
    a - b
}

fn sub_reference(a: Exponential, b: Exponential) -> Exponential {
    -(b - a)
}

fn mul_native(a: Exponential, b: Exponential) -> Exponential {
    a * b
}

fn mul_reference(a: Exponential, b: Exponential) -> Exponential {
    (-a) * (-b)
}

fn div_native(a: Exponential, b: Exponential) -> Exponential {
    a / b
}

fn div_reference(a: Exponential, b: Exponential) -> Exponential {
    -((-a) / b)
}

static UNARY_OPS: [UnaryOp<Exponential>; 1] = [UnaryOp {
    name: "neg",
    reference: neg_reference,
    native: neg_native,
}];

static BINARY_OPS: [BinaryOp<Exponential>; 4] = [
    BinaryOp {
        name: "add",
        reference: add_reference,
        native: add_native,
        is_bounded: additive_bounded,
        commutative: true,
        associative: true,
        distributes_over: None,
    },
    BinaryOp {
        name: "sub",
        reference: sub_reference,
        native: sub_native,
        is_bounded: additive_bounded,
        commutative: false,
        associative: false,
        distributes_over: None,
    },
    BinaryOp {
        name: "mul",
        reference: mul_reference,
        native: mul_native,
        is_bounded: multiplicative_bounded,
        commutative: true,
        associative: true,
        distributes_over: Some("add"),
    },
    BinaryOp {
        name: "div",
        reference: div_reference,
        native: div_native,
        is_bounded: division_bounded,
        commutative: false,
        associative: false,
        distributes_over: None,
    },
];

impl Verifiable for Exponential {
    /// Significand and exponent are drawn independently and uniformly from
    /// [-100, 100], giving wide exponent coverage around the alignment and
    /// precision limits of the arithmetic.
    fn arbitrary<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let significand = rng.random_range(-100..=100);
        let exponent = rng.random_range(-100..=100);
        Exponential::new(significand, exponent)
    }

    fn unary_ops() -> &'static [UnaryOp<Self>] {
        &UNARY_OPS
    }

    fn binary_ops() -> &'static [BinaryOp<Self>] {
        &BINARY_OPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_arbitrary_stays_in_draw_range() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..1_000 {
            let x = Exponential::arbitrary(&mut rng);
            // normalization can fold at most two trailing zeros of a
            // three-digit significand into the exponent
            assert!(x.significand().abs() <= 100);
            assert!((-100..=102).contains(&x.exponent()));
        }
    }

    #[test]
    fn test_additive_guard_accepts_modest_operands() {
        assert!(additive_bounded(
            Exponential::new(73, 5),
            Exponential::new(-19, 3)
        ));
        assert!(additive_bounded(Exponential::ZERO, Exponential::ONE));
    }

    #[test]
    fn test_additive_guard_rejects_wide_exponent_gaps() {
        assert!(!additive_bounded(
            Exponential::new(1, 100),
            Exponential::new(1, 0)
        ));
        assert!(!additive_bounded(
            Exponential::new(1, 0),
            Exponential::new(1, 100)
        ));
    }

    #[test]
    fn test_additive_guard_rejects_near_overflow_sums() {
        // a small significand stays small no matter the exponent: the pair
        // aligns at gap zero and sums exactly
        let big = Exponential::new(92, 17);
        assert!(additive_bounded(big, big));
        assert_eq!(big + big, Exponential::new(184, 17));

        // only a significand near the i64 boundary can overflow the sum
        let huge = Exponential::new(i64::MAX - 1, 17);
        assert!(!additive_bounded(huge, huge));
    }

    #[test]
    fn test_multiplicative_guard() {
        assert!(multiplicative_bounded(
            Exponential::new(99, 100),
            Exponential::new(-99, -100)
        ));
        assert!(!multiplicative_bounded(
            Exponential::new(i64::MAX, 0),
            Exponential::new(3, 0)
        ));
        assert!(!multiplicative_bounded(
            Exponential::new(1, i64::MAX),
            Exponential::new(1, 1)
        ));
    }

    #[test]
    fn test_division_guard_requires_nonzero_divisor() {
        assert!(!division_bounded(Exponential::ONE, Exponential::ZERO));
        assert!(division_bounded(Exponential::ONE, Exponential::from(3)));
    }

    #[test]
    fn test_registered_tables() {
        let binary = Exponential::binary_ops();
        let names: Vec<_> = binary.iter().map(|op| op.name).collect();
        assert_eq!(names, ["add", "sub", "mul", "div"]);

        let mul = &binary[2];
        assert!(mul.commutative);
        assert!(mul.associative);
        assert_eq!(mul.distributes_over, Some("add"));

        let div = &binary[3];
        assert!(!div.commutative);
        assert!(!div.associative);

        assert_eq!(Exponential::unary_ops().len(), 1);
    }

    #[test]
    fn test_reference_formulations_agree_on_samples() {
        let samples = [
            Exponential::ZERO,
            Exponential::ONE,
            Exponential::new(-7, 3),
            Exponential::new(42, -19),
            Exponential::new(-100, 100),
        ];
        for &a in &samples {
            assert_eq!(neg_native(a), neg_reference(a));
            for &b in &samples {
                assert_eq!(add_native(a, b), add_reference(a, b));
                assert_eq!(sub_native(a, b), sub_reference(a, b));
                assert_eq!(mul_native(a, b), mul_reference(a, b));
                if !b.is_zero() {
                    assert_eq!(div_native(a, b), div_reference(a, b));
                }
            }
        }
    }
}
