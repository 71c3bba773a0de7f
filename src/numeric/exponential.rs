// ============================================================================
// Exponential
// Normalized decimal scalar: significand × 10^exponent in canonical form
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// Normalized decimal number representing `significand × 10^exponent`.
///
/// Both fields are signed 64-bit integers. Every instance is kept in
/// canonical form: a zero significand forces a zero exponent, and a nonzero
/// significand carries no trailing decimal zeros (each stripped zero is
/// folded into the exponent). Because the canonical pair is unique for a
/// given value, structural equality is value equality.
///
/// # Value Range
/// - Significand: full i64 range, never divisible by 10 when nonzero
/// - Exponent: full i64 range
///
/// # Overflow policy
/// The arithmetic operators are the hot path and perform no overflow
/// detection: significand and exponent combination wraps at the i64
/// boundary for extreme inputs. Callers who need a guarantee consult the
/// boundedness predicates in the verification layer before operating.
///
/// # Example
/// ```rust
/// use exponential::numeric::Exponential;
///
/// let googol = Exponential::new(1, 100);
/// assert_eq!(googol * googol, Exponential::new(1, 200));
/// assert_eq!(googol.to_string(), "1e100");
///
/// let third = Exponential::ONE / Exponential::from(3);
/// assert_eq!(third, Exponential::new(333333333333333333, -18));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "(i64, i64)", into = "(i64, i64)")
)]
pub struct Exponential {
    significand: i64,
    exponent: i64,
}

// ============================================================================
// Scale Helpers
// ============================================================================

/// Compute 10^n in the wide integer domain at compile time
const fn pow10(n: u32) -> i128 {
    let mut result: i128 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Number of decimal digits in a nonzero significand
fn decimal_digits(significand: i64) -> u32 {
    debug_assert!(significand != 0);
    significand.unsigned_abs().ilog10() + 1
}

/// Largest exponent gap that can be aligned exactly in the i128 domain.
/// A canonical significand has at most 19 digits, so scaling it by 10^19
/// still fits i128 with room for the addition.
const MAX_ALIGN_GAP: i128 = 19;

impl Exponential {
    /// Canonical zero: (0, 0)
    pub const ZERO: Self = Self::new(0, 0);

    /// One
    pub const ONE: Self = Self::new(1, 0);

    /// Significant decimal digits produced by division.
    ///
    /// A quotient of two integers may be a repeating decimal; division
    /// truncates it to this many significant digits before normalizing.
    pub const DIVISION_DIGITS: u32 = 18;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a significand and a power-of-ten exponent.
    ///
    /// The pair is normalized: trailing decimal zeros in the significand are
    /// folded into the exponent, and zero collapses to `(0, 0)`.
    #[inline]
    pub const fn new(significand: i64, exponent: i64) -> Self {
        if significand == 0 {
            return Self {
                significand: 0,
                exponent: 0,
            };
        }
        let mut sig = significand;
        let mut exp = exponent;
        while sig % 10 == 0 {
            sig /= 10;
            exp = exp.wrapping_add(1);
        }
        Self {
            significand: sig,
            exponent: exp,
        }
    }

    /// Refit a wide intermediate result into the i64 significand.
    ///
    /// Trailing zeros are stripped first so exact results lose nothing; only
    /// then are least-significant digits dropped (truncation toward zero)
    /// until the significand fits.
    fn from_wide(mut significand: i128, mut exponent: i64) -> Self {
        if significand == 0 {
            return Self::ZERO;
        }
        while significand % 10 == 0 {
            significand /= 10;
            exponent = exponent.wrapping_add(1);
        }
        while significand > i64::MAX as i128 || significand < i64::MIN as i128 {
            significand /= 10;
            exponent = exponent.wrapping_add(1);
        }
        Self::new(significand as i64, exponent)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The canonical significand.
    #[inline]
    pub const fn significand(self) -> i64 {
        self.significand
    }

    /// The canonical power-of-ten exponent.
    #[inline]
    pub const fn exponent(self) -> i64 {
        self.exponent
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.significand == 0
    }

    /// Check if value is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.significand > 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.significand < 0
    }

    /// Get absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for the most negative significand, which has no
    /// positive counterpart.
    #[inline]
    pub fn abs(self) -> NumericResult<Self> {
        if self.significand == i64::MIN {
            Err(NumericError::Overflow)
        } else {
            Ok(Self {
                significand: self.significand.abs(),
                exponent: self.exponent,
            })
        }
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Lossy conversion to double precision: `significand × 10^exponent`
    /// under standard floating-point rounding.
    ///
    /// This is an escape hatch for interop and printing; the canonical
    /// arithmetic never goes through it.
    pub fn to_f64(self) -> f64 {
        // powi saturates to ±inf / 0 well inside the clamp, so clamping the
        // cast to i32 loses no representable value
        let exp = self.exponent.clamp(-400, 400) as i32;
        self.significand as f64 * 10f64.powi(exp)
    }

    // ========================================================================
    // Division
    // ========================================================================

    /// Checked division with a fixed precision of 18 significant digits.
    ///
    /// The dividend significand is scaled up until the integer quotient
    /// exposes `DIVISION_DIGITS` digits plus one probe digit; the probe is
    /// kept only when the quotient terminates on it, so terminating
    /// quotients are exact and repeating ones truncate toward zero.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for a zero divisor.
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.significand == 0 {
            return Err(NumericError::DivisionByZero);
        }
        if self.significand == 0 {
            return Ok(Self::ZERO);
        }

        let scale_digits = (Self::DIVISION_DIGITS + 1 + decimal_digits(rhs.significand))
            .saturating_sub(decimal_digits(self.significand));
        // at most 37 scale digits on a 19-digit significand: fits i128
        let scaled = self.significand as i128 * pow10(scale_digits);
        let divisor = rhs.significand as i128;

        let mut quotient = scaled / divisor;
        let mut exponent = self
            .exponent
            .wrapping_sub(rhs.exponent)
            .wrapping_sub(scale_digits as i64);

        if scaled % divisor != 0 {
            // probe digit is unreliable on a non-terminating quotient
            quotient /= 10;
            exponent = exponent.wrapping_add(1);
        }

        Ok(Self::from_wide(quotient, exponent))
    }
}

impl Default for Exponential {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

// ============================================================================
// Ordering
// ============================================================================

impl Ord for Exponential {
    /// Total order by the represented real value.
    fn cmp(&self, other: &Self) -> Ordering {
        let lsign = self.significand.signum();
        let rsign = other.significand.signum();
        if lsign != rsign {
            return lsign.cmp(&rsign);
        }
        if lsign == 0 {
            return Ordering::Equal;
        }

        // decimal order of magnitude: exponent plus digit count
        let lmag = self.exponent as i128 + decimal_digits(self.significand) as i128;
        let rmag = other.exponent as i128 + decimal_digits(other.significand) as i128;
        if lmag != rmag {
            return if lsign > 0 {
                lmag.cmp(&rmag)
            } else {
                rmag.cmp(&lmag)
            };
        }

        // equal magnitude order bounds the exponent gap by 18 digits, so the
        // significands align exactly in the i128 domain
        if self.exponent >= other.exponent {
            let gap = (self.exponent as i128 - other.exponent as i128) as u32;
            (self.significand as i128 * pow10(gap)).cmp(&(other.significand as i128))
        } else {
            let gap = (other.exponent as i128 - self.exponent as i128) as u32;
            (self.significand as i128).cmp(&(other.significand as i128 * pow10(gap)))
        }
    }
}

impl PartialOrd for Exponential {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// Arithmetic Operators
// ============================================================================

impl Neg for Exponential {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        // negation never changes trailing-zero structure; the most negative
        // significand wraps onto itself
        Self {
            significand: self.significand.wrapping_neg(),
            exponent: self.exponent,
        }
    }
}

impl Add for Exponential {
    type Output = Self;

    /// Alignment-based addition: both significands are rescaled to the
    /// smaller exponent in the i128 domain, combined, and refit. Exact
    /// whenever the additive boundedness predicate holds. Beyond an
    /// exponent gap of 19 the smaller operand lies below the precision the
    /// result can carry and the dominant operand is returned unchanged.
    fn add(self, rhs: Self) -> Self::Output {
        if self.significand == 0 {
            return rhs;
        }
        if rhs.significand == 0 {
            return self;
        }

        let (hi, lo) = if self.exponent >= rhs.exponent {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let gap = hi.exponent as i128 - lo.exponent as i128;
        if gap > MAX_ALIGN_GAP {
            return hi;
        }

        let scaled = hi.significand as i128 * pow10(gap as u32);
        Self::from_wide(scaled + lo.significand as i128, lo.exponent)
    }
}

impl Sub for Exponential {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Mul for Exponential {
    type Output = Self;

    /// Significand product, exponent sum. Exact whenever the product fits
    /// the i64 significand.
    fn mul(self, rhs: Self) -> Self::Output {
        if self.significand == 0 || rhs.significand == 0 {
            return Self::ZERO;
        }
        let product = self.significand as i128 * rhs.significand as i128;
        Self::from_wide(product, self.exponent.wrapping_add(rhs.exponent))
    }
}

impl Div for Exponential {
    type Output = Self;

    /// Fixed-precision division. Panics on a zero divisor; use
    /// [`Exponential::checked_div`] where the divisor is not known to be
    /// nonzero.
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("Exponential division by zero")
    }
}

// ============================================================================
// Integer Interop
// ============================================================================

macro_rules! impl_from_int {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Exponential {
            #[inline]
            fn from(value: $t) -> Self {
                Self::new(value as i64, 0)
            }
        }
    )*};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_int_binop {
    ($op:ident, $method:ident) => {
        impl $op<i64> for Exponential {
            type Output = Exponential;

            #[inline]
            fn $method(self, rhs: i64) -> Exponential {
                self.$method(Exponential::from(rhs))
            }
        }

        impl $op<Exponential> for i64 {
            type Output = Exponential;

            #[inline]
            fn $method(self, rhs: Exponential) -> Exponential {
                Exponential::from(self).$method(rhs)
            }
        }
    };
}

impl_int_binop!(Add, add);
impl_int_binop!(Sub, sub);
impl_int_binop!(Mul, mul);
impl_int_binop!(Div, div);

impl PartialEq<i64> for Exponential {
    #[inline]
    fn eq(&self, other: &i64) -> bool {
        *self == Exponential::from(*other)
    }
}

impl PartialEq<Exponential> for i64 {
    #[inline]
    fn eq(&self, other: &Exponential) -> bool {
        Exponential::from(*self) == *other
    }
}

impl From<(i64, i64)> for Exponential {
    #[inline]
    fn from((significand, exponent): (i64, i64)) -> Self {
        Self::new(significand, exponent)
    }
}

impl From<Exponential> for (i64, i64) {
    #[inline]
    fn from(value: Exponential) -> Self {
        (value.significand, value.exponent)
    }
}

impl From<Exponential> for f64 {
    #[inline]
    fn from(value: Exponential) -> Self {
        value.to_f64()
    }
}

// ============================================================================
// Display, Debug and Parsing
// ============================================================================

impl fmt::Display for Exponential {
    /// Canonical rendering: `"<significand>"` when the exponent is zero,
    /// otherwise `"<significand>e<exponent>"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponent == 0 {
            write!(f, "{}", self.significand)
        } else {
            write!(f, "{}e{}", self.significand, self.exponent)
        }
    }
}

impl fmt::Debug for Exponential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Exponential({}, {})", self.significand, self.exponent)
    }
}

impl FromStr for Exponential {
    type Err = NumericError;

    /// Parse the canonical rendering back into a value.
    ///
    /// # Examples
    /// - "42" -> (42, 0)
    /// - "42e1" -> (42, 1)
    /// - "-1e-9" -> (-1, -9)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let (sig_str, exp_str) = match s.split_once(['e', 'E']) {
            Some((sig, exp)) => (sig, Some(exp)),
            None => (s, None),
        };

        let significand: i64 = sig_str.parse().map_err(|_| NumericError::InvalidInput)?;
        let exponent: i64 = match exp_str {
            Some(exp) => exp.parse().map_err(|_| NumericError::InvalidInput)?,
            None => 0,
        };

        Ok(Self::new(significand, exponent))
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalization_is_idempotent_and_canonical(
            sig in any::<i64>(),
            exp in -1_000i64..1_000,
        ) {
            let x = Exponential::new(sig, exp);
            if x.significand() == 0 {
                prop_assert_eq!(x.exponent(), 0);
            } else {
                prop_assert_ne!(x.significand() % 10, 0);
            }
            prop_assert_eq!(Exponential::new(x.significand(), x.exponent()), x);
        }

        #[test]
        fn additive_identity(sig in any::<i64>(), exp in -1_000i64..1_000) {
            let x = Exponential::new(sig, exp);
            prop_assert_eq!(x + Exponential::ZERO, x);
            prop_assert_eq!(Exponential::ZERO - x, -x);
        }

        #[test]
        fn addition_commutes(
            a_sig in -1_000_000i64..=1_000_000,
            a_exp in -20i64..=20,
            b_sig in -1_000_000i64..=1_000_000,
            b_exp in -20i64..=20,
        ) {
            let a = Exponential::new(a_sig, a_exp);
            let b = Exponential::new(b_sig, b_exp);
            prop_assert_eq!(a + b, b + a);
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn division_inverts_multiplication(
            sig in -9_999i64..=9_999,
            shift in 0u32..=18,
        ) {
            prop_assume!(sig != 0);
            let x = Exponential::from(sig);
            // powers of two give terminating decimal quotients within the
            // fixed division precision
            let b = Exponential::from(1i64 << shift);
            prop_assert_eq!((x / b) * b, x);
            prop_assert_eq!((x * b) / b, x);
        }

        #[test]
        fn display_round_trips(sig in any::<i64>(), exp in -1_000i64..1_000) {
            let x = Exponential::new(sig, exp);
            let parsed: Exponential = x.to_string().parse().unwrap();
            prop_assert_eq!(parsed, x);
        }

        #[test]
        fn ordering_agrees_with_subtraction_sign(
            a_sig in -1_000_000i64..=1_000_000,
            a_exp in -10i64..=10,
            b_sig in -1_000_000i64..=1_000_000,
            b_exp in -10i64..=10,
        ) {
            let a = Exponential::new(a_sig, a_exp);
            let b = Exponential::new(b_sig, b_exp);
            let diff = a - b;
            match a.cmp(&b) {
                std::cmp::Ordering::Less => prop_assert!(diff.is_negative()),
                std::cmp::Ordering::Equal => prop_assert!(diff.is_zero()),
                std::cmp::Ordering::Greater => prop_assert!(diff.is_positive()),
            }
        }
    }
}
