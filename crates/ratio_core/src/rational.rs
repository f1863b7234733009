//! The `Rational<I>` value: canonical representation, construction and
//! introspection.
//!
//! Canonical form (holds for every live value):
//! - `denominator > 0`
//! - `gcd(|numerator|, denominator) == 1`, with zero stored as `0/1`
//! - the sign lives in the numerator only
//!
//! Fields are private and never mutated after construction; the assignment
//! operators replace the whole value.

use num_traits::{Bounded, One, Zero};
use ratio_int::{gcd_of, FixedInt};

use crate::arith::trap;
use crate::errors::{ArithmeticError, ArithmeticResult, Operation, TryFromRationalError};
use crate::sign::Sign;

/// Exact fraction of two `I` values in canonical reduced form.
#[derive(Clone, Copy, Debug)]
pub struct Rational<I: FixedInt> {
    pub(crate) numerator: I,
    pub(crate) denominator: I,
}

impl<I: FixedInt> Rational<I> {
    /* ---------------------------- construction ---------------------------- */

    /// Build from an already-canonical pair.
    #[inline]
    pub(crate) fn from_canonical(numerator: I, denominator: I) -> Self {
        debug_assert!(denominator > I::zero(), "denominator must be positive");
        debug_assert!(
            gcd_of(numerator, denominator) == I::Magnitude::one(),
            "numerator and denominator must be coprime"
        );
        Self { numerator, denominator }
    }

    /// Reduce `numerator / denominator` to canonical form.
    ///
    /// Fails with `DivisionByZero(Construct)` for a zero denominator and with
    /// `Overflow(Construct)` when moving the sign to the numerator is not
    /// representable (`(MIN, -1)`, or `(odd, MIN)`).
    pub fn try_new(numerator: I, denominator: I) -> ArithmeticResult<Self> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero(Operation::Construct));
        }
        // Covers (0, MIN) and (MIN, MIN), whose magnitudes do not fit `I`.
        if numerator.is_zero() {
            return Ok(Self::zero());
        }
        if numerator == denominator {
            return Ok(Self::one());
        }

        // Both operands nonzero and unequal, so g <= I::MAX.
        let g = I::cast_from_magnitude(gcd_of(numerator, denominator));
        let (mut n, mut d) = (numerator / g, denominator / g);
        if d.is_negative() {
            n = n.checked_neg().ok_or(ArithmeticError::Overflow(Operation::Construct))?;
            d = d.checked_neg().ok_or(ArithmeticError::Overflow(Operation::Construct))?;
        }
        Ok(Self::from_canonical(n, d))
    }

    /// Trapping form of [`Rational::try_new`].
    ///
    /// # Panics
    /// If `denominator` is zero, or the reduced value is not representable.
    #[track_caller]
    pub fn new(numerator: I, denominator: I) -> Self {
        trap(Self::try_new(numerator, denominator))
    }

    #[inline]
    pub fn from_integer(value: I) -> Self {
        Self::from_canonical(value, I::one())
    }

    /// `integral + fractional` over `fractional.denominator`.
    ///
    /// The whole part of `fractional` is folded into `integral` first. If the
    /// two remaining parts differ in sign, one unit moves from the whole part
    /// to the remainder so they agree; `whole * d + rem` then overflows only
    /// when the result does, which is the only `Overflow(Mixed)` case.
    ///
    /// No second reduction is needed: the new numerator is congruent to the old
    /// one modulo the denominator, so they stay coprime.
    pub fn try_from_mixed(integral: I, fractional: Rational<I>) -> ArithmeticResult<Self> {
        let overflow = ArithmeticError::Overflow(Operation::Mixed);
        let d = fractional.denominator;
        let (q, r) = fractional.quotient_and_remainder();

        // Opposite signs cannot overflow; equal signs overflow only if the value does.
        let mut whole = integral.checked_add(&q).ok_or(overflow)?;
        let mut rem = r;
        if !whole.is_zero() && !rem.is_zero() && whole.is_negative() != rem.is_negative() {
            let unit = whole.signum();
            whole = whole - unit;
            rem = rem + unit * d;
        }

        let n = whole
            .checked_mul(&d)
            .and_then(|scaled| scaled.checked_add(&rem))
            .ok_or(overflow)?;
        if n.is_zero() {
            return Ok(Self::zero());
        }
        Ok(Self::from_canonical(n, fractional.denominator))
    }

    #[track_caller]
    pub fn from_mixed(integral: I, fractional: Rational<I>) -> Self {
        trap(Self::try_from_mixed(integral, fractional))
    }

    /// Exact conversion from any primitive integer; `None` if it does not fit `I`.
    pub fn from_int_exact<J: num_traits::ToPrimitive>(value: J) -> Option<Self> {
        <I as num_traits::NumCast>::from(value).map(Self::from_integer)
    }

    /// Same value over another backing width; `None` if either part does not fit.
    pub fn cast<J: FixedInt>(self) -> Option<Rational<J>> {
        let n = num_traits::cast::<I, J>(self.numerator)?;
        let d = num_traits::cast::<I, J>(self.denominator)?;
        Some(Rational::from_canonical(n, d))
    }

    /* ------------------------------ constants ----------------------------- */

    #[inline]
    pub fn zero() -> Self {
        Self { numerator: I::zero(), denominator: I::one() }
    }

    #[inline]
    pub fn one() -> Self {
        Self { numerator: I::one(), denominator: I::one() }
    }

    /// Smallest representable value, `I::MIN / 1`.
    #[inline]
    pub fn min_value() -> Self {
        Self::from_integer(I::min_value())
    }

    /// Largest representable value, `I::MAX / 1`.
    #[inline]
    pub fn max_value() -> Self {
        Self::from_integer(I::max_value())
    }

    /* ---------------------------- introspection --------------------------- */

    #[inline]
    pub fn numerator(&self) -> I {
        self.numerator
    }

    /// Always strictly positive.
    #[inline]
    pub fn denominator(&self) -> I {
        self.denominator
    }

    /// `Plus` for zero.
    #[inline]
    pub fn sign(&self) -> Sign {
        Sign::of(self.numerator)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// `-1`, `0` or `1` as a rational.
    pub fn signum(&self) -> Self {
        Self::from_integer(self.numerator.signum())
    }

    /// Truncated quotient and remainder of `numerator / denominator`.
    ///
    /// The remainder carries the numerator's sign, so
    /// `quotient * denominator + remainder == numerator`.
    #[inline]
    pub fn quotient_and_remainder(&self) -> (I, I) {
        // denominator > 0, so neither operation can overflow.
        (self.numerator / self.denominator, self.numerator % self.denominator)
    }

    /// Split into `(integral, fractional)` with `integral` truncated toward
    /// zero and `fractional` carrying the value's sign, `|fractional| < 1`.
    pub fn to_mixed(&self) -> (I, Self) {
        let (q, r) = self.quotient_and_remainder();
        let fractional = if r.is_zero() {
            Self::zero()
        } else {
            // gcd(r, d) == gcd(n, d) == 1
            Self::from_canonical(r, self.denominator)
        };
        (q, fractional)
    }

    /* --------------------------- integer targets -------------------------- */

    /// The value as `J` if it is an integer that fits.
    pub fn to_int_exact<J: num_traits::NumCast>(&self) -> Result<J, TryFromRationalError> {
        if !self.is_integer() {
            return Err(TryFromRationalError::NotAnInteger);
        }
        num_traits::cast::<I, J>(self.numerator).ok_or(TryFromRationalError::OutOfRange)
    }

    /// The value truncated toward zero, as `J`.
    pub fn trunc_to<J: num_traits::NumCast>(&self) -> Result<J, TryFromRationalError> {
        let (q, _) = self.quotient_and_remainder();
        num_traits::cast::<I, J>(q).ok_or(TryFromRationalError::OutOfRange)
    }
}

impl<I: FixedInt> Default for Rational<I> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<I: FixedInt> From<I> for Rational<I> {
    #[inline]
    fn from(value: I) -> Self {
        Self::from_integer(value)
    }
}

/* ------------------------- num_traits constant traits ------------------------- */

impl<I: FixedInt> Zero for Rational<I> {
    fn zero() -> Self {
        Rational::zero()
    }

    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }
}

impl<I: FixedInt> One for Rational<I> {
    fn one() -> Self {
        Rational::one()
    }
}

impl<I: FixedInt> Bounded for Rational<I> {
    fn min_value() -> Self {
        Rational::min_value()
    }

    fn max_value() -> Self {
        Rational::max_value()
    }
}

/* ---------------------------------- Tests --------------------------------- */
