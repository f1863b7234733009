//! Arithmetic engine.
//!
//! One algorithm per operator, exposed twice:
//! - reporting: `checked_*` returning `ArithmeticResult`
//! - trapping: the `core::ops` impls, which call the reporting form and panic
//!   on error via [`trap`]
//!
//! All algorithms divide common factors out *before* multiplying, so an
//! intermediate product only overflows when the reduced result is itself out
//! of range or very close to it.

use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use ratio_int::{gcd, gcd_of, FixedInt};

use crate::errors::{ArithmeticError, ArithmeticResult, Operation};
use crate::rational::Rational;

/// Unwrap a reporting result or fault.
///
/// This is the only place where an `ArithmeticError` becomes a panic.
#[track_caller]
pub(crate) fn trap<T>(result: ArithmeticResult<T>) -> T {
    match result {
        Ok(v) => v,
        Err(err) => {
            tracing::error!(operation = %err.operation(), error = %err, "trapping rational operation failed");
            panic!("{err}");
        }
    }
}

impl<I: FixedInt> Rational<I> {
    /* ----------------------------- add / sub ------------------------------ */

    pub fn checked_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.add_or_sub(rhs, Operation::Add)
    }

    pub fn checked_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.add_or_sub(rhs, Operation::Subtract)
    }

    /// Common-denominator sum over `lcm(d1, d2)`, never over `d1 * d2`.
    ///
    /// With `g = gcd(d1, d2)`, `m1 = d2 / g`, `m2 = d1 / g`:
    /// `t = n1*m1 ± n2*m2` and the unreduced denominator is `d1*m1`. Any factor
    /// shared by `t` and that denominator divides `g`, so the second reduction
    /// only needs `gcd(t, g)`, and is skipped entirely when `g == 1`.
    fn add_or_sub(self, rhs: Self, op: Operation) -> ArithmeticResult<Self> {
        let subtract = op == Operation::Subtract;
        if rhs.is_zero() {
            return Ok(self);
        }
        if self.is_zero() {
            return if subtract { rhs.negate_as(op) } else { Ok(rhs) };
        }

        let overflow = ArithmeticError::Overflow(op);
        let (n1, d1) = (self.numerator, self.denominator);
        let (n2, d2) = (rhs.numerator, rhs.denominator);

        // g <= min(d1, d2) <= I::MAX
        let g = I::cast_from_magnitude(gcd_of(d1, d2));
        let m1 = d2 / g;
        let m2 = d1 / g;

        let t = n1
            .checked_mul(&m1)
            .zip(n2.checked_mul(&m2))
            .and_then(|(a, b)| if subtract { a.checked_sub(&b) } else { a.checked_add(&b) })
            .ok_or(overflow)?;
        if t.is_zero() {
            return Ok(Self::zero());
        }

        if g.is_one() {
            let d = d1.checked_mul(&m1).ok_or(overflow)?;
            return Ok(Self::from_canonical(t, d));
        }

        let g2 = I::cast_from_magnitude(gcd(t.magnitude(), g.magnitude()));
        let d = (d1 / g2).checked_mul(&m1).ok_or(overflow)?;
        Ok(Self::from_canonical(t / g2, d))
    }

    /* -------------------------------- mul --------------------------------- */

    /// Cross-reduces `(n1, d2)` and `(n2, d1)` before multiplying; the products
    /// are then already the canonical parts of the result.
    pub fn checked_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::zero());
        }
        let overflow = ArithmeticError::Overflow(Operation::Multiply);

        // Each gcd is bounded by a denominator, so it fits I.
        let g1 = I::cast_from_magnitude(gcd_of(self.numerator, rhs.denominator));
        let g2 = I::cast_from_magnitude(gcd_of(rhs.numerator, self.denominator));

        let n = (self.numerator / g1)
            .checked_mul(&(rhs.numerator / g2))
            .ok_or(overflow)?;
        let d = (self.denominator / g2)
            .checked_mul(&(rhs.denominator / g1))
            .ok_or(overflow)?;
        Ok(Self::from_canonical(n, d))
    }

    /* -------------------------------- div --------------------------------- */

    /// Multiplication by the reciprocal, fused so the divisor's numerator is
    /// cross-reduced before it moves into denominator position.
    ///
    /// The divisor's sign moves onto its denominator factor before anything is
    /// multiplied, so both products are already signed correctly. Making the
    /// new denominator positive fails exactly when it would be `|I::MIN|`, e.g.
    /// `x / MIN` for odd `x`.
    pub fn checked_div(self, rhs: Self) -> ArithmeticResult<Self> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero(Operation::Divide));
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }
        let overflow = ArithmeticError::Overflow(Operation::Divide);

        // gcd of the numerators exceeds I::MAX only when both are MIN; the cast
        // then yields MIN itself and MIN / MIN == 1 on both sides.
        let g1 = I::cast_from_magnitude(gcd_of(self.numerator, rhs.numerator));
        let g2 = I::cast_from_magnitude(gcd_of(self.denominator, rhs.denominator));

        let mut divisor_n = rhs.numerator / g1;
        let mut divisor_d = rhs.denominator / g2;
        if divisor_n.is_negative() {
            divisor_n = divisor_n.checked_neg().ok_or(overflow)?;
            divisor_d = -divisor_d;
        }

        let n = (self.numerator / g1).checked_mul(&divisor_d).ok_or(overflow)?;
        let d = (self.denominator / g2).checked_mul(&divisor_n).ok_or(overflow)?;
        Ok(Self::from_canonical(n, d))
    }

    /* --------------------------- unary operations -------------------------- */

    pub fn checked_neg(self) -> ArithmeticResult<Self> {
        self.negate_as(Operation::Negate)
    }

    pub fn checked_abs(self) -> ArithmeticResult<Self> {
        if self.is_negative() { self.negate_as(Operation::Abs) } else { Ok(self) }
    }

    #[track_caller]
    pub fn abs(self) -> Self {
        trap(self.checked_abs())
    }

    /// `1 / self`. Fails on zero, and on a `MIN` numerator (its magnitude
    /// cannot become a positive denominator).
    pub fn checked_recip(self) -> ArithmeticResult<Self> {
        if self.is_zero() {
            return Err(ArithmeticError::DivisionByZero(Operation::Reciprocal));
        }
        if self.is_negative() {
            let d = self
                .numerator
                .checked_neg()
                .ok_or(ArithmeticError::Overflow(Operation::Reciprocal))?;
            // A positive denominator always negates.
            return Ok(Self::from_canonical(-self.denominator, d));
        }
        Ok(Self::from_canonical(self.denominator, self.numerator))
    }

    #[track_caller]
    pub fn recip(self) -> Self {
        trap(self.checked_recip())
    }

    fn negate_as(self, op: Operation) -> ArithmeticResult<Self> {
        let n = self.numerator.checked_neg().ok_or(ArithmeticError::Overflow(op))?;
        Ok(Self::from_canonical(n, self.denominator))
    }
}

/* -------------------------------------------------------------------------- */
/*                             Trapping operators                             */
/* -------------------------------------------------------------------------- */

macro_rules! trapping_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $checked:ident) => {
        impl<I: FixedInt> $imp for Rational<I> {
            type Output = Rational<I>;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: Rational<I>) -> Rational<I> {
                trap(self.$checked(rhs))
            }
        }

        impl<'a, I: FixedInt> $imp<&'a Rational<I>> for Rational<I> {
            type Output = Rational<I>;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: &'a Rational<I>) -> Rational<I> {
                trap(self.$checked(*rhs))
            }
        }

        impl<'a, I: FixedInt> $imp<Rational<I>> for &'a Rational<I> {
            type Output = Rational<I>;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: Rational<I>) -> Rational<I> {
                trap((*self).$checked(rhs))
            }
        }

        impl<'a, 'b, I: FixedInt> $imp<&'b Rational<I>> for &'a Rational<I> {
            type Output = Rational<I>;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: &'b Rational<I>) -> Rational<I> {
                trap((*self).$checked(*rhs))
            }
        }

        impl<I: FixedInt> $assign_imp for Rational<I> {
            #[track_caller]
            #[inline]
            fn $assign_method(&mut self, rhs: Rational<I>) {
                *self = trap(self.$checked(rhs));
            }
        }

        impl<'a, I: FixedInt> $assign_imp<&'a Rational<I>> for Rational<I> {
            #[track_caller]
            #[inline]
            fn $assign_method(&mut self, rhs: &'a Rational<I>) {
                *self = trap(self.$checked(*rhs));
            }
        }
    };
}

trapping_binop!(Add, add, AddAssign, add_assign, checked_add);
trapping_binop!(Sub, sub, SubAssign, sub_assign, checked_sub);
trapping_binop!(Mul, mul, MulAssign, mul_assign, checked_mul);
trapping_binop!(Div, div, DivAssign, div_assign, checked_div);

impl<I: FixedInt> Neg for Rational<I> {
    type Output = Rational<I>;

    #[track_caller]
    #[inline]
    fn neg(self) -> Rational<I> {
        trap(self.checked_neg())
    }
}

impl<'a, I: FixedInt> Neg for &'a Rational<I> {
    type Output = Rational<I>;

    #[track_caller]
    #[inline]
    fn neg(self) -> Rational<I> {
        trap((*self).checked_neg())
    }
}

impl<I: FixedInt> Sum for Rational<I> {
    #[track_caller]
    fn sum<It: Iterator<Item = Rational<I>>>(mut iter: It) -> Self {
        trap(
            iter.try_fold(Rational::zero(), |acc, x| acc.checked_add(x))
                .map_err(|_| ArithmeticError::Overflow(Operation::Sum)),
        )
    }
}

impl<'a, I: FixedInt> Sum<&'a Rational<I>> for Rational<I> {
    #[track_caller]
    fn sum<It: Iterator<Item = &'a Rational<I>>>(iter: It) -> Self {
        iter.copied().sum()
    }
}

impl<I: FixedInt> Product for Rational<I> {
    #[track_caller]
    fn product<It: Iterator<Item = Rational<I>>>(mut iter: It) -> Self {
        trap(
            iter.try_fold(Rational::one(), |acc, x| acc.checked_mul(x))
                .map_err(|_| ArithmeticError::Overflow(Operation::Product)),
        )
    }
}

impl<'a, I: FixedInt> Product<&'a Rational<I>> for Rational<I> {
    #[track_caller]
    fn product<It: Iterator<Item = &'a Rational<I>>>(iter: It) -> Self {
        iter.copied().product()
    }
}

/* ---------------------------------- Tests --------------------------------- */
