//! Equality, hashing and total order.
//!
//! Canonical form makes structural equality value equality. Ordering uses
//! checked cross-multiplication and falls back to double-width products only
//! when that overflows, so it is always exact.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use ratio_int::{widening_cmp, FixedInt};

use crate::rational::Rational;

impl<I: FixedInt> PartialEq for Rational<I> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        if self.is_zero() || other.is_zero() {
            return self.is_zero() && other.is_zero();
        }
        self.numerator == other.numerator && self.denominator == other.denominator
    }
}

impl<I: FixedInt> Eq for Rational<I> {}

impl<I: FixedInt> Hash for Rational<I> {
    /// Hashes `(sign, |numerator|, denominator)`; zero always has sign `Plus`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign().hash(state);
        self.numerator.magnitude().hash(state);
        self.denominator.hash(state);
    }
}

impl<I: FixedInt> Ord for Rational<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        let ls = self.numerator.signum();
        let rs = other.numerator.signum();
        // Zero on either side, or opposite signs: the signs decide.
        if ls != rs || self.is_zero() {
            return ls.cmp(&rs);
        }
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }

        let (n1, d1) = (self.numerator, self.denominator);
        let (n2, d2) = (other.numerator, other.denominator);
        if let (Some(l), Some(r)) = (n1.checked_mul(&d2), n2.checked_mul(&d1)) {
            return l.cmp(&r);
        }

        tracing::trace!("cross-multiplication overflowed; comparing double-width products");
        let by_magnitude = widening_cmp(n1.magnitude(), d2.magnitude(), n2.magnitude(), d1.magnitude());
        if self.is_negative() { by_magnitude.reverse() } else { by_magnitude }
    }
}

impl<I: FixedInt> PartialOrd for Rational<I> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/* ---------------------------------- Tests --------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(v: &T) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn zero_equal_and_hash_regardless_of_construction() {
        let a = Rational::new(0i32, -7);
        let b = Rational::new(0i32, 1);
        let c = Rational::new(3i32, 5) - Rational::new(3, 5);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(hash_of(&b), hash_of(&c));
    }

    #[test]
    fn equal_values_hash_equal() {
        assert_eq!(hash_of(&Rational::new(2i64, 4)), hash_of(&Rational::new(-3i64, -6)));
        assert_ne!(Rational::new(1i64, 2), Rational::new(-1i64, 2));
    }

    #[test]
    fn order_by_sign_first() {
        let neg = Rational::new(-1i32, 1000);
        let zero = Rational::<i32>::zero();
        let pos = Rational::new(1i32, 1000);
        assert!(neg < zero && zero < pos && neg < pos);
        assert!(pos > neg);
    }

    #[test]
    fn order_same_sign() {
        assert!(Rational::new(1i32, 3) < Rational::new(1, 2));
        assert!(Rational::new(-1i32, 2) < Rational::new(-1, 3));
        assert!(Rational::new(5i32, 7) > Rational::new(2, 7));
        assert_eq!(Rational::new(2i32, 6).cmp(&Rational::new(1, 3)), Ordering::Equal);
    }

    #[test]
    fn order_falls_back_to_wide_products() {
        let m = i64::MAX;
        let a = Rational::new(m - 1, m);
        let b = Rational::new(m - 2, m - 1);
        assert!(a > b);
        assert!((-a) < (-b));

        let m = i128::MAX;
        let a = Rational::new(m - 1, m);
        let b = Rational::new(m - 2, m - 1);
        assert!(a > b);
        assert!((-a) < (-b));
    }

    #[test]
    fn extremes_order() {
        let min = Rational::<i8>::min_value();
        let max = Rational::<i8>::max_value();
        let tiny = Rational::new(1i8, 127);
        assert!(min < -tiny && -tiny < tiny && tiny < max);
        assert_eq!(min.max(max), max);
    }
}
