//! ratio_int — fixed-width integer capabilities consumed by `ratio_core`.
//!
//! This crate is **allocation-free** and has no state. It provides:
//! - `FixedInt`: the signed backing-integer capability set (checked ops via
//!   `num_traits`, magnitude extraction, exact re-signing)
//! - `Magnitude`: the unsigned counterpart, with double-width products
//! - Binary (Stein's) GCD over magnitudes
//! - Exact comparison of two products that may not fit the native width

#![forbid(unsafe_code)]

use core::cmp::Ordering;
use core::fmt;
use core::hash::Hash;

use num_traits::{CheckedNeg, PrimInt, Signed, Unsigned};

/* -------------------------------------------------------------------------- */
/*                                  Traits                                    */
/* -------------------------------------------------------------------------- */

/// Unsigned magnitude of a `FixedInt`.
pub trait Magnitude:
    PrimInt + Unsigned + Hash + fmt::Debug + fmt::Display + Default + Send + Sync + 'static
{
    /// Full product as `(high, low)` words; never overflows.
    fn mul_wide(self, rhs: Self) -> (Self, Self);

    /// Lossless widening of a small value (digits, radices).
    fn from_u8(v: u8) -> Self;

    /// Lowest 8 bits. Callers only use this on values already known to be `< 256`.
    fn low_u8(self) -> u8;
}

/// Signed fixed-width integer usable as the backing type of a rational.
///
/// Checked add/sub/mul/neg, trailing-zero counts, bounds and zero/one come from
/// the `num_traits` supertraits; this trait adds the signed/unsigned bridge.
pub trait FixedInt:
    PrimInt + Signed + CheckedNeg + Hash + fmt::Debug + fmt::Display + Default + Send + Sync + 'static
{
    type Magnitude: Magnitude;

    /// `|self|` in the unsigned counterpart. Total, including `MIN`.
    fn magnitude(self) -> Self::Magnitude;

    /// Re-attach a sign to a magnitude. `None` when the result does not fit
    /// (for `i8`: `+128` fails, `-128` succeeds).
    fn from_magnitude(m: Self::Magnitude, negative: bool) -> Option<Self>;

    /// Reinterpret the bits of `m`. Only meaningful for `m <= Self::MAX`.
    fn cast_from_magnitude(m: Self::Magnitude) -> Self;
}

/* -------------------------------------------------------------------------- */
/*                              Implementations                               */
/* -------------------------------------------------------------------------- */

macro_rules! impl_magnitude_via_u128 {
    ($($u:ty),+ $(,)?) => {$(
        impl Magnitude for $u {
            #[inline]
            fn mul_wide(self, rhs: Self) -> (Self, Self) {
                let wide = (self as u128) * (rhs as u128);
                ((wide >> <$u>::BITS) as $u, wide as $u)
            }
            #[inline]
            fn from_u8(v: u8) -> Self { v as $u }
            #[inline]
            fn low_u8(self) -> u8 { self as u8 }
        }
    )+};
}

impl_magnitude_via_u128!(u8, u16, u32, u64, usize);

impl Magnitude for u128 {
    /// Schoolbook multiplication on 64-bit halves.
    fn mul_wide(self, rhs: Self) -> (Self, Self) {
        const MASK: u128 = u64::MAX as u128;
        let (a_hi, a_lo) = (self >> 64, self & MASK);
        let (b_hi, b_lo) = (rhs >> 64, rhs & MASK);

        let ll = a_lo * b_lo;
        let lh = a_lo * b_hi;
        let hl = a_hi * b_lo;
        let hh = a_hi * b_hi;

        // Each term < 2^64, so the sum stays below 2^66.
        let mid = (ll >> 64) + (lh & MASK) + (hl & MASK);
        let lo = (ll & MASK) | (mid << 64);
        let hi = hh + (lh >> 64) + (hl >> 64) + (mid >> 64);
        (hi, lo)
    }
    #[inline]
    fn from_u8(v: u8) -> Self { v as u128 }
    #[inline]
    fn low_u8(self) -> u8 { self as u8 }
}

macro_rules! impl_fixed_int {
    ($($i:ty => $u:ty),+ $(,)?) => {$(
        impl FixedInt for $i {
            type Magnitude = $u;

            #[inline]
            fn magnitude(self) -> $u { self.unsigned_abs() }

            #[inline]
            fn from_magnitude(m: $u, negative: bool) -> Option<$i> {
                if m <= <$i>::MAX as $u {
                    let v = m as $i;
                    Some(if negative { -v } else { v })
                } else if negative && m == <$i>::MIN as $u {
                    Some(<$i>::MIN)
                } else {
                    None
                }
            }

            #[inline]
            fn cast_from_magnitude(m: $u) -> $i { m as $i }
        }
    )+};
}

impl_fixed_int!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);

/* -------------------------------------------------------------------------- */
/*                                Binary GCD                                  */
/* -------------------------------------------------------------------------- */

/// Greatest common divisor by Stein's algorithm (shifts and subtraction only).
///
/// `gcd(0, y) == y`, `gcd(x, 0) == x`, and `gcd(0, 0) == 0`.
pub fn gcd<M: Magnitude>(mut a: M, mut b: M) -> M {
    if a.is_zero() {
        return b;
    }
    if b.is_zero() {
        return a;
    }

    let shift = (a | b).trailing_zeros() as usize;
    a = a >> a.trailing_zeros() as usize;
    loop {
        b = b >> b.trailing_zeros() as usize;
        if a > b {
            core::mem::swap(&mut a, &mut b);
        }
        // Both odd here, so the difference is even (or zero).
        b = b - a;
        if b.is_zero() {
            return a << shift;
        }
    }
}

/// GCD of the magnitudes of two signed values. Safe for `MIN`.
#[inline]
pub fn gcd_of<I: FixedInt>(a: I, b: I) -> I::Magnitude {
    gcd(a.magnitude(), b.magnitude())
}

/* -------------------------------------------------------------------------- */
/*                           Double-width comparison                          */
/* -------------------------------------------------------------------------- */

/// Exact comparison of `a * b` against `c * d` using double-width products.
#[inline]
pub fn widening_cmp<M: Magnitude>(a: M, b: M, c: M, d: M) -> Ordering {
    a.mul_wide(b).cmp(&c.mul_wide(d))
}

/* ---------------------------------- Tests --------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn euclid(mut a: u64, mut b: u64) -> u64 {
        while b != 0 {
            let r = a % b;
            a = b;
            b = r;
        }
        a
    }

    #[test]
    fn gcd_zero_conventions() {
        assert_eq!(gcd(0u32, 0), 0);
        assert_eq!(gcd(0u32, 12), 12);
        assert_eq!(gcd(18u32, 0), 18);
    }

    #[test]
    fn gcd_small_cases() {
        assert_eq!(gcd(12u8, 18), 6);
        assert_eq!(gcd(17u16, 5), 1);
        assert_eq!(gcd(1u64 << 40, 1u64 << 12), 1 << 12);
        assert_eq!(gcd(u128::MAX, 3), 3);
    }

    #[test]
    fn gcd_of_handles_min() {
        assert_eq!(gcd_of(i8::MIN, i8::MIN), 128u8);
        assert_eq!(gcd_of(i8::MIN, 6i8), 2u8);
        assert_eq!(gcd_of(i64::MIN, 0i64), 1u64 << 63);
    }

    #[test]
    fn from_magnitude_edges() {
        assert_eq!(i8::from_magnitude(127, false), Some(127));
        assert_eq!(i8::from_magnitude(128, false), None);
        assert_eq!(i8::from_magnitude(128, true), Some(i8::MIN));
        assert_eq!(i8::from_magnitude(129, true), None);
        assert_eq!(i8::from_magnitude(0, true), Some(0));
        assert_eq!(i128::from_magnitude(1u128 << 127, true), Some(i128::MIN));
    }

    #[test]
    fn magnitude_of_min() {
        assert_eq!(i16::MIN.magnitude(), 32768u16);
        assert_eq!((-5i32).magnitude(), 5u32);
    }

    #[test]
    fn mul_wide_u128_extremes() {
        assert_eq!(u128::MAX.mul_wide(u128::MAX), (u128::MAX - 1, 1));
        assert_eq!((1u128 << 64).mul_wide(1u128 << 64), (1, 0));
        assert_eq!(3u128.mul_wide(5), (0, 15));
    }

    #[test]
    fn widening_cmp_beyond_native_width() {
        // 2^63 * 4 vs 2^62 * 8 are equal but both overflow u64.
        assert_eq!(widening_cmp(1u64 << 63, 4, 1u64 << 62, 8), Ordering::Equal);
        assert_eq!(widening_cmp(u64::MAX, u64::MAX, u64::MAX, u64::MAX - 1), Ordering::Greater);
    }

    proptest! {
        #[test]
        fn gcd_matches_euclid(a in any::<u64>(), b in any::<u64>()) {
            prop_assert_eq!(gcd(a, b), euclid(a, b));
        }

        #[test]
        fn mul_wide_u64_matches_u128(a in any::<u64>(), b in any::<u64>()) {
            let (hi, lo) = a.mul_wide(b);
            prop_assert_eq!(((hi as u128) << 64) | lo as u128, a as u128 * b as u128);
        }

        #[test]
        fn mul_wide_u128_splits_consistently(a in any::<u64>(), b in any::<u64>(), s in 0u32..64) {
            // (a << s) * b == (a * b) << s, checked in 256-bit words.
            let (hi, lo) = ((a as u128) << s).mul_wide(b as u128);
            let p = a as u128 * b as u128;
            let expected_lo = p << s;
            let expected_hi = if s == 0 { 0 } else { p >> (128 - s) };
            prop_assert_eq!((hi, lo), (expected_hi, expected_lo));
        }
    }
}
