//! Lazy expansion of the fractional part in a radix (long division).
//!
//! The sequence ends only when the remainder reaches zero. Repeating
//! expansions (`1/3` in base 10) are infinite; bound them with `take`.
//! Every call to [`Rational::fractional_digits`] starts a fresh iterator from
//! the value's own remainder.

use core::iter::FusedIterator;

use num_traits::Zero;
use ratio_int::FixedInt;

use crate::codec::assert_radix;
use crate::rational::Rational;

/// Digits of `|fractional part|`, most significant first, as values `0..radix`.
#[derive(Clone, Debug)]
pub struct FractionalDigits<I: FixedInt> {
    remainder: I::Magnitude,
    denominator: I::Magnitude,
    radix: u32,
}

impl<I: FixedInt> Rational<I> {
    /// # Panics
    /// If `radix` is outside `2..=36`.
    pub fn fractional_digits(&self, radix: u32) -> FractionalDigits<I> {
        assert_radix(radix);
        let (_, r) = self.quotient_and_remainder();
        FractionalDigits {
            remainder: r.magnitude(),
            denominator: self.denominator.magnitude(),
            radix,
        }
    }
}

impl<I: FixedInt> Iterator for FractionalDigits<I> {
    type Item = u32;

    /// Next digit is `floor(remainder * radix / denominator)`.
    ///
    /// The product is accumulated one `remainder` at a time modulo the
    /// denominator: every partial sum is `< 2 * denominator <= 2 * I::MAX`,
    /// which fits the unsigned magnitude.
    fn next(&mut self) -> Option<u32> {
        if self.remainder.is_zero() {
            return None;
        }
        let mut acc = I::Magnitude::zero();
        let mut digit = 0u32;
        for _ in 0..self.radix {
            acc = acc + self.remainder;
            if acc >= self.denominator {
                acc = acc - self.denominator;
                digit += 1;
            }
        }
        self.remainder = acc;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remainder.is_zero() { (0, Some(0)) } else { (1, None) }
    }
}

impl<I: FixedInt> FusedIterator for FractionalDigits<I> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(n: i64, d: i64, radix: u32, max: usize) -> Vec<u32> {
        Rational::new(n, d).fractional_digits(radix).take(max).collect()
    }

    #[test]
    fn terminating_expansions_end() {
        assert_eq!(digits(1, 8, 10, 100), vec![1, 2, 5]);
        assert_eq!(digits(3, 4, 2, 100), vec![1, 1]);
        assert_eq!(digits(5, 1, 10, 100), Vec::<u32>::new());
    }

    #[test]
    fn repeating_expansions_continue() {
        assert_eq!(digits(1, 3, 10, 6), vec![3; 6]);
        assert_eq!(digits(1, 7, 10, 12), vec![1, 4, 2, 8, 5, 7, 1, 4, 2, 8, 5, 7]);
        assert_eq!(digits(1, 3, 3, 100), vec![1]);
    }

    #[test]
    fn integral_part_is_skipped_and_sign_ignored() {
        assert_eq!(digits(-7, 4, 10, 100), vec![7, 5]);
        assert_eq!(digits(22, 7, 10, 3), vec![1, 4, 2]);
    }

    #[test]
    fn hex_digits_reach_radix_minus_one() {
        assert_eq!(digits(255, 256, 16, 100), vec![15, 15]);
    }

    #[test]
    fn restartable_per_call() {
        let v = Rational::new(2i32, 3);
        let first: Vec<u32> = v.fractional_digits(10).take(4).collect();
        let second: Vec<u32> = v.fractional_digits(10).take(4).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![6, 6, 6, 6]);
    }

    #[test]
    fn near_max_denominator_does_not_overflow() {
        // remainder * 36 would overflow u8 for an i8 value.
        let v = Rational::new(126i8, 127);
        let got: Vec<u32> = v.fractional_digits(36).take(8).collect();
        // Cross-check against i64 long division.
        let mut r = 126i64;
        let expected: Vec<u32> = (0..8)
            .map(|_| {
                r *= 36;
                let d = (r / 127) as u32;
                r %= 127;
                d
            })
            .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn fused_after_end() {
        let mut it = Rational::new(1i32, 2).fractional_digits(10);
        assert_eq!(it.next(), Some(5));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }
}
