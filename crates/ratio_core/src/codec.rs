//! Canonical text form and the strict parser.
//!
//! Grammar (whole input, no whitespace): `[+|-] digits [ "/" digits ]`, digits
//! in the requested radix `2..=36`, letters in either case. Formatting emits
//! the numerator and, unless the denominator is 1, `/denominator`.
//!
//! `parse(format(v, r), r) == v` for every value and radix, in both cases.

use core::fmt;
use core::str::FromStr;

use ratio_int::{FixedInt, Magnitude};

use crate::errors::{ParseErrorKind, ParseRationalError};
use crate::rational::Rational;

const LOWER_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const UPPER_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[inline]
pub(crate) fn assert_radix(radix: u32) {
    assert!((2..=36).contains(&radix), "radix must be in 2..=36, got {radix}");
}

/// Append the digits of `m` in `radix` (most significant first).
fn push_magnitude<M: Magnitude>(out: &mut String, mut m: M, radix: u32, uppercase: bool) {
    let table = if uppercase { UPPER_DIGITS } else { LOWER_DIGITS };
    let r = M::from_u8(radix as u8);
    // 128 binary digits is the widest magnitude supported.
    let mut buf = [0u8; 128];
    let mut at = buf.len();
    loop {
        at -= 1;
        buf[at] = table[(m % r).low_u8() as usize];
        m = m / r;
        if m.is_zero() {
            break;
        }
    }
    out.extend(buf[at..].iter().map(|&b| b as char));
}

impl<I: FixedInt> Rational<I> {
    /// Canonical text in `radix`, e.g. `-7/3`, `ff`, `-1010/11`.
    ///
    /// # Panics
    /// If `radix` is outside `2..=36`.
    pub fn to_string_radix(&self, radix: u32, uppercase: bool) -> String {
        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        self.push_unsigned(&mut out, radix, uppercase);
        out
    }

    fn push_unsigned(&self, out: &mut String, radix: u32, uppercase: bool) {
        assert_radix(radix);
        push_magnitude(out, self.numerator.magnitude(), radix, uppercase);
        if !self.denominator.is_one() {
            out.push('/');
            push_magnitude(out, self.denominator.magnitude(), radix, uppercase);
        }
    }

    /// Parse the strict grammar; `None` for any rejected input.
    pub fn from_str_radix(src: &str, radix: u32) -> Option<Self> {
        Self::parse_radix(src, radix).ok()
    }

    /// As [`Rational::from_str_radix`], with the reason for rejection.
    pub fn parse_radix(src: &str, radix: u32) -> Result<Self, ParseRationalError> {
        parse(src, radix).map_err(|kind| {
            tracing::debug!(radix, ?kind, "rejected rational literal");
            ParseRationalError::new(kind)
        })
    }
}

fn parse<I: FixedInt>(src: &str, radix: u32) -> Result<Rational<I>, ParseErrorKind> {
    if !(2..=36).contains(&radix) {
        return Err(ParseErrorKind::InvalidRadix);
    }
    if src.is_empty() {
        return Err(ParseErrorKind::Empty);
    }

    let (negative, body) = match src.as_bytes()[0] {
        b'-' => (true, &src[1..]),
        b'+' => (false, &src[1..]),
        _ => (false, src),
    };
    let (num_digits, den_digits) = match body.split_once('/') {
        Some((n, d)) => (n, Some(d)),
        None => (body, None),
    };

    let numerator = I::from_magnitude(parse_magnitude(num_digits, radix)?, negative)
        .ok_or(ParseErrorKind::OutOfRange)?;
    let denominator = match den_digits {
        None => I::one(),
        Some(digits) => {
            let d = I::from_magnitude(parse_magnitude(digits, radix)?, false)
                .ok_or(ParseErrorKind::OutOfRange)?;
            if d.is_zero() {
                return Err(ParseErrorKind::ZeroDenominator);
            }
            d
        }
    };

    // The denominator is positive here, so reduction cannot fail.
    Rational::try_new(numerator, denominator).map_err(|_| ParseErrorKind::OutOfRange)
}

fn parse_magnitude<M: Magnitude>(digits: &str, radix: u32) -> Result<M, ParseErrorKind> {
    if digits.is_empty() {
        return Err(ParseErrorKind::Empty);
    }
    let r = M::from_u8(radix as u8);
    let mut acc = M::zero();
    for c in digits.chars() {
        let digit = match c.to_digit(radix) {
            Some(v) => M::from_u8(v as u8),
            None if c.is_ascii_alphanumeric() => return Err(ParseErrorKind::InvalidDigit),
            None => return Err(ParseErrorKind::Malformed),
        };
        acc = acc
            .checked_mul(&r)
            .and_then(|scaled| scaled.checked_add(&digit))
            .ok_or(ParseErrorKind::OutOfRange)?;
    }
    Ok(acc)
}

impl<I: FixedInt> FromStr for Rational<I> {
    type Err = ParseRationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_radix(s, 10)
    }
}

/* -------------------------------------------------------------------------- */
/*                              fmt trait family                              */
/* -------------------------------------------------------------------------- */

macro_rules! radix_fmt {
    ($trait:ident, $radix:expr, $upper:expr, $prefix:expr) => {
        /// Sign-magnitude text; honours width, fill, `+` and `#` flags.
        impl<I: FixedInt> fmt::$trait for Rational<I> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut buf = String::new();
                self.push_unsigned(&mut buf, $radix, $upper);
                f.pad_integral(!self.is_negative(), $prefix, &buf)
            }
        }
    };
}

radix_fmt!(Display, 10, false, "");
radix_fmt!(Binary, 2, false, "0b");
radix_fmt!(Octal, 8, false, "0o");
radix_fmt!(LowerHex, 16, false, "0x");
radix_fmt!(UpperHex, 16, true, "0x");

/* -------------------------------------------------------------------------- */
/*                                    serde                                   */
/* -------------------------------------------------------------------------- */

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::de::{Error as DeError, Unexpected};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialized as the canonical decimal string (`"-7/3"`).
    impl<I: FixedInt> Serialize for Rational<I> {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.collect_str(self)
        }
    }

    impl<'de, I: FixedInt> Deserialize<'de> for Rational<I> {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            let s = String::deserialize(d)?;
            s.parse()
                .map_err(|_| D::Error::invalid_value(Unexpected::Str(&s), &"rational literal [+-]n[/d]"))
        }
    }
}

/* ---------------------------------- Tests --------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn kind<I: FixedInt>(s: &str, radix: u32) -> ParseErrorKind {
        match Rational::<I>::parse_radix(s, radix) {
            Ok(v) => panic!("{s:?} unexpectedly parsed as {v}"),
            Err(e) => e.kind(),
        }
    }

    #[test]
    fn format_decimal() {
        assert_eq!(Rational::new(-7i32, 3).to_string(), "-7/3");
        assert_eq!(Rational::new(6i32, 3).to_string(), "2");
        assert_eq!(Rational::<i32>::zero().to_string(), "0");
        assert_eq!(Rational::<i8>::min_value().to_string(), "-128");
    }

    #[test]
    fn format_radix_and_case() {
        let v = Rational::new(255i32, 16);
        assert_eq!(v.to_string_radix(16, false), "ff/10");
        assert_eq!(v.to_string_radix(16, true), "FF/10");
        assert_eq!(v.to_string_radix(2, false), "11111111/10000");
        assert_eq!(Rational::new(-35i32, 1).to_string_radix(36, true), "-Z");
        assert_eq!(Rational::<i128>::min_value().to_string_radix(2, false).len(), 129);
    }

    #[test]
    fn fmt_traits_honour_flags() {
        let v = Rational::new(-255i32, 2);
        assert_eq!(format!("{v:x}"), "-ff/2");
        assert_eq!(format!("{v:#X}"), "-0xFF/2");
        assert_eq!(format!("{:+}", Rational::new(1i32, 2)), "+1/2");
        assert_eq!(format!("{:>6}", Rational::new(1i32, 2)), "   1/2");
        assert_eq!(format!("{:o}", Rational::new(8i32, 1)), "10");
        assert_eq!(format!("{:b}", Rational::new(1i32, 2)), "1/10");
    }

    #[test]
    #[should_panic(expected = "radix must be in 2..=36")]
    fn format_rejects_bad_radix() {
        let _ = Rational::new(1i32, 2).to_string_radix(37, false);
    }

    #[test]
    fn parse_examples() {
        assert_eq!(Rational::<i32>::from_str_radix("800", 8), None);
        assert_eq!(Rational::<i32>::from_str_radix("700", 8), Some(Rational::from(448)));
        assert_eq!(Rational::<i32>::from_str_radix("1/0", 10), None);
        assert_eq!(Rational::<i8>::from_str_radix("128/2", 10), None);
        assert_eq!(Rational::<i16>::from_str_radix("128/2", 10), Some(Rational::from(64)));
    }

    #[test]
    fn parse_reduces_and_signs() {
        assert_eq!("-6/4".parse::<Rational<i32>>(), Ok(Rational::new(-3, 2)));
        assert_eq!("+6/4".parse::<Rational<i32>>(), Ok(Rational::new(3, 2)));
        assert_eq!("-0/5".parse::<Rational<i32>>(), Ok(Rational::zero()));
        assert_eq!(Rational::<i8>::from_str_radix("-128", 10), Some(Rational::min_value()));
        assert_eq!(Rational::<i8>::from_str_radix("-128/2", 10), Some(Rational::from(-64)));
        assert_eq!(Rational::<i32>::from_str_radix("fF/A", 16), Some(Rational::new(51, 2)));
    }

    #[test]
    fn parse_rejections() {
        assert_eq!(kind::<i32>("", 10), ParseErrorKind::Empty);
        assert_eq!(kind::<i32>("-", 10), ParseErrorKind::Empty);
        assert_eq!(kind::<i32>("1/", 10), ParseErrorKind::Empty);
        assert_eq!(kind::<i32>("/2", 10), ParseErrorKind::Empty);
        assert_eq!(kind::<i32>(" 1", 10), ParseErrorKind::Malformed);
        assert_eq!(kind::<i32>("1 ", 10), ParseErrorKind::Malformed);
        assert_eq!(kind::<i32>("1 /2", 10), ParseErrorKind::Malformed);
        assert_eq!(kind::<i32>("1/-2", 10), ParseErrorKind::Malformed);
        assert_eq!(kind::<i32>("+-1", 10), ParseErrorKind::Malformed);
        assert_eq!(kind::<i32>("1-", 10), ParseErrorKind::Malformed);
        assert_eq!(kind::<i32>("1/2/3", 10), ParseErrorKind::Malformed);
        assert_eq!(kind::<i32>("1.5", 10), ParseErrorKind::Malformed);
        assert_eq!(kind::<i32>("12a", 10), ParseErrorKind::InvalidDigit);
        assert_eq!(kind::<i32>("2", 2), ParseErrorKind::InvalidDigit);
        assert_eq!(kind::<i8>("128", 10), ParseErrorKind::OutOfRange);
        assert_eq!(kind::<i8>("1/128", 10), ParseErrorKind::OutOfRange);
        assert_eq!(kind::<i32>("99999999999", 10), ParseErrorKind::OutOfRange);
        assert_eq!(kind::<i32>("5/0", 10), ParseErrorKind::ZeroDenominator);
        assert_eq!(kind::<i32>("1", 1), ParseErrorKind::InvalidRadix);
        assert_eq!(kind::<i32>("1", 37), ParseErrorKind::InvalidRadix);
    }

    #[test]
    fn parse_accepts_leading_zeros() {
        assert_eq!(Rational::<i8>::from_str_radix("0000127/0002", 10), Some(Rational::new(127, 2)));
    }

    #[test]
    fn round_trip_extremes_all_radices() {
        let values = [
            Rational::<i64>::min_value(),
            Rational::<i64>::max_value(),
            Rational::new(i64::MIN, i64::MAX),
            Rational::new(-1, i64::MAX),
            Rational::zero(),
        ];
        for radix in 2..=36 {
            for v in values {
                for upper in [false, true] {
                    let text = v.to_string_radix(radix, upper);
                    assert_eq!(Rational::from_str_radix(&text, radix), Some(v), "{text} radix {radix}");
                }
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_canonical_string() {
        let v = Rational::new(-6i32, 4);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"-3/2\"");
        let back: Rational<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
        assert!(serde_json::from_str::<Rational<i32>>("\"1/0\"").is_err());
    }
}
