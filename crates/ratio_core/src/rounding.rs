//! Rounding to an integer of the backing width.
//!
//! Integer-only. Tie detection compares `2 * |remainder|` with the
//! denominator in the unsigned counterpart, where the doubling cannot overflow
//! because `|remainder| < denominator <= I::MAX`.

use ratio_int::FixedInt;

use crate::rational::Rational;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Define a rounding-rule enum with explicit wire tokens.
macro_rules! rule_enum {
    ($(#[$m:meta])* $name:ident => { $($(#[$vm:meta])* $variant:ident = $token:literal),+ $(,)? }) => {
        $(#[$m])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            $(
                $(#[$vm])*
                #[cfg_attr(feature = "serde", serde(rename = $token))]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable lowercase token (also the serde wire name).
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }
    };
}

rule_enum!(
    /// How `Rational::rounded` resolves a fractional part.
    RoundingRule => {
        /// Nearest integer; halves go away from zero.
        NearestAwayFromZero = "nearest_away_from_zero",
        /// Nearest integer; halves go to the even neighbour.
        NearestEven = "nearest_even",
        /// Toward positive infinity (ceiling).
        Up = "up",
        /// Toward negative infinity (floor).
        Down = "down",
        TowardZero = "toward_zero",
        AwayFromZero = "away_from_zero",
    }
);

impl Default for RoundingRule {
    fn default() -> Self {
        RoundingRule::NearestAwayFromZero
    }
}

impl<I: FixedInt> Rational<I> {
    /// Round to an integer under `rule`. Never overflows: a non-integer value
    /// has `|q| <= I::MAX / 2`, so stepping one away from the truncated
    /// quotient `q` stays in range.
    pub fn rounded(&self, rule: RoundingRule) -> I {
        let (q, r) = self.quotient_and_remainder();
        if r.is_zero() {
            return q;
        }

        let negative = self.is_negative();
        let away = if negative { q - I::one() } else { q + I::one() };

        match rule {
            RoundingRule::TowardZero => q,
            RoundingRule::AwayFromZero => away,
            RoundingRule::Up => if negative { q } else { away },
            RoundingRule::Down => if negative { away } else { q },
            RoundingRule::NearestAwayFromZero | RoundingRule::NearestEven => {
                let twice = r.magnitude() << 1usize;
                let d = self.denominator.magnitude();
                if twice < d {
                    q
                } else if twice > d {
                    away
                } else if rule == RoundingRule::NearestEven {
                    // Exact half: in canonical form only `±odd/2` gets here.
                    if (q % (I::one() + I::one())).is_zero() { q } else { away }
                } else {
                    away
                }
            }
        }
    }

    /// Largest integer `<= self`.
    #[inline]
    pub fn floor(&self) -> I {
        self.rounded(RoundingRule::Down)
    }

    /// Smallest integer `>= self`.
    #[inline]
    pub fn ceil(&self) -> I {
        self.rounded(RoundingRule::Up)
    }

    #[inline]
    pub fn trunc(&self) -> I {
        self.rounded(RoundingRule::TowardZero)
    }

    /// Nearest integer, halves away from zero.
    #[inline]
    pub fn round(&self) -> I {
        self.rounded(RoundingRule::NearestAwayFromZero)
    }
}

/* ---------------------------------- Tests --------------------------------- */
