//! Two-valued sign used by hashing and `Rational::sign`.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Minus,
    Plus,
}

impl Sign {
    #[inline]
    pub fn opposite(self) -> Sign {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }

    #[inline]
    pub fn is_minus(self) -> bool {
        self == Sign::Minus
    }

    /// Zero maps to `Plus`.
    #[inline]
    pub(crate) fn of<I: ratio_int::FixedInt>(v: I) -> Sign {
        if v.is_negative() { Sign::Minus } else { Sign::Plus }
    }
}

impl core::ops::Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        self.opposite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        assert_eq!(Sign::Plus.opposite(), Sign::Minus);
        assert_eq!(Sign::Minus.opposite().opposite(), Sign::Minus);
        assert_eq!(-Sign::Plus, Sign::Minus);
    }

    #[test]
    fn zero_is_plus() {
        assert_eq!(Sign::of(0i32), Sign::Plus);
        assert_eq!(Sign::of(-3i32), Sign::Minus);
        assert!(!Sign::of(i8::MAX).is_minus());
    }
}
