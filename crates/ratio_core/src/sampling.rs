//! Random rationals bounded by a maximum denominator.
//!
//! The denominator is drawn uniformly from `[1, max_denominator]`, then the
//! numerator uniformly from `[lo, denominator]` (or `[lo, denominator)` when
//! one is excluded), `lo` being 0 or 1 depending on whether zero is included.
//!
//! The distribution over *values* is **not uniform**: every denominator is
//! equally likely no matter how many numerators it admits, so values with
//! small denominators (and, after reduction, values like 1/2) are
//! over-represented.

use rand_core::RngCore;
use ratio_int::FixedInt;

use crate::errors::SampleError;
use crate::rational::Rational;
use crate::rng::uniform_below;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const DEFAULT_MAX_DENOMINATOR: u64 = 1000;

/// Sampling bounds. `max_denominator` must fit the backing width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SamplePolicy {
    pub max_denominator: u64,
    pub including_zero: bool,
    pub including_one: bool,
}

impl Default for SamplePolicy {
    fn default() -> Self {
        Self {
            max_denominator: DEFAULT_MAX_DENOMINATOR,
            including_zero: true,
            including_one: false,
        }
    }
}

impl SamplePolicy {
    /// Defaults with `max_denominator` clamped to `I::MAX` (127 for `i8`).
    pub fn for_width<I: FixedInt>() -> Self {
        let cap = num_traits::cast::<I, u64>(I::max_value()).unwrap_or(u64::MAX);
        Self {
            max_denominator: DEFAULT_MAX_DENOMINATOR.min(cap),
            ..Self::default()
        }
    }

    pub fn with_max_denominator(mut self, max_denominator: u64) -> Self {
        self.max_denominator = max_denominator;
        self
    }

    pub fn including_zero(mut self, yes: bool) -> Self {
        self.including_zero = yes;
        self
    }

    pub fn including_one(mut self, yes: bool) -> Self {
        self.including_one = yes;
        self
    }

    /// `max_denominator` must be in `1..=min(I::MAX, i64::MAX)`, and the
    /// policy must admit at least one value.
    pub fn validate<I: FixedInt>(&self) -> Result<(), SampleError> {
        let fits_width = num_traits::cast::<u64, I>(self.max_denominator).is_some();
        if self.max_denominator == 0 || self.max_denominator > i64::MAX as u64 || !fits_width {
            return Err(SampleError::MaxDenominatorOutOfRange(self.max_denominator));
        }
        if self.max_denominator == 1 && !self.including_zero && !self.including_one {
            return Err(SampleError::EmptyRange);
        }
        Ok(())
    }
}

impl<I: FixedInt> Rational<I> {
    /// Sample with the default policy (zero included, one excluded) and the
    /// given `max_denominator`.
    pub fn random<R: RngCore + ?Sized>(rng: &mut R, max_denominator: u64) -> Result<Self, SampleError> {
        Self::random_with(rng, &SamplePolicy::default().with_max_denominator(max_denominator))
    }

    /// Sample under `policy`. A denominator whose numerator range is empty
    /// (denominator 1 with zero excluded and one excluded) is redrawn.
    pub fn random_with<R: RngCore + ?Sized>(rng: &mut R, policy: &SamplePolicy) -> Result<Self, SampleError> {
        policy.validate::<I>()?;
        let out_of_range = SampleError::MaxDenominatorOutOfRange(policy.max_denominator);
        let lo = u64::from(!policy.including_zero);

        loop {
            // validate() bounds every draw below i64::MAX, so nothing here wraps.
            let den = 1 + uniform_below(&mut *rng, policy.max_denominator).ok_or(out_of_range)?;
            let hi = if policy.including_one { den } else { den - 1 };
            if hi < lo {
                tracing::trace!(den, "empty numerator range; redrawing denominator");
                continue;
            }
            let num = lo + uniform_below(&mut *rng, hi - lo + 1).ok_or(out_of_range)?;

            let n = num_traits::cast::<u64, I>(num).ok_or(out_of_range)?;
            let d = num_traits::cast::<u64, I>(den).ok_or(out_of_range)?;
            // 0 <= n <= d and d > 0: reduction always succeeds.
            return Rational::try_new(n, d).map_err(|_| out_of_range);
        }
    }
}

/* ---------------------------------- Tests --------------------------------- */
