//! ratio_core — exact rational numbers over a fixed-width signed integer.
//!
//! `Rational<I>` stores a numerator and a denominator of the same width `I`
//! (any of `i8`..`i128`, `isize`) in canonical reduced form. Every operation
//! either yields the exact result or reports that it is not representable.
//!
//! - Construction & introspection (`rational`)
//! - Arithmetic, reporting (`checked_*`) and trapping (`+ - * /`) (`arith`)
//! - Exact equality, hashing and total order (`ordering`)
//! - Radix text codec, strict parser, `fmt` traits (`codec`)
//! - Rounding to integers (`rounding`) and fractional digit expansion (`digits`)
//! - Seeded ChaCha20 sampling (`rng`, `sampling`)
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod errors;

mod arith;
mod codec;
mod digits;
mod ordering;
mod rational;
mod rounding;
mod sampling;
mod sign;

pub mod rng;

pub use ratio_int::FixedInt;

pub use crate::digits::FractionalDigits;
pub use crate::errors::{
    ArithmeticError, ArithmeticResult, Operation, ParseErrorKind, ParseRationalError, SampleError,
    TryFromRationalError,
};
pub use crate::rational::Rational;
pub use crate::rng::SampleRng;
pub use crate::rounding::RoundingRule;
pub use crate::sampling::SamplePolicy;
pub use crate::sign::Sign;
