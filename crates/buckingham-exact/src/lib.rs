//! # buckingham-exact
//!
//! Arbitrary precision integer and rational arithmetic for dimensional
//! analysis.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`), always in lowest terms
//! - Exact parsing of exponent literals such as `"-3/2"`
//! - Lossless conversion from finite `f64` values
//!
//! Nothing in this crate rounds. Rank decisions made on top of it are exact.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;

use thiserror::Error;

/// Errors produced while constructing exact numbers.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ExactError {
    /// A literal could not be read as an integer or rational.
    #[error("cannot parse `{input}`: {reason}")]
    Parse {
        /// The rejected text.
        input: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A rational was requested with a zero denominator.
    #[error("denominator cannot be zero")]
    ZeroDenominator,

    /// NaN or an infinity has no rational value.
    #[error("non-finite value {0} has no exact rational form")]
    NonFinite(f64),
}
