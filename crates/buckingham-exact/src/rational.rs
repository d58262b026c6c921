//! Arbitrary precision rational numbers.
//!
//! Exponents and every value produced while eliminating a dimension matrix
//! are `Rational`s, so ranks and kernels are computed without rounding.

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::IBig;
use dashu::rational::RBig;
use num_traits::float::FloatCore;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::{ExactError, Integer};

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a rational from numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ExactError::ZeroDenominator`] if `denominator` is zero.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self, ExactError> {
        if denominator.is_zero() {
            return Err(ExactError::ZeroDenominator);
        }
        let sign_flip = denominator.is_negative();
        let num = if sign_flip { -numerator } else { numerator };
        Ok(Self(RBig::from_parts(
            num.into_inner(),
            denominator.into_inner().unsigned_abs(),
        )))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "denominator cannot be zero");
        Self::from(numerator) / Self::from(denominator)
    }

    /// Converts a float exactly.
    ///
    /// Every finite `f64` is a dyadic rational, so the conversion is lossless:
    /// `0.5` becomes `1/2`, while `0.1` becomes the exact binary value nearest
    /// to one tenth.
    ///
    /// # Errors
    ///
    /// Returns [`ExactError::NonFinite`] for NaN and infinities.
    pub fn try_from_f64(value: f64) -> Result<Self, ExactError> {
        if !value.is_finite() {
            return Err(ExactError::NonFinite(value));
        }
        let (mantissa, exponent, sign) = FloatCore::integer_decode(value);
        if mantissa == 0 {
            return Ok(Self::zero());
        }
        let mut num = Integer::from(mantissa);
        if sign < 0 {
            num = -num;
        }
        let scale = Integer::new(2).pow(u32::from(exponent.unsigned_abs()));
        if exponent >= 0 {
            Ok(Self::from_integer(num * scale))
        } else {
            Self::new(num, scale)
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the (always positive) denominator.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the reciprocal, or `None` for zero.
    #[must_use]
    pub fn checked_recip(&self) -> Option<Self> {
        (!self.is_zero()).then(|| Self(self.0.clone().inv()))
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl FromStr for Rational {
    type Err = ExactError;

    /// Parses `"n"` or `"n/d"`, with optional signs and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reject = |reason| ExactError::Parse {
            input: s.to_string(),
            reason,
        };
        match s.split_once('/') {
            None => s
                .parse::<Integer>()
                .map(Self::from_integer)
                .map_err(|_| reject("not a rational literal")),
            Some((num, den)) => {
                let num = num
                    .parse::<Integer>()
                    .map_err(|_| reject("invalid numerator"))?;
                let den = den
                    .parse::<Integer>()
                    .map_err(|_| reject("invalid denominator"))?;
                if den.is_zero() {
                    return Err(reject("zero denominator"));
                }
                Self::new(num, den)
            }
        }
    }
}

macro_rules! rational_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Rational {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self($trait::$method(self.0, rhs.0))
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Self;

            fn $method(self, rhs: &Rational) -> Self::Output {
                Self($trait::$method(self.0, &rhs.0))
            }
        }

        impl $trait for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Self) -> Self::Output {
                Rational($trait::$method(&self.0, &rhs.0))
            }
        }
    };
}

rational_binop!(Add, add);
rational_binop!(Sub, sub);
rational_binop!(Mul, mul);
// Panics on a zero divisor, like `dashu`; use `checked_recip` when unsure.
rational_binop!(Div, div);

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(-&self.0)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}

impl TryFrom<f64> for Rational {
    type Error = ExactError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_from_f64(value)
    }
}
