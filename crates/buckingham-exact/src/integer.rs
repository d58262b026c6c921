//! Arbitrary precision integers.
//!
//! Dimension exponents are small in practice, but elimination multiplies
//! them together, so every intermediate value is kept in a `dashu::IBig`
//! and never overflows.

use dashu::base::{Abs, Gcd, Signed as DashuSigned};
use dashu::integer::{IBig, UBig};
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

use crate::ExactError;

/// An arbitrary precision signed integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
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

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Computes the (non-negative) greatest common divisor.
    ///
    /// `gcd(0, 0)` is zero.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.abs();
        }
        if other.is_zero() {
            return self.abs();
        }
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Computes the (non-negative) least common multiple.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        Self(&self.0 / &g.0 * &other.0).abs()
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Integer {
    type Err = ExactError;

    /// Parses a decimal integer: at most one sign, then ASCII digits only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reject = |reason| ExactError::Parse {
            input: s.to_string(),
            reason,
        };
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        if digits.is_empty() {
            return Err(reject("empty integer literal"));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(reject("not a decimal integer"));
        }
        let magnitude = UBig::from_str_radix(digits, 10)
            .map_err(|_| reject("not a decimal integer"))?;
        let value = IBig::from(magnitude);
        Ok(Self(if negative { -value } else { value }))
    }
}

macro_rules! integer_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Integer {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self($trait::$method(self.0, rhs.0))
            }
        }

        impl $trait<&Integer> for Integer {
            type Output = Self;

            fn $method(self, rhs: &Integer) -> Self::Output {
                Self($trait::$method(self.0, &rhs.0))
            }
        }

        impl $trait for &Integer {
            type Output = Integer;

            fn $method(self, rhs: Self) -> Self::Output {
                Integer($trait::$method(&self.0, &rhs.0))
            }
        }
    };
}

integer_binop!(Add, add);
integer_binop!(Sub, sub);
integer_binop!(Mul, mul);
// Truncating division, as for primitive integers.
integer_binop!(Div, div);
integer_binop!(Rem, rem);

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(n: i64) -> Self {
        Self::new(n)
    }
}

impl From<i32> for Integer {
    fn from(n: i32) -> Self {
        Self::new(i64::from(n))
    }
}

impl From<u64> for Integer {
    fn from(n: u64) -> Self {
        Self(IBig::from(n))
    }
}

impl From<IBig> for Integer {
    fn from(n: IBig) -> Self {
        Self(n)
    }
}

impl From<UBig> for Integer {
    fn from(n: UBig) -> Self {
        Self(IBig::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_lcm() {
        let a = Integer::new(-12);
        let b = Integer::new(18);
        assert_eq!(a.gcd(&b), Integer::new(6));
        assert_eq!(a.lcm(&b), Integer::new(36));
        assert_eq!(Integer::zero().gcd(&Integer::zero()), Integer::zero());
        assert_eq!(Integer::zero().gcd(&a), Integer::new(12));
        assert_eq!(b.gcd(&Integer::zero()), Integer::new(18));
        assert_eq!(Integer::zero().lcm(&b), Integer::zero());
    }

    #[test]
    fn test_parse() {
        assert_eq!("42".parse::<Integer>().unwrap(), Integer::new(42));
        assert_eq!(" -7 ".parse::<Integer>().unwrap(), Integer::new(-7));
        assert_eq!("+3".parse::<Integer>().unwrap(), Integer::new(3));
        assert!("".parse::<Integer>().is_err());
        assert!("1.5".parse::<Integer>().is_err());
        assert!("+-3".parse::<Integer>().is_err());
        assert!("--3".parse::<Integer>().is_err());
        assert!("1_000".parse::<Integer>().is_err());
        assert!("-".parse::<Integer>().is_err());
        assert!("٣".parse::<Integer>().is_err());
        assert!("x".parse::<Integer>().is_err());
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        let big = Integer::new(i64::MAX) * Integer::new(i64::MAX);
        assert_eq!(big.to_i64(), None);
        assert_eq!((&big / &Integer::new(i64::MAX)).to_i64(), Some(i64::MAX));
    }

    #[test]
    fn test_signum() {
        assert_eq!(Integer::new(-5).signum(), -1);
        assert_eq!(Integer::zero().signum(), 0);
        assert_eq!(Integer::new(9).signum(), 1);
        assert!(Integer::new(-1).is_negative());
    }
}
