//! The scalar trait required by elimination.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use buckingham_exact::Rational;
use num_traits::{One, Zero};

/// A field: a commutative ring in which every non-zero element is invertible.
///
/// # Laws
///
/// - `Zero`/`One` are the additive and multiplicative identities
/// - `a.inv()` is `Some(b)` with `a * b == one()` exactly when `a != zero()`
///
/// Elimination compares entries against zero with `==`, so implementors must
/// be exact. Floating point types do not qualify.
pub trait Field:
    Clone
    + Eq
    + Debug
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;
}

impl Field for Rational {
    fn inv(&self) -> Option<Self> {
        self.checked_recip()
    }
}
