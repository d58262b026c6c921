//! Canonical monomials with rational exponents.
//!
//! A monomial is a product `∏ v_j ^ e_j` over variable indices. The
//! canonical form keeps factors sorted by index, merges repeated indices by
//! adding their exponents, and drops zero exponents, so two monomials are
//! equal exactly when they denote the same product.

use std::fmt::Write as _;

use buckingham_exact::Rational;
use num_traits::{One, Zero};
use smallvec::SmallVec;

/// Inline capacity: most Pi terms involve only a few variables.
type Factors = SmallVec<[(usize, Rational); 4]>;

/// A monomial in canonical form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Monomial {
    factors: Factors,
}

impl Monomial {
    /// The empty product, 1.
    #[must_use]
    pub fn one() -> Self {
        Self::default()
    }

    /// Creates the monomial `v_index`.
    #[must_use]
    pub fn var(index: usize) -> Self {
        let mut factors = Factors::new();
        factors.push((index, Rational::one()));
        Self { factors }
    }

    /// Builds a monomial from arbitrary `(index, exponent)` pairs.
    ///
    /// Like bases are combined and zero exponents are dropped.
    #[must_use]
    pub fn from_factors<I>(factors: I) -> Self
    where
        I: IntoIterator<Item = (usize, Rational)>,
    {
        let mut raw: Factors = factors.into_iter().collect();
        raw.sort_by_key(|(index, _)| *index);

        let mut merged = Factors::new();
        for (index, exponent) in raw {
            if let Some((last, acc)) = merged.last_mut() {
                if *last == index {
                    *acc = &*acc + &exponent;
                    continue;
                }
            }
            merged.push((index, exponent));
        }
        merged.retain(|(_, exponent)| !exponent.is_zero());
        Self { factors: merged }
    }

    /// Builds a monomial from a dense exponent vector (`exponents[j]` is the
    /// exponent of variable `j`).
    #[must_use]
    pub fn from_exponents(exponents: &[Rational]) -> Self {
        Self {
            factors: exponents
                .iter()
                .enumerate()
                .filter(|(_, e)| !e.is_zero())
                .map(|(j, e)| (j, e.clone()))
                .collect(),
        }
    }

    /// Returns true for the empty product.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.factors.is_empty()
    }

    /// Number of variables with a non-zero exponent.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Same as [`Monomial::is_one`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Exponent of variable `index`; zero if it does not appear.
    #[must_use]
    pub fn exponent(&self, index: usize) -> Rational {
        self.factors
            .binary_search_by_key(&index, |(i, _)| *i)
            .map_or_else(|_| Rational::zero(), |pos| self.factors[pos].1.clone())
    }

    /// Factors in increasing variable order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Rational)> {
        self.factors.iter().map(|(i, e)| (*i, e))
    }

    /// Dense exponent vector over `num_vars` variables.
    ///
    /// Factors with an index `>= num_vars` are ignored.
    #[must_use]
    pub fn to_dense(&self, num_vars: usize) -> Vec<Rational> {
        let mut dense = vec![Rational::zero(); num_vars];
        for (index, exponent) in &self.factors {
            if let Some(slot) = dense.get_mut(*index) {
                *slot = exponent.clone();
            }
        }
        dense
    }

    /// Product of two monomials (exponents add).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self::from_factors(self.factors.iter().chain(&other.factors).cloned())
    }

    /// Raises the monomial to a rational power (exponents scale).
    #[must_use]
    pub fn pow(&self, power: &Rational) -> Self {
        if power.is_zero() {
            return Self::one();
        }
        Self {
            factors: self
                .factors
                .iter()
                .map(|(i, e)| (*i, e * power))
                .collect(),
        }
    }

    /// The reciprocal monomial.
    #[must_use]
    pub fn recip(&self) -> Self {
        self.pow(&-Rational::one())
    }

    /// Renders the monomial with the given variable names.
    ///
    /// Factors are joined with ` * `. An exponent of 1 is omitted, integer
    /// exponents are written `x^-2`, fractional ones `x^(3/2)`, and the empty
    /// product is `1`. Indices without a name fall back to `x{index}`.
    #[must_use]
    pub fn render<S: AsRef<str>>(&self, names: &[S]) -> String {
        if self.factors.is_empty() {
            return "1".to_string();
        }

        let mut out = String::new();
        for (k, (index, exponent)) in self.factors.iter().enumerate() {
            if k > 0 {
                out.push_str(" * ");
            }
            match names.get(*index) {
                Some(name) => out.push_str(name.as_ref()),
                None => {
                    let _ = write!(out, "x{index}");
                }
            }
            if exponent.is_one() {
                continue;
            }
            if exponent.is_integer() {
                let _ = write!(out, "^{exponent}");
            } else {
                let _ = write!(out, "^({exponent})");
            }
        }
        out
    }
}

impl std::fmt::Display for Monomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render::<&str>(&[]))
    }
}
