//! Dimensionless Pi terms.

use std::fmt;

use buckingham_exact::Rational;
use num_traits::Zero;

use crate::error::{AnalysisError, Result};
use crate::monomial::Monomial;
use crate::variables::VariableSet;

/// A dimensionless product of the analysed variables.
///
/// Holds the null-space vector it came from together with its canonical
/// monomial and the rendered expression, e.g. `tau^-1 * dt * v`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PiTerm {
    basis_vector: Vec<Rational>,
    monomial: Monomial,
    expression: String,
}

/// The machine-readable form of a [`PiTerm`]: its basis vector and its
/// canonical string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PiTermRecord {
    /// Exponent of each variable, in variable order.
    pub basis_vector: Vec<Rational>,
    /// Canonical rendering of the product.
    pub expression: String,
}

impl PiTerm {
    /// Builds a term from a vector of per-variable exponents.
    ///
    /// The vector is not checked for dimensionlessness; see
    /// [`PiTerm::is_dimensionless`].
    ///
    /// # Errors
    ///
    /// [`AnalysisError::TermMismatch`] if the vector does not have one entry
    /// per variable.
    pub fn from_basis_vector(basis_vector: Vec<Rational>, variables: &VariableSet) -> Result<Self> {
        let monomial = Monomial::from_exponents(&basis_vector);
        let names: Vec<&str> = variables.names().collect();
        let expression = monomial.render(&names);
        if basis_vector.len() != variables.len() {
            return Err(AnalysisError::TermMismatch {
                term: expression,
                expected: variables.len(),
                actual: basis_vector.len(),
            });
        }
        Ok(Self {
            basis_vector,
            monomial,
            expression,
        })
    }

    /// Exponent of each variable, in variable order (zeros included).
    #[must_use]
    pub fn basis_vector(&self) -> &[Rational] {
        &self.basis_vector
    }

    /// The canonical monomial.
    #[must_use]
    pub fn monomial(&self) -> &Monomial {
        &self.monomial
    }

    /// The canonical expression string.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Exponent of the variable at `index`.
    #[must_use]
    pub fn exponent(&self, index: usize) -> Rational {
        self.monomial.exponent(index)
    }

    /// Substitutes each variable's exponent vector and multiplies out,
    /// giving the term's exponents over the base dimensions.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::TermMismatch`] if `variables` is not the set this
    /// term was built over.
    pub fn dimension(&self, variables: &VariableSet) -> Result<Vec<Rational>> {
        if self.basis_vector.len() != variables.len() {
            return Err(AnalysisError::TermMismatch {
                term: self.expression.clone(),
                expected: variables.len(),
                actual: self.basis_vector.len(),
            });
        }
        let num_dimensions = variables.dimension_count().unwrap_or(0);
        let mut total = vec![Rational::zero(); num_dimensions];
        for (power, variable) in self.basis_vector.iter().zip(variables) {
            if power.is_zero() {
                continue;
            }
            for (acc, e) in total.iter_mut().zip(variable.exponents()) {
                *acc = &*acc + &(power * e);
            }
        }
        Ok(total)
    }

    /// Returns true if substitution yields the zero dimension vector.
    #[must_use]
    pub fn is_dimensionless(&self, variables: &VariableSet) -> bool {
        self.dimension(variables)
            .is_ok_and(|dim| dim.iter().all(Zero::is_zero))
    }

    /// The `(basis_vector, canonical_string)` pair.
    #[must_use]
    pub fn to_record(&self) -> PiTermRecord {
        PiTermRecord {
            basis_vector: self.basis_vector.clone(),
            expression: self.expression.clone(),
        }
    }
}

impl From<PiTerm> for PiTermRecord {
    fn from(term: PiTerm) -> Self {
        Self {
            basis_vector: term.basis_vector,
            expression: term.expression,
        }
    }
}

impl fmt::Display for PiTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}
