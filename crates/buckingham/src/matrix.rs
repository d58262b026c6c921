//! The dimension matrix of a variable set.

use buckingham_exact::Rational;
use buckingham_linalg::{DenseMatrix, RowEchelon};

use crate::error::{AnalysisError, Result};
use crate::variables::VariableSet;

/// A `D × N` matrix whose column `j` is the exponent vector of variable `j`.
///
/// Built once per analysis and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DimensionMatrix {
    inner: DenseMatrix<Rational>,
}

impl DimensionMatrix {
    /// Builds the matrix from a variable set, in insertion order.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::EmptyInput`] if the set is empty.
    pub fn from_variables(variables: &VariableSet) -> Result<Self> {
        let num_dimensions = variables
            .dimension_count()
            .filter(|_| !variables.is_empty())
            .ok_or(AnalysisError::EmptyInput)?;
        let columns: Vec<&[Rational]> = variables.iter().map(|v| v.exponents()).collect();
        let inner = DenseMatrix::from_columns(num_dimensions, &columns)?;
        Ok(Self { inner })
    }

    /// Number of base dimensions (`D`, rows).
    #[must_use]
    pub fn num_dimensions(&self) -> usize {
        self.inner.num_rows()
    }

    /// Number of variables (`N`, columns).
    #[must_use]
    pub fn num_variables(&self) -> usize {
        self.inner.num_cols()
    }

    /// Exponent of base dimension `dimension` in variable `variable`.
    #[must_use]
    pub fn entry(&self, dimension: usize, variable: usize) -> Option<&Rational> {
        self.inner.get(dimension, variable)
    }

    /// Exact reduced row echelon form.
    #[must_use]
    pub fn echelon(&self) -> RowEchelon<Rational> {
        self.inner.rref()
    }

    /// Exact rank.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.inner.rank()
    }

    /// The dimension of the monomial with the given variable exponents:
    /// `Σ_j exponents[j] · column_j`.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InternalConsistency`] if `exponents` does not have
    /// one entry per variable.
    pub fn dimension_of(&self, exponents: &[Rational]) -> Result<Vec<Rational>> {
        Ok(self.inner.mv(exponents)?)
    }
}
