//! The dimensional-analysis engine.
//!
//! Given `N` variables over `D` base dimensions, the engine
//!
//! 1. builds the `D × N` dimension matrix in variable insertion order,
//! 2. reduces it to RREF with exact rational arithmetic,
//! 3. reads `N - rank` null-space vectors off the free columns,
//! 4. optionally rescales each vector to a primitive integer vector, and
//! 5. turns every vector into a canonical [`PiTerm`].
//!
//! Every call is a pure function of its input; nothing is cached between
//! calls, so one engine can be shared freely across threads.

use buckingham_exact::{Integer, Rational};
use num_traits::{One, Zero};
use rayon::prelude::*;

use crate::dimensions::BaseDimensions;
use crate::error::{AnalysisError, Result};
use crate::matrix::DimensionMatrix;
use crate::pi_term::PiTerm;
use crate::variables::VariableSet;

/// How null-space vectors are scaled before they become Pi terms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BasisNormalization {
    /// Vectors exactly as read off the RREF: 1 at their free column, possibly
    /// fractional elsewhere.
    #[default]
    Rational,
    /// Each vector scaled by a positive rational so its entries are coprime
    /// integers. Direction, span and count are unchanged.
    PrimitiveInteger,
}

/// Configuration for [`DimensionalAnalysis`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// The base dimensions every variable is expressed over.
    pub dimensions: BaseDimensions,
    /// Scaling applied to basis vectors.
    pub normalization: BasisNormalization,
}

impl AnalysisConfig {
    /// Replaces the base dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, dimensions: BaseDimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Replaces the basis normalisation.
    #[must_use]
    pub fn with_normalization(mut self, normalization: BasisNormalization) -> Self {
        self.normalization = normalization;
        self
    }
}

/// Everything computed for one variable set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    /// The `D × N` dimension matrix.
    pub matrix: DimensionMatrix,
    /// Exact rank of the matrix.
    pub rank: usize,
    /// Number of independent dimensionless groups, `N - rank`.
    pub pi_count: usize,
    /// One term per null-space basis vector, in basis order.
    pub terms: Vec<PiTerm>,
}

/// The Buckingham Pi engine.
#[derive(Clone, Debug, Default)]
pub struct DimensionalAnalysis {
    config: AnalysisConfig,
}

impl DimensionalAnalysis {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Computes a complete, independent set of dimensionless Pi terms.
    ///
    /// An empty vector means no dimensionless group exists; it is not an
    /// error. Term order follows the variable insertion order of `variables`.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::EmptyInput`] if `variables` is empty
    /// - [`AnalysisError::ConfigurationMismatch`] if the exponent vectors do
    ///   not have one entry per configured base dimension
    /// - [`AnalysisError::InternalConsistency`] if the computed basis has the
    ///   wrong size or a term fails the dimension check
    pub fn compute(&self, variables: &VariableSet) -> Result<Vec<PiTerm>> {
        self.analyze(variables).map(|analysis| analysis.terms)
    }

    /// Like [`DimensionalAnalysis::compute`], but also returns the matrix and
    /// its rank.
    ///
    /// # Errors
    ///
    /// As for [`DimensionalAnalysis::compute`].
    pub fn analyze(&self, variables: &VariableSet) -> Result<Analysis> {
        self.check_input(variables)?;

        let matrix = DimensionMatrix::from_variables(variables)?;
        let echelon = matrix.echelon();
        let rank = echelon.rank();
        if rank > matrix.num_dimensions().min(matrix.num_variables()) {
            return Err(AnalysisError::InternalConsistency(format!(
                "rank {rank} exceeds the {}x{} matrix size",
                matrix.num_dimensions(),
                matrix.num_variables()
            )));
        }
        let pi_count = variables.len() - rank;

        let basis = echelon.kernel_basis();
        if basis.len() != pi_count {
            return Err(AnalysisError::InternalConsistency(format!(
                "null space has {} vectors, expected {pi_count}",
                basis.len()
            )));
        }

        let mut terms = Vec::with_capacity(pi_count);
        for vector in basis {
            let vector = match self.config.normalization {
                BasisNormalization::Rational => vector,
                BasisNormalization::PrimitiveInteger => primitive_integer(vector),
            };
            let dimension = matrix.dimension_of(&vector)?;
            let term = PiTerm::from_basis_vector(vector, variables)?;
            if !dimension.iter().all(Zero::is_zero) {
                return Err(AnalysisError::InternalConsistency(format!(
                    "pi term `{term}` is not dimensionless"
                )));
            }
            terms.push(term);
        }

        Ok(Analysis {
            matrix,
            rank,
            pi_count,
            terms,
        })
    }

    /// Runs [`DimensionalAnalysis::compute`] on many independent sets in
    /// parallel. Result `i` belongs to `sets[i]`.
    pub fn compute_batch(&self, sets: &[VariableSet]) -> Vec<Result<Vec<PiTerm>>> {
        sets.par_iter().map(|set| self.compute(set)).collect()
    }

    fn check_input(&self, variables: &VariableSet) -> Result<()> {
        if variables.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        let expected = self.config.dimensions.len();
        match variables.dimension_count() {
            Some(actual) if actual != expected => Err(AnalysisError::ConfigurationMismatch {
                dimensions: self.config.dimensions.to_string(),
                expected,
                actual,
            }),
            _ => Ok(()),
        }
    }
}

/// Scales `vector` by a positive rational so that it becomes an integer
/// vector whose entries have gcd 1. The zero vector is returned unchanged.
fn primitive_integer(vector: Vec<Rational>) -> Vec<Rational> {
    let denominator_lcm = vector
        .iter()
        .fold(Integer::one(), |acc, e| acc.lcm(&e.denominator()));
    let scaled: Vec<Integer> = vector
        .iter()
        .map(|e| e.numerator() * (&denominator_lcm / &e.denominator()))
        .collect();
    let content = scaled.iter().fold(Integer::zero(), |acc, e| acc.gcd(e));
    if content.is_zero() {
        return vector;
    }
    scaled
        .into_iter()
        .map(|e| Rational::from_integer(e / &content))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d)
    }

    #[test]
    fn test_primitive_integer() {
        assert_eq!(
            primitive_integer(vec![q(-3, 2), q(1, 1)]),
            vec![q(-3, 1), q(2, 1)]
        );
        assert_eq!(
            primitive_integer(vec![q(2, 1), q(0, 1), q(-4, 1)]),
            vec![q(1, 1), q(0, 1), q(-2, 1)]
        );
        assert_eq!(
            primitive_integer(vec![q(1, 6), q(-1, 4)]),
            vec![q(2, 1), q(-3, 1)]
        );
        assert_eq!(primitive_integer(vec![q(0, 1)]), vec![q(0, 1)]);
        assert_eq!(
            primitive_integer(vec![q(0, 1), q(3, 2), q(-3, 4)]),
            vec![q(0, 1), q(2, 1), q(-1, 1)]
        );
    }

    #[test]
    fn test_empty_input() {
        let engine = DimensionalAnalysis::default();
        assert_eq!(engine.compute(&VariableSet::new()), Err(AnalysisError::EmptyInput));
    }

    #[test]
    fn test_engine_dimension_count_enforced() {
        let engine = DimensionalAnalysis::default();
        let set = VariableSet::from_i64([("a", [1, 0]), ("b", [0, 1])]).unwrap();
        let err = engine.compute(&set).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::ConfigurationMismatch {
                dimensions: "[M, L, T]".to_string(),
                expected: 3,
                actual: 2,
            }
        );
        assert!(err.to_string().contains("[M, L, T]"));

        let planar = DimensionalAnalysis::new(
            AnalysisConfig::default().with_dimensions(BaseDimensions::anonymous(2).unwrap()),
        );
        assert!(planar.compute(&set).unwrap().is_empty());
    }

    #[test]
    fn test_primitive_integer_leading_zero_entry() {
        // b and c share a dimension, so the kernel vector is (0, -1, 1).
        let set = VariableSet::from_i64([("a", [1, 0, 0]), ("b", [0, 1, 0]), ("c", [0, 1, 0])])
            .unwrap();
        let engine = DimensionalAnalysis::new(
            AnalysisConfig::default().with_normalization(BasisNormalization::PrimitiveInteger),
        );
        let terms = engine.compute(&set).unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].basis_vector(), [q(0, 1), q(-1, 1), q(1, 1)]);
        assert_eq!(terms[0].to_string(), "b^-1 * c");
        assert_eq!(engine.config().normalization, BasisNormalization::PrimitiveInteger);
    }

    #[test]
    fn test_fractional_basis_and_normalization() {
        // Two lengths, one of them squared: l1^2 / l2 has basis (1, -2) in
        // integer form, (-1/2, 1) as read off the RREF of [2 1].
        let dims = BaseDimensions::new(["L"]).unwrap();
        let set = VariableSet::from_i64([("area", [2]), ("len", [1])]).unwrap();

        let rational =
            DimensionalAnalysis::new(AnalysisConfig::default().with_dimensions(dims.clone()));
        let terms = rational.compute(&set).unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].basis_vector(), [q(-1, 2), q(1, 1)]);
        assert_eq!(terms[0].to_string(), "area^(-1/2) * len");

        let integer = DimensionalAnalysis::new(
            AnalysisConfig::default()
                .with_dimensions(dims)
                .with_normalization(BasisNormalization::PrimitiveInteger),
        );
        let terms = integer.compute(&set).unwrap();
        assert_eq!(terms[0].to_string(), "area^-1 * len^2");
        assert!(terms[0].is_dimensionless(&set));
    }

    #[test]
    fn test_analysis_report() {
        let set = VariableSet::from_i64([("x", [1, 0, 0]), ("y", [0, 1, 0]), ("z", [1, 1, 0])])
            .unwrap();
        let analysis = DimensionalAnalysis::default().analyze(&set).unwrap();
        assert_eq!(analysis.rank, 2);
        assert_eq!(analysis.pi_count, 1);
        assert_eq!(analysis.matrix.num_variables(), 3);
        assert_eq!(analysis.terms.len(), 1);
    }

    #[test]
    fn test_batch_matches_sequential() {
        let engine = DimensionalAnalysis::default();
        let sets = vec![
            VariableSet::from_i64([("x", [1, 0, 0]), ("y", [0, 1, 0]), ("z", [1, 1, 0])]).unwrap(),
            VariableSet::new(),
            VariableSet::from_i64([("a", [1, 0, 0]), ("b", [0, 1, 0])]).unwrap(),
        ];
        let batch = engine.compute_batch(&sets);
        assert_eq!(batch.len(), 3);
        for (set, result) in sets.iter().zip(&batch) {
            assert_eq!(&engine.compute(set), result);
        }
        assert_eq!(batch[1], Err(AnalysisError::EmptyInput));
        assert_eq!(batch[2], Ok(Vec::new()));
    }
}
