//! Error taxonomy for dimensional analysis.

use buckingham_exact::ExactError;
use buckingham_linalg::LinalgError;
use thiserror::Error;

/// Everything that can go wrong while building inputs or computing Pi terms.
///
/// All variants except [`AnalysisError::InternalConsistency`] are caller
/// mistakes and carry enough detail to fix the input and retry.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AnalysisError {
    /// No variables were supplied.
    #[error("no variables supplied")]
    EmptyInput,

    /// A variable's exponent vector has the wrong length.
    #[error("variable `{variable}` has {actual} exponents, expected {expected}")]
    DimensionMismatch {
        /// The offending variable.
        variable: String,
        /// Number of base dimensions in force.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// The variables agree with each other, but not with the engine's
    /// configured base dimensions.
    #[error(
        "variables have {actual} exponents each, but the engine is configured \
         for {expected} base dimensions {dimensions}"
    )]
    ConfigurationMismatch {
        /// The configured base dimensions, e.g. `[M, L, T]`.
        dimensions: String,
        /// Number of configured base dimensions.
        expected: usize,
        /// Exponent count shared by every variable.
        actual: usize,
    },

    /// An exponent is not a finite rational number.
    #[error("variable `{variable}` exponent #{position} is invalid: {source}")]
    InvalidExponent {
        /// The offending variable.
        variable: String,
        /// Zero-based position in the exponent vector.
        position: usize,
        /// Why the value was rejected.
        source: ExactError,
    },

    /// Variable names must be non-empty and free of whitespace and of the
    /// characters used when rendering terms.
    #[error("invalid variable name {0:?}")]
    InvalidVariableName(String),

    /// A variable name was inserted twice.
    #[error("variable `{0}` is already defined")]
    DuplicateVariable(String),

    /// The configured base-dimension set is unusable.
    #[error("invalid base dimensions: {0}")]
    InvalidBaseDimensions(String),

    /// A Pi term was paired with a variable set of a different size.
    #[error("pi term `{term}` spans {actual} variables, the variable set has {expected}")]
    TermMismatch {
        /// Canonical form of the term.
        term: String,
        /// Number of variables in the set.
        expected: usize,
        /// Length of the term's basis vector.
        actual: usize,
    },

    /// The engine broke one of its own invariants. Always a bug.
    #[error("internal consistency violated: {0}")]
    InternalConsistency(String),
}

impl From<LinalgError> for AnalysisError {
    fn from(err: LinalgError) -> Self {
        Self::InternalConsistency(err.to_string())
    }
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;
