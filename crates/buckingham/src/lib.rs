//! # buckingham
//!
//! Dimensionless groups from dimensional exponents, per the Buckingham Pi
//! theorem.
//!
//! Given `N` named variables, each with exponents over `D` base dimensions
//! (for example mass, length and time), the engine returns `N - rank`
//! independent dimensionless monomials of those variables, where `rank` is
//! the exact rank of the `D × N` dimension matrix.
//!
//! ## Guarantees
//!
//! - **Exact**: rank and null space are computed over the rationals, never
//!   in floating point.
//! - **Complete**: exactly `N - rank` terms, each verified dimensionless.
//! - **Deterministic**: the same variables in the same order always give the
//!   same terms in the same order. Reordering the variables may change which
//!   terms are produced, but not how many.
//! - **Pure**: no I/O, no global state; engines are `Send + Sync`.
//!
//! ## Quick Start
//!
//! ```
//! use buckingham::{DimensionalAnalysis, VariableSet};
//!
//! let variables = VariableSet::from_i64([
//!     ("rho", [1, -3, 0]), // density, M L^-3
//!     ("v", [0, 1, -1]),   // velocity, L T^-1
//!     ("L", [0, 1, 0]),    // length, L
//!     ("mu", [1, -1, -1]), // dynamic viscosity, M L^-1 T^-1
//! ])?;
//!
//! let terms = DimensionalAnalysis::default().compute(&variables)?;
//! assert_eq!(terms.len(), 1);
//! assert_eq!(terms[0].to_string(), "rho^-1 * v^-1 * L^-1 * mu");
//! # Ok::<(), buckingham::AnalysisError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dimensions;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod monomial;
pub mod pi_term;
pub mod variables;

#[cfg(test)]
mod proptests;

pub use dimensions::BaseDimensions;
pub use engine::{Analysis, AnalysisConfig, BasisNormalization, DimensionalAnalysis};
pub use error::{AnalysisError, Result};
pub use matrix::DimensionMatrix;
pub use monomial::Monomial;
pub use pi_term::{PiTerm, PiTermRecord};
pub use variables::{Variable, VariableSet};

pub use buckingham_exact::{Integer, Rational};

/// Computes the Pi terms of `variables` with the default configuration
/// (mass, length, time; RREF basis).
///
/// Only three-dimensional M, L, T exponent vectors are accepted. For any
/// other base-dimension set build a [`DimensionalAnalysis`] with
/// [`AnalysisConfig::with_dimensions`].
///
/// # Errors
///
/// See [`DimensionalAnalysis::compute`]. Vectors of any length other than
/// three give [`AnalysisError::ConfigurationMismatch`].
pub fn compute(variables: &VariableSet) -> Result<Vec<PiTerm>> {
    DimensionalAnalysis::default().compute(variables)
}
