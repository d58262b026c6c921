//! # buckingham-linalg
//!
//! Exact dense linear algebra for dimension matrices.
//!
//! This crate provides:
//! - The [`Field`] trait, implemented for exact rationals
//! - Dense row-major matrices
//! - Gauss-Jordan elimination to reduced row echelon form
//! - Rank and null space computation
//!
//! All elimination decisions are `is_zero` tests on exact values, so there is
//! no tolerance to tune and no false rank deficiency from rounding.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;
pub mod field;

pub use dense_matrix::{DenseMatrix, RowEchelon};
pub use field::Field;

use thiserror::Error;

/// Errors from matrix construction and products.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// A row (or column) did not have the expected number of entries.
    #[error("line {index} has {actual} entries, expected {expected}")]
    Ragged {
        /// Index of the offending row or column.
        index: usize,
        /// Length of the first line.
        expected: usize,
        /// Length of the offending line.
        actual: usize,
    },

    /// Operand shapes are incompatible.
    #[error("shape mismatch: expected length {expected}, got {actual}")]
    ShapeMismatch {
        /// Length required by the matrix.
        expected: usize,
        /// Length supplied.
        actual: usize,
    },
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, LinalgError>;
