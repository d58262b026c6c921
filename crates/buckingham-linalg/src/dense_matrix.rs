//! Dense matrices over exact fields.
//!
//! Dimension matrices are tiny (a handful of base dimensions by a few dozen
//! variables), so a row-major `Vec` with plain Gauss-Jordan elimination is
//! all that is needed.

use std::ops::{Index, IndexMut};

use crate::field::Field;
use crate::{LinalgError, Result};

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<F> {
    /// Matrix entries in row-major order.
    data: Vec<F>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

/// Result of Gauss-Jordan elimination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEchelon<F> {
    /// The reduced row echelon form. Pivots are 1 and are the only non-zero
    /// entry of their column.
    pub reduced: DenseMatrix<F>,
    /// Column index of the pivot in each of the first `rank` rows.
    pub pivot_cols: Vec<usize>,
}

impl<F> RowEchelon<F> {
    /// The rank of the eliminated matrix.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.pivot_cols.len()
    }

    /// Columns without a pivot, in increasing order.
    #[must_use]
    pub fn free_cols(&self) -> Vec<usize> {
        let mut pivots = self.pivot_cols.iter().copied().peekable();
        (0..self.reduced.num_cols)
            .filter(|&col| {
                if pivots.peek() == Some(&col) {
                    pivots.next();
                    false
                } else {
                    true
                }
            })
            .collect()
    }
}

impl<F: Field> RowEchelon<F> {
    /// Reads a null-space basis off the reduced form.
    ///
    /// One vector per free column, in increasing column order. The vector for
    /// free column `f` has a 1 at `f`, zero at every other free column, and
    /// `-R[i][f]` at the pivot column of row `i` of the RREF `R`.
    #[must_use]
    pub fn kernel_basis(&self) -> Vec<Vec<F>> {
        let num_cols = self.reduced.num_cols;
        self.free_cols()
            .into_iter()
            .map(|free| {
                let mut vec = vec![F::zero(); num_cols];
                vec[free] = F::one();
                for (row, &pivot_col) in self.pivot_cols.iter().enumerate() {
                    vec[pivot_col] = -self.reduced[(row, free)].clone();
                }
                vec
            })
            .collect()
    }
}

impl<F: Field> DenseMatrix<F> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![F::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = F::one();
        }
        m
    }

    /// Creates a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Ragged`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<F>>) -> Result<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != num_cols {
                return Err(LinalgError::Ragged {
                    index,
                    expected: num_cols,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Creates a `num_rows × columns.len()` matrix whose `j`-th column is
    /// `columns[j]`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Ragged`] if a column does not have `num_rows`
    /// entries.
    pub fn from_columns<C: AsRef<[F]>>(num_rows: usize, columns: &[C]) -> Result<Self> {
        let mut m = Self::zeros(num_rows, columns.len());
        for (col, values) in columns.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != num_rows {
                return Err(LinalgError::Ragged {
                    index: col,
                    expected: num_rows,
                    actual: values.len(),
                });
            }
            for (row, value) in values.iter().enumerate() {
                m[(row, col)] = value.clone();
            }
        }
        Ok(m)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&F> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[F] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns a column as a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<F> {
        (0..self.num_rows)
            .map(|row| self[(row, col)].clone())
            .collect()
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.num_cols, self.num_rows);
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                result[(j, i)] = self[(i, j)].clone();
            }
        }
        result
    }

    /// Matrix-vector multiply: y = A * x.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if `x` does not have one entry
    /// per column.
    pub fn mv(&self, x: &[F]) -> Result<Vec<F>> {
        if x.len() != self.num_cols {
            return Err(LinalgError::ShapeMismatch {
                expected: self.num_cols,
                actual: x.len(),
            });
        }
        Ok((0..self.num_rows)
            .map(|row| {
                self.row(row)
                    .iter()
                    .zip(x)
                    .fold(F::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
            })
            .collect())
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for k in 0..self.num_cols {
            self.data.swap(i * self.num_cols + k, j * self.num_cols + k);
        }
    }

    /// Scales a row by a scalar.
    pub fn scale_row(&mut self, row: usize, scale: &F) {
        for k in 0..self.num_cols {
            self[(row, k)] = self[(row, k)].clone() * scale.clone();
        }
    }

    /// Adds a scaled row to another: row[target] += scale * row[source].
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scale: &F) {
        for k in 0..self.num_cols {
            let val = self[(source, k)].clone() * scale.clone();
            self[(target, k)] = self[(target, k)].clone() + val;
        }
    }

    /// Reduced row echelon form via Gauss-Jordan elimination.
    ///
    /// Columns are scanned left to right and the first row with a non-zero
    /// entry becomes the pivot row, so the result depends only on the matrix
    /// (the RREF is unique) and the pivot columns are reported in order.
    #[must_use]
    pub fn rref(&self) -> RowEchelon<F> {
        let mut m = self.clone();
        let mut pivot_cols = Vec::new();
        let mut pivot_row = 0;

        for col in 0..m.num_cols {
            if pivot_row == m.num_rows {
                break;
            }

            let Some(found) = (pivot_row..m.num_rows).find(|&row| !m[(row, col)].is_zero())
            else {
                continue;
            };
            m.swap_rows(pivot_row, found);

            // Make the pivot 1.
            if let Some(inv) = m[(pivot_row, col)].inv() {
                m.scale_row(pivot_row, &inv);
            }

            // Clear the rest of the column, above and below.
            for row in 0..m.num_rows {
                if row != pivot_row && !m[(row, col)].is_zero() {
                    let factor = -m[(row, col)].clone();
                    m.add_scaled_row(row, pivot_row, &factor);
                }
            }

            pivot_cols.push(col);
            pivot_row += 1;
        }

        RowEchelon {
            reduced: m,
            pivot_cols,
        }
    }

    /// Computes the rank exactly.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rref().rank()
    }

    /// Computes a basis of the null space (kernel).
    ///
    /// See [`RowEchelon::kernel_basis`] for the exact shape of the vectors.
    #[must_use]
    pub fn null_space(&self) -> Vec<Vec<F>> {
        self.rref().kernel_basis()
    }
}

impl<F> Index<(usize, usize)> for DenseMatrix<F> {
    type Output = F;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<F> IndexMut<(usize, usize)> for DenseMatrix<F> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buckingham_exact::Rational;

    fn q(n: i64) -> Rational {
        Rational::from(n)
    }

    fn matrix(rows: &[&[i64]]) -> DenseMatrix<Rational> {
        DenseMatrix::from_rows(rows.iter().map(|r| r.iter().map(|&v| q(v)).collect()).collect())
            .unwrap()
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = DenseMatrix::from_rows(vec![vec![q(1), q(2)], vec![q(3)]]).unwrap_err();
        assert_eq!(
            err,
            LinalgError::Ragged {
                index: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_from_columns() {
        let m = DenseMatrix::from_columns(2, &[vec![q(1), q(2)], vec![q(3), q(4)], vec![q(5), q(6)]])
            .unwrap();
        assert_eq!(m, matrix(&[&[1, 3, 5], &[2, 4, 6]]));
        assert_eq!(m.col(1), vec![q(3), q(4)]);
        assert_eq!(m.row(1), [q(2), q(4), q(6)]);
        assert_eq!(m.transpose().num_rows(), 3);
        assert!(DenseMatrix::<Rational>::from_columns(2, &[vec![q(1)]]).is_err());
    }

    #[test]
    fn test_rank_deficient() {
        let m = matrix(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
        assert_eq!(m.rank(), 2);
        assert_eq!(DenseMatrix::<Rational>::identity(4).rank(), 4);
        assert_eq!(DenseMatrix::<Rational>::zeros(3, 5).rank(), 0);
    }

    #[test]
    fn test_rref_pivots() {
        // Leading zero column and a dependent column.
        let m = matrix(&[&[0, 2, 4, 1], &[0, 1, 2, 0]]);
        let echelon = m.rref();
        assert_eq!(echelon.pivot_cols, vec![1, 3]);
        assert_eq!(echelon.free_cols(), vec![0, 2]);
        assert_eq!(echelon.reduced, matrix(&[&[0, 1, 2, 0], &[0, 0, 0, 1]]));
    }

    #[test]
    fn test_null_space_is_kernel() {
        let m = matrix(&[&[1, 0, 1], &[0, 1, 1], &[0, 0, 0]]);
        let kernel = m.null_space();
        assert_eq!(kernel, vec![vec![q(-1), q(-1), q(1)]]);
        for v in &kernel {
            assert!(m.mv(v).unwrap().iter().all(num_traits::Zero::is_zero));
        }
    }

    #[test]
    fn test_null_space_fractional_entries() {
        let m = matrix(&[&[2, 3]]);
        assert_eq!(m.null_space(), vec![vec![Rational::from_i64(-3, 2), q(1)]]);
    }

    #[test]
    fn test_full_rank_has_trivial_kernel() {
        let m = matrix(&[&[1, 0], &[0, 1], &[0, 0]]);
        assert!(m.null_space().is_empty());
    }

    #[test]
    fn test_mv_shape_mismatch() {
        let m = matrix(&[&[1, 2]]);
        assert_eq!(
            m.mv(&[q(1)]),
            Err(LinalgError::ShapeMismatch {
                expected: 2,
                actual: 1
            })
        );
    }
}
