//! Cofactor-expansion machinery: minors, determinants, cofactor and
//! adjugate matrices, and the inverse built from them.
//!
//! The determinant is the textbook recursive expansion along the first
//! row: order 1 is the element itself, order 2 the closed `ad - cb`
//! form, and order n recurses into n minors of order n-1. Cost grows
//! factorially with the order, which suits the small matrices this crate
//! targets; no pivoting or factorization is attempted.

use num_traits::Float;

use crate::error::{MatError, Result};
use crate::matrix::{Matrix, TOLERANCE};

impl<T: Float> Matrix<T> {
    /// Submatrix omitting `row` and `col`, preserving the order of the
    /// remaining rows and columns. Caller guarantees a square receiver
    /// of order at least 2 and in-range indices.
    fn minor(&self, row: usize, col: usize) -> Self {
        let n = self.nrows - 1;
        let mut out = Self { nrows: n, ncols: n, data: Vec::with_capacity(n * n) };
        for i in 0..self.nrows {
            if i == row {
                continue;
            }
            for j in 0..self.ncols {
                if j == col {
                    continue;
                }
                out.data.push(self.data[i * self.ncols + j]);
            }
        }
        out
    }

    fn det_unchecked(&self) -> T {
        let n = self.nrows;
        if n == 1 {
            self.data[0]
        } else if n == 2 {
            self.data[0] * self.data[3] - self.data[2] * self.data[1]
        } else {
            let mut acc = T::zero();
            let mut sign = T::one();
            for j in 0..n {
                acc = acc + sign * self.data[j] * self.minor(0, j).det_unchecked();
                sign = -sign;
            }
            acc
        }
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// Fails with [`MatError::NotSquare`] for rectangular input. The
    /// empty matrix is square and yields zero.
    pub fn determinant(&self) -> Result<T> {
        if self.nrows != self.ncols {
            return Err(MatError::NotSquare { rows: self.nrows, cols: self.ncols });
        }
        Ok(self.det_unchecked())
    }

    /// Matrix of algebraic complements: `out[i][j]` is
    /// `(-1)^(i + j) * det(minor(i, j))`.
    ///
    /// Requires a square matrix of order at least 2; the complement of a
    /// lone scalar is undefined here.
    pub fn cofactor_matrix(&self) -> Result<Self> {
        if self.nrows != self.ncols {
            return Err(MatError::NotSquare { rows: self.nrows, cols: self.ncols });
        }
        if self.nrows < 2 {
            return Err(MatError::CofactorsUndefined);
        }
        let mut out = Self::new(self.nrows, self.ncols)?;
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                let sign = if (i + j) % 2 == 0 { T::one() } else { -T::one() };
                out.data[i * out.ncols + j] = sign * self.minor(i, j).det_unchecked();
            }
        }
        Ok(out)
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Result<Self> {
        Ok(self.cofactor_matrix()?.transpose())
    }

    /// Inverse via the adjugate: `adj(A) * (1 / det(A))`.
    ///
    /// A 1x1 matrix inverts directly to `[[1/a]]` with no singularity
    /// guard, so `[[0.0]]` inverts to `[[inf]]` per IEEE division.
    /// Anything larger is rejected as [`MatError::Singular`] when
    /// `|det|` is within [`TOLERANCE`] of zero.
    pub fn inverse(&self) -> Result<Self> {
        if self.nrows == 1 && self.ncols == 1 {
            let mut out = Self::default();
            out.data[0] = T::one() / self.data[0];
            return Ok(out);
        }
        let mut adj = self.adjugate()?;
        let det = self.determinant()?;
        if det.abs() <= T::from(TOLERANCE).unwrap() {
            return Err(MatError::Singular);
        }
        adj.scale(T::one() / det);
        Ok(adj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minor_drops_the_named_row_and_column() {
        let m = Matrix::from_rows(&[
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .unwrap();
        let minor = m.minor(1, 1);
        assert_eq!(minor.shape(), (2, 2));
        assert_eq!(minor.as_slice(), &[1.0, 3.0, 7.0, 9.0]);
    }

    #[test]
    fn det_base_cases() {
        let one = Matrix::from_rows(&[vec![42.0]]).unwrap();
        assert_eq!(one.det_unchecked(), 42.0);
        let two = Matrix::from_rows(&[vec![-3.0, 2.0], vec![12.0, 4.0]]).unwrap();
        assert_eq!(two.det_unchecked(), -36.0);
    }

    #[test]
    fn first_row_expansion_alternates_signs() {
        let m = Matrix::from_rows(&[
            vec![-3.0, 2.0, -5.0],
            vec![10.0, 4.0, 7.0],
            vec![6.0, -8.0, -9.0],
        ])
        .unwrap();
        assert_eq!(m.det_unchecked(), 724.0);
    }
}
