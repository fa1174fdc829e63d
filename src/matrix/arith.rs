//! Elementwise algebra, scalar and matrix products, and comparison.
//!
//! Every fallible operation comes in two forms. The `try_*` methods
//! return the shape error and leave the receiver untouched, so callers
//! can branch on [`MatError`]. The `std::ops` impls wrap them for
//! expression-style code: a failed operator logs a warning through
//! `log::warn!` and yields the left operand unchanged.

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use num_traits::Float;

use crate::error::{MatError, Result};
use crate::matrix::{Matrix, TOLERANCE};

impl<T: Float> Matrix<T> {
    /// Tolerance-based equality.
    ///
    /// Shapes must match exactly and every element pair must differ by
    /// strictly less than [`TOLERANCE`]. Two empty matrices compare
    /// equal.
    pub fn approx_eq(&self, other: &Self) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        let tol = T::from(TOLERANCE).unwrap();
        self.data.iter().zip(&other.data).all(|(&a, &b)| (a - b).abs() < tol)
    }

    /// Multiply every element by `k`. Defined for every shape.
    pub fn scale(&mut self, k: T) {
        for x in &mut self.data {
            *x = *x * k;
        }
    }

    /// Elementwise `self += other`.
    ///
    /// On a shape mismatch the receiver is left untouched and the
    /// mismatch is returned.
    pub fn try_add_assign(&mut self, other: &Self) -> Result<()> {
        self.check_same_shape(other)?;
        for (x, &y) in self.data.iter_mut().zip(&other.data) {
            *x = *x + y;
        }
        Ok(())
    }

    /// Elementwise `self -= other`.
    ///
    /// On a shape mismatch the receiver is left untouched and the
    /// mismatch is returned.
    pub fn try_sub_assign(&mut self, other: &Self) -> Result<()> {
        self.check_same_shape(other)?;
        for (x, &y) in self.data.iter_mut().zip(&other.data) {
            *x = *x - y;
        }
        Ok(())
    }

    /// Replace `self` with the product `self * other`.
    ///
    /// Requires `self.ncols == other.nrows`; on a mismatch the receiver
    /// is left untouched and the mismatch is returned.
    pub fn try_mul_assign(&mut self, other: &Self) -> Result<()> {
        if self.ncols != other.nrows {
            return Err(MatError::InnerDimensionMismatch {
                lhs_cols: self.ncols,
                rhs_rows: other.nrows,
            });
        }
        let mut product = Self::new(self.nrows, other.ncols)?;
        for i in 0..self.nrows {
            for j in 0..other.ncols {
                let mut acc = T::zero();
                for k in 0..self.ncols {
                    acc = acc + self.data[i * self.ncols + k] * other.data[k * other.ncols + j];
                }
                product.data[i * other.ncols + j] = acc;
            }
        }
        *self = product;
        Ok(())
    }

    /// New `ncols x nrows` matrix with `out[i][j] = self[j][i]`.
    ///
    /// Defined for every shape, including empty.
    pub fn transpose(&self) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        let mut out = Self {
            nrows: self.ncols,
            ncols: self.nrows,
            data: vec![T::zero(); self.data.len()],
        };
        for i in 0..out.nrows {
            for j in 0..out.ncols {
                out.data[i * out.ncols + j] = self.data[j * self.ncols + i];
            }
        }
        out
    }

    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatError::DimensionMismatch {
                lhs_rows: self.nrows,
                lhs_cols: self.ncols,
                rhs_rows: other.nrows,
                rhs_cols: other.ncols,
            });
        }
        Ok(())
    }
}

impl<T: Float> PartialEq for Matrix<T> {
    /// Same contract as [`Matrix::approx_eq`].
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl<T: Float> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        let mut out = self.clone();
        if let Err(e) = out.try_add_assign(rhs) {
            log::warn!("matrix sum skipped: {e}");
        }
        out
    }
}

impl<T: Float> Add for Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        &self + &rhs
    }
}

impl<T: Float> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(e) = self.try_add_assign(rhs) {
            log::warn!("matrix sum skipped: {e}");
        }
    }
}

impl<T: Float> AddAssign<Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: Matrix<T>) {
        *self += &rhs;
    }
}

impl<T: Float> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        let mut out = self.clone();
        if let Err(e) = out.try_sub_assign(rhs) {
            log::warn!("matrix difference skipped: {e}");
        }
        out
    }
}

impl<T: Float> Sub for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        &self - &rhs
    }
}

impl<T: Float> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(e) = self.try_sub_assign(rhs) {
            log::warn!("matrix difference skipped: {e}");
        }
    }
}

impl<T: Float> SubAssign<Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: Matrix<T>) {
        *self -= &rhs;
    }
}

impl<T: Float> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        let mut out = self.clone();
        if let Err(e) = out.try_mul_assign(rhs) {
            log::warn!("matrix product skipped: {e}");
        }
        out
    }
}

impl<T: Float> Mul for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        &self * &rhs
    }
}

impl<T: Float> MulAssign<&Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(e) = self.try_mul_assign(rhs) {
            log::warn!("matrix product skipped: {e}");
        }
    }
}

impl<T: Float> MulAssign<Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, rhs: Matrix<T>) {
        *self *= &rhs;
    }
}

impl<T: Float> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, k: T) -> Matrix<T> {
        let mut out = self.clone();
        out.scale(k);
        out
    }
}

impl<T: Float> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(mut self, k: T) -> Matrix<T> {
        self.scale(k);
        self
    }
}

impl<T: Float> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, k: T) {
        self.scale(k);
    }
}
