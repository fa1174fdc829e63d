//! Dense owned matrix storage.
//!
//! `Matrix<T>` owns a contiguous row-major buffer of `nrows * ncols`
//! elements. Construction validates that both dimensions are at least 1;
//! the only 0x0 value is the explicit [`Matrix::empty`] state, reachable
//! through [`Matrix::take`] or as a caller-chosen fallback when a
//! decomposition fails.

use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::Float;

use crate::error::{MatError, Result};

/// Dense real-valued matrix with row-major storage.
///
/// Element `(i, j)` lives at `data[i * ncols + j]`. The type is a plain
/// owned value: `Clone` deep-copies the buffer, dropping it frees the
/// buffer, and [`Matrix::take`] transfers it while leaving the source
/// empty.
#[derive(Debug, Clone)]
pub struct Matrix<T = f64> {
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,
    pub(crate) data: Vec<T>,
}

impl<T: Float> Matrix<T> {
    /// Build a zero-filled `nrows x ncols` matrix.
    ///
    /// Both dimensions must be at least 1.
    pub fn new(nrows: usize, ncols: usize) -> Result<Self> {
        let len = Self::checked_len(nrows, ncols)?;
        Ok(Self { nrows, ncols, data: vec![T::zero(); len] })
    }

    /// The 0x0 matrix: no storage, no valid indices.
    pub fn empty() -> Self {
        Self { nrows: 0, ncols: 0, data: Vec::new() }
    }

    /// Build from nested rows.
    ///
    /// Fails on an empty row list, an empty first row, or rows of unequal
    /// length.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(Self::checked_len(nrows, ncols)?);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(MatError::RaggedRows { row: i, expected: ncols, got: row.len() });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { nrows, ncols, data })
    }

    /// Build from a row-major element buffer.
    ///
    /// `data.len()` must equal `nrows * ncols`.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self> {
        let len = Self::checked_len(nrows, ncols)?;
        if data.len() != len {
            return Err(MatError::BufferLength { expected: len, got: data.len() });
        }
        Ok(Self { nrows, ncols, data })
    }

    /// Square identity of the given order.
    pub fn identity(order: usize) -> Result<Self> {
        let mut m = Self::new(order, order)?;
        for i in 0..order {
            m.data[i * order + i] = T::one();
        }
        Ok(m)
    }

    /// Number of rows (0 only for the empty state).
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns (0 only for the empty state).
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// True for the 0x0 state left behind by [`Matrix::take`].
    pub fn is_empty(&self) -> bool {
        self.nrows == 0
    }

    /// The backing row-major slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Element at `(row, col)`, or [`MatError::IndexOutOfRange`].
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_index(row, col)?;
        Ok(self.data[row * self.ncols + col])
    }

    /// Mutable element at `(row, col)`, or [`MatError::IndexOutOfRange`].
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        self.check_index(row, col)?;
        Ok(&mut self.data[row * self.ncols + col])
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.nrows || col >= self.ncols {
            return Err(MatError::IndexOutOfRange {
                row,
                col,
                rows: self.nrows,
                cols: self.ncols,
            });
        }
        Ok(())
    }

    // Element count for an nrows x ncols shape. Zero extents and
    // products that do not fit in usize are both invalid sizes.
    fn checked_len(nrows: usize, ncols: usize) -> Result<usize> {
        if nrows == 0 || ncols == 0 {
            return Err(MatError::InvalidSize { rows: nrows, cols: ncols });
        }
        nrows
            .checked_mul(ncols)
            .ok_or(MatError::InvalidSize { rows: nrows, cols: ncols })
    }

    /// Resize to `nrows x ncols` in place.
    ///
    /// Elements in the overlap of the old and new shapes are kept at
    /// their positions; everything outside it is zero-filled. The new
    /// dimensions must both be at least 1, so resizing an empty matrix
    /// fails.
    pub fn resize(&mut self, nrows: usize, ncols: usize) -> Result<()> {
        let mut next = Self::new(nrows, ncols)?;
        let keep_rows = self.nrows.min(nrows);
        let keep_cols = self.ncols.min(ncols);
        for i in 0..keep_rows {
            for j in 0..keep_cols {
                next.data[i * ncols + j] = self.data[i * self.ncols + j];
            }
        }
        *self = next;
        Ok(())
    }

    /// Change the row count, preserving the rows that still fit.
    pub fn set_nrows(&mut self, nrows: usize) -> Result<()> {
        self.resize(nrows, self.ncols)
    }

    /// Change the column count, preserving the columns that still fit.
    pub fn set_ncols(&mut self, ncols: usize) -> Result<()> {
        self.resize(self.nrows, ncols)
    }

    /// Transfer the contents out, leaving `self` empty (0x0).
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::empty())
    }
}

impl<T: Float> Default for Matrix<T> {
    /// A 1x1 zero matrix.
    fn default() -> Self {
        Self { nrows: 1, ncols: 1, data: vec![T::zero()] }
    }
}

impl<T: Float> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// Panics when the index is out of range; use [`Matrix::get`] for a
    /// fallible lookup.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        if let Err(e) = self.check_index(row, col) {
            panic!("{e}");
        }
        &self.data[row * self.ncols + col]
    }
}

impl<T: Float> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        if let Err(e) = self.check_index(row, col) {
            panic!("{e}");
        }
        &mut self.data[row * self.ncols + col]
    }
}

impl<T: Float + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for i in 0..self.nrows {
            write!(f, "  [")?;
            for j in 0..self.ncols {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[i * self.ncols + j])?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_keeps_the_overlap_in_place() {
        let mut m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        m.resize(3, 2).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 2.0, 4.0, 5.0, 0.0, 0.0]);
    }

    #[test]
    fn take_leaves_an_empty_source() {
        let mut m = Matrix::<f64>::identity(3).unwrap();
        let moved = m.take();
        assert_eq!(moved.shape(), (3, 3));
        assert!(m.is_empty());
        assert_eq!(m.shape(), (0, 0));
    }

    #[test]
    fn check_index_rejects_the_row_count_itself() {
        let m = Matrix::<f64>::new(2, 3).unwrap();
        assert!(m.check_index(1, 2).is_ok());
        assert!(m.check_index(2, 0).is_err());
        assert!(m.check_index(0, 3).is_err());
    }

    #[test]
    fn checked_len_rejects_wrapping_products() {
        assert_eq!(Matrix::<f64>::checked_len(3, 4).unwrap(), 12);
        let half = usize::MAX / 2 + 1;
        assert_eq!(
            Matrix::<f64>::checked_len(half, 2).unwrap_err(),
            MatError::InvalidSize { rows: half, cols: 2 }
        );
    }
}
