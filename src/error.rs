use thiserror::Error;

// Unified error type for denmat.
//
// Construction and indexing failures (InvalidSize, RaggedRows,
// BufferLength, IndexOutOfRange) are contract violations and should be
// propagated. The shape and algebra failures below them are recoverable
// conditions a caller may legitimately handle; see the operator impls
// in `matrix::arith` for the boundary that downgrades them to warnings.

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatError {
    #[error("matrix dimensions must be at least 1x1, requested {rows}x{cols}")]
    InvalidSize { rows: usize, cols: usize },
    #[error("row {row} has {got} elements, expected {expected}")]
    RaggedRows { row: usize, expected: usize, got: usize },
    #[error("row-major buffer holds {got} elements, expected {expected}")]
    BufferLength { expected: usize, got: usize },
    #[error("index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange { row: usize, col: usize, rows: usize, cols: usize },
    #[error("dimension mismatch: {lhs_rows}x{lhs_cols} vs {rhs_rows}x{rhs_cols}")]
    DimensionMismatch { lhs_rows: usize, lhs_cols: usize, rhs_rows: usize, rhs_cols: usize },
    #[error("inner dimensions do not agree for multiplication: {lhs_cols} vs {rhs_rows}")]
    InnerDimensionMismatch { lhs_cols: usize, rhs_rows: usize },
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("cofactors require a matrix of order at least 2")]
    CofactorsUndefined,
    #[error("cannot invert a singular matrix")]
    Singular,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatError>;
