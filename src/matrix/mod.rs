//! Matrix module: the dense owned matrix type and its operations.

pub mod arith;
pub mod cofactor;
pub mod dense;
pub use dense::Matrix;

/// Absolute tolerance shared by [`Matrix::approx_eq`] and the
/// singularity test in [`Matrix::inverse`].
///
/// Two elements are considered equal when they differ by strictly less
/// than this value; a determinant is considered zero when its magnitude
/// is less than or equal to it.
pub const TOLERANCE: f64 = 1.0e-7;
