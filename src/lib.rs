//! denmat: dense real-valued matrices with cofactor-expansion decompositions.
//!
//! This crate provides a single owned matrix value type with elementwise
//! algebra, tolerance-based comparison, transposition, and the classical
//! cofactor machinery: recursive determinants, cofactor and adjugate
//! matrices, and the adjugate-based inverse.
//!
//! Failures split by severity. Construction and indexing errors are
//! contract violations surfaced as `Err` from the fallible API. Shape
//! and algebra failures are recoverable: the `try_*` methods return them
//! as values, while the `std::ops` operators log a warning and keep the
//! left operand unchanged.

pub mod error;
pub mod matrix;

// Re-exports for convenience
pub use error::*;
pub use matrix::*;
