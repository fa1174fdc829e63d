//! Invert a small dense matrix and demonstrate the failure handling.
//!
//! Run with `RUST_LOG=warn cargo run --example invert` to see the
//! warnings emitted at the operator boundary.

use denmat::{MatError, Matrix};

fn main() {
    env_logger::init();

    // 3x3 with determinant -1; the adjugate inverse is exact here.
    let a = Matrix::from_rows(&[
        vec![2.0, 5.0, 7.0],
        vec![6.0, 3.0, 4.0],
        vec![5.0, -2.0, -3.0],
    ])
    .unwrap();

    let inv = a.inverse().unwrap();
    println!("A^-1 =\n{inv}");
    println!("A * A^-1 =\n{}", &a * &inv);

    // Mismatched shapes are logged and skipped at the operator boundary;
    // the left operand comes back unchanged.
    let b = Matrix::<f64>::new(2, 2).unwrap();
    let kept = &a + &b;
    println!("sum with a 2x2 kept the left operand: {}", kept == a);

    // The fallible surface reports the same condition as a value.
    let singular = Matrix::from_rows(&[
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ])
    .unwrap();
    match singular.inverse() {
        Err(MatError::Singular) => println!("singular matrix rejected"),
        other => println!("unexpected outcome: {other:?}"),
    }

    // Callers that prefer the sentinel style can map the failure to the
    // empty matrix.
    let sentinel = Matrix::from_rows(&[vec![1.0, 2.0], vec![2.0, 4.0]])
        .unwrap()
        .inverse()
        .unwrap_or_else(|e| {
            log::warn!("inverse failed: {e}");
            Matrix::empty()
        });
    println!("sentinel is empty: {}", sentinel.is_empty());
}
