//! Consistency tests for the norm kernel dispatch paths.
//!
//! The contiguous (scalar or SIMD), parallel, and strided paths all apply
//! the same per-row operation order, so their outputs must match exactly.

use ndarray::{s, Array2};
use rand::Rng;

use vectorized2d::{Array2D, Array2dOps};

fn random_buffer(rows: usize) -> Array2<f64> {
    let mut rng = rand::thread_rng();
    Array2::from_shape_fn((rows, 2), |_| rng.gen::<f64>() * 10.0 - 5.0)
}

#[test]
fn parallel_path_matches_the_per_row_formula() {
    // past the parallel dispatch threshold
    let buf = random_buffer(600_000);
    let wrapped = Array2D::from_array(buf.clone()).unwrap();
    let norms = wrapped.norm();
    assert_eq!(norms.len(), 600_000);
    for (i, row) in buf.outer_iter().enumerate() {
        assert_eq!(norms[i], (row[0] * row[0] + row[1] * row[1]).sqrt());
    }
}

#[test]
fn parallel_path_matches_small_input_results() {
    let big = random_buffer(600_000);
    let head = big.slice(s![..128, ..]).to_owned();

    let from_big = Array2D::from_array(big).unwrap().norm();
    let from_head = Array2D::from_array(head).unwrap().norm();
    for i in 0..128 {
        assert_eq!(from_big[i], from_head[i]);
    }
}

#[test]
fn strided_view_matches_the_contiguous_result() {
    let buf = random_buffer(1001);
    let every_other = buf.slice(s![..;2, ..]);
    assert!(every_other.as_slice().is_none());

    let strided_norms = Array2D::from_view(every_other).unwrap().norm();
    let contiguous_norms = Array2D::from_array(every_other.to_owned()).unwrap().norm();
    assert_eq!(strided_norms, contiguous_norms);
}

#[test]
fn norm_squared_is_norm_without_the_root() {
    let buf = random_buffer(10_000);
    let wrapped = Array2D::from_view(buf.view()).unwrap();
    let norms = wrapped.norm();
    let squared = wrapped.norm_squared();
    for i in 0..10_000 {
        assert_eq!(norms[i], squared[i].sqrt());
    }
}
