//! Row-wise norm kernels over interleaved (N, 2) buffers.
//!
//! The public entry points dispatch on the layout and size of the input:
//! contiguous buffers run a tight kernel over the interleaved `[x0, y0, x1,
//! y1, ..]` slice (SSE2 when the `simd` feature is enabled on x86_64, a
//! scalar loop otherwise), large inputs additionally split into rayon chunks.
//! Strided views fall back to per-row iteration. All paths apply the same
//! per-row operation order, so their results are identical.

use ndarray::{Array1, ArrayView2};
use num_traits::Float;
use rayon::prelude::*;

/// Row count above which the contiguous kernels run on rayon chunks.
const PARALLEL_THRESHOLD: usize = 500_000;

/// Rows handed to each rayon task.
const PARALLEL_CHUNK_ROWS: usize = 65_536;

/// Per-row Euclidean length: `sqrt(x^2 + y^2)` for each row of `view`.
pub fn norm(view: &ArrayView2<'_, f64>) -> Array1<f64> {
    per_row(view, "norm", norm_rows, |x, y| (x * x + y * y).sqrt())
}

/// Per-row squared length: `x^2 + y^2` for each row of `view`.
pub fn norm_squared(view: &ArrayView2<'_, f64>) -> Array1<f64> {
    per_row(view, "norm_squared", norm_squared_rows, |x, y| x * x + y * y)
}

/// Layout/size dispatch shared by the row kernels.
///
/// `rows_kernel` consumes an interleaved contiguous slice; `one` computes a
/// single row and serves the strided fallback.
fn per_row(
    view: &ArrayView2<'_, f64>,
    name: &str,
    rows_kernel: fn(&[f64], &mut [f64]),
    one: fn(f64, f64) -> f64,
) -> Array1<f64> {
    let n = view.nrows();
    let mut out = vec![0.0; n];

    match view.as_slice() {
        Some(flat) => {
            if n >= PARALLEL_THRESHOLD {
                log::debug!("{}: parallel path for {} rows", name, n);
                out.par_chunks_mut(PARALLEL_CHUNK_ROWS)
                    .zip(flat.par_chunks(PARALLEL_CHUNK_ROWS * 2))
                    .for_each(|(out_chunk, row_chunk)| rows_kernel(row_chunk, out_chunk));
            } else {
                rows_kernel(flat, &mut out);
            }
        }
        None => {
            log::trace!("{}: strided fallback for {} rows", name, n);
            for (o, row) in out.iter_mut().zip(view.outer_iter()) {
                *o = one(row[0], row[1]);
            }
        }
    }

    Array1::from_vec(out)
}

fn norm_rows(flat: &[f64], out: &mut [f64]) {
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        unsafe { norm_rows_sse2(flat, out) }
    }
    #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
    {
        norm_rows_scalar(flat, out)
    }
}

fn norm_squared_rows(flat: &[f64], out: &mut [f64]) {
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        unsafe { norm_squared_rows_sse2(flat, out) }
    }
    #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
    {
        norm_squared_rows_scalar(flat, out)
    }
}

#[cfg_attr(all(feature = "simd", target_arch = "x86_64"), allow(dead_code))]
fn norm_rows_scalar<T: Float>(flat: &[T], out: &mut [T]) {
    for (o, pair) in out.iter_mut().zip(flat.chunks_exact(2)) {
        *o = (pair[0] * pair[0] + pair[1] * pair[1]).sqrt();
    }
}

#[cfg_attr(all(feature = "simd", target_arch = "x86_64"), allow(dead_code))]
fn norm_squared_rows_scalar<T: Float>(flat: &[T], out: &mut [T]) {
    for (o, pair) in out.iter_mut().zip(flat.chunks_exact(2)) {
        *o = pair[0] * pair[0] + pair[1] * pair[1];
    }
}

/// SSE2 kernel: two rows per iteration, scalar tail.
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
unsafe fn norm_rows_sse2(flat: &[f64], out: &mut [f64]) {
    use std::arch::x86_64::*;

    let n = out.len();
    let mut i = 0usize;

    while i + 2 <= n {
        let r0 = _mm_loadu_pd(flat.as_ptr().add(2 * i));
        let r1 = _mm_loadu_pd(flat.as_ptr().add(2 * i + 2));
        let sq0 = _mm_mul_pd(r0, r0);
        let sq1 = _mm_mul_pd(r1, r1);
        // gather [x0^2, x1^2] and [y0^2, y1^2], then sum lanes
        let xs = _mm_unpacklo_pd(sq0, sq1);
        let ys = _mm_unpackhi_pd(sq0, sq1);
        let sums = _mm_add_pd(xs, ys);
        _mm_storeu_pd(out.as_mut_ptr().add(i), _mm_sqrt_pd(sums));
        i += 2;
    }

    while i < n {
        let x = flat[2 * i];
        let y = flat[2 * i + 1];
        out[i] = (x * x + y * y).sqrt();
        i += 1;
    }
}

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
unsafe fn norm_squared_rows_sse2(flat: &[f64], out: &mut [f64]) {
    use std::arch::x86_64::*;

    let n = out.len();
    let mut i = 0usize;

    while i + 2 <= n {
        let r0 = _mm_loadu_pd(flat.as_ptr().add(2 * i));
        let r1 = _mm_loadu_pd(flat.as_ptr().add(2 * i + 2));
        let sq0 = _mm_mul_pd(r0, r0);
        let sq1 = _mm_mul_pd(r1, r1);
        let xs = _mm_unpacklo_pd(sq0, sq1);
        let ys = _mm_unpackhi_pd(sq0, sq1);
        _mm_storeu_pd(out.as_mut_ptr().add(i), _mm_add_pd(xs, ys));
        i += 2;
    }

    while i < n {
        let x = flat[2 * i];
        let y = flat[2 * i + 1];
        out[i] = x * x + y * y;
        i += 1;
    }
}
