//! Row-wise operations shared by all Nx2 wrappers.
//!
//! `Array2dOps` is the common surface of `Array2D`, `Vector2D`, `Point2D`,
//! and `Coordinate`: column accessors, per-row norms, normalization, and the
//! row-axis reshaping helpers. Implementors only provide a read view of the
//! underlying buffer and an owned constructor; everything else is derived.

use ndarray::{concatenate, Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::math;

pub trait Array2dOps {
    /// The owned flavor of this wrapper, produced by the derived operations.
    type Owned: Array2dOps;

    /// Read view of the underlying (N, 2) buffer.
    fn as_view(&self) -> ArrayView2<'_, f64>;

    /// Wrap an already-validated (N, 2) buffer.
    ///
    /// Callers must pass a buffer with exactly two columns; the derived
    /// operations uphold this on their own outputs.
    fn from_data(data: Array2<f64>) -> Self::Owned;

    /// Number of rows.
    fn rows(&self) -> usize {
        self.as_view().nrows()
    }

    fn is_empty(&self) -> bool {
        self.rows() == 0
    }

    /// First-column values as a non-copying 1-D view.
    fn x1(&self) -> ArrayView1<'_, f64> {
        self.as_view().index_axis_move(Axis(1), 0)
    }

    /// Second-column values as a non-copying 1-D view.
    fn x2(&self) -> ArrayView1<'_, f64> {
        self.as_view().index_axis_move(Axis(1), 1)
    }

    /// Row `i` as a pair. Panics when `i` is out of bounds.
    fn row(&self, i: usize) -> (f64, f64) {
        let v = self.as_view();
        (v[[i, 0]], v[[i, 1]])
    }

    /// Per-row Euclidean length.
    fn norm(&self) -> Array1<f64> {
        math::norm(&self.as_view())
    }

    /// Per-row squared Euclidean length.
    fn norm_squared(&self) -> Array1<f64> {
        math::norm_squared(&self.as_view())
    }

    /// Rows scaled to unit length. Zero rows are left untouched.
    fn normalized(&self) -> Self::Owned {
        let mut out = self.as_view().to_owned();
        let norms = math::norm(&self.as_view());
        for (mut row, &n) in out.outer_iter_mut().zip(norms.iter()) {
            if n != 0.0 {
                row[0] /= n;
                row[1] /= n;
            }
        }
        Self::from_data(out)
    }

    /// Split into N single-row owned wrappers.
    fn split(&self) -> Vec<Self::Owned> {
        self.as_view()
            .outer_iter()
            .map(|row| Self::from_data(row.insert_axis(Axis(0)).to_owned()))
            .collect()
    }

    /// Vertical concatenation, preserving the wrapper type.
    fn concat(parts: &[&Self]) -> Self::Owned {
        if parts.is_empty() {
            return Self::from_data(Array2::zeros((0, 2)));
        }
        let views: Vec<ArrayView2<'_, f64>> = parts.iter().map(|p| p.as_view()).collect();
        // cannot fail: every part has exactly two columns
        let stacked = concatenate(Axis(0), &views).expect("parts share the (_, 2) shape");
        Self::from_data(stacked)
    }

    /// Each row repeated `n` times consecutively along the row axis.
    fn repeat(&self, n: usize) -> Self::Owned {
        let rows = self.rows();
        let indices: Vec<usize> = (0..rows)
            .flat_map(|i| std::iter::repeat(i).take(n))
            .collect();
        Self::from_data(self.as_view().select(Axis(0), &indices))
    }

    /// The whole block tiled `n` times along the row axis.
    fn tile(&self, n: usize) -> Self::Owned {
        let rows = self.rows();
        let indices: Vec<usize> = (0..n).flat_map(|_| 0..rows).collect();
        Self::from_data(self.as_view().select(Axis(0), &indices))
    }

    /// Row subset by index. Panics on out-of-bounds indices.
    fn select_rows(&self, indices: &[usize]) -> Self::Owned {
        Self::from_data(self.as_view().select(Axis(0), indices))
    }

    /// Detach into an owned wrapper, copying the data.
    fn to_owned_2d(&self) -> Self::Owned {
        Self::from_data(self.as_view().to_owned())
    }
}
