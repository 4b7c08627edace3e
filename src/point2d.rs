//! Nx2 wrapper for Cartesian locations.

use std::fmt;
use std::ops::{Add, Sub};

use ndarray::{
    Array1, Array2, ArrayBase, ArrayView2, ArrayViewMut2, Data, Ix2, OwnedRepr, RawData,
    RawDataClone, ViewRepr,
};

use crate::array2d::Array2D;
use crate::error::Array2dError;
use crate::math::{broadcast_len, pick};
use crate::ops::Array2dOps;
use crate::vector2d::Vector2D;

/// Rows interpreted as Cartesian coordinate pairs. Subtracting two point sets
/// yields the [`Vector2D`] of per-row displacements.
pub struct Point2D<S = OwnedRepr<f64>>
where
    S: RawData<Elem = f64>,
{
    pub(crate) data: ArrayBase<S, Ix2>,
}

pub type Point2DView<'a> = Point2D<ViewRepr<&'a f64>>;
pub type Point2DViewMut<'a> = Point2D<ViewRepr<&'a mut f64>>;

impl Point2D {
    pub fn from_array(data: Array2<f64>) -> Result<Self, Array2dError> {
        Array2D::from_array(data).map(Into::into)
    }

    pub fn from_flat(flat: Vec<f64>) -> Result<Self, Array2dError> {
        Array2D::from_flat(flat).map(Into::into)
    }

    pub fn from_rows(rows: &[[f64; 2]]) -> Self {
        Array2D::from_rows(rows).into()
    }

    pub fn from_view(view: ArrayView2<'_, f64>) -> Result<Point2DView<'_>, Array2dError> {
        Array2D::from_view(view).map(Into::into)
    }

    pub fn from_view_mut(
        view: ArrayViewMut2<'_, f64>,
    ) -> Result<Point2DViewMut<'_>, Array2dError> {
        Array2D::from_view_mut(view).map(Into::into)
    }
}

impl<S: Data<Elem = f64>> Point2D<S> {
    /// Per-row displacement `other - self` under the equal-or-one rule.
    pub fn displacement_to<S2: Data<Elem = f64>>(
        &self,
        other: &Point2D<S2>,
    ) -> Result<Vector2D, Array2dError> {
        let a = self.data.view();
        let b = other.data.view();
        let n = broadcast_len(a.nrows(), b.nrows())?;
        let mut data = Array2::zeros((n, 2));
        for i in 0..n {
            let (ia, ib) = (pick(i, a.nrows()), pick(i, b.nrows()));
            data[[i, 0]] = b[[ib, 0]] - a[[ia, 0]];
            data[[i, 1]] = b[[ib, 1]] - a[[ia, 1]];
        }
        Ok(Vector2D { data })
    }

    /// Aligned per-row Euclidean distances to `other` (equal-or-one rule).
    pub fn euclid_dist<S2: Data<Elem = f64>>(
        &self,
        other: &Point2D<S2>,
    ) -> Result<Array1<f64>, Array2dError> {
        Ok(self.euclid_dist_squared(other)?.mapv(f64::sqrt))
    }

    /// Aligned per-row squared Euclidean distances to `other`.
    pub fn euclid_dist_squared<S2: Data<Elem = f64>>(
        &self,
        other: &Point2D<S2>,
    ) -> Result<Array1<f64>, Array2dError> {
        let a = self.data.view();
        let b = other.data.view();
        let n = broadcast_len(a.nrows(), b.nrows())?;
        Ok(Array1::from_shape_fn(n, |i| {
            let (ia, ib) = (pick(i, a.nrows()), pick(i, b.nrows()));
            let dx = a[[ia, 0]] - b[[ib, 0]];
            let dy = a[[ia, 1]] - b[[ib, 1]];
            dx * dx + dy * dy
        }))
    }

    /// Full N1 x N2 distance matrix: entry (i, j) is the distance from row i
    /// of self to row j of `other`.
    pub fn euclid_dist_pairwise<S2: Data<Elem = f64>>(&self, other: &Point2D<S2>) -> Array2<f64> {
        self.euclid_dist_squared_pairwise(other).mapv(f64::sqrt)
    }

    /// Full N1 x N2 squared distance matrix.
    pub fn euclid_dist_squared_pairwise<S2: Data<Elem = f64>>(
        &self,
        other: &Point2D<S2>,
    ) -> Array2<f64> {
        let a = self.data.view();
        let b = other.data.view();
        Array2::from_shape_fn((a.nrows(), b.nrows()), |(i, j)| {
            let dx = a[[i, 0]] - b[[j, 0]];
            let dy = a[[i, 1]] - b[[j, 1]];
            dx * dx + dy * dy
        })
    }
}

impl<S: Data<Elem = f64>> Array2dOps for Point2D<S> {
    type Owned = Point2D;

    fn as_view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    fn from_data(data: Array2<f64>) -> Point2D {
        debug_assert_eq!(data.ncols(), 2);
        Point2D { data }
    }
}

impl<S: RawData<Elem = f64>> From<Array2D<S>> for Point2D<S> {
    fn from(a: Array2D<S>) -> Self {
        Point2D { data: a.data }
    }
}

impl<S: RawData<Elem = f64>> From<Point2D<S>> for Array2D<S> {
    fn from(p: Point2D<S>) -> Self {
        Array2D { data: p.data }
    }
}

/// Pointwise displacement: `p1 - p2` per row. Panics when the shapes are not
/// broadcastable; the fallible path is [`Point2D::displacement_to`].
impl<'a, 'b, S1, S2> Sub<&'b Point2D<S2>> for &'a Point2D<S1>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    type Output = Vector2D;

    fn sub(self, rhs: &'b Point2D<S2>) -> Vector2D {
        Vector2D {
            data: &self.data - &rhs.data,
        }
    }
}

impl<'a, 'b, S1, S2> Add<&'b Vector2D<S2>> for &'a Point2D<S1>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    type Output = Point2D;

    fn add(self, rhs: &'b Vector2D<S2>) -> Point2D {
        Point2D {
            data: &self.data + &rhs.data,
        }
    }
}

impl<'a, 'b, S1, S2> Sub<&'b Vector2D<S2>> for &'a Point2D<S1>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    type Output = Point2D;

    fn sub(self, rhs: &'b Vector2D<S2>) -> Point2D {
        Point2D {
            data: &self.data - &rhs.data,
        }
    }
}

impl<S, S2> PartialEq<Point2D<S2>> for Point2D<S>
where
    S: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    fn eq(&self, other: &Point2D<S2>) -> bool {
        self.data == other.data
    }
}

impl<S: RawDataClone<Elem = f64>> Clone for Point2D<S> {
    fn clone(&self) -> Self {
        Point2D {
            data: self.data.clone(),
        }
    }
}

impl<S: Data<Elem = f64>> fmt::Debug for Point2D<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point2D({:?})", self.data)
    }
}

impl<S: Data<Elem = f64>> fmt::Display for Point2D<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data)
    }
}
