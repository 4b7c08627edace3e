//! Nx2 wrapper for physical vector quantities.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use ndarray::{
    Array1, Array2, ArrayBase, ArrayView2, ArrayViewMut2, Data, Ix2, OwnedRepr, RawData,
    RawDataClone, ViewRepr,
};

use crate::array2d::Array2D;
use crate::error::Array2dError;
use crate::math::{self, broadcast_len, pick};
use crate::ops::Array2dOps;
use crate::units::{wrap_pi, wrap_two_pi, AngleUnit};

/// Rows interpreted as 2D physical vectors (velocity, displacement, ..).
///
/// Construction is either Cartesian (any of the [`Array2D`] entry points via
/// `From`, or the delegating constructors below) or polar through
/// [`Vector2D::from_polar`].
pub struct Vector2D<S = OwnedRepr<f64>>
where
    S: RawData<Elem = f64>,
{
    pub(crate) data: ArrayBase<S, Ix2>,
}

pub type Vector2DView<'a> = Vector2D<ViewRepr<&'a f64>>;
pub type Vector2DViewMut<'a> = Vector2D<ViewRepr<&'a mut f64>>;

impl Vector2D {
    /// Rows `magnitude * (cos(direction), sin(direction))`.
    ///
    /// `magnitude` and `direction` must have equal lengths, or either may be
    /// length 1 and pairs against every element of the other side.
    ///
    /// # Arguments
    ///
    /// * `magnitude` - magnitude(s) of the vector(s).
    /// * `direction` - direction(s) of the vector(s), measured
    ///   counterclockwise from the first axis.
    /// * `unit` - whether `direction` is given in radians or degrees.
    pub fn from_polar(
        magnitude: &[f64],
        direction: &[f64],
        unit: AngleUnit,
    ) -> Result<Self, Array2dError> {
        let n = broadcast_len(magnitude.len(), direction.len())?;
        let mut data = Array2::zeros((n, 2));
        for i in 0..n {
            let m = magnitude[pick(i, magnitude.len())];
            let d = unit.to_radians(direction[pick(i, direction.len())]);
            data[[i, 0]] = m * d.cos();
            data[[i, 1]] = m * d.sin();
        }
        Ok(Vector2D { data })
    }

    /// Single-row polar construction.
    pub fn polar(magnitude: f64, direction: f64, unit: AngleUnit) -> Self {
        let d = unit.to_radians(direction);
        Vector2D {
            data: Array2::from_shape_vec((1, 2), vec![magnitude * d.cos(), magnitude * d.sin()])
                .expect("one row"),
        }
    }

    pub fn from_array(data: Array2<f64>) -> Result<Self, Array2dError> {
        Array2D::from_array(data).map(Into::into)
    }

    pub fn from_flat(flat: Vec<f64>) -> Result<Self, Array2dError> {
        Array2D::from_flat(flat).map(Into::into)
    }

    pub fn from_view(view: ArrayView2<'_, f64>) -> Result<Vector2DView<'_>, Array2dError> {
        Array2D::from_view(view).map(Into::into)
    }

    pub fn from_view_mut(
        view: ArrayViewMut2<'_, f64>,
    ) -> Result<Vector2DViewMut<'_>, Array2dError> {
        Array2D::from_view_mut(view).map(Into::into)
    }
}

impl<S: Data<Elem = f64>> Vector2D<S> {
    /// Per-row direction in radians, wrapped to [0, 2*pi).
    pub fn direction(&self) -> Array1<f64> {
        let v = self.data.view();
        Array1::from_shape_fn(v.nrows(), |i| wrap_two_pi(v[[i, 1]].atan2(v[[i, 0]])))
    }

    /// Rows rotated counterclockwise by `angles`.
    ///
    /// `angles` pairs against the rows under the equal-or-one rule: a single
    /// angle rotates every row, a single row fans out over every angle.
    pub fn rotated(&self, angles: &[f64], unit: AngleUnit) -> Result<Vector2D, Array2dError> {
        let v = self.data.view();
        let rows = v.nrows();
        let n = broadcast_len(rows, angles.len())?;
        let mut data = Array2::zeros((n, 2));
        for i in 0..n {
            let j = pick(i, rows);
            let (x, y) = (v[[j, 0]], v[[j, 1]]);
            let (sin, cos) = unit.to_radians(angles[pick(i, angles.len())]).sin_cos();
            data[[i, 0]] = x * cos - y * sin;
            data[[i, 1]] = x * sin + y * cos;
        }
        Ok(Vector2D { data })
    }

    /// Signed smallest angle from self to `other`, per row, in [-pi, pi).
    pub fn angle_to<S2: Data<Elem = f64>>(
        &self,
        other: &Vector2D<S2>,
    ) -> Result<Array1<f64>, Array2dError> {
        let from = self.direction();
        let to = other.direction();
        let n = broadcast_len(from.len(), to.len())?;
        Ok(Array1::from_shape_fn(n, |i| {
            wrap_pi(to[pick(i, to.len())] - from[pick(i, from.len())])
        }))
    }

    /// Row-wise projection of self onto `other`.
    ///
    /// `other` pairs against the rows under the equal-or-one rule. Zero-norm
    /// targets produce zero rows.
    pub fn project_onto<S2: Data<Elem = f64>>(
        &self,
        onto: &Vector2D<S2>,
    ) -> Result<Vector2D, Array2dError> {
        let v = self.data.view();
        let o = onto.data.view();
        let n = broadcast_len(v.nrows(), o.nrows())?;
        let onto_norms = math::norm(&o);
        let mut data = Array2::zeros((n, 2));
        for i in 0..n {
            let j = pick(i, o.nrows());
            let norm = onto_norms[j];
            if norm == 0.0 {
                continue;
            }
            let (ux, uy) = (o[[j, 0]] / norm, o[[j, 1]] / norm);
            let k = pick(i, v.nrows());
            let magnitude = v[[k, 0]] * ux + v[[k, 1]] * uy;
            data[[i, 0]] = magnitude * ux;
            data[[i, 1]] = magnitude * uy;
        }
        Ok(Vector2D { data })
    }
}

impl<S: Data<Elem = f64>> Array2dOps for Vector2D<S> {
    type Owned = Vector2D;

    fn as_view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    fn from_data(data: Array2<f64>) -> Vector2D {
        debug_assert_eq!(data.ncols(), 2);
        Vector2D { data }
    }
}

impl<S: RawData<Elem = f64>> From<Array2D<S>> for Vector2D<S> {
    fn from(a: Array2D<S>) -> Self {
        Vector2D { data: a.data }
    }
}

impl<S: RawData<Elem = f64>> From<Vector2D<S>> for Array2D<S> {
    fn from(v: Vector2D<S>) -> Self {
        Array2D { data: v.data }
    }
}

impl<'a, 'b, S1, S2> Add<&'b Vector2D<S2>> for &'a Vector2D<S1>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    type Output = Vector2D;

    fn add(self, rhs: &'b Vector2D<S2>) -> Vector2D {
        Vector2D {
            data: &self.data + &rhs.data,
        }
    }
}

impl<'a, 'b, S1, S2> Sub<&'b Vector2D<S2>> for &'a Vector2D<S1>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    type Output = Vector2D;

    fn sub(self, rhs: &'b Vector2D<S2>) -> Vector2D {
        Vector2D {
            data: &self.data - &rhs.data,
        }
    }
}

impl<'a, S: Data<Elem = f64>> Neg for &'a Vector2D<S> {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D { data: -&self.data }
    }
}

impl<'a, S: Data<Elem = f64>> Mul<f64> for &'a Vector2D<S> {
    type Output = Vector2D;

    fn mul(self, rhs: f64) -> Vector2D {
        Vector2D {
            data: &self.data * rhs,
        }
    }
}

impl<'a, S: Data<Elem = f64>> Div<f64> for &'a Vector2D<S> {
    type Output = Vector2D;

    fn div(self, rhs: f64) -> Vector2D {
        Vector2D {
            data: &self.data / rhs,
        }
    }
}

impl<S, S2> PartialEq<Vector2D<S2>> for Vector2D<S>
where
    S: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    fn eq(&self, other: &Vector2D<S2>) -> bool {
        self.data == other.data
    }
}

impl<S: RawDataClone<Elem = f64>> Clone for Vector2D<S> {
    fn clone(&self) -> Self {
        Vector2D {
            data: self.data.clone(),
        }
    }
}

impl<S: Data<Elem = f64>> fmt::Debug for Vector2D<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2D({:?})", self.data)
    }
}

impl<S: Data<Elem = f64>> fmt::Display for Vector2D<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data)
    }
}
