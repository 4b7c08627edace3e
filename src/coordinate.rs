//! Nx2 wrapper for geographic coordinates.
//!
//! Rows are (latitude, longitude) pairs in radians. Distances and bearings
//! use a flat-earth approximation (arc minutes of latitude/longitude scaled
//! to nautical miles), which is accurate for the short ranges this type is
//! meant for; shifting uses the spherical destination formula.

use std::fmt;

use ndarray::{
    Array1, Array2, ArrayBase, ArrayView1, ArrayView2, ArrayViewMut2, Axis, Data, Ix2, OwnedRepr,
    RawData, RawDataClone, ViewRepr,
};

use crate::array2d::{columns_to_array, Array2D};
use crate::error::Array2dError;
use crate::math::{broadcast_len, pick};
use crate::ops::Array2dOps;
use crate::point2d::Point2D;
use crate::units::{wrap_two_pi, AngleUnit, EARTH_RADIUS_METERS, NM_TO_METERS, TWO_PI};

/// Rows interpreted as (latitude, longitude) pairs in radians.
///
/// Structurally identical to [`Point2D`] but semantically geographic: the
/// distance operations answer in meters and bearings in radians from north,
/// clockwise.
pub struct Coordinate<S = OwnedRepr<f64>>
where
    S: RawData<Elem = f64>,
{
    pub(crate) data: ArrayBase<S, Ix2>,
}

pub type CoordinateView<'a> = Coordinate<ViewRepr<&'a f64>>;
pub type CoordinateViewMut<'a> = Coordinate<ViewRepr<&'a mut f64>>;

fn circle_bearings(number_of_points: usize) -> Vec<f64> {
    (0..number_of_points)
        .map(|k| TWO_PI * k as f64 / number_of_points as f64)
        .collect()
}

impl Coordinate {
    /// Build from equal-length latitude and longitude columns.
    ///
    /// # Arguments
    ///
    /// * `lat` - latitude(s) of the coordinate(s).
    /// * `lon` - longitude(s) of the coordinate(s).
    /// * `unit` - whether the inputs are given in radians or degrees; degree
    ///   inputs are converted to radians.
    pub fn new(lat: &[f64], lon: &[f64], unit: AngleUnit) -> Result<Self, Array2dError> {
        let mut data = columns_to_array(lat, lon)?;
        if unit == AngleUnit::Degrees {
            data.mapv_inplace(f64::to_radians);
        }
        Ok(Coordinate { data })
    }

    /// Single-coordinate convenience constructor.
    pub fn single(lat: f64, lon: f64, unit: AngleUnit) -> Self {
        Coordinate {
            data: Array2::from_shape_vec(
                (1, 2),
                vec![unit.to_radians(lat), unit.to_radians(lon)],
            )
            .expect("one row"),
        }
    }

    /// Wrap an owned (N, 2) array of (latitude, longitude) radians.
    pub fn from_array(data: Array2<f64>) -> Result<Self, Array2dError> {
        Array2D::from_array(data).map(Into::into)
    }

    pub fn from_view(view: ArrayView2<'_, f64>) -> Result<CoordinateView<'_>, Array2dError> {
        Array2D::from_view(view).map(Into::into)
    }

    pub fn from_view_mut(
        view: ArrayViewMut2<'_, f64>,
    ) -> Result<CoordinateViewMut<'_>, Array2dError> {
        Array2D::from_view_mut(view).map(Into::into)
    }
}

impl<S: Data<Elem = f64>> Coordinate<S> {
    /// Latitude values as a non-copying 1-D view.
    pub fn lat(&self) -> ArrayView1<'_, f64> {
        self.data.view().index_axis_move(Axis(1), 0)
    }

    /// Longitude values as a non-copying 1-D view.
    pub fn lon(&self) -> ArrayView1<'_, f64> {
        self.data.view().index_axis_move(Axis(1), 1)
    }

    /// Approximate east/north deltas from self to `other`, in meters.
    ///
    /// One arc minute of latitude is one nautical mile; longitude minutes
    /// shrink with the cosine of the mean latitude. Pairs rows under the
    /// equal-or-one rule (one-to-many and many-to-one work).
    fn delta_east_north<S2: Data<Elem = f64>>(
        &self,
        other: &Coordinate<S2>,
    ) -> Result<(Array1<f64>, Array1<f64>), Array2dError> {
        let a = self.data.view();
        let b = other.data.view();
        let n = broadcast_len(a.nrows(), b.nrows())?;
        let mut east = Array1::zeros(n);
        let mut north = Array1::zeros(n);
        for i in 0..n {
            let (ia, ib) = (pick(i, a.nrows()), pick(i, b.nrows()));
            let (lat1, lon1) = (a[[ia, 0]], a[[ia, 1]]);
            let (lat2, lon2) = (b[[ib, 0]], b[[ib, 1]]);
            let d_north_nm = (lat2 - lat1).to_degrees() * 60.0;
            let d_east_nm = (lon2 - lon1).to_degrees() * 60.0 * ((lat1 + lat2) / 2.0).cos();
            north[i] = d_north_nm * NM_TO_METERS;
            east[i] = d_east_nm * NM_TO_METERS;
        }
        Ok((east, north))
    }

    /// Approximate geographic distance(s) from self to `other`, in meters.
    ///
    /// Pairs rows under the equal-or-one rule.
    pub fn geo_dist<S2: Data<Elem = f64>>(
        &self,
        other: &Coordinate<S2>,
    ) -> Result<Array1<f64>, Array2dError> {
        let (east, north) = self.delta_east_north(other)?;
        Ok(Array1::from_shape_fn(east.len(), |i| {
            (north[i] * north[i] + east[i] * east[i]).sqrt()
        }))
    }

    /// Approximate squared geographic distance(s), in meters squared.
    pub fn geo_dist_squared<S2: Data<Elem = f64>>(
        &self,
        other: &Coordinate<S2>,
    ) -> Result<Array1<f64>, Array2dError> {
        let (east, north) = self.delta_east_north(other)?;
        Ok(Array1::from_shape_fn(east.len(), |i| {
            north[i] * north[i] + east[i] * east[i]
        }))
    }

    /// Approximate bearing(s) from self to `other`, in radians from north,
    /// clockwise, wrapped to [0, 2*pi).
    pub fn bearing<S2: Data<Elem = f64>>(
        &self,
        other: &Coordinate<S2>,
    ) -> Result<Array1<f64>, Array2dError> {
        let (east, north) = self.delta_east_north(other)?;
        Ok(Array1::from_shape_fn(east.len(), |i| {
            wrap_two_pi(east[i].atan2(north[i]))
        }))
    }

    /// Distance(s) and bearing(s) in one pass over the deltas.
    pub fn geo_dist_and_bearing<S2: Data<Elem = f64>>(
        &self,
        other: &Coordinate<S2>,
    ) -> Result<(Array1<f64>, Array1<f64>), Array2dError> {
        let (east, north) = self.delta_east_north(other)?;
        let n = east.len();
        let dist = Array1::from_shape_fn(n, |i| (north[i] * north[i] + east[i] * east[i]).sqrt());
        let bearing = Array1::from_shape_fn(n, |i| wrap_two_pi(east[i].atan2(north[i])));
        Ok((dist, bearing))
    }

    /// Coordinate(s) shifted by the given distance(s) and bearing(s).
    ///
    /// Spherical destination formula. `geo_dist` (meters) and `bearing`
    /// (radians) pair against the rows under the equal-or-one rule, so a
    /// single coordinate fans out over many distance/bearing pairs and a
    /// coordinate set shifts by a single displacement.
    pub fn shifted(&self, geo_dist: &[f64], bearing: &[f64]) -> Result<Coordinate, Array2dError> {
        let v = self.data.view();
        let n = broadcast_len(v.nrows(), broadcast_len(geo_dist.len(), bearing.len())?)?;
        let mut data = Array2::zeros((n, 2));
        for i in 0..n {
            let j = pick(i, v.nrows());
            let (lat, lon) = (v[[j, 0]], v[[j, 1]]);
            let angular = geo_dist[pick(i, geo_dist.len())] / EARTH_RADIUS_METERS;
            let brg = bearing[pick(i, bearing.len())];
            let (sin_ad, cos_ad) = angular.sin_cos();
            let (sin_lat, cos_lat) = lat.sin_cos();

            let sin_shifted_lat = sin_lat * cos_ad + cos_lat * sin_ad * brg.cos();
            let shifted_lat = sin_shifted_lat.asin();
            let shifted_lon = lon
                + (brg.sin() * sin_ad * cos_lat).atan2(cos_ad - sin_lat * sin_shifted_lat);

            data[[i, 0]] = shifted_lat;
            data[[i, 1]] = shifted_lon;
        }
        Ok(Coordinate { data })
    }

    /// Sample `number_of_points` points of the circle of `radius` meters
    /// around a single coordinate, at bearings `2*pi*k / number_of_points`.
    ///
    /// Only defined for a single-row receiver.
    pub fn circle_around(
        &self,
        radius: f64,
        number_of_points: usize,
    ) -> Result<Coordinate, Array2dError> {
        let rows = self.data.nrows();
        if rows != 1 {
            return Err(Array2dError::NotSingleRow { rows });
        }
        self.shifted(&[radius], &circle_bearings(number_of_points))
    }

    /// Sample `number_of_points` points of the ellipse with the given radii
    /// (meters) around a single coordinate, at the circle bearings; the major
    /// axis points along `major_axis_bearing` (radians).
    pub fn ellipse_around(
        &self,
        major_radius: f64,
        minor_radius: f64,
        major_axis_bearing: f64,
        number_of_points: usize,
    ) -> Result<Coordinate, Array2dError> {
        let rows = self.data.nrows();
        if rows != 1 {
            return Err(Array2dError::NotSingleRow { rows });
        }
        let bearings = circle_bearings(number_of_points);
        // polar form of an ellipse centered at the coordinate
        let dists: Vec<f64> = bearings
            .iter()
            .map(|&b| {
                let (sin, cos) = (b - major_axis_bearing).sin_cos();
                major_radius * minor_radius
                    / ((minor_radius * cos).powi(2) + (major_radius * sin).powi(2)).sqrt()
            })
            .collect();
        self.shifted(&dists, &bearings)
    }
}

impl<S: Data<Elem = f64>> Array2dOps for Coordinate<S> {
    type Owned = Coordinate;

    fn as_view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    fn from_data(data: Array2<f64>) -> Coordinate {
        debug_assert_eq!(data.ncols(), 2);
        Coordinate { data }
    }
}

impl<S: RawData<Elem = f64>> From<Array2D<S>> for Coordinate<S> {
    fn from(a: Array2D<S>) -> Self {
        Coordinate { data: a.data }
    }
}

impl<S: RawData<Elem = f64>> From<Coordinate<S>> for Array2D<S> {
    fn from(c: Coordinate<S>) -> Self {
        Array2D { data: c.data }
    }
}

impl<S: RawData<Elem = f64>> From<Coordinate<S>> for Point2D<S> {
    fn from(c: Coordinate<S>) -> Self {
        Point2D { data: c.data }
    }
}

impl<S, S2> PartialEq<Coordinate<S2>> for Coordinate<S>
where
    S: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    fn eq(&self, other: &Coordinate<S2>) -> bool {
        self.data == other.data
    }
}

impl<S: RawDataClone<Elem = f64>> Clone for Coordinate<S> {
    fn clone(&self) -> Self {
        Coordinate {
            data: self.data.clone(),
        }
    }
}

impl<S: Data<Elem = f64>> fmt::Debug for Coordinate<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({:?})", self.data)
    }
}

impl<S: Data<Elem = f64>> fmt::Display for Coordinate<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data)
    }
}
