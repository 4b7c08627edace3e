//! The base Nx2 wrapper: a typed interface over two-column ndarray buffers.

use std::fmt;
use std::ops::{Index, IndexMut};

use ndarray::{
    Array2, ArrayBase, ArrayView2, ArrayViewMut1, ArrayViewMut2, Axis, Data, DataMut, Ix2,
    OwnedRepr, RawData, RawDataClone, ViewRepr,
};

use crate::error::Array2dError;
use crate::ops::Array2dOps;

/// A typed wrapper around a two-dimensional `f64` buffer with exactly two
/// columns.
///
/// The wrapper is generic over ndarray storage: `Array2D` owns its buffer,
/// while [`Array2DView`] and [`Array2DViewMut`] are non-copying views over
/// caller-supplied storage. The two-column invariant is checked once at
/// construction and holds for every derived value.
pub struct Array2D<S = OwnedRepr<f64>>
where
    S: RawData<Elem = f64>,
{
    pub(crate) data: ArrayBase<S, Ix2>,
}

/// Non-copying read view flavor of [`Array2D`].
pub type Array2DView<'a> = Array2D<ViewRepr<&'a f64>>;

/// Non-copying mutable view flavor of [`Array2D`]. Mutations are visible in
/// the viewed buffer.
pub type Array2DViewMut<'a> = Array2D<ViewRepr<&'a mut f64>>;

pub(crate) fn check_two_columns(cols: usize) -> Result<(), Array2dError> {
    if cols == 2 {
        Ok(())
    } else {
        Err(Array2dError::NotTwoColumns { cols })
    }
}

pub(crate) fn flat_to_array(flat: Vec<f64>) -> Result<Array2<f64>, Array2dError> {
    let len = flat.len();
    if len % 2 != 0 {
        return Err(Array2dError::OddLength { len });
    }
    Ok(Array2::from_shape_vec((len / 2, 2), flat).expect("length divisible by 2"))
}

pub(crate) fn columns_to_array(x1: &[f64], x2: &[f64]) -> Result<Array2<f64>, Array2dError> {
    if x1.len() != x2.len() {
        return Err(Array2dError::LengthMismatch {
            left: x1.len(),
            right: x2.len(),
        });
    }
    let mut data = Array2::zeros((x1.len(), 2));
    for (i, (&a, &b)) in x1.iter().zip(x2.iter()).enumerate() {
        data[[i, 0]] = a;
        data[[i, 1]] = b;
    }
    Ok(data)
}

impl Array2D {
    /// Wrap an owned (N, 2) array. Fails unless the trailing dimension is 2.
    pub fn from_array(data: Array2<f64>) -> Result<Self, Array2dError> {
        check_two_columns(data.ncols())?;
        Ok(Array2D { data })
    }

    /// Reshape a flat buffer into (N, 2) rows. Fails on odd length.
    pub fn from_flat(flat: Vec<f64>) -> Result<Self, Array2dError> {
        Ok(Array2D {
            data: flat_to_array(flat)?,
        })
    }

    /// Build from explicit rows.
    pub fn from_rows(rows: &[[f64; 2]]) -> Self {
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        Array2D {
            data: Array2::from_shape_vec((rows.len(), 2), flat).expect("rows are pairs"),
        }
    }

    /// Build from two equal-length columns.
    pub fn from_columns(x1: &[f64], x2: &[f64]) -> Result<Self, Array2dError> {
        Ok(Array2D {
            data: columns_to_array(x1, x2)?,
        })
    }

    /// All-zero wrapper with `rows` rows.
    pub fn zeros(rows: usize) -> Self {
        Array2D {
            data: Array2::zeros((rows, 2)),
        }
    }

    /// View an existing buffer without copying. Fails unless the trailing
    /// dimension is 2. Element values are shared with the viewed buffer.
    pub fn from_view(view: ArrayView2<'_, f64>) -> Result<Array2DView<'_>, Array2dError> {
        check_two_columns(view.ncols())?;
        Ok(Array2D { data: view })
    }

    /// Mutably view an existing buffer without copying. Mutations through the
    /// wrapper are visible in the viewed buffer and vice versa.
    pub fn from_view_mut(
        view: ArrayViewMut2<'_, f64>,
    ) -> Result<Array2DViewMut<'_>, Array2dError> {
        check_two_columns(view.ncols())?;
        Ok(Array2D { data: view })
    }
}

impl<S: Data<Elem = f64>> Array2D<S> {
    /// Re-borrow as a read view wrapper.
    pub fn view(&self) -> Array2DView<'_> {
        Array2D {
            data: self.data.view(),
        }
    }

    /// The underlying ndarray storage.
    pub fn into_inner(self) -> ArrayBase<S, Ix2> {
        self.data
    }
}

impl<S: DataMut<Elem = f64>> Array2D<S> {
    /// Re-borrow as a mutable view wrapper.
    pub fn view_mut(&mut self) -> Array2DViewMut<'_> {
        Array2D {
            data: self.data.view_mut(),
        }
    }

    /// Mutable view of the underlying (N, 2) buffer.
    pub fn as_view_mut(&mut self) -> ArrayViewMut2<'_, f64> {
        self.data.view_mut()
    }

    /// Mutable first-column view.
    pub fn x1_mut(&mut self) -> ArrayViewMut1<'_, f64> {
        self.data.view_mut().index_axis_move(Axis(1), 0)
    }

    /// Mutable second-column view.
    pub fn x2_mut(&mut self) -> ArrayViewMut1<'_, f64> {
        self.data.view_mut().index_axis_move(Axis(1), 1)
    }
}

impl<S: Data<Elem = f64>> Array2dOps for Array2D<S> {
    type Owned = Array2D;

    fn as_view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    fn from_data(data: Array2<f64>) -> Array2D {
        debug_assert_eq!(data.ncols(), 2);
        Array2D { data }
    }
}

impl<S: Data<Elem = f64>> Index<(usize, usize)> for Array2D<S> {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[[row, col]]
    }
}

impl<S: DataMut<Elem = f64>> IndexMut<(usize, usize)> for Array2D<S> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[[row, col]]
    }
}

impl<S, S2> PartialEq<Array2D<S2>> for Array2D<S>
where
    S: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    fn eq(&self, other: &Array2D<S2>) -> bool {
        self.data == other.data
    }
}

impl<S: RawDataClone<Elem = f64>> Clone for Array2D<S> {
    fn clone(&self) -> Self {
        Array2D {
            data: self.data.clone(),
        }
    }
}

impl<S: Data<Elem = f64>> fmt::Debug for Array2D<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Array2D({:?})", self.data)
    }
}

impl<S: Data<Elem = f64>> fmt::Display for Array2D<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data)
    }
}
