//! vectorized2d: user-friendly typed wrappers over Nx2 numeric arrays.
//!
//! This crate layers four semantic wrappers over two-column ndarray buffers:
//! `Array2D` (the raw typed interface), `Vector2D` (physical vectors),
//! `Point2D` (Cartesian locations), and `Coordinate` (geographic lat/lon in
//! radians). The shared per-row surface lives in the `Array2dOps` trait; the
//! hot row kernels (norms) dispatch to SIMD and rayon fast paths for large
//! inputs instead of a general reduction.
//!
//! Wrappers either own their buffer or view caller-supplied storage without
//! copying, so mutations through a mutable view are visible in the source
//! buffer.
pub mod array2d;
pub mod coordinate;
pub mod error;
pub mod math;
pub mod ops;
pub mod point2d;
pub mod units;
pub mod vector2d;

pub use array2d::{Array2D, Array2DView, Array2DViewMut};
pub use coordinate::{Coordinate, CoordinateView, CoordinateViewMut};
pub use error::Array2dError;
pub use ops::Array2dOps;
pub use point2d::{Point2D, Point2DView, Point2DViewMut};
pub use units::AngleUnit;
pub use vector2d::{Vector2D, Vector2DView, Vector2DViewMut};
