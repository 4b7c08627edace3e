//! Numeric kernels shared by the typed wrappers.

mod broadcast;
mod norm;

pub use norm::{norm, norm_squared};

pub(crate) use broadcast::{broadcast_len, pick};
