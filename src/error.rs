use std::error::Error;
use std::fmt;

/// Error type for shape and pairing violations on Nx2 arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Array2dError {
    /// The trailing dimension of the input buffer is not 2.
    NotTwoColumns { cols: usize },
    /// A flat buffer cannot be reshaped to (N, 2).
    OddLength { len: usize },
    /// Row counts of a pairwise operation are neither equal nor broadcastable.
    LengthMismatch { left: usize, right: usize },
    /// The operation is only defined for a single-row receiver.
    NotSingleRow { rows: usize },
}

impl fmt::Display for Array2dError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Array2dError::NotTwoColumns { cols } => {
                write!(f, "Expected a buffer with 2 columns, got {}", cols)
            }
            Array2dError::OddLength { len } => {
                write!(f, "Flat buffer of length {} cannot be reshaped to (N, 2)", len)
            }
            Array2dError::LengthMismatch { left, right } => {
                write!(
                    f,
                    "Row counts {} and {} are neither equal nor broadcastable (one must be 1)",
                    left, right
                )
            }
            Array2dError::NotSingleRow { rows } => {
                write!(f, "Operation requires a single-row array, got {} rows", rows)
            }
        }
    }
}

impl Error for Array2dError {}
