//! Equal-or-one row pairing used by the aligned binary operations.

use crate::error::Array2dError;

/// Resolve the output row count of an aligned binary operation.
///
/// Row counts are broadcastable when they are equal or when either side is 1
/// (a single row pairs against every row of the other side).
pub(crate) fn broadcast_len(left: usize, right: usize) -> Result<usize, Array2dError> {
    if left == right {
        Ok(left)
    } else if left == 1 {
        Ok(right)
    } else if right == 1 {
        Ok(left)
    } else {
        Err(Array2dError::LengthMismatch { left, right })
    }
}

/// Index into a possibly-broadcast side: a length-1 side always yields row 0.
#[inline]
pub(crate) fn pick(i: usize, len: usize) -> usize {
    if len == 1 {
        0
    } else {
        i
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_lengths() {
        assert_eq!(broadcast_len(4, 4).unwrap(), 4);
    }

    #[test]
    fn one_broadcasts() {
        assert_eq!(broadcast_len(1, 7).unwrap(), 7);
        assert_eq!(broadcast_len(7, 1).unwrap(), 7);
        assert_eq!(broadcast_len(1, 0).unwrap(), 0);
    }

    #[test]
    fn mismatch_errors() {
        assert_eq!(
            broadcast_len(3, 5),
            Err(Array2dError::LengthMismatch { left: 3, right: 5 })
        );
    }

    #[test]
    fn pick_broadcast_side() {
        assert_eq!(pick(5, 1), 0);
        assert_eq!(pick(5, 9), 5);
    }
}
