use thiserror::Error;

/// Returned by the checked operations of [`MultiArray`] that can fail at
/// run-time.
///
/// Axes are numbered from the outermost, starting at `0`.
///
/// [`MultiArray`]: super::MultiArray
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// An index was not less than the extent of its axis.
    #[error("Index {index} is out of bounds for size {size} on axis {axis}")]
    OutOfBounds { axis: usize, index: usize, size: usize },

    /// A nested initializer had the wrong number of items at some level.
    /// If there were too many, `found` is `expected + 1`: reading stops at
    /// the first extra item.
    #[error("Expected {expected} items on axis {axis}, found {found}")]
    Length { axis: usize, expected: usize, found: usize },

    /// A flat initializer did not have exactly one item per element.
    #[error("Expected {expected} elements, found {found}")]
    FlatLength { expected: usize, found: usize },
}

impl Error {
    /// Renumber the axis of an error reported by a sub-array.
    pub(crate) fn deeper(self) -> Self {
        match self {
            Error::OutOfBounds { axis, index, size } => Error::OutOfBounds { axis: axis + 1, index, size },
            Error::Length { axis, expected, found } => Error::Length { axis: axis + 1, expected, found },
            other => other,
        }
    }
}

// ----------------------------------------------------------------------------
