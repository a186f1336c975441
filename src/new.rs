use arrayvec::{ArrayVec};

use super::{Element, Nested, MultiArray, Error};

/// Implemented by nested collections that can initialize a `C`.
///
/// A scalar initializes itself, or a clone of itself if borrowed. Anything
/// that implements [`IntoIterator`] initializes a [`MultiArray`] if its items
/// initialize the slots; the number of items must equal the number of slots
/// exactly. Native arrays, `Vec`s and slices can therefore be nested freely.
pub trait Initializer<C> {
    /// Construct the `C`, or report the first axis whose length is wrong.
    fn build(self) -> Result<C, Error>;
}

impl<T: Element> Initializer<T> for T {
    #[inline(always)]
    fn build(self) -> Result<T, Error> { Ok(self) }
}

impl<'a, T: Element + Clone> Initializer<T> for &'a T {
    #[inline(always)]
    fn build(self) -> Result<T, Error> { Ok(self.clone()) }
}

impl<C, I, const N: usize> Initializer<MultiArray<C, N>> for I where
    I: IntoIterator,
    I::Item: Initializer<C>,
{
    fn build(self) -> Result<MultiArray<C, N>, Error> {
        let mut buffer = ArrayVec::<C, N>::new();
        for item in self {
            // Stop at the first extra item; `self` may be unbounded.
            if buffer.is_full() {
                return Err(Error::Length { axis: 0, expected: N, found: N + 1 });
            }
            buffer.push(item.build().map_err(Error::deeper)?);
        }
        buffer.into_inner()
            .map(MultiArray::from_array)
            .map_err(|short| Error::Length { axis: 0, expected: N, found: short.len() })
    }
}

// ----------------------------------------------------------------------------

impl<E, const N: usize> MultiArray<E, N> {
    /// Constructs a `MultiArray` from a nested initializer, such as a `Vec` of
    /// `Vec`s, whose lengths must match the extents exactly.
    ///
    /// # Panics
    ///
    /// Panics if any level of `init` has the wrong length. Nothing is ever
    /// truncated or padded.
    ///
    /// ```
    /// use fixed_multi_array::{Array2};
    /// let a = Array2::<i32, 2, 3>::from_nested(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    /// assert_eq!(a[(1, 2)], 6);
    /// ```
    ///
    /// ```should_panic
    /// use fixed_multi_array::{Array2};
    /// let a = Array2::<i32, 2, 3>::from_nested(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
    /// ```
    pub fn from_nested(init: impl Initializer<Self>) -> Self {
        match init.build() {
            Ok(a) => a,
            Err(e) => panic!("Invalid nested initializer: {}", e),
        }
    }

    /// Constructs a `MultiArray` from a nested initializer, or reports the
    /// first axis whose length is wrong.
    ///
    /// ```
    /// use fixed_multi_array::{Array2, Error};
    /// let e = Array2::<i32, 2, 3>::try_from_nested(vec![vec![1, 2, 3], vec![4, 5]]);
    /// assert_eq!(e, Err(Error::Length { axis: 1, expected: 3, found: 2 }));
    /// ```
    pub fn try_from_nested(init: impl Initializer<Self>) -> Result<Self, Error> {
        init.build().map_err(|e| {
            log::debug!("Rejected nested initializer: {}", e);
            e
        })
    }
}

impl<E: Nested, const N: usize> MultiArray<E, N> {
    /// Constructs a `MultiArray` from its scalars in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `items.len()` is not [`Self::total_size()`].
    ///
    /// ```
    /// use fixed_multi_array::{Array2};
    /// let a = Array2::<u8, 2, 3>::from_flat(&[1, 2, 3, 4, 5, 6]);
    /// assert_eq!(a.into_native(), [[1, 2, 3], [4, 5, 6]]);
    /// ```
    pub fn from_flat(items: &[E::Scalar]) -> Self where E::Scalar: Clone {
        match Self::try_from_flat(items) {
            Ok(a) => a,
            Err(e) => panic!("Invalid flat initializer: {}", e),
        }
    }

    /// Constructs a `MultiArray` from its scalars in row-major order, or
    /// reports that `items` has the wrong length.
    pub fn try_from_flat(items: &[E::Scalar]) -> Result<Self, Error> where E::Scalar: Clone {
        let expected = <Self as Nested>::TOTAL;
        if items.len() != expected {
            log::debug!("Rejected flat initializer of length {}, expected {}", items.len(), expected);
            return Err(Error::FlatLength { expected, found: items.len() });
        }
        Ok(<Self as Nested>::from_row_major(items))
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Array1, Array2, Array3};

    #[test]
    fn nested_arrays() {
        let a = Array2::<i32, 2, 3>::from_nested([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(a[(0, 0)], 1);
        assert_eq!(a[(0, 2)], 3);
        assert_eq!(a[(1, 0)], 4);
        assert_eq!(a[(1, 2)], 6);
    }

    #[test]
    fn nested_mixed() {
        let rows: [&[u8]; 2] = [&[1, 2], &[3, 4]];
        let a = Array2::<u8, 2, 2>::from_nested(rows);
        assert_eq!(a.into_native(), [[1, 2], [3, 4]]);
        let b = Array3::<u8, 1, 2, 2>::from_nested(vec![[vec![1, 2], vec![3, 4]]]);
        assert_eq!(b[0], a);
    }

    #[test]
    fn nested_lengths() {
        assert_eq!(
            Array1::<i32, 2>::try_from_nested([1, 2, 3]),
            Err(Error::Length { axis: 0, expected: 2, found: 3 }),
        );
        assert_eq!(
            Array1::<i32, 2>::try_from_nested(vec![1]),
            Err(Error::Length { axis: 0, expected: 2, found: 1 }),
        );
        assert_eq!(
            Array3::<i32, 2, 2, 2>::try_from_nested(vec![vec![vec![1, 2], vec![3, 4]], vec![vec![5, 6], vec![7]]]),
            Err(Error::Length { axis: 2, expected: 2, found: 1 }),
        );
    }

    #[test]
    fn nested_unbounded() {
        assert_eq!(
            Array1::<i32, 2>::try_from_nested(std::iter::repeat(1)),
            Err(Error::Length { axis: 0, expected: 2, found: 3 }),
        );
        assert_eq!(
            Array2::<i32, 2, 3>::try_from_nested(vec![vec![1, 2, 3], vec![4, 5, 6, 7, 8]]),
            Err(Error::Length { axis: 1, expected: 3, found: 4 }),
        );
        assert_eq!(
            Array2::<u8, 1, 2>::try_from_nested(std::iter::repeat(std::iter::repeat(0u8))),
            Err(Error::Length { axis: 1, expected: 2, found: 3 }),
        );
    }

    #[test]
    #[should_panic(expected = "Expected 2 items on axis 0, found 3")]
    fn nested_too_long() {
        let _ = Array2::<i32, 2, 3>::from_nested(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
    }

    #[test]
    fn flat() {
        let a = Array3::<u16, 2, 3, 4>::from_flat(&(0..24).collect::<Vec<_>>());
        assert_eq!(a[(1, 2, 3)], 23);
        assert_eq!(a[(1, 0, 0)], 12);
        assert_eq!(
            Array2::<u16, 2, 3>::try_from_flat(&[1, 2, 3]),
            Err(Error::FlatLength { expected: 6, found: 3 }),
        );
    }
}
