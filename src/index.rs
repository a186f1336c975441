use super::{Element, MultiArray, Error};

/// Implemented by index types that pick out a single scalar of an `A`.
///
/// A multi-index is a tuple of `usize`s whose length equals the order of the
/// [`MultiArray`]; the first `usize` selects a slot of the outermost axis,
/// the rest are applied to that slot. Tuples of any other length do not
/// implement `MultiIndex<A>`, so using one is a compile-time error. For
/// arrays of order one, a bare `usize` is also a multi-index.
///
/// Multi-indices are used by `MultiArray`'s [`std::ops::Index`] impls and by
/// [`MultiArray::at()`].
///
/// ```compile_fail
/// use fixed_multi_array::{Array3};
/// let a = Array3::<i32, 2, 3, 4>::default();
/// let _ = a[(0, 1)];
/// ```
pub trait MultiIndex<A> {
    /// The scalar type.
    type Output;

    /// Borrow the scalar at `self`. Panics if any index is out of bounds.
    fn resolve(self, array: &A) -> &Self::Output;

    /// Mutably borrow the scalar at `self`. Panics if any index is out of
    /// bounds.
    fn resolve_mut(self, array: &mut A) -> &mut Self::Output;

    /// Borrow the scalar at `self`, checking each index against the extent
    /// of its axis.
    fn try_resolve(self, array: &A) -> Result<&Self::Output, Error>;

    /// Mutably borrow the scalar at `self`, checking each index against the
    /// extent of its axis.
    fn try_resolve_mut(self, array: &mut A) -> Result<&mut Self::Output, Error>;
}

impl<T: Element, const N: usize> MultiIndex<MultiArray<T, N>> for usize {
    type Output = T;

    #[inline(always)]
    fn resolve(self, array: &MultiArray<T, N>) -> &T { &array[self] }

    #[inline(always)]
    fn resolve_mut(self, array: &mut MultiArray<T, N>) -> &mut T { &mut array[self] }

    fn try_resolve(self, array: &MultiArray<T, N>) -> Result<&T, Error> {
        array.as_slice().get(self).ok_or(Error::OutOfBounds { axis: 0, index: self, size: N })
    }

    fn try_resolve_mut(self, array: &mut MultiArray<T, N>) -> Result<&mut T, Error> {
        array.as_mut_slice().get_mut(self).ok_or(Error::OutOfBounds { axis: 0, index: self, size: N })
    }
}

impl<T: Element, const N: usize> MultiIndex<MultiArray<T, N>> for (usize,) {
    type Output = T;

    #[inline(always)]
    fn resolve(self, array: &MultiArray<T, N>) -> &T { self.0.resolve(array) }

    #[inline(always)]
    fn resolve_mut(self, array: &mut MultiArray<T, N>) -> &mut T { self.0.resolve_mut(array) }

    fn try_resolve(self, array: &MultiArray<T, N>) -> Result<&T, Error> { self.0.try_resolve(array) }

    fn try_resolve_mut(self, array: &mut MultiArray<T, N>) -> Result<&mut T, Error> { self.0.try_resolve_mut(array) }
}

macro_rules! usize_for {
    ($j:ident) => { usize };
}

/// Implements `MultiIndex` for `(usize, ...)` in terms of its tail.
macro_rules! impl_multi_index {
    ($($j:ident),+) => {
        impl<E, const N: usize> MultiIndex<MultiArray<E, N>> for (usize, $(usize_for!($j),)+) where
            ($(usize_for!($j),)+): MultiIndex<E>,
        {
            type Output = <($(usize_for!($j),)+) as MultiIndex<E>>::Output;

            #[inline(always)]
            fn resolve(self, array: &MultiArray<E, N>) -> &Self::Output {
                let (i, $($j,)+) = self;
                ($($j,)+).resolve(&array[i])
            }

            #[inline(always)]
            fn resolve_mut(self, array: &mut MultiArray<E, N>) -> &mut Self::Output {
                let (i, $($j,)+) = self;
                ($($j,)+).resolve_mut(&mut array[i])
            }

            fn try_resolve(self, array: &MultiArray<E, N>) -> Result<&Self::Output, Error> {
                let (i, $($j,)+) = self;
                let slot = array.as_slice().get(i).ok_or(Error::OutOfBounds { axis: 0, index: i, size: N })?;
                ($($j,)+).try_resolve(slot).map_err(Error::deeper)
            }

            fn try_resolve_mut(self, array: &mut MultiArray<E, N>) -> Result<&mut Self::Output, Error> {
                let (i, $($j,)+) = self;
                let slot = array.as_mut_slice().get_mut(i).ok_or(Error::OutOfBounds { axis: 0, index: i, size: N })?;
                ($($j,)+).try_resolve_mut(slot).map_err(Error::deeper)
            }
        }

        impl<E, const N: usize> std::ops::Index<(usize, $(usize_for!($j),)+)> for MultiArray<E, N> where
            (usize, $(usize_for!($j),)+): MultiIndex<Self>,
        {
            type Output = <(usize, $(usize_for!($j),)+) as MultiIndex<Self>>::Output;
            #[inline(always)]
            fn index(&self, index: (usize, $(usize_for!($j),)+)) -> &Self::Output { index.resolve(self) }
        }

        impl<E, const N: usize> std::ops::IndexMut<(usize, $(usize_for!($j),)+)> for MultiArray<E, N> where
            (usize, $(usize_for!($j),)+): MultiIndex<Self>,
        {
            #[inline(always)]
            fn index_mut(&mut self, index: (usize, $(usize_for!($j),)+)) -> &mut Self::Output { index.resolve_mut(self) }
        }
    };
}

impl_multi_index!(j);
impl_multi_index!(j, k);
impl_multi_index!(j, k, l);
impl_multi_index!(j, k, l, m);
impl_multi_index!(j, k, l, m, n);

impl<T: Element, const N: usize> std::ops::Index<(usize,)> for MultiArray<T, N> {
    type Output = T;
    #[inline(always)]
    fn index(&self, index: (usize,)) -> &T { index.resolve(self) }
}

impl<T: Element, const N: usize> std::ops::IndexMut<(usize,)> for MultiArray<T, N> {
    #[inline(always)]
    fn index_mut(&mut self, index: (usize,)) -> &mut T { index.resolve_mut(self) }
}

// ----------------------------------------------------------------------------

impl<E, const N: usize> MultiArray<E, N> {
    /// Borrow the scalar at `index`, which must be a full [`MultiIndex`].
    ///
    /// Each index is checked against the extent of its own axis, outermost
    /// first.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    ///
    /// ```
    /// use fixed_multi_array::{Array3};
    /// let mut a = Array3::<i32, 2, 3, 4>::default();
    /// *a.at_mut((1, 2, 3)) = 7;
    /// assert_eq!(*a.at((1, 2, 3)), 7);
    /// ```
    pub fn at<I: MultiIndex<Self>>(&self, index: I) -> &I::Output {
        match index.try_resolve(self) {
            Ok(t) => t,
            Err(e) => panic!("{}", e),
        }
    }

    /// Mutably borrow the scalar at `index`. See [`Self::at()`].
    pub fn at_mut<I: MultiIndex<Self>>(&mut self, index: I) -> &mut I::Output {
        match index.try_resolve_mut(self) {
            Ok(t) => t,
            Err(e) => panic!("{}", e),
        }
    }

    /// Borrow the scalar at `index`, or report which index is out of bounds.
    ///
    /// ```
    /// use fixed_multi_array::{Array2, Error};
    /// let a = Array2::<i32, 2, 3>::default();
    /// assert_eq!(a.try_at((1, 2)), Ok(&0));
    /// assert_eq!(a.try_at((1, 3)), Err(Error::OutOfBounds { axis: 1, index: 3, size: 3 }));
    /// ```
    pub fn try_at<I: MultiIndex<Self>>(&self, index: I) -> Result<&I::Output, Error> {
        index.try_resolve(self)
    }

    /// Mutably borrow the scalar at `index`, or report which index is out of
    /// bounds.
    pub fn try_at_mut<I: MultiIndex<Self>>(&mut self, index: I) -> Result<&mut I::Output, Error> {
        index.try_resolve_mut(self)
    }
}

// ----------------------------------------------------------------------------
