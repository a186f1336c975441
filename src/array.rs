use std::fmt::{self, Debug};

use super::{Nested};

/// A fixed-size array of `N` slots of type `E`, stored inline.
///
/// If `E` implements [`Element`], this is an array of order one. Otherwise,
/// `E` is itself a `MultiArray` and the order is one more than the order of
/// `E`. The type aliases [`Array2`], [`Array3`] and [`Array4`] spell out the
/// nesting for you.
///
/// A `MultiArray` has exactly the same memory layout as the corresponding
/// native nested array, e.g. `Array2<T, M, N>` is laid out like `[[T; N]; M]`.
///
/// ```
/// use fixed_multi_array::{Array2, multi_array};
/// let mut a: Array2<i32, 2, 3> = multi_array![[1, 2, 3], [4, 5, 6]];
/// assert_eq!(a[(0, 2)], 3);
/// assert_eq!(a[1], multi_array![4, 5, 6]);
/// a[(1, 0)] = 40;
/// assert_eq!(a.into_native(), [[1, 2, 3], [40, 5, 6]]);
/// ```
///
/// [`Element`]: super::Element
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct MultiArray<E, const N: usize> {
    items: [E; N],
}

/// A `MultiArray` of order one.
pub type Array1<T, const N: usize> = MultiArray<T, N>;

/// A `MultiArray` of order two, laid out like `[[T; N]; M]`.
pub type Array2<T, const M: usize, const N: usize> = MultiArray<Array1<T, N>, M>;

/// A `MultiArray` of order three, laid out like `[[[T; K]; N]; M]`.
pub type Array3<T, const M: usize, const N: usize, const K: usize> = MultiArray<Array2<T, N, K>, M>;

/// A `MultiArray` of order four, laid out like `[[[[T; L]; K]; N]; M]`.
pub type Array4<T, const M: usize, const N: usize, const K: usize, const L: usize> = MultiArray<Array3<T, N, K, L>, M>;

/// Rejects `I >= N` at compile time.
pub(crate) struct InBounds<const I: usize, const N: usize>;

impl<const I: usize, const N: usize> InBounds<I, N> {
    pub(crate) const OK: () = assert!(I < N, "index out of bounds");
}

impl<E, const N: usize> MultiArray<E, N> {
    /// Wraps a native array of slots.
    pub const fn from_array(items: [E; N]) -> Self { Self {items} }

    /// Constructs a `MultiArray` whose slot `i` is `f(i)`.
    ///
    /// ```
    /// use fixed_multi_array::{Array2, MultiArray};
    /// let a: Array2<usize, 2, 3> = MultiArray::from_fn(|i| MultiArray::from_fn(|j| 10 * i + j));
    /// assert_eq!(a.into_native(), [[0, 1, 2], [10, 11, 12]]);
    /// ```
    pub fn from_fn(f: impl FnMut(usize) -> E) -> Self {
        Self::from_array(std::array::from_fn(f))
    }

    /// Returns the native array of slots.
    pub fn into_array(self) -> [E; N] { self.items }

    /// Borrow the native array of slots.
    pub const fn as_array(&self) -> &[E; N] { &self.items }

    /// Mutably borrow the native array of slots.
    pub fn as_array_mut(&mut self) -> &mut [E; N] { &mut self.items }

    /// Borrow the slots as a slice.
    pub const fn as_slice(&self) -> &[E] { &self.items }

    /// Mutably borrow the slots as a slice.
    pub fn as_mut_slice(&mut self) -> &mut [E] { &mut self.items }

    /// The number of slots, i.e. the extent of the outermost axis.
    #[inline(always)]
    pub const fn size(&self) -> usize { N }

    /// Same as [`Self::size()`]; a `MultiArray` never grows.
    #[inline(always)]
    pub const fn max_size(&self) -> usize { N }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool { N == 0 }

    /// Borrow the first slot. Does not compile if `N == 0`.
    ///
    /// ```
    /// use fixed_multi_array::{Array2, multi_array};
    /// let a: Array2<u8, 2, 2> = multi_array![[1, 2], [3, 4]];
    /// assert_eq!(a.front()[1], 2);
    /// ```
    ///
    /// ```compile_fail
    /// use fixed_multi_array::{Array1};
    /// let a = Array1::<u8, 0>::default();
    /// let _ = a.front();
    /// ```
    pub fn front(&self) -> &E {
        let () = InBounds::<0, N>::OK;
        &self.items[0]
    }

    pub fn front_mut(&mut self) -> &mut E {
        let () = InBounds::<0, N>::OK;
        &mut self.items[0]
    }

    /// Borrow the last slot. Does not compile if `N == 0`.
    ///
    /// ```compile_fail
    /// use fixed_multi_array::{Array2};
    /// let a = Array2::<u8, 0, 3>::default();
    /// let _ = a.back();
    /// ```
    pub fn back(&self) -> &E {
        let () = InBounds::<0, N>::OK;
        &self.items[N - 1]
    }

    pub fn back_mut(&mut self) -> &mut E {
        let () = InBounds::<0, N>::OK;
        &mut self.items[N - 1]
    }

    /// Iterates over the slots of the outermost axis.
    ///
    /// ```
    /// use fixed_multi_array::{Array2, multi_array};
    /// let a: Array2<u8, 2, 2> = multi_array![[1, 2], [3, 4]];
    /// let rows: Vec<_> = a.iter().map(|row| row.into_native()).collect();
    /// assert_eq!(rows, [[1, 2], [3, 4]]);
    /// ```
    pub fn iter(&self) -> std::slice::Iter<'_, E> { self.items.iter() }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, E> { self.items.iter_mut() }

    /// Iterates over the slots of the outermost axis, last first.
    pub fn rev_iter(&self) -> std::iter::Rev<std::slice::Iter<'_, E>> { self.items.iter().rev() }

    pub fn rev_iter_mut(&mut self) -> std::iter::Rev<std::slice::IterMut<'_, E>> { self.items.iter_mut().rev() }

    /// Exchanges the contents of `self` and `other`, slot by slot.
    pub fn swap(&mut self, other: &mut Self) {
        self.items.swap_with_slice(&mut other.items);
    }
}

impl<E: Nested, const N: usize> MultiArray<E, N> {
    /// The number of axes.
    #[inline(always)]
    pub const fn order(&self) -> usize { <Self as Nested>::ORDER }

    /// The number of scalars, i.e. the product of the extents of all axes.
    #[inline(always)]
    pub const fn total_size(&self) -> usize { <Self as Nested>::TOTAL }

    /// The extent of `axis`, or `None` if `axis >= self.order()`.
    ///
    /// ```
    /// use fixed_multi_array::{Array3};
    /// let a = Array3::<f32, 2, 3, 4>::default();
    /// let extents: Vec<_> = (0..).map_while(|axis| a.extent(axis)).collect();
    /// assert_eq!(extents, [2, 3, 4]);
    /// ```
    pub fn extent(&self, axis: usize) -> Option<usize> { <Self as Nested>::extent(axis) }

    /// Constructs a `MultiArray` in which every scalar is a clone of `value`.
    pub fn filled(value: E::Scalar) -> Self where E::Scalar: Clone {
        <Self as Nested>::filled(&value)
    }

    /// Overwrites every scalar with a clone of `value`.
    pub fn fill(&mut self, value: E::Scalar) where E::Scalar: Clone {
        Nested::fill(self, &value);
    }
}

/// Exchanges the contents of `a` and `b`, slot by slot.
pub fn swap<E, const N: usize>(a: &mut MultiArray<E, N>, b: &mut MultiArray<E, N>) {
    a.swap(b);
}

impl<E: Default, const N: usize> Default for MultiArray<E, N> {
    fn default() -> Self { Self::from_fn(|_| E::default()) }
}

impl<E: Debug, const N: usize> Debug for MultiArray<E, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<E, const N: usize> From<[E; N]> for MultiArray<E, N> {
    fn from(items: [E; N]) -> Self { Self::from_array(items) }
}

impl<E, const N: usize> std::convert::AsRef<[E]> for MultiArray<E, N> {
    fn as_ref(&self) -> &[E] { &self.items }
}

impl<E, const N: usize> std::convert::AsMut<[E]> for MultiArray<E, N> {
    fn as_mut(&mut self) -> &mut [E] { &mut self.items }
}

impl<E, const N: usize> std::ops::Index<usize> for MultiArray<E, N> {
    type Output = E;
    #[inline(always)]
    fn index(&self, index: usize) -> &E { &self.items[index] }
}

impl<E, const N: usize> std::ops::IndexMut<usize> for MultiArray<E, N> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut E { &mut self.items[index] }
}

impl<E, const N: usize> IntoIterator for MultiArray<E, N> {
    type Item = E;
    type IntoIter = std::array::IntoIter<E, N>;
    fn into_iter(self) -> Self::IntoIter { self.items.into_iter() }
}

impl<'a, E, const N: usize> IntoIterator for &'a MultiArray<E, N> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;
    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}

impl<'a, E, const N: usize> IntoIterator for &'a mut MultiArray<E, N> {
    type Item = &'a mut E;
    type IntoIter = std::slice::IterMut<'a, E>;
    fn into_iter(self) -> Self::IntoIter { self.items.iter_mut() }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{multi_array};

    fn sample() -> Array2<i32, 2, 3> {
        multi_array![[1, 2, 3], [4, 5, 6]]
    }

    #[test]
    fn sizes() {
        let a = sample();
        assert_eq!(a.size(), 2);
        assert_eq!(a.max_size(), 2);
        assert_eq!(a[0].size(), 3);
        assert_eq!(a.order(), 2);
        assert_eq!(a[0].order(), 1);
        assert_eq!(a.total_size(), 6);
        assert!(!a.is_empty());
        assert!(Array2::<i32, 0, 3>::default().is_empty());
    }

    #[test]
    fn default_is_zero() {
        let a = Array3::<u16, 2, 2, 2>::default();
        assert!(a.iter().flatten().flatten().all(|&x| x == 0));
    }

    #[test]
    fn front_back() {
        let mut a = sample();
        assert_eq!(a.front()[0], 1);
        assert_eq!(a.back()[2], 6);
        a.front_mut()[0] = 10;
        a.back_mut()[2] = 60;
        assert_eq!(a.into_native(), [[10, 2, 3], [4, 5, 60]]);
    }

    #[test]
    fn iterate() {
        let a = sample();
        let forward: Vec<i32> = a.iter().map(|row| row[0]).collect();
        assert_eq!(forward, [1, 4]);
        let backward: Vec<i32> = a.rev_iter().map(|row| row[0]).collect();
        assert_eq!(backward, [4, 1]);
        let again: Vec<i32> = (&a).into_iter().map(|row| row[0]).collect();
        assert_eq!(again, forward);
        let owned: Vec<Array1<i32, 3>> = a.into_iter().collect();
        assert_eq!(owned.len(), 2);
    }

    #[test]
    fn iterate_mut() {
        let mut a = sample();
        for row in &mut a {
            for x in row.iter_mut() { *x *= 2; }
        }
        for (row, i) in a.rev_iter_mut().zip(0..) { row[0] = i; }
        assert_eq!(a.into_native(), [[1, 4, 6], [0, 10, 12]]);
    }

    #[test]
    fn fill() {
        let mut a = sample();
        a.fill(9);
        assert_eq!(a, Array2::filled(9));
        assert_eq!(a.into_native(), [[9; 3]; 2]);
    }

    #[test]
    fn swap() {
        let mut a = sample();
        let mut b = Array2::filled(0);
        super::swap(&mut a, &mut b);
        assert_eq!(a, Array2::filled(0));
        assert_eq!(b, sample());
        b.swap(&mut a);
        assert_eq!(a, sample());
    }

    #[test]
    fn compare() {
        let a = sample();
        let mut b = sample();
        assert_eq!(a, b);
        b[(1, 2)] = 7;
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", sample()), "[[1, 2, 3], [4, 5, 6]]");
    }
}
