//! Type-level structure of nested arrays.
//!
//! A [`MultiArray`] is a native array of slots. Each slot is either another
//! `MultiArray`, or a scalar whose type implements [`Element`]. Both kinds of
//! slot implement [`Nested`], which records at compile time how deeply the
//! slots are nested and how many scalars they contain. The recursion bottoms
//! out at the scalars, so a `MultiArray` always has an order of at least one.
//!
//! If you want to store your own type in a `MultiArray`, implement `Element`
//! for it. You cannot implement `Nested` directly.
//!
//! [`MultiArray`]: super::MultiArray

use super::{MultiArray};

/// Implemented by scalar types that can be stored in a [`MultiArray`].
///
/// A type that implements `Element` will automatically get implementations of
/// [`Nested`] and [`NativeArray`], as will `MultiArray`s and native arrays
/// that contain it.
///
/// ```
/// use fixed_multi_array::{Element, Array2};
/// #[derive(Debug, Default, Copy, Clone, PartialEq)]
/// struct Rgb(u8, u8, u8);
/// impl Element for Rgb {}
/// let image = Array2::<Rgb, 2, 2>::filled(Rgb(255, 0, 0));
/// assert_eq!(image[(1, 1)], Rgb(255, 0, 0));
/// ```
///
/// [`MultiArray`]: super::MultiArray
/// [`NativeArray`]: super::NativeArray
pub trait Element: Sized {}

impl Element for bool {}
impl Element for char {}

impl Element for i8 {}
impl Element for i16 {}
impl Element for i32 {}
impl Element for i64 {}
impl Element for i128 {}
impl Element for isize {}

impl Element for u8 {}
impl Element for u16 {}
impl Element for u32 {}
impl Element for u64 {}
impl Element for u128 {}
impl Element for usize {}

impl Element for f32 {}
impl Element for f64 {}

impl<T: Element> Element for Option<T> {}

// ----------------------------------------------------------------------------

mod private {
    pub trait Sealed {}
}

impl<T: Element> private::Sealed for T {}

impl<E: Nested, const N: usize> private::Sealed for MultiArray<E, N> {}

/// Implemented by [`Element`]s (order `0`) and by [`MultiArray`]s of `Nested`
/// types (order one more than their slots).
///
/// `Self` always has the same memory layout as [`Self::Native`]. The crate
/// relies on this, which is why the trait is sealed.
///
/// ```
/// use fixed_multi_array::{Nested, Array3};
/// type A = Array3<u8, 2, 3, 4>;
/// assert_eq!(<A as Nested>::ORDER, 3);
/// assert_eq!(<A as Nested>::TOTAL, 24);
/// assert_eq!(<u8 as Nested>::ORDER, 0);
/// ```
///
/// [`MultiArray`]: super::MultiArray
pub trait Nested: private::Sealed + Sized {
    /// The number of axes.
    const ORDER: usize;

    /// The number of scalars, i.e. the product of the extents of all axes.
    const TOTAL: usize;

    /// The scalar type.
    type Scalar: Element;

    /// The native nested array type with the same shape as `Self`, e.g.
    /// `[[T; N]; M]` for a `MultiArray<MultiArray<T, N>, M>`.
    type Native;

    /// Returns the extent of `axis`, or `None` if `axis >= ORDER`.
    fn extent(axis: usize) -> Option<usize>;

    /// Converts a native nested array into `Self`.
    fn from_native(native: Self::Native) -> Self;

    /// Converts `Self` into a native nested array.
    fn into_native(self) -> Self::Native;

    /// Constructs a `Self` in which every scalar is a clone of `value`.
    fn filled(value: &Self::Scalar) -> Self where Self::Scalar: Clone;

    /// Overwrite every scalar with a clone of `value`.
    fn fill(&mut self, value: &Self::Scalar) where Self::Scalar: Clone;

    /// Constructs a `Self` from its scalars in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `items.len()` is not `TOTAL`.
    fn from_row_major(items: &[Self::Scalar]) -> Self where Self::Scalar: Clone;
}

impl<T: Element> Nested for T {
    const ORDER: usize = 0;
    const TOTAL: usize = 1;
    type Scalar = T;
    type Native = T;

    fn extent(_: usize) -> Option<usize> { None }

    #[inline(always)]
    fn from_native(native: T) -> Self { native }

    #[inline(always)]
    fn into_native(self) -> T { self }

    fn filled(value: &T) -> Self where Self::Scalar: Clone { value.clone() }

    fn fill(&mut self, value: &T) where Self::Scalar: Clone { self.clone_from(value); }

    fn from_row_major(items: &[T]) -> Self where Self::Scalar: Clone {
        assert_eq!(items.len(), 1, "Expected 1 element, found {}", items.len());
        items[0].clone()
    }
}

impl<E: Nested, const N: usize> Nested for MultiArray<E, N> {
    const ORDER: usize = E::ORDER + 1;
    const TOTAL: usize = E::TOTAL * N;
    type Scalar = E::Scalar;
    type Native = [E::Native; N];

    fn extent(axis: usize) -> Option<usize> {
        if axis == 0 { Some(N) } else { E::extent(axis - 1) }
    }

    fn from_native(native: Self::Native) -> Self {
        MultiArray::from_array(native.map(E::from_native))
    }

    fn into_native(self) -> Self::Native {
        self.into_array().map(E::into_native)
    }

    fn filled(value: &Self::Scalar) -> Self where Self::Scalar: Clone {
        MultiArray::from_fn(|_| E::filled(value))
    }

    fn fill(&mut self, value: &Self::Scalar) where Self::Scalar: Clone {
        for slot in self.iter_mut() { slot.fill(value); }
    }

    fn from_row_major(items: &[Self::Scalar]) -> Self where Self::Scalar: Clone {
        assert_eq!(items.len(), Self::TOTAL, "Expected {} elements, found {}", Self::TOTAL, items.len());
        MultiArray::from_fn(|i| E::from_row_major(&items[i * E::TOTAL..(i + 1) * E::TOTAL]))
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_shape<A: Nested>(order: usize, total: usize, extents: &[usize]) {
        assert_eq!(A::ORDER, order);
        assert_eq!(A::TOTAL, total);
        for (axis, &extent) in extents.iter().enumerate() {
            assert_eq!(A::extent(axis), Some(extent));
        }
        assert_eq!(A::extent(extents.len()), None);
    }

    #[test]
    fn shape() {
        assert_shape::<i32>(0, 1, &[]);
        assert_shape::<MultiArray<i32, 5>>(1, 5, &[5]);
        assert_shape::<MultiArray<MultiArray<i32, 3>, 2>>(2, 6, &[2, 3]);
        assert_shape::<MultiArray<MultiArray<MultiArray<bool, 4>, 3>, 2>>(3, 24, &[2, 3, 4]);
        assert_shape::<MultiArray<MultiArray<u8, 3>, 0>>(2, 0, &[0, 3]);
    }

    #[test]
    fn native() {
        let a = MultiArray::<MultiArray<i32, 3>, 2>::from_native([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(a[1][0], 4);
        assert_eq!(a.into_native(), [[1, 2, 3], [4, 5, 6]]);
    }

    #[test]
    fn row_major() {
        let a = MultiArray::<MultiArray<char, 2>, 3>::from_row_major(&['a', 'b', 'c', 'd', 'e', 'f']);
        assert_eq!(a.into_native(), [['a', 'b'], ['c', 'd'], ['e', 'f']]);
    }

    #[test]
    #[should_panic(expected = "Expected 6 elements, found 9")]
    fn row_major_too_long() {
        let _ = MultiArray::<MultiArray<i32, 3>, 2>::from_row_major(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    #[should_panic(expected = "Expected 1 element, found 0")]
    fn row_major_scalar_empty() {
        let _ = <i32 as Nested>::from_row_major(&[]);
    }

    #[test]
    fn fill() {
        let mut a = <MultiArray<MultiArray<Option<u8>, 2>, 2> as Nested>::filled(&Some(7));
        assert_eq!(a.into_native(), [[Some(7); 2]; 2]);
        Nested::fill(&mut a, &None);
        assert_eq!(a.into_native(), [[None; 2]; 2]);
    }
}
