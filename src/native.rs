//! Conversions between [`MultiArray`]s and native nested arrays.
//!
//! A `MultiArray` has the same memory layout as the native nested array with
//! the same element type and extents: row-major and contiguous. The
//! functions in this module exploit that.

use super::{Element, Nested, MultiArray};

/// Implemented by native nested arrays such as `[[[T; K]; N]; M]`, and by
/// [`Element`]s, which behave like native arrays of order zero.
///
/// ```
/// use fixed_multi_array::{NativeArray, Array3};
/// type A = [[[i32; 4]; 3]; 2];
/// assert_eq!(<A as NativeArray>::RANK, 3);
/// assert_eq!(<A as NativeArray>::SIZE, 24);
/// let _: <A as NativeArray>::Container = Array3::<i32, 2, 3, 4>::default();
/// ```
pub trait NativeArray: Sized {
    /// The number of axes.
    const RANK: usize;

    /// The total number of scalars.
    const SIZE: usize;

    /// The scalar type, with all array dimensions removed.
    type Scalar: Element;

    /// The [`MultiArray`] with the same element type and extents as `Self`.
    /// For an `Element`, this is just `Self`.
    type Container: Nested<Native=Self, Scalar=Self::Scalar>;
}

impl<T: Element> NativeArray for T {
    const RANK: usize = 0;
    const SIZE: usize = 1;
    type Scalar = T;
    type Container = T;
}

impl<A: NativeArray, const N: usize> NativeArray for [A; N] {
    const RANK: usize = A::RANK + 1;
    const SIZE: usize = A::SIZE * N;
    type Scalar = A::Scalar;
    type Container = MultiArray<A::Container, N>;
}

/// The [`MultiArray`] type deduced from a native nested array type.
///
/// ```
/// use fixed_multi_array::{MultiArrayFor, Array2};
/// let _: MultiArrayFor<[[u8; 3]; 2]> = Array2::<u8, 2, 3>::default();
/// ```
pub type MultiArrayFor<A> = <A as NativeArray>::Container;

/// Returns the number of scalars in a native nested array of any rank, i.e.
/// the product of its extents. Returns `1` for an [`Element`].
///
/// ```
/// use fixed_multi_array::{array_size};
/// assert_eq!(array_size(&[[[0i32; 4]; 3]; 2]), 24);
/// assert_eq!(array_size(&[0i32; 5]), 5);
/// assert_eq!(array_size(&7i32), 1);
/// ```
pub const fn array_size<A: NativeArray>(_: &A) -> usize { A::SIZE }

/// Constructs a [`MultiArray`] from a native nested array, copying its
/// scalars in row-major order.
///
/// ```
/// use fixed_multi_array::{to_multi_array, Array2};
/// let a: Array2<i32, 2, 3> = to_multi_array([[1, 2, 3], [4, 5, 6]]);
/// assert_eq!(a[(1, 0)], 4);
/// ```
pub fn to_multi_array<A: NativeArray, const N: usize>(native: [A; N]) -> MultiArray<A::Container, N> {
    MultiArray::from_native(native)
}

// ----------------------------------------------------------------------------

impl<E: Nested, const N: usize> MultiArray<E, N> {
    /// Constructs a `MultiArray` from a native nested array of the same shape.
    #[inline(always)]
    pub fn from_native(native: [E::Native; N]) -> Self { <Self as Nested>::from_native(native) }

    /// Converts `self` into a native nested array of the same shape.
    #[inline(always)]
    pub fn into_native(self) -> [E::Native; N] { <Self as Nested>::into_native(self) }

    /// Reinterpret `self` as a native nested array of the same shape.
    pub fn as_native(&self) -> &[E::Native; N] {
        // SAFETY: `Nested` is sealed and every implementation has the layout
        // of its `Native` type.
        unsafe { &*(self as *const Self as *const [E::Native; N]) }
    }

    /// Reinterpret `self` as a mutable native nested array of the same shape.
    pub fn as_native_mut(&mut self) -> &mut [E::Native; N] {
        // SAFETY: As for `as_native()`.
        unsafe { &mut *(self as *mut Self as *mut [E::Native; N]) }
    }

    /// Borrow all the scalars in row-major order.
    ///
    /// ```
    /// use fixed_multi_array::{Array2, multi_array};
    /// let a: Array2<i32, 2, 3> = multi_array![[1, 2, 3], [4, 5, 6]];
    /// assert_eq!(a.as_flat(), [1, 2, 3, 4, 5, 6]);
    /// assert_eq!(a[1].as_flat(), [4, 5, 6]);
    /// ```
    pub fn as_flat(&self) -> &[E::Scalar] {
        // SAFETY: Every level of nesting is `repr(transparent)` over a native
        // array, so `self` holds exactly `TOTAL` contiguous scalars.
        unsafe { std::slice::from_raw_parts(self.as_ptr(), <Self as Nested>::TOTAL) }
    }

    /// Mutably borrow all the scalars in row-major order.
    pub fn as_flat_mut(&mut self) -> &mut [E::Scalar] {
        // SAFETY: As for `as_flat()`.
        unsafe { std::slice::from_raw_parts_mut(self.as_mut_ptr(), <Self as Nested>::TOTAL) }
    }

    /// Returns a pointer to the first scalar.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const E::Scalar { self as *const Self as *const E::Scalar }

    /// Returns a mutable pointer to the first scalar.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut E::Scalar { self as *mut Self as *mut E::Scalar }
}

/// Names the native nested array type with element type `T` and the given
/// extents, outermost first.
///
/// ```
/// use fixed_multi_array::{native_array_type};
/// let a: native_array_type!(u8; 2, 3) = [[0; 3]; 2];
/// let b: [[u8; 3]; 2] = a;
/// # let _ = b;
/// ```
#[macro_export]
macro_rules! native_array_type {
    ($t:ty; $m:expr, $($n:expr),+ $(,)?) => { [$crate::native_array_type!($t; $($n),+); $m] };
    ($t:ty; $n:expr $(,)?) => { [$t; $n] };
}

/// Names the [`MultiArray`] type with element type `T` and the given extents,
/// outermost first.
///
/// ```
/// use fixed_multi_array::{multi_array_type, Array3};
/// let a: multi_array_type!(u8; 2, 3, 4) = Array3::<u8, 2, 3, 4>::default();
/// assert_eq!(a.order(), 3);
/// ```
#[macro_export]
macro_rules! multi_array_type {
    ($t:ty; $m:expr, $($n:expr),+ $(,)?) => { $crate::MultiArray<$crate::multi_array_type!($t; $($n),+), { $m }> };
    ($t:ty; $n:expr $(,)?) => { $crate::MultiArray<$t, { $n }> };
}

/// Constructs a [`MultiArray`] from a native array expression, deducing its
/// type. Lengths are checked at compile time.
///
/// ```
/// use fixed_multi_array::{multi_array};
/// let a = multi_array![[1u8, 2, 3], [4, 5, 6]];
/// assert_eq!(a.order(), 2);
/// assert_eq!(a[(1, 2)], 6);
/// let b = multi_array![[0.5f32; 4]; 3];
/// assert_eq!(b.total_size(), 12);
/// ```
#[macro_export]
macro_rules! multi_array {
    ($($tokens:tt)*) => { $crate::to_multi_array([$($tokens)*]) };
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Array1, Array2, Array3, Array4};

    #[test]
    fn sizes() {
        assert_eq!(array_size(&[[[0i32; 4]; 3]; 2]), 24);
        assert_eq!(array_size(&[0i32; 5]), 5);
        assert_eq!(array_size(&'x'), 1);
        assert_eq!(<[[bool; 0]; 3] as NativeArray>::SIZE, 0);
        assert_eq!(<[[bool; 0]; 3] as NativeArray>::RANK, 2);
    }

    #[test]
    fn deduce() {
        let a: Array1<i8, 4> = to_multi_array([1, 2, 3, 4]);
        let b: Array4<i8, 1, 1, 1, 4> = to_multi_array([[[[1, 2, 3, 4]]]]);
        assert_eq!(b[0][0][0], a);
        let c: multi_array_type!(i8; 1, 1, 1, 4) = b;
        assert_eq!(c, b);
    }

    #[test]
    fn layout() {
        let native = [[[1u32, 2], [3, 4], [5, 6]], [[7, 8], [9, 10], [11, 12]]];
        let mut a: Array3<u32, 2, 3, 2> = to_multi_array(native);
        assert_eq!(std::mem::size_of_val(&a), std::mem::size_of_val(&native));
        assert_eq!(a.as_native(), &native);
        assert_eq!(a.as_flat(), (1..=12).collect::<Vec<_>>());
        a.as_flat_mut()[7] = 80;
        assert_eq!(a[(1, 0, 1)], 80);
        a.as_native_mut()[0][0][0] = 10;
        assert_eq!(a[(0, 0, 0)], 10);
        assert_eq!(a.as_ptr(), a.as_flat().as_ptr());
        assert!(std::ptr::eq(a[1].as_ptr(), &a[(1, 0, 0)]));
    }

    #[test]
    fn round_trip() {
        let native: native_array_type!(char; 2, 2) = [['a', 'b'], ['c', 'd']];
        let a: Array2<char, 2, 2> = multi_array![['a', 'b'], ['c', 'd']];
        assert_eq!(a.into_native(), native);
        assert_eq!(Array2::from_native(native), a);
    }
}
