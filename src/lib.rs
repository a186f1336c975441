//! A pure-Rust library providing fixed-size multi-dimensional arrays with the
//! memory layout of native nested arrays.
//!
//! [`MultiArray<E, N>`] is an array of `N` slots of type `E`, stored inline in
//! a `[E; N]`. Each slot is either a scalar, whose type implements
//! [`Element`], or another `MultiArray`. An array of order `k` is therefore
//! an array of arrays of order `k - 1`, bottoming out at order one. The type
//! aliases [`Array1`] to [`Array4`], and the macro [`multi_array_type!`], name
//! these nested types from a list of extents, outermost first.
//!
//! A `MultiArray` offers the same operations as a native array: indexing,
//! iteration, comparison, `swap()`, and so on. Indexing with a `usize` gives
//! a slot, i.e. a sub-array or a scalar. Indexing with a tuple of `usize`s,
//! one per axis, gives a scalar; see [`MultiIndex`]. The methods `at()` and
//! `try_at()` are the checked equivalents, and `get::<I>()`, `get2::<I, J>()`
//! and so on check their indices at compile time.
//!
//! A `MultiArray` can be constructed from a native nested array (see
//! [`to_multi_array()`] and [`multi_array!`]), from a nested initializer whose
//! lengths are checked at run-time (see [`Initializer`]), or from a flat list
//! of its scalars in row-major order. Conversely, [`NativeArray`] deduces the
//! `MultiArray` type for any native nested array type, and
//! [`array_size()`] counts the scalars in a native nested array.
//!
//! ```
//! use fixed_multi_array::{Array3};
//! let mut a: Array3<i32, 2, 3, 4> = Default::default();
//! a[(1, 2, 3)] = 7;
//! assert_eq!(a[1][2][3], 7);
//! assert_eq!(a.iter().count(), 2);
//! assert_eq!(a[0].iter().count(), 3);
//! assert_eq!(a.total_size(), 24);
//! ```

mod error;
pub use error::{Error};

pub mod nested;
pub use nested::{Element, Nested};

mod array;
pub use array::{MultiArray, Array1, Array2, Array3, Array4, swap};

mod index;
pub use index::{MultiIndex};

mod get;

mod new;
pub use new::{Initializer};

mod native;
pub use native::{NativeArray, MultiArrayFor, array_size, to_multi_array};
