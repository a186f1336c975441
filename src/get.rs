//! Extraction of slots whose indices are compile-time constants.
//!
//! `a.get::<I>()` is `&a[I]`, `a.get2::<I, J>()` is `&a[I][J]` and so on, but
//! every index is checked against the extent of its axis when the code is
//! compiled, so these methods cannot panic. `getK` is only defined for arrays
//! of order at least `K`. For deeper extraction, chain the calls.
//!
//! ```
//! use fixed_multi_array::{Array3, multi_array};
//! let a: Array3<i32, 2, 2, 3> = multi_array![
//!     [[1, 2, 3], [4, 5, 6]],
//!     [[7, 8, 9], [10, 11, 12]],
//! ];
//! assert_eq!(*a.get3::<1, 0, 2>(), 9);
//! assert_eq!(a.get2::<1, 1>(), &multi_array![10, 11, 12]);
//! assert_eq!(a.get::<0>().get::<1>().get::<0>(), &4);
//! ```
//!
//! ```compile_fail
//! use fixed_multi_array::{Array2};
//! let a = Array2::<i32, 2, 3>::default();
//! let _ = a.get2::<1, 3>();
//! ```

use super::{MultiArray};
use super::array::{InBounds};

impl<E, const N: usize> MultiArray<E, N> {
    /// Borrow slot `I`.
    #[inline(always)]
    pub fn get<const I: usize>(&self) -> &E {
        let () = InBounds::<I, N>::OK;
        &self[I]
    }

    /// Mutably borrow slot `I`.
    #[inline(always)]
    pub fn get_mut<const I: usize>(&mut self) -> &mut E {
        let () = InBounds::<I, N>::OK;
        &mut self[I]
    }
}

impl<E, const M: usize, const N: usize> MultiArray<MultiArray<E, N>, M> {
    /// Borrow slot `J` of slot `I`.
    #[inline(always)]
    pub fn get2<const I: usize, const J: usize>(&self) -> &E {
        self.get::<I>().get::<J>()
    }

    #[inline(always)]
    pub fn get2_mut<const I: usize, const J: usize>(&mut self) -> &mut E {
        self.get_mut::<I>().get_mut::<J>()
    }
}

impl<E, const M: usize, const N: usize, const K: usize> MultiArray<MultiArray<MultiArray<E, K>, N>, M> {
    /// Borrow slot `K1` of slot `J` of slot `I`.
    #[inline(always)]
    pub fn get3<const I: usize, const J: usize, const K1: usize>(&self) -> &E {
        self.get::<I>().get2::<J, K1>()
    }

    #[inline(always)]
    pub fn get3_mut<const I: usize, const J: usize, const K1: usize>(&mut self) -> &mut E {
        self.get_mut::<I>().get2_mut::<J, K1>()
    }
}

impl<E, const M: usize, const N: usize, const K: usize, const L: usize> MultiArray<MultiArray<MultiArray<MultiArray<E, L>, K>, N>, M> {
    /// Borrow slot `L1` of slot `K1` of slot `J` of slot `I`.
    #[inline(always)]
    pub fn get4<const I: usize, const J: usize, const K1: usize, const L1: usize>(&self) -> &E {
        self.get::<I>().get3::<J, K1, L1>()
    }

    #[inline(always)]
    pub fn get4_mut<const I: usize, const J: usize, const K1: usize, const L1: usize>(&mut self) -> &mut E {
        self.get_mut::<I>().get3_mut::<J, K1, L1>()
    }
}

// ----------------------------------------------------------------------------
