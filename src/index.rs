// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`HeapVec`](crate::HeapVec).
//!
//! `Index` and `IndexMut` forward to the live prefix `[0..len)` as a slice:
//! - panics on out-of-bounds, like slices do;
//! - supports every index slices support, including all range forms.
//!
//! Use [`HeapVec::at`](crate::HeapVec::at) for an index check that reports
//! an error instead of panicking.

// Crate imports
use crate::{alloc_api::Allocator, vec::HeapVec};

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, A: Allocator<T>, I: SliceIndex<[T]>> Index<I> for HeapVec<T, A> {
    type Output = I::Output;
    #[inline]
    fn index(&self, i: I) -> &Self::Output {
        &self.as_slice()[i]
    }
}

impl<T, A: Allocator<T>, I: SliceIndex<[T]>> IndexMut<I> for HeapVec<T, A> {
    #[inline]
    fn index_mut(&mut self, i: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}
