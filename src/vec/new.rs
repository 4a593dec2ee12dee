// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    alloc_api::{Allocator, Global},
    error::Error,
    vec::HeapVec,
};

use super::lifecycle::{clone_block, fill_block};

impl<T> HeapVec<T, Global> {
    /// Constructs an empty vector. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self::empty_in(Global)
    }

    /// Constructs a vector holding `count` clones of `elem`.
    ///
    /// Allocates exactly `count` slots, so `capacity() == len() == count`.
    /// `count == 0` allocates nothing.
    #[inline]
    pub fn from_elem(elem: T, count: usize) -> Result<Self, Error>
    where
        T: Clone,
    {
        Self::from_elem_in(elem, count, Global)
    }

    /// Tries to construct from an iterator, growing as `push` does.
    ///
    /// Stops at the first allocation failure and returns it; elements collected
    /// so far are dropped.
    #[inline]
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        Self::try_from_iter_in(iter, Global)
    }
}

impl<T, A: Allocator<T>> HeapVec<T, A> {
    /// Constructs an empty vector that will draw its storage from `alloc`.
    #[inline]
    pub const fn new_in(alloc: A) -> Self {
        Self::empty_in(alloc)
    }

    /// [`from_elem`](HeapVec::from_elem) with an explicit allocator.
    pub fn from_elem_in(elem: T, count: usize, alloc: A) -> Result<Self, Error>
    where
        T: Clone,
    {
        let block = fill_block(&alloc, count, &elem)?;
        // SAFETY: `fill_block` returned a block of `count` slots, all live.
        Ok(unsafe { Self::from_raw_parts_in(block, count, count, alloc) })
    }

    /// Constructs a vector holding clones of `src`, with exactly `src.len()`
    /// slots allocated.
    pub fn from_slice_in(src: &[T], alloc: A) -> Result<Self, Error>
    where
        T: Clone,
    {
        let block = clone_block(&alloc, src)?;
        // SAFETY: `clone_block` returned a block of `src.len()` slots, all live.
        Ok(unsafe { Self::from_raw_parts_in(block, src.len(), src.len(), alloc) })
    }

    /// [`try_from_iter`](HeapVec::try_from_iter) with an explicit allocator.
    pub fn try_from_iter_in<I: IntoIterator<Item = T>>(iter: I, alloc: A) -> Result<Self, Error> {
        let mut v = Self::new_in(alloc);
        v.try_extend_from_iter(iter)?;
        Ok(v)
    }

    /// Clones the contents into a new vector with a clone of the allocator.
    ///
    /// The copy is exactly sized: `capacity() == len()`.
    #[inline]
    pub fn try_clone(&self) -> Result<Self, Error>
    where
        T: Clone,
        A: Clone,
    {
        Self::from_slice_in(self.as_slice(), self.alloc.clone())
    }
}

impl<T, A: Allocator<T> + Default> Default for HeapVec<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T: Clone, A: Allocator<T> + Clone> Clone for HeapVec<T, A> {
    /// # Panics
    ///
    /// Panics if the allocator cannot supply the copy's block.
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|e| e.panic())
    }

    /// Copy assignment: builds a fresh copy of `source` first, then releases
    /// the old storage of `self`.
    ///
    /// If building the copy fails (or a clone panics), `self` is untouched.
    fn clone_from(&mut self, source: &Self) {
        let fresh = source.clone();
        *self = fresh;
    }
}

impl<T: Clone, A: Allocator<T> + Default> TryFrom<&[T]> for HeapVec<T, A> {
    type Error = Error;
    fn try_from(src: &[T]) -> Result<Self, Error> {
        Self::from_slice_in(src, A::default())
    }
}

impl<T, A: Allocator<T> + Default, const N: usize> TryFrom<[T; N]> for HeapVec<T, A> {
    type Error = Error;
    fn try_from(src: [T; N]) -> Result<Self, Error> {
        let mut v = Self::new_in(A::default());
        v.reserve(N)?;
        for item in src {
            // Cannot grow: `N` slots were reserved above.
            v.push(item)?;
        }
        Ok(v)
    }
}

impl<T, A: Allocator<T> + Default> FromIterator<T> for HeapVec<T, A> {
    /// # Panics
    ///
    /// Panics if the allocator cannot supply a block.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::try_from_iter_in(iter, A::default()).unwrap_or_else(|e| e.panic())
    }
}
