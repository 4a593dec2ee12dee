// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{alloc_api::Allocator, error::Error, vec::HeapVec};

impl<T, A: Allocator<T>> HeapVec<T, A> {
    /// Shrinks to `count` elements, destroying the tail from the back.
    ///
    /// Returns [`Error::InvalidArgument`] if `count > len()`. Capacity is
    /// untouched.
    #[inline]
    pub fn resize_shrink(&mut self, count: usize) -> Result<(), Error> {
        if count > self.len {
            return Err(Error::InvalidArgument);
        }
        self.destroy_tail(count);
        Ok(())
    }

    /// Resizes to `count` elements, filling new slots with clones of `value`.
    ///
    /// - `count <= len()` behaves like [`resize_shrink`](HeapVec::resize_shrink).
    /// - Otherwise, if the capacity is short, it is raised to exactly `count`
    ///   before `[len, count)` is filled.
    ///
    /// All new elements are built before the vector changes, so a failed
    /// allocation or a panicking clone leaves contents and capacity untouched.
    pub fn resize(&mut self, count: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if count <= self.len {
            return self.resize_shrink(count);
        }
        self.append_with(count - self.len, count, |_| value.clone())
    }
}
