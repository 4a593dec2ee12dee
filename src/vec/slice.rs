// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{alloc_api::Allocator, vec::HeapVec};

impl<T, A: Allocator<T>> HeapVec<T, A> {
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, slots `[0, len)` hold live elements and `ptr` is
        // non-null and aligned (dangling only when `len == 0`).
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: As in `as_slice`; `&mut self` gives exclusive access to the
        // live elements.
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Returns a raw pointer to the start of the block.
    ///
    /// Only the first `len` slots hold live elements. Code that dereferences
    /// this pointer must not read `ptr.add(i)` for any `i >= len`. The pointer
    /// is dangling while `capacity() == 0`, and is invalidated by any
    /// operation that reallocates.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns a mutable raw pointer to the start of the block.
    ///
    /// Writing into `[len, capacity)` is allowed from Rust's point of view, but
    /// it does **not** update `len`, so such writes are not part of the
    /// vector's contents and are never dropped.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }
}
