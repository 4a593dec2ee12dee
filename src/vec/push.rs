// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{alloc_api::Allocator, error::Error, vec::HeapVec};

impl<T, A: Allocator<T>> HeapVec<T, A> {
    /// Appends `value`, doubling the capacity first if the vector is full.
    ///
    /// Amortized `O(1)`; a growth step is `O(len)`. Returns
    /// [`Error::AllocationFailed`] (and drops `value`) if growth fails, leaving
    /// the vector unchanged.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        if self.len == self.cap {
            self.grow()?;
        }
        // SAFETY: `len < cap`, so slot `len` is a raw slot of our block.
        unsafe { self.alloc.construct(self.ptr.add(self.len), value) };
        self.len += 1;
        Ok(())
    }
}
