// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{alloc_api::Allocator, error::Error, vec::HeapVec};

impl<T, A: Allocator<T>> HeapVec<T, A> {
    /// Removes and returns the last element, if any. `O(1)`.
    ///
    /// The element is moved out to the caller rather than destroyed in place,
    /// so the allocator's `destroy` is not called. Use
    /// [`try_pop`](HeapVec::try_pop) to destroy it where it lies.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: the slot at the old `len - 1` is live; lowering `len`
            // first hands its ownership to the value we read out.
            let out = unsafe { self.ptr.add(self.len).read() };
            Some(out)
        }
    }

    /// Destroys the last element through the allocator.
    ///
    /// Returns [`Error::Empty`] when there is nothing to remove. Capacity is
    /// untouched. `O(1)`.
    #[inline]
    pub fn try_pop(&mut self) -> Result<(), Error> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        self.destroy_tail(self.len - 1);
        Ok(())
    }
}
