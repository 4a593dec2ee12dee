// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{alloc_api::Allocator, error::Error, vec::HeapVec};

// Core imports
use core::ptr;

use super::{guard::FillGuard, lifecycle::acquire};

impl<T, A: Allocator<T>> HeapVec<T, A> {
    /// Ensures `capacity() >= new_cap`, allocating a block of exactly
    /// `new_cap` slots if the current one is smaller.
    ///
    /// - A no-op (no allocation) when `new_cap <= capacity()`.
    /// - Never shrinks.
    /// - Returns [`Error::AllocationFailed`] if the block cannot be obtained,
    ///   leaving the vector unchanged.
    ///
    /// Live elements are relocated in order; their values are not cloned.
    pub fn reserve(&mut self, new_cap: usize) -> Result<(), Error> {
        if new_cap <= self.cap {
            return Ok(());
        }
        self.relocate(new_cap)
    }

    /// Reduces the capacity to exactly `len()`.
    ///
    /// A no-op when already tight. An empty vector gives its block back and
    /// returns to the unallocated state. Element values are untouched.
    pub fn shrink_to_fit(&mut self) -> Result<(), Error> {
        if self.cap == self.len {
            return Ok(());
        }
        self.relocate(self.len)
    }

    /// Doubles the capacity (`max(2 * capacity, 1)`).
    pub(super) fn grow(&mut self) -> Result<(), Error> {
        let new_cap = self.cap.checked_mul(2).ok_or(Error::AllocationFailed)?.max(1);
        self.relocate(new_cap)
    }

    /// Capacity to grow to when `needed` slots are required: the doubling
    /// policy, or `needed` itself if that is larger.
    pub(super) fn grown_capacity(&self, needed: usize) -> usize {
        self.cap.saturating_mul(2).max(needed).max(1)
    }

    /// Moves the live elements into a fresh block of exactly `new_cap` slots.
    fn relocate(&mut self, new_cap: usize) -> Result<(), Error> {
        debug_assert!(new_cap >= self.len);
        let block = acquire(&self.alloc, new_cap)?;
        // SAFETY: `[0, len)` are live in the old block and `block` has room
        // for `new_cap >= len` slots; the blocks are distinct. After the copy
        // the old slots are only raw memory, so `rebind` may free them.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), block.as_ptr(), self.len);
            self.rebind(block, self.len, new_cap);
        }
        Ok(())
    }

    /// Appends `count` elements produced by `make(i)`, all or nothing.
    ///
    /// With enough spare capacity the elements are built in place. Otherwise a
    /// block of `grow_to` slots is filled first and the existing elements are
    /// relocated into it only after every new element exists. In both cases a
    /// panic from `make` destroys what was built and leaves `self` untouched.
    pub(super) fn append_with<F>(&mut self, count: usize, grow_to: usize, make: F) -> Result<(), Error>
    where
        F: FnMut(usize) -> T,
    {
        let len = self.len;
        let needed = len.checked_add(count).ok_or(Error::AllocationFailed)?;
        if needed <= self.cap {
            // SAFETY: `[len, needed)` are raw slots of our own block, and
            // nothing else touches the vector while the guard is alive.
            let mut guard = unsafe { FillGuard::borrowed(&self.alloc, self.ptr, len, needed) };
            guard.fill_with(make);
            guard.commit();
            self.len = needed;
            return Ok(());
        }

        debug_assert!(grow_to >= needed);
        let block = acquire(&self.alloc, grow_to)?;
        // SAFETY: `block` is a fresh block of `grow_to >= needed` raw slots.
        let mut guard = unsafe { FillGuard::fresh(&self.alloc, block, grow_to, len, needed) };
        guard.fill_with(make);
        guard.commit();
        // SAFETY: `[0, len)` go to the still-raw front of the new block; the
        // old block is then empty of live elements.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), block.as_ptr(), len);
            self.rebind(block, needed, grow_to);
        }
        Ok(())
    }
}
