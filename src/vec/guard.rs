// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::alloc_api::Allocator;

// Core imports
use core::{mem, ptr::NonNull};

/// Constructs a run of elements into raw slots and undoes the work if it is
/// dropped before [`commit`](FillGuard::commit).
///
/// While filling, `block[start..start + filled)` are live elements owned by the
/// guard. On unwind they are destroyed in reverse order and, for a freshly
/// acquired block, the block itself goes back to the allocator. The vector
/// that started the fill never observes a half-built run.
pub(crate) struct FillGuard<'a, T, A: Allocator<T>> {
    alloc: &'a A,
    block: NonNull<T>,
    // Slot count to deallocate on unwind; `None` when the block is borrowed.
    owned_cap: Option<usize>,
    start: usize,
    limit: usize,
    filled: usize,
}

impl<'a, T, A: Allocator<T>> FillGuard<'a, T, A> {
    /// Guards a fill of `block[start..limit)` in a block the guard now owns.
    ///
    /// # Safety
    ///
    /// `block` must come from `alloc.allocate(cap)` with `limit <= cap`, and
    /// `block[start..limit)` must be raw slots.
    pub(crate) unsafe fn fresh(
        alloc: &'a A,
        block: NonNull<T>,
        cap: usize,
        start: usize,
        limit: usize,
    ) -> Self {
        debug_assert!(start <= limit && limit <= cap);
        Self {
            alloc,
            block,
            owned_cap: Some(cap),
            start,
            limit,
            filled: 0,
        }
    }

    /// Guards a fill of `block[start..limit)` in a block someone else owns.
    ///
    /// # Safety
    ///
    /// `block[start..limit)` must be raw slots of a block from `alloc` that
    /// stays allocated, and untouched by anyone else, while the guard lives.
    pub(crate) unsafe fn borrowed(alloc: &'a A, block: NonNull<T>, start: usize, limit: usize) -> Self {
        debug_assert!(start <= limit);
        Self {
            alloc,
            block,
            owned_cap: None,
            start,
            limit,
            filled: 0,
        }
    }

    /// Constructs `value` into the next slot.
    ///
    /// # Panics
    ///
    /// Panics if the guarded range is already full.
    #[inline]
    pub(crate) fn push(&mut self, value: T) {
        let slot = self.start + self.filled;
        assert!(slot < self.limit, "fill past the guarded range");
        // SAFETY: `slot` is inside the raw range the constructor vouched for,
        // and it has not been filled yet.
        unsafe { self.alloc.construct(self.block.add(slot), value) };
        self.filled += 1;
    }

    /// Fills the whole guarded range, calling `make(i)` for the `i`-th slot.
    pub(crate) fn fill_with<F: FnMut(usize) -> T>(&mut self, mut make: F) {
        while self.start + self.filled < self.limit {
            let value = make(self.filled);
            self.push(value);
        }
    }

    /// Keeps the constructed elements (and the block) and returns how many
    /// elements were built.
    #[inline]
    pub(crate) fn commit(self) -> usize {
        let filled = self.filled;
        mem::forget(self);
        filled
    }
}

impl<T, A: Allocator<T>> Drop for FillGuard<'_, T, A> {
    fn drop(&mut self) {
        while self.filled > 0 {
            self.filled -= 1;
            // SAFETY: slots `start..start + filled` were constructed by this
            // guard and nothing else has touched them.
            unsafe { self.alloc.destroy(self.block.add(self.start + self.filled)) };
        }
        if let Some(cap) = self.owned_cap {
            // SAFETY: the guard owns this block, which now holds no live element.
            unsafe { self.alloc.deallocate(self.block, cap) };
        }
    }
}
