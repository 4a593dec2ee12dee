// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Invariants maintained by everything below:
// - `0 <= len <= cap` always holds.
// - Slots `[0, len)` hold live elements; `[len, cap)` are raw and never read.
// - `cap == 0` iff no block is owned, in which case `ptr` is dangling.
// - A block is returned to the allocator exactly once, after its live
//   elements have been destroyed or relocated.

// Crate imports
use crate::{alloc_api::Allocator, error::Error, vec::HeapVec};

// Core imports
use core::{marker::PhantomData, ptr::NonNull};

use super::guard::FillGuard;

/// Acquires a raw block of `n` slots; `n == 0` needs no block.
#[inline]
pub(super) fn acquire<T, A: Allocator<T>>(alloc: &A, n: usize) -> Result<NonNull<T>, Error> {
    if n == 0 {
        return Ok(NonNull::dangling());
    }
    alloc.allocate(n)
}

/// Returns a block obtained from [`acquire`].
///
/// # Safety
///
/// `block` must come from `acquire(alloc, n)` and hold no live element.
#[inline]
pub(super) unsafe fn give_back<T, A: Allocator<T>>(alloc: &A, block: NonNull<T>, n: usize) {
    if n != 0 {
        // SAFETY: `n != 0`, so `block` really came from `alloc.allocate(n)`.
        unsafe { alloc.deallocate(block, n) };
    }
}

/// Acquires exactly `n` slots and clones `value` into every one of them.
///
/// If a clone panics, the copies built so far are destroyed and the block is
/// released before the panic continues.
pub(super) fn fill_block<T: Clone, A: Allocator<T>>(
    alloc: &A,
    n: usize,
    value: &T,
) -> Result<NonNull<T>, Error> {
    let block = acquire(alloc, n)?;
    // SAFETY: `block` is a fresh block of `n` raw slots.
    let mut guard = unsafe { FillGuard::fresh(alloc, block, n, 0, n) };
    guard.fill_with(|_| value.clone());
    guard.commit();
    Ok(block)
}

/// Acquires exactly `src.len()` slots and clones `src` into them, with the
/// same rollback as [`fill_block`].
pub(super) fn clone_block<T: Clone, A: Allocator<T>>(alloc: &A, src: &[T]) -> Result<NonNull<T>, Error> {
    let n = src.len();
    let block = acquire(alloc, n)?;
    // SAFETY: `block` is a fresh block of `n` raw slots.
    let mut guard = unsafe { FillGuard::fresh(alloc, block, n, 0, n) };
    guard.fill_with(|i| src[i].clone());
    guard.commit();
    Ok(block)
}

impl<T, A: Allocator<T>> HeapVec<T, A> {
    /// The "no storage" state: nothing allocated, `len == cap == 0`.
    #[inline]
    pub(super) const fn empty_in(alloc: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
            cap: 0,
            alloc,
            _owns: PhantomData,
        }
    }

    /// Adopts a block holding `len` live elements out of `cap` slots.
    ///
    /// # Safety
    ///
    /// `ptr` must come from `acquire(&alloc, cap)` and hold exactly `len`
    /// live elements at the front.
    #[inline]
    pub(super) const unsafe fn from_raw_parts_in(ptr: NonNull<T>, len: usize, cap: usize, alloc: A) -> Self {
        Self {
            ptr,
            len,
            cap,
            alloc,
            _owns: PhantomData,
        }
    }

    /// Destroys elements from the back until `len == new_len`.
    ///
    /// `len` is lowered before each destructor runs, so a panicking
    /// destructor leaks the remaining tail instead of dropping anything twice.
    pub(super) fn destroy_tail(&mut self, new_len: usize) {
        while self.len > new_len {
            self.len -= 1;
            // SAFETY: the slot at the old `len - 1` is live and is no longer
            // covered by `len`.
            unsafe { self.alloc.destroy(self.ptr.add(self.len)) };
        }
    }

    /// Swaps in a new block holding `len` live elements out of `cap`, and
    /// returns the old block to the allocator.
    ///
    /// # Safety
    ///
    /// The current block must hold no live elements (they were destroyed or
    /// relocated into `ptr`), and `ptr` must satisfy the contract of
    /// [`from_raw_parts_in`](Self::from_raw_parts_in).
    pub(super) unsafe fn rebind(&mut self, ptr: NonNull<T>, len: usize, cap: usize) {
        // SAFETY: the caller guarantees the old block is empty of live elements.
        unsafe { give_back(&self.alloc, self.ptr, self.cap) };
        self.ptr = ptr;
        self.len = len;
        self.cap = cap;
    }

    /// Destroys all live elements, last to first, then frees the block and
    /// returns to the "no storage" state. Calling it again is a no-op.
    pub(crate) fn release(&mut self) {
        self.destroy_tail(0);
        // SAFETY: every live element was destroyed above.
        unsafe { self.rebind(NonNull::dangling(), 0, 0) };
    }

    /// Destroys all elements (last to first) and keeps the capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.destroy_tail(0);
    }

    /// Destroys elements past `new_len`; a no-op if `new_len >= len`.
    ///
    /// Capacity is left as is.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        self.destroy_tail(new_len);
    }
}

impl<T, A: Allocator<T>> Drop for HeapVec<T, A> {
    fn drop(&mut self) {
        self.release();
    }
}
