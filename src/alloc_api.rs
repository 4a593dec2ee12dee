// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The element allocator seam used by [`HeapVec`](crate::HeapVec).
//!
//! A vector never touches raw memory except through this trait: blocks are
//! obtained with [`Allocator::allocate`] and returned with
//! [`Allocator::deallocate`], and single elements are brought to life with
//! [`Allocator::construct`] and torn down with [`Allocator::destroy`].
//!
//! Moving live elements from one block into another during reallocation is a
//! bitwise relocation and does not go through `construct`/`destroy`.

// Crate imports
use crate::error::Error;

// Core imports
use core::{alloc::Layout, ptr::NonNull};

/// Supplies raw blocks of `T` slots and constructs/destroys elements in place.
///
/// # Safety
///
/// Implementors must guarantee that a block returned by `allocate(n)`:
///
/// - is non-null and aligned for `T`;
/// - is valid for reads and writes of `n` consecutive `T` slots;
/// - stays valid, and is not handed out again, until it is passed back to
///   `deallocate` with the same `n`.
///
/// `construct` must leave `slot` holding `value` as a fully initialized `T`,
/// and `destroy` must run the destructor of the value in `slot` exactly once
/// (or otherwise dispose of it without reading it again).
pub unsafe trait Allocator<T> {
    /// Acquires an uninitialized block of exactly `n` slots.
    ///
    /// The vector only calls this with `n > 0`.
    fn allocate(&self, n: usize) -> Result<NonNull<T>, Error>;

    /// Returns a block previously obtained from `allocate(n)`.
    ///
    /// # Safety
    ///
    /// `block` must come from `self.allocate(n)` with the same `n`, must not
    /// have been deallocated already, and must hold no live elements.
    unsafe fn deallocate(&self, block: NonNull<T>, n: usize);

    /// Moves `value` into the raw slot `slot`.
    ///
    /// # Safety
    ///
    /// `slot` must point into a block from this allocator and must not hold a
    /// live element.
    #[inline]
    unsafe fn construct(&self, slot: NonNull<T>, value: T) {
        // SAFETY: the caller guarantees `slot` is a valid, unoccupied slot.
        unsafe { slot.as_ptr().write(value) }
    }

    /// Runs the destructor of the live element in `slot`, leaving a raw slot.
    ///
    /// # Safety
    ///
    /// `slot` must hold a live element, which is not used again afterwards.
    #[inline]
    unsafe fn destroy(&self, slot: NonNull<T>) {
        // SAFETY: the caller guarantees `slot` holds a live `T`.
        unsafe { slot.as_ptr().drop_in_place() }
    }
}

/// The default allocator: forwards to the global Rust allocator.
///
/// Zero-sized requests (zero-sized `T`) are served with a dangling, aligned
/// pointer and never reach the global allocator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Global;

unsafe impl<T> Allocator<T> for Global {
    fn allocate(&self, n: usize) -> Result<NonNull<T>, Error> {
        let layout = Layout::array::<T>(n).map_err(|_| Error::AllocationFailed)?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }
        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc::alloc::alloc(layout) };
        NonNull::new(raw.cast::<T>()).ok_or(Error::AllocationFailed)
    }

    unsafe fn deallocate(&self, block: NonNull<T>, n: usize) {
        // `allocate(n)` already validated this layout.
        let Ok(layout) = Layout::array::<T>(n) else {
            return;
        };
        if layout.size() == 0 {
            return;
        }
        // SAFETY: the caller guarantees `block` came from `allocate(n)`, which
        // used this exact layout with the global allocator.
        unsafe { alloc::alloc::dealloc(block.as_ptr().cast::<u8>(), layout) }
    }
}
