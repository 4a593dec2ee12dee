// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{alloc_api::Allocator, error::Error, vec::HeapVec};

use super::lifecycle::fill_block;

impl<T, A: Allocator<T>> HeapVec<T, A> {
    /// Replaces the contents with `count` clones of `value`.
    ///
    /// - Returns [`Error::InvalidArgument`] if `count == 0`.
    /// - If `count > capacity()`, a new block of exactly `count` slots is
    ///   filled first; only then are the old elements destroyed and the old
    ///   block released. A panicking clone or a failed allocation leaves the
    ///   vector untouched.
    /// - Otherwise the old elements are destroyed and the block is refilled in
    ///   place; `capacity()` does not change. If a clone panics in this
    ///   branch the vector is left empty (with its capacity).
    pub fn assign(&mut self, count: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if count == 0 {
            return Err(Error::InvalidArgument);
        }
        if count > self.cap {
            let block = fill_block(&self.alloc, count, &value)?;
            self.destroy_tail(0);
            // SAFETY: all old elements were destroyed; `block` holds `count`
            // live elements out of `count` slots.
            unsafe { self.rebind(block, count, count) };
            return Ok(());
        }
        self.destroy_tail(0);
        // Fits: `append_with` builds in place and never allocates.
        self.append_with(count, self.cap, |_| value.clone())
    }
}
