// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{alloc_api::Allocator, error::Error, vec::HeapVec};

impl<T, A: Allocator<T>> HeapVec<T, A> {
    /// Inserts `value` at `pos`, shifting `[pos, len)` one slot to the right.
    ///
    /// - `pos == len()` appends.
    /// - Returns [`Error::OutOfBounds`] if `pos > len()`.
    /// - Shifts in place when there is spare capacity; when full, grows to
    ///   exactly `len() + 1` first.
    ///
    /// Returns the index of the inserted element (always `pos`).
    pub fn insert(&mut self, pos: usize, value: T) -> Result<usize, Error> {
        if pos > self.len {
            return Err(Error::OutOfBounds);
        }
        if self.len == self.cap {
            let needed = self.len.checked_add(1).ok_or(Error::AllocationFailed)?;
            self.reserve(needed)?;
        }
        self.push(value)?;
        // The new element sits at the tail; rotate it into place.
        self.as_mut_slice()[pos..].rotate_right(1);
        Ok(pos)
    }

    /// Inserts `count` clones of `value` at `pos`, shifting `[pos, len)` right
    /// by `count`.
    ///
    /// - Returns [`Error::InvalidArgument`] if `count == 0`.
    /// - Returns [`Error::OutOfBounds`] if `pos > len()`.
    /// - Shifts in place when the spare capacity suffices; otherwise grows to
    ///   exactly `len() + count`.
    /// - Returns [`Error::AllocationFailed`] if growing fails.
    ///
    /// All clones are built before any existing element moves, so a panicking
    /// clone leaves the vector (contents and capacity) as it was.
    ///
    /// Returns the index of the first inserted element (always `pos`).
    pub fn insert_n(&mut self, pos: usize, count: usize, value: T) -> Result<usize, Error>
    where
        T: Clone,
    {
        if count == 0 {
            return Err(Error::InvalidArgument);
        }
        if pos > self.len {
            return Err(Error::OutOfBounds);
        }
        let needed = self.len.checked_add(count).ok_or(Error::AllocationFailed)?;
        self.append_with(count, needed, |_| value.clone())?;
        self.as_mut_slice()[pos..].rotate_right(count);
        Ok(pos)
    }
}
