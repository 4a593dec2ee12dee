// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`HeapVec`](crate::HeapVec).
//!
//! - `IntoIter<T, A>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&HeapVec` and `&mut HeapVec` iterate as slices.

// Crate imports
use crate::{
    alloc_api::{Allocator, Global},
    vec::HeapVec,
};

// Core imports
use core::{fmt, iter::FusedIterator};

/// Owned iterator returned by `HeapVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`]. Elements that are skipped (by
/// [`nth`](Iterator::nth)) or never yielded are destroyed through the
/// allocator, and the block is returned when the iterator is dropped.
pub struct IntoIter<T, A: Allocator<T> = Global> {
    // Owns the block; its `len` is 0 so it never drops the elements itself.
    v: HeapVec<T, A>,
    front: usize,
    back: usize, // exclusive
}

impl<T, A: Allocator<T>> IntoIter<T, A> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` are live elements of the owned block.
        unsafe { core::slice::from_raw_parts(self.v.ptr.as_ptr().add(self.front), self.back - self.front) }
    }

    /// Destroys the elements in `[self.front, upto)` and moves `front` past them.
    fn destroy_front(&mut self, upto: usize) {
        while self.front < upto {
            let i = self.front;
            self.front += 1;
            // SAFETY: slot `i` is live and is no longer in `[front, back)`.
            unsafe { self.v.alloc.destroy(self.v.ptr.add(i)) };
        }
    }

    /// Destroys the elements in `[from, self.back)` and moves `back` down to `from`.
    fn destroy_back(&mut self, from: usize) {
        while self.back > from {
            self.back -= 1;
            // SAFETY: slot `back` is live and is no longer in `[front, back)`.
            unsafe { self.v.alloc.destroy(self.v.ptr.add(self.back)) };
        }
    }
}

impl<T, A: Allocator<T>> Iterator for IntoIter<T, A> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: slot `i` was live and is now outside `[front, back)`, so it
            // is read exactly once.
            Some(unsafe { self.v.ptr.add(i).read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        if n >= rem {
            self.destroy_front(self.back);
            return None;
        }
        self.destroy_front(self.front + n); // n < rem == back - front
        self.next()
    }
}

impl<T, A: Allocator<T>> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: slot `back` was live and is now outside `[front, back)`.
            Some(unsafe { self.v.ptr.add(self.back).read() })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        if n >= rem {
            self.destroy_back(self.front);
            None
        } else {
            self.destroy_back(self.back - n);
            self.next_back()
        }
    }
}
impl<T, A: Allocator<T>> FusedIterator for IntoIter<T, A> {}
impl<T, A: Allocator<T>> ExactSizeIterator for IntoIter<T, A> {}

impl<T: fmt::Debug, A: Allocator<T>> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, A: Allocator<T>> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        self.destroy_back(self.front);
        // `self.v` now gives its block back without touching any element.
    }
}

impl<'a, T, A: Allocator<T>> IntoIterator for &'a HeapVec<T, A> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, A: Allocator<T>> IntoIterator for &'a mut HeapVec<T, A> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, A: Allocator<T>> IntoIterator for HeapVec<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;
    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len;
        // The iterator takes over the elements; the vector keeps only the block.
        self.len = 0;
        IntoIter {
            v: self,
            front: 0,
            back,
        }
    }
}
