// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `HeapVec` type and its inherent API.
//!
//! `HeapVec<T, A>` is a growable vector that owns one heap block obtained from
//! an [`Allocator`]. Operations are split by concern into the submodules below;
//! this file holds the type itself, queries, element access and the
//! slice-backed trait impls.

mod assign;
mod erase;
mod extend;
mod guard;
mod insert;
mod lifecycle;
mod new;
mod pop;
mod push;
mod reserve;
mod resize;
mod slice;

// Crate imports
use crate::{
    alloc_api::{Allocator, Global},
    error::Error,
};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem,
    ops::{Deref, DerefMut},
    ptr::NonNull,
};

/// A growable, heap-backed vector over a pluggable element allocator.
///
/// `HeapVec<T, A>` owns a single contiguous block of `capacity()` slots. The
/// first `len()` slots hold live elements; the rest are raw memory reserved
/// for future growth.
///
/// # Layout and invariants
///
/// Internally, `HeapVec<T, A>` maintains:
///
/// - a block pointer (dangling while no block is owned);
/// - a logical length `len` and a capacity `cap` with `0 <= len <= cap`;
/// - the allocator instance `A` that produced the block.
///
/// Only `[0..len)` is visible through [`as_slice`](HeapVec::as_slice),
/// indexing and iteration. `cap == 0` means no block is owned, which is the
/// state of [`HeapVec::new`] (no allocation happens until the first element
/// arrives).
///
/// Borrowed views (`&T`, slices, iterators) hold a borrow of the vector, so
/// any operation that reallocates or shifts elements cannot run while they
/// are alive.
///
/// # Growth policy
///
/// - [`push`](HeapVec::push) on a full vector grows the capacity to
///   `max(2 * capacity, 1)`, giving amortized `O(1)` appends.
/// - [`reserve`](HeapVec::reserve) grows to exactly the requested capacity
///   and never shrinks.
/// - [`shrink_to_fit`](HeapVec::shrink_to_fit) trims the capacity down to the
///   length.
/// - [`insert`](HeapVec::insert) / [`insert_n`](HeapVec::insert_n) shift in
///   place when there is room and otherwise grow to exactly the new length.
/// - [`resize`](HeapVec::resize) grows to exactly the requested length.
/// - Erasing, truncating and [`clear`](HeapVec::clear) never release capacity.
///
/// # Fallible operations
///
/// Every operation that can be given a bad argument, or that allocates,
/// returns `Result<_, Error>` and leaves the vector unchanged on `Err`:
///
/// - [`Error::OutOfBounds`]: [`at`](HeapVec::at), [`insert`](HeapVec::insert),
///   [`insert_n`](HeapVec::insert_n), [`erase`](HeapVec::erase),
///   [`erase_range`](HeapVec::erase_range).
/// - [`Error::InvalidArgument`]: zero counts in [`assign`](HeapVec::assign) /
///   [`insert_n`](HeapVec::insert_n), inverted ranges in
///   [`erase_range`](HeapVec::erase_range), a target above `len()` in
///   [`resize_shrink`](HeapVec::resize_shrink).
/// - [`Error::Empty`]: [`try_pop`](HeapVec::try_pop).
/// - [`Error::AllocationFailed`]: anything that needs a new block.
///
/// # Panic safety
///
/// Cloning `T` is the only user code that runs mid-operation. If a clone
/// panics while a capacity-changing operation is filling a new block, the
/// new block is destroyed and returned to the allocator, and the vector keeps
/// its old block, contents and capacity.
///
/// # Examples
///
/// ```rust
/// use heap_vec::HeapVec;
///
/// let mut v = HeapVec::from_elem(7, 10).unwrap();
/// assert_eq!((v.len(), v.capacity()), (10, 10));
///
/// v.assign(3, 2).unwrap();
/// assert_eq!(v.as_slice(), &[2, 2, 2]);
/// assert_eq!(v.capacity(), 10);
///
/// v.shrink_to_fit().unwrap();
/// assert_eq!(v.capacity(), 3);
/// ```
pub struct HeapVec<T, A: Allocator<T> = Global> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) len: usize,
    pub(crate) cap: usize,
    pub(crate) alloc: A,
    _owns: PhantomData<T>,
}

// SAFETY: `HeapVec` uniquely owns its block and elements, like `Vec`.
unsafe impl<T: Send, A: Allocator<T> + Send> Send for HeapVec<T, A> {}
// SAFETY: shared access only hands out `&T` and `&A`.
unsafe impl<T: Sync, A: Allocator<T> + Sync> Sync for HeapVec<T, A> {}

impl<T, A: Allocator<T>> HeapVec<T, A> {
    /// Returns the number of allocated slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - len`, the number of pushes that will not reallocate.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        self.cap - self.len
    }

    /// Returns the allocator this vector draws its storage from.
    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Bounds-checked access, returning [`Error::OutOfBounds`] when `i >= len`.
    #[inline]
    pub fn at(&self, i: usize) -> Result<&T, Error> {
        self.get(i).ok_or(Error::OutOfBounds)
    }

    /// Bounds-checked mutable access, returning [`Error::OutOfBounds`] when `i >= len`.
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, Error> {
        self.get_mut(i).ok_or(Error::OutOfBounds)
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    // iterators
    /// Front-to-back iterator; call `.rev()` for back-to-front.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns `true` if the vector contains `x` (linear search).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }

    /// Exchanges the storage (and allocators) of `self` and `other` in `O(1)`.
    ///
    /// No element is copied or moved; each element keeps its address and
    /// simply changes owner.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

impl<T: fmt::Debug, A: Allocator<T>> fmt::Debug for HeapVec<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapVec")
            .field("len", &self.len)
            .field("capacity", &self.cap)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T, U, A, B> PartialEq<HeapVec<U, B>> for HeapVec<T, A>
where
    T: PartialEq<U>,
    A: Allocator<T>,
    B: Allocator<U>,
{
    fn eq(&self, other: &HeapVec<U, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: PartialEq<U>, U, A: Allocator<T>> PartialEq<[U]> for HeapVec<T, A> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq<U>, U, A: Allocator<T>, const N: usize> PartialEq<[U; N]> for HeapVec<T, A> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}
impl<T: Eq, A: Allocator<T>> Eq for HeapVec<T, A> {}
impl<T: Ord, A: Allocator<T>> Ord for HeapVec<T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, A: Allocator<T>> PartialOrd for HeapVec<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, A: Allocator<T>> Hash for HeapVec<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, A: Allocator<T>> Deref for HeapVec<T, A> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, A: Allocator<T>> DerefMut for HeapVec<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator<T>> AsRef<[T]> for HeapVec<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, A: Allocator<T>> AsMut<[T]> for HeapVec<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, A: Allocator<T>> Borrow<[T]> for HeapVec<T, A> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, A: Allocator<T>> BorrowMut<[T]> for HeapVec<T, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
