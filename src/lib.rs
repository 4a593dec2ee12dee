// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `heap-vec`
//!
//! A `no_std` + `alloc`, growable, heap-backed vector built by hand over raw
//! storage obtained from a pluggable element allocator.
//!
//! The core type, [`HeapVec<T, A>`], owns one contiguous block of `capacity`
//! slots and tracks how many of them hold live elements. Everything a vector
//! does to its memory is done explicitly here: acquiring and releasing blocks,
//! constructing and destroying elements in place, doubling capacity on
//! append, and shifting elements for positional insert/erase.
//!
//! ## Storage model
//!
//! - A block pointer, a logical length `len` and a capacity `cap`, with
//!   `0 <= len <= cap` at all times.
//! - Slots `[0, len)` are live elements, slots `[len, cap)` are raw memory that
//!   is never read.
//! - `cap == 0` means no block is owned at all. [`HeapVec::new`] never
//!   allocates.
//!
//! ## The allocator seam
//!
//! Memory and element lifecycles go through the [`Allocator`] trait:
//!
//! - `allocate(n)` / `deallocate(block, n)` for raw blocks of `n` slots;
//! - `construct(slot, value)` / `destroy(slot)` for single elements.
//!
//! [`Global`] is the default and forwards to the global allocator. Any other
//! implementation can be injected per instance through the `*_in`
//! constructors (e.g. [`HeapVec::new_in`]).
//!
//! ## Error handling
//!
//! Invalid requests are reported as [`Error`] values rather than clamped or
//! ignored:
//!
//! - [`Error::OutOfBounds`]: a position outside the addressable range.
//! - [`Error::InvalidArgument`]: a structurally invalid request (zero counts,
//!   inverted ranges, a shrink target above the current length).
//! - [`Error::Empty`]: popping from an empty vector.
//! - [`Error::AllocationFailed`]: the allocator could not supply a block.
//!
//! A failed call leaves the vector unchanged. If cloning an element panics
//! while a capacity-changing operation is in progress, the partially built
//! block is torn down and the vector keeps its previous contents and capacity.
//!
//! Only indexing (`v[i]`, `v[a..b]`) panics on bad input, exactly like slices.
//! Use [`HeapVec::at`] or [`HeapVec::get`] for checked access.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `HeapVec<T, A>` as a plain
//!     sequence. Deserializing requires `A: Allocator<T> + Default`.
//!
//! ## Example
//!
//! ```rust
//! use heap_vec::HeapVec;
//!
//! let mut v: HeapVec<i32> = HeapVec::new();
//! for i in 1..=5 {
//!     v.push(i).unwrap();
//! }
//! v.erase(2).unwrap();
//! assert_eq!(v.as_slice(), &[1, 2, 4, 5]);
//! v.insert(2, 9).unwrap();
//! assert_eq!(v.as_slice(), &[1, 2, 9, 4, 5]);
//! assert_eq!(v.capacity(), 8);
//! ```
//!
//! See [`HeapVec`] for the full operation list and complexity notes.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

// Modules
mod alloc_api;
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
#[cfg(test)]
mod testing;
mod vec;

// Public exports (crate API surface)
pub use alloc_api::{Allocator, Global};
pub use error::Error;
pub use iter::IntoIter;
pub use vec::HeapVec;
