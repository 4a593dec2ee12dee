// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `HeapVec`.
//!
//! These errors represent bounds, argument, state and allocation conditions.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`HeapVec`](crate::HeapVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An index or position was outside the addressable range.
    OutOfBounds,
    /// The request was structurally invalid: a zero count, an inverted range,
    /// or a shrink target larger than the current length.
    InvalidArgument,
    /// The operation needs at least one element (e.g. popping).
    Empty,
    /// The allocator could not provide a block, or the requested capacity
    /// does not fit in the address space.
    AllocationFailed,
}

impl Error {
    #[cold]
    #[inline(never)]
    pub(crate) fn panic(self) -> ! {
        panic!("{self}")
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("index out of bounds"),
            Self::InvalidArgument => f.write_str("invalid argument"),
            Self::Empty => f.write_str("container is empty"),
            Self::AllocationFailed => f.write_str("allocation failed"),
        }
    }
}

impl CoreError for Error {}
