// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test-only allocators and element types.
//!
//! - [`CountingAlloc`] wraps [`Global`] and records every call made through the
//!   allocator seam. It can also be told to fail after a number of blocks.
//! - [`Tracked`] elements report their drops (in order) and can be armed to
//!   panic on the n-th clone, which is how rollback paths are exercised.

// Crate imports
use crate::{Allocator, Error, Global};

// Std imports
use std::{
    cell::{Cell, RefCell},
    ptr::NonNull,
    rc::Rc,
    vec::Vec,
};

#[derive(Debug, Default)]
struct AllocStats {
    allocations: Cell<usize>,
    deallocations: Cell<usize>,
    constructs: Cell<usize>,
    destroys: Cell<usize>,
    block_sizes: RefCell<Vec<usize>>,
    // `Some(k)`: the next `k` allocations succeed, then every one fails.
    fail_after: Cell<Option<usize>>,
}

/// Allocator that counts what passes through it. Clones share the counters.
#[derive(Debug, Clone, Default)]
pub(crate) struct CountingAlloc {
    stats: Rc<AllocStats>,
}

impl CountingAlloc {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// An allocator that grants `successes` blocks and fails afterwards.
    pub(crate) fn failing_after(successes: usize) -> Self {
        let a = Self::default();
        a.stats.fail_after.set(Some(successes));
        a
    }

    pub(crate) fn fail_from_now(&self) {
        self.stats.fail_after.set(Some(0));
    }

    pub(crate) fn allocations(&self) -> usize {
        self.stats.allocations.get()
    }

    pub(crate) fn deallocations(&self) -> usize {
        self.stats.deallocations.get()
    }

    pub(crate) fn live_blocks(&self) -> usize {
        self.allocations() - self.deallocations()
    }

    pub(crate) fn constructs(&self) -> usize {
        self.stats.constructs.get()
    }

    pub(crate) fn destroys(&self) -> usize {
        self.stats.destroys.get()
    }

    /// Slot counts of every granted block, in request order.
    pub(crate) fn block_sizes(&self) -> Vec<usize> {
        self.stats.block_sizes.borrow().clone()
    }
}

unsafe impl<T> Allocator<T> for CountingAlloc {
    fn allocate(&self, n: usize) -> Result<NonNull<T>, Error> {
        if let Some(left) = self.stats.fail_after.get() {
            if left == 0 {
                return Err(Error::AllocationFailed);
            }
            self.stats.fail_after.set(Some(left - 1));
        }
        let block = Allocator::<T>::allocate(&Global, n)?;
        self.stats.allocations.set(self.stats.allocations.get() + 1);
        self.stats.block_sizes.borrow_mut().push(n);
        Ok(block)
    }

    unsafe fn deallocate(&self, block: NonNull<T>, n: usize) {
        self.stats.deallocations.set(self.stats.deallocations.get() + 1);
        // SAFETY: forwarded from the caller; every block was obtained from `Global`.
        unsafe { Allocator::<T>::deallocate(&Global, block, n) }
    }

    unsafe fn construct(&self, slot: NonNull<T>, value: T) {
        self.stats.constructs.set(self.stats.constructs.get() + 1);
        // SAFETY: forwarded from the caller.
        unsafe { slot.as_ptr().write(value) }
    }

    unsafe fn destroy(&self, slot: NonNull<T>) {
        self.stats.destroys.set(self.stats.destroys.get() + 1);
        // SAFETY: forwarded from the caller.
        unsafe { slot.as_ptr().drop_in_place() }
    }
}

/// Shared bookkeeping for [`Tracked`] elements.
#[derive(Debug)]
pub(crate) struct Tracker {
    live: Cell<isize>,
    // Clones still allowed before the next one panics (`usize::MAX` = never).
    clones_left: Cell<usize>,
    drops: RefCell<Vec<i32>>,
}

impl Tracker {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            live: Cell::new(0),
            clones_left: Cell::new(usize::MAX),
            drops: RefCell::new(Vec::new()),
        })
    }

    /// Let `n` more clones succeed; the one after panics.
    pub(crate) fn arm(&self, n: usize) {
        self.clones_left.set(n);
    }

    pub(crate) fn disarm(&self) {
        self.clones_left.set(usize::MAX);
    }

    /// Number of `Tracked` values currently alive.
    pub(crate) fn live(&self) -> isize {
        self.live.get()
    }

    /// Values of dropped elements, in drop order.
    pub(crate) fn drops(&self) -> Vec<i32> {
        self.drops.borrow().clone()
    }

    pub(crate) fn forget_drops(&self) {
        self.drops.borrow_mut().clear();
    }
}

/// Element type that logs its drops and can panic while being cloned.
#[derive(Debug)]
pub(crate) struct Tracked {
    pub(crate) value: i32,
    tracker: Rc<Tracker>,
}

impl Tracked {
    pub(crate) fn new(value: i32, tracker: &Rc<Tracker>) -> Self {
        tracker.live.set(tracker.live.get() + 1);
        Self {
            value,
            tracker: Rc::clone(tracker),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        let left = self.tracker.clones_left.get();
        if left == 0 {
            panic!("clone bomb");
        }
        if left != usize::MAX {
            self.tracker.clones_left.set(left - 1);
        }
        Self::new(self.value, &self.tracker)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.tracker.live.set(self.tracker.live.get() - 1);
        self.tracker.drops.borrow_mut().push(self.value);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// Runs `f`, expecting it to panic.
pub(crate) fn expect_panic<F: FnOnce()>(f: F) {
    let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));
    assert!(res.is_err(), "expected a panic");
}

/// Collects the plain values of a tracked slice.
pub(crate) fn values(items: &[Tracked]) -> Vec<i32> {
    items.iter().map(|t| t.value).collect()
}
