// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{alloc_api::Allocator, error::Error, vec::HeapVec};

impl<T, A: Allocator<T>> Extend<T> for HeapVec<T, A> {
    /// # Panics
    ///
    /// Panics if the allocator cannot supply a block. Items pushed before the
    /// failure stay in the vector.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item).unwrap_or_else(|e| e.panic());
        }
    }
}

impl<'a, T: Clone + 'a, A: Allocator<T>> Extend<&'a T> for HeapVec<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item.clone()).unwrap_or_else(|e| e.panic());
        }
    }
}

impl<T, A: Allocator<T>> HeapVec<T, A> {
    /// Appends clones of `src`, all or nothing.
    ///
    /// When the spare capacity is short, grows to `max(2 * capacity, len +
    /// src.len())`. On [`Error::AllocationFailed`] or a panicking clone the vector is
    /// left unchanged.
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if src.is_empty() {
            return Ok(());
        }
        let needed = self.len.checked_add(src.len()).ok_or(Error::AllocationFailed)?;
        let grow_to = self.grown_capacity(needed);
        self.append_with(src.len(), grow_to, |i| src[i].clone())
    }

    /// Pushes every item of `iter` in order.
    ///
    /// Semantics:
    /// - Growth follows [`push`](HeapVec::push), one item at a time.
    /// - On the first allocation failure this returns
    ///   [`Error::AllocationFailed`]; items pushed before it stay in the vector
    ///   and the failing item is dropped.
    /// - The source iterator may be partially consumed on error.
    pub fn try_extend_from_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        for item in iter {
            self.push(item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        Error, HeapVec,
        testing::{CountingAlloc, Tracked, Tracker, expect_panic, values},
    };

    #[test]
    fn test_extend_from_slice_appends_and_grows() {
        let alloc = CountingAlloc::new();
        let mut v = HeapVec::from_slice_in(&[1, 2], alloc.clone()).unwrap();
        v.extend_from_slice(&[3]).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert_eq!(v.capacity(), 4);

        v.extend_from_slice(&[4]).unwrap();
        v.extend_from_slice(&[]).unwrap();
        assert_eq!(v.capacity(), 4);

        v.extend_from_slice(&[5, 6, 7, 8, 9, 10, 11, 12, 13]).unwrap();
        assert_eq!(v.len(), 13);
        assert_eq!(v.capacity(), 13);
        assert_eq!(alloc.block_sizes(), [2, 4, 13]);
        assert_eq!(alloc.live_blocks(), 1);
    }

    #[test]
    fn test_extend_from_slice_failure_is_noop() {
        let alloc = CountingAlloc::new();
        let mut v = HeapVec::from_slice_in(&[1u8, 2], alloc.clone()).unwrap();
        alloc.fail_from_now();
        assert_eq!(v.extend_from_slice(&[3, 4]), Err(Error::AllocationFailed));
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn test_extend_from_slice_clone_panic_is_noop() {
        let tracker = Tracker::new();
        let src: Vec<Tracked> = (10..14).map(|i| Tracked::new(i, &tracker)).collect();
        let mut v: HeapVec<Tracked> = (0..2).map(|i| Tracked::new(i, &tracker)).collect();
        tracker.arm(2);

        expect_panic(|| {
            let _ = v.extend_from_slice(&src);
        });

        tracker.disarm();
        assert_eq!(values(&v), [0, 1]);
        assert_eq!(tracker.live(), 6);
    }

    #[test]
    fn test_try_extend_from_iter_keeps_prefix_on_failure() {
        let alloc = CountingAlloc::failing_after(2);
        let mut v = HeapVec::new_in(alloc.clone());
        assert_eq!(v.try_extend_from_iter(0u8..10), Err(Error::AllocationFailed));
        // Blocks of 1 and 2 were granted; the third push needed a block of 4.
        assert_eq!(v.as_slice(), &[0, 1]);
        assert_eq!(alloc.block_sizes(), [1, 2]);
    }

    #[test]
    fn test_extend_trait_by_value_and_by_ref() {
        let mut v: HeapVec<i32> = HeapVec::new();
        v.extend([1, 2, 3]);
        v.extend(&[4, 5]);
        v.extend(core::iter::empty::<i32>());
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "allocation failed")]
    fn test_extend_trait_panics_on_allocation_failure() {
        let mut v = HeapVec::new_in(CountingAlloc::failing_after(1));
        v.extend([1u8, 2, 3]);
    }
}
