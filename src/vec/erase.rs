// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{alloc_api::Allocator, error::Error, vec::HeapVec};

// Core imports
use core::ops::{Bound, RangeBounds};

impl<T, A: Allocator<T>> HeapVec<T, A> {
    /// Erases the element at `pos`, shifting `[pos + 1, len)` one slot left.
    ///
    /// Returns [`Error::OutOfBounds`] if `pos >= len()`. Otherwise returns
    /// `pos`, which now indexes the element that followed the erased one (or
    /// equals `len()` if the last element was erased).
    ///
    /// `O(len - pos)`; never allocates and never changes the capacity.
    pub fn erase(&mut self, pos: usize) -> Result<usize, Error> {
        if pos >= self.len {
            return Err(Error::OutOfBounds);
        }
        let len = self.len;
        // Shift left: the doomed element ends up in the last live slot.
        self.as_mut_slice()[pos..].rotate_left(1);
        self.destroy_tail(len - 1);
        Ok(pos)
    }

    /// Erases the elements in `range`, shifting the suffix left to close the gap.
    ///
    /// - Returns [`Error::InvalidArgument`] if the range is inverted
    ///   (`start > end`).
    /// - Returns [`Error::OutOfBounds`] if `end > len()`.
    /// - An empty range (`start == end`) changes nothing.
    ///
    /// Returns `start`, which now indexes the first element after the erased
    /// range. Never allocates and never changes the capacity.
    pub fn erase_range<R>(&mut self, range: R) -> Result<usize, Error>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len;

        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i.checked_add(1).ok_or(Error::OutOfBounds)?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => i.checked_add(1).ok_or(Error::OutOfBounds)?,
            Bound::Excluded(&i) => i,
            Bound::Unbounded => len,
        };

        if start > end {
            return Err(Error::InvalidArgument);
        }
        if end > len {
            return Err(Error::OutOfBounds);
        }

        let gap = end - start;
        if gap > 0 {
            self.as_mut_slice()[start..].rotate_left(gap);
            self.destroy_tail(len - gap);
        }
        Ok(start)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        Error, HeapVec,
        testing::{Tracked, Tracker, values},
    };

    #[test]
    fn test_erase_shifts_left_and_keeps_capacity() {
        let mut v: HeapVec<i32> = HeapVec::try_from([1, 2, 3, 4, 5]).unwrap();
        assert_eq!(v.erase(2), Ok(2));
        assert_eq!(v.as_slice(), &[1, 2, 4, 5]);
        assert_eq!(v[2], 4);
        assert_eq!(v.capacity(), 5);

        assert_eq!(v.erase(0), Ok(0));
        assert_eq!(v.as_slice(), &[2, 4, 5]);
        let last = v.len() - 1;
        assert_eq!(v.erase(last), Ok(2));
        assert_eq!(v.len(), 2);
        assert_eq!(v.as_slice(), &[2, 4]);
    }

    #[test]
    fn test_erase_out_of_bounds_is_noop() {
        let mut v: HeapVec<i32> = HeapVec::try_from([1, 2]).unwrap();
        assert_eq!(v.erase(2), Err(Error::OutOfBounds));
        let mut empty: HeapVec<i32> = HeapVec::new();
        assert_eq!(empty.erase(0), Err(Error::OutOfBounds));
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_erase_destroys_only_the_erased_element() {
        let tracker = Tracker::new();
        let mut v: HeapVec<Tracked> = (0..4).map(|i| Tracked::new(i, &tracker)).collect();
        v.erase(1).unwrap();
        assert_eq!(tracker.drops(), [1]);
        assert_eq!(values(&v), [0, 2, 3]);
    }

    #[test]
    fn test_erase_range_middle_prefix_and_suffix() {
        let mut v: HeapVec<i32> = HeapVec::try_from([1, 2, 3, 4, 5]).unwrap();
        assert_eq!(v.erase_range(1..4), Ok(1));
        assert_eq!(v.as_slice(), &[1, 5]);

        let mut w: HeapVec<i32> = HeapVec::try_from([1, 2, 3, 4, 5]).unwrap();
        assert_eq!(w.erase_range(..2), Ok(0));
        assert_eq!(w.as_slice(), &[3, 4, 5]);
        assert_eq!(w.erase_range(1..), Ok(1));
        assert_eq!(w.as_slice(), &[3]);
        assert_eq!(w.capacity(), 5);

        let mut x: HeapVec<i32> = HeapVec::try_from([1, 2, 3, 4, 5]).unwrap();
        assert_eq!(x.erase_range(..=2), Ok(0));
        assert_eq!(x.as_slice(), &[4, 5]);
        assert_eq!(x.erase_range(..), Ok(0));
        assert!(x.is_empty());
    }

    #[test]
    fn test_erase_range_empty_range_is_noop() {
        let mut v: HeapVec<i32> = HeapVec::try_from([1, 2, 3]).unwrap();
        assert_eq!(v.erase_range(2..2), Ok(2));
        assert_eq!(v.erase_range(3..3), Ok(3));
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_erase_range_errors_are_noops() {
        let mut v: HeapVec<i32> = HeapVec::try_from([1, 2, 3, 4]).unwrap();
        assert_eq!(v.erase_range(3..1), Err(Error::InvalidArgument));
        assert_eq!(v.erase_range(2..10), Err(Error::OutOfBounds));
        assert_eq!(v.erase_range(..=4), Err(Error::OutOfBounds));
        assert_eq!(v.erase_range(..=usize::MAX), Err(Error::OutOfBounds));
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_erase_range_excluded_start_bound() {
        use core::ops::{Bound, RangeBounds};
        struct ExcludedStartRange {
            start: usize,
            end: usize,
        }

        impl RangeBounds<usize> for ExcludedStartRange {
            fn start_bound(&self) -> Bound<&usize> {
                Bound::Excluded(&self.start)
            }

            fn end_bound(&self) -> Bound<&usize> {
                Bound::Included(&self.end)
            }
        }

        // Excluded(1)..=3 erases indices [2, 3].
        let mut v: HeapVec<i32> = HeapVec::try_from([10, 20, 30, 40, 50]).unwrap();
        assert_eq!(v.erase_range(ExcludedStartRange { start: 1, end: 3 }), Ok(2));
        assert_eq!(v.as_slice(), &[10, 20, 50]);
    }

    #[test]
    fn test_erase_range_destroys_exactly_the_range() {
        let tracker = Tracker::new();
        let mut v: HeapVec<Tracked> = (0..6).map(|i| Tracked::new(i, &tracker)).collect();
        let cap = v.capacity();
        v.erase_range(1..4).unwrap();

        let mut dropped = tracker.drops();
        dropped.sort_unstable();
        assert_eq!(dropped, [1, 2, 3]);
        assert_eq!(values(&v), [0, 4, 5]);
        assert_eq!(v.capacity(), cap);
        assert_eq!(tracker.live(), 3);
    }
}
