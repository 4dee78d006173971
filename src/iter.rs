//! Owning iterator over the elements of a [`GrowVec`](crate::GrowVec).

use core::fmt;
use core::iter::FusedIterator;
use core::ops::Range;
use core::ptr;

use crate::raw::RawBuf;

/// An owning iterator over the elements of a [`GrowVec`](crate::GrowVec).
///
/// Created by [`GrowVec::into_iter`](crate::GrowVec). Elements not yielded
/// are dropped together with the iterator.
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    live: Range<usize>,
}

impl<T> IntoIter<T> {
    /// # Safety
    ///
    /// Slots `0..len` of `buf` must hold initialized values that nothing else
    /// will read or drop.
    pub(crate) unsafe fn new(buf: RawBuf<T>, len: usize) -> Self {
        Self { buf, live: 0..len }
    }

    /// Returns the elements not yet yielded as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots in `live` are initialized and owned by the iterator.
        unsafe {
            core::slice::from_raw_parts(self.buf.ptr().add(self.live.start), self.live.len())
        }
    }
}

impl<T> fmt::Debug for IntoIter<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.live.next()?;
        // SAFETY: `index` left the live range, so the value is read exactly once.
        Some(unsafe { self.buf.ptr().add(index).read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.live.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.live.next_back()?;
        // SAFETY: see `next`.
        Some(unsafe { self.buf.ptr().add(index).read() })
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.live.len()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = ptr::slice_from_raw_parts_mut(
            self.buf.ptr().wrapping_add(self.live.start),
            self.live.len(),
        );
        self.live = self.live.end..self.live.end;

        // SAFETY: the remaining slots are initialized and no longer reachable.
        unsafe { ptr::drop_in_place(remaining) };
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::Cell;

    use crate::{grow_vec, GrowVec};

    struct Tracked(Rc<Cell<usize>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_into_iter_empty() {
        let base = GrowVec::<i32>::new();
        let mut sut = base.into_iter();

        assert_eq!(sut.len(), 0, "Iterator from empty GrowVec should have len 0");
        assert_eq!(sut.next(), None, "Iterator from empty GrowVec should yield None");
        assert_eq!(
            sut.next_back(),
            None,
            "Double-ended iterator should yield None on empty GrowVec"
        );
    }

    #[test]
    fn test_into_iter_double_ended_iteration() {
        let base = grow_vec![10, 20, 30, 40];

        let mut sut = base.into_iter();
        assert_eq!(sut.next_back(), Some(40));
        assert_eq!(sut.next(), Some(10));
        assert_eq!(sut.as_slice(), &[20, 30]);
        assert_eq!(sut.next_back(), Some(30));
        assert_eq!(sut.next(), Some(20));
        assert_eq!(sut.next_back(), None);
        assert_eq!(sut.next(), None);
        assert_eq!(sut.next(), None, "Iterator should remain fused (repeated None)");
    }

    #[test]
    fn test_into_iter_len_consistency() {
        let base = grow_vec![1, 2, 3, 4, 5];
        let mut sut = base.into_iter();

        assert_eq!(sut.len(), 5);
        sut.next();
        assert_eq!(sut.len(), 4);
        sut.next_back();
        assert_eq!(sut.len(), 3);
    }

    #[test]
    fn test_into_iter_collect() {
        let base = grow_vec![5u8, 6, 7, 8];
        let collected: Vec<_> = base.into_iter().collect();
        assert_eq!(collected, [5, 6, 7, 8]);
    }

    #[test]
    fn test_into_iter_drops_remaining() {
        let drops = Rc::new(Cell::new(0));
        let mut base = GrowVec::new();
        for _ in 0..4 {
            base.push(Tracked(drops.clone()));
        }

        let mut sut = base.into_iter();
        drop(sut.next());
        assert_eq!(drops.get(), 1);

        drop(sut);
        assert_eq!(drops.get(), 4, "Unyielded elements must be dropped once");
    }

    #[test]
    fn test_into_iter_boxed_values() {
        let base = GrowVec::from(["a", "b", "c", "d"].map(Box::<str>::from));

        let mut sut = base.into_iter();
        assert_eq!(sut.next().as_deref(), Some("a"));
        assert_eq!(sut.next_back().as_deref(), Some("d"));

        // ensure memory gets released correctly
        core::mem::drop(sut);
    }
}
