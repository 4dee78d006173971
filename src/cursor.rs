//! Raw, non-owning cursors into a [`GrowVec`](crate::GrowVec) buffer.
//!
//! A cursor names one slot of one buffer. It carries no lifetime and keeps
//! nothing alive: growth, [`clear`](crate::GrowVec::clear) and
//! [`erase`](crate::GrowVec::erase) invalidate cursors exactly as they would
//! invalidate raw pointers, and reading through an invalidated cursor is
//! undefined behavior. Comparing and advancing cursors is always safe.
//!
//! Each cursor also records the storage generation of its container, which
//! lets [`erase`](crate::GrowVec::erase) reject cursors that outlived the
//! storage they were taken from. Equality ignores the generation and compares
//! slots only.
//!
//! ```
//! use grow_vec::grow_vec;
//!
//! let mut v = grow_vec![1, 2, 3];
//!
//! let mut it = v.begin();
//! while it != v.end() {
//!     // SAFETY: `it` lies in `begin..end` and `v` is not mutated meanwhile.
//!     unsafe { *it.get_mut() *= 10 };
//!     it.inc();
//! }
//!
//! assert_eq!(v, [10, 20, 30]);
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ptr::NonNull;

/// Read-only cursor, obtained from [`GrowVec::cbegin`](crate::GrowVec::cbegin)
/// and [`GrowVec::cend`](crate::GrowVec::cend).
pub struct Cursor<T> {
    base: NonNull<T>,
    index: usize,
    epoch: usize,
}

/// Read/write cursor, obtained from [`GrowVec::begin`](crate::GrowVec::begin)
/// and [`GrowVec::end`](crate::GrowVec::end).
pub struct CursorMut<T> {
    base: NonNull<T>,
    index: usize,
    epoch: usize,
}

impl<T> Cursor<T> {
    pub(crate) const fn new(base: NonNull<T>, index: usize, epoch: usize) -> Self {
        Self { base, index, epoch }
    }

    /// Position of the referenced slot within its buffer.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Address of the referenced slot.
    pub fn as_ptr(&self) -> *const T {
        self.base.as_ptr().wrapping_add(self.index)
    }

    /// Returns a reference to the element under the cursor.
    ///
    /// # Safety
    ///
    /// The cursor must reference a live element (not the end slot) of a
    /// buffer that has not been reallocated, cleared or shifted past this
    /// position since the cursor was obtained, and the element must not be
    /// mutated while the returned reference is alive.
    pub unsafe fn get<'a>(self) -> &'a T {
        &*self.as_ptr()
    }

    /// Advances to the next slot and returns the advanced cursor.
    pub fn inc(&mut self) -> &mut Self {
        self.index += 1;
        self
    }

    /// Advances to the next slot and returns the cursor as it was before.
    pub fn post_inc(&mut self) -> Self {
        let previous = *self;
        self.index += 1;
        previous
    }
}

impl<T> CursorMut<T> {
    pub(crate) const fn new(base: NonNull<T>, index: usize, epoch: usize) -> Self {
        Self { base, index, epoch }
    }

    pub(crate) const fn base(&self) -> NonNull<T> {
        self.base
    }

    /// Storage generation of the container at the time the cursor was taken.
    pub(crate) const fn epoch(&self) -> usize {
        self.epoch
    }

    /// Position of the referenced slot within its buffer.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Address of the referenced slot.
    pub fn as_ptr(&self) -> *const T {
        self.as_mut_ptr()
    }

    /// Mutable address of the referenced slot.
    pub fn as_mut_ptr(&self) -> *mut T {
        self.base.as_ptr().wrapping_add(self.index)
    }

    /// Returns a reference to the element under the cursor.
    ///
    /// # Safety
    ///
    /// Same contract as [`Cursor::get`].
    pub unsafe fn get<'a>(self) -> &'a T {
        &*self.as_ptr()
    }

    /// Returns a mutable reference to the element under the cursor.
    ///
    /// # Safety
    ///
    /// Same contract as [`Cursor::get`]; in addition no other reference to
    /// the element may exist while the returned one is alive.
    pub unsafe fn get_mut<'a>(self) -> &'a mut T {
        &mut *self.as_mut_ptr()
    }

    /// Advances to the next slot and returns the advanced cursor.
    pub fn inc(&mut self) -> &mut Self {
        self.index += 1;
        self
    }

    /// Advances to the next slot and returns the cursor as it was before.
    pub fn post_inc(&mut self) -> Self {
        let previous = *self;
        self.index += 1;
        previous
    }
}

impl<T> From<CursorMut<T>> for Cursor<T> {
    fn from(cursor: CursorMut<T>) -> Self {
        Self::new(cursor.base, cursor.index, cursor.epoch)
    }
}

// Clone, Copy, Eq and Hash are written by hand so they do not require the
// matching bound on `T`.

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<T> {}

impl<T> Clone for CursorMut<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CursorMut<T> {}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.index == other.index
    }
}

impl<T> Eq for Cursor<T> {}

impl<T> PartialEq for CursorMut<T> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.index == other.index
    }
}

impl<T> Eq for CursorMut<T> {}

impl<T> Hash for Cursor<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state);
        self.index.hash(state);
    }
}

impl<T> Hash for CursorMut<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state);
        self.index.hash(state);
    }
}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("base", &self.base)
            .field("index", &self.index)
            .finish()
    }
}

impl<T> fmt::Debug for CursorMut<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("base", &self.base)
            .field("index", &self.index)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::{grow_vec, Cursor, GrowVec};

    #[test]
    fn test_begin_equals_end_when_empty() {
        let mut sut = GrowVec::<i32>::new();
        assert_eq!(sut.begin(), sut.end(), "Empty container has begin == end");
        assert_eq!(sut.cbegin(), sut.cend());
    }

    #[test]
    fn test_forward_scan_visits_every_element() {
        let sut = grow_vec![3.14, 2.71, 1.41];

        let mut visited = Vec::new();
        let mut it = sut.cbegin();
        while it != sut.cend() {
            visited.push(unsafe { *it.get() });
            it.inc();
        }

        assert_eq!(visited.len(), sut.len(), "Scan must run exactly len() times");
        assert_eq!(visited, [3.14, 2.71, 1.41]);
    }

    #[test]
    fn test_post_inc_returns_previous() {
        let sut = grow_vec![10, 20];

        let mut it = sut.cbegin();
        let previous = it.post_inc();
        assert_eq!(previous, sut.cbegin());
        assert_eq!(previous.index(), 0);
        assert_eq!(it.index(), 1);
        assert_eq!(unsafe { *previous.get() }, 10);
        assert_eq!(unsafe { *it.get() }, 20);
    }

    #[test]
    fn test_pre_inc_chains() {
        let sut = grow_vec!['a', 'b', 'c'];

        let mut it = sut.cbegin();
        it.inc().inc();
        assert_eq!(unsafe { *it.get() }, 'c');
        it.inc();
        assert_eq!(it, sut.cend());
    }

    #[test]
    fn test_write_through_cursor_mut() {
        let mut sut = grow_vec![1, 2, 3];

        let mut it = sut.begin();
        it.inc();
        unsafe { *it.get_mut() = 42 };
        assert_eq!(sut, [1, 42, 3]);
    }

    #[test]
    fn test_as_ptr_matches_slot_address() {
        let sut = grow_vec![5u64, 6, 7];

        let mut it = sut.cbegin();
        it.inc().inc();
        assert_eq!(it.as_ptr(), &sut[2] as *const u64);
    }

    #[test]
    fn test_cursor_mut_into_cursor() {
        let mut sut = grow_vec![1, 2];

        let end: Cursor<i32> = sut.end().into();
        assert_eq!(end, sut.cend());
    }

    #[test]
    fn test_cursors_of_distinct_buffers_differ() {
        let lhs = grow_vec![1, 2];
        let rhs = grow_vec![1, 2];
        assert_ne!(lhs.cbegin(), rhs.cbegin());
    }

    #[test]
    fn test_cursor_of_empty_string_vec() {
        let sut: GrowVec<alloc::string::String> = GrowVec::new();
        let it = sut.cbegin();
        assert_eq!(it.index(), 0);
        assert_eq!(it, sut.cend());
    }
}
