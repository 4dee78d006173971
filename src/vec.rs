use alloc::vec::Vec;
use core::hash::Hash;
use core::ops::{Deref, DerefMut};
use core::ptr;
use core::slice::{Iter, IterMut};
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::cursor::{Cursor, CursorMut};
use crate::error::{Error, Result};
use crate::iter::IntoIter;
use crate::raw::{RawBuf, INITIAL_CAPACITY};

/// A heap-allocated, growable, contiguous array.
///
/// `GrowVec` is similar to [`Vec`], except:
/// - A default-constructed container already owns **one** slot.
/// - Capacity grows by **doubling** (`0 → 1 → 2 → 4 → …`) and is otherwise
///   exactly what was asked for: [`reserve`](GrowVec::reserve) takes an
///   absolute capacity, not an additional one.
/// - Positions can be held as raw [`Cursor`]s and [`CursorMut`]s, which are
///   invalidated by growth, [`clear`](GrowVec::clear) and
///   [`erase`](GrowVec::erase).
pub struct GrowVec<T> {
    buf: RawBuf<T>,
    len: usize,
    epoch: usize,
}

/// Hands out a storage generation no live container has used before.
fn next_epoch() -> usize {
    static EPOCH: AtomicUsize = AtomicUsize::new(0);
    EPOCH.fetch_add(1, Ordering::Relaxed)
}

impl<T> GrowVec<T> {
    /// Creates an empty `GrowVec` owning a single slot.
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let v = GrowVec::<i32>::new();
    /// assert_eq!(v.len(), 0);
    /// assert_eq!(v.capacity(), 1);
    /// ```
    pub fn new() -> Self {
        Self::with_exact_capacity(INITIAL_CAPACITY)
    }

    /// Creates a `GrowVec` holding `len` default values, with a capacity of
    /// exactly `len`.
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let v = GrowVec::<u8>::with_len(3);
    /// assert_eq!(v, [0, 0, 0]);
    /// assert_eq!(v.capacity(), 3);
    /// ```
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut vec = Self::with_exact_capacity(len);
        for _ in 0..len {
            // SAFETY: exactly `len` slots were allocated.
            unsafe { vec.push_unchecked(T::default()) };
        }
        vec
    }

    /// Creates a `GrowVec` holding `len` clones of `value`, with a capacity
    /// of exactly `len`.
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let v = GrowVec::from_elem("x", 2);
    /// assert_eq!(v, ["x", "x"]);
    /// ```
    pub fn from_elem(value: T, len: usize) -> Self
    where
        T: Clone,
    {
        let mut vec = Self::with_exact_capacity(len);
        if len > 0 {
            for _ in 1..len {
                // SAFETY: exactly `len` slots were allocated.
                unsafe { vec.push_unchecked(value.clone()) };
            }
            // SAFETY: one slot is left for the original value.
            unsafe { vec.push_unchecked(value) };
        }
        vec
    }

    pub(crate) fn with_exact_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuf::with_capacity(capacity),
            len: 0,
            epoch: next_epoch(),
        }
    }

    /// Writes `element` into slot `len`.
    ///
    /// # Safety
    ///
    /// `self.len < self.capacity()`.
    unsafe fn push_unchecked(&mut self, element: T) {
        debug_assert!(self.len < self.buf.capacity());
        self.buf.ptr().add(self.len).write(element);
        self.len += 1;
    }

    /// Appends an element, doubling the capacity first if the buffer is full.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows; aborts if the allocator fails.
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut v = GrowVec::new();
    /// v.push(10);
    /// assert_eq!(v.capacity(), 1);
    /// v.push(20);
    /// assert_eq!(v.capacity(), 2);
    /// v.push(30);
    /// assert_eq!(v.capacity(), 4);
    /// assert_eq!(v, [10, 20, 30]);
    /// ```
    pub fn push(&mut self, element: T) {
        if self.len == self.buf.capacity() {
            let new_capacity = self.buf.next_capacity();
            self.buf.grow_to(self.len, new_capacity);
            self.epoch = next_epoch();
        }

        // SAFETY: the buffer has at least one free slot.
        unsafe { self.push_unchecked(element) };
    }

    /// Removes the last element and returns it, or `None` if the vector is
    /// empty. Capacity is never released.
    ///
    /// ```
    /// use grow_vec::grow_vec;
    ///
    /// let mut v = grow_vec![1, 2];
    /// assert_eq!(v.pop(), Some(2));
    /// assert_eq!(v.pop(), Some(1));
    /// assert_eq!(v.pop(), None);
    /// assert_eq!(v.capacity(), 2);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        // Decrement the len of the array
        self.len -= 1;

        // SAFETY: slot `len` was live and is now outside the live range.
        Some(unsafe { self.buf.ptr().add(self.len).read() })
    }

    /// Bounds-checked access.
    ///
    /// ```
    /// use grow_vec::{grow_vec, Error};
    ///
    /// let v = grow_vec![3.14, 2.71, 1.41];
    /// assert_eq!(v.at(1), Ok(&2.71));
    /// assert_eq!(v.at(10), Err(Error::OutOfRange { index: 10, len: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Bounds-checked mutable access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Returns the first element, or [`Error::Empty`].
    ///
    /// ```
    /// use grow_vec::{grow_vec, Error, GrowVec};
    ///
    /// assert_eq!(grow_vec![7, 8].front(), Ok(&7));
    /// assert_eq!(GrowVec::<i32>::new().front(), Err(Error::Empty));
    /// ```
    pub fn front(&self) -> Result<&T> {
        self.as_slice().first().ok_or(Error::Empty)
    }

    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice().first_mut().ok_or(Error::Empty)
    }

    /// Returns the last element, or [`Error::Empty`].
    ///
    /// ```
    /// use grow_vec::{grow_vec, Error, GrowVec};
    ///
    /// assert_eq!(grow_vec![7, 8].back(), Ok(&8));
    /// assert_eq!(GrowVec::<i32>::new().back(), Err(Error::Empty));
    /// ```
    pub fn back(&self) -> Result<&T> {
        self.as_slice().last().ok_or(Error::Empty)
    }

    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice().last_mut().ok_or(Error::Empty)
    }

    /// Grows the buffer to exactly `new_capacity` slots. Does nothing if the
    /// current capacity is already at least `new_capacity`.
    ///
    /// # Panics
    ///
    /// Panics if `new_capacity` overflows; aborts if the allocator fails.
    ///
    /// ```
    /// use grow_vec::grow_vec;
    ///
    /// let mut v = grow_vec![1, 2];
    /// v.reserve(10);
    /// assert_eq!(v.capacity(), 10);
    /// v.reserve(4);
    /// assert_eq!(v.capacity(), 10);
    /// assert_eq!(v, [1, 2]);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.buf.capacity() {
            self.buf.grow_to(self.len, new_capacity);
            self.epoch = next_epoch();
        }
    }

    /// Fallible counterpart of [`reserve`](GrowVec::reserve). On error the
    /// vector is left unchanged.
    ///
    /// ```
    /// use grow_vec::{grow_vec, Error};
    ///
    /// let mut v = grow_vec![1u64];
    /// assert_eq!(v.try_reserve(8), Ok(()));
    /// assert_eq!(v.try_reserve(usize::MAX), Err(Error::CapacityOverflow));
    /// assert_eq!(v.capacity(), 8);
    /// ```
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity > self.buf.capacity() {
            self.buf.try_grow_to(self.len, new_capacity)?;
            self.epoch = next_epoch();
        }
        Ok(())
    }

    /// Drops all elements in order and resets the length to zero.
    /// The capacity remains allocated; every outstanding cursor is
    /// invalidated.
    ///
    /// ```
    /// use grow_vec::grow_vec;
    ///
    /// let mut v = grow_vec![1, 2, 3];
    /// v.clear();
    /// assert!(v.is_empty());
    /// assert_eq!(v.capacity(), 3);
    /// ```
    pub fn clear(&mut self) {
        self.drop_live();
        self.epoch = next_epoch();
    }

    fn drop_live(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.buf.ptr(), self.len);

        // Shrink first so a panicking destructor cannot expose dropped slots.
        self.len = 0;

        // SAFETY: the slots were live and are now outside the live range.
        unsafe { ptr::drop_in_place(live) };
    }

    /// Removes the element under `pos` and shifts the tail one slot left.
    ///
    /// Returns a cursor to the slot now holding the element that followed the
    /// erased one, which is [`end`](GrowVec::end) if the erased element was
    /// last. Cursors at or after `pos` are invalidated; earlier ones stay
    /// valid.
    ///
    /// Fails with [`Error::InvalidCursor`] if `pos` is the end cursor, was
    /// taken from another vector, or was taken before this vector last
    /// reallocated or was cleared. The check never reads through `pos`.
    ///
    /// ```
    /// use grow_vec::{grow_vec, Error};
    ///
    /// let mut v = grow_vec![1, 2, 3];
    /// let mut last = v.begin();
    /// last.inc().inc();
    ///
    /// let next = v.erase(last).unwrap();
    /// assert_eq!(next, v.end());
    /// assert_eq!(v, [1, 2]);
    /// assert_eq!(v.erase(next), Err(Error::InvalidCursor));
    /// ```
    pub fn erase(&mut self, pos: CursorMut<T>) -> Result<CursorMut<T>> {
        let index = pos.index();
        let current = pos.base() == self.buf.non_null() && pos.epoch() == self.epoch;
        if !current || index >= self.len {
            log::debug!(
                "rejecting cursor at slot {} (len {}, current storage: {})",
                index,
                self.len,
                current
            );
            return Err(Error::InvalidCursor);
        }

        // SAFETY: `index < len` was checked above.
        drop(unsafe { self.remove_unchecked(index) });
        Ok(self.cursor_mut(index))
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// ```
    /// use grow_vec::{grow_vec, Error};
    ///
    /// let mut v = grow_vec![10, 20, 30];
    /// assert_eq!(v.remove(1), Ok(20));
    /// assert_eq!(v, [10, 30]);
    /// assert_eq!(v.remove(2), Err(Error::OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }

        // SAFETY: `index < len` was checked above.
        Ok(unsafe { self.remove_unchecked(index) })
    }

    /// # Safety
    ///
    /// `index < self.len`.
    unsafe fn remove_unchecked(&mut self, index: usize) -> T {
        let slot = self.buf.ptr().add(index);

        // Read the element to be removed
        let element = slot.read();

        // Shift elements to fill the gap
        ptr::copy(slot.add(1), slot, self.len - index - 1);

        self.len -= 1;
        element
    }

    /// Moves the contents out, leaving `self` empty with zero capacity.
    /// Cursors taken before the move keep working on the returned vector.
    ///
    /// ```
    /// use grow_vec::grow_vec;
    ///
    /// let mut a = grow_vec![1, 2, 3];
    /// let b = a.take();
    /// assert_eq!(b, [1, 2, 3]);
    /// assert_eq!((a.len(), a.capacity()), (0, 0));
    /// ```
    pub fn take(&mut self) -> Self {
        log::debug!(
            "transferring buffer of {} slots ({} live)",
            self.buf.capacity(),
            self.len
        );

        Self {
            buf: self.buf.take(),
            len: core::mem::replace(&mut self.len, 0),
            epoch: core::mem::replace(&mut self.epoch, next_epoch()),
        }
    }

    /// Drops the current contents and takes over `source`'s buffer, leaving
    /// `source` empty with zero capacity.
    ///
    /// ```
    /// use grow_vec::grow_vec;
    ///
    /// let mut a = grow_vec![1, 2];
    /// let mut b = grow_vec![9];
    /// b.move_from(&mut a);
    /// assert_eq!(b, [1, 2]);
    /// assert_eq!(a.capacity(), 0);
    /// ```
    pub fn move_from(&mut self, source: &mut Self) {
        *self = source.take();
    }

    /// Read/write cursor to the first slot.
    pub fn begin(&mut self) -> CursorMut<T> {
        self.cursor_mut(0)
    }

    /// Read/write cursor one past the last live slot.
    pub fn end(&mut self) -> CursorMut<T> {
        self.cursor_mut(self.len)
    }

    /// Read-only cursor to the first slot.
    pub fn cbegin(&self) -> Cursor<T> {
        Cursor::new(self.buf.non_null(), 0, self.epoch)
    }

    /// Read-only cursor one past the last live slot.
    pub fn cend(&self) -> Cursor<T> {
        Cursor::new(self.buf.non_null(), self.len, self.epoch)
    }

    fn cursor_mut(&self, index: usize) -> CursorMut<T> {
        CursorMut::new(self.buf.non_null(), index, self.epoch)
    }

    /// Returns a shared slice over the live elements.
    pub fn as_slice(&self) -> &[T] {
        self.deref()
    }

    /// Returns a mutable slice over the live elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.deref_mut()
    }

    /// Returns an iterator over immutable references to the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over mutable references to the elements.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the number of allocated slots.
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the current number of live elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for GrowVec<T>
where
    T: Clone,
{
    /// Deep copy into a fresh buffer of the same capacity.
    fn clone(&self) -> Self {
        let mut cloned = Self::with_exact_capacity(self.capacity());
        for element in self.iter() {
            // SAFETY: `len <= capacity` for the source, so every clone fits.
            unsafe { cloned.push_unchecked(element.clone()) };
        }
        cloned
    }

    /// Deep copy assignment; the capacity becomes `source`'s.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        if self.capacity() != source.capacity() {
            self.buf = RawBuf::with_capacity(source.capacity());
        }

        for element in source.iter() {
            // SAFETY: capacity now equals the source's.
            unsafe { self.push_unchecked(element.clone()) };
        }
    }
}

impl<T, const N: usize> From<[T; N]> for GrowVec<T> {
    fn from(value: [T; N]) -> Self {
        let mut vec = Self::with_exact_capacity(N);
        for element in value {
            // SAFETY: exactly `N` slots were allocated.
            unsafe { vec.push_unchecked(element) };
        }
        vec
    }
}

impl<T> From<&[T]> for GrowVec<T>
where
    T: Clone,
{
    fn from(value: &[T]) -> Self {
        let mut vec = Self::with_exact_capacity(value.len());
        for element in value {
            // SAFETY: exactly `value.len()` slots were allocated.
            unsafe { vec.push_unchecked(element.clone()) };
        }
        vec
    }
}

impl<T> From<Vec<T>> for GrowVec<T> {
    fn from(value: Vec<T>) -> Self {
        let mut vec = Self::with_exact_capacity(value.len());
        for element in value {
            // SAFETY: exactly `value.len()` slots were allocated.
            unsafe { vec.push_unchecked(element) };
        }
        vec
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<'a, T> Extend<&'a T> for GrowVec<T>
where
    T: Copy + 'a,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> Deref for GrowVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: slots `0..len` are initialized; a dangling pointer is valid
        // for an empty slice.
        unsafe { core::slice::from_raw_parts(self.buf.ptr(), self.len) }
    }
}

impl<T> DerefMut for GrowVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: see `deref`.
        unsafe { core::slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for GrowVec<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for GrowVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = core::mem::replace(&mut self.len, 0);
        // SAFETY: `self` no longer considers any slot live, so the iterator
        // is the only owner of slots `0..len`.
        unsafe { IntoIter::new(self.buf.take(), len) }
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> PartialEq for GrowVec<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> PartialEq<[T]> for GrowVec<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T> PartialEq<&[T]> for GrowVec<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, const N: usize> PartialEq<[T; N]> for GrowVec<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T, const N: usize> PartialEq<&[T; N]> for GrowVec<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T; N]) -> bool {
        self.as_slice() == *other
    }
}

impl<T> Eq for GrowVec<T> where T: Eq {}

impl<T> PartialOrd for GrowVec<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other)
    }
}

impl<T> Ord for GrowVec<T>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other)
    }
}

impl<T> Hash for GrowVec<T>
where
    T: Hash,
{
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> core::fmt::Debug for GrowVec<T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        self.drop_live();
    }
}


#[cfg(test)]
mod proptests {
    use alloc::vec::Vec;

    use proptest::prelude::*;

    use super::GrowVec;

    proptest! {
        /// Property: len tracks pushes and capacity follows 1, 2, 4, ...
        #[test]
        fn push_doubles_capacity(values in prop::collection::vec(any::<u16>(), 0..200)) {
            let mut sut = GrowVec::new();
            for (i, &v) in values.iter().enumerate() {
                sut.push(v);
                prop_assert_eq!(sut.len(), i + 1);
                prop_assert_eq!(sut.capacity(), (i + 1).next_power_of_two());
            }
            prop_assert_eq!(sut.as_slice(), values.as_slice());
        }

        /// Property: n pushes followed by n pops empty the vector, capacity untouched
        #[test]
        fn pops_keep_capacity(values in prop::collection::vec(any::<i64>(), 0..100)) {
            let mut sut = GrowVec::<i64>::new();
            sut.extend(values.iter().copied());
            let capacity = sut.capacity();

            for &expected in values.iter().rev() {
                prop_assert_eq!(sut.pop(), Some(expected));
                prop_assert_eq!(sut.capacity(), capacity);
            }
            prop_assert!(sut.is_empty());
        }

        /// Property: mutating a clone never touches the original
        #[test]
        fn clone_is_independent(
            values in prop::collection::vec(any::<i32>(), 1..50),
            extra in any::<i32>(),
        ) {
            let base = GrowVec::from(values.clone());
            let mut sut = base.clone();
            sut[0] = sut[0].wrapping_add(1);
            sut.push(extra);

            prop_assert_eq!(base.as_slice(), values.as_slice());
        }

        /// Property: take moves every element and leaves a zero-capacity source
        #[test]
        fn take_transfers_everything(values in prop::collection::vec(any::<u8>(), 0..50)) {
            let mut base = GrowVec::from(values.clone());
            let sut = base.take();

            prop_assert_eq!(sut.as_slice(), values.as_slice());
            prop_assert_eq!(base.len(), 0);
            prop_assert_eq!(base.capacity(), 0);
        }

        /// Property: erase removes exactly one element and preserves order
        #[test]
        fn erase_preserves_order(
            values in prop::collection::vec(any::<u32>(), 1..64),
            seed in any::<prop::sample::Index>(),
        ) {
            let index = seed.index(values.len());
            let mut sut = GrowVec::from(values.clone());

            let mut earlier = Vec::with_capacity(index);
            let mut pos = sut.begin();
            for _ in 0..index {
                earlier.push(pos.post_inc());
            }
            let next = sut.erase(pos).unwrap();

            for (i, cursor) in earlier.into_iter().enumerate() {
                prop_assert_eq!(unsafe { *cursor.get() }, values[i]);
            }

            let mut expected = values;
            expected.remove(index);
            prop_assert_eq!(sut.len(), expected.len());
            prop_assert_eq!(sut.as_slice(), expected.as_slice());
            prop_assert_eq!(next.index(), index);
        }

        /// Property: a begin..end scan visits every live element once, in order
        #[test]
        fn cursor_scan_matches_slice(values in prop::collection::vec(any::<i16>(), 0..64)) {
            let sut: GrowVec<i16> = values.iter().copied().collect();

            let mut seen = Vec::new();
            let mut it = sut.cbegin();
            while it != sut.cend() {
                seen.push(unsafe { *it.get() });
                it.inc();
            }

            prop_assert_eq!(seen.len(), sut.len());
            prop_assert_eq!(seen, values);
        }
    }
}
