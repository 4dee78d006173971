//! Untyped slot storage backing a [`GrowVec`](crate::GrowVec).
//!
//! `RawBuf` knows how many slots it owns but nothing about which of them are
//! initialized; the owner tracks that and is responsible for dropping live
//! values before the buffer goes away.

use alloc::alloc::{alloc, dealloc, handle_alloc_error};
use core::alloc::Layout;
use core::marker::PhantomData;
use core::ptr::{self, NonNull};

use crate::error::{Error, Result};

/// Slots allocated by a default-constructed container.
pub(crate) const INITIAL_CAPACITY: usize = 1;

/// Factor applied to the capacity whenever a push finds the buffer full.
pub(crate) const GROWTH_FACTOR: usize = 2;

/// Owns `cap` slots of `T`; none of them are tracked as initialized.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: the buffer is uniquely owned, so it is as thread-safe as `T`.
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// A buffer with no allocation and zero capacity.
    pub(crate) const fn dangling() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates exactly `cap` slots, aborting on allocation failure.
    pub(crate) fn with_capacity(cap: usize) -> Self {
        let mut buf = Self::dangling();
        if cap > 0 {
            buf.grow_to(0, cap);
        }
        buf
    }

    pub(crate) const fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    pub(crate) const fn non_null(&self) -> NonNull<T> {
        self.ptr
    }

    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    /// Capacity to grow to when a push finds the buffer full.
    pub(crate) fn next_capacity(&self) -> usize {
        if self.cap == 0 {
            return INITIAL_CAPACITY;
        }

        self.cap
            .checked_mul(GROWTH_FACTOR)
            .unwrap_or_else(|| capacity_overflow())
    }

    /// Leaves `self` dangling and returns the previous storage.
    pub(crate) fn take(&mut self) -> Self {
        core::mem::replace(self, Self::dangling())
    }

    /// Moves the first `len` slots into a fresh allocation of `new_cap` slots.
    ///
    /// Panics on capacity overflow and aborts through
    /// [`handle_alloc_error`] if the allocator fails.
    pub(crate) fn grow_to(&mut self, len: usize, new_cap: usize) {
        let layout = Layout::array::<T>(new_cap).unwrap_or_else(|_| capacity_overflow());
        match allocate(layout) {
            // SAFETY: `new` is a fresh allocation able to hold `new_cap` slots.
            Some(new) => unsafe { self.relocate(new, len, new_cap) },
            None => handle_alloc_error(layout),
        }
    }

    /// Fallible counterpart of [`RawBuf::grow_to`]. On error the buffer is
    /// left untouched.
    pub(crate) fn try_grow_to(&mut self, len: usize, new_cap: usize) -> Result<()> {
        let layout = Layout::array::<T>(new_cap).map_err(|_| Error::CapacityOverflow)?;
        let new = allocate(layout).ok_or(Error::AllocFailed { capacity: new_cap })?;

        // SAFETY: `new` is a fresh allocation able to hold `new_cap` slots.
        unsafe { self.relocate(new, len, new_cap) };
        Ok(())
    }

    /// # Safety
    ///
    /// `new` must be valid for `new_cap` slots and must not overlap the
    /// current allocation; `len <= self.cap` and `len <= new_cap`.
    unsafe fn relocate(&mut self, new: NonNull<T>, len: usize, new_cap: usize) {
        debug_assert!(len <= self.cap && len <= new_cap);
        log::trace!("growing buffer from {} to {} slots", self.cap, new_cap);

        // Live values are moved bitwise; the old slots become plain memory.
        ptr::copy_nonoverlapping(self.ptr.as_ptr(), new.as_ptr(), len);
        self.release();

        self.ptr = new;
        self.cap = new_cap;
    }

    /// Frees the allocation without touching its contents.
    fn release(&mut self) {
        if self.cap == 0 || core::mem::size_of::<T>() == 0 {
            return;
        }

        // SAFETY: the same layout was validated by `Layout::array` when the
        // buffer was allocated.
        unsafe {
            let layout = Layout::from_size_align_unchecked(
                core::mem::size_of::<T>() * self.cap,
                core::mem::align_of::<T>(),
            );
            dealloc(self.ptr.as_ptr().cast(), layout);
        }
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        self.release();
    }
}

fn allocate<T>(layout: Layout) -> Option<NonNull<T>> {
    if layout.size() == 0 {
        return Some(NonNull::dangling());
    }

    // SAFETY: `layout` has a non-zero size.
    NonNull::new(unsafe { alloc(layout) }.cast())
}

#[cold]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}
