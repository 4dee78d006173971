#![cfg_attr(not(test), no_std)]

//! A **heap-allocated**, **growable**, **contiguous** array with explicit
//! storage management, `no_std` compatible.
//!
//! `GrowVec<T>` owns a raw buffer of `capacity` slots of which the first
//! `len` hold live values. Appending to a full buffer doubles its capacity,
//! starting from a single slot, so `push` is amortized O(1).
//!
//! Positions can be held as raw [`Cursor`]s / [`CursorMut`]s: cheap,
//! `Copy`, lifetime-free handles that compare by slot and are invalidated
//! by any operation that reallocates or shifts storage.
//!
//! Checked access reports failures as [`Error`] values instead of panicking.
//!
//! ```rust
//! use grow_vec::{grow_vec, Error, GrowVec};
//!
//! let mut v = GrowVec::new();
//! v.push(10);
//! v.push(20);
//! assert_eq!((v.len(), v.capacity()), (2, 2));
//!
//! let w = grow_vec![3.14, 2.71, 1.41];
//! assert_eq!(w.len(), 3);
//! assert_eq!(w[0], 3.14);
//!
//! let mut it = w.cbegin();
//! let mut sum: f64 = 0.0;
//! while it != w.cend() {
//!     sum += unsafe { *it.get() };
//!     it.inc();
//! }
//! assert!((sum - 7.26).abs() < 1e-9);
//!
//! assert_eq!(w.at(10), Err(Error::OutOfRange { index: 10, len: 3 }));
//! ```

extern crate alloc;

mod cursor;
mod error;
mod iter;
mod raw;
mod vec;

pub use cursor::{Cursor, CursorMut};
pub use error::{Error, Result};
pub use iter::IntoIter;
pub use vec::GrowVec;

/// Creates a [`GrowVec`] from a list of elements, like `vec!`.
///
/// - `grow_vec![]` is [`GrowVec::new`] (one slot, no elements).
/// - `grow_vec![a, b, c]` has length and capacity equal to the list length.
/// - `grow_vec![value; n]` is [`GrowVec::from_elem`].
///
/// ```
/// use grow_vec::grow_vec;
///
/// let v = grow_vec![1, 2, 3];
/// assert_eq!(v.capacity(), 3);
///
/// let z = grow_vec![0u8; 4];
/// assert_eq!(z, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! grow_vec {
    () => {
        $crate::GrowVec::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::GrowVec::from_elem($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::GrowVec::from([$($x),+])
    };
}
