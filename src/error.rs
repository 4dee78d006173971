//! Error conditions surfaced by [`GrowVec`](crate::GrowVec).

use core::fmt;

/// Result type returned by the fallible operations of this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors that can occur while accessing or mutating a [`GrowVec`](crate::GrowVec).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// Checked access past the last live element.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// `front`/`back` on a container with no live elements.
    Empty,
    /// `erase` was given the end cursor, a cursor of another container, a
    /// cursor taken before the last reallocation or `clear`, or was called
    /// on an empty container.
    InvalidCursor,
    /// The requested capacity exceeds `isize::MAX` bytes.
    CapacityOverflow,
    /// The global allocator could not satisfy the request.
    AllocFailed {
        /// Number of slots requested.
        capacity: usize,
    },
}

impl Error {
    /// Returns `true` for the out-of-range family: a bad index, or
    /// `front`/`back` on an empty container.
    ///
    /// ```
    /// use grow_vec::{GrowVec, Error};
    ///
    /// let v = GrowVec::<u8>::new();
    /// assert!(v.at(3).unwrap_err().is_out_of_range());
    /// assert!(v.front().unwrap_err().is_out_of_range());
    /// assert!(!Error::InvalidCursor.is_out_of_range());
    /// ```
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::Empty)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::Empty => f.write_str("container is empty"),
            Self::InvalidCursor => f.write_str("invalid cursor"),
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::AllocFailed { capacity } => {
                write!(f, "memory allocation failed for {capacity} slots")
            }
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::Error;

    #[test]
    fn test_display_out_of_range() {
        let sut = Error::OutOfRange { index: 10, len: 0 };
        assert_eq!(sut.to_string(), "index 10 out of range for length 0");
    }

    #[test]
    fn test_display_other_variants() {
        assert_eq!(Error::Empty.to_string(), "container is empty");
        assert_eq!(Error::InvalidCursor.to_string(), "invalid cursor");
        assert_eq!(Error::CapacityOverflow.to_string(), "capacity overflow");
        assert_eq!(
            Error::AllocFailed { capacity: 8 }.to_string(),
            "memory allocation failed for 8 slots"
        );
    }

    #[test]
    fn test_out_of_range_family() {
        assert!(Error::OutOfRange { index: 0, len: 0 }.is_out_of_range());
        assert!(Error::Empty.is_out_of_range());
        assert!(!Error::InvalidCursor.is_out_of_range());
        assert!(!Error::CapacityOverflow.is_out_of_range());
        assert!(!Error::AllocFailed { capacity: 1 }.is_out_of_range());
    }
}
