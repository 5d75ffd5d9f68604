//! Error types for index-addressed operations.
//!
//! Lookups by value never fail: an absent element is reported through
//! `Option` or `bool`. Only operations that address a slot by position can
//! fail, and they fail before either internal structure is touched.

/// Represents errors that can occur when addressing an ordered set by index.
///
/// # Examples
///
/// ```rust
/// use ordered_set::{OrderedSet, OrderedSetError};
///
/// let mut set: OrderedSet<char> = ['a', 'b'].into();
/// assert_eq!(
///     set.remove_at(5),
///     Err(OrderedSetError::OutOfRange { index: 5, len: 2 })
/// );
/// assert_eq!(
///     OrderedSetError::OutOfRange { index: 5, len: 2 }.to_string(),
///     "index 5 is out of range for ordered set of length 2"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderedSetError {
    /// The index lies outside the bounds accepted by the operation.
    #[error("index {index} is out of range for ordered set of length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the set at the time of the call.
        len: usize,
    },
}

impl OrderedSetError {
    /// Accepts `index` when it addresses an existing slot (`index < len`).
    #[inline]
    pub(crate) const fn check_slot(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::OutOfRange { index, len })
        }
    }

    /// Accepts `index` when it is a valid insertion point (`index <= len`).
    #[inline]
    pub(crate) const fn check_insertion_point(index: usize, len: usize) -> Result<(), Self> {
        if index <= len {
            Ok(())
        } else {
            Err(Self::OutOfRange { index, len })
        }
    }
}
