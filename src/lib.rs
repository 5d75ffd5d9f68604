//! # ordered-set
//!
//! Ordered, duplicate-free collections that behave like a resizable sequence.
//!
//! ## Overview
//!
//! This library provides sets that keep their elements in a well-defined
//! order and let callers address them by position:
//!
//! - **`OrderedSet`**: insertion order, O(1) membership and position queries
//!   through a hash index kept in lockstep with the sequence
//! - **`SortedOrderedSet`**: comparator order, O(log n) queries through binary
//!   search and O(1) minimum and maximum
//!
//! Typical uses are a navigation stack without repeats or a deduplicated list
//! whose order matters.
//!
//! ## Feature Flags
//!
//! - `sorted`: `SortedOrderedSet` (enabled by default)
//! - `arc`: share storage through `Arc` so sets are `Send + Sync`
//! - `fxhash`: use `rustc_hash::FxBuildHasher` as the default hash builder
//! - `ahash`: use `ahash::RandomState` as the default hash builder
//!
//! ## Example
//!
//! ```rust
//! use ordered_set::prelude::*;
//!
//! let mut stack = ordered_set!["inbox", "drafts", "inbox", "sent"];
//! assert_eq!(stack.as_slice(), &["inbox", "drafts", "sent"]);
//!
//! stack.append("drafts");
//! assert_eq!(stack.last(), Some(&"drafts"));
//! assert_eq!(stack.to_string(), "OrderedSet (3 object(s)): [inbox, sent, drafts]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the collection types, the error type and the `ordered_set!`
/// macro.
///
/// # Usage
///
/// ```rust
/// use ordered_set::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collections::*;
    pub use crate::error::OrderedSetError;
    pub use crate::ordered_set;
}

pub mod collections;
pub mod error;

pub use collections::OrderedSet;
#[cfg(feature = "sorted")]
pub use collections::SortedOrderedSet;
pub use error::OrderedSetError;

/// Creates an [`OrderedSet`] from a list of elements.
///
/// Repeated elements are dropped; the first occurrence decides the position.
///
/// # Examples
///
/// ```rust
/// use ordered_set::ordered_set;
///
/// let set = ordered_set!['a', 'b', 'b', 'd'];
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.as_slice(), &['a', 'b', 'd']);
///
/// let empty: ordered_set::OrderedSet<i32> = ordered_set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! ordered_set {
    () => {
        $crate::collections::OrderedSet::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::collections::OrderedSet::from([$($element),+])
    };
}
