//! Ordered, duplicate-free collections.
//!
//! This module provides two containers that behave like a resizable sequence
//! while guaranteeing that every element appears at most once:
//!
//! - [`OrderedSet`]: insertion-ordered set backed by a `Vec` and a hash index
//!   mapping every element to its position
//! - [`SortedOrderedSet`]: comparator-ordered set backed by a sorted `Vec`
//!   searched with binary search
//!
//! # Value Semantics
//!
//! Both containers share their storage between clones and copy it on the
//! first mutation of a shared instance, so cloning is O(1) while every clone
//! behaves as an independent value.
//!
//! # Examples
//!
//! ## `OrderedSet`
//!
//! ```rust
//! use ordered_set::collections::OrderedSet;
//!
//! let mut history: OrderedSet<&str> = ["home", "search", "home", "item"].into();
//! assert_eq!(history.as_slice(), &["home", "search", "item"]);
//!
//! // Revisiting a page moves it to the top of the stack
//! history.append("search");
//! assert_eq!(history.as_slice(), &["home", "item", "search"]);
//! assert_eq!(history.index_of("item"), Some(1));
//! ```
//!
//! ## `SortedOrderedSet`
//!
//! ```rust
//! use ordered_set::collections::SortedOrderedSet;
//!
//! let mut scores = SortedOrderedSet::from_unsorted([30, 10, 20, 10], |a: &i32, b: &i32| b.cmp(a));
//! assert_eq!(scores.as_slice(), &[30, 20, 10]);
//!
//! assert_eq!(scores.insert(25), (1, true));
//! assert_eq!(scores.insert(10), (3, false));
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type used for copy-on-write storage.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Hash Builder Type Alias
// =============================================================================

/// Hash builder used by [`OrderedSet`] when none is specified.
///
/// Selected at compile time:
///
/// - `fxhash` feature: `rustc_hash::FxBuildHasher`
/// - `ahash` feature (without `fxhash`): `ahash::RandomState`
/// - otherwise: `std::collections::hash_map::RandomState`
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used by [`OrderedSet`] when none is specified.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hash builder used by [`OrderedSet`] when none is specified.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

/// Returns a mutable reference to the value behind `shared`, cloning it first
/// when other handles still point at it.
pub(crate) fn make_unique<T: Clone>(shared: &mut ReferenceCounter<T>) -> &mut T {
    let handles = ReferenceCounter::strong_count(shared);
    if handles > 1 {
        log::trace!("detaching storage shared by {handles} handles");
    }
    ReferenceCounter::make_mut(shared)
}

mod ordered_set;
#[cfg(feature = "sorted")]
mod sorted_ordered_set;

pub use ordered_set::OrderedSet;
pub use ordered_set::OrderedSetIntoIterator;
pub use ordered_set::OrderedSetIterator;
#[cfg(feature = "sorted")]
pub use sorted_ordered_set::Comparator;
#[cfg(feature = "sorted")]
pub use sorted_ordered_set::NaturalOrder;
#[cfg(feature = "sorted")]
pub use sorted_ordered_set::SortedOrderedSet;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::{ReferenceCounter, make_unique};
    use rstest::rstest;

    #[rstest]
    fn test_make_unique_on_sole_handle_keeps_allocation() {
        let mut reference_counter: ReferenceCounter<Vec<i32>> = ReferenceCounter::new(vec![1]);
        let before = ReferenceCounter::as_ptr(&reference_counter);
        make_unique(&mut reference_counter).push(2);
        assert_eq!(ReferenceCounter::as_ptr(&reference_counter), before);
        assert_eq!(*reference_counter, vec![1, 2]);
    }

    #[rstest]
    fn test_make_unique_on_shared_handle_detaches() {
        let original: ReferenceCounter<Vec<i32>> = ReferenceCounter::new(vec![1]);
        let mut copy = original.clone();
        make_unique(&mut copy).push(2);
        assert_eq!(*original, vec![1]);
        assert_eq!(*copy, vec![1, 2]);
        assert_eq!(ReferenceCounter::strong_count(&original), 1);
    }
}
