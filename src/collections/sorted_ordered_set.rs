//! Comparator-ordered set searched with binary search.
//!
//! This module provides [`SortedOrderedSet`], the sorted counterpart of
//! [`OrderedSet`](super::OrderedSet). Elements are kept in a single `Vec`
//! ordered by a [`Comparator`] chosen at construction time, so membership
//! and position queries are binary searches and the smallest and largest
//! elements are available in O(1).
//!
//! # Time Complexity
//!
//! | Operation                   | Complexity   |
//! |-----------------------------|--------------|
//! | `contains`, `index_of`      | O(log n)     |
//! | `insert`, `remove`          | O(n)         |
//! | `first`, `last`, `min`, `max` | O(1)       |
//! | `from_sorted`               | O(n)         |
//! | `from_unsorted`             | O(n log n)   |
//!
//! # Examples
//!
//! ```rust
//! use ordered_set::collections::SortedOrderedSet;
//!
//! let mut set = SortedOrderedSet::from_unsorted([5, 1, 3, 1], ordered_set::collections::NaturalOrder);
//! assert_eq!(set.as_slice(), &[1, 3, 5]);
//!
//! assert_eq!(set.insert(4), (2, true));
//! assert_eq!(set.insert(3), (1, false));
//! assert_eq!(set.max(), Some(&5));
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

use super::{OrderedSetIntoIterator, OrderedSetIterator, ReferenceCounter, make_unique};
use crate::error::OrderedSetError;

/// A total order over `T`, fixed for the lifetime of a [`SortedOrderedSet`].
///
/// Implemented by [`NaturalOrder`] and by every `Fn(&T, &T) -> Ordering`
/// closure.
///
/// # Examples
///
/// ```rust
/// use ordered_set::collections::{Comparator, NaturalOrder};
/// use std::cmp::Ordering;
///
/// assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
///
/// let by_length = |left: &&str, right: &&str| left.len().cmp(&right.len());
/// assert_eq!(by_length.compare(&"abc", &"de"), Ordering::Greater);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares two elements.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

/// Orders elements by their [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// An ordered collection of unique elements kept sorted by a comparator.
///
/// Cloning shares the underlying storage; the first mutation of either copy
/// detaches it.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Clone`.
/// * `C` - The [`Comparator`] defining the order.
///
/// # Examples
///
/// ```rust
/// use ordered_set::collections::SortedOrderedSet;
///
/// let mut words: SortedOrderedSet<String, _> =
///     SortedOrderedSet::with_comparator(|left: &String, right: &String| {
///         left.len().cmp(&right.len())
///     });
/// words.insert("three".to_string());
/// words.insert("a".to_string());
/// words.insert("to".to_string());
///
/// // "be" has the same length as "to", so it is considered present
/// assert_eq!(words.insert("be".to_string()), (1, false));
/// assert_eq!(words.to_string(), "SortedOrderedSet (3 object(s)): [a, to, three]");
/// ```
#[derive(Clone)]
pub struct SortedOrderedSet<T, C = NaturalOrder> {
    elements: ReferenceCounter<Vec<T>>,
    comparator: C,
}

impl<T: Clone + Ord> SortedOrderedSet<T> {
    /// Creates a new empty set ordered by `Ord`.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T: Clone, C: Comparator<T>> SortedOrderedSet<T, C> {
    /// Creates a new empty set ordered by `comparator`.
    #[inline]
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            elements: ReferenceCounter::new(Vec::new()),
            comparator,
        }
    }

    /// Creates a set from elements already ordered by `comparator`.
    ///
    /// # Preconditions
    ///
    /// `elements` must be in non-decreasing order under `comparator`. The
    /// input is taken as given: it is neither sorted nor deduplicated.
    ///
    /// In debug builds, the order is validated with `debug_assert!`.
    /// In release builds, invalid input yields an incorrect order and later
    /// searches return unspecified positions (logic error, not memory
    /// unsafety).
    ///
    /// # Complexity
    ///
    /// O(1) in release builds, O(n) with debug assertions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::collections::{NaturalOrder, SortedOrderedSet};
    ///
    /// let set = SortedOrderedSet::from_sorted(vec![2, 4, 6], NaturalOrder);
    /// assert_eq!(set.index_of(&4), Some(1));
    /// ```
    #[must_use]
    pub fn from_sorted(elements: Vec<T>, comparator: C) -> Self {
        debug_assert!(
            is_non_decreasing(&elements, &comparator),
            "{}",
            SORTED_INVARIANT_PANIC_MESSAGE
        );
        Self {
            elements: ReferenceCounter::new(elements),
            comparator,
        }
    }

    /// Creates a set from elements in any order.
    ///
    /// The elements are stably sorted by `comparator`; of several equal
    /// elements only the first one in `elements` is kept.
    ///
    /// # Complexity
    ///
    /// O(n log n).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::collections::SortedOrderedSet;
    ///
    /// let set = SortedOrderedSet::from_unsorted(
    ///     [(2, 'a'), (1, 'b'), (2, 'c')],
    ///     |left: &(i32, char), right: &(i32, char)| left.0.cmp(&right.0),
    /// );
    /// assert_eq!(set.as_slice(), &[(1, 'b'), (2, 'a')]);
    /// ```
    #[must_use]
    pub fn from_unsorted<I>(elements: I, comparator: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut elements: Vec<T> = elements.into_iter().collect();
        log::trace!("sorting {} elements for a sorted ordered set", elements.len());
        elements.sort_by(|left, right| comparator.compare(left, right));
        elements.dedup_by(|later, earlier| comparator.compare(earlier, later) == Ordering::Equal);
        Self::from_sorted(elements, comparator)
    }

    /// Returns the comparator ordering this set.
    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    #[inline]
    fn elements_mut(&mut self) -> &mut Vec<T> {
        make_unique(&mut self.elements)
    }

    /// Returns `Ok` with the position of the first element equal to
    /// `element`, or `Err` with the position where it would be inserted.
    fn search(&self, element: &T) -> Result<usize, usize> {
        let position = self
            .elements
            .partition_point(|probe| self.comparator.compare(probe, element) == Ordering::Less);
        match self.elements.get(position) {
            Some(found) if self.comparator.compare(found, element) == Ordering::Equal => {
                Ok(position)
            }
            _ => Err(position),
        }
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if an element equal to `element` under the comparator
    /// is present.
    ///
    /// # Complexity
    ///
    /// O(log n).
    #[inline]
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.search(element).is_ok()
    }

    /// Returns the position of `element`, or `None` if it is not present.
    ///
    /// # Complexity
    ///
    /// O(log n).
    #[inline]
    #[must_use]
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.search(element).ok()
    }

    /// Returns the smallest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the largest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the smallest element in O(1). Same as [`first`](Self::first).
    #[inline]
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        self.first()
    }

    /// Returns the largest element in O(1). Same as [`last`](Self::last).
    #[inline]
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        self.last()
    }

    /// Returns the element at `index`, or `None` if `index >= len()`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the elements in sorted order as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns a `Vec` containing clones of the elements in sorted order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.to_vec()
    }

    /// Consumes the set and returns its elements in sorted order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        ReferenceCounter::try_unwrap(self.elements).unwrap_or_else(|shared| shared.to_vec())
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Inserts `element` at the position that keeps the set sorted.
    ///
    /// Returns the position where the element now lives together with
    /// `true`, or, if an equal element was already present, the position of
    /// that element together with `false`. When the set holds a run of equal
    /// elements, the position of the first one is returned.
    ///
    /// # Complexity
    ///
    /// O(log n) to search, O(n) to shift the following elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::collections::SortedOrderedSet;
    ///
    /// let mut set: SortedOrderedSet<i32> = [10, 30].into();
    /// assert_eq!(set.insert(20), (1, true));
    /// assert_eq!(set.insert(30), (2, false));
    /// assert_eq!(set.as_slice(), &[10, 20, 30]);
    /// ```
    pub fn insert(&mut self, element: T) -> (usize, bool) {
        match self.search(&element) {
            Ok(position) => (position, false),
            Err(position) => {
                self.elements_mut().insert(position, element);
                (position, true)
            }
        }
    }

    /// Inserts each element of `elements` in turn and returns the positions
    /// of the genuine insertions, each as of the moment it was made.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::collections::SortedOrderedSet;
    ///
    /// let mut set: SortedOrderedSet<i32> = [2, 4].into();
    /// assert_eq!(set.insert_all([3, 4, 1]), vec![1, 0]);
    /// assert_eq!(set.as_slice(), &[1, 2, 3, 4]);
    /// ```
    pub fn insert_all<I>(&mut self, elements: I) -> Vec<usize>
    where
        I: IntoIterator<Item = T>,
    {
        elements
            .into_iter()
            .filter_map(|element| match self.insert(element) {
                (position, true) => Some(position),
                (_, false) => None,
            })
            .collect()
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Removes `element` and returns the position it occupied, or `None` if
    /// it was not present.
    pub fn remove(&mut self, element: &T) -> Option<usize> {
        let position = self.search(element).ok()?;
        self.elements_mut().remove(position);
        Some(position)
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::OutOfRange`] if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, OrderedSetError> {
        OrderedSetError::check_slot(index, self.len())?;
        Ok(self.elements_mut().remove(index))
    }

    /// Removes every element and releases the storage.
    pub fn clear(&mut self) {
        log::debug!("clearing sorted ordered set of {} elements", self.len());
        self.elements = ReferenceCounter::new(Vec::new());
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    pub fn retain<P>(&mut self, predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.elements_mut().retain(predicate);
    }

    // =========================================================================
    // Set Algebra
    // =========================================================================

    /// Returns `true` if any element of `other` is in the set.
    pub fn intersects<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        other
            .into_iter()
            .any(|element| self.contains(element.borrow()))
    }

    /// Returns `true` if every element of the set occurs in `other`.
    ///
    /// A run of equal elements kept by [`from_sorted`](Self::from_sorted) is
    /// covered by a single equal element of `other`.
    pub fn is_subset_of<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let mut remaining = self.len();
        if remaining == 0 {
            return true;
        }
        let mut seen = vec![false; remaining];
        for element in other {
            let element = element.borrow();
            if let Ok(start) = self.search(element)
                && !std::mem::replace(&mut seen[start], true)
            {
                remaining -= self.equal_run_len(start, element);
                if remaining == 0 {
                    return true;
                }
            }
        }
        false
    }

    /// Returns the number of elements from `start` onwards that compare
    /// equal to `element`.
    fn equal_run_len(&self, start: usize, element: &T) -> usize {
        self.elements[start..]
            .partition_point(|probe| self.comparator.compare(probe, element) == Ordering::Equal)
    }

    /// Returns an iterator over the elements in sorted order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> OrderedSetIterator<'_, T> {
        OrderedSetIterator::new(&self.elements)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: Clone, C: Comparator<T> + Default> Default for SortedOrderedSet<T, C> {
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Clone + Ord> FromIterator<T> for SortedOrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_unsorted(iter, NaturalOrder)
    }
}

impl<T: Clone + Ord, const N: usize> From<[T; N]> for SortedOrderedSet<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_unsorted(elements, NaturalOrder)
    }
}

impl<T: Clone, C: Comparator<T>> Extend<T> for SortedOrderedSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Clone, C: Comparator<T>> IntoIterator for SortedOrderedSet<T, C> {
    type Item = T;
    type IntoIter = OrderedSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        OrderedSetIntoIterator::new(self.into_vec())
    }
}

impl<'a, T: Clone, C: Comparator<T>> IntoIterator for &'a SortedOrderedSet<T, C> {
    type Item = &'a T;
    type IntoIter = OrderedSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone, C: Comparator<T>> Index<usize> for SortedOrderedSet<T, C> {
    type Output = T;

    /// # Panics
    ///
    /// Panics with [`OrderedSetError::OutOfRange`] if `index >= len()`.
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Some(element) => element,
            None => panic!(
                "{}",
                OrderedSetError::OutOfRange {
                    index,
                    len: self.len(),
                }
            ),
        }
    }
}

/// Two sorted sets are equal when they hold equal elements at the same
/// positions; comparators are not compared.
impl<T: PartialEq, C> PartialEq for SortedOrderedSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.elements, &other.elements) || self.elements == other.elements
    }
}

impl<T: Eq, C> Eq for SortedOrderedSet<T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for SortedOrderedSet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display, C> fmt::Display for SortedOrderedSet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "SortedOrderedSet ({} object(s)): [", self.elements.len())?;
        for (position, element) in self.elements.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

/// Message constant for panic when `from_sorted` receives unordered input.
const SORTED_INVARIANT_PANIC_MESSAGE: &str =
    "from_sorted requires elements in non-decreasing order under the comparator";

fn is_non_decreasing<T, C: Comparator<T>>(elements: &[T], comparator: &C) -> bool {
    elements
        .windows(2)
        .all(|window| comparator.compare(&window[0], &window[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn linear_lower_bound<T, C: Comparator<T>>(elements: &[T], element: &T, comparator: &C) -> usize {
        elements
            .iter()
            .position(|probe| comparator.compare(probe, element) != Ordering::Less)
            .unwrap_or(elements.len())
    }

    #[rstest]
    fn test_new_creates_empty() {
        let set: SortedOrderedSet<i32> = SortedOrderedSet::new();
        assert!(set.is_empty());
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[rstest]
    fn test_from_unsorted_keeps_first_of_equals() {
        let set = SortedOrderedSet::from_unsorted(["bb", "a", "cc", "d"], |left: &&str, right: &&str| {
            left.len().cmp(&right.len())
        });
        assert_eq!(set.as_slice(), &["a", "bb"]);
    }

    #[rstest]
    fn test_insert_into_run_of_equal_values_matches_linear_scan() {
        let repeated = vec![7; 100_000];
        let mut set = SortedOrderedSet::from_sorted(repeated.clone(), NaturalOrder);

        for probe in [6, 7, 8] {
            let expected = linear_lower_bound(&repeated, &probe, &NaturalOrder);
            let (position, _) = set.clone().insert(probe);
            assert_eq!(position, expected, "probe {probe}");
        }

        assert_eq!(set.insert(7), (0, false));
        assert_eq!(set.insert(8), (100_000, true));
        assert_eq!(set.insert(6), (0, true));
        assert_eq!(set.len(), 100_002);
    }

    #[rstest]
    fn test_insert_all_reports_only_new_positions() {
        let mut set = SortedOrderedSet::from_sorted(vec![10, 20], NaturalOrder);
        assert_eq!(set.insert_all([15, 10, 5, 15]), vec![1, 0]);
        assert_eq!(set.as_slice(), &[5, 10, 15, 20]);
    }

    #[rstest]
    fn test_remove_and_remove_at() {
        let mut set: SortedOrderedSet<i32> = [3, 1, 2].into();
        assert_eq!(set.remove(&2), Some(1));
        assert_eq!(set.remove(&2), None);
        assert_eq!(set.remove_at(1), Ok(3));
        assert_eq!(
            set.remove_at(1),
            Err(OrderedSetError::OutOfRange { index: 1, len: 1 })
        );
        assert_eq!(set.as_slice(), &[1]);
    }

    #[rstest]
    fn test_descending_comparator() {
        let mut set: SortedOrderedSet<i32, _> =
            SortedOrderedSet::with_comparator(|left: &i32, right: &i32| right.cmp(left));
        set.extend([1, 5, 3]);
        assert_eq!(set.as_slice(), &[5, 3, 1]);
        assert_eq!(set.min(), Some(&5));
        assert_eq!(set.index_of(&1), Some(2));
    }

    #[rstest]
    fn test_clone_is_independent() {
        let original: SortedOrderedSet<i32> = [1, 2, 3].into();
        let mut copy = original.clone();
        copy.insert(4);
        copy.remove(&1);
        assert_eq!(original.as_slice(), &[1, 2, 3]);
        assert_eq!(copy.as_slice(), &[2, 3, 4]);
    }

    #[rstest]
    fn test_subset_and_intersects() {
        let set: SortedOrderedSet<i32> = [1, 2, 3].into();
        assert!(set.is_subset_of([3, 3, 2, 1, 0]));
        assert!(!set.is_subset_of([1, 2]));
        assert!(set.intersects([9, 2]));
        assert!(!set.intersects(Vec::<i32>::new()));
    }

    #[rstest]
    #[case(vec![7, 7, 7], vec![7], true)]
    #[case(vec![1, 7, 7, 9], vec![9, 7, 1], true)]
    #[case(vec![1, 7, 7, 9], vec![7, 7, 9], false)]
    #[case(vec![5, 5], vec![], false)]
    fn test_subset_covers_runs_of_equal_values(
        #[case] elements: Vec<i32>,
        #[case] other: Vec<i32>,
        #[case] expected: bool,
    ) {
        let set = SortedOrderedSet::from_sorted(elements, NaturalOrder);
        assert_eq!(set.is_subset_of(&other), expected);
    }

    #[rstest]
    fn test_display() {
        let set: SortedOrderedSet<i32> = [2, 1].into();
        assert_eq!(set.to_string(), "SortedOrderedSet (2 object(s)): [1, 2]");
    }

    #[rstest]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "from_sorted requires elements in non-decreasing order")]
    fn test_from_sorted_rejects_unordered_input_in_debug() {
        let _set = SortedOrderedSet::from_sorted(vec![2, 1], NaturalOrder);
    }
}
