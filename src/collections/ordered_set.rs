//! Insertion-ordered set with a hash position index.
//!
//! This module provides [`OrderedSet`], a collection that behaves like a
//! `Vec` (indexable, insertable, iterable in a well-defined order) while
//! guaranteeing that every element appears at most once.
//!
//! # Overview
//!
//! `OrderedSet` keeps two structures in lockstep:
//!
//! - a **sequence store** (`Vec<T>`) that defines iteration order and serves
//!   index-addressed access
//! - a **position index** (`HashMap<T, usize, S>`) mapping every element to its
//!   current slot, which makes membership and position queries O(1)
//!
//! For every element `e`, `elements[positions[e]] == e`, and the positions
//! of the `n` elements are exactly `0..n`. Every public operation preserves
//! this.
//!
//! # Time Complexity
//!
//! | Operation              | Complexity            |
//! |------------------------|-----------------------|
//! | `len`, `is_empty`      | O(1)                  |
//! | `contains`, `index_of` | O(1) average          |
//! | `get`, `first`, `last` | O(1)                  |
//! | `append`               | O(1) amortized, O(n) when the element moves |
//! | `insert_at`            | O(n)                  |
//! | `insert_all_at`        | O(n + m)              |
//! | `remove`, `remove_at`  | O(n)                  |
//! | `swap`                 | O(1)                  |
//! | `move_to`, `move_at`   | O(\|to - from\|)      |
//! | `clone`                | O(1), storage is copied on first write |
//!
//! # Examples
//!
//! ```rust
//! use ordered_set::collections::OrderedSet;
//!
//! let mut set: OrderedSet<char> = "abbd".chars().collect();
//! assert_eq!(set.as_slice(), &['a', 'b', 'd']);
//!
//! set.insert_at('c', 2).unwrap();
//! assert_eq!(set.as_slice(), &['a', 'b', 'c', 'd']);
//!
//! set.move_to(&'d', 0).unwrap();
//! assert_eq!(set.as_slice(), &['d', 'a', 'b', 'c']);
//!
//! assert_eq!(set.remove(&'a'), Some(1));
//! assert_eq!(set.index_of(&'c'), Some(2));
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::ops::{Add, AddAssign, Index, Sub, SubAssign};

use smallvec::SmallVec;

use super::{DefaultHashBuilder, ReferenceCounter, make_unique};
use crate::error::OrderedSetError;

/// Number of incoming elements `insert_all_at` buffers without allocating.
const INLINE_BATCH: usize = 8;

/// The sequence store and the position index, always mutated together.
#[derive(Clone)]
struct Storage<T, S> {
    elements: Vec<T>,
    positions: HashMap<T, usize, S>,
}

impl<T: Clone + Eq + Hash, S: BuildHasher> Storage<T, S> {
    fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Appends an element known to be absent and returns its position.
    fn push(&mut self, element: T) -> usize {
        let position = self.elements.len();
        self.positions.insert(element.clone(), position);
        self.elements.push(element);
        position
    }

    /// Deletes the slot at `position`; every later element moves down by one.
    fn remove_slot(&mut self, position: usize) -> T {
        let element = self.elements.remove(position);
        self.positions.remove(&element);
        self.reindex_from(position);
        element
    }

    fn swap_slots(&mut self, first: usize, second: usize) {
        self.elements.swap(first, second);
        self.reindex(first);
        self.reindex(second);
    }

    /// Walks the element at `from` to `to` one adjacent swap at a time, so
    /// only the slots in between shift.
    fn move_slot(&mut self, from: usize, to: usize) {
        if from < to {
            for position in from..to {
                self.swap_slots(position, position + 1);
            }
        } else {
            for position in (to..from).rev() {
                self.swap_slots(position, position + 1);
            }
        }
    }

    fn reindex(&mut self, position: usize) {
        if let Some(slot) = self.positions.get_mut(&self.elements[position]) {
            *slot = position;
        }
    }

    fn reindex_from(&mut self, start: usize) {
        for (position, element) in self.elements.iter().enumerate().skip(start) {
            if let Some(slot) = self.positions.get_mut(element) {
                *slot = position;
            }
        }
    }
}

/// An ordered collection of unique elements with O(1) membership and
/// position queries.
///
/// Elements keep the order in which they were placed, can be addressed by
/// position like a `Vec`, and can be looked up by value like a `HashSet`.
///
/// Cloning shares the underlying storage; the first mutation of either
/// copy detaches it, so clones never observe each other's changes.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Clone`, `Eq` and `Hash`.
/// * `S` - The hash builder of the position index.
///
/// # Examples
///
/// ```rust
/// use ordered_set::collections::OrderedSet;
///
/// let mut set = OrderedSet::new();
/// set.append("a");
/// set.append("b");
/// set.append("c");
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.index_of("b"), Some(1));
/// assert_eq!(set.to_string(), "OrderedSet (3 object(s)): [a, b, c]");
/// ```
#[derive(Clone)]
pub struct OrderedSet<T, S = DefaultHashBuilder> {
    storage: ReferenceCounter<Storage<T, S>>,
}

impl<T: Clone + Eq + Hash> OrderedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::collections::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates a new empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T, S> OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone,
{
    /// Creates a new empty set whose position index uses `hash_builder`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::collections::OrderedSet;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let mut set = OrderedSet::with_hasher(RandomState::new());
    /// set.append(1);
    /// assert!(set.contains(&1));
    /// ```
    #[inline]
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(0, hash_builder)
    }

    /// Creates a new empty set with room for at least `capacity` elements,
    /// whose position index uses `hash_builder`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            storage: ReferenceCounter::new(Storage::with_capacity_and_hasher(
                capacity,
                hash_builder,
            )),
        }
    }

    /// Returns the hash builder of the position index.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.storage.positions.hasher()
    }

    #[inline]
    fn storage_mut(&mut self) -> &mut Storage<T, S> {
        make_unique(&mut self.storage)
    }

    /// Appends `element` unless it is already present. First occurrence wins.
    fn push_if_absent(&mut self, element: T) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.storage_mut().push(element);
        true
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.positions.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.positions.is_empty()
    }

    /// Returns `true` if the set contains `element`.
    ///
    /// Borrowed forms of the element type are accepted, so an
    /// `OrderedSet<String>` can be queried with a `&str`.
    ///
    /// # Complexity
    ///
    /// O(1) average.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::collections::OrderedSet;
    ///
    /// let set: OrderedSet<String> = ["x".to_string(), "y".to_string()].into();
    /// assert!(set.contains("x"));
    /// assert!(!set.contains("z"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.storage.positions.contains_key(element)
    }

    /// Returns the position of `element`, or `None` if it is not present.
    ///
    /// # Complexity
    ///
    /// O(1) average.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::collections::OrderedSet;
    ///
    /// let set: OrderedSet<char> = ['a', 'b', 'c'].into();
    /// assert_eq!(set.index_of(&'c'), Some(2));
    /// assert_eq!(set.index_of(&'z'), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn index_of<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.storage.positions.get(element).copied()
    }

    /// Returns the element at position 0, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.storage.elements.first()
    }

    /// Returns the last element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.storage.elements.last()
    }

    /// Returns the element at `index`, or `None` if `index >= len()`.
    ///
    /// Use indexing (`set[index]`) to treat an out-of-range index as a fatal
    /// error instead.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.storage.elements.get(index)
    }

    /// Returns the elements in order as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.storage.elements
    }

    /// Returns a `Vec` containing clones of the elements in order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.storage.elements.clone()
    }

    /// Consumes the set and returns its elements in order.
    ///
    /// Does not copy when this is the only handle to the storage.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        ReferenceCounter::try_unwrap(self.storage)
            .map_or_else(|shared| shared.elements.clone(), |storage| storage.elements)
    }

    // =========================================================================
    // Indexed Assignment
    // =========================================================================

    /// Replaces the element at `index` with `value` and returns the element
    /// that occupied the slot.
    ///
    /// Since the set cannot hold `value` twice, assigning a value that is
    /// already present at another position does not overwrite: the slot at
    /// `index` is deleted instead, and the set shrinks by one. Elements after
    /// `index` move down one position to keep positions contiguous.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::OutOfRange`] if `index >= len()`. The set
    /// is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::collections::OrderedSet;
    ///
    /// let mut set: OrderedSet<char> = ['a', 'b', 'c'].into();
    /// assert_eq!(set.set(2, 'z'), Ok('c'));
    /// assert_eq!(set.as_slice(), &['a', 'b', 'z']);
    ///
    /// // 'b' already lives at index 1, so slot 0 collapses
    /// assert_eq!(set.set(0, 'b'), Ok('a'));
    /// assert_eq!(set.as_slice(), &['b', 'z']);
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<T, OrderedSetError> {
        OrderedSetError::check_slot(index, self.len())?;
        let existing = self.index_of(&value);
        let storage = self.storage_mut();
        match existing {
            Some(position) if position != index => Ok(storage.remove_slot(index)),
            _ => {
                let previous = std::mem::replace(&mut storage.elements[index], value.clone());
                storage.positions.remove(&previous);
                storage.positions.insert(value, index);
                Ok(previous)
            }
        }
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Places `element` at the end of the set.
    ///
    /// If the element is already present it is moved to the end: its old
    /// slot is removed and it is reinserted as the last element. Returns
    /// `true` if the element was not present before.
    ///
    /// # Complexity
    ///
    /// O(1) amortized for a new element, O(n) when an existing element moves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::collections::OrderedSet;
    ///
    /// let mut set: OrderedSet<char> = ['a', 'b', 'c'].into();
    /// assert!(set.append('d'));
    /// assert!(!set.append('a'));
    /// assert_eq!(set.as_slice(), &['b', 'c', 'd', 'a']);
    /// ```
    pub fn append(&mut self, element: T) -> bool {
        match self.index_of(&element) {
            Some(position) => {
                let storage = self.storage_mut();
                storage.remove_slot(position);
                storage.push(element);
                false
            }
            None => {
                self.storage_mut().push(element);
                true
            }
        }
    }

    /// Appends every element of `elements` in iteration order, applying the
    /// [`append`](Self::append) rule to each one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::collections::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = [1, 2, 3].into();
    /// set.append_all([4, 1, 4]);
    /// assert_eq!(set.as_slice(), &[2, 3, 1, 4]);
    /// ```
    pub fn append_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        for element in elements {
            self.append(element);
        }
    }

    /// Inserts `element` at `index`, shifting the elements at and after
    /// `index` one position to the right.
    ///
    /// Unlike [`append`](Self::append), an element that is already present
    /// is left where it is and nothing happens. Returns `true` if the element
    /// was inserted.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::OutOfRange`] if `index > len()`.
    ///
    /// # Complexity
    ///
    /// O(n): the element is appended and then swapped down into place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::collections::OrderedSet;
    ///
    /// let mut set: OrderedSet<char> = ['a', 'b', 'c'].into();
    /// assert_eq!(set.insert_at('d', 3), Ok(true));
    /// assert_eq!(set.insert_at('b', 0), Ok(false));
    /// assert_eq!(set.as_slice(), &['a', 'b', 'c', 'd']);
    /// ```
    pub fn insert_at(&mut self, element: T, index: usize) -> Result<bool, OrderedSetError> {
        OrderedSetError::check_insertion_point(index, self.len())?;
        if self.contains(&element) {
            return Ok(false);
        }
        let storage = self.storage_mut();
        let position = storage.push(element);
        storage.move_slot(position, index);
        Ok(true)
    }

    /// Inserts the elements of `elements` starting at `index`, keeping their
    /// relative order.
    ///
    /// Elements already in the set, and repeats within `elements`, are
    /// skipped. The elements originally at and after `index` shift right by
    /// the number of elements actually inserted, which is returned.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::OutOfRange`] if `index > len()`.
    ///
    /// # Complexity
    ///
    /// O(n + m) where m is the number of incoming elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::collections::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = [1, 2, 3].into();
    /// assert_eq!(set.insert_all_at([7, 2, 8, 7], 1), Ok(2));
    /// assert_eq!(set.as_slice(), &[1, 7, 8, 2, 3]);
    /// ```
    pub fn insert_all_at<I>(&mut self, elements: I, index: usize) -> Result<usize, OrderedSetError>
    where
        I: IntoIterator<Item = T>,
    {
        OrderedSetError::check_insertion_point(index, self.len())?;
        let mut fresh: SmallVec<[T; INLINE_BATCH]> = elements
            .into_iter()
            .filter(|element| !self.contains(element))
            .collect();
        if fresh.is_empty() {
            return Ok(0);
        }
        let storage = self.storage_mut();
        let mut next_position = index;
        fresh.retain(|element| {
            if storage.positions.contains_key(&*element) {
                false
            } else {
                storage.positions.insert(element.clone(), next_position);
                next_position += 1;
                true
            }
        });

        let inserted = fresh.len();
        let tail = storage.elements.split_off(index);
        storage.elements.extend(fresh);
        storage.elements.extend(tail);
        storage.reindex_from(index + inserted);
        Ok(inserted)
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Removes `element` and returns the position it occupied, or `None` if
    /// it was not present.
    ///
    /// Every element after the removed one moves down one position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::collections::OrderedSet;
    ///
    /// let mut set: OrderedSet<char> = ['a', 'b', 'c', 'd'].into();
    /// assert_eq!(set.remove(&'b'), Some(1));
    /// assert_eq!(set.remove(&'b'), None);
    /// assert_eq!(set.index_of(&'c'), Some(1));
    /// assert_eq!(set.index_of(&'d'), Some(2));
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = self.index_of(element)?;
        self.storage_mut().remove_slot(position);
        Some(position)
    }

    /// Removes each element of `elements` in turn and returns the positions
    /// of the elements that were present.
    ///
    /// Removals are applied sequentially: each reported position reflects the
    /// removals already made earlier in the same batch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::collections::OrderedSet;
    ///
    /// let mut set: OrderedSet<char> = ['a', 'b', 'c', 'd'].into();
    /// assert_eq!(set.remove_many(['a', 'x', 'd']), vec![0, 2]);
    /// assert_eq!(set.as_slice(), &['b', 'c']);
    /// ```
    pub fn remove_many<I>(&mut self, elements: I) -> Vec<usize>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        elements
            .into_iter()
            .filter_map(|element| self.remove(element.borrow()))
            .collect()
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::OutOfRange`] if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, OrderedSetError> {
        OrderedSetError::check_slot(index, self.len())?;
        Ok(self.storage_mut().remove_slot(index))
    }

    /// Removes every element and releases the storage.
    pub fn clear(&mut self) {
        log::debug!("clearing ordered set of {} elements", self.len());
        let hash_builder = self.hasher().clone();
        self.storage = ReferenceCounter::new(Storage::with_capacity_and_hasher(0, hash_builder));
    }

    /// Keeps only the elements for which `predicate` returns `true`,
    /// preserving their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::collections::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = [1, 2, 3, 4].into();
    /// set.retain(|value| value % 2 == 0);
    /// assert_eq!(set.as_slice(), &[2, 4]);
    /// assert_eq!(set.index_of(&4), Some(1));
    /// ```
    pub fn retain<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        let storage = self.storage_mut();
        let Storage {
            elements,
            positions,
        } = &mut *storage;
        elements.retain(|element| {
            let keep = predicate(element);
            if !keep {
                positions.remove(element);
            }
            keep
        });
        storage.reindex_from(0);
    }

    // =========================================================================
    // Reordering
    // =========================================================================

    /// Exchanges the positions of `first` and `second`.
    ///
    /// Returns `false` and does nothing unless both elements are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::collections::OrderedSet;
    ///
    /// let mut set: OrderedSet<char> = ['a', 'b', 'c'].into();
    /// assert!(set.swap(&'a', &'c'));
    /// assert!(!set.swap(&'a', &'z'));
    /// assert_eq!(set.as_slice(), &['c', 'b', 'a']);
    /// ```
    pub fn swap<Q>(&mut self, first: &Q, second: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (Some(first_position), Some(second_position)) =
            (self.index_of(first), self.index_of(second))
        else {
            return false;
        };
        if first_position != second_position {
            self.storage_mut().swap_slots(first_position, second_position);
        }
        true
    }

    /// Moves `element` to `index`.
    ///
    /// The elements between the old and the new position each shift one slot
    /// towards the vacated position; elements outside that range keep their
    /// positions. Returns `true` if the element moved.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::OutOfRange`] if `index >= len()`, whether or
    /// not `element` is present.
    ///
    /// # Complexity
    ///
    /// O(|index - position|).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::collections::OrderedSet;
    ///
    /// let mut set: OrderedSet<char> = ['a', 'b', 'c', 'd', 'e'].into();
    /// assert_eq!(set.move_to(&'d', 1), Ok(true));
    /// assert_eq!(set.as_slice(), &['a', 'd', 'b', 'c', 'e']);
    /// ```
    pub fn move_to<Q>(&mut self, element: &Q, index: usize) -> Result<bool, OrderedSetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        OrderedSetError::check_slot(index, self.len())?;
        match self.index_of(element) {
            Some(position) if position != index => {
                self.storage_mut().move_slot(position, index);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Moves the element at `from` to `to`, with the same shifting as
    /// [`move_to`](Self::move_to).
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::OutOfRange`] if either index is `>= len()`.
    pub fn move_at(&mut self, from: usize, to: usize) -> Result<(), OrderedSetError> {
        let len = self.len();
        OrderedSetError::check_slot(from, len)?;
        OrderedSetError::check_slot(to, len)?;
        if from != to {
            self.storage_mut().move_slot(from, to);
        }
        Ok(())
    }

    // =========================================================================
    // Set Algebra
    // =========================================================================

    /// Returns `true` if any element of `other` is in the set.
    ///
    /// Stops at the first hit.
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
    /// `other` is traversed once, and traversal stops as soon as all elements
    /// have been seen.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::collections::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [1, 2].into();
    /// assert!(set.is_subset_of([3, 2, 1]));
    /// assert!(!set.is_subset_of([1, 3]));
    /// ```
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
            if let Some(position) = self.index_of(element.borrow())
                && !std::mem::replace(&mut seen[position], true)
            {
                remaining -= 1;
                if remaining == 0 {
                    return true;
                }
            }
        }
        false
    }

    /// Returns a new set holding this set's elements followed by `other`'s,
    /// each appended with the [`append`](Self::append) rule.
    ///
    /// Also available as `set + other`.
    #[must_use]
    pub fn union<I>(&self, other: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut result = self.clone();
        result.append_all(other);
        result
    }

    /// Returns a new set holding this set's elements minus every element of
    /// `other`.
    ///
    /// Also available as `set - other`.
    #[must_use]
    pub fn difference<I>(&self, other: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let mut result = self.clone();
        for element in other {
            result.remove(element.borrow());
        }
        result
    }

    /// Returns a new set of `function` applied to each element in order.
    ///
    /// When two elements map to the same value, the first one wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordered_set::collections::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [1, -1, 2, -3].into();
    /// let absolute = set.map(|value| value.abs());
    /// assert_eq!(absolute.as_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, mut function: F) -> OrderedSet<U, S>
    where
        U: Clone + Eq + Hash,
        F: FnMut(&T) -> U,
    {
        let mut result = OrderedSet::with_capacity_and_hasher(self.len(), self.hasher().clone());
        for element in self {
            result.push_if_absent(function(element));
        }
        result
    }

    /// Returns the elements satisfying `predicate`, in order.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// Returns the smallest element, or `None` if the set is empty.
    ///
    /// # Complexity
    ///
    /// O(n).
    #[must_use]
    pub fn min(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.iter().min()
    }

    /// Returns the largest element, or `None` if the set is empty.
    ///
    /// # Complexity
    ///
    /// O(n).
    #[must_use]
    pub fn max(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.iter().max()
    }

    // =========================================================================
    // Capacity
    // =========================================================================

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        let storage = self.storage_mut();
        storage.elements.reserve(additional);
        storage.positions.reserve(additional);
    }

    /// Shrinks both internal structures as much as possible.
    pub fn shrink_to_fit(&mut self) {
        let storage = self.storage_mut();
        storage.elements.shrink_to_fit();
        storage.positions.shrink_to_fit();
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterator over the elements in order.
    ///
    /// The iterator borrows the set, so the set cannot be mutated while it is
    /// alive.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> OrderedSetIterator<'_, T> {
        OrderedSetIterator::new(&self.storage.elements)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the elements of an [`OrderedSet`], in order.
#[derive(Clone)]
pub struct OrderedSetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> OrderedSetIterator<'a, T> {
    #[inline]
    pub(super) fn new(elements: &'a [T]) -> Self {
        Self {
            inner: elements.iter(),
        }
    }
}

impl<'a, T> Iterator for OrderedSetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for OrderedSetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for OrderedSetIterator<'_, T> {}

/// Owning iterator over the elements of an [`OrderedSet`], in order.
pub struct OrderedSetIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> OrderedSetIntoIterator<T> {
    #[inline]
    pub(super) fn new(elements: Vec<T>) -> Self {
        Self {
            inner: elements.into_iter(),
        }
    }
}

impl<T> Iterator for OrderedSetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for OrderedSetIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedSetIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for OrderedSetIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S> Default for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone + Default,
{
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> FromIterator<T> for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut set = Self::with_capacity_and_hasher(lower, S::default());
        for element in iter {
            set.push_if_absent(element);
        }
        set
    }
}

impl<T: Clone + Eq + Hash, const N: usize> From<[T; N]> for OrderedSet<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Clone + Eq + Hash> From<Vec<T>> for OrderedSet<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T, S> Extend<T> for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_all(iter);
    }
}

impl<T, S> IntoIterator for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone,
{
    type Item = T;
    type IntoIter = OrderedSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        OrderedSetIntoIterator::new(self.into_vec())
    }
}

impl<'a, T, S> IntoIterator for &'a OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone,
{
    type Item = &'a T;
    type IntoIter = OrderedSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> Index<usize> for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone,
{
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

/// Two sets are equal when they hold the same elements at the same positions.
impl<T, S> PartialEq for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.storage, &other.storage)
            || self.storage.elements == other.storage.elements
    }
}

impl<T, S> Eq for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone,
{
}

impl<T, S, I> Add<I> for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone,
    I: IntoIterator<Item = T>,
{
    type Output = Self;

    fn add(mut self, other: I) -> Self::Output {
        self.append_all(other);
        self
    }
}

impl<T, S, I> AddAssign<I> for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone,
    I: IntoIterator<Item = T>,
{
    fn add_assign(&mut self, other: I) {
        self.append_all(other);
    }
}

impl<T, S, I> Sub<I> for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    type Output = Self;

    fn sub(mut self, other: I) -> Self::Output {
        self -= other;
        self
    }
}

impl<T, S, I> SubAssign<I> for OrderedSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    fn sub_assign(&mut self, other: I) {
        for element in other {
            self.remove(element.borrow());
        }
    }
}

impl<T: fmt::Debug, S> fmt::Debug for OrderedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.storage.elements.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for OrderedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements = &self.storage.elements;
        write!(formatter, "OrderedSet ({} object(s)): [", elements.len())?;
        for (position, element) in elements.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(OrderedSet<i32>: Send, Sync);
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(OrderedSet<i32>: Send, Sync);
