//! Property-based tests for OrderedSet laws.
//!
//! These tests verify that the sequence and the position index stay inverse
//! to each other across arbitrary sequences of operations, and that the
//! observable behaviour matches a plain `Vec` model.

use ordered_set::collections::OrderedSet;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Append(u8),
    InsertAt(u8, usize),
    Remove(u8),
    RemoveAt(usize),
    Set(usize, u8),
    Swap(u8, u8),
    MoveTo(u8, usize),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        any::<u8>().prop_map(Operation::Append),
        (any::<u8>(), 0..40_usize).prop_map(|(element, index)| Operation::InsertAt(element, index)),
        any::<u8>().prop_map(Operation::Remove),
        (0..40_usize).prop_map(Operation::RemoveAt),
        (0..40_usize, any::<u8>()).prop_map(|(index, element)| Operation::Set(index, element)),
        (any::<u8>(), any::<u8>()).prop_map(|(first, second)| Operation::Swap(first, second)),
        (any::<u8>(), 0..40_usize).prop_map(|(element, index)| Operation::MoveTo(element, index)),
    ]
}

/// Applies `operation` to a `Vec` with the same semantics as `OrderedSet`.
fn apply_to_model(model: &mut Vec<u8>, operation: &Operation) {
    let position_of = |model: &Vec<u8>, element: u8| model.iter().position(|item| *item == element);
    match *operation {
        Operation::Append(element) => {
            if let Some(position) = position_of(model, element) {
                model.remove(position);
            }
            model.push(element);
        }
        Operation::InsertAt(element, index) => {
            if index <= model.len() && position_of(model, element).is_none() {
                model.insert(index, element);
            }
        }
        Operation::Remove(element) => {
            if let Some(position) = position_of(model, element) {
                model.remove(position);
            }
        }
        Operation::RemoveAt(index) => {
            if index < model.len() {
                model.remove(index);
            }
        }
        Operation::Set(index, element) => {
            if index < model.len() {
                match position_of(model, element) {
                    Some(position) if position == index => {}
                    Some(_) => {
                        model.remove(index);
                    }
                    None => model[index] = element,
                }
            }
        }
        Operation::Swap(first, second) => {
            if let (Some(a), Some(b)) = (position_of(model, first), position_of(model, second)) {
                model.swap(a, b);
            }
        }
        Operation::MoveTo(element, index) => {
            if index < model.len()
                && let Some(position) = position_of(model, element)
            {
                let moved = model.remove(position);
                model.insert(index, moved);
            }
        }
    }
}

fn apply_to_set(set: &mut OrderedSet<u8>, operation: &Operation) {
    match *operation {
        Operation::Append(element) => {
            set.append(element);
        }
        Operation::InsertAt(element, index) => {
            let _ = set.insert_at(element, index);
        }
        Operation::Remove(element) => {
            set.remove(&element);
        }
        Operation::RemoveAt(index) => {
            let _ = set.remove_at(index);
        }
        Operation::Set(index, element) => {
            let _ = set.set(index, element);
        }
        Operation::Swap(first, second) => {
            set.swap(&first, &second);
        }
        Operation::MoveTo(element, index) => {
            let _ = set.move_to(&element, index);
        }
    }
}

// =============================================================================
// Bijection Law
// Description: index_of(get(i)) == i for every valid i, after any operations
// =============================================================================

proptest! {
    #[test]
    fn prop_bijection_law(
        initial in prop::collection::vec(any::<u8>(), 0..30),
        operations in prop::collection::vec(operation(), 0..60)
    ) {
        let mut set: OrderedSet<u8> = initial.into_iter().collect();
        for operation in &operations {
            apply_to_set(&mut set, operation);
        }

        prop_assert_eq!(set.len(), set.iter().count());
        for index in 0..set.len() {
            let element = set.get(index).copied().unwrap();
            prop_assert_eq!(set.index_of(&element), Some(index));
        }
    }
}

// =============================================================================
// Model Law
// Description: OrderedSet behaves exactly like the Vec model
// =============================================================================

proptest! {
    #[test]
    fn prop_model_law(
        initial in prop::collection::vec(any::<u8>(), 0..30),
        operations in prop::collection::vec(operation(), 0..60)
    ) {
        let mut set: OrderedSet<u8> = initial.iter().copied().collect();
        let mut model: Vec<u8> = Vec::new();
        for element in initial {
            if !model.contains(&element) {
                model.push(element);
            }
        }

        for operation in &operations {
            apply_to_set(&mut set, operation);
            apply_to_model(&mut model, operation);
            prop_assert_eq!(set.as_slice(), model.as_slice(), "after {:?}", operation);
        }
    }
}

// =============================================================================
// Round-Trip Law
// Description: collecting then iterating yields the first-occurrence projection
// =============================================================================

proptest! {
    #[test]
    fn prop_round_trip_law(elements in prop::collection::vec(any::<i16>(), 0..100)) {
        let set: OrderedSet<i16> = elements.iter().copied().collect();
        let mut expected = Vec::new();
        for element in elements {
            if !expected.contains(&element) {
                expected.push(element);
            }
        }
        prop_assert_eq!(set.into_iter().collect::<Vec<_>>(), expected);
    }
}

// =============================================================================
// Independence Law
// Description: mutating a clone never changes the original
// =============================================================================

proptest! {
    #[test]
    fn prop_independence_law(
        initial in prop::collection::vec(any::<u8>(), 0..30),
        operations in prop::collection::vec(operation(), 0..30)
    ) {
        let original: OrderedSet<u8> = initial.into_iter().collect();
        let snapshot = original.to_vec();
        let mut copy = original.clone();
        for operation in &operations {
            apply_to_set(&mut copy, operation);
        }
        prop_assert_eq!(original.as_slice(), snapshot.as_slice());
    }
}

// =============================================================================
// Difference Law
// Description: (set - other) contains no element of other, keeps the rest in order
// =============================================================================

proptest! {
    #[test]
    fn prop_difference_law(
        left in prop::collection::vec(any::<u8>(), 0..40),
        right in prop::collection::vec(any::<u8>(), 0..40)
    ) {
        let set: OrderedSet<u8> = left.into_iter().collect();
        let difference = set.clone() - &right;

        prop_assert!(!difference.intersects(&right));
        let expected: Vec<u8> = set.iter().copied().filter(|element| !right.contains(element)).collect();
        prop_assert_eq!(difference.as_slice(), expected.as_slice());
        prop_assert!(difference.is_subset_of(set.iter()));
    }
}

// =============================================================================
// Sorted Search Law
// Description: binary search and the set queries agree with a linear scan,
// including runs of equal values kept by from_sorted
// =============================================================================

#[cfg(feature = "sorted")]
mod sorted {
    use ordered_set::collections::{NaturalOrder, SortedOrderedSet};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_sorted_insert_matches_linear_scan(
            mut elements in prop::collection::vec(0..20_u8, 0..200),
            probe in 0..20_u8
        ) {
            elements.sort_unstable();
            let mut set = SortedOrderedSet::from_sorted(elements.clone(), NaturalOrder);
            let expected_position = elements
                .iter()
                .position(|element| *element >= probe)
                .unwrap_or(elements.len());
            let expected_present = elements.contains(&probe);

            prop_assert_eq!(set.insert(probe), (expected_position, !expected_present));
        }

        #[test]
        fn prop_sorted_queries_match_linear_model_with_repeats(
            mut elements in prop::collection::vec(0..20_u8, 0..200),
            other in prop::collection::vec(0..20_u8, 0..30),
            probe in 0..20_u8
        ) {
            elements.sort_unstable();
            let set = SortedOrderedSet::from_sorted(elements.clone(), NaturalOrder);

            prop_assert!(set.is_subset_of(elements.iter()));
            prop_assert_eq!(
                set.is_subset_of(other.iter()),
                elements.iter().all(|element| other.contains(element))
            );
            prop_assert_eq!(
                set.intersects(other.iter()),
                other.iter().any(|element| elements.contains(element))
            );
            prop_assert_eq!(set.contains(&probe), elements.contains(&probe));
            prop_assert_eq!(
                set.index_of(&probe),
                elements.iter().position(|element| *element == probe)
            );

            let mut removed = set.clone();
            let mut model = elements.clone();
            let expected_removal = model.iter().position(|element| *element == probe);
            if let Some(position) = expected_removal {
                model.remove(position);
            }
            prop_assert_eq!(removed.remove(&probe), expected_removal);
            prop_assert_eq!(removed.as_slice(), model.as_slice());
        }
    }
}
