//! Integration tests for Display and Debug implementations.
//!
//! Both set types render as a type name, the element count and the elements
//! in order.

use ordered_set::collections::OrderedSet;
use ordered_set::{OrderedSetError, ordered_set};

// =============================================================================
// OrderedSet Display Tests
// =============================================================================

#[test]
fn test_ordered_set_empty_display() {
    let set: OrderedSet<i32> = OrderedSet::new();
    assert_eq!(format!("{}", set), "OrderedSet (0 object(s)): []");
}

#[test]
fn test_ordered_set_single_element_display() {
    let set = ordered_set!["home"];
    assert_eq!(format!("{}", set), "OrderedSet (1 object(s)): [home]");
}

#[test]
fn test_ordered_set_display_follows_position_order() {
    let mut set = ordered_set![1, 2, 3];
    set.append(1);
    assert_eq!(format!("{}", set), "OrderedSet (3 object(s)): [2, 3, 1]");
}

#[test]
fn test_ordered_set_debug() {
    let set = ordered_set!['x', 'y'];
    assert_eq!(format!("{:?}", set), "{'x', 'y'}");
}

// =============================================================================
// SortedOrderedSet Display Tests
// =============================================================================

#[cfg(feature = "sorted")]
#[test]
fn test_sorted_ordered_set_display() {
    use ordered_set::collections::SortedOrderedSet;

    let set: SortedOrderedSet<i32> = [3, 1, 2, 1].into();
    assert_eq!(format!("{}", set), "SortedOrderedSet (3 object(s)): [1, 2, 3]");
}

#[cfg(feature = "sorted")]
#[test]
fn test_sorted_ordered_set_empty_display() {
    use ordered_set::collections::SortedOrderedSet;

    let set: SortedOrderedSet<String> = SortedOrderedSet::new();
    assert_eq!(format!("{}", set), "SortedOrderedSet (0 object(s)): []");
}

// =============================================================================
// Error Display Tests
// =============================================================================

#[test]
fn test_out_of_range_display() {
    let error = OrderedSetError::OutOfRange { index: 7, len: 3 };
    assert_eq!(
        format!("{}", error),
        "index 7 is out of range for ordered set of length 3"
    );
}

#[test]
fn test_out_of_range_from_operation() {
    let mut set = ordered_set!['a'];
    let error = set.remove_at(4).unwrap_err();
    assert_eq!(
        error.to_string(),
        "index 4 is out of range for ordered set of length 1"
    );
}
