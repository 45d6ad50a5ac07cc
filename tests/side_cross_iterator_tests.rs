//! Unit tests for SideCrossIterator.

use magical_container::{Direction, MagicalContainer, SideCrossIterator};
use rstest::rstest;

// =============================================================================
// Traversal
// =============================================================================

#[rstest]
fn test_traversal_alternates_low_and_high() {
    let container: MagicalContainer = [5, 2, 10, 7, 3, 9].into_iter().collect();
    let elements: Vec<i32> = SideCrossIterator::new(&container).collect();
    assert_eq!(elements, vec![2, 10, 3, 9, 5, 7]);
}

#[rstest]
#[case(&[], &[])]
#[case(&[4], &[4])]
#[case(&[1, 2], &[1, 2])]
#[case(&[1, 2, 3], &[1, 3, 2])]
#[case(&[1, 2, 3, 4, 5, 6, 7], &[1, 7, 2, 6, 3, 5, 4])]
#[case(&[3, 3, 1, 1], &[1, 3, 1, 3])]
fn test_traversal_shapes(#[case] input: &[i32], #[case] expected: &[i32]) {
    let container: MagicalContainer = input.iter().copied().collect();
    assert_eq!(container.side_cross().collect::<Vec<_>>(), expected);
}

#[rstest]
fn test_middle_element_yielded_once() {
    let container: MagicalContainer = [10, 20, 30].into_iter().collect();
    let elements: Vec<i32> = container.side_cross().collect();
    assert_eq!(elements.iter().filter(|&&element| element == 20).count(), 1);
}

#[rstest]
fn test_begin_and_end_bound_three_steps() {
    let container: MagicalContainer = [5, 2, 10].into_iter().collect();
    let cursor = SideCrossIterator::new(&container);
    assert_eq!(cursor.begin(), cursor);

    let mut count = 0;
    let mut walker = cursor.begin();
    while walker != cursor.end() {
        count += 1;
        walker.advance().unwrap();
    }
    assert_eq!(count, 3);
}

#[rstest]
fn test_dereference() {
    let container: MagicalContainer = [5, 2].into_iter().collect();
    let mut cursor = SideCrossIterator::new(&container);
    assert_eq!(cursor.value(), Ok(2));
    cursor.advance().unwrap();
    assert_eq!(cursor.value(), Ok(5));
}

#[rstest]
fn test_direction_alternates() {
    let container: MagicalContainer = (0..4).collect();
    let mut cursor = container.begin_cross();
    assert_eq!(cursor.direction(), Direction::Forward);
    cursor.advance().unwrap();
    assert_eq!(cursor.direction(), Direction::Backward);
    cursor.advance().unwrap();
    assert_eq!(cursor.direction(), Direction::Forward);
}

// =============================================================================
// Comparison
// =============================================================================

#[rstest]
fn test_equality_follows_steps() {
    let container: MagicalContainer = [5, 2, 10].into_iter().collect();
    let mut first = SideCrossIterator::new(&container);
    let mut second = SideCrossIterator::new(&container);
    assert!(first == second);

    first.advance().unwrap();
    assert!(first != second);

    second.advance().unwrap();
    assert!(first == second);
}

#[rstest]
fn test_ordering_is_total_along_one_walk() {
    let container: MagicalContainer = (0..5).collect();
    let mut walk = Vec::new();
    let mut cursor = container.begin_cross();
    loop {
        walk.push(cursor.clone());
        if cursor.is_end() {
            break;
        }
        cursor.advance().unwrap();
    }
    assert_eq!(walk.len(), 6);

    for (left_index, left) in walk.iter().enumerate() {
        for (right_index, right) in walk.iter().enumerate() {
            assert_eq!(
                PartialOrd::partial_cmp(left, right),
                Some(left_index.cmp(&right_index)),
                "steps {left_index} and {right_index}"
            );
        }
    }
}

#[rstest]
fn test_end_sentinel_is_canonical_for_even_and_odd_sizes() {
    for size in 1..8 {
        let container: MagicalContainer = (0..size).collect();
        let mut cursor = container.begin_cross();
        while !cursor.is_end() {
            cursor.advance().unwrap();
        }
        assert_eq!(cursor, container.end_cross(), "size {size}");
    }
}

// =============================================================================
// Out Of Range
// =============================================================================

#[rstest]
fn test_empty_container() {
    let container = MagicalContainer::new();
    let mut cursor = SideCrossIterator::new(&container);

    assert_eq!(cursor.begin(), cursor.end());
    assert!(cursor.advance().is_err());
    assert!(cursor.value().is_err());
}

#[rstest]
fn test_single_element() {
    let container: MagicalContainer = [5].into_iter().collect();
    let mut cursor = SideCrossIterator::new(&container);

    assert_eq!(cursor.value(), Ok(5));
    cursor.advance().unwrap();
    assert_eq!(cursor, cursor.end());
    assert!(cursor.advance().is_err());
    assert!(cursor.value().is_err());
}
