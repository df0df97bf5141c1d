//! Mapper invariant test helpers.
//!
//! Each helper checks one property of [`coordinate_of`] over a window of
//! consecutive spiral indices. Reused by the mapper tests for windows near
//! the origin and far out on the spiral.

use crate::mapper::{coordinate_of, index_of};
use crate::ring::{Ring, Side};
use indexmap::IndexSet;
use std::ops::RangeInclusive;

/// Assert that distinct indices in the window map to distinct points.
pub fn assert_injective(window: RangeInclusive<u64>) {
    let expected = window.clone().count();
    let unique: IndexSet<_> = window
        .map(|i| coordinate_of(i).expect("window indices are positive"))
        .collect();
    assert_eq!(unique.len(), expected, "coordinate_of has collisions");
}

/// Assert that consecutive indices differ by exactly one orthogonal step.
pub fn assert_consecutive_adjacent(window: RangeInclusive<u64>) {
    let mut prev = None;
    for i in window {
        let p = coordinate_of(i).expect("window indices are positive");
        if let Some(q) = prev {
            assert!(
                p.is_adjacent(&q) && p.manhattan_len_to(&q) == 1,
                "index {i} at {p} is not adjacent to index {} at {q}",
                i - 1
            );
        }
        prev = Some(p);
    }
}

/// Assert that [`index_of`] inverts [`coordinate_of`].
pub fn assert_inverse(window: RangeInclusive<u64>) {
    for i in window {
        let p = coordinate_of(i).expect("window indices are positive");
        assert_eq!(index_of(p), Some(i), "index_of({p}) != {i}");
    }
}

/// Assert that every index lies on a ring whose side length is the smallest
/// odd square root bound, and that its point sits on that ring.
pub fn assert_ring_membership(window: RangeInclusive<u64>) {
    for i in window {
        let ring = Ring::containing(i).expect("window indices are positive");
        let side = u128::from(ring.side_length());
        assert!(side * side >= u128::from(i), "ring of {i} too small");
        if ring.thickness() > 0 {
            let inner = side - 2;
            assert!(inner * inner < u128::from(i), "ring of {i} not minimal");
        }
        let p = coordinate_of(i).expect("window indices are positive");
        assert_eq!(Ring::of_point(p), ring, "index {i} at {p} off its ring");
    }
}

/// Assert that every ring corner in the window is owned by the side that
/// ends there.
pub fn assert_corner_ownership(window: RangeInclusive<u64>) {
    for i in window {
        let ring = Ring::containing(i).expect("window indices are positive");
        if let Some((side, offset)) = Side::resolve(ring, i) {
            let is_corner = offset == ring.cells_per_side();
            let p = coordinate_of(i).expect("window indices are positive");
            assert_eq!(
                ring.corner(side) == p,
                is_corner,
                "corner ownership mismatch at index {i} ({side:?}, offset {offset})"
            );
        }
    }
}

/// Run every mapper check on a window.
pub fn run_full_compliance(window: RangeInclusive<u64>) {
    assert_injective(window.clone());
    assert_consecutive_adjacent(window.clone());
    assert_inverse(window.clone());
    assert_ring_membership(window.clone());
    assert_corner_ownership(window);
}
