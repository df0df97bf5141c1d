use spiral_core::Point;
use spiral_space::{coordinate_of, index_of, Ring, Side};

/// `(ring, [east, north, west, south] corner indices)`.
const CORNERS: [(u64, [u64; 4]); 4] = [
    (1, [3, 5, 7, 9]),
    (2, [13, 17, 21, 25]),
    (3, [31, 37, 43, 49]),
    (4, [57, 65, 73, 81]),
];

#[test]
fn every_corner_of_rings_one_to_four() {
    for (k, indices) in CORNERS {
        let ring = Ring::new(k);
        let k = k as i64;
        let points = [
            Point::new(k, k),
            Point::new(-k, k),
            Point::new(-k, -k),
            Point::new(k, -k),
        ];
        for ((side, index), point) in Side::ALL.into_iter().zip(indices).zip(points) {
            assert_eq!(
                Side::resolve(ring, index),
                Some((side, ring.cells_per_side())),
                "corner {index} should end the {side:?} side"
            );
            assert_eq!(coordinate_of(index).unwrap(), point, "corner {index}");
            assert_eq!(ring.corner(side), point);
            assert_eq!(index_of(point), Some(index));
        }
        assert_eq!(indices[3], ring.last_index());
    }
}

#[test]
fn cell_after_each_corner_starts_next_side() {
    for (k, indices) in CORNERS {
        let ring = Ring::new(k);
        for (i, index) in indices.into_iter().take(3).enumerate() {
            let next = Side::ALL[i + 1];
            assert_eq!(Side::resolve(ring, index + 1), Some((next, 1)));
        }
        // The cell after the last corner opens the next ring on its east side.
        let after = indices[3] + 1;
        assert_eq!(Side::resolve(ring.next(), after), Some((Side::East, 1)));
        let k = k as i64;
        assert_eq!(coordinate_of(after).unwrap(), Point::new(k + 1, -k));
    }
}

#[test]
fn side_midpoints_are_axis_cells() {
    for k in 1..=4u64 {
        let ring = Ring::new(k);
        let k = k as i64;
        assert_eq!(Side::East.point_at(ring, ring.thickness()), Point::new(k, 0));
        assert_eq!(Side::North.point_at(ring, ring.thickness()), Point::new(0, k));
        assert_eq!(Side::West.point_at(ring, ring.thickness()), Point::new(-k, 0));
        assert_eq!(Side::South.point_at(ring, ring.thickness()), Point::new(0, -k));
    }
}
