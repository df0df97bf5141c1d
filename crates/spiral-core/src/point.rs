//! Integer lattice points.

use crate::direction::Direction;
use std::fmt;

/// A cell coordinate on the unbounded square lattice.
///
/// `x` grows to the east and `y` grows to the north. The spiral is
/// centred on [`Point::ORIGIN`]. Points have no identity beyond their
/// coordinates and are used both as mapper results and as grid keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Column, positive to the east.
    pub x: i64,
    /// Row, positive to the north.
    pub y: i64,
}

impl Point {
    /// The spiral centre, index 1.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Construct a point from its coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The adjacent point one unit step in `dir`.
    ///
    /// Coordinates saturate at the `i64` bounds.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Manhattan (L1) distance, `|x1 - x2| + |y1 - y2|`.
    ///
    /// Returned as `f64` to match the distance convention of the mapper's
    /// public output.
    pub fn manhattan_distance(&self, other: &Point) -> f64 {
        self.manhattan_len_to(other) as f64
    }

    /// Manhattan distance as an integer, saturating at `u64::MAX`.
    pub fn manhattan_len_to(&self, other: &Point) -> u64 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }

    /// Chebyshev (L-inf) distance. For a point on the spiral this is the
    /// ring it lies on.
    pub fn chebyshev_len_to(&self, other: &Point) -> u64 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// `true` if `other` is one of the eight cells surrounding `self`.
    pub fn is_adjacent(&self, other: &Point) -> bool {
        self.chebyshev_len_to(other) == 1
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
