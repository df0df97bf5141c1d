//! Mapping between spiral indices and lattice coordinates.

use crate::ring::{Ring, Side};
use spiral_core::{Point, SpiralError};

/// Coordinate of the 1-based spiral index `index`.
///
/// Index 1 is the origin; index 2 is `(1, 0)` and the spiral winds
/// counterclockwise from there. Returns [`SpiralError::InvalidArgument`]
/// for index 0.
///
/// ```
/// use spiral_core::Point;
/// use spiral_space::coordinate_of;
///
/// assert_eq!(coordinate_of(1).unwrap(), Point::ORIGIN);
/// assert_eq!(coordinate_of(12).unwrap(), Point::new(2, 1));
/// assert_eq!(coordinate_of(23).unwrap(), Point::new(0, -2));
/// ```
pub fn coordinate_of(index: u64) -> Result<Point, SpiralError> {
    let ring = Ring::containing(index)?;
    Ok(match Side::resolve(ring, index) {
        Some((side, offset)) => side.point_at(ring, offset),
        None => Point::ORIGIN,
    })
}

/// Manhattan distance from the origin to the cell at `index`.
///
/// ```
/// use spiral_space::distance_from_origin;
///
/// assert_eq!(distance_from_origin(1024).unwrap(), 31.0);
/// ```
pub fn distance_from_origin(index: u64) -> Result<f64, SpiralError> {
    let point = coordinate_of(index)?;
    Ok(Point::ORIGIN.manhattan_distance(&point))
}

/// Spiral index of `point`, the inverse of [`coordinate_of`].
///
/// Returns `None` when the index would not fit in a `u64`.
pub fn index_of(point: Point) -> Option<u64> {
    if point == Point::ORIGIN {
        return Some(1);
    }
    let (ring, side, offset) = Side::locate(point)?;
    u64::try_from(side.index_at(ring, offset)).ok()
}
