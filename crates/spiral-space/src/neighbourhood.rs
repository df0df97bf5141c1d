//! The 8-connected neighbourhood on the unbounded lattice.

use smallvec::SmallVec;
use spiral_core::{Direction, Point};

/// The eight cells surrounding `p`, in [`Direction::ALL`] order.
///
/// The lattice is unbounded, so every point has exactly eight neighbours.
pub fn neighbours(p: Point) -> SmallVec<[Point; 8]> {
    Direction::ALL.iter().map(|&dir| p.step(dir)).collect()
}
