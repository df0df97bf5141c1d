//! Write-once, visit-ordered mapping from lattice points to cell values.

use crate::neighbourhood::neighbours;
use indexmap::map::Entry;
use indexmap::IndexMap;
use smallvec::SmallVec;
use spiral_core::{Point, SpiralError};

/// The set of visited cells and the value assigned to each.
///
/// Lookups return `Option<u64>`: an unvisited cell is `None`, never an
/// implicit zero. Cells are write-once and iterate in the order they were
/// inserted, so for a spiral walk the `n`-th entry is spiral index `n`.
#[derive(Clone, Debug, Default)]
pub struct SpiralGrid {
    cells: IndexMap<Point, u64>,
}

impl SpiralGrid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty grid with room for `capacity` cells.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: IndexMap::with_capacity(capacity),
        }
    }

    /// A grid holding a single visited cell.
    pub fn with_seed(p: Point, value: u64) -> Self {
        let mut cells = IndexMap::new();
        cells.insert(p, value);
        Self { cells }
    }

    /// Value stored at `p`, or `None` if `p` has not been visited.
    pub fn get(&self, p: &Point) -> Option<u64> {
        self.cells.get(p).copied()
    }

    /// `true` if `p` has been visited.
    pub fn contains(&self, p: &Point) -> bool {
        self.cells.contains_key(p)
    }

    /// Store `value` at `p`.
    ///
    /// Returns [`SpiralError::CellOccupied`] if `p` already holds a value;
    /// the existing value is left untouched.
    pub fn insert(&mut self, p: Point, value: u64) -> Result<(), SpiralError> {
        match self.cells.entry(p) {
            Entry::Occupied(e) => Err(SpiralError::CellOccupied {
                at: p,
                existing: *e.get(),
            }),
            Entry::Vacant(e) => {
                e.insert(value);
                Ok(())
            }
        }
    }

    /// Number of visited cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if no cell has been visited.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// 0-based visit rank of `p`.
    pub fn visit_rank(&self, p: &Point) -> Option<usize> {
        self.cells.get_index_of(p)
    }

    /// The most recently visited cell.
    pub fn last(&self) -> Option<(Point, u64)> {
        self.cells.last().map(|(p, v)| (*p, *v))
    }

    /// Visited cells in visit order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, u64)> + '_ {
        self.cells.iter().map(|(p, v)| (*p, *v))
    }

    /// The visited neighbours of `p` and their values.
    pub fn present_neighbours(&self, p: Point) -> SmallVec<[(Point, u64); 8]> {
        neighbours(p)
            .into_iter()
            .filter_map(|nb| self.get(&nb).map(|v| (nb, v)))
            .collect()
    }

    /// Sum of the values of the visited neighbours of `p`.
    ///
    /// Unvisited neighbours contribute nothing. Returns
    /// [`SpiralError::ValueOverflow`] if the sum does not fit in `u64`.
    pub fn neighbour_sum(&self, p: Point) -> Result<u64, SpiralError> {
        self.present_neighbours(p)
            .into_iter()
            .map(|(_, v)| v)
            .try_fold(0u64, |acc, v| acc.checked_add(v))
            .ok_or(SpiralError::ValueOverflow { at: p })
    }
}
