//! The neighbour-sum walk state machine.

use spiral_core::{Direction, Point, SpiralError};
use spiral_space::{Ring, SpiralGrid};
use tracing::{debug, trace};

use crate::config::WalkConfig;

/// A visited cell and its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// 1-based spiral index.
    pub index: u64,
    /// Lattice coordinate.
    pub point: Point,
    /// Sum of the neighbours visited before this cell (1 for the origin).
    pub value: u64,
}

/// A walk outward along the spiral.
///
/// The walk starts with the origin holding [`SpiralWalk::SEED`], facing
/// east. Each [`step`](SpiralWalk::step) moves one cell along the heading,
/// gives that cell the sum of its visited neighbours, and then turns left
/// if the cell on its left has not been visited yet. The filled spiral is
/// therefore always on the walker's left, and only cardinal headings are
/// ever used.
///
/// As an [`Iterator`] the walk yields the origin first, then one cell per
/// step, and ends if a value would overflow `u64`.
#[derive(Clone, Debug)]
pub struct SpiralWalk {
    grid: SpiralGrid,
    cursor: Point,
    heading: Direction,
    origin_yielded: bool,
    halted: bool,
}

impl SpiralWalk {
    /// Value of the origin cell.
    pub const SEED: u64 = 1;

    /// A fresh walk at the origin, facing east.
    pub fn new() -> Self {
        Self {
            grid: SpiralGrid::with_seed(Point::ORIGIN, Self::SEED),
            cursor: Point::ORIGIN,
            heading: Direction::East,
            origin_yielded: false,
            halted: false,
        }
    }

    /// The most recently visited cell.
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Direction of the next step.
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Every cell visited so far, in visit order.
    pub fn grid(&self) -> &SpiralGrid {
        &self.grid
    }

    /// Number of visited cells, origin included.
    pub fn visited(&self) -> u64 {
        self.grid.len() as u64
    }

    /// The seeded origin cell.
    pub fn origin(&self) -> Cell {
        Cell {
            index: 1,
            point: Point::ORIGIN,
            value: Self::SEED,
        }
    }

    /// Visit the next cell.
    ///
    /// On error the walk is left unchanged.
    pub fn step(&mut self) -> Result<Cell, SpiralError> {
        let next = self.cursor.step(self.heading);
        let value = self.grid.neighbour_sum(next)?;
        self.grid.insert(next, value)?;
        self.cursor = next;

        let left = self.heading.turn_left();
        if !self.grid.contains(&next.step(left)) {
            self.heading = left;
        }

        let index = self.visited();
        let ring = Ring::of_point(next);
        if index == ring.last_index() {
            trace!(ring = ring.thickness(), index, value, "ring complete");
        }
        Ok(Cell {
            index,
            point: next,
            value,
        })
    }
}

impl Default for SpiralWalk {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for SpiralWalk {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if !self.origin_yielded {
            self.origin_yielded = true;
            return Some(self.origin());
        }
        if self.halted {
            return None;
        }
        match self.step() {
            Ok(cell) => Some(cell),
            Err(err) => {
                debug!(%err, "walk halted");
                self.halted = true;
                None
            }
        }
    }
}

/// First walk value strictly greater than `threshold`.
///
/// Returns [`SpiralError::InvalidArgument`] for a zero threshold.
///
/// ```
/// use spiral_engine::first_value_exceeding;
///
/// assert_eq!(first_value_exceeding(10).unwrap(), 11);
/// assert_eq!(first_value_exceeding(750).unwrap(), 806);
/// ```
pub fn first_value_exceeding(threshold: u64) -> Result<u64, SpiralError> {
    run(&WalkConfig::new(threshold)).map(|cell| cell.value)
}

/// Walk until a value passes `config.threshold` and return that cell.
///
/// Fails with [`SpiralError::CellBudgetExhausted`] if `config.max_cells`
/// cells are visited first.
pub fn run(config: &WalkConfig) -> Result<Cell, SpiralError> {
    config.validate()?;
    let mut walk = SpiralWalk::new();
    let mut cell = walk.origin();
    while cell.value <= config.threshold {
        if let Some(max_cells) = config.max_cells {
            if walk.grid().len() >= max_cells {
                return Err(SpiralError::CellBudgetExhausted { max_cells });
            }
        }
        cell = walk.step()?;
    }
    debug!(
        threshold = config.threshold,
        index = cell.index,
        value = cell.value,
        "walk passed threshold"
    );
    Ok(cell)
}
