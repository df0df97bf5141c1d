//! Concentric rings of the square spiral and their four sides.

use spiral_core::{Direction, Point, SpiralError};

/// One square shell of the spiral at Chebyshev distance `k` from the origin.
///
/// Ring 0 is the single centre cell. Ring `k >= 1` has side length `2k + 1`
/// and contributes `8k` cells, numbered `(2k - 1)^2 + 1 ..= (2k + 1)^2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ring {
    k: u64,
}

impl Ring {
    /// The centre cell.
    pub const CENTRE: Ring = Ring { k: 0 };

    /// Largest thickness whose cells are all addressable by a `u64` index.
    pub const MAX_THICKNESS: u64 = (1 << 31) - 1;

    /// The ring at thickness `k`.
    pub fn new(k: u64) -> Self {
        Self { k }
    }

    /// Ring holding spiral index `index`.
    ///
    /// This is the smallest `k` with `1 + 8 * (1 + 2 + ... + k) >= index`,
    /// i.e. `(2k + 1)^2 >= index`. Returns
    /// [`SpiralError::InvalidArgument`] for index 0.
    pub fn containing(index: u64) -> Result<Self, SpiralError> {
        if index == 0 {
            return Err(SpiralError::InvalidArgument {
                name: "index",
                value: 0,
            });
        }
        let root = index.isqrt();
        let mut side = if root * root == index { root } else { root + 1 };
        if side % 2 == 0 {
            side += 1;
        }
        Ok(Self { k: (side - 1) / 2 })
    }

    /// Ring a point lies on.
    pub fn of_point(p: Point) -> Self {
        Self {
            k: p.chebyshev_len_to(&Point::ORIGIN),
        }
    }

    /// Thickness (Chebyshev distance from the origin).
    pub fn thickness(&self) -> u64 {
        self.k
    }

    /// The next ring outward.
    pub fn next(&self) -> Self {
        Self { k: self.k + 1 }
    }

    /// Cells per side, corners included: `2k + 1`.
    pub fn side_length(&self) -> u64 {
        self.k.saturating_mul(2).saturating_add(1)
    }

    /// Cells this ring adds to the spiral.
    pub fn cell_count(&self) -> u64 {
        if self.k == 0 {
            1
        } else {
            self.k.saturating_mul(8)
        }
    }

    /// Cells each [`Side`] owns. Zero for the centre.
    pub fn cells_per_side(&self) -> u64 {
        self.k.saturating_mul(2)
    }

    /// Spiral index of the first cell on this ring.
    ///
    /// Saturates at `u64::MAX` for rings no `u64` index reaches.
    pub fn first_index(&self) -> u64 {
        if self.k == 0 {
            1
        } else {
            let inner = self.k.saturating_mul(2) - 1;
            inner.saturating_mul(inner).saturating_add(1)
        }
    }

    /// Spiral index of the last cell on this ring, the bottom-right corner.
    ///
    /// Saturates at `u64::MAX` past [`Ring::MAX_THICKNESS`].
    pub fn last_index(&self) -> u64 {
        let side = u128::from(self.side_length());
        u64::try_from(side * side).unwrap_or(u64::MAX)
    }

    /// `true` if spiral index `index` lies on this ring.
    pub fn contains(&self, index: u64) -> bool {
        index >= self.first_index() && index <= self.last_index()
    }

    /// The corner at which `side` ends.
    pub fn corner(&self, side: Side) -> Point {
        side.point_at(*self, self.cells_per_side())
    }
}

/// One side of a ring, in walk order.
///
/// Each side owns `2k` cells and owns the corner at which it ends, so every
/// ring cell belongs to exactly one side:
///
/// - `East` runs north along `x = k`, from `(k, 1 - k)` to the top-right
///   corner `(k, k)`.
/// - `North` runs west along `y = k`, ending at the top-left corner `(-k, k)`.
/// - `West` runs south along `x = -k`, ending at the bottom-left `(-k, -k)`.
/// - `South` runs east along `y = -k`, ending at the bottom-right `(k, -k)`,
///   which is the ring's last index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Right-hand side of the ring.
    East,
    /// Top side of the ring.
    North,
    /// Left-hand side of the ring.
    West,
    /// Bottom side of the ring.
    South,
}

impl Side {
    /// Sides in walk order.
    pub const ALL: [Side; 4] = [Side::East, Side::North, Side::West, Side::South];

    /// Locate `index` on `ring`.
    ///
    /// Returns the side and the 1-based offset along it (`1..=2k`), or
    /// `None` if `index` is not on `ring` or `ring` is the centre.
    pub fn resolve(ring: Ring, index: u64) -> Option<(Side, u64)> {
        if ring.thickness() == 0 || !ring.contains(index) {
            return None;
        }
        let per_side = ring.cells_per_side();
        let pos = index - ring.first_index();
        let side = Self::ALL[(pos / per_side) as usize];
        Some((side, pos % per_side + 1))
    }

    /// Locate a point: its ring, side, and offset along that side.
    ///
    /// Returns `None` for the origin and for points beyond the outermost
    /// ring a `u64` index reaches.
    pub fn locate(p: Point) -> Option<(Ring, Side, u64)> {
        let ring = Ring::of_point(p);
        if ring.thickness() == 0 || ring.thickness() > Ring::MAX_THICKNESS + 1 {
            return None;
        }
        let k = ring.thickness() as i64;
        // Each test excludes the corner the previous side owns.
        let (side, offset) = if p.x == k && p.y > -k {
            (Side::East, p.y + k)
        } else if p.y == k {
            (Side::North, k - p.x)
        } else if p.x == -k {
            (Side::West, k - p.y)
        } else {
            (Side::South, p.x + k)
        };
        Some((ring, side, offset as u64))
    }

    /// Coordinate of the cell `offset` steps along this side of `ring`.
    ///
    /// Interpolates from the side's midpoint, which sits at offset `k`.
    pub fn point_at(self, ring: Ring, offset: u64) -> Point {
        let k = ring.thickness() as i64;
        let from_mid = offset as i64 - k;
        match self {
            Side::East => Point::new(k, from_mid),
            Side::North => Point::new(-from_mid, k),
            Side::West => Point::new(-k, -from_mid),
            Side::South => Point::new(from_mid, -k),
        }
    }

    /// Direction of travel along this side.
    pub fn heading(self) -> Direction {
        match self {
            Side::East => Direction::North,
            Side::North => Direction::West,
            Side::West => Direction::South,
            Side::South => Direction::East,
        }
    }

    fn position(self) -> u64 {
        self as u64
    }

    /// Spiral index of the cell `offset` steps along this side of `ring`.
    pub(crate) fn index_at(self, ring: Ring, offset: u64) -> u128 {
        u128::from(ring.first_index())
            + u128::from(self.position()) * u128::from(ring.cells_per_side())
            + u128::from(offset)
            - 1
    }
}
