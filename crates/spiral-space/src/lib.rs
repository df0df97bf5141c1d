//! Square spiral geometry.
//!
//! The spiral numbers the cells of the infinite square lattice starting at
//! the origin (index 1), stepping east, then winding counterclockwise:
//!
//! ```text
//! 17  16  15  14  13
//! 18   5   4   3  12
//! 19   6   1   2  11
//! 20   7   8   9  10
//! 21  22  23---> ...
//! ```
//!
//! # Contents
//!
//! - [`Ring`] and [`Side`]: decomposition of the spiral into square shells
//!   and their four sides, with unambiguous corner ownership.
//! - [`coordinate_of`], [`distance_from_origin`], [`index_of`]: the
//!   index/coordinate mapping in both directions.
//! - [`SpiralGrid`]: an explicit, visit-ordered mapping from [`Point`] to
//!   cell value with write-once cells.
//! - [`neighbours`]: the 8-connected neighbourhood of a point.
//!
//! [`Point`]: spiral_core::Point

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod mapper;
pub mod neighbourhood;
pub mod ring;

#[cfg(test)]
pub(crate) mod compliance;

pub use grid::SpiralGrid;
pub use mapper::{coordinate_of, distance_from_origin, index_of};
pub use neighbourhood::neighbours;
pub use ring::{Ring, Side};
