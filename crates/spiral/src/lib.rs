//! Spiral: coordinates and neighbour sums on the infinite square spiral.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the spiral sub-crates. For most users, adding `spiral` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use spiral::prelude::*;
//!
//! // Where does cell 1024 sit, and how far is it from the centre?
//! let p = coordinate_of(1024).unwrap();
//! assert_eq!(p, Point::new(-15, 16));
//! assert_eq!(distance_from_origin(1024).unwrap(), 31.0);
//!
//! // First neighbour sum larger than 750.
//! assert_eq!(first_value_exceeding(750).unwrap(), 806);
//!
//! // Or drive the walk by hand.
//! let first: Vec<u64> = SpiralWalk::new().take(6).map(|c| c.value).collect();
//! assert_eq!(first, [1, 1, 2, 4, 5, 10]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `spiral-core` | `Point`, `Direction`, `SpiralError` |
//! | [`space`] | `spiral-space` | Rings, sides, index mapping, the spiral grid |
//! | [`engine`] | `spiral-engine` | The neighbour-sum walk and its configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and errors (`spiral-core`).
pub use spiral_core as types;

/// Ring geometry and index/coordinate mapping (`spiral-space`).
///
/// Provides [`space::coordinate_of`], [`space::index_of`],
/// [`space::Ring`], [`space::Side`], and [`space::SpiralGrid`].
pub use spiral_space as space;

/// The neighbour-sum walk (`spiral-engine`).
///
/// [`engine::SpiralWalk`] for step-by-step control,
/// [`engine::first_value_exceeding`] and [`engine::run`] for threshold
/// searches.
pub use spiral_engine as engine;

/// Common imports for typical usage.
///
/// ```rust
/// use spiral::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use spiral_core::{Direction, Point, SpiralError};

    // Mapper
    pub use spiral_space::{coordinate_of, distance_from_origin, index_of, Ring, Side, SpiralGrid};

    // Walk
    pub use spiral_engine::{first_value_exceeding, run, Cell, ConfigError, SpiralWalk, WalkConfig};
}
