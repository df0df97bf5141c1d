//! Neighbour-sum walk over the square spiral.
//!
//! [`SpiralWalk`] visits the spiral cell by cell, giving each new cell the
//! sum of its already-visited 8-neighbours. [`first_value_exceeding`] runs a
//! walk until a value passes a threshold; [`run`] does the same under a
//! validated [`WalkConfig`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod walk;

pub use config::{ConfigError, WalkConfig};
pub use walk::{first_value_exceeding, run, Cell, SpiralWalk};
