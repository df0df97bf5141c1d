//! Core types for the square spiral workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types shared by the mapper and the walk: the integer
//! [`Point`], the eight-way [`Direction`], and the [`SpiralError`] enum.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod point;

pub use direction::Direction;
pub use error::{require_positive, SpiralError};
pub use point::Point;
