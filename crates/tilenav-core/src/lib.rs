//! **tilenav-core**: core types for tile-grid navigation.
//!
//! This crate provides the foundational types shared by the *tilenav*
//! crates: geometry primitives and the immutable obstacle grid that the
//! search algorithms in `tilenav-paths` read from.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Point, Range, RangeIter};
pub use grid::{Cell, ObstacleGrid};
#[cfg(feature = "serde")]
pub use grid::GridLayout;
