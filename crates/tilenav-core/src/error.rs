use thiserror::Error;

use crate::geom::Point;

/// Errors that can occur when building an [`ObstacleGrid`](crate::ObstacleGrid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A row's length differs from the first row's.
    #[error("grid: row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A layout character that maps to no cell code.
    #[error("grid contains invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },
    /// A dimension does not fit in grid coordinates.
    #[error("grid: dimension {0} exceeds the coordinate range")]
    TooLarge(usize),
}
