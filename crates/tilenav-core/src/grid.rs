//! An immutable integer-cell grid with walls.
//!
//! [`Cell`] is a newtype over `i32` naming the terrain code of one tile.
//! [`ObstacleGrid`] is a rectangular, read-only table of such cells in which
//! one designated code marks impassable walls. Every other code is
//! traversable.

use std::fmt;

use crate::error::GridError;
use crate::geom::{Point, Range};

/// A map cell value, wrapping an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Cell(pub i32);

impl Cell {
    /// Open floor.
    pub const FLOOR: Cell = Cell(0);
    /// The conventional wall code.
    pub const WALL: Cell = Cell(1);

    /// Create a new cell with the given value.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the underlying integer value.
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

impl From<Cell> for i32 {
    fn from(c: Cell) -> Self {
        c.0
    }
}

/// A rectangular, immutable grid of [`Cell`] values.
///
/// Width and height are derived from the table the grid is built from.
/// The origin (0, 0) is the top-left cell; points are (column, row).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "GridLayout", into = "GridLayout")
)]
pub struct ObstacleGrid {
    cells: Vec<Cell>,
    bounds: Range,
    wall: Cell,
}

fn dim(n: usize) -> Result<i32, GridError> {
    i32::try_from(n).map_err(|_| GridError::TooLarge(n))
}

impl ObstacleGrid {
    /// Create a wall-free grid filled with [`Cell::FLOOR`].
    ///
    /// Negative dimensions produce an empty grid.
    pub fn open(width: i32, height: i32) -> Self {
        Self::from_fn(width, height, |_| Cell::FLOOR)
    }

    /// Create a grid by evaluating `f` at every point, in row-major order.
    /// The wall code is [`Cell::WALL`].
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> Cell) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        let cells = bounds.iter().map(&mut f).collect();
        Self {
            cells,
            bounds,
            wall: Cell::WALL,
        }
    }

    /// Build a grid from a table of rows, using [`Cell::WALL`] as the wall
    /// code.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, GridError> {
        Self::with_wall(rows, Cell::WALL)
    }

    /// Build a grid from a table of rows with a custom wall code.
    ///
    /// Every row must have the length of the first one.
    pub fn with_wall<R: AsRef<[i32]>>(rows: &[R], wall: Cell) -> Result<Self, GridError> {
        let w = rows.first().map_or(0, |r| r.as_ref().len());
        let width = dim(w)?;
        let height = dim(rows.len())?;

        let mut cells = Vec::with_capacity(w * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != w {
                return Err(GridError::Ragged {
                    row: y,
                    expected: w,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().copied().map(Cell));
        }

        Ok(Self {
            cells,
            bounds: Range::new(0, 0, width, height),
            wall,
        })
    }

    /// Parse an ASCII layout.
    ///
    /// `#` is a wall, `.` is floor and a decimal digit is that raw cell
    /// code. Lines are separated by `'\n'` and must all have the same width.
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let mut rows: Vec<Vec<i32>> = Vec::new();
        for (y, line) in s.trim().lines().enumerate() {
            let row = line
                .chars()
                .enumerate()
                .map(|(x, ch)| match ch {
                    '#' => Ok(Cell::WALL.0),
                    '.' => Ok(Cell::FLOOR.0),
                    _ => ch.to_digit(10).map(|d| d as i32).ok_or(GridError::InvalidChar {
                        ch,
                        pos: Point::new(x as i32, y as i32),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    /// The wall code of this grid.
    #[inline]
    pub fn wall(&self) -> Cell {
        self.wall
    }

    /// Returns the bounding range of this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Returns the size as a Point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Convert a `Point` to a flat row-major index (`y * width + x`).
    /// Returns `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width() as usize + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width().max(1) as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is in bounds and holds the wall code.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.at(p) == Some(self.wall)
    }

    /// Whether `p` is in bounds and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        matches!(self.at(p), Some(c) if c != self.wall)
    }

    /// The cells of row `y`, or `None` if `y` is out of bounds.
    pub fn row(&self, y: i32) -> Option<&[Cell]> {
        if y < 0 || y >= self.height() {
            return None;
        }
        let w = self.width() as usize;
        let start = y as usize * w;
        Some(&self.cells[start..start + w])
    }

    /// Iterate over the positions of all wall cells, in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = Point> + '_ {
        self.bounds.iter().filter(|&p| self.is_wall(p))
    }

    /// Count cells equal to `c`.
    pub fn count(&self, c: Cell) -> usize {
        self.cells.iter().filter(|&&v| v == c).count()
    }
}

/// Renders `#` for walls and `.` for every passable cell.
///
/// Cell codes are not kept, only passability: parsing the output yields a
/// grid with the same walls, whatever this grid's wall code is.
impl fmt::Display for ObstacleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            if y > 0 {
                writeln!(f)?;
            }
            for &c in self.row(y).unwrap_or_default() {
                let ch = if c == self.wall { '#' } else { '.' };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Serialized form: a table of rows plus the wall code.
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
fn default_wall() -> Cell {
    Cell::WALL
}

/// Serialized form of an [`ObstacleGrid`].
///
/// `wall` may be omitted and defaults to [`Cell::WALL`].
#[cfg(feature = "serde")]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GridLayout {
    pub rows: Vec<Vec<i32>>,
    #[serde(default = "default_wall")]
    pub wall: Cell,
}

#[cfg(feature = "serde")]
impl TryFrom<GridLayout> for ObstacleGrid {
    type Error = GridError;

    fn try_from(layout: GridLayout) -> Result<Self, GridError> {
        Self::with_wall(&layout.rows, layout.wall)
    }
}

#[cfg(feature = "serde")]
impl From<ObstacleGrid> for GridLayout {
    fn from(grid: ObstacleGrid) -> Self {
        let rows = (0..grid.height())
            .map(|y| {
                grid.row(y)
                    .unwrap_or_default()
                    .iter()
                    .map(|c| c.0)
                    .collect()
            })
            .collect();
        Self {
            rows,
            wall: grid.wall,
        }
    }
}
