use std::collections::BTreeSet;

use tilenav_core::{ObstacleGrid, Point};

/// Whether every cell of `path` is passable and consecutive cells are one
/// orthogonal step apart. The empty path is valid.
pub fn is_valid_path(grid: &ObstacleGrid, path: &[Point]) -> bool {
    path.iter().all(|&p| grid.is_passable(p)) && path.windows(2).all(|w| w[0].is_adjacent(w[1]))
}

/// Cells shared by, or unique to, two paths.
///
/// Used to compare the routes chosen by two algorithms on the same request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathOverlap {
    pub common: BTreeSet<Point>,
    pub only_first: BTreeSet<Point>,
    pub only_second: BTreeSet<Point>,
}

impl PathOverlap {
    pub fn new(first: &[Point], second: &[Point]) -> Self {
        let a: BTreeSet<Point> = first.iter().copied().collect();
        let b: BTreeSet<Point> = second.iter().copied().collect();
        Self {
            common: a.intersection(&b).copied().collect(),
            only_first: a.difference(&b).copied().collect(),
            only_second: b.difference(&a).copied().collect(),
        }
    }

    /// Whether both paths visit the same cells.
    pub fn is_identical(&self) -> bool {
        self.only_first.is_empty() && self.only_second.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn valid_paths() {
        let grid = ObstacleGrid::parse("...\n.#.").unwrap();
        assert!(is_valid_path(&grid, &[]));
        assert!(is_valid_path(&grid, &pts(&[(0, 1), (0, 0), (1, 0), (2, 0)])));
    }

    #[test]
    fn invalid_paths() {
        let grid = ObstacleGrid::parse("...\n.#.").unwrap();
        // Diagonal step.
        assert!(!is_valid_path(&grid, &pts(&[(0, 0), (1, 1)])));
        // Through a wall.
        assert!(!is_valid_path(&grid, &pts(&[(0, 1), (1, 1), (2, 1)])));
        // Jump.
        assert!(!is_valid_path(&grid, &pts(&[(0, 0), (2, 0)])));
        // Off the grid.
        assert!(!is_valid_path(&grid, &pts(&[(0, 0), (-1, 0)])));
    }

    #[test]
    fn overlap() {
        let a = pts(&[(0, 0), (0, 1), (1, 1)]);
        let b = pts(&[(0, 0), (1, 0), (1, 1)]);
        let o = PathOverlap::new(&a, &b);
        assert_eq!(o.common.len(), 2);
        assert_eq!(o.only_first, BTreeSet::from([Point::new(0, 1)]));
        assert_eq!(o.only_second, BTreeSet::from([Point::new(1, 0)]));
        assert!(!o.is_identical());
        assert!(PathOverlap::new(&a, &a).is_identical());
    }
}
