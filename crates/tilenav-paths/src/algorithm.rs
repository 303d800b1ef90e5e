//! Runtime selection between the search implementations.

use std::fmt;
use std::str::FromStr;

use tilenav_core::{ObstacleGrid, Point};

use crate::error::ParseAlgorithmError;
use crate::info::Search;
use crate::{astar_search, astar_search_fast, bfs_search};

/// One of the interchangeable search functions.
///
/// All variants share a contract: same inputs, a path of optimal length
/// when one exists, and [`SearchInfo`](crate::SearchInfo) diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    /// [`bfs_search`]
    Bfs,
    /// [`astar_search`]
    Astar,
    /// [`astar_search_fast`]
    AstarFast,
}

impl Algorithm {
    /// Every algorithm, in benchmark order.
    pub const ALL: [Algorithm; 3] = [Self::Bfs, Self::Astar, Self::AstarFast];

    /// Short snake_case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Astar => "astar",
            Self::AstarFast => "astar_fast",
        }
    }

    /// Run the search, returning the path and its diagnostics.
    pub fn search(self, grid: &ObstacleGrid, start: Point, goal: Point) -> Search {
        match self {
            Self::Bfs => bfs_search(grid, start, goal),
            Self::Astar => astar_search(grid, start, goal),
            Self::AstarFast => astar_search_fast(grid, start, goal),
        }
    }

    /// Run the search and return only the path (empty if none).
    pub fn find_path(self, grid: &ObstacleGrid, start: Point, goal: Point) -> Vec<Point> {
        self.search(grid, start, goal).into_path()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for a in Algorithm::ALL {
            assert_eq!(a.to_string().parse::<Algorithm>(), Ok(a));
        }
        assert_eq!("ASTAR_FAST".parse(), Ok(Algorithm::AstarFast));
    }

    #[test]
    fn unknown_name() {
        let err = "dijkstra".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, ParseAlgorithmError("dijkstra".into()));
        assert!(err.to_string().contains("dijkstra"));
    }

    #[test]
    fn find_path_drops_diagnostics() {
        let grid = ObstacleGrid::open(3, 3);
        for a in Algorithm::ALL {
            let path = a.find_path(&grid, Point::new(0, 0), Point::new(2, 2));
            assert_eq!(path.len(), 5, "{a}");
            assert_eq!(path, a.search(&grid, Point::new(0, 0), Point::new(2, 2)).path);
        }
    }
}
