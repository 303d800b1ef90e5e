use std::collections::BTreeSet;

use tilenav_core::Point;

/// Counters and explored cells recorded by one search call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchInfo {
    /// For BFS, every discovered cell, since cells are marked when enqueued.
    /// For both A* variants, the closed set: cells whose cost was finalized
    /// before the goal was popped.
    pub visited: BTreeSet<Point>,
    /// Frontier pops, including stale entries that were discarded.
    pub nodes_expanded: usize,
    /// Priority-queue pushes, including the seed. Always 0 for BFS.
    pub heap_ops: usize,
}

/// The outcome of a search: a path and the diagnostics of the run.
///
/// An empty `path` means the goal is unreachable, or that the start or goal
/// is out of bounds or on a wall.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Search {
    pub path: Vec<Point>,
    pub info: SearchInfo,
}

impl Search {
    /// Whether a path was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves along the path, or `None` if no path was found.
    pub fn steps(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    /// Drop the diagnostics and keep the path.
    pub fn into_path(self) -> Vec<Point> {
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_is_not_found() {
        let s = Search::default();
        assert!(!s.found());
        assert_eq!(s.steps(), None);
        assert!(s.into_path().is_empty());
    }

    #[test]
    fn steps_counts_moves() {
        let s = Search {
            path: vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)],
            info: SearchInfo::default(),
        };
        assert!(s.found());
        assert_eq!(s.steps(), Some(2));
    }
}
