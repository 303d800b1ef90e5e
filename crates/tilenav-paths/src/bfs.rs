use std::collections::{BTreeSet, VecDeque};

use tilenav_core::{ObstacleGrid, Point, Range};

use crate::info::{Search, SearchInfo};
use crate::neighbors::Neighbors;
use crate::nodes::{NO_PARENT, UNREACHABLE};

/// Shortest path from `start` to `goal` by breadth-first search.
///
/// Cells are marked visited when they are enqueued, so no cell enters the
/// queue twice, and neighbors are enqueued in down, up, right, left order.
/// Every dequeue counts toward [`SearchInfo::nodes_expanded`].
///
/// Returns the full path (including both endpoints), or an empty path if
/// the goal is unreachable or either endpoint is out of bounds or a wall.
pub fn bfs_search(grid: &ObstacleGrid, start: Point, goal: Point) -> Search {
    if !grid.is_passable(start) || !grid.is_passable(goal) {
        log::debug!("bfs: endpoint not passable (start {start}, goal {goal})");
        return Search::default();
    }
    let (Some(start_idx), Some(goal_idx)) = (grid.index(start), grid.index(goal)) else {
        return Search::default();
    };

    let mut visited = vec![false; grid.len()];
    let mut parent = vec![NO_PARENT; grid.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();

    visited[start_idx] = true;
    queue.push_back(start_idx);

    let mut nodes_expanded = 0;
    let mut found = false;
    let mut nbuf = Neighbors::new();

    while let Some(ci) = queue.pop_front() {
        nodes_expanded += 1;
        if ci == goal_idx {
            found = true;
            break;
        }

        for &np in nbuf.cardinal(grid.point(ci), |p| grid.is_passable(p)) {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if visited[ni] {
                continue;
            }
            visited[ni] = true;
            parent[ni] = ci;
            queue.push_back(ni);
        }
    }

    let mut path = Vec::new();
    if found {
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            path.push(grid.point(ci));
            ci = parent[ci];
        }
        path.reverse();
    }

    log::trace!(
        "bfs {start} -> {goal}: path {} cells, {nodes_expanded} expanded",
        path.len()
    );

    let visited: BTreeSet<Point> = visited
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v)
        .map(|(i, _)| grid.point(i))
        .collect();

    Search {
        path,
        info: SearchInfo {
            visited,
            nodes_expanded,
            heap_ops: 0,
        },
    }
}

/// Step distances from one source cell, computed by [`bfs_distances`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    bounds: Range,
    dist: Vec<i32>,
}

impl DistanceMap {
    /// Distance from the source to `p`.
    ///
    /// Returns [`UNREACHABLE`] if the point is outside the grid or was not
    /// reached.
    pub fn at(&self, p: Point) -> i32 {
        if !self.bounds.contains(p) {
            return UNREACHABLE;
        }
        let w = self.bounds.width() as usize;
        self.dist[p.y as usize * w + p.x as usize]
    }

    /// Whether `p` was reached from the source.
    #[inline]
    pub fn is_reachable(&self, p: Point) -> bool {
        self.at(p) != UNREACHABLE
    }

    /// Iterate over reached cells and their distances, in row-major order.
    pub fn reached(&self) -> impl Iterator<Item = (Point, i32)> + '_ {
        self.bounds
            .iter()
            .zip(self.dist.iter().copied())
            .filter(|&(_, d)| d != UNREACHABLE)
    }
}

/// Compute a breadth-first distance map from `source` over passable cells.
///
/// Each step has cost 1. A source that is out of bounds or a wall reaches
/// nothing.
pub fn bfs_distances(grid: &ObstacleGrid, source: Point) -> DistanceMap {
    let mut dist = vec![UNREACHABLE; grid.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();

    if grid.is_passable(source) {
        if let Some(si) = grid.index(source) {
            dist[si] = 0;
            queue.push_back(si);
        }
    }

    let mut nbuf = Neighbors::new();

    while let Some(ci) = queue.pop_front() {
        let nd = dist[ci] + 1;
        for &np in nbuf.cardinal(grid.point(ci), |p| grid.is_passable(p)) {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = nd;
            queue.push_back(ni);
        }
    }

    DistanceMap {
        bounds: grid.bounds(),
        dist,
    }
}
