use std::collections::BinaryHeap;

use tilenav_core::{ObstacleGrid, Point};

use crate::distance::manhattan;
use crate::info::{Search, SearchInfo};
use crate::neighbors::Neighbors;
use crate::nodes::{FlatNodes, HashedNodes, NodeTable, OpenEntry};

/// Shortest path from `start` to `goal` using A* with hash maps keyed by
/// point.
///
/// See [`astar_with`] for the algorithm and the diagnostics it records.
pub fn astar_search(grid: &ObstacleGrid, start: Point, goal: Point) -> Search {
    astar_with::<HashedNodes>(grid, start, goal)
}

/// Shortest path from `start` to `goal` using A* over flat arrays indexed
/// by `y * width + x`.
///
/// Behaves exactly like [`astar_search`], trading memory proportional to
/// the whole grid for cheaper per-node bookkeeping.
pub fn astar_search_fast(grid: &ObstacleGrid, start: Point, goal: Point) -> Search {
    astar_with::<FlatNodes>(grid, start, goal)
}

/// A* search generic over the node table.
///
/// Each step costs 1 and the heuristic is the Manhattan distance. The open
/// list is ordered by `(f, insertion order)`. Entries are never removed
/// early: a popped node that is already closed is discarded, and still
/// counts toward [`SearchInfo::nodes_expanded`]. Neighbors are relaxed in
/// down, up, right, left order.
///
/// Returns the full path (including both endpoints), or an empty path if
/// the goal is unreachable or either endpoint is out of bounds or a wall.
pub fn astar_with<T: NodeTable>(grid: &ObstacleGrid, start: Point, goal: Point) -> Search {
    if !grid.is_passable(start) || !grid.is_passable(goal) {
        log::debug!("astar: endpoint not passable (start {start}, goal {goal})");
        return Search::default();
    }

    let mut nodes = T::for_grid(grid);
    let start_id = nodes.id(start);
    let goal_id = nodes.id(goal);
    nodes.set_g(start_id, 0);

    let mut open: BinaryHeap<OpenEntry<T::Id>> = BinaryHeap::new();
    let mut seq: u64 = 0;
    open.push(OpenEntry {
        f: manhattan(start, goal),
        seq,
        id: start_id,
    });
    let mut heap_ops = 1;
    let mut nodes_expanded = 0;

    let mut nbuf = Neighbors::new();

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };
        nodes_expanded += 1;

        let ci = current.id;

        // Skip stale entries.
        if nodes.is_closed(ci) {
            continue;
        }

        if ci == goal_id {
            break 'search true;
        }

        nodes.close(ci);
        let current_point = nodes.point(ci);
        let tentative_g = nodes.g(ci) + 1;

        for &np in nbuf.cardinal(current_point, |p| grid.is_passable(p)) {
            let ni = nodes.id(np);
            if tentative_g >= nodes.g(ni) {
                continue;
            }
            nodes.set_g(ni, tentative_g);
            nodes.set_parent(ni, ci);

            seq += 1;
            open.push(OpenEntry {
                f: tentative_g + manhattan(np, goal),
                seq,
                id: ni,
            });
            heap_ops += 1;
        }
    };

    let path = if found {
        let mut path = Vec::new();
        let mut cur = Some(goal_id);
        while let Some(id) = cur {
            path.push(nodes.point(id));
            cur = nodes.parent(id);
        }
        path.reverse();
        path
    } else {
        Vec::new()
    };

    log::trace!(
        "astar {start} -> {goal}: path {} cells, {nodes_expanded} expanded, {heap_ops} heap ops",
        path.len()
    );

    Search {
        path,
        info: SearchInfo {
            visited: nodes.closed_points(),
            nodes_expanded,
            heap_ops,
        },
    }
}
