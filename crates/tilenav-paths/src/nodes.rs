use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap, HashSet};

use tilenav_core::{ObstacleGrid, Point};

/// Sentinel cost meaning "no path found yet" / "unreachable".
pub const UNREACHABLE: i32 = i32::MAX;

/// Sentinel parent index for nodes without a parent (the start node).
pub const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// NodeTable
// ---------------------------------------------------------------------------

/// Cell-indexing strategy for A*.
///
/// A table maps in-bounds points to node ids and stores, per node, the best
/// known cost `g`, the parent pointer and the closed flag. A fresh table is
/// built for every search, so nothing carries over between calls.
pub trait NodeTable {
    /// Node identifier handed to the open list.
    type Id: Copy + Eq;

    /// Create an empty table for `grid`.
    fn for_grid(grid: &ObstacleGrid) -> Self;

    /// Id of an in-bounds point.
    fn id(&self, p: Point) -> Self::Id;

    /// Decode an id back into its point.
    fn point(&self, id: Self::Id) -> Point;

    /// Best known cost to reach `id`, or [`UNREACHABLE`] if unseen.
    fn g(&self, id: Self::Id) -> i32;

    fn set_g(&mut self, id: Self::Id, g: i32);

    fn parent(&self, id: Self::Id) -> Option<Self::Id>;

    fn set_parent(&mut self, id: Self::Id, parent: Self::Id);

    fn is_closed(&self, id: Self::Id) -> bool;

    fn close(&mut self, id: Self::Id);

    /// Every closed node, as points.
    fn closed_points(&self) -> BTreeSet<Point>;
}

/// Node table keyed directly by [`Point`] in hash maps.
///
/// Memory grows with the explored area only.
#[derive(Debug, Default)]
pub struct HashedNodes {
    g_score: HashMap<Point, i32>,
    came_from: HashMap<Point, Point>,
    closed: HashSet<Point>,
}

impl NodeTable for HashedNodes {
    type Id = Point;

    fn for_grid(_grid: &ObstacleGrid) -> Self {
        Self::default()
    }

    #[inline]
    fn id(&self, p: Point) -> Point {
        p
    }

    #[inline]
    fn point(&self, id: Point) -> Point {
        id
    }

    #[inline]
    fn g(&self, id: Point) -> i32 {
        self.g_score.get(&id).copied().unwrap_or(UNREACHABLE)
    }

    #[inline]
    fn set_g(&mut self, id: Point, g: i32) {
        self.g_score.insert(id, g);
    }

    #[inline]
    fn parent(&self, id: Point) -> Option<Point> {
        self.came_from.get(&id).copied()
    }

    #[inline]
    fn set_parent(&mut self, id: Point, parent: Point) {
        self.came_from.insert(id, parent);
    }

    #[inline]
    fn is_closed(&self, id: Point) -> bool {
        self.closed.contains(&id)
    }

    #[inline]
    fn close(&mut self, id: Point) {
        self.closed.insert(id);
    }

    fn closed_points(&self) -> BTreeSet<Point> {
        self.closed.iter().copied().collect()
    }
}

/// Node table backed by flat arrays indexed by `y * width + x`.
///
/// All arrays are sized to the whole grid up front.
#[derive(Debug)]
pub struct FlatNodes {
    width: usize,
    g_score: Vec<i32>,
    came_from: Vec<usize>,
    closed: Vec<bool>,
}

impl NodeTable for FlatNodes {
    type Id = usize;

    fn for_grid(grid: &ObstacleGrid) -> Self {
        let len = grid.len();
        Self {
            width: grid.width().max(1) as usize,
            g_score: vec![UNREACHABLE; len],
            came_from: vec![NO_PARENT; len],
            closed: vec![false; len],
        }
    }

    #[inline]
    fn id(&self, p: Point) -> usize {
        p.y as usize * self.width + p.x as usize
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    #[inline]
    fn g(&self, idx: usize) -> i32 {
        self.g_score[idx]
    }

    #[inline]
    fn set_g(&mut self, idx: usize, g: i32) {
        self.g_score[idx] = g;
    }

    #[inline]
    fn parent(&self, idx: usize) -> Option<usize> {
        match self.came_from[idx] {
            NO_PARENT => None,
            p => Some(p),
        }
    }

    #[inline]
    fn set_parent(&mut self, idx: usize, parent: usize) {
        self.came_from[idx] = parent;
    }

    #[inline]
    fn is_closed(&self, idx: usize) -> bool {
        self.closed[idx]
    }

    #[inline]
    fn close(&mut self, idx: usize) {
        self.closed[idx] = true;
    }

    fn closed_points(&self) -> BTreeSet<Point> {
        self.closed
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c)
            .map(|(i, _)| self.point(i))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Open-list entry
// ---------------------------------------------------------------------------

/// Open-list entry, ordered by `(f, seq)` for use in `BinaryHeap`.
///
/// `seq` is the insertion counter: among equal `f`, the entry pushed first
/// pops first, which keeps results reproducible.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry<I> {
    pub(crate) f: i32,
    pub(crate) seq: u64,
    pub(crate) id: I,
}

impl<I> PartialEq for OpenEntry<I> {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl<I> Eq for OpenEntry<I> {}

impl<I> Ord for OpenEntry<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, seq) first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<I> PartialOrd for OpenEntry<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn flat_ids_round_trip() {
        let grid = ObstacleGrid::open(7, 3);
        let t = FlatNodes::for_grid(&grid);
        for p in grid.bounds() {
            let id = t.id(p);
            assert_eq!(Some(id), grid.index(p));
            assert_eq!(t.point(id), p);
        }
    }

    #[test]
    fn fresh_tables_are_unreached() {
        let grid = ObstacleGrid::open(4, 4);
        let flat = FlatNodes::for_grid(&grid);
        let hashed = HashedNodes::for_grid(&grid);
        let p = Point::new(2, 3);
        assert_eq!(flat.g(flat.id(p)), UNREACHABLE);
        assert_eq!(hashed.g(p), UNREACHABLE);
        assert_eq!(flat.parent(flat.id(p)), None);
        assert_eq!(hashed.parent(p), None);
        assert!(!flat.is_closed(flat.id(p)));
        assert!(!hashed.is_closed(p));
    }

    #[test]
    fn closed_points_decode_indices() {
        let grid = ObstacleGrid::open(5, 5);
        let mut flat = FlatNodes::for_grid(&grid);
        let mut hashed = HashedNodes::for_grid(&grid);
        for p in [Point::new(4, 0), Point::new(1, 3)] {
            flat.close(flat.id(p));
            hashed.close(p);
        }
        assert_eq!(flat.closed_points(), hashed.closed_points());
        assert!(flat.closed_points().contains(&Point::new(1, 3)));
    }

    #[test]
    fn parent_pointers() {
        let grid = ObstacleGrid::open(3, 3);
        let mut flat = FlatNodes::for_grid(&grid);
        let a = flat.id(Point::new(0, 0));
        let b = flat.id(Point::new(0, 1));
        flat.set_parent(b, a);
        assert_eq!(flat.parent(b), Some(a));
        assert_eq!(flat.parent(a), None);
    }

    #[test]
    fn open_entries_pop_by_f_then_insertion_order() {
        let mut heap = BinaryHeap::new();
        heap.push(OpenEntry { f: 5, seq: 0, id: 'a' });
        heap.push(OpenEntry { f: 3, seq: 1, id: 'b' });
        heap.push(OpenEntry { f: 5, seq: 2, id: 'c' });
        heap.push(OpenEntry { f: 3, seq: 3, id: 'd' });
        let order: Vec<char> = std::iter::from_fn(|| heap.pop().map(|e| e.id)).collect();
        assert_eq!(order, vec!['b', 'd', 'a', 'c']);
    }
}
