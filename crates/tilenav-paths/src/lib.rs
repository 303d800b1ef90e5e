//! Instrumented pathfinding on obstacle grids.
//!
//! This crate provides three interchangeable shortest-path searches over an
//! immutable [`ObstacleGrid`](tilenav_core::ObstacleGrid) with 4-way,
//! unit-cost movement:
//!
//! - **BFS** with parent pointers ([`bfs_search`])
//! - **A\*** keyed by point in hash maps ([`astar_search`])
//! - **A\*** over flat arrays indexed by `y * width + x` ([`astar_search_fast`])
//!
//! Every search returns a [`Search`]: the path (start and goal inclusive,
//! empty when there is none) plus [`SearchInfo`] diagnostics. Searches never
//! panic on out-of-bounds or wall endpoints and keep no state between calls.
//!
//! Both A* variants run the same code, [`astar_with`], parameterized by a
//! [`NodeTable`] that decides how cells are indexed and stored.

mod algorithm;
mod astar;
mod bfs;
mod distance;
mod error;
mod info;
mod neighbors;
mod nodes;
mod path;

pub use algorithm::Algorithm;
pub use astar::{astar_search, astar_search_fast, astar_with};
pub use bfs::{DistanceMap, bfs_distances, bfs_search};
pub use distance::manhattan;
pub use error::ParseAlgorithmError;
pub use info::{Search, SearchInfo};
pub use neighbors::{CARDINALS, Neighbors};
pub use nodes::{FlatNodes, HashedNodes, NO_PARENT, NodeTable, UNREACHABLE};
pub use path::{PathOverlap, is_valid_path};
