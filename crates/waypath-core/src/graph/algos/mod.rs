//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first search for the nearest matching node
//! - `dijkstra`: Weighted shortest paths from a start node
//! - `shared`: Common utilities used by multiple algorithms

pub mod bfs;
pub mod dijkstra;
pub mod shared;

pub use bfs::{bfs_find_path, breadth_first_search};
pub use dijkstra::{checked_dijkstra, dijkstra, HeapEntry, ShortestPaths};
pub use shared::reconstruct_path;
