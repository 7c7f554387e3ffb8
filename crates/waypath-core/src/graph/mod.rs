//! Graph storage, search and path-finding
//!
//! Provides the graph model and the algorithms that run over it:
//! - Adjacency-list graph with optional edge weights
//! - BFS for the nearest node matching a predicate
//! - Dijkstra for weighted shortest paths
//! - Graph provider trait for pluggable adjacency sources
//! - Loading graph descriptions from JSON, TOML or YAML

pub mod adjacency;
pub mod algos;
pub mod io;
pub mod traversal;
pub mod types;

pub use adjacency::Graph;
pub use algos::{
    bfs_find_path, breadth_first_search, checked_dijkstra, dijkstra, ShortestPaths,
};
pub use io::{AdjacencyLists, GraphFile, GraphFormat};
pub use traversal::GraphProvider;
pub use types::{Edge, NodeId, Weight};
