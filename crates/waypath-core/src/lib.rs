//! Waypath Core Library
//!
//! Graph search for the waypath CLI: breadth-first search for the nearest
//! node matching a predicate, and Dijkstra shortest paths over
//! non-negatively weighted graphs.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
