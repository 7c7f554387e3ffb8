use crate::graph::types::Edge;

/// Trait for providing graph adjacency to the search algorithms
pub trait GraphProvider<N> {
    /// Declared outgoing edges of `node`, in insertion order.
    /// Unknown nodes have no edges.
    fn neighbors(&self, node: &N) -> &[Edge<N>];
}
