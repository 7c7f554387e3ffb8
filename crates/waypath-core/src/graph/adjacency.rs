//! Adjacency-list graph

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::error::{Result, WaypathError};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Edge, NodeId, Weight};

/// A directed graph stored as `node -> ordered outgoing edges`.
///
/// Nodes that only appear as edge targets, or not at all, simply have no
/// outgoing edges. Searches borrow the graph immutably, so it cannot change
/// while one is running; results own their data and stay valid afterwards.
#[derive(Debug, Clone)]
pub struct Graph<N = String> {
    adjacency: HashMap<N, Vec<Edge<N>>>,
    /// Declared nodes in first-seen order
    order: Vec<N>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<N: NodeId> Graph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node with no outgoing edges. No-op if already declared.
    pub fn add_node(&mut self, node: N) {
        if !self.adjacency.contains_key(&node) {
            self.order.push(node.clone());
            self.adjacency.insert(node, Vec::new());
        }
    }

    /// Append an edge. Repeated calls create parallel edges.
    pub fn add_edge(&mut self, from: N, to: N, weight: Option<Weight>) {
        if !self.adjacency.contains_key(&from) {
            self.order.push(from.clone());
        }
        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge::new(to, weight));
    }

    /// Outgoing edges of `node`; empty for unknown nodes
    pub fn neighbors(&self, node: &N) -> &[Edge<N>] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `node` has been declared (as a source or via `add_node`)
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Declared nodes in first-seen order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.order.iter()
    }

    /// Number of declared nodes
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Every node in the graph: declared nodes first, then nodes that only
    /// appear as edge targets, each in first-seen order
    pub fn all_nodes(&self) -> Vec<&N> {
        let mut seen: HashSet<&N> = self.order.iter().collect();
        let mut all: Vec<&N> = self.order.iter().collect();
        for from in &self.order {
            for edge in self.neighbors(from) {
                if seen.insert(&edge.to) {
                    all.push(&edge.to);
                }
            }
        }
        all
    }

    /// Number of distinct nodes, counting target-only nodes
    pub fn distinct_node_count(&self) -> usize {
        self.all_nodes().len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// First edge carrying a negative weight, if any
    pub fn find_negative_edge(&self) -> Option<(&N, &Edge<N>)> {
        self.order.iter().find_map(|from| {
            self.neighbors(from)
                .iter()
                .find(|edge| edge.weight.is_some_and(|w| w.is_negative()))
                .map(|edge| (from, edge))
        })
    }
}

impl<N: NodeId + fmt::Display> Graph<N> {
    /// Reject graphs that break the non-negative weight precondition of
    /// shortest-path search.
    pub fn validate_weights(&self) -> Result<()> {
        match self.find_negative_edge() {
            Some((from, edge)) => Err(WaypathError::NegativeWeight {
                from: from.to_string(),
                to: edge.to.to_string(),
                weight: edge.weight.map(|w| w.value()).unwrap_or_default(),
            }),
            None => Ok(()),
        }
    }
}

impl<N: NodeId> GraphProvider<N> for Graph<N> {
    fn neighbors(&self, node: &N) -> &[Edge<N>] {
        Graph::neighbors(self, node)
    }
}
