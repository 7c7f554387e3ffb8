use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;

use crate::error::Result;
use crate::graph::algos::shared::reconstruct_path;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{NodeId, Weight};
use crate::graph::Graph;

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost)
#[derive(Debug, Clone)]
pub struct HeapEntry<N> {
    pub node: N,
    pub accumulated_cost: Weight,
}

impl<N: Ord> PartialEq for HeapEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord> Eq for HeapEntry<N> {}

impl<N: Ord> PartialOrd for HeapEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord> Ord for HeapEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Equal costs fall back to the node label so results are deterministic
        self.accumulated_cost
            .total_cmp(&other.accumulated_cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Minimum-cost distances and predecessor links from a start node.
///
/// Only reached nodes appear in `costs`/`parents`; the start node has cost
/// zero and no parent.
#[derive(Debug, Clone)]
pub struct ShortestPaths<N> {
    start: N,
    costs: HashMap<N, Weight>,
    parents: HashMap<N, N>,
    settled_order: Vec<N>,
}

impl<N: NodeId> PartialEq for ShortestPaths<N> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.costs == other.costs
            && self.parents == other.parents
            && self.settled_order == other.settled_order
    }
}

impl<N: NodeId> ShortestPaths<N> {
    pub fn start(&self) -> &N {
        &self.start
    }

    /// Final cost of reaching `node`, or `None` if unreachable
    pub fn cost(&self, node: &N) -> Option<Weight> {
        self.costs.get(node).copied()
    }

    /// Predecessor of `node` on its shortest path
    pub fn parent(&self, node: &N) -> Option<&N> {
        self.parents.get(node)
    }

    pub fn costs(&self) -> &HashMap<N, Weight> {
        &self.costs
    }

    pub fn parents(&self) -> &HashMap<N, N> {
        &self.parents
    }

    /// Reached nodes in the order they were settled (non-decreasing cost)
    pub fn settled_order(&self) -> &[N] {
        &self.settled_order
    }

    pub fn is_reachable(&self, node: &N) -> bool {
        self.costs.contains_key(node)
    }

    /// Shortest path from the start node to `node`, both ends included
    pub fn path_to(&self, node: &N) -> Option<Vec<N>> {
        if !self.is_reachable(node) {
            return None;
        }
        reconstruct_path(&self.start, node, &self.parents)
    }
}

/// State tracked during Dijkstra traversal
struct DijkstraState<N> {
    costs: HashMap<N, Weight>,
    parents: HashMap<N, N>,
    settled: HashSet<N>,
    settled_order: Vec<N>,
    heap: BinaryHeap<Reverse<HeapEntry<N>>>,
}

impl<N: NodeId> DijkstraState<N> {
    fn new(start: &N) -> Self {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry {
            node: start.clone(),
            accumulated_cost: Weight::ZERO,
        }));

        Self {
            costs: HashMap::from([(start.clone(), Weight::ZERO)]),
            parents: HashMap::new(),
            settled: HashSet::new(),
            settled_order: Vec::new(),
            heap,
        }
    }

    /// Offer a path to `to` through `from`, keeping it if strictly cheaper
    fn relax(&mut self, from: &N, to: &N, candidate: Weight) {
        if self.settled.contains(to) {
            return;
        }

        let improves = match self.costs.get(to) {
            Some(existing) => candidate.total_cmp(existing) == Ordering::Less,
            None => true,
        };

        if improves {
            self.costs.insert(to.clone(), candidate);
            self.parents.insert(to.clone(), from.clone());
            self.heap.push(Reverse(HeapEntry {
                node: to.clone(),
                accumulated_cost: candidate,
            }));
        }
    }
}

/// Compute shortest paths from `start` to every reachable node.
///
/// Edges without a weight are skipped. Every weight must be non-negative:
/// a negative weight is not detected here and yields wrong costs. Use
/// [`checked_dijkstra`] to validate first.
///
/// Uses a binary heap without decrease-key; stale heap entries are skipped
/// when popped. O((V + E) log V).
#[tracing::instrument(skip_all, fields(start = ?start))]
pub fn dijkstra<N, P>(provider: &P, start: &N) -> ShortestPaths<N>
where
    N: NodeId,
    P: GraphProvider<N> + ?Sized,
{
    let mut state = DijkstraState::new(start);

    while let Some(Reverse(HeapEntry {
        node: current,
        accumulated_cost,
    })) = state.heap.pop()
    {
        if !state.settled.insert(current.clone()) {
            continue;
        }
        tracing::trace!(node = ?current, cost = %accumulated_cost, "settled");
        state.settled_order.push(current.clone());

        for edge in provider.neighbors(&current) {
            let Some(weight) = edge.weight else {
                continue;
            };
            state.relax(&current, &edge.to, accumulated_cost + weight);
        }
    }

    tracing::debug!(reached = state.settled_order.len(), "shortest paths computed");

    ShortestPaths {
        start: start.clone(),
        costs: state.costs,
        parents: state.parents,
        settled_order: state.settled_order,
    }
}

/// [`dijkstra`] over a [`Graph`], rejecting negative edge weights up front
pub fn checked_dijkstra<N>(graph: &Graph<N>, start: &N) -> Result<ShortestPaths<N>>
where
    N: NodeId + fmt::Display,
{
    graph.validate_weights()?;
    Ok(dijkstra(graph, start))
}
