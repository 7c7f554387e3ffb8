use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::algos::shared::reconstruct_path;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::NodeId;

/// State tracked during a breadth-first search
struct BfsState<N> {
    /// Nodes already expanded. Seeded with the start node so it is never
    /// tested against the predicate.
    visited: HashSet<N>,
    queue: VecDeque<N>,
    /// First node each node was enqueued from
    predecessors: HashMap<N, N>,
}

impl<N: NodeId> BfsState<N> {
    fn new(start: &N) -> Self {
        Self {
            visited: HashSet::from([start.clone()]),
            queue: VecDeque::new(),
            predecessors: HashMap::new(),
        }
    }

    /// Enqueue every neighbor of `from`; duplicates are filtered at dequeue time
    fn enqueue_neighbors<P>(&mut self, provider: &P, from: &N)
    where
        P: GraphProvider<N> + ?Sized,
    {
        for edge in provider.neighbors(from) {
            if !self.visited.contains(&edge.to) {
                self.predecessors
                    .entry(edge.to.clone())
                    .or_insert_with(|| from.clone());
            }
            self.queue.push_back(edge.to.clone());
        }
    }
}

/// Core loop shared by [`breadth_first_search`] and [`bfs_find_path`]
fn bfs_search<N, P, F>(provider: &P, start: &N, mut is_target: F) -> Option<(N, HashMap<N, N>)>
where
    N: NodeId,
    P: GraphProvider<N> + ?Sized,
    F: FnMut(&N) -> bool,
{
    let mut state = BfsState::new(start);
    state.enqueue_neighbors(provider, start);

    while let Some(current) = state.queue.pop_front() {
        if state.visited.contains(&current) {
            continue;
        }

        if is_target(&current) {
            tracing::debug!(found = ?current, visited = state.visited.len(), "target found");
            return Some((current, state.predecessors));
        }

        state.enqueue_neighbors(provider, &current);
        tracing::trace!(node = ?current, queued = state.queue.len(), "expanded");
        state.visited.insert(current);
    }

    tracing::debug!(visited = state.visited.len(), "target not reachable");
    None
}

/// Breadth-first search for the nearest node satisfying `is_target`.
///
/// The search starts from the neighbors of `start`; `start` itself is never
/// tested. Nodes are examined in non-decreasing hop distance, and within a
/// layer in adjacency insertion order, so the returned node is the shallowest
/// match. Edge weights are ignored. Each node is expanded at most once, so
/// cycles and self-loops terminate in O(V + E).
#[tracing::instrument(skip_all, fields(start = ?start))]
pub fn breadth_first_search<N, P, F>(provider: &P, start: &N, is_target: F) -> Option<N>
where
    N: NodeId,
    P: GraphProvider<N> + ?Sized,
    F: FnMut(&N) -> bool,
{
    bfs_search(provider, start, is_target).map(|(found, _)| found)
}

/// Like [`breadth_first_search`], but returns the hop path from `start` to
/// the match (both ends included).
#[tracing::instrument(skip_all, fields(start = ?start))]
pub fn bfs_find_path<N, P, F>(provider: &P, start: &N, is_target: F) -> Option<Vec<N>>
where
    N: NodeId,
    P: GraphProvider<N> + ?Sized,
    F: FnMut(&N) -> bool,
{
    let (found, predecessors) = bfs_search(provider, start, is_target)?;
    reconstruct_path(start, &found, &predecessors)
}
