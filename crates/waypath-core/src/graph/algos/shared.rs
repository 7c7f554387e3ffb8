//! Utilities shared by the search algorithms

use std::collections::HashMap;

use crate::graph::types::NodeId;

/// Walk a predecessor map back from `to` to `from` and return the path in
/// forward order (`from` first, `to` last).
///
/// Returns `None` when the chain breaks before reaching `from`, i.e. `to`
/// was never reached.
pub fn reconstruct_path<N: NodeId>(
    from: &N,
    to: &N,
    predecessors: &HashMap<N, N>,
) -> Option<Vec<N>> {
    let mut path = vec![to.clone()];
    let mut current = to;

    while current != from {
        // Predecessor chains are acyclic, so this bounds a corrupted map
        if path.len() > predecessors.len() + 1 {
            return None;
        }
        current = predecessors.get(current)?;
        path.push(current.clone());
    }

    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_simple_chain() {
        let preds: HashMap<&str, &str> = [("a", "b"), ("b", "start"), ("finish", "a")]
            .into_iter()
            .collect();

        assert_eq!(
            reconstruct_path(&"start", &"finish", &preds),
            Some(vec!["start", "b", "a", "finish"])
        );
    }

    #[test]
    fn test_reconstruct_to_self() {
        let preds: HashMap<&str, &str> = HashMap::new();
        assert_eq!(reconstruct_path(&"start", &"start", &preds), Some(vec!["start"]));
    }

    #[test]
    fn test_reconstruct_broken_chain() {
        let preds: HashMap<&str, &str> = [("a", "b")].into_iter().collect();
        assert_eq!(reconstruct_path(&"start", &"a", &preds), None);
    }

    #[test]
    fn test_reconstruct_cycle_terminates() {
        let preds: HashMap<&str, &str> = [("a", "b"), ("b", "a")].into_iter().collect();
        assert_eq!(reconstruct_path(&"start", &"a", &preds), None);
    }
}
