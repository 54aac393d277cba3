//! # Traversal
//!
//! Breadth-first and depth-first search over any [`GraphView`].
//!
//! Both searches follow successors only, mark a node visited when it is
//! discovered (not when it is expanded), and record the node it was
//! discovered from. A node is never enqueued twice, so both terminate on
//! cyclic graphs.

use crate::contracts::GraphView;
use crate::types::NodeKey;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Result of a search from a single start node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal<K> {
    /// The node the search started from.
    pub start: K,
    /// Nodes in the order they were expanded, beginning with `start`.
    pub order: Vec<K>,
    /// For every reached node except `start`, the node it was discovered from.
    pub predecessors: BTreeMap<K, K>,
}

impl<K: NodeKey> Traversal<K> {
    /// Whether `key` was reached.
    #[must_use]
    pub fn reaches(&self, key: &K) -> bool {
        *key == self.start || self.predecessors.contains_key(key)
    }

    /// Walk the predecessor chain back from `target`.
    ///
    /// Returns `start, ..., target`. An unreached target yields `[start]`.
    #[must_use]
    pub fn path_to(&self, target: &K) -> Vec<K> {
        let mut path = Vec::new();
        let mut current = target;
        while let Some(previous) = self.predecessors.get(current) {
            path.push(current.clone());
            current = previous;
        }
        path.push(self.start.clone());
        path.reverse();
        path
    }
}

/// Visit nodes in FIFO order from `start`.
///
/// Returns `None` if `start` is not in the graph.
pub fn breadth_first_search<K, G>(graph: &G, start: &K) -> Option<Traversal<K>>
where
    K: NodeKey,
    G: GraphView<K> + ?Sized,
{
    if !graph.has_node(start) {
        return None;
    }

    let mut visited = BTreeSet::from([start.clone()]);
    let mut queue = VecDeque::from([start.clone()]);
    let mut order = Vec::new();
    let mut predecessors = BTreeMap::new();

    while let Some(current) = queue.pop_front() {
        for next in graph.out_neighbors(&current) {
            if visited.insert(next.clone()) {
                predecessors.insert(next.clone(), current.clone());
                queue.push_back(next);
            }
        }
        order.push(current);
    }

    tracing::debug!(start = ?start, visited = order.len(), "breadth-first search complete");
    Some(Traversal {
        start: start.clone(),
        order,
        predecessors,
    })
}

/// Visit nodes in LIFO order from `start`.
///
/// Returns `None` if `start` is not in the graph.
pub fn depth_first_search<K, G>(graph: &G, start: &K) -> Option<Traversal<K>>
where
    K: NodeKey,
    G: GraphView<K> + ?Sized,
{
    if !graph.has_node(start) {
        return None;
    }

    let mut visited = BTreeSet::from([start.clone()]);
    let mut stack = vec![start.clone()];
    let mut order = Vec::new();
    let mut predecessors = BTreeMap::new();

    while let Some(current) = stack.pop() {
        for next in graph.out_neighbors(&current) {
            if visited.insert(next.clone()) {
                predecessors.insert(next.clone(), current.clone());
                stack.push(next);
            }
        }
        order.push(current);
    }

    tracing::debug!(start = ?start, visited = order.len(), "depth-first search complete");
    Some(Traversal {
        start: start.clone(),
        order,
        predecessors,
    })
}

/// The path from `start` to `target` found by depth-first search.
///
/// - `start` unknown: empty
/// - `target` unreachable: `[start]`
/// - `target == start`: `[start]`
pub fn depth_first_path<K, G>(graph: &G, start: &K, target: &K) -> Vec<K>
where
    K: NodeKey,
    G: GraphView<K> + ?Sized,
{
    depth_first_search(graph, start)
        .map(|traversal| traversal.path_to(target))
        .unwrap_or_default()
}
