//! # Storage Contracts
//!
//! The capability traits every storage backend implements.
//!
//! A [`crate::Graph`] is composed from one node set and one edge set. Node sets
//! own keys and values; edge sets own relations between keys and are told about
//! node arrivals and departures through [`MutableEdgeSet::attach_node`] and
//! [`MutableEdgeSet::detach_node`]. Edge sets store exactly one directed half per
//! call: mirroring for undirected graphs is applied by the façade, never here.
//!
//! Mutations return `bool` and are idempotent-safe: operating on an element that
//! is already present (or already absent) returns `false` without side effects.
//! Lookups of unknown keys return the absence value, never an error.

use crate::types::{Edge, NodeKey};

// =============================================================================
// NODE SETS
// =============================================================================

/// Read access to a set of node keys and their optional values.
pub trait NodeSet<K: NodeKey, V> {
    /// Check whether a node exists.
    fn contains_node(&self, key: &K) -> bool;

    /// All node keys in the set's enumeration order.
    fn nodes(&self) -> Vec<K>;

    /// Number of live nodes.
    fn node_count(&self) -> usize;

    /// The value attached to a node, `None` if unset or the node is unknown.
    fn node_value(&self, key: &K) -> Option<&V>;
}

/// Mutation of a node set.
pub trait MutableNodeSet<K: NodeKey, V>: NodeSet<K, V> {
    /// Insert a node with no value. Returns `false` if it already exists.
    fn add_node(&mut self, key: K) -> bool;

    /// Remove a node and its value. Returns `false` if it was absent.
    fn remove_node(&mut self, key: &K) -> bool;

    /// Set or clear (`None`) a node's value. Returns `false` for unknown nodes.
    fn set_node_value(&mut self, key: &K, value: Option<V>) -> bool;

    /// Remove every node.
    fn clear(&mut self);
}

// =============================================================================
// EDGE SETS
// =============================================================================

/// Read access to directed edge halves.
pub trait EdgeSet<K: NodeKey> {
    /// Whether the directed half `source -> target` is present.
    fn contains_edge(&self, source: &K, target: &K) -> bool;

    /// Targets of edges leaving `source`, in backend order.
    ///
    /// List-backed storage yields insertion order; matrix-backed storage
    /// yields index order.
    fn successors(&self, source: &K) -> Vec<K>;

    /// Sources of edges entering `target`, in backend order.
    fn predecessors(&self, target: &K) -> Vec<K>;

    /// Union of successors and predecessors with duplicates removed.
    ///
    /// Successors come first, followed by predecessors not already listed.
    fn neighbors(&self, node: &K) -> Vec<K> {
        let mut result = self.successors(node);
        for key in self.predecessors(node) {
            if !result.contains(&key) {
                result.push(key);
            }
        }
        result
    }

    /// Every stored directed half.
    fn edges(&self) -> Vec<Edge<K>>;

    /// Number of stored directed halves.
    fn edge_count(&self) -> usize;
}

/// Mutation of an edge set.
pub trait MutableEdgeSet<K: NodeKey>: EdgeSet<K> {
    /// Make room for a node that was just added to the node set.
    ///
    /// Returns `false` if the node was already known.
    fn attach_node(&mut self, node: &K) -> bool;

    /// Forget a node and drop every half that touches it in either direction.
    ///
    /// Returns the number of halves removed.
    fn detach_node(&mut self, node: &K) -> usize;

    /// Store `source -> target` with the off weight.
    ///
    /// Fails if either node is unknown or the half already exists.
    fn insert_edge(&mut self, source: &K, target: &K) -> bool;

    /// Drop `source -> target`. Returns `false` if it was absent.
    fn delete_edge(&mut self, source: &K, target: &K) -> bool;

    /// Drop every edge and every node slot.
    fn clear(&mut self);
}

/// Edge sets that carry a weight per edge.
///
/// Every backend is configured with an off weight: the value weight queries
/// return for an absent edge and the weight an edge receives when it is added
/// without one. Presence itself never depends on the weight value.
pub trait WeightedEdgeSet<K: NodeKey>: MutableEdgeSet<K> {
    /// Totally ordered weight type.
    type Weight: Ord + Clone;

    /// The configured off weight.
    fn off_weight(&self) -> &Self::Weight;

    /// The stored weight of `source -> target`, `None` if absent.
    fn weight(&self, source: &K, target: &K) -> Option<&Self::Weight>;

    /// Store `source -> target` with an explicit weight.
    fn insert_weighted_edge(&mut self, source: &K, target: &K, weight: Self::Weight) -> bool;

    /// Overwrite the weight of an existing half. Never creates an edge.
    fn set_weight(&mut self, source: &K, target: &K, weight: Self::Weight) -> bool;

    /// The stored weight, or the off weight when the edge is absent.
    fn weight_or_off(&self, source: &K, target: &K) -> Self::Weight {
        self.weight(source, target)
            .unwrap_or_else(|| self.off_weight())
            .clone()
    }
}

// =============================================================================
// GRAPH VIEWS (read by algorithms)
// =============================================================================

/// The read-only surface algorithms are written against.
///
/// Algorithms only see node keys and successors; they never reach into
/// backend internals.
pub trait GraphView<K: NodeKey> {
    /// All node keys in enumeration order.
    fn node_keys(&self) -> Vec<K>;

    /// Whether the node exists.
    fn has_node(&self, key: &K) -> bool;

    /// Nodes reachable over one edge from `key`.
    fn out_neighbors(&self, key: &K) -> Vec<K>;
}

/// A graph view whose edges carry ordered weights.
pub trait WeightedGraphView<K: NodeKey>: GraphView<K> {
    /// Totally ordered weight type.
    type Weight: Ord + Clone;

    /// Weight of `source -> target`, or the off weight if absent.
    fn weight_between(&self, source: &K, target: &K) -> Self::Weight;
}
