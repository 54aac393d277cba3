//! # Adjacency-List Storage
//!
//! Each node owns two ordered lists: outgoing halves (target plus weight) and
//! incoming halves (source). Both lists are kept for every node so
//! predecessor lookups are O(degree) in directed graphs; in undirected graphs
//! the façade mirrors every edge, so the two lists hold the same keys.
//!
//! Lists preserve insertion order, which is the order traversal sees.
//! Removing a node scrubs its key from the lists of every neighbour it shares
//! an edge with, in O(degree) per neighbour.

use crate::contracts::{EdgeSet, MutableEdgeSet, WeightedEdgeSet};
use crate::types::{Edge, NodeKey};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
struct AdjacencyEntry<K, W> {
    outgoing: Vec<(K, W)>,
    incoming: Vec<K>,
}

impl<K, W> AdjacencyEntry<K, W> {
    fn with_capacity(capacity: Option<usize>) -> Self {
        match capacity {
            Some(capacity) => Self {
                outgoing: Vec::with_capacity(capacity),
                incoming: Vec::with_capacity(capacity),
            },
            None => Self {
                outgoing: Vec::new(),
                incoming: Vec::new(),
            },
        }
    }
}

/// Edge set backed by per-node in/out lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyEdgeSet<K, W = ()> {
    entries: BTreeMap<K, AdjacencyEntry<K, W>>,
    off_weight: W,
    /// Initial capacity of each per-node list, if pre-sized.
    edge_capacity: Option<usize>,
    /// Stored directed halves. Never decremented below zero.
    edge_count: usize,
}

impl<K: NodeKey> AdjacencyEdgeSet<K, ()> {
    /// Create unweighted adjacency storage.
    #[must_use]
    pub fn unweighted() -> Self {
        Self::new(())
    }
}

impl<K: NodeKey, W: Ord + Clone> AdjacencyEdgeSet<K, W> {
    /// Create empty storage with the given off weight.
    #[must_use]
    pub fn new(off_weight: W) -> Self {
        Self {
            entries: BTreeMap::new(),
            off_weight,
            edge_capacity: None,
            edge_count: 0,
        }
    }

    /// Create empty storage whose per-node lists are pre-sized.
    #[must_use]
    pub fn with_edge_capacity(off_weight: W, edge_capacity: usize) -> Self {
        Self {
            edge_capacity: Some(edge_capacity),
            ..Self::new(off_weight)
        }
    }

    /// Check the internal bookkeeping.
    ///
    /// Every outgoing half must be mirrored by an incoming record on its
    /// target (and vice versa), no target may be listed twice, and the edge
    /// counter must equal the number of stored halves.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut outgoing_total = 0usize;
        let mut incoming_total = 0usize;
        for (source, entry) in &self.entries {
            outgoing_total += entry.outgoing.len();
            incoming_total += entry.incoming.len();
            for (i, (target, _)) in entry.outgoing.iter().enumerate() {
                let duplicate = entry.outgoing[..i].iter().any(|(t, _)| t == target);
                let mirrored = self
                    .entries
                    .get(target)
                    .is_some_and(|other| other.incoming.contains(source));
                if duplicate || !mirrored {
                    return false;
                }
            }
            for origin in &entry.incoming {
                let mirrored = self
                    .entries
                    .get(origin)
                    .is_some_and(|other| other.outgoing.iter().any(|(t, _)| t == source));
                if !mirrored {
                    return false;
                }
            }
        }
        outgoing_total == self.edge_count && incoming_total == self.edge_count
    }

    /// Number of halves leaving plus entering `node`, self-edges counted once.
    #[must_use]
    pub fn incident_count(&self, node: &K) -> usize {
        self.entries.get(node).map_or(0, |entry| {
            let self_edge = entry.incoming.contains(node);
            entry.outgoing.len() + entry.incoming.len() - usize::from(self_edge)
        })
    }

    fn release(&mut self, halves: usize) {
        debug_assert!(halves <= self.edge_count, "edge count would go negative");
        self.edge_count = self.edge_count.saturating_sub(halves);
    }

    fn store(&mut self, source: &K, target: &K, weight: W) -> bool {
        if !self.entries.contains_key(target) {
            return false;
        }
        let Some(entry) = self.entries.get_mut(source) else {
            return false;
        };
        if entry.outgoing.iter().any(|(t, _)| t == target) {
            return false;
        }
        entry.outgoing.push((target.clone(), weight));
        if let Some(entry) = self.entries.get_mut(target) {
            entry.incoming.push(source.clone());
        }
        self.edge_count += 1;
        true
    }

    fn outgoing_weight_mut(&mut self, source: &K, target: &K) -> Option<&mut W> {
        self.entries
            .get_mut(source)?
            .outgoing
            .iter_mut()
            .find(|(t, _)| t == target)
            .map(|(_, weight)| weight)
    }
}

impl<K: NodeKey, W: Ord + Clone> EdgeSet<K> for AdjacencyEdgeSet<K, W> {
    fn contains_edge(&self, source: &K, target: &K) -> bool {
        self.entries
            .get(source)
            .is_some_and(|entry| entry.outgoing.iter().any(|(t, _)| t == target))
    }

    fn successors(&self, source: &K) -> Vec<K> {
        self.entries.get(source).map_or_else(Vec::new, |entry| {
            entry.outgoing.iter().map(|(t, _)| t.clone()).collect()
        })
    }

    fn predecessors(&self, target: &K) -> Vec<K> {
        self.entries
            .get(target)
            .map_or_else(Vec::new, |entry| entry.incoming.clone())
    }

    fn edges(&self) -> Vec<Edge<K>> {
        self.entries
            .iter()
            .flat_map(|(source, entry)| {
                entry
                    .outgoing
                    .iter()
                    .map(move |(target, _)| Edge::new(source.clone(), target.clone()))
            })
            .collect()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<K: NodeKey, W: Ord + Clone> MutableEdgeSet<K> for AdjacencyEdgeSet<K, W> {
    fn attach_node(&mut self, node: &K) -> bool {
        if self.entries.contains_key(node) {
            return false;
        }
        self.entries
            .insert(node.clone(), AdjacencyEntry::with_capacity(self.edge_capacity));
        true
    }

    fn detach_node(&mut self, node: &K) -> usize {
        let Some(entry) = self.entries.remove(node) else {
            return 0;
        };

        let mut removed = entry.outgoing.len();
        for (target, _) in &entry.outgoing {
            if target == node {
                continue;
            }
            if let Some(other) = self.entries.get_mut(target) {
                other.incoming.retain(|origin| origin != node);
            }
        }
        for origin in &entry.incoming {
            if origin == node {
                continue;
            }
            if let Some(other) = self.entries.get_mut(origin) {
                let before = other.outgoing.len();
                other.outgoing.retain(|(t, _)| t != node);
                removed += before - other.outgoing.len();
            }
        }

        self.release(removed);
        removed
    }

    fn insert_edge(&mut self, source: &K, target: &K) -> bool {
        let off = self.off_weight.clone();
        self.store(source, target, off)
    }

    fn delete_edge(&mut self, source: &K, target: &K) -> bool {
        let Some(entry) = self.entries.get_mut(source) else {
            return false;
        };
        let Some(position) = entry.outgoing.iter().position(|(t, _)| t == target) else {
            return false;
        };
        entry.outgoing.remove(position);

        if let Some(other) = self.entries.get_mut(target)
            && let Some(position) = other.incoming.iter().position(|origin| origin == source)
        {
            other.incoming.remove(position);
        }
        self.release(1);
        true
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.edge_count = 0;
    }
}

impl<K: NodeKey, W: Ord + Clone> WeightedEdgeSet<K> for AdjacencyEdgeSet<K, W> {
    type Weight = W;

    fn off_weight(&self) -> &W {
        &self.off_weight
    }

    fn weight(&self, source: &K, target: &K) -> Option<&W> {
        self.entries
            .get(source)?
            .outgoing
            .iter()
            .find(|(t, _)| t == target)
            .map(|(_, weight)| weight)
    }

    fn insert_weighted_edge(&mut self, source: &K, target: &K, weight: W) -> bool {
        self.store(source, target, weight)
    }

    fn set_weight(&mut self, source: &K, target: &K, weight: W) -> bool {
        match self.outgoing_weight_mut(source, target) {
            Some(current) => {
                *current = weight;
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
