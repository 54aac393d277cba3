//! # Storage Backends
//!
//! Two edge-set implementations share the contracts in [`crate::contracts`]:
//! - [`MatrixEdgeSet`]: dense `n × n` matrix, O(1) edge lookup, O(n²) resize
//! - [`AdjacencyEdgeSet`]: per-node ordered lists, O(degree) lookup and removal
//!
//! [`EdgeStorage`] selects between them at runtime (e.g. from a config file)
//! while keeping a single concrete graph type.

pub mod adjacency;
pub mod matrix;

pub use adjacency::AdjacencyEdgeSet;
pub use matrix::MatrixEdgeSet;

use crate::contracts::{EdgeSet, MutableEdgeSet, WeightedEdgeSet};
use crate::types::{Edge, NodeKey};

/// Runtime-selected edge storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeStorage<K, W = ()> {
    /// Dense matrix storage.
    Matrix(MatrixEdgeSet<K, W>),
    /// Adjacency-list storage.
    Adjacency(AdjacencyEdgeSet<K, W>),
}

impl<K: NodeKey, W: Ord + Clone> EdgeStorage<K, W> {
    /// Check if this is the matrix backend.
    #[must_use]
    pub fn is_matrix(&self) -> bool {
        matches!(self, Self::Matrix(_))
    }

    /// Delegates to the backend's own consistency check.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        match self {
            Self::Matrix(m) => m.is_consistent(),
            Self::Adjacency(a) => a.is_consistent(),
        }
    }
}

impl<K: NodeKey, W: Ord + Clone> From<MatrixEdgeSet<K, W>> for EdgeStorage<K, W> {
    fn from(matrix: MatrixEdgeSet<K, W>) -> Self {
        Self::Matrix(matrix)
    }
}

impl<K: NodeKey, W: Ord + Clone> From<AdjacencyEdgeSet<K, W>> for EdgeStorage<K, W> {
    fn from(lists: AdjacencyEdgeSet<K, W>) -> Self {
        Self::Adjacency(lists)
    }
}

impl<K: NodeKey, W: Ord + Clone> EdgeSet<K> for EdgeStorage<K, W> {
    fn contains_edge(&self, source: &K, target: &K) -> bool {
        match self {
            Self::Matrix(m) => m.contains_edge(source, target),
            Self::Adjacency(a) => a.contains_edge(source, target),
        }
    }

    fn successors(&self, source: &K) -> Vec<K> {
        match self {
            Self::Matrix(m) => m.successors(source),
            Self::Adjacency(a) => a.successors(source),
        }
    }

    fn predecessors(&self, target: &K) -> Vec<K> {
        match self {
            Self::Matrix(m) => m.predecessors(target),
            Self::Adjacency(a) => a.predecessors(target),
        }
    }

    fn edges(&self) -> Vec<Edge<K>> {
        match self {
            Self::Matrix(m) => m.edges(),
            Self::Adjacency(a) => a.edges(),
        }
    }

    fn edge_count(&self) -> usize {
        match self {
            Self::Matrix(m) => m.edge_count(),
            Self::Adjacency(a) => a.edge_count(),
        }
    }
}

impl<K: NodeKey, W: Ord + Clone> MutableEdgeSet<K> for EdgeStorage<K, W> {
    fn attach_node(&mut self, node: &K) -> bool {
        match self {
            Self::Matrix(m) => m.attach_node(node),
            Self::Adjacency(a) => a.attach_node(node),
        }
    }

    fn detach_node(&mut self, node: &K) -> usize {
        match self {
            Self::Matrix(m) => m.detach_node(node),
            Self::Adjacency(a) => a.detach_node(node),
        }
    }

    fn insert_edge(&mut self, source: &K, target: &K) -> bool {
        match self {
            Self::Matrix(m) => m.insert_edge(source, target),
            Self::Adjacency(a) => a.insert_edge(source, target),
        }
    }

    fn delete_edge(&mut self, source: &K, target: &K) -> bool {
        match self {
            Self::Matrix(m) => m.delete_edge(source, target),
            Self::Adjacency(a) => a.delete_edge(source, target),
        }
    }

    fn clear(&mut self) {
        match self {
            Self::Matrix(m) => MutableEdgeSet::clear(m),
            Self::Adjacency(a) => MutableEdgeSet::clear(a),
        }
    }
}

impl<K: NodeKey, W: Ord + Clone> WeightedEdgeSet<K> for EdgeStorage<K, W> {
    type Weight = W;

    fn off_weight(&self) -> &W {
        match self {
            Self::Matrix(m) => m.off_weight(),
            Self::Adjacency(a) => a.off_weight(),
        }
    }

    fn weight(&self, source: &K, target: &K) -> Option<&W> {
        match self {
            Self::Matrix(m) => m.weight(source, target),
            Self::Adjacency(a) => a.weight(source, target),
        }
    }

    fn insert_weighted_edge(&mut self, source: &K, target: &K, weight: W) -> bool {
        match self {
            Self::Matrix(m) => m.insert_weighted_edge(source, target, weight),
            Self::Adjacency(a) => a.insert_weighted_edge(source, target, weight),
        }
    }

    fn set_weight(&mut self, source: &K, target: &K, weight: W) -> bool {
        match self {
            Self::Matrix(m) => m.set_weight(source, target, weight),
            Self::Adjacency(a) => a.set_weight(source, target, weight),
        }
    }
}
