//! # Core Type Definitions
//!
//! This module contains the shared vocabulary of the graph core:
//! - The `NodeKey` bound every node identifier must satisfy
//! - Edge records (`Edge`, `WeightedEdge`)
//! - Graph orientation (`Directedness`)
//! - Error types (`GraphError`)
//!
//! ## Determinism Guarantees
//!
//! All keys and weights implement `Ord` so every collection in the crate can be
//! a `BTreeMap`/`BTreeSet` and every enumeration has a stable order.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

// =============================================================================
// NODE KEYS
// =============================================================================

/// Bound for node identifiers.
///
/// Keys are unique, totally ordered and cheap enough to clone. The `Debug`
/// bound is used to name missing keys in [`GraphError`].
pub trait NodeKey: Clone + Ord + Debug {}

impl<T: Clone + Ord + Debug> NodeKey for T {}

// =============================================================================
// EDGES
// =============================================================================

/// An ordered `(source, target)` relation between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge<K> {
    /// The node the edge leaves.
    pub source: K,
    /// The node the edge enters.
    pub target: K,
}

impl<K: NodeKey> Edge<K> {
    /// Create a new edge.
    #[must_use]
    pub const fn new(source: K, target: K) -> Self {
        Self { source, target }
    }

    /// Whether source and target are the same node.
    #[must_use]
    pub fn is_self_edge(&self) -> bool {
        self.source == self.target
    }

    /// The same edge with its endpoints swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.target.clone(), self.source.clone())
    }
}

impl<K> From<(K, K)> for Edge<K> {
    fn from((source, target): (K, K)) -> Self {
        Self { source, target }
    }
}

/// An edge annotated with its weight.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeightedEdge<K, W> {
    /// The node the edge leaves.
    pub source: K,
    /// The node the edge enters.
    pub target: K,
    /// The weight stored for this edge.
    pub weight: W,
}

impl<K: NodeKey, W> WeightedEdge<K, W> {
    /// Create a new weighted edge.
    #[must_use]
    pub const fn new(source: K, target: K, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Drop the weight.
    #[must_use]
    pub fn edge(&self) -> Edge<K> {
        Edge::new(self.source.clone(), self.target.clone())
    }
}

// =============================================================================
// ORIENTATION
// =============================================================================

/// Whether edges are one-directional or mirrored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Directedness {
    /// An edge from A to B does not imply an edge from B to A.
    Directed,
    /// Every edge is mirrored; adjacency is symmetric.
    #[default]
    Undirected,
}

impl Directedness {
    /// `true` for [`Directedness::Directed`].
    #[must_use]
    pub const fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }
}

impl From<bool> for Directedness {
    fn from(is_directed: bool) -> Self {
        if is_directed {
            Self::Directed
        } else {
            Self::Undirected
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors surfaced by the strongly validated (`try_*`) operations.
///
/// Queries never fail: unknown nodes and edges produce the type's absence
/// value (empty collection, `None`, or the off-weight sentinel). Keys are
/// rendered with `Debug` so the error type stays independent of the key type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The referenced node does not exist.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// The referenced edge does not exist.
    #[error("Edge not found: {0} -> {1}")]
    EdgeNotFound(String, String),

    /// A node with this key is already present.
    #[error("Node already exists: {0}")]
    NodeExists(String),

    /// The edge is already present.
    #[error("Edge already exists: {0} -> {1}")]
    EdgeExists(String, String),

    /// A construction option was rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The edge set refused a validated edge half.
    #[error("Storage rejected edge: {0} -> {1}")]
    StorageRejected(String, String),
}

impl GraphError {
    pub(crate) fn node_not_found<K: Debug>(key: &K) -> Self {
        Self::NodeNotFound(format!("{key:?}"))
    }

    pub(crate) fn node_exists<K: Debug>(key: &K) -> Self {
        Self::NodeExists(format!("{key:?}"))
    }

    pub(crate) fn edge_not_found<K: Debug>(source: &K, target: &K) -> Self {
        Self::EdgeNotFound(format!("{source:?}"), format!("{target:?}"))
    }

    pub(crate) fn edge_exists<K: Debug>(source: &K, target: &K) -> Self {
        Self::EdgeExists(format!("{source:?}"), format!("{target:?}"))
    }

    pub(crate) fn storage_rejected<K: Debug>(source: &K, target: &K) -> Self {
        Self::StorageRejected(format!("{source:?}"), format!("{target:?}"))
    }
}

// =============================================================================
// TESTS
// =============================================================================
