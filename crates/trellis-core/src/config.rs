//! # Graph Configuration
//!
//! Construction options that can be loaded from TOML:
//!
//! ```toml
//! directedness = "directed"
//! backend = "adjacency"
//! edge_capacity = 8
//! ```
//!
//! Every field is optional; missing fields take their defaults (undirected,
//! adjacency lists, no capacity hint).

use crate::graph::Graph;
use crate::nodes::NodeMap;
use crate::storage::{AdjacencyEdgeSet, EdgeStorage, MatrixEdgeSet};
use crate::types::{Directedness, GraphError, NodeKey};
use serde::{Deserialize, Serialize};

/// Largest per-node edge capacity hint accepted.
pub const MAX_EDGE_CAPACITY: usize = 1 << 16;

/// Which edge storage a configured graph uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Dense `n × n` matrix.
    Matrix,
    /// Per-node edge lists.
    #[default]
    Adjacency,
}

/// Options for building a [`Graph`] over [`EdgeStorage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Edge orientation.
    pub directedness: Directedness,
    /// Storage backend.
    pub backend: BackendKind,
    /// Initial capacity of each node's edge lists (adjacency backend only).
    pub edge_capacity: Option<usize>,
}

impl GraphConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, GraphError> {
        let config: Self =
            toml::from_str(source).map_err(|e| GraphError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject option combinations that cannot be honoured.
    pub fn validate(&self) -> Result<(), GraphError> {
        let Some(capacity) = self.edge_capacity else {
            return Ok(());
        };
        let problem = if self.backend == BackendKind::Matrix {
            "edge_capacity only applies to the adjacency backend".to_string()
        } else if capacity > MAX_EDGE_CAPACITY {
            format!("edge_capacity {capacity} exceeds maximum {MAX_EDGE_CAPACITY}")
        } else {
            return Ok(());
        };
        tracing::warn!(reason = %problem, "rejected graph configuration");
        Err(GraphError::InvalidConfig(problem))
    }

    /// Build an empty graph with the configured backend and off weight.
    pub fn build<K, V, W>(
        &self,
        off_weight: W,
    ) -> Result<Graph<K, V, NodeMap<K, V>, EdgeStorage<K, W>>, GraphError>
    where
        K: NodeKey,
        W: Ord + Clone,
    {
        self.validate()?;
        let edges = match (self.backend, self.edge_capacity) {
            (BackendKind::Matrix, _) => EdgeStorage::from(MatrixEdgeSet::new(off_weight)),
            (BackendKind::Adjacency, Some(capacity)) => {
                EdgeStorage::from(AdjacencyEdgeSet::with_edge_capacity(off_weight, capacity))
            }
            (BackendKind::Adjacency, None) => EdgeStorage::from(AdjacencyEdgeSet::new(off_weight)),
        };
        tracing::debug!(
            backend = ?self.backend,
            directedness = ?self.directedness,
            "graph built from configuration"
        );
        Ok(Graph::new(NodeMap::new(), edges, self.directedness))
    }
}
