//! # trellis-core
//!
//! A generic in-memory graph with pluggable storage.
//!
//! A [`Graph`] is composed from one node set and one edge set. Two edge
//! backends are provided:
//! - [`MatrixEdgeSet`]: dense matrix, constant-time edge lookup
//! - [`AdjacencyEdgeSet`]: per-node incoming/outgoing lists
//!
//! Either can be directed or undirected and can carry ordered edge weights.
//! Breadth-first search, depth-first search and Prim's minimum spanning tree
//! run on any backend through [`GraphView`] / [`WeightedGraphView`].
//!
//! ## Architectural Constraints
//!
//! - Deterministic: `BTreeMap`/`BTreeSet` only, no hashing, no floats
//! - Single-threaded: the caller owns the graph, there is no internal locking
//! - In-memory: no persistence, no async, no network
//!
//! ## Example
//!
//! ```
//! use trellis_core::{Directedness, Graph};
//!
//! let mut graph: Graph<&str, ()> = Graph::adjacency(Directedness::Undirected);
//! graph.add_nodes(["a", "b", "c"]);
//! graph.add_edge(&"a", &"b");
//! graph.add_edge(&"b", &"c");
//!
//! assert!(graph.are_adjacent(&"b", &"a"));
//! assert_eq!(graph.depth_first_path(&"a", &"c"), vec!["a", "b", "c"]);
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod algorithms;
pub mod config;
pub mod contracts;
pub mod graph;
pub mod nodes;
pub mod observer;
pub mod storage;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use algorithms::{
    Traversal, breadth_first_search, depth_first_path, depth_first_search,
    prims_minimum_spanning_tree,
};
pub use config::{BackendKind, GraphConfig, MAX_EDGE_CAPACITY};
pub use contracts::{
    EdgeSet, GraphView, MutableEdgeSet, MutableNodeSet, NodeSet, WeightedEdgeSet,
    WeightedGraphView,
};
pub use graph::Graph;
pub use nodes::NodeMap;
pub use observer::{GraphEvent, GraphObserver};
pub use storage::{AdjacencyEdgeSet, EdgeStorage, MatrixEdgeSet};
pub use types::{Directedness, Edge, GraphError, NodeKey, WeightedEdge};
