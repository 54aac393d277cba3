//! # Algorithms
//!
//! Read-only algorithms written against [`crate::GraphView`] and
//! [`crate::WeightedGraphView`], so they run unchanged on every backend.

pub mod mst;
pub mod traversal;

pub use mst::prims_minimum_spanning_tree;
pub use traversal::{Traversal, breadth_first_search, depth_first_path, depth_first_search};
