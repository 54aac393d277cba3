//! # Dense Matrix Storage
//!
//! Nodes are mapped to contiguous indices `0..n`; edges live in a row-major
//! `n × n` matrix of optional weights.
//!
//! ## Invariants
//!
//! - The matrix dimension always equals the number of attached nodes.
//! - Every resize preserves the weights between surviving nodes at their
//!   (possibly shifted) new indices.
//! - A cell is `Some(weight)` iff the directed half is present. Presence never
//!   depends on comparing against the off weight, so an edge explicitly
//!   weighted with the off value is still an edge.
//! - An index at or beyond the current dimension reads as "no edge".
//!
//! Attaching or detaching a node rebuilds the matrix: O(n²) per call.

use crate::contracts::{EdgeSet, MutableEdgeSet, WeightedEdgeSet};
use crate::types::{Edge, NodeKey};
use std::collections::BTreeMap;

/// Edge set backed by a dense adjacency matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixEdgeSet<K, W = ()> {
    /// Key -> row/column index.
    index: BTreeMap<K, usize>,
    /// Row/column index -> key.
    keys: Vec<K>,
    /// Row-major cells, `keys.len()²` long.
    cells: Vec<Option<W>>,
    off_weight: W,
    edge_count: usize,
}

impl<K: NodeKey> MatrixEdgeSet<K, ()> {
    /// Create an unweighted matrix.
    #[must_use]
    pub fn unweighted() -> Self {
        Self::new(())
    }
}

impl<K: NodeKey, W: Ord + Clone> MatrixEdgeSet<K, W> {
    /// Create an empty matrix with the given off weight.
    #[must_use]
    pub fn new(off_weight: W) -> Self {
        Self {
            index: BTreeMap::new(),
            keys: Vec::new(),
            cells: Vec::new(),
            off_weight,
            edge_count: 0,
        }
    }

    /// Current row/column count.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.keys.len()
    }

    /// Check the internal bookkeeping.
    ///
    /// Verifies that the matrix is `n × n`, the key/index maps agree, and the
    /// edge counter matches the number of occupied cells.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let n = self.dimension();
        if self.index.len() != n || self.cells.len() != n.saturating_mul(n) {
            return false;
        }
        let indices_agree = self
            .keys
            .iter()
            .enumerate()
            .all(|(i, key)| self.index.get(key) == Some(&i));
        let occupied = self.cells.iter().filter(|cell| cell.is_some()).count();
        indices_agree && occupied == self.edge_count
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    fn cell(&self, row: usize, col: usize) -> Option<&W> {
        let n = self.dimension();
        if row >= n || col >= n {
            return None;
        }
        self.cells.get(row * n + col)?.as_ref()
    }

    fn slot_mut(&mut self, source: &K, target: &K) -> Option<&mut Option<W>> {
        let row = self.position(source)?;
        let col = self.position(target)?;
        let n = self.dimension();
        if row >= n || col >= n {
            return None;
        }
        self.cells.get_mut(row * n + col)
    }

    /// Grow by one row and column, keeping every cell at its position.
    fn grow(&mut self) {
        let old = self.dimension();
        let new = old + 1;
        let mut cells: Vec<Option<W>> = std::iter::repeat_with(|| None).take(new * new).collect();
        for (i, cell) in std::mem::take(&mut self.cells).into_iter().enumerate() {
            let (row, col) = (i / old, i % old);
            if let Some(slot) = cells.get_mut(row * new + col) {
                *slot = cell;
            }
        }
        self.cells = cells;
    }

    /// Shrink by dropping row and column `removed`, shifting later indices
    /// down by one. Returns the number of occupied cells discarded.
    fn shrink(&mut self, removed: usize) -> usize {
        let old = self.dimension();
        let new = old.saturating_sub(1);
        let mut dropped = 0;
        let mut cells: Vec<Option<W>> = std::iter::repeat_with(|| None).take(new * new).collect();
        for (i, cell) in std::mem::take(&mut self.cells).into_iter().enumerate() {
            let (row, col) = (i / old, i % old);
            if row == removed || col == removed {
                if cell.is_some() {
                    dropped += 1;
                }
                continue;
            }
            let row = if row > removed { row - 1 } else { row };
            let col = if col > removed { col - 1 } else { col };
            if let Some(slot) = cells.get_mut(row * new + col) {
                *slot = cell;
            }
        }
        self.cells = cells;
        dropped
    }

    fn store(&mut self, source: &K, target: &K, weight: W) -> bool {
        match self.slot_mut(source, target) {
            Some(slot) if slot.is_none() => {
                *slot = Some(weight);
                self.edge_count += 1;
                true
            }
            _ => false,
        }
    }
}

impl<K: NodeKey, W: Ord + Clone> EdgeSet<K> for MatrixEdgeSet<K, W> {
    fn contains_edge(&self, source: &K, target: &K) -> bool {
        match (self.position(source), self.position(target)) {
            (Some(row), Some(col)) => self.cell(row, col).is_some(),
            _ => false,
        }
    }

    fn successors(&self, source: &K) -> Vec<K> {
        let Some(row) = self.position(source) else {
            return Vec::new();
        };
        self.keys
            .iter()
            .enumerate()
            .filter(|(col, _)| self.cell(row, *col).is_some())
            .map(|(_, key)| key.clone())
            .collect()
    }

    fn predecessors(&self, target: &K) -> Vec<K> {
        let Some(col) = self.position(target) else {
            return Vec::new();
        };
        self.keys
            .iter()
            .enumerate()
            .filter(|(row, _)| self.cell(*row, col).is_some())
            .map(|(_, key)| key.clone())
            .collect()
    }

    fn edges(&self) -> Vec<Edge<K>> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (row, source) in self.keys.iter().enumerate() {
            for (col, target) in self.keys.iter().enumerate() {
                if self.cell(row, col).is_some() {
                    edges.push(Edge::new(source.clone(), target.clone()));
                }
            }
        }
        edges
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<K: NodeKey, W: Ord + Clone> MutableEdgeSet<K> for MatrixEdgeSet<K, W> {
    fn attach_node(&mut self, node: &K) -> bool {
        if self.index.contains_key(node) {
            return false;
        }
        self.grow();
        self.index.insert(node.clone(), self.keys.len());
        self.keys.push(node.clone());
        true
    }

    fn detach_node(&mut self, node: &K) -> usize {
        let Some(removed) = self.position(node) else {
            return 0;
        };
        let dropped = self.shrink(removed);
        self.index.remove(node);
        self.keys.remove(removed);
        for (i, key) in self.keys.iter().enumerate().skip(removed) {
            self.index.insert(key.clone(), i);
        }
        self.edge_count = self.edge_count.saturating_sub(dropped);
        dropped
    }

    fn insert_edge(&mut self, source: &K, target: &K) -> bool {
        let off = self.off_weight.clone();
        self.store(source, target, off)
    }

    fn delete_edge(&mut self, source: &K, target: &K) -> bool {
        let removed = self
            .slot_mut(source, target)
            .and_then(Option::take)
            .is_some();
        if removed {
            self.edge_count = self.edge_count.saturating_sub(1);
        }
        removed
    }

    fn clear(&mut self) {
        self.index.clear();
        self.keys.clear();
        self.cells.clear();
        self.edge_count = 0;
    }
}

impl<K: NodeKey, W: Ord + Clone> WeightedEdgeSet<K> for MatrixEdgeSet<K, W> {
    type Weight = W;

    fn off_weight(&self) -> &W {
        &self.off_weight
    }

    fn weight(&self, source: &K, target: &K) -> Option<&W> {
        let row = self.position(source)?;
        let col = self.position(target)?;
        self.cell(row, col)
    }

    fn insert_weighted_edge(&mut self, source: &K, target: &K, weight: W) -> bool {
        self.store(source, target, weight)
    }

    fn set_weight(&mut self, source: &K, target: &K, weight: W) -> bool {
        match self.slot_mut(source, target) {
            Some(Some(current)) => {
                *current = weight;
                true
            }
            _ => false,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix_with(keys: &[u32]) -> MatrixEdgeSet<u32, i64> {
        let mut matrix = MatrixEdgeSet::new(-1);
        for key in keys {
            matrix.attach_node(key);
        }
        matrix
    }

    #[test]
    fn dimension_tracks_node_count() {
        let mut matrix = matrix_with(&[1, 2, 3]);
        assert_eq!(matrix.dimension(), 3);
        assert!(matrix.is_consistent());

        matrix.detach_node(&2);
        assert_eq!(matrix.dimension(), 2);
        assert!(matrix.is_consistent());
    }

    #[test]
    fn duplicate_attach_rejected() {
        let mut matrix = matrix_with(&[1]);
        assert!(!matrix.attach_node(&1));
        assert_eq!(matrix.dimension(), 1);
    }

    #[test]
    fn edge_between_unknown_nodes_fails() {
        let mut matrix = matrix_with(&[1]);
        assert!(!matrix.insert_edge(&1, &9));
        assert!(!matrix.insert_edge(&9, &1));
        assert_eq!(matrix.edge_count(), 0);
    }

    #[test]
    fn absent_weight_reads_as_off() {
        let matrix = matrix_with(&[1, 2]);
        assert_eq!(matrix.weight(&1, &2), None);
        assert_eq!(matrix.weight_or_off(&1, &2), -1);
    }

    #[test]
    fn unweighted_insert_stores_off_weight_but_is_present() {
        let mut matrix = matrix_with(&[1, 2]);
        assert!(matrix.insert_edge(&1, &2));
        assert!(matrix.contains_edge(&1, &2));
        assert_eq!(matrix.weight(&1, &2), Some(&-1));
    }

    #[test]
    fn growth_preserves_weights() {
        let mut matrix = matrix_with(&[1, 2]);
        matrix.insert_weighted_edge(&1, &2, 12);
        matrix.insert_weighted_edge(&2, &1, 21);

        matrix.attach_node(&3);
        matrix.attach_node(&4);

        assert_eq!(matrix.weight(&1, &2), Some(&12));
        assert_eq!(matrix.weight(&2, &1), Some(&21));
        assert!(matrix.is_consistent());
    }

    #[test]
    fn shrink_shifts_surviving_weights() {
        let mut matrix = matrix_with(&[1, 2, 3, 4]);
        matrix.insert_weighted_edge(&1, &4, 14);
        matrix.insert_weighted_edge(&3, &4, 34);
        matrix.insert_weighted_edge(&2, &3, 23);
        matrix.insert_weighted_edge(&4, &4, 44);

        let dropped = matrix.detach_node(&2);

        assert_eq!(dropped, 1);
        assert_eq!(matrix.weight(&1, &4), Some(&14));
        assert_eq!(matrix.weight(&3, &4), Some(&34));
        assert_eq!(matrix.weight(&4, &4), Some(&44));
        assert_eq!(matrix.edge_count(), 3);
        assert!(matrix.is_consistent());
    }

    #[test]
    fn detach_drops_both_directions() {
        let mut matrix = matrix_with(&[1, 2, 3]);
        matrix.insert_edge(&1, &2);
        matrix.insert_edge(&2, &3);
        matrix.insert_edge(&3, &2);

        assert_eq!(matrix.detach_node(&2), 3);
        assert_eq!(matrix.edge_count(), 0);
        assert!(matrix.successors(&1).is_empty());
        assert!(matrix.predecessors(&3).is_empty());
    }

    #[test]
    fn successors_follow_index_order() {
        let mut matrix = matrix_with(&[30, 10, 20]);
        matrix.insert_edge(&30, &20);
        matrix.insert_edge(&30, &10);
        assert_eq!(matrix.successors(&30), vec![10, 20]);
    }

    #[test]
    fn set_weight_requires_existing_edge() {
        let mut matrix = matrix_with(&[1, 2]);
        assert!(!matrix.set_weight(&1, &2, 5));
        assert!(!matrix.contains_edge(&1, &2));

        matrix.insert_edge(&1, &2);
        assert!(matrix.set_weight(&1, &2, 5));
        assert_eq!(matrix.weight(&1, &2), Some(&5));
    }

    #[test]
    fn stale_index_reads_as_no_edge() {
        let matrix = matrix_with(&[1, 2]);
        assert_eq!(matrix.cell(2, 0), None);
        assert_eq!(matrix.cell(0, 7), None);
    }

    #[test]
    fn delete_then_reinsert() {
        let mut matrix = matrix_with(&[1, 2]);
        matrix.insert_weighted_edge(&1, &2, 3);
        assert!(matrix.delete_edge(&1, &2));
        assert!(!matrix.delete_edge(&1, &2));
        assert!(matrix.insert_edge(&1, &2));
        assert_eq!(matrix.weight(&1, &2), Some(&-1));
        assert_eq!(matrix.edge_count(), 1);
    }
}
