//! # Graph Façade
//!
//! Composes one node set and one edge set into a directed or undirected graph.
//!
//! The façade owns the directedness flag and is the only place where
//! undirected mirroring happens: every edge mutation on an undirected graph
//! writes `(a, b)` and, for `a != b`, `(b, a)`. Both halves are validated
//! before either is committed. If the edge set still refuses a half, the
//! other half is rolled back, so a rejected insertion leaves no half-edge
//! behind.
//!
//! Mutations come in two flavours:
//! - `add_edge`, `remove_edge`, ... return `bool` (idempotent-safe)
//! - `try_add_edge`, `try_remove_edge`, ... return `Result<(), GraphError>`
//!   naming the missing or conflicting key
//!
//! Both run the same validation.

use crate::algorithms::{Traversal, mst, traversal};
use crate::contracts::{
    EdgeSet, GraphView, MutableEdgeSet, MutableNodeSet, NodeSet, WeightedEdgeSet,
    WeightedGraphView,
};
use crate::nodes::NodeMap;
use crate::observer::{GraphEvent, GraphObserver, ObserverList};
use crate::storage::{AdjacencyEdgeSet, MatrixEdgeSet};
use crate::types::{Directedness, Edge, GraphError, NodeKey, WeightedEdge};
use std::collections::BTreeMap;
use std::marker::PhantomData;

// =============================================================================
// GRAPH
// =============================================================================

/// A graph over an injected node set `N` and edge set `E`.
///
/// `V` is the type of the optional value each node carries.
#[derive(Debug)]
pub struct Graph<K, V, N = NodeMap<K, V>, E = AdjacencyEdgeSet<K>> {
    nodes: N,
    edges: E,
    directedness: Directedness,
    observers: ObserverList<K>,
    values: PhantomData<fn() -> V>,
}

/// Clones the nodes and edges. Observers are not carried over.
impl<K: NodeKey, V, N: Clone, E: Clone> Clone for Graph<K, V, N, E> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            directedness: self.directedness,
            observers: ObserverList::new(),
            values: PhantomData,
        }
    }
}

impl<K: NodeKey, V> Graph<K, V, NodeMap<K, V>, AdjacencyEdgeSet<K>> {
    /// Create an unweighted graph on adjacency-list storage.
    #[must_use]
    pub fn adjacency(directedness: Directedness) -> Self {
        Self::new(NodeMap::new(), AdjacencyEdgeSet::unweighted(), directedness)
    }
}

impl<K: NodeKey, V, W: Ord + Clone> Graph<K, V, NodeMap<K, V>, AdjacencyEdgeSet<K, W>> {
    /// Create a weighted graph on adjacency-list storage.
    #[must_use]
    pub fn weighted_adjacency(directedness: Directedness, off_weight: W) -> Self {
        Self::new(
            NodeMap::new(),
            AdjacencyEdgeSet::new(off_weight),
            directedness,
        )
    }
}

impl<K: NodeKey, V, W: Ord + Clone> Graph<K, V, NodeMap<K, V>, MatrixEdgeSet<K, W>> {
    /// Create a graph on dense matrix storage with the given off weight.
    #[must_use]
    pub fn matrix(directedness: Directedness, off_weight: W) -> Self {
        Self::new(NodeMap::new(), MatrixEdgeSet::new(off_weight), directedness)
    }
}

impl<K, V, N, E> Graph<K, V, N, E>
where
    K: NodeKey,
    N: MutableNodeSet<K, V>,
    E: MutableEdgeSet<K>,
{
    /// Compose a graph from a node set and an edge set.
    ///
    /// Every node already in `nodes` is attached to `edges`, so a pre-populated
    /// node set is immediately usable as edge endpoints.
    #[must_use]
    pub fn new(nodes: N, mut edges: E, directedness: Directedness) -> Self {
        for key in nodes.nodes() {
            edges.attach_node(&key);
        }
        Self {
            nodes,
            edges,
            directedness,
            observers: ObserverList::new(),
            values: PhantomData,
        }
    }

    /// Orientation of this graph.
    #[must_use]
    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    /// `true` if edges are one-directional.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directedness.is_directed()
    }

    /// The underlying node set.
    pub fn node_set(&self) -> &N {
        &self.nodes
    }

    /// The underlying edge set.
    pub fn edge_set(&self) -> &E {
        &self.edges
    }

    /// Register an observer for mutation events.
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: GraphObserver<K> + 'static,
    {
        self.observers.register(Box::new(observer));
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Whether a write of `(source, target)` must also write `(target, source)`.
    fn mirrors(&self, source: &K, target: &K) -> bool {
        !self.is_directed() && source != target
    }

    // -------------------------------------------------------------------------
    // Nodes
    // -------------------------------------------------------------------------

    /// Insert a node. Returns `false` if the key already exists.
    pub fn add_node(&mut self, key: K) -> bool {
        self.try_add_node(key).is_ok()
    }

    /// Insert a node, failing with `NodeExists` on a duplicate key.
    pub fn try_add_node(&mut self, key: K) -> Result<(), GraphError> {
        if self.nodes.contains_node(&key) {
            return Err(GraphError::node_exists(&key));
        }
        self.nodes.add_node(key.clone());
        self.edges.attach_node(&key);
        tracing::trace!(node = ?key, "node added");
        self.observers.emit(GraphEvent::NodeAdded(key));
        Ok(())
    }

    /// Insert several nodes. Returns how many were new.
    pub fn add_nodes<I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = K>,
    {
        keys.into_iter().filter(|key| self.add_node(key.clone())).count()
    }

    /// Remove a node, its value, and every edge touching it.
    pub fn remove_node(&mut self, key: &K) -> bool {
        self.try_remove_node(key).is_ok()
    }

    /// Remove a node, failing with `NodeNotFound` if it is absent.
    pub fn try_remove_node(&mut self, key: &K) -> Result<(), GraphError> {
        if !self.nodes.remove_node(key) {
            return Err(GraphError::node_not_found(key));
        }
        let dropped = self.edges.detach_node(key);
        tracing::trace!(node = ?key, dropped_halves = dropped, "node removed");
        self.observers.emit(GraphEvent::NodeRemoved(key.clone()));
        Ok(())
    }

    /// Remove several nodes. Returns how many were present.
    pub fn remove_nodes<I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = K>,
    {
        keys.into_iter().filter(|key| self.remove_node(key)).count()
    }

    /// Remove every node for which `predicate(key, value)` holds.
    pub fn remove_nodes_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&K, Option<&V>) -> bool,
    {
        let doomed: Vec<K> = self
            .nodes
            .nodes()
            .into_iter()
            .filter(|key| predicate(key, self.nodes.node_value(key)))
            .collect();
        self.remove_nodes(doomed)
    }

    /// Check whether a node exists.
    #[must_use]
    pub fn contains_node(&self, key: &K) -> bool {
        self.nodes.contains_node(key)
    }

    /// All node keys, in node-set order.
    #[must_use]
    pub fn nodes(&self) -> Vec<K> {
        self.nodes.nodes()
    }

    /// Number of live nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.node_count()
    }

    /// Value attached to a node, `None` if unset or unknown.
    #[must_use]
    pub fn node_value(&self, key: &K) -> Option<&V> {
        self.nodes.node_value(key)
    }

    /// Set (`Some`) or clear (`None`) a node's value.
    pub fn set_node_value(&mut self, key: &K, value: Option<V>) -> bool {
        self.nodes.set_node_value(key, value)
    }

    /// Set or clear a node's value, failing with `NodeNotFound`.
    pub fn try_set_node_value(&mut self, key: &K, value: Option<V>) -> Result<(), GraphError> {
        if self.nodes.set_node_value(key, value) {
            Ok(())
        } else {
            Err(GraphError::node_not_found(key))
        }
    }

    // -------------------------------------------------------------------------
    // Edges
    // -------------------------------------------------------------------------

    /// Both endpoints exist and neither half that would be written exists yet.
    fn validate_new_edge(&self, source: &K, target: &K) -> Result<(), GraphError> {
        if !self.nodes.contains_node(source) {
            return Err(GraphError::node_not_found(source));
        }
        if !self.nodes.contains_node(target) {
            return Err(GraphError::node_not_found(target));
        }
        if self.edges.contains_edge(source, target) {
            return Err(GraphError::edge_exists(source, target));
        }
        if self.mirrors(source, target) && self.edges.contains_edge(target, source) {
            return Err(GraphError::edge_exists(target, source));
        }
        Ok(())
    }

    /// Write both halves of a validated edge through `insert`.
    ///
    /// If the edge set refuses either half, the forward half is rolled back
    /// and no event is emitted.
    fn commit_edge<F>(
        &mut self,
        source: &K,
        target: &K,
        mut insert: F,
    ) -> Result<(), GraphError>
    where
        F: FnMut(&mut E, &K, &K) -> bool,
    {
        if !insert(&mut self.edges, source, target) {
            return Err(GraphError::storage_rejected(source, target));
        }
        if self.mirrors(source, target) && !insert(&mut self.edges, target, source) {
            self.edges.delete_edge(source, target);
            return Err(GraphError::storage_rejected(target, source));
        }
        tracing::trace!(source = ?source, target = ?target, "edge added");
        self.observers
            .emit(GraphEvent::EdgeAdded(Edge::new(source.clone(), target.clone())));
        Ok(())
    }

    /// Add an edge (mirrored if undirected).
    ///
    /// Fails if either node is unknown or the edge already exists.
    pub fn add_edge(&mut self, source: &K, target: &K) -> bool {
        self.try_add_edge(source, target).is_ok()
    }

    /// Add an edge, naming the missing node or existing edge on failure.
    pub fn try_add_edge(&mut self, source: &K, target: &K) -> Result<(), GraphError> {
        self.validate_new_edge(source, target)?;
        self.commit_edge(source, target, |edges, from, to| edges.insert_edge(from, to))
    }

    /// Add several edges. Returns how many were new.
    pub fn add_edges<I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = (K, K)>,
    {
        edges
            .into_iter()
            .filter(|(source, target)| self.add_edge(source, target))
            .count()
    }

    /// Create any missing endpoint, then add the edge.
    pub fn add_nodes_and_edge(&mut self, source: K, target: K) -> bool {
        self.add_node(source.clone());
        self.add_node(target.clone());
        self.add_edge(&source, &target)
    }

    /// Remove an edge (and its mirror if undirected).
    pub fn remove_edge(&mut self, source: &K, target: &K) -> bool {
        self.try_remove_edge(source, target).is_ok()
    }

    /// Remove an edge, failing with `EdgeNotFound` if absent.
    pub fn try_remove_edge(&mut self, source: &K, target: &K) -> Result<(), GraphError> {
        if !self.edges.contains_edge(source, target) {
            return Err(GraphError::edge_not_found(source, target));
        }
        self.edges.delete_edge(source, target);
        if self.mirrors(source, target) {
            self.edges.delete_edge(target, source);
        }
        tracing::trace!(source = ?source, target = ?target, "edge removed");
        self.observers
            .emit(GraphEvent::EdgeRemoved(Edge::new(source.clone(), target.clone())));
        Ok(())
    }

    /// Remove several edges. Returns how many were present.
    pub fn remove_edges<I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = (K, K)>,
    {
        edges
            .into_iter()
            .filter(|(source, target)| self.remove_edge(source, target))
            .count()
    }

    /// Remove every logical edge for which `predicate` holds.
    pub fn remove_edges_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Edge<K>) -> bool,
    {
        let doomed: Vec<(K, K)> = self
            .edges()
            .into_iter()
            .filter(|edge| predicate(edge))
            .map(|edge| (edge.source, edge.target))
            .collect();
        self.remove_edges(doomed)
    }

    /// Remove every edge touching `key` but keep the node.
    ///
    /// Returns the number of logical edges removed.
    pub fn clear_incident_edges(&mut self, key: &K) -> usize {
        self.remove_edges_where(|edge| edge.source == *key || edge.target == *key)
    }

    /// Whether `source -> target` is an edge.
    ///
    /// For undirected graphs this is symmetric.
    #[must_use]
    pub fn are_adjacent(&self, source: &K, target: &K) -> bool {
        self.edges.contains_edge(source, target)
    }

    /// Successors and predecessors of `key`, without duplicates.
    #[must_use]
    pub fn neighbors(&self, key: &K) -> Vec<K> {
        self.edges.neighbors(key)
    }

    /// Targets of edges leaving `key`, in backend order.
    #[must_use]
    pub fn successors(&self, key: &K) -> Vec<K> {
        self.edges.successors(key)
    }

    /// Sources of edges entering `key`, in backend order.
    #[must_use]
    pub fn predecessors(&self, key: &K) -> Vec<K> {
        self.edges.predecessors(key)
    }

    /// Number of distinct neighbours, `None` for unknown nodes.
    #[must_use]
    pub fn degree(&self, key: &K) -> Option<usize> {
        if !self.contains_node(key) {
            return None;
        }
        Some(self.neighbors(key).len())
    }

    /// Every logical edge.
    ///
    /// Undirected edges appear once, oriented with `source <= target`.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge<K>> {
        let halves = self.edges.edges();
        if self.is_directed() {
            return halves;
        }
        halves
            .into_iter()
            .filter(|edge| edge.source <= edge.target)
            .collect()
    }

    /// Number of logical edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        if self.is_directed() {
            return self.edges.edge_count();
        }
        // Mirrored edges hold two halves, self-edges hold one.
        let self_edges = self
            .nodes
            .nodes()
            .iter()
            .filter(|key| self.edges.contains_edge(key, key))
            .count();
        (self.edges.edge_count() + self_edges) / 2
    }

    /// Remove every node and edge. Observers stay registered.
    pub fn clear(&mut self) {
        MutableNodeSet::clear(&mut self.nodes);
        MutableEdgeSet::clear(&mut self.edges);
        tracing::trace!("graph cleared");
    }

    // -------------------------------------------------------------------------
    // Traversal
    // -------------------------------------------------------------------------

    /// Breadth-first search from `start`. `None` if `start` is unknown.
    #[must_use]
    pub fn breadth_first_search(&self, start: &K) -> Option<Traversal<K>> {
        traversal::breadth_first_search(self, start)
    }

    /// Depth-first search from `start`. `None` if `start` is unknown.
    #[must_use]
    pub fn depth_first_search(&self, start: &K) -> Option<Traversal<K>> {
        traversal::depth_first_search(self, start)
    }

    /// Path from `start` to `target` found by depth-first search.
    ///
    /// See [`traversal::depth_first_path`] for the unreachable case.
    #[must_use]
    pub fn depth_first_path(&self, start: &K, target: &K) -> Vec<K> {
        traversal::depth_first_path(self, start, target)
    }
}

// =============================================================================
// WEIGHTED EXTENSION
// =============================================================================

impl<K, V, N, E> Graph<K, V, N, E>
where
    K: NodeKey,
    N: MutableNodeSet<K, V>,
    E: WeightedEdgeSet<K>,
{
    /// The backend's off weight.
    pub fn off_weight(&self) -> &E::Weight {
        self.edges.off_weight()
    }

    /// Weight of `source -> target`, or the off weight if there is no edge.
    #[must_use]
    pub fn edge_weight(&self, source: &K, target: &K) -> E::Weight {
        self.edges.weight_or_off(source, target)
    }

    /// Add an edge carrying `weight` (mirrored if undirected).
    pub fn add_weighted_edge(&mut self, source: &K, target: &K, weight: E::Weight) -> bool {
        self.try_add_weighted_edge(source, target, weight).is_ok()
    }

    /// Add a weighted edge, naming the missing node or existing edge on failure.
    pub fn try_add_weighted_edge(
        &mut self,
        source: &K,
        target: &K,
        weight: E::Weight,
    ) -> Result<(), GraphError> {
        self.validate_new_edge(source, target)?;
        self.commit_edge(source, target, |edges, from, to| {
            edges.insert_weighted_edge(from, to, weight.clone())
        })
    }

    /// Add several weighted edges. Returns how many were new.
    pub fn add_weighted_edges<I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = (K, K, E::Weight)>,
    {
        edges
            .into_iter()
            .filter(|(source, target, weight)| {
                self.add_weighted_edge(source, target, weight.clone())
            })
            .count()
    }

    /// Overwrite the weight of an existing edge (and its mirror).
    ///
    /// Never creates an edge.
    pub fn set_edge_weight(&mut self, source: &K, target: &K, weight: E::Weight) -> bool {
        self.try_set_edge_weight(source, target, weight).is_ok()
    }

    /// Overwrite an edge weight, failing with `EdgeNotFound` if absent.
    pub fn try_set_edge_weight(
        &mut self,
        source: &K,
        target: &K,
        weight: E::Weight,
    ) -> Result<(), GraphError> {
        if !self.edges.contains_edge(source, target) {
            return Err(GraphError::edge_not_found(source, target));
        }
        if self.mirrors(source, target) {
            self.edges.set_weight(target, source, weight.clone());
        }
        self.edges.set_weight(source, target, weight);
        tracing::trace!(source = ?source, target = ?target, "edge weight changed");
        self.observers.emit(GraphEvent::EdgeWeightChanged(Edge::new(
            source.clone(),
            target.clone(),
        )));
        Ok(())
    }

    /// Every logical edge with its weight.
    #[must_use]
    pub fn weighted_edges(&self) -> Vec<WeightedEdge<K, E::Weight>> {
        self.edges()
            .into_iter()
            .map(|edge| {
                let weight = self.edge_weight(&edge.source, &edge.target);
                WeightedEdge::new(edge.source, edge.target, weight)
            })
            .collect()
    }

    /// Prim's minimum spanning tree.
    ///
    /// See [`mst::prims_minimum_spanning_tree`].
    #[must_use]
    pub fn prims_minimum_spanning_tree(
        &self,
        minimum_weight: E::Weight,
        maximum_weight: E::Weight,
    ) -> BTreeMap<K, E::Weight> {
        mst::prims_minimum_spanning_tree(self, minimum_weight, maximum_weight)
    }
}

// =============================================================================
// ALGORITHM VIEWS
// =============================================================================

impl<K, V, N, E> GraphView<K> for Graph<K, V, N, E>
where
    K: NodeKey,
    N: MutableNodeSet<K, V>,
    E: MutableEdgeSet<K>,
{
    fn node_keys(&self) -> Vec<K> {
        self.nodes()
    }

    fn has_node(&self, key: &K) -> bool {
        self.contains_node(key)
    }

    fn out_neighbors(&self, key: &K) -> Vec<K> {
        self.successors(key)
    }
}

impl<K, V, N, E> WeightedGraphView<K> for Graph<K, V, N, E>
where
    K: NodeKey,
    N: MutableNodeSet<K, V>,
    E: WeightedEdgeSet<K>,
{
    type Weight = E::Weight;

    fn weight_between(&self, source: &K, target: &K) -> E::Weight {
        self.edge_weight(source, target)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type ListGraph = Graph<u32, String>;
    type MatrixGraph = Graph<u32, String, NodeMap<u32, String>, MatrixEdgeSet<u32, i64>>;

    /// Adjacency storage that refuses every insert leaving `refused`.
    #[derive(Debug)]
    struct RefusingEdgeSet {
        inner: AdjacencyEdgeSet<u32>,
        refused: u32,
    }

    impl EdgeSet<u32> for RefusingEdgeSet {
        fn contains_edge(&self, source: &u32, target: &u32) -> bool {
            self.inner.contains_edge(source, target)
        }

        fn successors(&self, source: &u32) -> Vec<u32> {
            self.inner.successors(source)
        }

        fn predecessors(&self, target: &u32) -> Vec<u32> {
            self.inner.predecessors(target)
        }

        fn edges(&self) -> Vec<Edge<u32>> {
            self.inner.edges()
        }

        fn edge_count(&self) -> usize {
            self.inner.edge_count()
        }
    }

    impl MutableEdgeSet<u32> for RefusingEdgeSet {
        fn attach_node(&mut self, node: &u32) -> bool {
            self.inner.attach_node(node)
        }

        fn detach_node(&mut self, node: &u32) -> usize {
            self.inner.detach_node(node)
        }

        fn insert_edge(&mut self, source: &u32, target: &u32) -> bool {
            *source != self.refused && self.inner.insert_edge(source, target)
        }

        fn delete_edge(&mut self, source: &u32, target: &u32) -> bool {
            self.inner.delete_edge(source, target)
        }

        fn clear(&mut self) {
            self.inner.clear();
        }
    }

    fn prefilled(keys: &[u32]) -> NodeMap<u32, String> {
        let mut set = NodeMap::new();
        for key in keys {
            set.add_node(*key);
        }
        set
    }

    fn nodes<N, E>(graph: &mut Graph<u32, String, N, E>, keys: &[u32])
    where
        N: MutableNodeSet<u32, String>,
        E: MutableEdgeSet<u32>,
    {
        for key in keys {
            graph.add_node(*key);
        }
    }

    #[test]
    fn duplicate_node_is_rejected() {
        let mut graph = ListGraph::adjacency(Directedness::Directed);
        assert!(graph.add_node(1));
        assert!(!graph.add_node(1));
        assert_eq!(
            graph.try_add_node(1),
            Err(GraphError::NodeExists("1".to_string()))
        );
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn edge_to_unknown_node_names_the_key() {
        let mut graph = ListGraph::adjacency(Directedness::Directed);
        nodes(&mut graph, &[1]);

        assert_eq!(
            graph.try_add_edge(&1, &7),
            Err(GraphError::NodeNotFound("7".to_string()))
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn undirected_add_is_symmetric() {
        let mut graph = ListGraph::adjacency(Directedness::Undirected);
        nodes(&mut graph, &[1, 2]);

        assert!(graph.add_edge(&1, &2));
        assert!(graph.are_adjacent(&1, &2));
        assert!(graph.are_adjacent(&2, &1));
        assert!(!graph.add_edge(&2, &1));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges(), vec![Edge::new(1, 2)]);
    }

    #[test]
    fn undirected_remove_clears_both_halves() {
        let mut graph = MatrixGraph::matrix(Directedness::Undirected, 0);
        nodes(&mut graph, &[1, 2]);
        graph.add_edge(&1, &2);

        assert!(graph.remove_edge(&2, &1));
        assert!(!graph.are_adjacent(&1, &2));
        assert!(!graph.are_adjacent(&2, &1));
        assert_eq!(graph.edge_set().edge_count(), 0);
    }

    #[test]
    fn directed_edge_is_one_way() {
        let mut graph = ListGraph::adjacency(Directedness::Directed);
        nodes(&mut graph, &[1, 2]);
        graph.add_edge(&1, &2);

        assert!(graph.are_adjacent(&1, &2));
        assert!(!graph.are_adjacent(&2, &1));
        assert!(graph.add_edge(&2, &1));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn undirected_self_edge_touches_one_half() {
        let mut graph = MatrixGraph::matrix(Directedness::Undirected, 0);
        nodes(&mut graph, &[4]);

        assert!(graph.add_edge(&4, &4));
        assert_eq!(graph.edge_set().edge_count(), 1);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(&4), vec![4]);
    }

    #[test]
    fn removing_node_cascades() {
        let mut graph = ListGraph::adjacency(Directedness::Directed);
        nodes(&mut graph, &[1, 2, 3]);
        graph.add_edge(&1, &2);
        graph.add_edge(&2, &3);
        graph.add_edge(&3, &2);
        graph.set_node_value(&2, Some("two".to_string()));

        assert!(graph.remove_node(&2));

        assert!(graph.neighbors(&2).is_empty());
        assert!(graph.neighbors(&1).is_empty());
        assert!(graph.neighbors(&3).is_empty());
        assert_eq!(graph.node_value(&2), None);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.edge_set().is_consistent());
    }

    #[test]
    fn set_weight_requires_existing_edge() {
        let mut graph = MatrixGraph::matrix(Directedness::Undirected, -1);
        nodes(&mut graph, &[1, 2]);

        assert_eq!(
            graph.try_set_edge_weight(&1, &2, 5),
            Err(GraphError::EdgeNotFound("1".to_string(), "2".to_string()))
        );
        assert!(!graph.are_adjacent(&1, &2));

        graph.add_edge(&1, &2);
        assert_eq!(graph.edge_weight(&1, &2), -1);
        assert!(graph.set_edge_weight(&1, &2, 5));
        assert_eq!(graph.edge_weight(&1, &2), 5);
        assert_eq!(graph.edge_weight(&2, &1), 5);
    }

    #[test]
    fn weighted_add_mirrors_weight() {
        let mut graph: Graph<u32, (), _, _> =
            Graph::weighted_adjacency(Directedness::Undirected, 0i64);
        graph.add_nodes([1, 2]);

        assert!(graph.add_weighted_edge(&1, &2, 9));
        assert_eq!(graph.edge_weight(&2, &1), 9);
        assert_eq!(graph.weighted_edges(), vec![WeightedEdge::new(1, 2, 9)]);
    }

    #[test]
    fn bulk_operations_count_successes() {
        let mut graph = ListGraph::adjacency(Directedness::Undirected);
        assert_eq!(graph.add_nodes([1, 2, 2, 3]), 3);
        assert_eq!(graph.add_edges([(1, 2), (2, 1), (2, 3), (1, 9)]), 2);
        assert_eq!(graph.remove_edges([(1, 2), (1, 2)]), 1);
        assert_eq!(graph.remove_nodes([3, 3, 8]), 1);
    }

    #[test]
    fn predicate_removal() {
        let mut graph = ListGraph::adjacency(Directedness::Directed);
        nodes(&mut graph, &[1, 2, 3, 4]);
        graph.add_edges([(1, 2), (2, 3), (3, 4), (4, 1)]);

        assert_eq!(graph.remove_edges_where(|edge| edge.source % 2 == 0), 2);
        assert_eq!(graph.edges(), vec![Edge::new(1, 2), Edge::new(3, 4)]);

        assert_eq!(graph.remove_nodes_where(|key, _| *key > 2), 2);
        assert_eq!(graph.nodes(), vec![1, 2]);
    }

    #[test]
    fn clear_incident_edges_keeps_node() {
        let mut graph = ListGraph::adjacency(Directedness::Undirected);
        nodes(&mut graph, &[1, 2, 3]);
        graph.add_edges([(1, 2), (2, 3), (1, 3)]);

        assert_eq!(graph.clear_incident_edges(&2), 2);
        assert!(graph.contains_node(&2));
        assert_eq!(graph.degree(&2), Some(0));
        assert_eq!(graph.degree(&1), Some(1));
        assert_eq!(graph.degree(&9), None);
    }

    #[test]
    fn add_nodes_and_edge_creates_endpoints() {
        let mut graph = ListGraph::adjacency(Directedness::Directed);
        assert!(graph.add_nodes_and_edge(5, 6));
        assert!(graph.contains_node(&5));
        assert!(graph.contains_node(&6));
        assert!(!graph.add_nodes_and_edge(5, 6));
    }

    #[test]
    fn observers_see_one_event_per_logical_mutation() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut graph = ListGraph::adjacency(Directedness::Undirected);
        graph.subscribe(move |event: &GraphEvent<u32>| sink.borrow_mut().push(event.clone()));
        assert_eq!(graph.observer_count(), 1);

        nodes(&mut graph, &[1, 2]);
        graph.add_edge(&1, &2);
        graph.add_edge(&1, &2);
        graph.remove_node(&1);

        assert_eq!(
            *seen.borrow(),
            vec![
                GraphEvent::NodeAdded(1),
                GraphEvent::NodeAdded(2),
                GraphEvent::EdgeAdded(Edge::new(1, 2)),
                GraphEvent::NodeRemoved(1),
            ]
        );
    }

    #[test]
    fn node_values_round_trip() {
        let mut graph = ListGraph::adjacency(Directedness::Directed);
        nodes(&mut graph, &[1]);

        assert!(graph.set_node_value(&1, Some("one".to_string())));
        assert_eq!(graph.node_value(&1).map(String::as_str), Some("one"));
        assert!(graph.set_node_value(&1, None));
        assert_eq!(graph.node_value(&1), None);
        assert!(graph.try_set_node_value(&2, None).is_err());
    }

    #[test]
    fn prefilled_node_set_accepts_edges() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut lists: ListGraph = Graph::new(
            prefilled(&[1, 2]),
            AdjacencyEdgeSet::unweighted(),
            Directedness::Directed,
        );
        lists.subscribe(move |event: &GraphEvent<u32>| sink.borrow_mut().push(event.clone()));

        assert_eq!(lists.try_add_edge(&1, &2), Ok(()));
        assert!(lists.are_adjacent(&1, &2));
        assert_eq!(lists.edge_count(), 1);
        assert!(lists.edge_set().is_consistent());
        assert_eq!(*seen.borrow(), vec![GraphEvent::EdgeAdded(Edge::new(1, 2))]);

        let mut matrix: MatrixGraph = Graph::new(
            prefilled(&[1, 2]),
            MatrixEdgeSet::new(0),
            Directedness::Undirected,
        );
        assert_eq!(matrix.edge_set().dimension(), 2);
        assert_eq!(matrix.try_add_weighted_edge(&1, &2, 9), Ok(()));
        assert_eq!(matrix.edge_weight(&2, &1), 9);
        assert!(matrix.edge_set().is_consistent());
    }

    #[test]
    fn refused_mirror_half_is_rolled_back() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let edges = RefusingEdgeSet {
            inner: AdjacencyEdgeSet::unweighted(),
            refused: 2,
        };
        let mut graph: Graph<u32, String, NodeMap<u32, String>, RefusingEdgeSet> =
            Graph::new(prefilled(&[1, 2, 3]), edges, Directedness::Undirected);
        graph.subscribe(move |event: &GraphEvent<u32>| sink.borrow_mut().push(event.clone()));

        assert_eq!(
            graph.try_add_edge(&1, &2),
            Err(GraphError::StorageRejected("2".to_string(), "1".to_string()))
        );
        assert!(!graph.are_adjacent(&1, &2));
        assert!(!graph.are_adjacent(&2, &1));

        assert!(!graph.add_edge(&2, &3));
        assert_eq!(graph.edge_set().edge_count(), 0);
        assert!(graph.edge_set().inner.is_consistent());
        assert!(seen.borrow().is_empty());

        assert!(graph.add_edge(&1, &3));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn undirected_count_mixes_self_edges() {
        let mut graph = ListGraph::adjacency(Directedness::Undirected);
        nodes(&mut graph, &[1, 2, 3]);
        graph.add_edge(&1, &2);
        graph.add_edge(&3, &3);
        graph.add_edge(&2, &3);

        assert_eq!(graph.edge_set().edge_count(), 5);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edge_count(), graph.edges().len());
    }

    #[test]
    fn clone_copies_structure_not_observers() {
        let mut graph = MatrixGraph::matrix(Directedness::Undirected, 0);
        graph.subscribe(|_: &GraphEvent<u32>| {});
        nodes(&mut graph, &[1, 2, 3]);
        graph.add_weighted_edge(&1, &2, 5);

        let mut copy = graph.clone();
        assert_eq!(copy.observer_count(), 0);
        assert_eq!(copy.edges(), graph.edges());
        assert_eq!(copy.edge_weight(&2, &1), 5);
        assert!(!copy.is_directed());

        copy.add_edge(&2, &3);
        assert!(!graph.are_adjacent(&2, &3));
        assert_eq!(graph.observer_count(), 1);
    }

    #[test]
    fn clear_empties_graph() {
        let mut graph = MatrixGraph::matrix(Directedness::Directed, 0);
        nodes(&mut graph, &[1, 2]);
        graph.add_edge(&1, &2);
        graph.clear();

        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.add_node(1));
        assert!(graph.edge_set().is_consistent());
    }
}
