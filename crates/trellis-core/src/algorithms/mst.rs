//! # Minimum Spanning Tree
//!
//! Prim's algorithm over a [`WeightedGraphView`].
//!
//! The caller supplies the weight type's minimum and maximum: the first
//! enumerated node is seeded with `minimum`, every other node starts at
//! `maximum`. Each round selects the cheapest node not yet in the tree (ties
//! broken by key order) and lowers the tentative cost of its successors.
//!
//! The result maps every selected node to the cost it was selected at. On a
//! disconnected graph unreachable nodes are still selected, at `maximum`
//! (or whatever their cost is when they are reached).

use crate::contracts::WeightedGraphView;
use crate::types::NodeKey;
use std::collections::BTreeMap;

/// Prim's minimum spanning tree.
///
/// Returns an empty map for an empty graph.
pub fn prims_minimum_spanning_tree<K, G>(
    graph: &G,
    minimum_weight: G::Weight,
    maximum_weight: G::Weight,
) -> BTreeMap<K, G::Weight>
where
    K: NodeKey,
    G: WeightedGraphView<K> + ?Sized,
{
    let keys = graph.node_keys();
    let Some(seed) = keys.first().cloned() else {
        return BTreeMap::new();
    };

    let mut costs: BTreeMap<K, G::Weight> = keys
        .iter()
        .map(|key| (key.clone(), maximum_weight.clone()))
        .collect();
    costs.insert(seed, minimum_weight);

    let mut tree: BTreeMap<K, G::Weight> = BTreeMap::new();
    while let Some((key, cost)) = cheapest_outside(&costs, &tree) {
        for next in graph.out_neighbors(&key) {
            if tree.contains_key(&next) {
                continue;
            }
            let weight = graph.weight_between(&key, &next);
            if let Some(current) = costs.get_mut(&next)
                && weight < *current
            {
                *current = weight;
            }
        }
        tree.insert(key, cost);
    }

    tracing::debug!(selected = tree.len(), "minimum spanning tree complete");
    tree
}

/// The lowest-cost node not yet in `tree`, lowest key first on ties.
fn cheapest_outside<K: NodeKey, W: Ord + Clone>(
    costs: &BTreeMap<K, W>,
    tree: &BTreeMap<K, W>,
) -> Option<(K, W)> {
    costs
        .iter()
        .filter(|(key, _)| !tree.contains_key(*key))
        .min_by(|(key_a, cost_a), (key_b, cost_b)| {
            cost_a.cmp(cost_b).then_with(|| key_a.cmp(key_b))
        })
        .map(|(key, cost)| (key.clone(), cost.clone()))
}
