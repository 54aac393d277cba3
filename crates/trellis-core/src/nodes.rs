//! # Node Map
//!
//! The standard node set: a `BTreeMap` from key to optional value.
//! Enumeration is in ascending key order.

use crate::contracts::{MutableNodeSet, NodeSet};
use crate::types::NodeKey;
use std::collections::BTreeMap;

/// Node set backed by a `BTreeMap<K, Option<V>>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeMap<K, V> {
    entries: BTreeMap<K, Option<V>>,
}

impl<K, V> Default for NodeMap<K, V> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K: NodeKey, V> NodeMap<K, V> {
    /// Create an empty node set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: NodeKey, V> NodeSet<K, V> for NodeMap<K, V> {
    fn contains_node(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    fn nodes(&self) -> Vec<K> {
        self.entries.keys().cloned().collect()
    }

    fn node_count(&self) -> usize {
        self.entries.len()
    }

    fn node_value(&self, key: &K) -> Option<&V> {
        self.entries.get(key).and_then(Option::as_ref)
    }
}

impl<K: NodeKey, V> MutableNodeSet<K, V> for NodeMap<K, V> {
    fn add_node(&mut self, key: K) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, None);
        true
    }

    fn remove_node(&mut self, key: &K) -> bool {
        self.entries.remove(key).is_some()
    }

    fn set_node_value(&mut self, key: &K, value: Option<V>) -> bool {
        match self.entries.get_mut(key) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}
