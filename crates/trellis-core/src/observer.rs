//! # Graph Events
//!
//! Notification hooks fired by [`crate::Graph`] after each successful mutation.
//!
//! Observers are optional: no correctness property of the graph or its
//! algorithms depends on them. Undirected edges produce a single event per
//! logical edge, not one per mirrored half.

use crate::types::{Edge, NodeKey};

/// A mutation that has just been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphEvent<K> {
    /// A node was inserted.
    NodeAdded(K),
    /// A node and all of its incident edges were removed.
    NodeRemoved(K),
    /// An edge was inserted.
    EdgeAdded(Edge<K>),
    /// An edge was removed explicitly (cascaded removals are covered by
    /// `NodeRemoved`).
    EdgeRemoved(Edge<K>),
    /// The weight of an existing edge was overwritten.
    EdgeWeightChanged(Edge<K>),
}

/// Receives [`GraphEvent`]s.
///
/// Implemented for every `FnMut(&GraphEvent<K>)` closure.
pub trait GraphObserver<K> {
    /// Called once per applied mutation, in mutation order.
    fn notify(&mut self, event: &GraphEvent<K>);
}

impl<K, F> GraphObserver<K> for F
where
    F: FnMut(&GraphEvent<K>),
{
    fn notify(&mut self, event: &GraphEvent<K>) {
        self(event);
    }
}

/// Ordered list of registered observers.
pub(crate) struct ObserverList<K> {
    observers: Vec<Box<dyn GraphObserver<K>>>,
}

impl<K: NodeKey> ObserverList<K> {
    pub(crate) fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    pub(crate) fn register(&mut self, observer: Box<dyn GraphObserver<K>>) {
        self.observers.push(observer);
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    pub(crate) fn emit(&mut self, event: GraphEvent<K>) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}

impl<K> std::fmt::Debug for ObserverList<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList")
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn closures_receive_events_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut list = ObserverList::new();
        list.register(Box::new(move |event: &GraphEvent<u32>| {
            sink.borrow_mut().push(event.clone());
        }));

        list.emit(GraphEvent::NodeAdded(1));
        list.emit(GraphEvent::EdgeAdded(Edge::new(1, 1)));

        assert_eq!(list.len(), 1);
        assert_eq!(
            *seen.borrow(),
            vec![
                GraphEvent::NodeAdded(1),
                GraphEvent::EdgeAdded(Edge::new(1, 1))
            ]
        );
    }
}
