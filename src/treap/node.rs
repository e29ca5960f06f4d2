use crate::node::{Metadata, Node};

/// Random priority of a treap node. It is drawn once when the node is created and never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority(pub u64);

impl Metadata for Priority {}

impl<T> Node<T, Priority> {
    pub fn priority(&self) -> Priority {
        self.meta
    }

    // Returns true if the child outranks this node and must be rotated above it.
    pub fn is_heap_property_violated(&self, child: &Option<Box<Self>>) -> bool {
        match child {
            Some(child) => child.meta > self.meta,
            None => false,
        }
    }
}
