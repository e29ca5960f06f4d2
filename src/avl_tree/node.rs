use crate::node::{Metadata, Node, Tree};
use std::cmp;

/// Height of the subtree rooted at a node, counted in nodes. A leaf has height `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Height(pub usize);

pub fn height<T>(tree: &Tree<T, Height>) -> usize {
    match tree {
        None => 0,
        Some(node) => node.meta.0,
    }
}

impl Metadata for Height {
    fn update<T>(node: &mut Node<T, Self>) {
        node.meta.0 = cmp::max(height(&node.left), height(&node.right)) + 1;
    }
}

impl<T> Node<T, Height> {
    pub fn leaf(key: T) -> Self {
        Node::new(key, Height(1))
    }

    pub fn update(&mut self) {
        Height::update(self);
    }

    pub fn balance(&self) -> isize {
        (height(&self.left) as isize) - (height(&self.right) as isize)
    }
}
