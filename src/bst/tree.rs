use crate::node::{Node, Tree};
use std::cmp::Ordering;
use std::mem;

pub type BstTree<T> = Tree<T, ()>;

pub fn insert<T>(tree: &mut BstTree<T>, key: T) -> bool
where
    T: Ord,
{
    match tree {
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key),
            Ordering::Greater => insert(&mut node.right, key),
            Ordering::Equal => false,
        },
        None => {
            *tree = Some(Box::new(Node::new(key, ())));
            true
        },
    }
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut BstTree<T>) -> T {
    if let Some(node) = tree {
        if node.left.is_some() {
            return remove_min(&mut node.left);
        }
    }

    match tree.take() {
        Some(mut node) => {
            *tree = node.right.take();
            node.key
        },
        None => unreachable!(),
    }
}

// Detaches the key of `node` and returns it along with the subtree that takes the node's place.
fn splice<T>(mut node: Box<Node<T, ()>>) -> (T, BstTree<T>) {
    match (node.left.take(), node.right.take()) {
        (None, right) => (node.key, right),
        (left, None) => (node.key, left),
        (left, mut right) => {
            let successor = remove_min(&mut right);
            let key = mem::replace(&mut node.key, successor);
            node.left = left;
            node.right = right;
            (key, Some(node))
        },
    }
}

pub fn remove<T>(tree: &mut BstTree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    match tree.take() {
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                let (ret, replacement) = splice(node);
                *tree = replacement;
                Some(ret)
            },
        },
        None => None,
    }
}
