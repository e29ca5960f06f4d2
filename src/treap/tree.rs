use crate::node::{self, Node, Tree};
use crate::treap::node::Priority;
use rand::Rng;
use std::cmp::Ordering;

pub type TreapTree<T> = Tree<T, Priority>;

enum RemovalCase {
    Splice,
    RotateLeft,
    RotateRight,
}

fn removal_case<T>(node: &Node<T, Priority>) -> RemovalCase {
    match (&node.left, &node.right) {
        (Some(left_node), Some(right_node)) => {
            if left_node.priority() >= right_node.priority() {
                RemovalCase::RotateRight
            } else {
                RemovalCase::RotateLeft
            }
        },
        _ => RemovalCase::Splice,
    }
}

pub fn insert<T, R>(tree: &mut TreapTree<T>, key: T, rng: &mut R) -> bool
where
    T: Ord,
    R: Rng,
{
    match tree.take() {
        Some(mut node) => {
            let inserted = match key.cmp(&node.key) {
                Ordering::Less => {
                    let inserted = insert(&mut node.left, key, rng);
                    if node.is_heap_property_violated(&node.left) {
                        trace!("treap rotate right to lift priority");
                        node = node::rotate_right(node);
                    }
                    inserted
                },
                Ordering::Greater => {
                    let inserted = insert(&mut node.right, key, rng);
                    if node.is_heap_property_violated(&node.right) {
                        trace!("treap rotate left to lift priority");
                        node = node::rotate_left(node);
                    }
                    inserted
                },
                Ordering::Equal => false,
            };
            *tree = Some(node);
            inserted
        },
        None => {
            *tree = Some(Box::new(Node::new(key, Priority(rng.next_u64()))));
            true
        },
    }
}

// Removes the root of the subtree rooted at `node` by rotating it down until it has at most one
// child. Returns the removed key along with the subtree that takes the node's place.
fn remove_root<T>(node: Box<Node<T, Priority>>) -> (T, TreapTree<T>) {
    match removal_case(&node) {
        RemovalCase::Splice => {
            let Node { key, left, right, .. } = *node;
            (key, left.or(right))
        },
        RemovalCase::RotateRight => {
            trace!("treap rotate right to sink removed key");
            let mut new_root = node::rotate_right(node);
            let (key, subtree) = match new_root.right.take() {
                Some(target) => remove_root(target),
                None => unreachable!(),
            };
            new_root.right = subtree;
            (key, Some(new_root))
        },
        RemovalCase::RotateLeft => {
            trace!("treap rotate left to sink removed key");
            let mut new_root = node::rotate_left(node);
            let (key, subtree) = match new_root.left.take() {
                Some(target) => remove_root(target),
                None => unreachable!(),
            };
            new_root.left = subtree;
            (key, Some(new_root))
        },
    }
}

pub fn remove<T>(tree: &mut TreapTree<T>, key: &T) -> Option<T>
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
                let (ret, replacement) = remove_root(node);
                *tree = replacement;
                Some(ret)
            },
        },
        None => None,
    }
}

#[cfg(test)]
pub fn is_heap<T>(tree: &TreapTree<T>) -> bool {
    match tree {
        None => true,
        Some(node) => {
            !node.is_heap_property_violated(&node.left)
                && !node.is_heap_property_violated(&node.right)
                && is_heap(&node.left)
                && is_heap(&node.right)
        },
    }
}
