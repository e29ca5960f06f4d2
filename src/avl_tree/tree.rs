use crate::avl_tree::node::Height;
use crate::node::{self, Node, Tree};
use std::cmp::Ordering;
use std::mem;

pub type AvlTree<T> = Tree<T, Height>;

fn rotate_left<T>(node: Box<Node<T, Height>>) -> Box<Node<T, Height>> {
    trace!("avl rotate left at height {}", node.meta.0);
    node::rotate_left(node)
}

fn rotate_right<T>(node: Box<Node<T, Height>>) -> Box<Node<T, Height>> {
    trace!("avl rotate right at height {}", node.meta.0);
    node::rotate_right(node)
}

// Restores the balance of the root of `tree` after an insertion. `side` is the side of the root
// the new key descended into and `child_side` is the side of that child it descended into.
fn rebalance_after_insert<T>(tree: &mut AvlTree<T>, side: Ordering, child_side: Ordering) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 && side == Ordering::Less {
        if child_side == Ordering::Greater {
            if let Some(child) = node.left.take() {
                node.left = Some(rotate_left(child));
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 && side == Ordering::Greater {
        if child_side == Ordering::Less {
            if let Some(child) = node.right.take() {
                node.right = Some(rotate_right(child));
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// Restores the balance of the root of `tree` after a removal, choosing between a single and a
// double rotation from the balance of the taller child.
fn rebalance<T>(tree: &mut AvlTree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// Returns the side of the root of `tree` the key descended into, `Equal` if the key became the
// root of `tree`, or `None` if the key was already present.
fn insert_at<T>(tree: &mut AvlTree<T>, key: T) -> Option<Ordering>
where
    T: Ord,
{
    let (side, child_side) = match tree {
        Some(node) => {
            let side = key.cmp(&node.key);
            let child_side = match side {
                Ordering::Less => insert_at(&mut node.left, key)?,
                Ordering::Greater => insert_at(&mut node.right, key)?,
                Ordering::Equal => return None,
            };
            (side, child_side)
        },
        None => {
            *tree = Some(Box::new(Node::leaf(key)));
            return Some(Ordering::Equal);
        },
    };

    rebalance_after_insert(tree, side, child_side);
    Some(side)
}

pub fn insert<T>(tree: &mut AvlTree<T>, key: T) -> bool
where
    T: Ord,
{
    insert_at(tree, key).is_some()
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut AvlTree<T>) -> T {
    if let Some(node) = tree {
        if node.left.is_some() {
            let ret = remove_min(&mut node.left);
            rebalance(tree);
            return ret;
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
fn splice<T>(mut node: Box<Node<T, Height>>) -> (T, AvlTree<T>) {
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

pub fn remove<T>(tree: &mut AvlTree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let ret = match tree.take() {
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
        None => return None,
    };

    rebalance(tree);
    ret
}

#[cfg(test)]
pub fn is_balanced<T>(tree: &AvlTree<T>) -> bool {
    use crate::avl_tree::node::height;
    use std::cmp;

    match tree {
        None => true,
        Some(node) => {
            let left = height(&node.left);
            let right = height(&node.right);
            node.balance().abs() <= 1
                && node.meta.0 == cmp::max(left, right) + 1
                && is_balanced(&node.left)
                && is_balanced(&node.right)
        },
    }
}
