use std::cmp::Ordering;
use std::iter::FusedIterator;

pub type Tree<T, M> = Option<Box<Node<T, M>>>;

/// Per-node bookkeeping that a balancing strategy attaches to each node.
pub trait Metadata: Sized {
    /// Recomputes any metadata derived from the node's children. Called bottom-up after every
    /// structural change below `node`.
    fn update<T>(_node: &mut Node<T, Self>) {}
}

impl Metadata for () {}

/// A struct representing an internal node of a binary search tree.
pub struct Node<T, M> {
    pub key: T,
    pub meta: M,
    pub left: Tree<T, M>,
    pub right: Tree<T, M>,
}

impl<T, M> Node<T, M> {
    pub fn new(key: T, meta: M) -> Self {
        Node {
            key,
            meta,
            left: None,
            right: None,
        }
    }
}

// Returns the node unchanged if it has no right child.
pub fn rotate_left<T, M>(mut node: Box<Node<T, M>>) -> Box<Node<T, M>>
where
    M: Metadata,
{
    let mut child = match node.right.take() {
        Some(child) => child,
        None => return node,
    };
    node.right = child.left.take();
    M::update(&mut *node);
    child.left = Some(node);
    M::update(&mut *child);
    child
}

// Returns the node unchanged if it has no left child.
pub fn rotate_right<T, M>(mut node: Box<Node<T, M>>) -> Box<Node<T, M>>
where
    M: Metadata,
{
    let mut child = match node.left.take() {
        Some(child) => child,
        None => return node,
    };
    node.left = child.right.take();
    M::update(&mut *node);
    child.right = Some(node);
    M::update(&mut *child);
    child
}

pub fn get<'a, T, M>(tree: &'a Tree<T, M>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(node) = curr {
        match key.cmp(&node.key) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.key),
        }
    }
    None
}

pub fn min<T, M>(tree: &Tree<T, M>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T, M>(tree: &Tree<T, M>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

/// Number of nodes on the longest root-to-leaf path. Walks with an explicit stack so degenerate
/// trees of any size can be measured.
pub fn depth<T, M>(tree: &Tree<T, M>) -> usize {
    let mut stack = Vec::new();
    let mut ret = 0;
    if let Some(node) = tree {
        stack.push((&**node, 1));
    }
    while let Some((node, level)) = stack.pop() {
        if level > ret {
            ret = level;
        }
        if let Some(ref left_node) = node.left {
            stack.push((&**left_node, level + 1));
        }
        if let Some(ref right_node) = node.right {
            stack.push((&**right_node, level + 1));
        }
    }
    ret
}

/// Releases every node without recursing, so a degenerate chain cannot exhaust the call stack.
pub fn clear<T, M>(tree: &mut Tree<T, M>) {
    drop(IntoIter::new(tree.take()));
}

/// In-order iterator over borrowed keys.
pub struct Iter<'a, T, M>
where
    T: 'a,
    M: 'a,
{
    stack: Vec<&'a Node<T, M>>,
    remaining: usize,
}

impl<'a, T, M> Iter<'a, T, M>
where
    T: 'a,
    M: 'a,
{
    pub fn new(tree: &'a Tree<T, M>, len: usize) -> Self {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left(tree);
        iter
    }

    fn push_left(&mut self, mut tree: &'a Tree<T, M>) {
        while let Some(node) = tree {
            self.stack.push(&**node);
            tree = &node.left;
        }
    }
}

impl<'a, T, M> Iterator for Iter<'a, T, M>
where
    T: 'a,
    M: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(&node.right);
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, M> ExactSizeIterator for Iter<'a, T, M> {}

impl<'a, T, M> FusedIterator for Iter<'a, T, M> {}

/// In-order iterator that consumes the tree, releasing each node as its key is yielded.
pub struct IntoIter<T, M> {
    stack: Vec<Box<Node<T, M>>>,
}

impl<T, M> IntoIter<T, M> {
    pub fn new(tree: Tree<T, M>) -> Self {
        let mut iter = IntoIter { stack: Vec::new() };
        iter.push_left(tree);
        iter
    }

    fn push_left(&mut self, mut tree: Tree<T, M>) {
        while let Some(mut node) = tree {
            tree = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T, M> Iterator for IntoIter<T, M> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left(node.right.take());
        Some(node.key)
    }
}

impl<T, M> FusedIterator for IntoIter<T, M> {}

impl<T, M> Drop for IntoIter<T, M> {
    fn drop(&mut self) {
        while let Some(mut node) = self.stack.pop() {
            self.push_left(node.right.take());
        }
    }
}

#[cfg(test)]
pub fn is_bst<T, M>(tree: &Tree<T, M>) -> bool
where
    T: Ord,
{
    fn check<T, M>(tree: &Tree<T, M>, low: Option<&T>, high: Option<&T>) -> bool
    where
        T: Ord,
    {
        match tree {
            None => true,
            Some(node) => {
                low.map_or(true, |low| *low < node.key)
                    && high.map_or(true, |high| node.key < *high)
                    && check(&node.left, low, Some(&node.key))
                    && check(&node.right, Some(&node.key), high)
            },
        }
    }
    check(tree, None, None)
}
