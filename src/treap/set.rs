use crate::node::{self, IntoIter, Iter};
use crate::ordered_set::OrderedSet;
use crate::treap::node::Priority;
use crate::treap::tree::{self, TreapTree};
use rand::{self, SeedableRng, XorShiftRng};
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property. Each
/// node has a key and a priority. The key of any node is greater than all keys in its left subtree
/// and less than all keys occurring in its right subtree. The priority of a node is greater than or
/// equal to the priority of all nodes in its subtrees. By randomly generating priorities, the
/// expected depth of the tree is proportional to the logarithm of the number of keys, whatever the
/// insertion order.
///
/// # Examples
/// ```
/// use search_trees::treap::TreapSet;
///
/// let mut set = TreapSet::with_seed(7);
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.search(&3), Some(&3));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct TreapSet<T> {
    root: TreapTree<T>,
    rng: XorShiftRng,
    len: usize,
}

// Expands a seed into xorshift state. The third word differs from the first by a nonzero
// constant, so the state is never all zeroes.
fn expand_seed(seed: u64) -> [u32; 4] {
    let low = seed as u32;
    let high = (seed >> 32) as u32;
    [low, high, low ^ 0x9E37_79B9, high ^ 0x7F4A_7C15]
}

impl<T> TreapSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `TreapSet<T>` whose priorities are drawn from a randomly seeded
    /// generator.
    ///
    /// # Examples
    /// ```
    /// use search_trees::treap::TreapSet;
    ///
    /// let set: TreapSet<u32> = TreapSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        TreapSet {
            root: None,
            rng: rand::weak_rng(),
            len: 0,
        }
    }

    /// Constructs a new, empty `TreapSet<T>` whose priorities are drawn from a generator seeded
    /// with `seed`. Two sets built with the same seed and fed the same operations have the same
    /// shape.
    ///
    /// # Examples
    /// ```
    /// use search_trees::treap::TreapSet;
    ///
    /// let mut first = TreapSet::with_seed(42);
    /// let mut second = TreapSet::with_seed(42);
    /// for key in 0..100 {
    ///     first.insert(key);
    ///     second.insert(key);
    /// }
    /// assert_eq!(first.depth(), second.depth());
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        debug!("treap set seeded with {}", seed);
        TreapSet {
            root: None,
            rng: XorShiftRng::from_seed(expand_seed(seed)),
            len: 0,
        }
    }

    /// Inserts a key into the set. Returns `false` if the key already exists, in which case the
    /// set is left untouched.
    ///
    /// # Examples
    /// ```
    /// use search_trees::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let TreapSet { root, rng, len } = self;
        let inserted = tree::insert(root, key, rng);
        if inserted {
            *len += 1;
        }
        inserted
    }

    /// Returns a reference to the stored key equal to `key`. Returns `None` if the key does not
    /// exist in the set.
    ///
    /// # Examples
    /// ```
    /// use search_trees::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert_eq!(set.search(&0), None);
    /// assert_eq!(set.search(&1), Some(&1));
    /// ```
    pub fn search(&self, key: &T) -> Option<&T> {
        node::get(&self.root, key)
    }

    /// Checks if a key exists in the set.
    pub fn contains(&self, key: &T) -> bool {
        self.search(key).is_some()
    }

    /// Removes a key from the set. If the key exists in the set, it will return the key.
    /// Otherwise it will return `None`.
    ///
    /// # Examples
    /// ```
    /// use search_trees::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let ret = tree::remove(&mut self.root, key);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Returns the number of nodes on the longest root-to-leaf path of the tree.
    ///
    /// # Examples
    /// ```
    /// use search_trees::treap::TreapSet;
    ///
    /// let set: TreapSet<u32> = (0..1024).collect();
    /// assert!(set.depth() >= 11);
    /// assert!(set.depth() <= 1024);
    /// ```
    pub fn depth(&self) -> usize {
        node::depth(&self.root)
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing all values.
    pub fn clear(&mut self) {
        debug!("clearing treap set with {} keys", self.len);
        node::clear(&mut self.root);
        self.len = 0;
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        node::min(&self.root)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        node::max(&self.root)
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    /// ```
    /// use search_trees::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(3);
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> TreapSetIter<T> {
        TreapSetIter {
            inner: Iter::new(&self.root, self.len),
        }
    }
}

impl<T> OrderedSet<T> for TreapSet<T>
where
    T: Ord,
{
    fn insert(&mut self, key: T) -> bool {
        TreapSet::insert(self, key)
    }

    fn search(&self, key: &T) -> Option<&T> {
        TreapSet::search(self, key)
    }

    fn remove(&mut self, key: &T) -> Option<T> {
        TreapSet::remove(self, key)
    }

    fn depth(&self) -> usize {
        TreapSet::depth(self)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        TreapSet::clear(self)
    }

    fn min(&self) -> Option<&T> {
        TreapSet::min(self)
    }

    fn max(&self) -> Option<&T> {
        TreapSet::max(self)
    }

    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a T> + 'a>
    where
        T: 'a,
    {
        Box::new(self.iter())
    }
}

impl<T> IntoIterator for TreapSet<T>
where
    T: Ord,
{
    type Item = T;
    type IntoIter = TreapSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            inner: IntoIter::new(self.root),
        }
    }
}

impl<'a, T> IntoIterator for &'a TreapSet<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = TreapSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `TreapSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct TreapSetIntoIter<T> {
    inner: IntoIter<T, Priority>,
}

impl<T> Iterator for TreapSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// An iterator for `TreapSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct TreapSetIter<'a, T>
where
    T: 'a,
{
    inner: Iter<'a, T, Priority>,
}

impl<'a, T> Iterator for TreapSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> FromIterator<T> for TreapSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = TreapSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for TreapSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> fmt::Debug for TreapSet<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for TreapSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
