use crate::avl_tree::node::Height;
use crate::avl_tree::tree::{self, AvlTree};
use crate::node::{self, IntoIter, Iter};
use crate::ordered_set::OrderedSet;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every node caches the height
/// of its subtree, and each insertion or removal recomputes the heights along the path it took
/// and rotates any node whose children violate the invariant. The depth of a tree holding `n`
/// keys is therefore at most about `1.44 * log2(n)`.
///
/// # Examples
/// ```
/// use search_trees::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.search(&3), Some(&3));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct AvlSet<T> {
    root: AvlTree<T>,
    len: usize,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>`.
    ///
    /// # Examples
    /// ```
    /// use search_trees::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        AvlSet { root: None, len: 0 }
    }

    /// Inserts a key into the set. Returns `false` if the key already exists, in which case the
    /// set is left untouched.
    ///
    /// # Examples
    /// ```
    /// use search_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let inserted = tree::insert(&mut self.root, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Returns a reference to the stored key equal to `key`. Returns `None` if the key does not
    /// exist in the set.
    ///
    /// # Examples
    /// ```
    /// use search_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
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
    /// use search_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
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
    /// use search_trees::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = (1..=5).collect();
    /// assert_eq!(set.depth(), 3);
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
        debug!("clearing avl set with {} keys", self.len);
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
    /// use search_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(3);
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<T> {
        AvlSetIter {
            inner: Iter::new(&self.root, self.len),
        }
    }
}

impl<T> OrderedSet<T> for AvlSet<T>
where
    T: Ord,
{
    fn insert(&mut self, key: T) -> bool {
        AvlSet::insert(self, key)
    }

    fn search(&self, key: &T) -> Option<&T> {
        AvlSet::search(self, key)
    }

    fn remove(&mut self, key: &T) -> Option<T> {
        AvlSet::remove(self, key)
    }

    fn depth(&self) -> usize {
        AvlSet::depth(self)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        AvlSet::clear(self)
    }

    fn min(&self) -> Option<&T> {
        AvlSet::min(self)
    }

    fn max(&self) -> Option<&T> {
        AvlSet::max(self)
    }

    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a T> + 'a>
    where
        T: 'a,
    {
        Box::new(self.iter())
    }
}

impl<T> IntoIterator for AvlSet<T>
where
    T: Ord,
{
    type Item = T;
    type IntoIter = AvlSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            inner: IntoIter::new(self.root),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = AvlSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct AvlSetIntoIter<T> {
    inner: IntoIter<T, Height>,
}

impl<T> Iterator for AvlSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// An iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct AvlSetIter<'a, T>
where
    T: 'a,
{
    inner: Iter<'a, T, Height>,
}

impl<'a, T> Iterator for AvlSetIter<'a, T>
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

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = AvlSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for AvlSet<T>
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

impl<T> fmt::Debug for AvlSet<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::AvlSet;
    use crate::avl_tree::tree::is_balanced;
    use crate::node;
    use rand::{Rng, SeedableRng, XorShiftRng};

    #[test]
    fn test_len_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.len(), 0);
        assert_eq!(set.depth(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut set = AvlSet::new();
        assert!(set.insert(1));
        assert!(set.contains(&1));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = AvlSet::new();
        for key in &[5, 3, 8, 3, 1] {
            set.insert(*key);
        }
        assert_eq!(set.len(), 4);
        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5, &8]);
        assert!(set.root.as_ref().map_or(false, |root| root.balance().abs() <= 1));
    }

    #[test]
    fn test_remove() {
        let mut set = AvlSet::new();
        set.insert(1);
        assert_eq!(set.remove(&1), Some(1));
        assert!(!set.contains(&1));
    }

    #[test]
    fn test_min_max() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(3);
        set.insert(5);

        assert_eq!(set.min(), Some(&1));
        assert_eq!(set.max(), Some(&5));
    }

    #[test]
    fn test_sorted_insert_stays_balanced() {
        let set: AvlSet<u32> = (1..=5).collect();
        assert_eq!(set.depth(), 3);

        let set: AvlSet<u32> = (0..1023).collect();
        assert_eq!(set.depth(), 10);
        assert!(is_balanced(&set.root));
    }

    #[test]
    fn test_random_operations_keep_invariants() {
        let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
        let mut set = AvlSet::new();
        let mut expected = Vec::new();

        for _ in 0..2_000 {
            let key = rng.gen_range(0, 500);
            if rng.gen::<bool>() {
                if set.insert(key) {
                    expected.push(key);
                }
            } else if set.remove(&key).is_some() {
                expected.retain(|other| *other != key);
            }
            assert!(is_balanced(&set.root));
        }

        expected.sort();
        assert!(node::is_bst(&set.root));
        assert_eq!(set.iter().cloned().collect::<Vec<u32>>(), expected);
        assert_eq!(set.len(), expected.len());
    }

    #[test]
    fn test_into_iter() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_iter() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
        assert_eq!(set.iter().size_hint(), (3, Some(3)));
    }
}
