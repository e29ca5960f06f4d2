use crate::bst::tree::{self, BstTree};
use crate::node::{self, IntoIter, Iter};
use crate::ordered_set::OrderedSet;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using an unbalanced binary search tree.
///
/// Keys are placed by plain comparison on the way down and the tree is never restructured, so the
/// depth of the tree is at most the number of keys and reaches it when keys arrive in sorted order.
/// Removal of a key with two children moves the in-order successor's key into the removed key's
/// node.
///
/// # Examples
/// ```
/// use search_trees::bst::BstSet;
///
/// let mut set = BstSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.search(&3), Some(&3));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct BstSet<T> {
    root: BstTree<T>,
    len: usize,
}

impl<T> BstSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BstSet<T>`.
    ///
    /// # Examples
    /// ```
    /// use search_trees::bst::BstSet;
    ///
    /// let set: BstSet<u32> = BstSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        BstSet { root: None, len: 0 }
    }

    /// Inserts a key into the set. Returns `false` if the key already exists, in which case the
    /// set is left untouched.
    ///
    /// # Examples
    /// ```
    /// use search_trees::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
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
    /// use search_trees::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
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
    /// use search_trees::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
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
    /// use search_trees::bst::BstSet;
    ///
    /// let set: BstSet<u32> = (1..=5).collect();
    /// assert_eq!(set.depth(), 5);
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
        debug!("clearing bst set with {} keys", self.len);
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
    /// use search_trees::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(3);
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> BstSetIter<T> {
        BstSetIter {
            inner: Iter::new(&self.root, self.len),
        }
    }
}

// A sorted insertion order produces a chain as long as the set, so nodes are released without
// recursion.
impl<T> Drop for BstSet<T> {
    fn drop(&mut self) {
        node::clear(&mut self.root);
    }
}

impl<T> OrderedSet<T> for BstSet<T>
where
    T: Ord,
{
    fn insert(&mut self, key: T) -> bool {
        BstSet::insert(self, key)
    }

    fn search(&self, key: &T) -> Option<&T> {
        BstSet::search(self, key)
    }

    fn remove(&mut self, key: &T) -> Option<T> {
        BstSet::remove(self, key)
    }

    fn depth(&self) -> usize {
        BstSet::depth(self)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        BstSet::clear(self)
    }

    fn min(&self) -> Option<&T> {
        BstSet::min(self)
    }

    fn max(&self) -> Option<&T> {
        BstSet::max(self)
    }

    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a T> + 'a>
    where
        T: 'a,
    {
        Box::new(self.iter())
    }
}

impl<T> IntoIterator for BstSet<T>
where
    T: Ord,
{
    type Item = T;
    type IntoIter = BstSetIntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        Self::IntoIter {
            inner: IntoIter::new(self.root.take()),
        }
    }
}

impl<'a, T> IntoIterator for &'a BstSet<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = BstSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `BstSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct BstSetIntoIter<T> {
    inner: IntoIter<T, ()>,
}

impl<T> Iterator for BstSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// An iterator for `BstSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct BstSetIter<'a, T>
where
    T: 'a,
{
    inner: Iter<'a, T, ()>,
}

impl<'a, T> Iterator for BstSetIter<'a, T>
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

impl<T> FromIterator<T> for BstSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = BstSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for BstSet<T>
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

impl<T> fmt::Debug for BstSet<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for BstSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::BstSet;
    use crate::node;

    #[test]
    fn test_len_empty() {
        let set: BstSet<u32> = BstSet::new();
        assert_eq!(set.len(), 0);
        assert_eq!(set.depth(), 0);
    }

    #[test]
    fn test_min_max_empty() {
        let set: BstSet<u32> = BstSet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut set = BstSet::new();
        assert!(set.insert(1));
        assert!(set.contains(&1));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = BstSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut set = BstSet::new();
        set.insert(1);
        assert_eq!(set.remove(&1), Some(1));
        assert!(!set.contains(&1));
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_two_children() {
        let mut set: BstSet<u32> = vec![50, 30, 70, 20, 40, 60, 80].into_iter().collect();
        assert_eq!(set.remove(&30), Some(30));
        assert!(node::is_bst(&set.root));
        assert_eq!(
            set.iter().collect::<Vec<&u32>>(),
            vec![&20, &40, &50, &60, &70, &80],
        );
        assert_eq!(set.remove(&50), Some(50));
        assert_eq!(set.root.as_ref().map(|root| root.key), Some(60));
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_sorted_insert_degenerates() {
        let set: BstSet<u32> = (1..=5).collect();
        assert_eq!(set.depth(), 5);
        assert!(set.root.as_ref().map_or(false, |root| root.left.is_none()));
    }

    #[test]
    fn test_deep_chain_drop() {
        let set: BstSet<u32> = (0..2_000).collect();
        assert_eq!(set.depth(), 2_000);
    }

    #[test]
    fn test_clear() {
        let mut set: BstSet<u32> = (0..10).collect();
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.iter().next(), None);
    }

    #[test]
    fn test_into_iter() {
        let mut set = BstSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_debug() {
        let set: BstSet<u32> = vec![2, 1].into_iter().collect();
        assert_eq!(format!("{:?}", set), "{1, 2}");
    }
}
