use crate::stats::TreeStats;

/// The operations shared by every ordered set in this crate.
///
/// The trait is object safe so that a harness can drive the different balancing strategies
/// through a `Box<dyn OrderedSet<T>>`.
///
/// # Examples
/// ```
/// use search_trees::{OrderedSet, Strategy};
///
/// for strategy in &Strategy::ALL {
///     let mut set = strategy.build_seeded(1);
///     assert!(set.insert(1));
///     assert!(!set.insert(1));
///     assert_eq!(set.search(&1), Some(&1));
///     assert_eq!(set.remove(&1), Some(1));
///     assert_eq!(set.search(&1), None);
/// }
/// ```
pub trait OrderedSet<T>
where
    T: Ord,
{
    /// Inserts a key into the set. Returns `false` and leaves the set untouched if the key is
    /// already present.
    fn insert(&mut self, key: T) -> bool;

    /// Returns a reference to the stored key equal to `key`, or `None` if it is absent.
    fn search(&self, key: &T) -> Option<&T>;

    /// Checks if a key exists in the set.
    fn contains(&self, key: &T) -> bool {
        self.search(key).is_some()
    }

    /// Removes a key from the set, returning it. Absent keys are a no-op returning `None`.
    fn remove(&mut self, key: &T) -> Option<T>;

    /// Returns the number of nodes on the longest root-to-leaf path, or `0` for an empty set.
    fn depth(&self) -> usize;

    /// Returns the number of keys in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every key from the set.
    fn clear(&mut self);

    /// Returns the minimum key of the set.
    fn min(&self) -> Option<&T>;

    /// Returns the maximum key of the set.
    fn max(&self) -> Option<&T>;

    /// Returns an iterator yielding the keys in increasing order.
    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a T> + 'a>
    where
        T: 'a;

    /// Returns the structural metrics of the set.
    fn stats(&self) -> TreeStats {
        TreeStats {
            len: self.len(),
            depth: self.depth(),
        }
    }
}
