//! Unbalanced binary search tree. Its shape depends entirely on insertion order, so sorted input
//! degrades it to a linked list.

mod set;
mod tree;

pub use self::set::{BstSet, BstSetIntoIter, BstSetIter};
