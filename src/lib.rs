//! Ordered sets of comparable keys backed by three interchangeable binary search tree strategies.
//!
//! - [`bst::BstSet`] never restructures itself, so its depth follows the insertion order and
//!   sorted input degrades it to a chain.
//! - [`avl_tree::AvlSet`] records subtree heights and rotates after every insertion and removal
//!   so that sibling subtrees differ in height by at most one.
//! - [`treap::TreapSet`] assigns every node a random priority and rotates to keep priorities in
//!   heap order, which gives the shape of a tree built from a random insertion order.
//!
//! All three implement [`OrderedSet`], and [`Strategy`] builds any of them behind a trait object
//! so that callers can compare them on the same workload.
//!
//! # Examples
//! ```
//! use search_trees::{OrderedSet, Strategy};
//!
//! for strategy in &Strategy::ALL {
//!     let mut set = strategy.build_seeded(1);
//!     for key in 1..=5 {
//!         set.insert(key);
//!     }
//!     println!("{}: depth {}", strategy, set.depth());
//! }
//! ```

#[macro_use]
extern crate log;
extern crate rand;
extern crate serde;
#[macro_use]
extern crate serde_derive;

#[cfg(test)]
extern crate serde_test;

mod node;
mod ordered_set;
mod stats;
mod strategy;
pub mod avl_tree;
pub mod bst;
pub mod treap;

pub use crate::ordered_set::OrderedSet;
pub use crate::stats::TreeStats;
pub use crate::strategy::{ParseStrategyError, Strategy};
