use quickcheck::{quickcheck, Arbitrary, Gen};
use search_trees::{OrderedSet, Strategy};
use std::collections::BTreeSet;

/// An operation applied to both an ordered set and a `BTreeSet` model.
#[derive(Copy, Clone, Debug)]
enum Op {
    Insert(i16),
    Remove(i16),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(i16::arbitrary(g))
        } else {
            Op::Remove(i16::arbitrary(g))
        }
    }
}

fn matches_model(strategy: Strategy, ops: &[Op]) -> bool {
    let mut set = strategy.build_seeded(ops.len() as u64);
    let mut model = BTreeSet::new();

    for op in ops {
        let agrees = match *op {
            Op::Insert(key) => set.insert(key) == model.insert(key),
            Op::Remove(key) => set.remove(&key).is_some() == model.remove(&key),
        };
        if !agrees {
            return false;
        }
    }

    set.len() == model.len()
        && set.keys().eq(model.iter())
        && model.iter().all(|key| set.search(key) == Some(key))
}

quickcheck! {
    fn bst_matches_model(ops: Vec<Op>) -> bool {
        matches_model(Strategy::Bst, &ops)
    }

    fn avl_matches_model(ops: Vec<Op>) -> bool {
        matches_model(Strategy::Avl, &ops)
    }

    fn treap_matches_model(ops: Vec<Op>) -> bool {
        matches_model(Strategy::Treap, &ops)
    }

    fn insert_is_idempotent(keys: Vec<i16>, extra: i16) -> bool {
        Strategy::ALL.iter().all(|strategy| {
            let mut set = strategy.build_seeded(7);
            for key in &keys {
                set.insert(*key);
            }
            set.insert(extra);
            let before: Vec<i16> = set.keys().cloned().collect();
            !set.insert(extra) && set.keys().cloned().collect::<Vec<i16>>() == before
        })
    }

    fn avl_depth_is_logarithmic(keys: Vec<i16>) -> bool {
        let mut set = Strategy::Avl.build();
        for key in keys {
            set.insert(key);
        }
        let len = set.len() as f64;
        set.depth() as f64 <= 1.45 * (len + 2.0).log2()
    }
}
