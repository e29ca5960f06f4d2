use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng, XorShiftRng};
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 1_000;

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_btreeset_search(c: &mut Criterion) {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = BTreeSet::new();
    let mut keys = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        set.insert(key);
        keys.push(key);
    }

    c.bench_function("bench btreeset search", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.get(key));
            }
        })
    });
}

macro_rules! bst_set_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use criterion::{black_box, Criterion};
                use rand::{Rng, SeedableRng, XorShiftRng};
                use search_trees::$module_name::$type_name;
                use super::NUM_OF_OPERATIONS;

                pub fn bench_insert(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} insert", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
                        let mut set = $type_name::default();
                        for _ in 0..NUM_OF_OPERATIONS {
                            set.insert(rng.next_u32());
                        }
                    }));
                }

                pub fn bench_search(c: &mut Criterion) {
                    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $type_name::default();
                    let mut keys = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.next_u32();
                        set.insert(key);
                        keys.push(key);
                    }

                    c.bench_function(&format!("bench {} search", stringify!($module_name)), move |b| b.iter(|| {
                        for key in &keys {
                            black_box(set.search(key));
                        }
                    }));
                }

                pub fn bench_remove(c: &mut Criterion) {
                    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
                    let keys: Vec<u32> = (0..NUM_OF_OPERATIONS).map(|_| rng.next_u32()).collect();

                    c.bench_function(&format!("bench {} remove", stringify!($module_name)), move |b| b.iter(|| {
                        let mut set: $type_name<u32> = keys.iter().cloned().collect();
                        for key in &keys {
                            black_box(set.remove(key));
                        }
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            bench_btreeset_insert,
            bench_btreeset_search,
            $(
                $module_name::bench_insert,
                $module_name::bench_search,
                $module_name::bench_remove,
            )*
        );
    }
}

bst_set_benches!(
    bst: BstSet,
    avl_tree: AvlSet,
    treap: TreapSet,
);

criterion_main!(benches);
