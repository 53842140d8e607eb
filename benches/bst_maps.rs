use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ordered_trees::bst::BstMap;
use ordered_trees::red_black_tree::RedBlackMap;
use rand::Rng;
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 1_000;

fn bench_btreemap_insert(c: &mut Criterion) {
    c.bench_function("bench btreemap insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut map = BTreeMap::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.next_u32();
                let val = rng.next_u32();

                map.insert(key, val);
            }
        })
    });
}

fn bench_btreemap_get(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = BTreeMap::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        let val = rng.next_u32();

        map.insert(key, val);
        values.push(key);
    }

    c.bench_function("bench btreemap get", move |b| {
        b.iter(|| {
            for key in &values {
                black_box(map.get(key));
            }
        })
    });
}

// Sorted insertions are the worst case for the unbalanced tree.
fn bench_sorted_insert(c: &mut Criterion) {
    c.bench_function("bench bst sorted insert", |b| {
        b.iter(|| {
            let mut map = BstMap::new();
            for key in 0..NUM_OF_OPERATIONS {
                black_box(map.insert(key, key).is_ok());
            }
        })
    });

    c.bench_function("bench red_black_tree sorted insert", |b| {
        b.iter(|| {
            let mut map = RedBlackMap::new();
            for key in 0..NUM_OF_OPERATIONS {
                black_box(map.insert(key, key));
            }
        })
    });
}

macro_rules! bst_map_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use ordered_trees::$module_name::$type_name;
                use rand::Rng;
                use super::NUM_OF_OPERATIONS;
                use criterion::{Criterion, black_box};

                pub fn bench_insert(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} insert", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                        let mut map = $type_name::new();
                        for _ in 0..NUM_OF_OPERATIONS {
                            let key = rng.next_u32();
                            let val = rng.next_u32();

                            black_box(map.insert(key, val));
                        }
                    }));
                }

                pub fn bench_get(c: &mut Criterion) {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut map = $type_name::new();
                    let mut values = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.next_u32();
                        let val = rng.next_u32();

                        let _ = map.insert(key, val);
                        values.push(key);
                    }

                    c.bench_function(&format!("bench {} get", stringify!($module_name)), move |b| b.iter(|| {
                        for key in &values {
                            black_box(map.get(key));
                        }
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            bench_btreemap_get,
            bench_btreemap_insert,
            bench_sorted_insert,
            $(
                $module_name::bench_get,
                $module_name::bench_insert,
            )*
        );
    }
}

bst_map_benches!(
    bst: BstMap,
    red_black_tree: RedBlackMap,
);

criterion_main!(benches);
