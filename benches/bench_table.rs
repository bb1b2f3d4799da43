use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use hashdex::prelude::ContactStore;
use rand::seq::SliceRandom;

const CAPACITY: usize = 10;

// Helper to create a store prepopulated with `n` contacts. With a
// fixed bucket count the chains grow to n / capacity, so these
// benches mostly measure chain walks.
fn make_store_with_n(n: usize) -> ContactStore {
    let mut store = ContactStore::new(CAPACITY).expect("store not created");
    for i in 0..n {
        store.insert(&format!("User{i}"), "909-876-1234");
    }
    store
}

// Insert-benchmark: measure appending one contact to an already
// loaded table (worst case: full chain walk before the tail append).
fn bench_insert(c: &mut Criterion) {
    c.bench_function("insert one into 5k-contact table", |b| {
        b.iter_batched(
            || make_store_with_n(5_000), // setup (expensive)
            |mut store| {
                store.insert("Zoe", "111-555-0002");
                black_box(store.len());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_search(c: &mut Criterion) {
    let store = make_store_with_n(5_000);

    // Shuffled hit keys so the walk depth varies across iterations
    let mut keys: Vec<String> = (0..5_000).map(|i| format!("User{i}")).collect();
    keys.shuffle(&mut rand::rng());
    let mut next = keys.iter().cycle();

    c.bench_function("search hit in 5k-contact table", |b| {
        b.iter(|| {
            let key = next.next().expect("cycle never ends");
            black_box(store.search(key));
        });
    });

    c.bench_function("search miss in 5k-contact table", |b| {
        b.iter(|| {
            black_box(store.search("Chris"));
        });
    });
}

fn bench_update(c: &mut Criterion) {
    c.bench_function("update existing key in 5k-contact table", |b| {
        b.iter_batched(
            || make_store_with_n(5_000),
            |mut store| {
                store.insert("User2500", "999-444-9999");
                black_box(store.len());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_insert, bench_search, bench_update);
criterion_main!(benches);
