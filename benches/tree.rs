extern crate garance;

use criterion::{Criterion, criterion_group, criterion_main};

fn insert(c: &mut Criterion) {
    c.bench_function("garance_insert", |b| {
        b.iter(|| {
            let mut tree = garance::Tree::<usize>::new();
            for k in 0..100 {
                tree.insert(k);
            }
            tree
        })
    });
    c.bench_function("rbtree_insert", |b| {
        b.iter(|| {
            let mut tree = rbtree::RBTree::<usize, ()>::new();
            for k in 0..100 {
                tree.insert(k, ());
            }
            tree
        })
    });
}

fn erase(c: &mut Criterion) {
    c.bench_function("garance_insert_erase_min", |b| {
        b.iter(|| {
            let mut tree = garance::Tree::<usize>::new();
            for k in 0..100 {
                tree.insert(k);
            }
            while let Some(min) = tree.min() {
                let _ = tree.erase(min);
            }
            tree
        })
    });
    c.bench_function("rbtree_insert_remove", |b| {
        b.iter(|| {
            let mut tree = rbtree::RBTree::<usize, ()>::new();
            for k in 0..100 {
                tree.insert(k, ());
            }
            for k in 0..100 {
                tree.remove(&k);
            }
            tree
        })
    });
}

criterion_group!(benches, insert, erase);
criterion_main!(benches);
