//! Benchmarks for RowStore insert and filter operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ordstore_core::schema::Table;
use ordstore_core::Value;
use ordstore_storage::{Predicate, RowStore};

fn create_test_schema() -> Table {
    Table::from_names("test", &["id", "price", "symbol", "sector"]).unwrap()
}

fn populate_store(store: &mut RowStore, count: u64) {
    let sectors = ["Tech", "Finance", "Health", "Energy", "Consumer"];
    for i in 1..=count {
        store
            .insert(vec![
                Value::Int64(i as i64),
                Value::Float64(100.0 + (i as f64) * 0.1),
                Value::String(format!("SYM{}", i)),
                Value::String(sectors[(i as usize) % sectors.len()].into()),
            ])
            .unwrap();
    }
}

fn insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_store_insert");

    for size in [1000u64, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut store = RowStore::new(create_test_schema());
                populate_store(&mut store, size);
                black_box(store)
            });
        });
    }

    group.finish();
}

fn filter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_store_filter");

    for size in [1000u64, 10000, 100000].iter() {
        let mut store = RowStore::new(create_test_schema());
        populate_store(&mut store, *size);
        let predicate = Predicate::new().and("sector", "Tech");

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(store.filter(&predicate).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, insert_benchmark, filter_benchmark);
criterion_main!(benches);
