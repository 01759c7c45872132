//! Criterion benchmarks for list filtering.
//!
//! Run with:
//!   cargo bench
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use atlas::dataset::{CountryRecord, Dataset};
use atlas::filter::{filter_indices, FilterQuery, Region};

/// The bundled records repeated `copies` times under distinct names and codes.
fn make_dataset(copies: usize) -> Dataset {
    let base = Dataset::embedded().expect("bundled dataset");
    let mut records: Vec<CountryRecord> = Vec::with_capacity(base.len() * copies);
    for i in 0..copies {
        for r in base.records() {
            let mut r = r.clone();
            r.name.common = format!("{} {i}", r.name.common);
            r.cca3 = format!("{}{i}", r.cca3);
            records.push(r);
        }
    }
    Dataset::new(records)
}

/// Benchmark the full recompute at several dataset sizes.
fn bench_filter_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_size");

    for copies in [1usize, 10, 100].iter() {
        let ds = make_dataset(*copies);
        group.throughput(Throughput::Elements(ds.len() as u64));

        group.bench_with_input(BenchmarkId::new("search", ds.len()), &ds, |b, ds| {
            let q = FilterQuery::new("republic", None);
            b.iter(|| black_box(filter_indices(ds, black_box(&q))));
        });

        group.bench_with_input(BenchmarkId::new("search_region", ds.len()), &ds, |b, ds| {
            let q = FilterQuery::new("ia", Some(Region::Europe));
            b.iter(|| black_box(filter_indices(ds, black_box(&q))));
        });
    }

    group.finish();
}

/// Benchmark a keystroke-by-keystroke search, as typing produces it.
fn bench_typing(c: &mut Criterion) {
    let ds = make_dataset(10);
    let word = "federal republic";

    c.bench_function("typing_sequence", |b| {
        b.iter(|| {
            for end in 1..=word.len() {
                let q = FilterQuery::new(&word[..end], None);
                black_box(filter_indices(&ds, &q));
            }
        });
    });
}

criterion_group!(benches, bench_filter_sizes, bench_typing);
criterion_main!(benches);
