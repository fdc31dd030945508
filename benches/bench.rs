//! Criterion benchmarks for combindex.
//!
//! Covers the two phases of a run:
//! - ingestion, whose cost grows with `2^n` in the words per entry
//! - exact lookups and negated queries against a built index

use std::hint::black_box;

use combindex::index::{CombinationIndex, IndexConfig};
use combindex::query::Query;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const WORDS: &[&str] = &[
    "search", "engine", "full", "text", "index", "query", "python", "linux", "server",
    "windows", "memory", "storage", "retrieval", "ranking", "filtering", "data",
];

/// Generate entries of `words_per_entry` words each.
fn generate_entries(count: usize, words_per_entry: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            (0..words_per_entry)
                .map(|j| WORDS[(i * 7 + j * 3) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_ingestion(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingestion");

    for words_per_entry in [4, 8, 12] {
        let entries = generate_entries(200, words_per_entry);
        group.throughput(Throughput::Elements(entries.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("sequential", words_per_entry),
            &entries,
            |b, entries| {
                b.iter(|| {
                    let mut index = CombinationIndex::new();
                    index.add_batch(entries.iter().cloned());
                    black_box(index.key_count())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("parallel", words_per_entry),
            &entries,
            |b, entries| {
                b.iter(|| {
                    let mut index = CombinationIndex::with_config(IndexConfig {
                        parallel_ingest: true,
                        ingest_batch_size: 64,
                    });
                    index.add_batch(entries.iter().cloned());
                    black_box(index.key_count())
                })
            },
        );
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut index = CombinationIndex::new();
    index.add_batch(generate_entries(1000, 8));

    let mut group = c.benchmark_group("queries");

    group.bench_function("find_single_word", |b| {
        b.iter(|| black_box(index.find(black_box(["server"]))))
    });

    group.bench_function("find_three_words", |b| {
        b.iter(|| black_box(index.find(black_box(["python", "linux", "server"]))))
    });

    let query = Query::parse(["server", "-windows", "-memory"]).unwrap();
    group.bench_function("search_with_negation", |b| {
        b.iter(|| black_box(index.search(black_box(&query))))
    });

    group.finish();
}

criterion_group!(benches, bench_ingestion, bench_queries);
criterion_main!(benches);
