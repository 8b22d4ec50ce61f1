//! Performance benchmarks for pith
//!
//! Insert and query costs are measured at several index sizes so their
//! growth (logarithmic for the size tree, prefix-length for the trie) can be
//! compared against a linear scan.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pith::test_utils::TestDir;
use pith::{FileIndex, FileRecord, FileRef, PrefixIndex, ScanConfig, Scanner, SizeIndex};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Deterministic pseudo-random records with varied names and sizes.
fn make_records(count: usize) -> Vec<FileRef> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..count)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let name = format!("f{:x}{}.dat", state % 4096, i);
            FileRecord::new(name, state % 1_000_000).unwrap().into_ref()
        })
        .collect()
}

fn bench_size_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("size_index_insert");
    for n in SIZES {
        let records = make_records(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &records, |b, records| {
            b.iter(|| {
                let mut index = SizeIndex::new();
                for f in records {
                    index.insert(f.clone());
                }
                black_box(index.height())
            })
        });
    }
    group.finish();
}

fn bench_size_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("size_index_query");
    for n in SIZES {
        let records = make_records(n);
        let mut index = SizeIndex::new();
        for f in &records {
            index.insert(f.clone());
        }

        group.bench_with_input(BenchmarkId::new("narrow", n), &index, |b, index| {
            b.iter(|| index.query(black_box(500_000), black_box(500_100)))
        });

        group.bench_with_input(BenchmarkId::new("linear_scan", n), &records, |b, records| {
            b.iter(|| {
                records
                    .iter()
                    .filter(|f| (500_000..=500_100).contains(&f.size()))
                    .count()
            })
        });
    }
    group.finish();
}

fn bench_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_index");
    for n in SIZES {
        let records = make_records(n);

        group.bench_with_input(BenchmarkId::new("add", n), &records, |b, records| {
            b.iter(|| {
                let mut index = PrefixIndex::new();
                for f in records {
                    index.add_file(f.clone());
                }
                black_box(index.node_count())
            })
        });

        let mut index = PrefixIndex::new();
        for f in &records {
            index.add_file(f.clone());
        }
        group.bench_with_input(BenchmarkId::new("lookup", n), &index, |b, index| {
            b.iter(|| index.files_with_prefix(black_box("F1A")).len())
        });
    }
    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let dir = TestDir::new();
    for i in 0..500 {
        dir.add_file(&format!("dir{}/file{}.txt", i % 10, i), &"x".repeat(i));
    }

    let mut group = c.benchmark_group("scan");
    group.bench_function("scan_and_index_500_files", |b| {
        b.iter(|| {
            let report = Scanner::new(ScanConfig::default())
                .scan(black_box(dir.path()))
                .unwrap();
            let index: FileIndex = report.build_index();
            black_box(index.stats())
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_size_insert,
    bench_size_query,
    bench_prefix,
    bench_scan,
);
criterion_main!(benches);
