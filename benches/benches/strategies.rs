//! Benchmarks for the three JSON-to-record mapping strategies.
//!
//! Run with: `cargo bench --package mapbench-benches --bench strategies`

// Allow missing docs for criterion_group! macro generated functions
#![allow(missing_docs)]

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use mapbench_core::{codec, mapping};

/// The same document the driver decodes.
const FIXTURE_JSON: &str = r#"{"type":"clist","message":"msg","date":1395388393205,"s_array":["v1","v2","v3"],"i_array":[1,2,3]}"#;

fn bench_tree_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_mapping");
    group.throughput(Throughput::Bytes(FIXTURE_JSON.len() as u64));

    group.bench_function("parse_only", |b| {
        b.iter(|| mapping::parse_tree(black_box(FIXTURE_JSON)).unwrap());
    });

    group.bench_function("parse_and_map", |b| {
        b.iter(|| {
            let tree = mapping::parse_tree(black_box(FIXTURE_JSON)).unwrap();
            mapping::record_from_tree(tree).unwrap()
        });
    });

    group.finish();
}

fn bench_manual_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("manual_extraction");
    group.throughput(Throughput::Bytes(FIXTURE_JSON.len() as u64));

    group.bench_function("parse_and_extract", |b| {
        b.iter(|| {
            let tree = mapping::parse_tree(black_box(FIXTURE_JSON)).unwrap();
            mapping::extract_record(&tree).unwrap()
        });
    });

    // Extraction alone, over a pre-parsed tree
    let tree = mapping::parse_tree(FIXTURE_JSON).unwrap();
    group.bench_function("extract_only", |b| {
        b.iter(|| mapping::extract_record(black_box(&tree)).unwrap());
    });

    group.finish();
}

fn bench_binary_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_codec");

    let record = mapping::record_from_str(FIXTURE_JSON).unwrap();
    let bytes = codec::encode(&record).unwrap();

    group.throughput(Throughput::Bytes(bytes.len() as u64));

    group.bench_function("encode", |b| {
        b.iter(|| codec::encode(black_box(&record)).unwrap());
    });

    // The shape the driver's third phase measures: one buffer, many decodes
    group.bench_function("decode", |b| {
        b.iter(|| codec::decode(black_box(&bytes)).unwrap());
    });

    group.bench_function("roundtrip", |b| {
        b.iter(|| {
            let encoded = codec::encode(black_box(&record)).unwrap();
            codec::decode(&encoded).unwrap()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tree_mapping,
    bench_manual_extraction,
    bench_binary_codec,
);

criterion_main!(benches);
