//! Benchmarks for facet-io decoding and encoding.
//!
//! Run with: cargo bench -p facet-io
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p facet-io -- --save-baseline main
//! 2. After changes: cargo bench -p facet-io -- --baseline main

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use facet_io::{
    load_stl, load_structured, read_stl, save_stl, write_stl_ascii, write_stl_binary, LoadParams,
};
use facet_types::{Facet, MeshStore, Vertex3};
use tempfile::tempdir;

// =============================================================================
// Test Mesh Generation
// =============================================================================

/// Create a height-field grid of `n * n * 2` facets.
#[allow(clippy::cast_precision_loss)]
fn create_grid(n: usize) -> MeshStore {
    let height = |i: usize, j: usize| ((i as f32) * 0.3).sin() * ((j as f32) * 0.2).cos();
    let point = |i: usize, j: usize| Vertex3::new(i as f32, j as f32, height(i, j));
    let up = Vertex3::new(0.0, 0.0, 1.0);

    let mut store = MeshStore::with_capacity(n * n * 2);
    for i in 0..n {
        for j in 0..n {
            let (a, b, c, d) = (point(i, j), point(i + 1, j), point(i + 1, j + 1), point(i, j + 1));
            store.append(Facet::new(up, a, b, c));
            store.append(Facet::new(up, a, c, d));
        }
    }
    store
}

// =============================================================================
// Decode Benchmarks
// =============================================================================

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let grid = create_grid(64); // 8192 facets
    let mut binary = Vec::new();
    write_stl_binary(&grid, &mut binary).expect("encode binary");
    let mut ascii = Vec::new();
    write_stl_ascii(&grid, &mut ascii, "grid").expect("encode ascii");
    let records: Vec<[Vertex3; 4]> = grid.iter().map(Facet::to_records).collect();

    group.throughput(Throughput::Elements(grid.len() as u64));

    group.bench_function("binary_memory", |b| {
        b.iter(|| {
            let mut store = MeshStore::new();
            read_stl(black_box(&binary[..]), &mut store, &LoadParams::default())
        });
    });

    group.bench_function("ascii_memory", |b| {
        b.iter(|| {
            let mut store = MeshStore::new();
            read_stl(black_box(&ascii[..]), &mut store, &LoadParams::default())
        });
    });

    group.bench_function("structured", |b| {
        b.iter(|| {
            let mut store = MeshStore::new();
            load_structured(black_box(&records), &mut store)
        });
    });

    group.finish();
}

// =============================================================================
// File Benchmarks
// =============================================================================

fn bench_files(c: &mut Criterion) {
    let mut group = c.benchmark_group("files");

    let grid = create_grid(64);
    let temp_dir = tempdir().expect("failed to create temp dir");
    let bin_path = temp_dir.path().join("bench_grid.stl");
    let ascii_path = temp_dir.path().join("bench_grid_ascii.stl");
    save_stl(&grid, &bin_path, true).expect("failed to save binary");
    save_stl(&grid, &ascii_path, false).expect("failed to save ascii");

    group.throughput(Throughput::Elements(grid.len() as u64));

    group.bench_function("load_binary", |b| {
        b.iter(|| {
            let mut store = MeshStore::new();
            load_stl(black_box(&bin_path), &mut store)
        });
    });

    group.bench_function("load_ascii", |b| {
        b.iter(|| {
            let mut store = MeshStore::new();
            load_stl(black_box(&ascii_path), &mut store)
        });
    });

    let out = temp_dir.path().join("bench_out.stl");
    group.bench_function("save_binary", |b| {
        b.iter(|| save_stl(black_box(&grid), black_box(&out), true));
    });

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_decode, bench_files);
criterion_main!(benches);
