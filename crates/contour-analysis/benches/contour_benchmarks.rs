//! Benchmarks for band partitioning and contour tracing.
//!
//! Run with: cargo bench --package contour-analysis --bench contour_benchmarks

use contour_analysis::bands::{partition, partition_parallel};
use contour_analysis::contour::{trace, trace_level, trace_parallel};
use contour_analysis::BandSpec;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use field_common::{GridField, ScalarField};
use rand::Rng;

/// Smooth field with several bright blobs, like a crowded star frame.
fn generate_smooth_field(width: usize, height: usize) -> GridField {
    GridField::from_fn(width, height, |x, y| {
        let fx = x as f32 / width as f32;
        let fy = y as f32 / height as f32;

        let v1 = (fx * std::f32::consts::PI * 4.0).sin() * 200.0;
        let v2 = (fy * std::f32::consts::PI * 4.0).sin() * 200.0;
        let v3 = ((fx + fy) * std::f32::consts::PI * 2.0).sin() * 100.0;

        1000.0 + v1 + v2 + v3
    })
}

/// Smooth field plus sensor noise (many more contour segments).
fn generate_noisy_field(width: usize, height: usize) -> GridField {
    let mut rng = rand::thread_rng();
    let base = generate_smooth_field(width, height);
    let data = base
        .as_slice()
        .iter()
        .map(|&v| v + rng.gen_range(-50.0..50.0))
        .collect();
    GridField::new(data, width, height).unwrap()
}

// =============================================================================
// SINGLE LEVEL
// =============================================================================

fn bench_trace_level(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace_level");

    for (width, height) in [(64, 64), (256, 256), (512, 512)] {
        let smooth = generate_smooth_field(width, height);
        let noisy = generate_noisy_field(width, height);

        group.throughput(Throughput::Elements((width * height) as u64));

        group.bench_with_input(
            BenchmarkId::new("smooth", format!("{}x{}", width, height)),
            &smooth,
            |b, field| b.iter(|| trace_level(field, field.bounds(), black_box(1000))),
        );

        group.bench_with_input(
            BenchmarkId::new("noisy", format!("{}x{}", width, height)),
            &noisy,
            |b, field| b.iter(|| trace_level(field, field.bounds(), black_box(1000))),
        );
    }

    group.finish();
}

// =============================================================================
// ALL LEVELS
// =============================================================================

fn bench_trace(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace");
    group.sample_size(20);

    let field = generate_noisy_field(512, 512);

    for regions in [5usize, 10, 20] {
        let spec = BandSpec::new(650, 1500, regions).unwrap();

        group.bench_with_input(BenchmarkId::new("sequential", regions), &spec, |b, spec| {
            b.iter(|| trace(&field, field.bounds(), black_box(spec)))
        });

        group.bench_with_input(BenchmarkId::new("parallel", regions), &spec, |b, spec| {
            b.iter(|| trace_parallel(&field, field.bounds(), black_box(spec)))
        });
    }

    group.finish();
}

// =============================================================================
// BAND PARTITIONING
// =============================================================================

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    group.sample_size(20);

    let field = generate_smooth_field(512, 512);

    for regions in [5usize, 10, 20] {
        let spec = BandSpec::new(650, 1500, regions).unwrap();

        group.bench_with_input(BenchmarkId::new("sequential", regions), &spec, |b, spec| {
            b.iter(|| partition(&field, field.bounds(), black_box(spec)))
        });

        group.bench_with_input(BenchmarkId::new("parallel", regions), &spec, |b, spec| {
            b.iter(|| partition_parallel(&field, field.bounds(), black_box(spec)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_trace_level, bench_trace, bench_partition);
criterion_main!(benches);
