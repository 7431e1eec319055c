//! Criterion micro-benchmarks for the search phase of every variant.

use std::hint::black_box;

use collbench_bench::{lookup_sweep_enabled, populated, probe_profile, REFERENCE_SIZES};
use collbench_core::Variant;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Benchmark: membership probes against a pre-populated container.
fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");

    for &size in &REFERENCE_SIZES {
        let probes = probe_profile(size, 42);
        group.throughput(Throughput::Elements(probes.len() as u64));
        for variant in Variant::ALL {
            if !lookup_sweep_enabled(variant, size) {
                continue;
            }
            let container = populated(variant, size);
            group.bench_with_input(
                BenchmarkId::new(variant.name(), size),
                &probes,
                |b, probes| {
                    b.iter(|| {
                        probes
                            .iter()
                            .filter(|&&v| container.contains(black_box(v)))
                            .count()
                    });
                },
            );
        }
    }
    group.finish();
}

/// Benchmark: a miss on every probe, the worst case for sequence variants.
fn bench_contains_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains_miss");
    let size = 10_000;

    for variant in Variant::ALL {
        let container = populated(variant, size);
        group.bench_function(BenchmarkId::new(variant.name(), size), |b| {
            b.iter(|| black_box(container.contains(black_box(size))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_contains, bench_contains_miss);
criterion_main!(benches);
