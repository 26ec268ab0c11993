//! Tip Generation Benchmarks
//!
//! Throughput of unique-batch generation and distribution analysis.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tf_core::{RandomSampler, UniqueTipGenerator, Variant, analyze_distribution};

const BATCH_SIZES: &[usize] = &[1, 20, 50, 500];

/// Benchmark unique batch generation
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_unique");

    for variant in Variant::ALL {
        for &size in BATCH_SIZES {
            group.throughput(Throughput::Elements(size as u64));

            let mut generator = UniqueTipGenerator::new(RandomSampler::new(Some(42)));
            group.bench_with_input(
                BenchmarkId::new(variant.display_name(), size),
                &size,
                |b, &size| b.iter(|| black_box(generator.generate(variant, size))),
            );
        }
    }

    group.finish();
}

/// Benchmark distribution analysis
fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_distribution");

    for &size in BATCH_SIZES {
        group.throughput(Throughput::Elements(size as u64));

        let batch = UniqueTipGenerator::new(RandomSampler::new(Some(7)))
            .generate(Variant::Swisslos, size)
            .expect("batch");
        group.bench_with_input(BenchmarkId::new("swisslos", size), &size, |b, _| {
            b.iter(|| black_box(analyze_distribution(batch.tips())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate, bench_analyze);
criterion_main!(benches);
