use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use sort_timing_rs::bench::Algorithm;
use sort_timing_rs::patterns;

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_uniform");

    for algorithm in Algorithm::ALL {
        // The quadratic sorts only get the small end of the size range.
        let sizes: &[usize] = match algorithm {
            Algorithm::Quick => &[2_000, 8_000, 32_000],
            _ => &[2_000, 8_000],
        };

        for &size in sizes {
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(
                BenchmarkId::new(algorithm.label(), size),
                &size,
                |b, &size| {
                    let mut rng = StdRng::seed_from_u64(size as u64);
                    b.iter_batched(
                        || patterns::random_uniform(&mut rng, size),
                        |mut data| {
                            algorithm.run(black_box(&mut data));
                            data
                        },
                        BatchSize::LargeInput,
                    )
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_sorts);
criterion_main!(benches);
