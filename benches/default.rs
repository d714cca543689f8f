//! Benchmarks for random string generation.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::SmallRng};
use std::time::Duration;

use randstr::RandomString;

fn generate_all(c: &mut Criterion) {
    let kb = 1_024;

    let specs = [
        ("any", RandomString::any()),
        ("alphabetic", RandomString::alphabetic()),
        ("alphanumeric", RandomString::alphanumeric()),
        ("numeric", RandomString::numeric()),
        ("ascii", RandomString::ascii()),
    ];

    for (name, spec) in specs {
        let mut group = c.benchmark_group(name);
        for size in &[kb, 64 * kb, 1_024 * kb] {
            group.throughput(Throughput::Elements(*size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
                b.iter(|| {
                    let mut rng = SmallRng::seed_from_u64(19690716);
                    spec.generate(size, &mut rng)
                        .expect("failed to generate string")
                });
            });
        }
        group.finish();
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(30));
    targets = generate_all
);
criterion_main!(benches);
