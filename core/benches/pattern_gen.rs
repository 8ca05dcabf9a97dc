use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tilerecall_core::{PatternGenerator, RandomPatternGenerator, RoundConfig};

/// Rejection sampling gets slower as the pattern approaches a full grid.
fn bench_pattern_gen(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_gen");
    for (grid_side, pattern_size) in [(5, 5), (5, 20), (5, 25), (16, 64), (16, 256)] {
        let config = RoundConfig::new(grid_side, pattern_size, 500);
        let id = BenchmarkId::from_parameter(format!("{grid_side}x{grid_side}/{pattern_size}"));
        group.bench_with_input(id, &config, |b, &config| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                black_box(RandomPatternGenerator::new(seed).generate(config))
            })
        });
    }
    group.finish();
}

criterion_group!(pattern_gen, bench_pattern_gen);
criterion_main!(pattern_gen);
