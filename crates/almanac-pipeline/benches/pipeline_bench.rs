//! Pipeline benchmarks
//!
//! Kept small enough to finish within a minute locally and in CI.

use std::time::Duration;

use almanac_pipeline::{
    Almanac, AlmanacOptions, CategoryMap, Range, SolveOptions, lowest_location_for_seed_ranges,
    lowest_location_for_seeds,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const STAGES: usize = 7;
const RULES_PER_STAGE: usize = 40;
const SEED_RANGES: usize = 10;

fn ci_criterion() -> Criterion {
    Criterion::default()
        .sample_size(15)
        .measurement_time(Duration::from_secs(8))
}

/// Almanac with input-sized numbers: rules spread over ~4e9, huge seed ranges
fn synthetic_almanac(seed: u64) -> Almanac {
    let mut rng = StdRng::seed_from_u64(seed);

    let stages = (0..STAGES)
        .map(|_| {
            let mut cursor: i64 = 0;
            let mut rows: Vec<(i64, i64, i64)> = (0..RULES_PER_STAGE)
                .map(|_| {
                    let src_start = cursor + rng.gen_range(0..20_000_000);
                    let length = rng.gen_range(1_000_000..80_000_000);
                    cursor = src_start + length;
                    (rng.gen_range(0..4_000_000_000), src_start, length)
                })
                .collect();
            rows.shuffle(&mut rng);
            CategoryMap::from_rows(rows).expect("generated rules are valid")
        })
        .collect();

    let seeds = (0..SEED_RANGES)
        .flat_map(|_| [rng.gen_range(0..3_000_000_000), rng.gen_range(10_000_000..400_000_000)])
        .collect();

    Almanac::with_options(seeds, stages, &AlmanacOptions::relaxed())
        .expect("relaxed options accept any stage count")
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    let almanac = synthetic_almanac(1);
    let stage = &almanac.stages()[0];

    group.bench_function("wide_range", |b| {
        b.iter(|| stage.transform(black_box(Range::new(0, 3_000_000_000))))
    });

    group.bench_function("lookup_point", |b| {
        b.iter(|| stage.lookup_point(black_box(1_234_567_890)))
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let almanac = synthetic_almanac(2);
    let ranges = almanac.seed_ranges().expect("even seed count");

    group.bench_function("run_seed_ranges", |b| {
        b.iter(|| almanac.pipeline().run(black_box(&ranges)))
    });

    group.finish();
}

fn bench_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver");
    let almanac = synthetic_almanac(3);

    for (name, options) in [
        ("seed_ranges_parallel", SolveOptions::default()),
        ("seed_ranges_sequential", SolveOptions::sequential()),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| lowest_location_for_seed_ranges(black_box(&almanac), &options))
        });
    }

    group.bench_function("seeds_parallel", |b| {
        b.iter(|| lowest_location_for_seeds(black_box(&almanac), &SolveOptions::default()))
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = ci_criterion();
    targets =
        bench_transform,
        bench_pipeline,
        bench_solver,
}

criterion_main!(benches);
