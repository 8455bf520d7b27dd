//! Pipeline benchmarks
//!
//! Run with: `cargo bench -p conesim`

use conesim::{
    cones::measure_path,
    consts::{CONES, STEP_SIZE, T_END, T_START},
    imu::simulate_imu,
    types::Path,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ziggurat_rs::Ziggurat;

fn bench_stages(c: &mut Criterion) {
    let path = Path::sine(10_000, T_START, T_END);

    c.bench_function("path_sine_10k", |b| {
        b.iter(|| Path::sine(black_box(10_000), T_START, T_END))
    });

    c.bench_function("imu_10k", |b| {
        let mut rng = Ziggurat::new(1);
        b.iter(|| simulate_imu(black_box(&path), STEP_SIZE, 0.01, &mut rng))
    });

    c.bench_function("cones_10k", |b| {
        b.iter(|| measure_path(black_box(&path), &CONES))
    });
}

fn bench_gaussian(c: &mut Criterion) {
    let mut rng = Ziggurat::new(1);
    c.bench_function("ziggurat_gaussian", |b| b.iter(|| rng.gaussian(black_box(0.01))));
}

criterion_group!(benches, bench_stages, bench_gaussian);
criterion_main!(benches);
