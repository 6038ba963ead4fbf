//! Criterion benchmarks for line intersection and segment overlap.
//! Focus sizes: segment counts in {10, 50, 200}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Point2;
use planegeom::api::pairwise_segment_crossings;
use planegeom::geom2::{GeneralForm, LineEquation, LineEquationNotNormalized};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_segments(n: usize, seed: u64) -> Vec<(Point2<f64>, Point2<f64>)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            (
                Point2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)),
                Point2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)),
            )
        })
        .collect()
}

fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines");
    let segs = random_segments(256, 5);
    group.bench_function("cross_normalized", |b| {
        b.iter(|| {
            segs.windows(2)
                .filter_map(|w| {
                    let l1 = LineEquation::from_points(w[0].0, w[0].1);
                    let l2 = LineEquation::from_points(w[1].0, w[1].1);
                    LineEquation::cross(&l1, &l2)
                })
                .count()
        })
    });
    group.bench_function("cross_not_normalized", |b| {
        b.iter(|| {
            segs.windows(2)
                .filter_map(|w| {
                    let l1 = LineEquationNotNormalized::from_points(w[0].0, w[0].1);
                    let l2 = LineEquationNotNormalized::from_points(w[1].0, w[1].1);
                    LineEquationNotNormalized::cross(&l1, &l2)
                })
                .count()
        })
    });
    for &n in &[10usize, 50, 200] {
        group.bench_with_input(BenchmarkId::new("pairwise_segments", n), &n, |b, &n| {
            b.iter_batched(
                || random_segments(n, 17),
                |s| pairwise_segment_crossings(&s).len(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lines);
criterion_main!(benches);
