//! Criterion benchmarks for classified affine dispatch.
//! Compares each kind against the full homogeneous product.
//! Results: by default under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::{Point2, Vector3};
use planegeom::geom2::ClassifiedAffine2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_points(n: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point2::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)))
        .collect()
}

fn bench_affine(c: &mut Criterion) {
    let pts = random_points(1024, 11);
    let cases = [
        ("identity", ClassifiedAffine2::identity()),
        ("translation", ClassifiedAffine2::translation(3.0, -2.0)),
        ("scaling", ClassifiedAffine2::scaling(2.0, 0.5)),
        ("translation_scaling", ClassifiedAffine2::new(2.0, 0.0, 0.0, 0.5, 3.0, -2.0)),
        ("general", ClassifiedAffine2::rotation_at(0.3, 1.0, 1.0)),
    ];
    let mut group = c.benchmark_group("affine");
    for (name, m) in cases {
        group.bench_with_input(BenchmarkId::new("classified", name), &m, |b, m| {
            b.iter(|| {
                let mut acc = 0.0;
                for p in &pts {
                    let q = m.transform_point(black_box(*p));
                    acc += q.x + q.y;
                }
                acc
            })
        });
        let h = m.to_homogeneous();
        group.bench_with_input(BenchmarkId::new("homogeneous", name), &h, |b, h| {
            b.iter(|| {
                let mut acc = 0.0;
                for p in &pts {
                    let q = h * Vector3::new(black_box(p.x), p.y, 1.0);
                    acc += q.x + q.y;
                }
                acc
            })
        });
    }
    group.bench_function("compose_general", |b| {
        let r = ClassifiedAffine2::rotation(0.2);
        let t = ClassifiedAffine2::translation(1.0, 2.0);
        b.iter(|| black_box(r).then(&black_box(t)))
    });
    group.finish();
}

criterion_group!(benches, bench_affine);
criterion_main!(benches);
