//! Flat re-export surface for callers that do not care about module layout.
//!
//! Prefer these names in downstream code; the module tree behind them may
//! move.

// 2D transforms and lines
pub use crate::geom2::{
    AffineKind, ClassifiedAffine2, EquationSystem2, GeneralForm, LineEquation,
    LineEquationNotNormalized, MinMax,
};
// Axis-plane projections
pub use crate::axis::{PointXZ, PointYZ, RayXZ, RayYZ, VectorXZ, VectorYZ};
// 3D frames
pub use crate::geom3::{Coord3, Frame3, Ray3};

use nalgebra::Point2;

/// Every crossing between two segments of `segments`, as `(i, j, point)`
/// with `i < j`. Quadratic; meant for small inputs.
pub fn pairwise_segment_crossings(
    segments: &[(Point2<f64>, Point2<f64>)],
) -> Vec<(usize, usize, Point2<f64>)> {
    let mut out = Vec::new();
    for (i, &(a0, a1)) in segments.iter().enumerate() {
        for (j, &(b0, b1)) in segments.iter().enumerate().skip(i + 1) {
            if let Some(p) = LineEquation::cross_line_segment(a0, a1, b0, b1) {
                out.push((i, j, p));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn grid_of_segments() {
        // two horizontals, two verticals -> four crossings
        let segs = vec![
            (Point2::new(0.0, 1.0), Point2::new(10.0, 1.0)),
            (Point2::new(0.0, 2.0), Point2::new(10.0, 2.0)),
            (Point2::new(3.0, 0.0), Point2::new(3.0, 5.0)),
            (Point2::new(4.0, 0.0), Point2::new(4.0, 5.0)),
        ];
        let hits = pairwise_segment_crossings(&segs);
        assert_eq!(hits.len(), 4);
        assert!(hits.contains(&(0, 2, Point2::new(3.0, 1.0))));
        assert!(hits.contains(&(1, 3, Point2::new(4.0, 2.0))));
        assert!(hits.iter().all(|&(i, j, _)| i < j));
    }

    #[test]
    fn randomized_seeded_hits_lie_on_both_lines() {
        let mut rng = StdRng::seed_from_u64(42);
        let segs: Vec<_> = (0..30)
            .map(|_| {
                (
                    Point2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)),
                    Point2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)),
                )
            })
            .collect();
        for (i, j, p) in pairwise_segment_crossings(&segs) {
            let li = LineEquation::from_points(segs[i].0, segs[i].1);
            let lj = LineEquation::from_points(segs[j].0, segs[j].1);
            assert!(li.distance_not_normalized(p).abs() < 1e-6);
            assert!(lj.distance_not_normalized(p).abs() < 1e-6);
        }
    }
}
