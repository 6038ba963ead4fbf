use nalgebra::Point2;

use super::{range::MinMax, solvers::EquationSystem2};

/// Rescale `(a, b, c)` so that `a² + b² = 1`. Skipped when the sum is exactly
/// 0 (invalid line) or 1 (already unit).
#[inline]
pub(crate) fn normalize_abc(a: f64, b: f64, c: f64) -> (f64, f64, f64) {
    let sq = a * a + b * b;
    if sq == 0.0 || sq == 1.0 {
        return (a, b, c);
    }
    let len = sq.sqrt();
    (a / len, b / len, c / len)
}

/// Line through `(x, y)` with direction `(dx, dy)`: unit normal `(-dy, dx)/len`
/// flipped so that `a >= 0`. A zero direction gives the invalid line `(0, 0, 0)`.
/// Signed zeros come out as `+0.0`.
pub(crate) fn abc_from_point_and_deltas(x: f64, y: f64, dx: f64, dy: f64) -> (f64, f64, f64) {
    let len = dx.hypot(dy);
    if len == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let mut a = -dy / len;
    let mut b = dx / len;
    if a < 0.0 {
        a = -a;
        b = -b;
    }
    // `+ 0.0` turns -0.0 into +0.0
    let (a, b) = (a + 0.0, b + 0.0);
    let c = -(a * x + b * y) + 0.0;
    normalize_abc(a, b, c)
}

/// Intersection of `a1 x + b1 y + c1 = 0` and `a2 x + b2 y + c2 = 0`.
pub(crate) fn cross_lines(l1: (f64, f64, f64), l2: (f64, f64, f64)) -> Option<Point2<f64>> {
    let (a1, b1, c1) = l1;
    let (a2, b2, c2) = l2;
    if (a1 == 0.0 && b1 == 0.0) || (a2 == 0.0 && b2 == 0.0) {
        return None;
    }
    EquationSystem2::new(a1, b1, -c1, a2, b2, -c2).solve()
}

/// Whether `p` (known to lie on the segment's line) falls within the segment.
///
/// Checks the axis with the larger extent only; the other axis can be nearly
/// flat and its bound test unstable.
pub(crate) fn within_segment(p: Point2<f64>, begin: Point2<f64>, end: Point2<f64>) -> bool {
    let d = end - begin;
    if d.x.abs() > d.y.abs() {
        MinMax::spanning(begin.x, end.x).contains(p.x)
    } else {
        MinMax::spanning(begin.y, end.y).contains(p.y)
    }
}
