//! Small linear solver used by the line intersection code.
//!
//! - `EquationSystem2`: `a1 x + b1 y = c1`, `a2 x + b2 y = c2`, solved by
//!   Cramer's rule with an exact singularity test.
//!
//! Code cross-refs: `util::cross_lines`
use nalgebra::Point2;

/// Two linear equations in two unknowns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EquationSystem2 {
    pub a1: f64,
    pub b1: f64,
    pub c1: f64,
    pub a2: f64,
    pub b2: f64,
    pub c2: f64,
}

impl EquationSystem2 {
    #[inline]
    pub fn new(a1: f64, b1: f64, c1: f64, a2: f64, b2: f64, c2: f64) -> Self {
        Self {
            a1,
            b1,
            c1,
            a2,
            b2,
            c2,
        }
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.a1 * self.b2 - self.a2 * self.b1
    }

    /// Unique solution `(x, y)`, or `None` for a singular system (parallel or
    /// coincident lines) or a non-finite determinant.
    pub fn solve(&self) -> Option<Point2<f64>> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let x = (self.c1 * self.b2 - self.b1 * self.c2) / det;
        let y = (self.a1 * self.c2 - self.c1 * self.a2) / det;
        Some(Point2::new(x, y))
    }
}
