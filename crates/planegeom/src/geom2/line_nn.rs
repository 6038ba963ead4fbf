//! General-form line without a unit-normal invariant.
//!
//! Only the point-based constructors normalize. Raw construction, negation and
//! scaling keep the coefficients as they are, so `distance_not_normalized` is
//! a scaled distance in general.

use std::fmt;
use std::ops::{Mul, Neg};

use nalgebra::{Point2, Vector2};

use super::line::{GeneralForm, LineEquation};
use super::util::abc_from_point_and_deltas;

/// Line `a x + b y + c = 0`, coefficients kept as given.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineEquationNotNormalized {
    a: f64,
    b: f64,
    c: f64,
}

impl LineEquationNotNormalized {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Line through `(x, y)` along `(dx, dy)`; unit normal with `a >= 0`.
    #[inline]
    pub fn from_point_and_deltas(x: f64, y: f64, dx: f64, dy: f64) -> Self {
        let (a, b, c) = abc_from_point_and_deltas(x, y, dx, dy);
        Self { a, b, c }
    }

    #[inline]
    pub fn from_point_and_direction(p: Point2<f64>, d: Vector2<f64>) -> Self {
        Self::from_point_and_deltas(p.x, p.y, d.x, d.y)
    }

    /// `y = tangent * x + y0`, stored as `(tangent, -1, y0)`.
    #[inline]
    pub fn from_slope(tangent: f64, y0: f64) -> Self {
        Self::new(tangent, -1.0, y0)
    }

    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Multiply all three coefficients; same line for any non-zero `k`.
    #[inline]
    pub fn scale(&self, k: f64) -> Self {
        Self::new(self.a * k, self.b * k, self.c * k)
    }

    /// Same line with a unit normal.
    #[inline]
    pub fn normalized(&self) -> LineEquation {
        LineEquation::new(self.a, self.b, self.c)
    }
}

impl GeneralForm for LineEquationNotNormalized {
    #[inline]
    fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    #[inline]
    fn from_points(p1: Point2<f64>, p2: Point2<f64>) -> Self {
        Self::from_point_and_deltas(p1.x, p1.y, p2.x - p1.x, p2.y - p1.y)
    }
}

impl From<LineEquation> for LineEquationNotNormalized {
    fn from(line: LineEquation) -> Self {
        Self::new(line.a(), line.b(), line.c())
    }
}

impl Neg for LineEquationNotNormalized {
    type Output = LineEquationNotNormalized;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.a, -self.b, -self.c)
    }
}

impl Mul<f64> for LineEquationNotNormalized {
    type Output = LineEquationNotNormalized;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl fmt::Display for LineEquationNotNormalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*x + {}*y + {} = 0", self.a, self.b, self.c)
    }
}
