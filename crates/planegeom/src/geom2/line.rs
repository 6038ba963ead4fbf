//! General-form lines `a x + b y + c = 0`.
//!
//! - `GeneralForm`: query surface shared by both line types (evaluation,
//!   signed distance, intersection, segment overlap). Both implementations
//!   run the same code, so they cannot drift apart.
//! - `LineEquation`: keeps `(a, b)` at unit length, so
//!   `distance_not_normalized` is the Euclidean signed distance.
//!
//! Code cross-refs: `line_nn::LineEquationNotNormalized`, `util`

use std::fmt;
use std::ops::Neg;

use nalgebra::{Point2, Vector2};

use super::util::{abc_from_point_and_deltas, cross_lines, normalize_abc, within_segment};

/// Shared behaviour of general-form lines.
pub trait GeneralForm: Sized {
    /// Coefficients `(a, b, c)`.
    fn coefficients(&self) -> (f64, f64, f64);

    /// Line through two points.
    fn from_points(p1: Point2<f64>, p2: Point2<f64>) -> Self;

    /// No line: `a == 0 && b == 0`.
    #[inline]
    fn is_invalid(&self) -> bool {
        let (a, b, _) = self.coefficients();
        a == 0.0 && b == 0.0
    }

    /// x at height `y`; NaN when `a == 0` (horizontal line).
    #[inline]
    fn get_x(&self, y: f64) -> f64 {
        let (a, b, c) = self.coefficients();
        if a == 0.0 {
            return f64::NAN;
        }
        -(b * y + c) / a
    }

    /// y at abscissa `x`; NaN when `b == 0` (vertical line).
    #[inline]
    fn get_y(&self, x: f64) -> f64 {
        let (a, b, c) = self.coefficients();
        if b == 0.0 {
            return f64::NAN;
        }
        -(a * x + c) / b
    }

    /// `a x + b y + c`. Euclidean only when `(a, b)` has unit length.
    #[inline]
    fn distance_not_normalized(&self, p: Point2<f64>) -> f64 {
        let (a, b, c) = self.coefficients();
        a * p.x + b * p.y + c
    }

    /// Crossing with the x axis; x is NaN when `a == 0`.
    #[inline]
    fn zero_point(&self) -> Point2<f64> {
        Point2::new(self.get_x(0.0), 0.0)
    }

    /// Normal `(a, b)`.
    #[inline]
    fn normal(&self) -> Vector2<f64> {
        let (a, b, _) = self.coefficients();
        Vector2::new(a, b)
    }

    /// Direction `(b, -a)`, perpendicular to the normal.
    #[inline]
    fn direction(&self) -> Vector2<f64> {
        let (a, b, _) = self.coefficients();
        Vector2::new(b, -a)
    }

    /// Intersection point; `None` when either line is invalid or the lines are
    /// parallel or coincident.
    fn cross(line1: &Self, line2: &Self) -> Option<Point2<f64>> {
        cross_lines(line1.coefficients(), line2.coefficients())
    }

    /// Intersection of two segments, `None` when the infinite lines do not
    /// cross or the crossing lies outside either segment (endpoints count).
    fn cross_line_segment(
        p1_begin: Point2<f64>,
        p1_end: Point2<f64>,
        p2_begin: Point2<f64>,
        p2_end: Point2<f64>,
    ) -> Option<Point2<f64>> {
        let l1 = Self::from_points(p1_begin, p1_end);
        let l2 = Self::from_points(p2_begin, p2_end);
        let p = Self::cross(&l1, &l2)?;
        if !within_segment(p, p1_begin, p1_end) || !within_segment(p, p2_begin, p2_end) {
            return None;
        }
        Some(p)
    }
}

/// Line `a x + b y + c = 0` with `a² + b² = 1` unless invalid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineEquation {
    a: f64,
    b: f64,
    c: f64,
}

impl LineEquation {
    /// From raw coefficients; rescaled to a unit normal.
    #[inline]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        let (a, b, c) = normalize_abc(a, b, c);
        Self { a, b, c }
    }

    /// Line through `(x, y)` along `(dx, dy)`, oriented so that `a >= 0`.
    #[inline]
    pub fn from_point_and_deltas(x: f64, y: f64, dx: f64, dy: f64) -> Self {
        let (a, b, c) = abc_from_point_and_deltas(x, y, dx, dy);
        Self { a, b, c }
    }

    #[inline]
    pub fn from_point_and_direction(p: Point2<f64>, d: Vector2<f64>) -> Self {
        Self::from_point_and_deltas(p.x, p.y, d.x, d.y)
    }

    /// `y = tangent * x + y0`.
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

    /// Foot of the perpendicular from `p`.
    #[inline]
    pub fn project(&self, p: Point2<f64>) -> Point2<f64> {
        let d = self.distance_not_normalized(p);
        Point2::new(p.x - self.a * d, p.y - self.b * d)
    }
}

impl GeneralForm for LineEquation {
    #[inline]
    fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    #[inline]
    fn from_points(p1: Point2<f64>, p2: Point2<f64>) -> Self {
        Self::from_point_and_deltas(p1.x, p1.y, p2.x - p1.x, p2.y - p1.y)
    }
}

impl Neg for LineEquation {
    type Output = LineEquation;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            a: -self.a,
            b: -self.b,
            c: -self.c,
        }
    }
}

impl fmt::Display for LineEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*x + {}*y + {} = 0", self.a, self.b, self.c)
    }
}
