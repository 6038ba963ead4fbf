//! Classified 2D affine transform.
//!
//! - `AffineKind`: structural case of a 2×3 affine map.
//! - `ClassifiedAffine2`: immutable map that caches its kind at construction
//!   and dispatches point/vector transforms to the cheapest arithmetic.
//!
//! The map uses the row-vector convention
//! ```text
//! x' = x * m11 + y * m21 + offset_x
//! y' = x * m12 + y * m22 + offset_y
//! ```
//! so `m21` feeds x and `m12` feeds y. `to_homogeneous` gives the equivalent
//! column-vector `Matrix3` for code that expects nalgebra's convention.

use std::fmt;
use std::ops::Mul;

use nalgebra::{Matrix3, Point2, Vector2};

/// Structural case of an affine map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AffineKind {
    Identity,
    Translation,
    Scaling,
    TranslationAndScaling,
    General,
}

impl AffineKind {
    /// Classify six coefficients.
    ///
    /// Cross terms force `General`. Otherwise scaling and translation are
    /// detected independently and combined; no scaling and no translation is
    /// `Identity`.
    pub fn classify(m11: f64, m12: f64, m21: f64, m22: f64, offset_x: f64, offset_y: f64) -> Self {
        if m21 != 0.0 || m12 != 0.0 {
            return AffineKind::General;
        }
        let scaling = m11 != 1.0 || m22 != 1.0;
        let translation = offset_x != 0.0 || offset_y != 0.0;
        match (scaling, translation) {
            (true, true) => AffineKind::TranslationAndScaling,
            (true, false) => AffineKind::Scaling,
            (false, true) => AffineKind::Translation,
            (false, false) => AffineKind::Identity,
        }
    }
}

/// 2D affine map with a cached `AffineKind`.
///
/// Invariants:
/// - `kind` always equals `AffineKind::classify` of the stored coefficients,
///   except for `identity()`, which stores zeros and reports itself through
///   the effective accessors as `1, 0, 0, 1, 0, 0`.
/// - Immutable: every operation returns a new value.
#[derive(Clone, Copy, Debug)]
pub struct ClassifiedAffine2 {
    m11: f64,
    m12: f64,
    m21: f64,
    m22: f64,
    offset_x: f64,
    offset_y: f64,
    kind: AffineKind,
}

impl ClassifiedAffine2 {
    /// Construct from raw coefficients and classify them.
    #[inline]
    pub fn new(m11: f64, m12: f64, m21: f64, m22: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            m11,
            m12,
            m21,
            m22,
            offset_x,
            offset_y,
            kind: AffineKind::classify(m11, m12, m21, m22, offset_x, offset_y),
        }
    }

    /// Identity map. Raw storage is all zeros; read it through the accessors.
    #[inline]
    pub const fn identity() -> Self {
        Self {
            m11: 0.0,
            m12: 0.0,
            m21: 0.0,
            m22: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
            kind: AffineKind::Identity,
        }
    }

    #[inline]
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    #[inline]
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Scaling about the center `(cx, cy)`.
    #[inline]
    pub fn scaling_at(sx: f64, sy: f64, cx: f64, cy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, cx - sx * cx, cy - sy * cy)
    }

    /// Counterclockwise rotation about the origin (radians).
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Counterclockwise rotation about `(cx, cy)` (radians).
    pub fn rotation_at(angle: f64, cx: f64, cy: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let dx = cx * (1.0 - cos) + cy * sin;
        let dy = cy * (1.0 - cos) - cx * sin;
        Self::new(cos, sin, -sin, cos, dx, dy)
    }

    /// Skew by `angle_x` along x and `angle_y` along y (radians).
    pub fn skew(angle_x: f64, angle_y: f64) -> Self {
        Self::new(1.0, angle_y.tan(), angle_x.tan(), 1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn kind(&self) -> AffineKind {
        self.kind
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.kind == AffineKind::Identity
    }

    #[inline]
    pub fn m11(&self) -> f64 {
        if self.is_identity() {
            1.0
        } else {
            self.m11
        }
    }

    #[inline]
    pub fn m12(&self) -> f64 {
        if self.is_identity() {
            0.0
        } else {
            self.m12
        }
    }

    #[inline]
    pub fn m21(&self) -> f64 {
        if self.is_identity() {
            0.0
        } else {
            self.m21
        }
    }

    #[inline]
    pub fn m22(&self) -> f64 {
        if self.is_identity() {
            1.0
        } else {
            self.m22
        }
    }

    #[inline]
    pub fn offset_x(&self) -> f64 {
        if self.is_identity() {
            0.0
        } else {
            self.offset_x
        }
    }

    #[inline]
    pub fn offset_y(&self) -> f64 {
        if self.is_identity() {
            0.0
        } else {
            self.offset_y
        }
    }

    /// Effective coefficients `(m11, m12, m21, m22, offset_x, offset_y)`.
    #[inline]
    pub fn coefficients(&self) -> [f64; 6] {
        [
            self.m11(),
            self.m12(),
            self.m21(),
            self.m22(),
            self.offset_x(),
            self.offset_y(),
        ]
    }

    pub fn determinant(&self) -> f64 {
        match self.kind {
            AffineKind::Identity | AffineKind::Translation => 1.0,
            AffineKind::Scaling | AffineKind::TranslationAndScaling => self.m11 * self.m22,
            AffineKind::General => self.m11 * self.m22 - self.m12 * self.m21,
        }
    }

    #[inline]
    pub fn has_inverse(&self) -> bool {
        self.determinant() != 0.0
    }

    /// Transform point coordinates (offsets applied).
    #[inline]
    pub fn transform_xy(&self, x: f64, y: f64) -> (f64, f64) {
        match self.kind {
            AffineKind::Identity => (x, y),
            AffineKind::Translation => (x + self.offset_x, y + self.offset_y),
            AffineKind::Scaling => (x * self.m11, y * self.m22),
            AffineKind::TranslationAndScaling => (
                x * self.m11 + self.offset_x,
                y * self.m22 + self.offset_y,
            ),
            AffineKind::General => (
                x * self.m11 + y * self.m21 + self.offset_x,
                x * self.m12 + y * self.m22 + self.offset_y,
            ),
        }
    }

    /// Transform vector coordinates (linear part only).
    #[inline]
    pub fn transform_vector_xy(&self, x: f64, y: f64) -> (f64, f64) {
        match self.kind {
            AffineKind::Identity | AffineKind::Translation => (x, y),
            AffineKind::Scaling | AffineKind::TranslationAndScaling => (x * self.m11, y * self.m22),
            AffineKind::General => (
                x * self.m11 + y * self.m21,
                x * self.m12 + y * self.m22,
            ),
        }
    }

    #[inline]
    pub fn transform_point(&self, p: Point2<f64>) -> Point2<f64> {
        let (x, y) = self.transform_xy(p.x, p.y);
        Point2::new(x, y)
    }

    #[inline]
    pub fn transform_vector(&self, v: Vector2<f64>) -> Vector2<f64> {
        let (x, y) = self.transform_vector_xy(v.x, v.y);
        Vector2::new(x, y)
    }

    /// Transform a batch of points in place.
    pub fn transform_points(&self, points: &mut [Point2<f64>]) {
        if self.is_identity() {
            return;
        }
        for p in points.iter_mut() {
            *p = self.transform_point(*p);
        }
    }

    /// Transform a batch of vectors in place.
    pub fn transform_vectors(&self, vectors: &mut [Vector2<f64>]) {
        if matches!(self.kind, AffineKind::Identity | AffineKind::Translation) {
            return;
        }
        for v in vectors.iter_mut() {
            *v = self.transform_vector(*v);
        }
    }

    /// Composition: apply `self` first, then `other`.
    pub fn then(&self, other: &ClassifiedAffine2) -> ClassifiedAffine2 {
        match (self.kind, other.kind) {
            (AffineKind::Identity, _) => *other,
            (_, AffineKind::Identity) => *self,
            (AffineKind::Translation, AffineKind::Translation) => Self::translation(
                self.offset_x + other.offset_x,
                self.offset_y + other.offset_y,
            ),
            (AffineKind::Scaling, AffineKind::Scaling) => {
                Self::scaling(self.m11 * other.m11, self.m22 * other.m22)
            }
            _ => {
                let [a11, a12, a21, a22, ax, ay] = self.coefficients();
                let [b11, b12, b21, b22, bx, by] = other.coefficients();
                Self::new(
                    a11 * b11 + a12 * b21,
                    a11 * b12 + a12 * b22,
                    a21 * b11 + a22 * b21,
                    a21 * b12 + a22 * b22,
                    ax * b11 + ay * b21 + bx,
                    ax * b12 + ay * b22 + by,
                )
            }
        }
    }

    /// `self` followed by `other`.
    #[inline]
    pub fn append(&self, other: &ClassifiedAffine2) -> ClassifiedAffine2 {
        self.then(other)
    }

    /// `other` followed by `self`.
    #[inline]
    pub fn prepend(&self, other: &ClassifiedAffine2) -> ClassifiedAffine2 {
        other.then(self)
    }

    /// Inverse map, or `None` when the determinant is exactly zero.
    pub fn inverse(&self) -> Option<ClassifiedAffine2> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }
        let inv = match self.kind {
            AffineKind::Identity => Self::identity(),
            AffineKind::Translation => Self::translation(-self.offset_x, -self.offset_y),
            AffineKind::Scaling => Self::scaling(1.0 / self.m11, 1.0 / self.m22),
            AffineKind::TranslationAndScaling => Self::new(
                1.0 / self.m11,
                0.0,
                0.0,
                1.0 / self.m22,
                -self.offset_x / self.m11,
                -self.offset_y / self.m22,
            ),
            AffineKind::General => {
                let inv_det = 1.0 / det;
                Self::new(
                    self.m22 * inv_det,
                    -self.m12 * inv_det,
                    -self.m21 * inv_det,
                    self.m11 * inv_det,
                    (self.m21 * self.offset_y - self.offset_x * self.m22) * inv_det,
                    (self.offset_x * self.m12 - self.m11 * self.offset_y) * inv_det,
                )
            }
        };
        Some(inv)
    }

    /// Column-vector homogeneous matrix `[[m11, m21, ox], [m12, m22, oy], [0, 0, 1]]`.
    pub fn to_homogeneous(&self) -> Matrix3<f64> {
        let [m11, m12, m21, m22, ox, oy] = self.coefficients();
        Matrix3::new(m11, m21, ox, m12, m22, oy, 0.0, 0.0, 1.0)
    }
}

impl Default for ClassifiedAffine2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl PartialEq for ClassifiedAffine2 {
    fn eq(&self, other: &Self) -> bool {
        if self.is_identity() && other.is_identity() {
            return true;
        }
        self.coefficients() == other.coefficients()
    }
}

impl fmt::Display for ClassifiedAffine2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return f.write_str("Identity");
        }
        let [m11, m12, m21, m22, ox, oy] = self.coefficients();
        write!(f, "{m11},{m12},{m21},{m22},{ox},{oy}")
    }
}

impl Mul for ClassifiedAffine2 {
    type Output = ClassifiedAffine2;
    /// `a * b` applies `a` first, then `b`.
    #[inline]
    fn mul(self, rhs: ClassifiedAffine2) -> Self::Output {
        self.then(&rhs)
    }
}

impl Mul<Point2<f64>> for ClassifiedAffine2 {
    type Output = Point2<f64>;
    #[inline]
    fn mul(self, rhs: Point2<f64>) -> Self::Output {
        self.transform_point(rhs)
    }
}

impl Mul<Vector2<f64>> for ClassifiedAffine2 {
    type Output = Vector2<f64>;
    #[inline]
    fn mul(self, rhs: Vector2<f64>) -> Self::Output {
        self.transform_vector(rhs)
    }
}
