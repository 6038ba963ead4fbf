//! Planar geometry core: classified affine transforms and line algebra.
//!
//! Layout
//! - `geom2`: `ClassifiedAffine2`, general-form lines (`LineEquation`,
//!   `LineEquationNotNormalized`), the 2×2 solver and `MinMax`.
//! - `axis`: points, vectors and rays restricted to the XZ / YZ planes.
//! - `geom3`: coordinate frames and 3D rays that project onto the axis planes.
//!
//! Conventions
//! - Plain points and vectors are `nalgebra` types with `f64` scalars.
//! - Comparisons are exact. Degenerate input yields NaN/Inf or `None`, never a
//!   panic.

pub mod api;
pub mod axis;
pub mod geom2;
pub mod geom3;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{AffineKind, ClassifiedAffine2, GeneralForm, LineEquation, LineEquationNotNormalized};
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::axis::{PointXZ, PointYZ, RayXZ, RayYZ, VectorXZ, VectorYZ};
    pub use crate::geom2::{
        AffineKind, ClassifiedAffine2, EquationSystem2, GeneralForm, LineEquation,
        LineEquationNotNormalized, MinMax,
    };
    pub use crate::geom3::{Coord3, Frame3, Ray3};
    pub use nalgebra::{Point2, Point3, Vector2, Vector3};
}

/// Scalar 2D cross product `a.x * b.y - a.y * b.x`.
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn cross2(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
