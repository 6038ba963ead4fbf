//! 2D transforms and general-form line algebra.
//!
//! Purpose
//! - `ClassifiedAffine2`: a 2×3 affine map tagged with its structural case so
//!   point/vector transforms skip the arithmetic they do not need.
//! - `LineEquation` / `LineEquationNotNormalized`: lines `a x + b y + c = 0`
//!   with shared evaluation, intersection and segment-overlap code.
//!
//! Assumptions and conventions
//! - Row-vector convention for the affine map: `x' = x m11 + y m21 + ox`,
//!   `y' = x m12 + y m22 + oy`.
//! - No tolerances anywhere. Singular systems are detected by exact zero
//!   determinants; everything else propagates IEEE-754 values.
//!
//! Code cross-refs: `solvers::EquationSystem2`, `range::MinMax`,
//! `util::{cross_lines, within_segment}`

mod affine;
mod line;
mod line_nn;
mod range;
mod solvers;
mod util;

pub use affine::{AffineKind, ClassifiedAffine2};
pub use line::{GeneralForm, LineEquation};
pub use line_nn::LineEquationNotNormalized;
pub use range::MinMax;
pub use solvers::EquationSystem2;
