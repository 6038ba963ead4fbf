//! Points, vectors and rays restricted to the XZ and YZ coordinate planes.
//!
//! Purpose
//! - Reduce 3D ray questions ("how high is the ray above x?") to the 2D line
//!   algebra in `crate::geom2`.
//!
//! Conventions
//! - Each plane has a first axis (x or y) and a second axis (z). Lifting to a
//!   plain `Vector2` / `Point2` maps the first axis to x and z to y.
//! - A ray's direction is normalized once, at construction. Zero-length
//!   directions are not rejected; they produce NaN downstream.
//! - `cross` is the scalar 2D cross product of the lifted vectors.
//!
//! Code cross-refs: `geom2::LineEquation::from_point_and_deltas`, `crate::cross2`

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::{Point2, Point3, Vector2};

use crate::geom2::{GeneralForm, LineEquation};

macro_rules! axis_plane {
    ($plane:literal, $point:ident, $vector:ident, $ray:ident, $u:ident, $v:ident) => {
        #[doc = concat!("Point in the ", $plane, " plane.")]
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        pub struct $point {
            pub $u: f64,
            pub $v: f64,
        }

        #[doc = concat!("Vector in the ", $plane, " plane.")]
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        pub struct $vector {
            pub $u: f64,
            pub $v: f64,
        }

        #[doc = concat!(
            "Ray in the ", $plane, " plane: origin plus unit direction."
        )]
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub struct $ray {
            origin: $point,
            direction: $vector,
        }

        impl $vector {
            #[inline]
            pub fn new($u: f64, $v: f64) -> Self {
                Self { $u, $v }
            }

            #[inline]
            pub fn from_vector(v: Vector2<f64>) -> Self {
                Self::new(v.x, v.y)
            }

            #[inline]
            pub fn to_vector(self) -> Vector2<f64> {
                Vector2::new(self.$u, self.$v)
            }

            #[inline]
            pub fn add(self, other: Self) -> Self {
                Self::new(self.$u + other.$u, self.$v + other.$v)
            }

            #[inline]
            pub fn sub(self, other: Self) -> Self {
                Self::new(self.$u - other.$u, self.$v - other.$v)
            }

            #[inline]
            pub fn scale(self, k: f64) -> Self {
                Self::new(self.$u * k, self.$v * k)
            }

            #[inline]
            pub fn neg(self) -> Self {
                Self::new(-self.$u, -self.$v)
            }

            #[inline]
            pub fn dot(self, other: Self) -> f64 {
                self.$u * other.$u + self.$v * other.$v
            }

            /// Scalar cross product of the lifted 2D vectors.
            #[inline]
            pub fn cross(self, other: Self) -> f64 {
                crate::cross2(self.to_vector(), other.to_vector())
            }

            #[inline]
            pub fn length(self) -> f64 {
                (self.$u * self.$u + self.$v * self.$v).sqrt()
            }

            /// `self / length`; NaN components for the zero vector.
            #[inline]
            pub fn normalize(self) -> Self {
                let len = self.length();
                Self::new(self.$u / len, self.$v / len)
            }
        }

        impl Add for $vector {
            type Output = $vector;
            #[inline]
            fn add(self, rhs: $vector) -> $vector {
                $vector::add(self, rhs)
            }
        }

        impl Sub for $vector {
            type Output = $vector;
            #[inline]
            fn sub(self, rhs: $vector) -> $vector {
                $vector::sub(self, rhs)
            }
        }

        impl Mul<f64> for $vector {
            type Output = $vector;
            #[inline]
            fn mul(self, rhs: f64) -> $vector {
                self.scale(rhs)
            }
        }

        impl Neg for $vector {
            type Output = $vector;
            #[inline]
            fn neg(self) -> $vector {
                $vector::neg(self)
            }
        }

        impl $point {
            #[inline]
            pub fn new($u: f64, $v: f64) -> Self {
                Self { $u, $v }
            }

            #[inline]
            pub fn from_point(p: Point2<f64>) -> Self {
                Self::new(p.x, p.y)
            }

            #[inline]
            pub fn to_point(self) -> Point2<f64> {
                Point2::new(self.$u, self.$v)
            }

            #[inline]
            pub fn add_vector(self, v: $vector) -> Self {
                Self::new(self.$u + v.$u, self.$v + v.$v)
            }

            /// `self - other` as a vector.
            #[inline]
            pub fn sub(self, other: Self) -> $vector {
                $vector::new(self.$u - other.$u, self.$v - other.$v)
            }

            #[inline]
            pub fn distance_to(self, other: Self) -> f64 {
                let du = self.$u - other.$u;
                let dv = self.$v - other.$v;
                (du * du + dv * dv).sqrt()
            }
        }

        impl Add<$vector> for $point {
            type Output = $point;
            #[inline]
            fn add(self, rhs: $vector) -> $point {
                self.add_vector(rhs)
            }
        }

        impl Sub for $point {
            type Output = $vector;
            #[inline]
            fn sub(self, rhs: $point) -> $vector {
                $point::sub(self, rhs)
            }
        }

        impl fmt::Display for $point {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "({}, {})", self.$u, self.$v)
            }
        }

        impl fmt::Display for $vector {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "<{}, {}>", self.$u, self.$v)
            }
        }

        impl $ray {
            /// Ray from `origin` along `direction` (normalized here).
            #[inline]
            pub fn new(origin: $point, direction: $vector) -> Self {
                Self {
                    origin,
                    direction: direction.normalize(),
                }
            }

            #[inline]
            pub fn origin(&self) -> $point {
                self.origin
            }

            /// Unit direction.
            #[inline]
            pub fn direction(&self) -> $vector {
                self.direction
            }

            /// Supporting line in the plane's own coordinates.
            #[inline]
            pub fn line(&self) -> LineEquation {
                LineEquation::from_point_and_deltas(
                    self.origin.$u,
                    self.origin.$v,
                    self.direction.$u,
                    self.direction.$v,
                )
            }

            #[doc = concat!(
                "Point of the supporting line whose `", stringify!($u),
                "` equals the argument; the other coordinate is NaN for a ray",
                " parallel to the second axis."
            )]
            #[inline]
            pub fn get_point(&self, $u: f64) -> $point {
                $point::new($u, self.line().get_y($u))
            }

            /// Ray parameter where the ray meets the line `first axis = at`.
            #[inline]
            pub fn from_vertical_line(&self, at: f64) -> f64 {
                self.get_point(at).sub(self.origin).dot(self.direction)
            }

            /// First-axis coordinate of the ray point at parameter `t`.
            #[inline]
            pub fn map_to_vertical_line(&self, t: f64) -> f64 {
                self.origin.$u + self.direction.$u * t
            }

            /// `origin + direction * t`.
            #[inline]
            pub fn point_at(&self, t: f64) -> $point {
                self.origin.add_vector(self.direction.scale(t))
            }
        }
    };
}

axis_plane!("XZ", PointXZ, VectorXZ, RayXZ, x, z);
axis_plane!("YZ", PointYZ, VectorYZ, RayYZ, y, z);

impl VectorXZ {
    /// Quarter turn counterclockwise: `(x, z) -> (-z, x)`.
    #[inline]
    pub fn rot90(self) -> Self {
        Self::new(-self.z, self.x)
    }
}

impl PointXZ {
    /// Drop the y coordinate.
    #[inline]
    pub fn from_point3(p: Point3<f64>) -> Self {
        Self::new(p.x, p.z)
    }

    #[inline]
    pub fn to_point3(self, y: f64) -> Point3<f64> {
        Point3::new(self.x, y, self.z)
    }
}

impl PointYZ {
    /// Drop the x coordinate.
    #[inline]
    pub fn from_point3(p: Point3<f64>) -> Self {
        Self::new(p.y, p.z)
    }

    #[inline]
    pub fn to_point3(self, x: f64) -> Point3<f64> {
        Point3::new(x, self.y, self.z)
    }
}
