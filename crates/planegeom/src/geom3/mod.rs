//! Coordinate frames and rays in 3D, and their projection onto axis planes.
//!
//! - `Frame3`: what the axis-plane code needs from a frame: map points and
//!   vectors into the parent space and produce the inverse frame.
//! - `Coord3`: orthonormal frame (origin plus three unit axes).
//! - `Ray3`: origin plus direction; `to_xz` / `to_yz` drop one coordinate and
//!   hand the rest to `crate::axis`.

use nalgebra::{Point3, Vector3};

use crate::axis::{PointXZ, PointYZ, RayXZ, RayYZ, VectorXZ, VectorYZ};

/// Frame composition used by rays and points.
pub trait Frame3: Sized {
    /// Local point -> parent point.
    fn transform_point(&self, p: Point3<f64>) -> Point3<f64>;
    /// Local vector -> parent vector (no translation).
    fn transform_vector(&self, v: Vector3<f64>) -> Vector3<f64>;
    /// Inverse frame: parent -> local.
    fn reversed(&self) -> Self;
}

/// Orthonormal coordinate frame.
///
/// Invariants:
/// - `x`, `y`, `z` are unit length and mutually orthogonal; `reversed` relies
///   on this and is wrong otherwise. Not checked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord3 {
    pub origin: Point3<f64>,
    pub x: Vector3<f64>,
    pub y: Vector3<f64>,
    pub z: Vector3<f64>,
}

impl Coord3 {
    #[inline]
    pub fn new(origin: Point3<f64>, x: Vector3<f64>, y: Vector3<f64>, z: Vector3<f64>) -> Self {
        Self { origin, x, y, z }
    }

    /// World frame: origin at zero, standard axes.
    #[inline]
    pub fn world() -> Self {
        Self::new(Point3::origin(), Vector3::x(), Vector3::y(), Vector3::z())
    }

    /// World axes moved to `origin`.
    #[inline]
    pub fn at(origin: Point3<f64>) -> Self {
        Self {
            origin,
            ..Self::world()
        }
    }
}

impl Default for Coord3 {
    fn default() -> Self {
        Self::world()
    }
}

impl Frame3 for Coord3 {
    #[inline]
    fn transform_point(&self, p: Point3<f64>) -> Point3<f64> {
        self.origin + self.transform_vector(p.coords)
    }

    #[inline]
    fn transform_vector(&self, v: Vector3<f64>) -> Vector3<f64> {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    fn reversed(&self) -> Self {
        // transposed basis: rows of [x y z] become the new axes
        let x = Vector3::new(self.x.x, self.y.x, self.z.x);
        let y = Vector3::new(self.x.y, self.y.y, self.z.y);
        let z = Vector3::new(self.x.z, self.y.z, self.z.z);
        let o = self.origin.coords;
        let origin = Point3::new(-self.x.dot(&o), -self.y.dot(&o), -self.z.dot(&o));
        Self { origin, x, y, z }
    }
}

/// Ray in 3D. The direction is kept as given.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray3 {
    pub origin: Point3<f64>,
    pub direction: Vector3<f64>,
}

impl Ray3 {
    #[inline]
    pub fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self { origin, direction }
    }

    /// Ray expressed in the parent space of `frame`.
    #[inline]
    pub fn transformed<F: Frame3>(&self, frame: &F) -> Ray3 {
        Ray3::new(
            frame.transform_point(self.origin),
            frame.transform_vector(self.direction),
        )
    }

    /// Projection onto the XZ plane (y dropped, direction renormalized).
    #[inline]
    pub fn to_xz(&self) -> RayXZ {
        RayXZ::new(
            PointXZ::from_point3(self.origin),
            VectorXZ::new(self.direction.x, self.direction.z),
        )
    }

    /// Projection onto the YZ plane (x dropped, direction renormalized).
    #[inline]
    pub fn to_yz(&self) -> RayYZ {
        RayYZ::new(
            PointYZ::from_point3(self.origin),
            VectorYZ::new(self.direction.y, self.direction.z),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn rotated_frame() -> Coord3 {
        // quarter turn about z, moved to (1, 2, 3)
        Coord3::new(
            Point3::new(1.0, 2.0, 3.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        )
    }

    #[test]
    fn frame_maps_points_and_vectors() {
        let f = rotated_frame();
        assert_eq!(f.transform_point(Point3::new(1.0, 0.0, 0.0)), Point3::new(1.0, 3.0, 3.0));
        assert_eq!(f.transform_vector(Vector3::new(1.0, 0.0, 0.0)), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(Coord3::world().transform_point(Point3::new(4.0, 5.0, 6.0)), Point3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn reversed_frame_undoes_the_frame() {
        let f = rotated_frame();
        let r = f.reversed();
        let p = Point3::new(-2.0, 0.5, 7.0);
        let back = r.transform_point(f.transform_point(p));
        assert!((back - p).norm() < 1e-12);
        let v = Vector3::new(0.3, -0.4, 1.0);
        assert!((r.transform_vector(f.transform_vector(v)) - v).norm() < 1e-12);
        assert_eq!(Coord3::at(Point3::new(1.0, 1.0, 1.0)).reversed().origin, Point3::new(-1.0, -1.0, -1.0));
    }

    #[test]
    fn ray_projects_onto_axis_planes() {
        let ray = Ray3::new(Point3::new(1.0, 2.0, 3.0), Vector3::new(1.0, 5.0, 1.0));
        let xz = ray.to_xz();
        assert_eq!(xz.origin(), PointXZ::new(1.0, 3.0));
        assert!((xz.direction().x - FRAC_1_SQRT_2).abs() < 1e-15);
        assert!((xz.get_point(4.0).z - 6.0).abs() < 1e-12);

        let yz = ray.to_yz();
        assert_eq!(yz.origin(), PointYZ::new(2.0, 3.0));
        assert!((yz.get_point(7.0).z - 4.0).abs() < 1e-12);
    }

    #[test]
    fn ray_through_frame_then_projection() {
        let local = Ray3::new(Point3::origin(), Vector3::new(1.0, 0.0, 1.0));
        let world = local.transformed(&rotated_frame());
        assert_eq!(world.origin, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(world.direction, Vector3::new(0.0, 1.0, 1.0));
        // local x became world y, so the YZ projection carries the slope
        let yz = world.to_yz();
        assert!((yz.get_point(4.0).z - 5.0).abs() < 1e-12);
        assert!(world.to_xz().direction().x == 0.0);
    }
}
