//! A trait for any shape which can be represented by triangles

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// One triangle handed to an exporter: corner positions and a unit facet
/// normal (zero for degenerate faces).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub positions: [Point3<Real>; 3],
    pub normal: Vector3<Real>,
}

/// A triangulated 3D surface.
///
/// Anything that can present itself as a bunch of triangles in 3D
/// can automatically use all the triangle-based IO backends.
pub trait Triangulated3D {
    /// Call `f` for each triangle.
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut(Triangle);
}
