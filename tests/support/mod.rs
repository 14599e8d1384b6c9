//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use nalgebra::{Point3, Vector3};
use ratchet_gear::{RatchetTopology, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Distance of `p` from the Z axis.
pub fn radial_distance(p: &Point3<Real>) -> Real {
    (p.x * p.x + p.y * p.y).sqrt()
}

/// Cosine between face `idx`'s normal and the radial direction through its
/// centroid: positive when the face looks away from the axis, negative when
/// it looks towards it, zero for faces in a plane through the axis.
pub fn radial_alignment(gear: &RatchetTopology, idx: usize) -> Real {
    let normal = gear.face_normal(idx);
    let c = gear.face_centroid(idx);
    let radial = Vector3::new(c.x, c.y, 0.0);
    match (normal.try_normalize(1e-12), radial.try_normalize(1e-12)) {
        (Some(n), Some(r)) => n.dot(&r),
        _ => 0.0,
    }
}

/// Z component of face `idx`'s unit normal.
pub fn vertical_alignment(gear: &RatchetTopology, idx: usize) -> Real {
    gear.face_normal(idx)
        .try_normalize(1e-12)
        .map(|n| n.z)
        .unwrap_or(0.0)
}

/// Face index ranges of an assembled gear: side walls, upper cap, lower cap.
pub fn face_sections(
    gear: &RatchetTopology,
) -> (std::ops::Range<usize>, std::ops::Range<usize>, std::ops::Range<usize>) {
    let walls = gear.rings.upper_teeth.len;
    let cap = gear.rings.upper_base.len;
    (0..walls, walls..walls + cap, walls + cap..walls + 2 * cap)
}
