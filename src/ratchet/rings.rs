//! Vertex rings traced around the gear axis.
//!
//! Every ring lies in a plane of constant `z` and is ordered by increasing
//! angle, starting on the +X axis. Face construction in
//! [`bridge`](super::bridge) relies on that ordering.

use crate::float_types::{Real, TAU};
use nalgebra::Point3;

/// Point at `radius` and `angle` (radians) around the Z axis, lifted to `z`.
#[inline]
pub fn polar_coords(radius: Real, angle: Real, z: Real) -> Point3<Real> {
    Point3::new(radius * angle.cos(), radius * angle.sin(), z)
}

/// Angle of step `i` when a full turn is split into `num_segments` steps.
#[inline]
fn step_angle(i: usize, num_segments: usize) -> Real {
    i as Real * TAU / num_segments as Real
}

/// Trace the sawtooth tooth profile at height `z`.
///
/// The turn is split into `num_segments` steps and each tooth spans
/// `vert_per_tooth - 1` of them. Within a tooth the radius ramps linearly
/// from `radius` towards `radius + addendum`; at the first step of every
/// tooth a crest vertex at full `radius + addendum` is emitted *before* the
/// regular vertex, giving the flat drop-off face of the ratchet.
///
/// Returns `num_segments + num_teeth` points: one crest per tooth plus one
/// regular vertex per step.
///
/// `vert_per_tooth` must be at least 2.
pub fn generate_teeth(
    vert_per_tooth: usize,
    num_segments: usize,
    radius: Real,
    addendum: Real,
    z: Real,
) -> Vec<Point3<Real>> {
    let period = vert_per_tooth - 1;
    let mut verts = Vec::with_capacity(num_segments + num_segments / period);

    for i in 0..num_segments {
        let angle = step_angle(i, num_segments);
        let phase = i % period;
        if phase == 0 {
            verts.push(polar_coords(radius + addendum, angle, z));
        }
        let radius_offset = (phase as Real / period as Real) * addendum;
        verts.push(polar_coords(radius + radius_offset, angle, z));
    }
    verts
}

/// Plain circle of `num_segments` points at `radius` and height `z`.
///
/// Index `i` of the returned ring sits at the same angle as step `i` of the
/// teeth ring, so base and teeth rings stay aligned around the circle.
pub fn generate_base(radius: Real, num_segments: usize, z: Real) -> Vec<Point3<Real>> {
    (0..num_segments)
        .map(|i| polar_coords(radius, step_angle(i, num_segments), z))
        .collect()
}
