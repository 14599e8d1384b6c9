//! Ratchet gear topology: parameters, ring bookkeeping and the assembler.
//!
//! [`build`] is a pure function of [`RatchetParams`]. It lays out four vertex
//! rings in one buffer
//!
//! ```text
//! [ upper teeth | lower teeth | upper base | lower base ]
//!   n + teeth     n + teeth     n            n           (n = segments)
//! ```
//!
//! and bridges them into faces whose normals point out of the solid. The
//! base rings are not joined to each other, so the bore of an external gear
//! (or the rim of an internal one) stays open.

use crate::errors::ValidationError;
use crate::float_types::{Real, tolerance};
use nalgebra::{Point3, Vector3};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub mod bridge;
pub mod rings;

pub use bridge::{Face, RingLayout};

/// Which way the teeth point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Internality {
    /// Teeth point away from the axis; the base ring is the inner ring.
    #[default]
    External,
    /// Teeth point towards the axis; the base ring is the outer ring.
    Internal,
}

impl std::fmt::Display for Internality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Internality::External => write!(f, "external"),
            Internality::Internal => write!(f, "internal"),
        }
    }
}

/// Contiguous run of one ring's vertices inside the shared vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RingSpan {
    /// Index of the ring's first vertex.
    pub start: usize,
    /// Number of vertices in the ring.
    pub len: usize,
}

impl RingSpan {
    pub const fn new(start: usize, len: usize) -> Self {
        RingSpan { start, len }
    }

    /// Index of the ring's last vertex.
    #[inline]
    pub const fn end(&self) -> usize {
        self.start + self.len - 1
    }

    /// Global index of the `i`th vertex of the ring.
    #[inline]
    pub fn index(&self, i: usize) -> usize {
        debug_assert!(i < self.len, "ring index {i} out of range (len = {})", self.len);
        self.start + i
    }

    /// Whether the global index `idx` belongs to this ring.
    #[inline]
    pub const fn contains(&self, idx: usize) -> bool {
        idx >= self.start && idx < self.start + self.len
    }
}

/// Shape parameters of a ratchet gear.
///
/// The builder assumes `num_teeth >= 3`, `vert_per_tooth >= 2` and
/// non-negative lengths; call [`validate`](Self::validate) on untrusted input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatchetParams {
    /// Number of teeth around the gear.
    pub num_teeth: usize,
    /// Vertices per tooth; more gives a smoother ramp.
    pub vert_per_tooth: usize,
    pub internality: Internality,
    /// Nominal radius where the tooth ramps start.
    pub radius: Real,
    /// Extent of each tooth above the radius.
    pub addendum: Real,
    /// Extent of the base ring below (external) or beyond (internal) the teeth.
    pub base: Real,
    /// Thickness of the gear along Z.
    pub width: Real,
}

impl Default for RatchetParams {
    fn default() -> Self {
        Self {
            num_teeth: 10,
            vert_per_tooth: 4,
            internality: Internality::External,
            radius: 1.0,
            addendum: 0.5,
            base: 0.2,
            width: 0.2,
        }
    }
}

/// Lowest tooth count that still closes a ring.
pub const MIN_TEETH: usize = 3;
/// Lowest vertex count that still gives each tooth a ramp step.
pub const MIN_VERT_PER_TOOTH: usize = 2;

impl RatchetParams {
    #[must_use]
    pub const fn with_num_teeth(mut self, num_teeth: usize) -> Self {
        self.num_teeth = num_teeth;
        self
    }

    #[must_use]
    pub const fn with_vert_per_tooth(mut self, vert_per_tooth: usize) -> Self {
        self.vert_per_tooth = vert_per_tooth;
        self
    }

    #[must_use]
    pub const fn with_internality(mut self, internality: Internality) -> Self {
        self.internality = internality;
        self
    }

    #[must_use]
    pub const fn with_radius(mut self, radius: Real) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub const fn with_addendum(mut self, addendum: Real) -> Self {
        self.addendum = addendum;
        self
    }

    #[must_use]
    pub const fn with_base(mut self, base: Real) -> Self {
        self.base = base;
        self
    }

    #[must_use]
    pub const fn with_width(mut self, width: Real) -> Self {
        self.width = width;
        self
    }

    /// Angular steps around the gear: `(vert_per_tooth - 1) * num_teeth`.
    ///
    /// Also the vertex count of each base ring.
    pub const fn num_segments(&self) -> usize {
        (self.vert_per_tooth - 1) * self.num_teeth
    }

    /// Vertex count of each teeth ring: one crest per tooth on top of the steps.
    pub const fn teeth_ring_len(&self) -> usize {
        self.num_segments() + self.num_teeth
    }

    /// Total vertices in the assembled buffer.
    pub const fn vertex_count(&self) -> usize {
        2 * self.teeth_ring_len() + 2 * self.num_segments()
    }

    /// Total faces: one wall per teeth-ring edge plus one cap face per base step, top and bottom.
    pub const fn face_count(&self) -> usize {
        self.teeth_ring_len() + 2 * self.num_segments()
    }

    /// Radius of the base rings: inside the tooth roots for external gears,
    /// outside the tooth tips for internal ones.
    pub fn base_radius(&self) -> Real {
        match self.internality {
            Internality::External => self.radius - self.base,
            Internality::Internal => self.radius + self.base + self.addendum,
        }
    }

    pub fn half_width(&self) -> Real {
        self.width / 2.0
    }

    /// Check the hard limits the builder relies on.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.num_teeth < MIN_TEETH {
            return Err(ValidationError::TooFewTeeth {
                min: MIN_TEETH,
                actual: self.num_teeth,
            });
        }
        if self.vert_per_tooth < MIN_VERT_PER_TOOTH {
            return Err(ValidationError::TooFewVerticesPerTooth {
                min: MIN_VERT_PER_TOOTH,
                actual: self.vert_per_tooth,
            });
        }
        for (name, value) in self.lengths() {
            if !value.is_finite() {
                return Err(ValidationError::InvalidCoordinate { name, value });
            }
            if value < 0.0 {
                return Err(ValidationError::NegativeDimension { name, value });
            }
        }
        Ok(())
    }

    /// Named length parameters, in panel order.
    pub(crate) const fn lengths(&self) -> [(&'static str, Real); 4] {
        [
            ("radius", self.radius),
            ("base", self.base),
            ("width", self.width),
            ("addendum", self.addendum),
        ]
    }
}

/// Vertex positions and faces of one ratchet gear, with the ring layout
/// they were built from.
#[derive(Debug, Clone, PartialEq)]
pub struct RatchetTopology {
    pub vertices: Vec<Point3<Real>>,
    pub faces: Vec<Face>,
    pub rings: RingLayout,
    pub internality: Internality,
}

impl RatchetTopology {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Hand over the raw `(vertices, faces)` pair.
    pub fn into_parts(self) -> (Vec<Point3<Real>>, Vec<Face>) {
        (self.vertices, self.faces)
    }

    /// Unnormalized Newell normal of face `idx`; its direction follows the winding.
    pub fn face_normal(&self, idx: usize) -> Vector3<Real> {
        newell_normal(&self.vertices, &self.faces[idx])
    }

    pub fn face_centroid(&self, idx: usize) -> Point3<Real> {
        centroid(&self.vertices, &self.faces[idx])
    }

    /// Whether face `idx` has collapsed to (near) zero area.
    pub fn is_degenerate(&self, idx: usize) -> bool {
        self.face_normal(idx).norm() <= tolerance()
    }
}

/// Newell's method: robust normal for planar or slightly non-planar polygons.
pub(crate) fn newell_normal(vertices: &[Point3<Real>], face: &[usize]) -> Vector3<Real> {
    let mut normal = Vector3::zeros();
    for (k, &a) in face.iter().enumerate() {
        let p = vertices[a];
        let q = vertices[face[(k + 1) % face.len()]];
        normal.x += (p.y - q.y) * (p.z + q.z);
        normal.y += (p.z - q.z) * (p.x + q.x);
        normal.z += (p.x - q.x) * (p.y + q.y);
    }
    normal
}

pub(crate) fn centroid(vertices: &[Point3<Real>], face: &[usize]) -> Point3<Real> {
    let sum = face
        .iter()
        .fold(Vector3::zeros(), |acc, &i| acc + vertices[i].coords);
    Point3::from(sum / face.len() as Real)
}

/// Build the vertex buffer and faces of a ratchet gear.
///
/// The gear is centred on the origin, its axis along Z, spanning
/// `-width / 2 ..= width / 2`. Parameters are assumed valid.
pub fn build(params: &RatchetParams) -> RatchetTopology {
    let num_segments = params.num_segments();
    let half_width = params.half_width();

    let mut vertices = Vec::with_capacity(params.vertex_count());
    let mut push_ring = |ring: Vec<Point3<Real>>| {
        let span = RingSpan::new(vertices.len(), ring.len());
        vertices.extend(ring);
        span
    };

    let teeth_ring = |z| {
        rings::generate_teeth(
            params.vert_per_tooth,
            num_segments,
            params.radius,
            params.addendum,
            z,
        )
    };
    let upper_teeth = push_ring(teeth_ring(half_width));
    let lower_teeth = push_ring(teeth_ring(-half_width));

    let base_radius = params.base_radius();
    let upper_base = push_ring(rings::generate_base(base_radius, num_segments, half_width));
    let lower_base = push_ring(rings::generate_base(base_radius, num_segments, -half_width));

    let rings = RingLayout {
        upper_teeth,
        lower_teeth,
        upper_base,
        lower_base,
    };

    let faces = match params.internality {
        Internality::External => bridge::add_faces_external(params.vert_per_tooth, &rings),
        Internality::Internal => bridge::add_faces_internal(params.vert_per_tooth, &rings),
    };

    debug!(
        "Built {} ratchet: {} teeth, {} segments, {} vertices, {} faces",
        params.internality,
        params.num_teeth,
        num_segments,
        vertices.len(),
        faces.len()
    );

    RatchetTopology {
        vertices,
        faces,
        rings,
        internality: params.internality,
    }
}

/// Build independent topologies for a batch of parameter sets.
///
/// Runs on the rayon pool when the `parallel` feature is enabled; output
/// order matches input order either way.
pub fn build_many(params: &[RatchetParams]) -> Vec<RatchetTopology> {
    #[cfg(feature = "parallel")]
    {
        params.par_iter().map(build).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        params.iter().map(build).collect()
    }
}
