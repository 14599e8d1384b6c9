//! Host-side "Add Ratchet" operation.
//!
//! The core in [`ratchet`](crate::ratchet) is a pure geometry function. This
//! module is the thin layer a host application drives: it owns the values a
//! property panel would edit (name, shape parameters, placement), checks them,
//! runs the builder and hands back a placed [`RatchetMesh`] ready to become a
//! scene object.

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::ratchet::{self, Face, RatchetParams, RatchetTopology, centroid, newell_normal};
use crate::triangulated::{Triangle, Triangulated3D};
use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};
use tracing::{info, warn};

/// Above this many teeth the panel stops offering values; larger still builds.
pub const SOFT_MAX_TEETH: usize = 1000;
/// Soft upper bound for vertices per tooth.
pub const SOFT_MAX_VERT_PER_TOOTH: usize = 100;
/// Soft upper bound for every length parameter.
pub const SOFT_MAX_LENGTH: Real = 1000.0;

/// Values of one "Add Ratchet" invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct AddRatchet {
    /// Name given to the created object.
    pub name: String,
    pub params: RatchetParams,
    /// Where the gear is placed; the identity keeps it centred on the origin.
    pub placement: Isometry3<Real>,
}

impl Default for AddRatchet {
    fn default() -> Self {
        Self {
            name: "Ratchet".to_string(),
            params: RatchetParams::default(),
            placement: Isometry3::identity(),
        }
    }
}

impl AddRatchet {
    pub fn new(params: RatchetParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Move the gear so its centre sits at `(x, y, z)`.
    #[must_use]
    pub fn with_location(mut self, x: Real, y: Real, z: Real) -> Self {
        self.placement.translation = Translation3::new(x, y, z);
        self
    }

    /// Rotate the gear by x, y and z degrees (applied in that order) about its centre.
    #[must_use]
    pub fn with_rotation(mut self, x_deg: Real, y_deg: Real, z_deg: Real) -> Self {
        self.placement.rotation = UnitQuaternion::from_euler_angles(
            x_deg.to_radians(),
            y_deg.to_radians(),
            z_deg.to_radians(),
        );
        self
    }

    /// Reject parameters the builder cannot handle and warn about ones past
    /// the soft maxima.
    pub fn check(&self) -> Result<(), ValidationError> {
        self.params.validate()?;

        if self.params.num_teeth > SOFT_MAX_TEETH {
            warn!(
                "{}: {} teeth exceeds the soft maximum of {}",
                self.name, self.params.num_teeth, SOFT_MAX_TEETH
            );
        }
        if self.params.vert_per_tooth > SOFT_MAX_VERT_PER_TOOTH {
            warn!(
                "{}: {} vertices per tooth exceeds the soft maximum of {}",
                self.name, self.params.vert_per_tooth, SOFT_MAX_VERT_PER_TOOTH
            );
        }
        for (name, value) in self.params.lengths() {
            if value > SOFT_MAX_LENGTH {
                warn!(
                    "{}: {} = {} exceeds the soft maximum of {}",
                    self.name, name, value, SOFT_MAX_LENGTH
                );
            }
        }
        Ok(())
    }

    /// Validate, build and place the gear.
    pub fn execute(&self) -> Result<RatchetMesh, ValidationError> {
        self.check()?;

        let topology = ratchet::build(&self.params);
        let mesh = RatchetMesh::from_topology(self.name.clone(), topology, &self.placement);

        info!(
            "Added {} ({} gear): {} vertices, {} faces",
            mesh.name,
            self.params.internality,
            mesh.vertices.len(),
            mesh.faces.len()
        );

        #[cfg(feature = "hashmap")]
        mesh.edge_report().log(&mesh.name);

        Ok(mesh)
    }
}

/// A named, placed polygon mesh: the object handed to the host scene.
#[derive(Debug, Clone, PartialEq)]
pub struct RatchetMesh {
    pub name: String,
    pub vertices: Vec<Point3<Real>>,
    pub faces: Vec<Face>,
}

impl RatchetMesh {
    /// Take over a built topology, moving every vertex by `placement`.
    pub fn from_topology(
        name: String,
        topology: RatchetTopology,
        placement: &Isometry3<Real>,
    ) -> Self {
        let (vertices, faces) = topology.into_parts();
        let vertices = vertices.into_iter().map(|p| placement * p).collect();
        RatchetMesh {
            name,
            vertices,
            faces,
        }
    }

    /// Unit normal of face `idx`, or zero if the face has no area.
    pub fn face_normal(&self, idx: usize) -> Vector3<Real> {
        newell_normal(&self.vertices, &self.faces[idx])
            .try_normalize(Real::EPSILON)
            .unwrap_or_else(Vector3::zeros)
    }

    pub fn face_centroid(&self, idx: usize) -> Point3<Real> {
        centroid(&self.vertices, &self.faces[idx])
    }

    /// Fan-triangulate every face from its first vertex, keeping the winding.
    pub fn triangulate(&self) -> Vec<[usize; 3]> {
        self.faces
            .iter()
            .flat_map(|face| (1..face.len() - 1).map(move |k| [face[0], face[k], face[k + 1]]))
            .collect()
    }

    /// Count how the faces share their edges.
    ///
    /// An edge used by one face is a boundary edge, by two an interior edge;
    /// anything more is non-manifold. An edge walked in the same direction by
    /// two faces means their windings disagree.
    #[cfg(feature = "hashmap")]
    pub fn edge_report(&self) -> EdgeReport {
        use hashbrown::HashMap;

        let mut directed: HashMap<(usize, usize), u32> = HashMap::new();
        for face in &self.faces {
            for (k, &a) in face.iter().enumerate() {
                let b = face[(k + 1) % face.len()];
                *directed.entry((a, b)).or_insert(0) += 1;
            }
        }

        let mut undirected: HashMap<(usize, usize), u32> = HashMap::new();
        let mut report = EdgeReport::default();
        for (&(a, b), &count) in &directed {
            if count > 1 {
                report.inconsistent_edges += 1;
            }
            *undirected.entry((a.min(b), a.max(b))).or_insert(0) += count;
        }
        for &count in undirected.values() {
            match count {
                1 => report.boundary_edges += 1,
                2 => report.interior_edges += 1,
                _ => report.non_manifold_edges += 1,
            }
        }
        report
    }
}

impl Triangulated3D for RatchetMesh {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut(Triangle),
    {
        for (idx, face) in self.faces.iter().enumerate() {
            let normal = self.face_normal(idx);
            for k in 1..face.len() - 1 {
                f(Triangle {
                    positions: [
                        self.vertices[face[0]],
                        self.vertices[face[k]],
                        self.vertices[face[k + 1]],
                    ],
                    normal,
                });
            }
        }
    }
}

/// Edge usage summary of a [`RatchetMesh`].
#[cfg(feature = "hashmap")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeReport {
    /// Edges used by exactly one face.
    pub boundary_edges: usize,
    /// Edges shared by exactly two faces.
    pub interior_edges: usize,
    /// Edges shared by three or more faces.
    pub non_manifold_edges: usize,
    /// Directed edges walked the same way by more than one face.
    pub inconsistent_edges: usize,
}

#[cfg(feature = "hashmap")]
impl EdgeReport {
    /// No boundary, no non-manifold edges and consistent winding.
    pub const fn is_closed_manifold(&self) -> bool {
        self.boundary_edges == 0 && self.non_manifold_edges == 0 && self.inconsistent_edges == 0
    }

    fn log(&self, name: &str) {
        use tracing::debug;

        if self.non_manifold_edges > 0 || self.inconsistent_edges > 0 {
            warn!(
                "{}: {} non-manifold edges, {} edges with inconsistent winding",
                name, self.non_manifold_edges, self.inconsistent_edges
            );
        }
        debug!(
            "{}: {} boundary edges, {} interior edges",
            name, self.boundary_edges, self.interior_edges
        );
    }
}
