use crate::adapter::RatchetMesh;
use crate::io::IoError;
use crate::triangulated::Triangulated3D;
use std::io::Cursor;

/// Export to ASCII STL
/// Convert a triangulated shape to an **ASCII STL** string with the given `name`.
///
/// ```rust
/// # use ratchet_gear::adapter::AddRatchet;
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mesh = AddRatchet::default().execute()?;
/// let text = mesh.to_stl_ascii("ratchet");
/// assert!(text.starts_with("solid ratchet"));
/// # Ok(())
/// # }
/// ```
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    shape.visit_triangles(|tri| {
        let n = tri.normal;
        out.push_str(&format!(
            "  facet normal {:.6} {:.6} {:.6}\n",
            n.x, n.y, n.z
        ));
        out.push_str("    outer loop\n");
        for p in &tri.positions {
            out.push_str(&format!(
                "      vertex {:.6} {:.6} {:.6}\n",
                p.x, p.y, p.z
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// The resulting `Vec<u8>` can then be written to a file or handled in memory:
///
/// ```rust
/// # use ratchet_gear::adapter::AddRatchet;
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mesh = AddRatchet::default().execute()?;
/// let bytes = mesh.to_stl_binary()?;
/// // 80 byte header + triangle count
/// assert!(bytes.len() > 84);
/// # Ok(())
/// # }
/// ```
pub fn to_stl_binary<T: Triangulated3D>(shape: &T) -> Result<Vec<u8>, IoError> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    let mut triangles = Vec::<Triangle>::new();

    shape.visit_triangles(|tri| {
        let n = tri.normal;
        #[allow(clippy::unnecessary_cast)]
        {
            triangles.push(Triangle {
                normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: tri
                    .positions
                    .map(|p| Vertex::new([p.x as f32, p.y as f32, p.z as f32])),
            });
        }
    });

    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

impl RatchetMesh {
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }
    pub fn to_stl_binary(&self) -> Result<Vec<u8>, IoError> {
        self::to_stl_binary(self)
    }
}
