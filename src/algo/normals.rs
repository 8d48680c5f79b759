//! Face and vertex normal generation.
//!
//! Input files carry no normals; everything is derived from triangle
//! topology. Face normals come from the cross product of the triangle's
//! edge vectors, in the winding order the face was declared with; no
//! attempt is made to detect or correct inward-facing winding. Vertex
//! normals are the normalized average of all adjacent face normals,
//! accumulated through a per-vertex sum + hit-count table.
//!
//! As a side product the two visualization line buffers are rebuilt: one
//! unit-length segment per triangle (centroid to centroid + face normal)
//! and one per vertex (position to position + vertex normal).

use nalgebra::{Point3, Vector3};
use tracing::warn;

use crate::mesh::{LineSegment, Mesh};

/// Cross products with squared norm at or below this are treated as
/// degenerate (zero-area triangles).
const DEGENERATE_EPS: f32 = 1e-12;

#[derive(Clone, Copy)]
struct VertexHit {
    normal_sum: Vector3<f32>,
    hit_count: u32,
}

impl Default for VertexHit {
    fn default() -> Self {
        Self {
            normal_sum: Vector3::zeros(),
            hit_count: 0,
        }
    }
}

/// Derive face and vertex normals, rebuilding both line buffers.
///
/// Degenerate triangles (zero area) and vertices referenced by no triangle
/// get a zero normal and a diagnostic instead of poisoning the buffers
/// with NaN.
///
/// # Example
///
/// ```
/// use facet::algo::normals;
/// use facet::mesh::{Mesh, Vertex};
/// use facet::nalgebra::Point3;
///
/// let mut mesh = Mesh::new();
/// mesh.vertices.push(Vertex::new(Point3::new(0.0, 0.0, 0.0)));
/// mesh.vertices.push(Vertex::new(Point3::new(1.0, 0.0, 0.0)));
/// mesh.vertices.push(Vertex::new(Point3::new(0.0, 1.0, 0.0)));
/// mesh.push_triangle([0, 1, 2]);
///
/// normals::generate(&mut mesh);
/// assert_eq!(mesh.vertices[0].normal.z, 1.0);
/// ```
pub fn generate(mesh: &mut Mesh) {
    let face_count = mesh.num_triangles();
    let mut hits = vec![VertexHit::default(); mesh.vertices.len()];

    mesh.face_normal_lines.clear();
    mesh.face_normal_lines.reserve(face_count);

    for face in 0..face_count {
        let i0 = mesh.indices[3 * face] as usize;
        let i1 = mesh.indices[3 * face + 1] as usize;
        let i2 = mesh.indices[3 * face + 2] as usize;

        let v0 = mesh.vertices[i0].position;
        let v1 = mesh.vertices[i1].position;
        let v2 = mesh.vertices[i2].position;

        let e01 = v1 - v0;
        let e02 = v2 - v0;
        let cross = e01.cross(&e02);

        let face_normal = if cross.norm_squared() > DEGENERATE_EPS {
            cross.normalize()
        } else {
            warn!(face, "degenerate triangle, face normal set to zero");
            Vector3::zeros()
        };

        let centroid = Point3::from((v0.coords + v1.coords + v2.coords) / 3.0);
        mesh.face_normal_lines.push(LineSegment {
            start: centroid,
            end: centroid + face_normal,
        });

        for i in [i0, i1, i2] {
            hits[i].normal_sum += face_normal;
            hits[i].hit_count += 1;
        }
    }

    mesh.vertex_normal_lines.clear();
    mesh.vertex_normal_lines.reserve(mesh.vertices.len());

    for (index, v) in mesh.vertices.iter_mut().enumerate() {
        let hit = hits[index];
        v.normal = if hit.hit_count == 0 {
            warn!(vertex = index, "vertex not referenced by any face");
            Vector3::zeros()
        } else {
            let average = hit.normal_sum / hit.hit_count as f32;
            if average.norm_squared() > DEGENERATE_EPS {
                average.normalize()
            } else {
                // Opposing face normals can cancel exactly.
                warn!(vertex = index, "adjacent face normals cancel");
                Vector3::zeros()
            }
        };

        mesh.vertex_normal_lines.push(LineSegment {
            start: v.position,
            end: v.position + v.normal,
        });
    }
}
