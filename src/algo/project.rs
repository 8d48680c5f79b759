//! UV texture projection.
//!
//! Three interchangeable projections assign a 2D texture coordinate to
//! every vertex from either its position or its normal. All of them are
//! stateless, operate on the full vertex buffer in place, and are
//! idempotent. The demo re-invokes them whenever the user flips the
//! method or the source vector, without re-parsing or re-normalizing.
//!
//! The math assumes the mesh has been normalized into the unit cube
//! (positions in `[-1, 1]`), which is what [`crate::io::obj::load`]
//! guarantees.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use nalgebra::{Point2, Vector3};

use crate::mesh::{Mesh, Vertex};

/// Texture projection method, selected at runtime by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Cube-face projection along the dominant axis of the source vector.
    Planar,
    /// Cylindrical coordinates around the z axis.
    Cylindrical,
    /// Spherical coordinates on the bounding cube's circumscribed sphere.
    Spherical,
}

/// Which per-vertex vector feeds the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvSource {
    /// Project the vertex position.
    Position,
    /// Project the vertex normal.
    Normal,
}

/// Radius of the sphere circumscribing the `[-1, 1]` bounding cube.
const CIRCUMSPHERE_RADIUS: f32 = 1.732_050_8; // sqrt(3)

/// Assign texture coordinates to every vertex of `mesh`.
///
/// # Example
///
/// ```no_run
/// use facet::algo::project::{project_uvs, Projection, UvSource};
/// use facet::io::obj;
///
/// let mut mesh = obj::load("model.obj").unwrap();
/// project_uvs(&mut mesh, Projection::Spherical, UvSource::Position);
/// ```
pub fn project_uvs(mesh: &mut Mesh, projection: Projection, source: UvSource) {
    match projection {
        Projection::Planar => apply(mesh, source, planar),
        Projection::Cylindrical => apply(mesh, source, cylindrical),
        Projection::Spherical => apply(mesh, source, spherical),
    }
}

fn apply(mesh: &mut Mesh, source: UvSource, map: fn(Vector3<f32>) -> Point2<f32>) {
    for v in &mut mesh.vertices {
        v.tex_coord = map(source_vector(v, source));
    }
}

fn source_vector(v: &Vertex, source: UvSource) -> Vector3<f32> {
    match source {
        UvSource::Position => v.position.coords,
        UvSource::Normal => v.normal,
    }
}

/// Cube-face projection: pick the dominant axis of `p` by absolute value
/// (ties broken X, then Y, then Z), project onto the remaining two axes
/// with a sign-dependent flip keeping the mapping continuous across each
/// cube face, and remap from `[-1, 1]` to `[0, 1]`.
fn planar(p: Vector3<f32>) -> Point2<f32> {
    let abs_x = p.x.abs();
    let abs_y = p.y.abs();
    let abs_z = p.z.abs();

    let (u, v) = if abs_x >= abs_y && abs_x >= abs_z {
        // +-X face
        let u = if p.x < 0.0 { p.z } else { -p.z };
        (u, p.y)
    } else if abs_y >= abs_x && abs_y >= abs_z {
        // +-Y face
        let v = if p.y < 0.0 { p.z } else { -p.z };
        (p.x, v)
    } else {
        // +-Z face
        let u = if p.z < 0.0 { -p.x } else { p.x };
        (u, p.y)
    };

    Point2::new(0.5 * (u + 1.0), 0.5 * (v + 1.0))
}

/// Cylindrical projection: `u = atan(y/x) / 2π`, `v = (z + 1) / 2`.
fn cylindrical(p: Vector3<f32>) -> Point2<f32> {
    Point2::new(azimuth(p) / TAU, (p.z + 1.0) / 2.0)
}

/// Spherical projection on the circumscribed sphere of radius √3:
/// `u = atan(y/x) / 2π`, `v = acos(z/r) / π`.
fn spherical(p: Vector3<f32>) -> Point2<f32> {
    let polar = (p.z / CIRCUMSPHERE_RADIUS).clamp(-1.0, 1.0).acos();
    Point2::new(azimuth(p) / TAU, polar / PI)
}

/// `atan(y/x)` with the `x == 0` pole pinned to ±π/2 (0 at the origin)
/// so the singularity never yields NaN.
fn azimuth(p: Vector3<f32>) -> f32 {
    if p.x == 0.0 {
        if p.y == 0.0 {
            0.0
        } else {
            FRAC_PI_2.copysign(p.y)
        }
    } else {
        (p.y / p.x).atan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    const EPS: f32 = 1e-6;

    fn quad_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        for p in [
            [1.0, 0.0, 0.0],
            [0.8, 0.4, -0.6],
            [-1.0, 0.3, 0.2],
            [0.1, -0.9, 0.5],
        ] {
            mesh.vertices
                .push(Vertex::new(Point3::new(p[0], p[1], p[2])));
        }
        mesh.push_triangle([0, 1, 2]);
        mesh
    }

    #[test]
    fn test_planar_positive_x_face() {
        // For p.x >= 0 dominant: u = 0.5*(-p.z + 1), v = 0.5*(p.y + 1).
        let uv = planar(Vector3::new(1.0, 0.0, 0.0));
        assert!((uv.x - 0.5).abs() < EPS);
        assert!((uv.y - 0.5).abs() < EPS);

        let uv = planar(Vector3::new(0.8, 0.4, -0.6));
        assert!((uv.x - 0.5 * (0.6 + 1.0)).abs() < EPS);
        assert!((uv.y - 0.5 * (0.4 + 1.0)).abs() < EPS);
    }

    #[test]
    fn test_planar_negative_x_face() {
        let uv = planar(Vector3::new(-0.9, 0.2, 0.4));
        assert!((uv.x - 0.5 * (0.4 + 1.0)).abs() < EPS);
        assert!((uv.y - 0.5 * (0.2 + 1.0)).abs() < EPS);
    }

    #[test]
    fn test_planar_y_and_z_faces() {
        // +Y dominant: u = x, v = -z.
        let uv = planar(Vector3::new(0.1, 0.9, 0.3));
        assert!((uv.x - 0.5 * (0.1 + 1.0)).abs() < EPS);
        assert!((uv.y - 0.5 * (-0.3 + 1.0)).abs() < EPS);

        // -Z dominant: u = -x, v = y.
        let uv = planar(Vector3::new(0.2, 0.1, -0.8));
        assert!((uv.x - 0.5 * (-0.2 + 1.0)).abs() < EPS);
        assert!((uv.y - 0.5 * (0.1 + 1.0)).abs() < EPS);
    }

    #[test]
    fn test_planar_tie_breaks_toward_x() {
        // |x| == |y|: X wins by evaluation order.
        let uv = planar(Vector3::new(1.0, 1.0, 0.0));
        let expected = planar(Vector3::new(1.0, 0.99, 0.0));
        // Same face as a clearly-X-dominant neighbor.
        assert!((uv.x - 0.5).abs() < EPS);
        assert!((expected.x - 0.5).abs() < EPS);
    }

    #[test]
    fn test_cylindrical() {
        let uv = cylindrical(Vector3::new(1.0, 1.0, 0.0));
        assert!((uv.x - (1.0f32.atan() / TAU)).abs() < EPS);
        assert!((uv.y - 0.5).abs() < EPS);

        let uv = cylindrical(Vector3::new(1.0, 0.0, 1.0));
        assert!((uv.y - 1.0).abs() < EPS);
    }

    #[test]
    fn test_spherical() {
        let uv = spherical(Vector3::new(1.0, 0.0, 0.0));
        assert!((uv.x - 0.0).abs() < EPS);
        // z = 0: acos(0)/pi = 0.5.
        assert!((uv.y - 0.5).abs() < EPS);

        let uv = spherical(Vector3::new(0.5, 0.0, 1.0));
        let expected = (1.0 / CIRCUMSPHERE_RADIUS).acos() / PI;
        assert!((uv.y - expected).abs() < EPS);
    }

    #[test]
    fn test_pole_does_not_trap() {
        for p in [
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, -1.0, 0.5),
            Vector3::new(0.0, 0.0, 0.0),
        ] {
            let uv = cylindrical(p);
            assert!(uv.x.is_finite() && uv.y.is_finite());
            let uv = spherical(p);
            assert!(uv.x.is_finite() && uv.y.is_finite());
        }
        assert!((azimuth(Vector3::new(0.0, 1.0, 0.0)) - FRAC_PI_2).abs() < EPS);
        assert!((azimuth(Vector3::new(0.0, -1.0, 0.0)) + FRAC_PI_2).abs() < EPS);
        assert_eq!(azimuth(Vector3::zeros()), 0.0);
    }

    #[test]
    fn test_idempotent() {
        for projection in [
            Projection::Planar,
            Projection::Cylindrical,
            Projection::Spherical,
        ] {
            let mut mesh = quad_mesh();
            project_uvs(&mut mesh, projection, UvSource::Position);
            let first: Vec<_> = mesh.vertices.iter().map(|v| v.tex_coord).collect();

            project_uvs(&mut mesh, projection, UvSource::Position);
            for (a, v) in first.iter().zip(&mesh.vertices) {
                assert_eq!(*a, v.tex_coord);
            }
        }
    }

    #[test]
    fn test_source_vector_flag() {
        let mut mesh = quad_mesh();
        for v in &mut mesh.vertices {
            v.normal = Vector3::new(0.0, 0.0, 1.0);
        }
        project_uvs(&mut mesh, Projection::Planar, UvSource::Normal);

        // All normals identical: all texture coordinates identical too.
        let first = mesh.vertices[0].tex_coord;
        for v in &mesh.vertices {
            assert_eq!(v.tex_coord, first);
        }
        // +Z face of the unit normal: u = 0.5, v = 0.5.
        assert!((first.x - 0.5).abs() < EPS);
        assert!((first.y - 0.5).abs() < EPS);
    }
}
