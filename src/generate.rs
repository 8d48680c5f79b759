//! Procedural mesh generation.
//!
//! The demo needs a small marker mesh to draw at each light's position;
//! rather than loading one from disk it builds a parametric UV sphere
//! analytically. Positions and exact unit normals come straight from the
//! spherical-angle lattice, so the mesh bypasses parsing, normalization
//! and normal derivation entirely. No texture coordinates are produced.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use nalgebra::Point3;

use crate::error::{MeshError, Result};
use crate::mesh::{Mesh, Vertex};

/// Build a UV-sphere mesh.
///
/// The vertex lattice is `(vertical_segments + 1) × (horizontal_segments + 1)`;
/// the seam column is duplicated so a renderer can wrap textures without
/// special cases. Each ring pair is stitched with two triangles per quad,
/// except at the poles where the quads collapse and only one triangle is
/// emitted.
///
/// Every vertex carries the analytic normal `position / radius`.
///
/// # Errors
///
/// [`MeshError::InvalidParameter`] for a non-positive radius, fewer than
/// 3 horizontal segments, or fewer than 2 vertical segments.
///
/// # Example
///
/// ```
/// use facet::generate::uv_sphere;
///
/// let sphere = uv_sphere(1.0, 16, 16).unwrap();
/// assert_eq!(sphere.num_vertices(), 17 * 17);
/// ```
pub fn uv_sphere(radius: f32, horizontal_segments: u32, vertical_segments: u32) -> Result<Mesh> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(MeshError::invalid_param(
            "radius",
            radius,
            "must be positive",
        ));
    }
    if horizontal_segments < 3 {
        return Err(MeshError::invalid_param(
            "horizontal_segments",
            horizontal_segments,
            "need at least 3 segments around the equator",
        ));
    }
    if vertical_segments < 2 {
        return Err(MeshError::invalid_param(
            "vertical_segments",
            vertical_segments,
            "need at least 2 segments pole to pole",
        ));
    }

    let horizontal_step = TAU / horizontal_segments as f32;
    let vertical_step = PI / vertical_segments as f32;
    let inv_radius = 1.0 / radius;

    let mut mesh = Mesh::new();
    mesh.vertices
        .reserve(((vertical_segments + 1) * (horizontal_segments + 1)) as usize);

    for vertical_index in 0..=vertical_segments {
        // From +pi/2 at the north pole down to -pi/2.
        let vertical_angle = FRAC_PI_2 - vertical_index as f32 * vertical_step;
        let ring_radius = radius * vertical_angle.cos();
        let z = radius * vertical_angle.sin();

        for horizontal_index in 0..=horizontal_segments {
            let horizontal_angle = horizontal_index as f32 * horizontal_step;

            let position = Point3::new(
                ring_radius * horizontal_angle.cos(),
                ring_radius * horizontal_angle.sin(),
                z,
            );

            let mut vertex = Vertex::new(position);
            vertex.normal = position.coords * inv_radius;
            mesh.vertices.push(vertex);
        }
    }

    for vertical_index in 0..vertical_segments {
        let mut first = vertical_index * (horizontal_segments + 1);
        let mut second = first + horizontal_segments + 1;

        for _ in 0..horizontal_segments {
            // The top ring's upper triangles collapse at the north pole,
            // the bottom ring's lower triangles at the south pole.
            if vertical_index != 0 {
                mesh.push_triangle([first, second, first + 1]);
            }
            if vertical_index != vertical_segments - 1 {
                mesh.push_triangle([first + 1, second, second + 1]);
            }

            first += 1;
            second += 1;
        }
    }

    Ok(mesh)
}
