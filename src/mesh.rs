//! Core mesh data structures.
//!
//! This module provides the face-vertex mesh representation used throughout
//! the library: a vertex buffer, a flat triangle index buffer, and the two
//! derived line buffers used for normal visualization.
//!
//! # Overview
//!
//! A [`Mesh`] is plain indexed triangle geometry. Unlike adjacency-heavy
//! representations (half-edge and friends), the buffers here are laid out
//! exactly the way the render layer uploads them: `vertices` maps one-to-one
//! onto a GPU vertex buffer, `indices` onto an element buffer where every 3
//! consecutive entries form one triangle.
//!
//! Vertices are created by the parser (or the sphere generator) with only
//! their position populated; [`crate::algo::normals`] fills in normals and
//! [`crate::algo::project`] fills in texture coordinates, both in place.
//!
//! # Invariants
//!
//! - Every entry of `indices` is `< vertices.len()`.
//! - `indices.len()` is a multiple of 3.
//!
//! Both are upheld by the constructors in this crate and checked by
//! [`Mesh::validate`].

use nalgebra::{Point2, Point3, Vector3};

use crate::error::{MeshError, Result};

/// A single mesh vertex: position, normal, and texture coordinate.
///
/// Only the position is meaningful straight out of the parser; the normal
/// and texture coordinate start zeroed and are derived afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in model space (canonically within the unit cube).
    pub position: Point3<f32>,
    /// Unit vertex normal, averaged from adjacent face normals.
    pub normal: Vector3<f32>,
    /// 2D texture coordinate assigned by a UV projection.
    pub tex_coord: Point2<f32>,
}

impl Vertex {
    /// Create a vertex at `position` with zeroed normal and texture coordinate.
    pub fn new(position: Point3<f32>) -> Self {
        Self {
            position,
            normal: Vector3::zeros(),
            tex_coord: Point2::origin(),
        }
    }
}

/// A 3D line segment, used only for normal visualization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Segment start point.
    pub start: Point3<f32>,
    /// Segment end point.
    pub end: Point3<f32>,
}

/// Indexed triangle geometry plus derived normal-visualization buffers.
///
/// Each loaded file (or procedural generation) produces one independent
/// `Mesh`; meshes never share or reference each other's buffers.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex buffer, in parse/generation order.
    pub vertices: Vec<Vertex>,
    /// Flat triangle index buffer; every 3 consecutive entries form one
    /// triangle.
    pub indices: Vec<u32>,
    /// One segment per triangle: centroid to centroid + face normal.
    pub face_normal_lines: Vec<LineSegment>,
    /// One segment per vertex: position to position + vertex normal.
    pub vertex_normal_lines: Vec<LineSegment>,
}

impl Mesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Append one triangle to the index buffer.
    #[inline]
    pub fn push_triangle(&mut self, triangle: [u32; 3]) {
        self.indices.extend_from_slice(&triangle);
    }

    /// Iterate over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
    }

    /// Check the index-buffer invariants.
    ///
    /// Returns an error if the index buffer length is not a multiple of 3
    /// or any index falls outside the vertex buffer.
    pub fn validate(&self) -> Result<()> {
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::invalid_param(
                "indices",
                self.indices.len(),
                "index buffer length must be a multiple of 3",
            ));
        }
        for (face, triangle) in self.triangles().enumerate() {
            for index in triangle {
                if index as usize >= self.vertices.len() {
                    return Err(MeshError::InvalidVertexIndex {
                        face,
                        vertex: index as usize,
                    });
                }
            }
        }
        Ok(())
    }

    /// Compute the axis-aligned bounding box of the vertex positions.
    ///
    /// Returns `None` if the mesh is empty.
    pub fn bounding_box(&self) -> Option<(Point3<f32>, Point3<f32>)> {
        let first = self.vertices.first()?.position;
        let mut min = first;
        let mut max = first;

        for v in &self.vertices {
            let p = v.position;
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.vertices.push(Vertex::new(Point3::new(0.0, 0.0, 0.0)));
        mesh.vertices.push(Vertex::new(Point3::new(1.0, 0.0, 0.0)));
        mesh.vertices.push(Vertex::new(Point3::new(0.0, 1.0, 0.0)));
        mesh.push_triangle([0, 1, 2]);
        mesh
    }

    #[test]
    fn test_counts() {
        let mesh = triangle_mesh();
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_triangles(), 1);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn test_triangles_iterator() {
        let mut mesh = triangle_mesh();
        mesh.vertices.push(Vertex::new(Point3::new(1.0, 1.0, 0.0)));
        mesh.push_triangle([0, 2, 3]);

        let triangles: Vec<_> = mesh.triangles().collect();
        assert_eq!(triangles, vec![[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn test_validate_ok() {
        assert!(triangle_mesh().validate().is_ok());
    }

    #[test]
    fn test_validate_out_of_range() {
        let mut mesh = triangle_mesh();
        mesh.push_triangle([0, 1, 7]);
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::InvalidVertexIndex { .. })
        ));
    }

    #[test]
    fn test_validate_partial_triangle() {
        let mut mesh = triangle_mesh();
        mesh.indices.push(0);
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn test_bounding_box() {
        let mesh = triangle_mesh();
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(max, Point3::new(1.0, 1.0, 0.0));

        assert!(Mesh::new().bounding_box().is_none());
    }
}
