//! # Facet
//!
//! Mesh ingestion and geometry derivation for an interactive shading demo.
//!
//! Facet turns OBJ-like model files into render-ready indexed triangle
//! meshes: it parses vertex and face lines, normalizes the result into a
//! canonical unit-cube frame, derives face and vertex normals from
//! topology alone, and assigns texture coordinates through three
//! runtime-selectable projections. A small procedural generator builds the
//! UV-sphere marker mesh the demo draws at each light's position.
//!
//! ## Features
//!
//! - **Streaming ingestion**: bounding box and centroid accumulate during
//!   the parse pass, so normalization needs no second sweep
//! - **Tolerant parsing**: malformed lines are skipped with a diagnostic;
//!   only I/O failures abort a load
//! - **Derived normals**: per-face and averaged per-vertex normals, plus
//!   line buffers for visualizing both
//! - **Swappable UV projection**: planar, cylindrical or spherical, over
//!   positions or normals, re-applied in place on demand
//! - **Light configuration**: the demo's 16-light ring, orbits and presets
//!   as plain data
//!
//! ## Quick Start
//!
//! ```no_run
//! use facet::prelude::*;
//!
//! // Load a mesh: parse + normalize + derive normals.
//! let mut mesh = facet::io::obj::load("model.obj").unwrap();
//!
//! println!("Vertices: {}", mesh.num_vertices());
//! println!("Triangles: {}", mesh.num_triangles());
//!
//! // Assign texture coordinates; call again any time the UI changes the
//! // method or source.
//! project_uvs(&mut mesh, Projection::Spherical, UvSource::Position);
//!
//! // The light-marker mesh.
//! let marker = uv_sphere(0.1, 16, 16).unwrap();
//! assert!(marker.validate().is_ok());
//! ```
//!
//! The render layer uploads `mesh.vertices`, `mesh.indices` and the two
//! normal-line buffers verbatim; nothing in this crate touches a
//! graphics-API handle.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod generate;
pub mod io;
pub mod light;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use facet::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::normalize::{normalize, Bounds};
    pub use crate::algo::normals;
    pub use crate::algo::project::{project_uvs, Projection, UvSource};
    pub use crate::error::{MeshError, Result};
    pub use crate::generate::uv_sphere;
    pub use crate::light::{Light, LightPreset, LightType, ShadingModel, MAX_LIGHTS};
    pub use crate::mesh::{LineSegment, Mesh, Vertex};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
