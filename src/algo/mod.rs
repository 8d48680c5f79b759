//! Geometry derivation algorithms.
//!
//! This module contains the passes that turn a freshly parsed mesh into
//! render-ready data:
//!
//! - **Normalization**: re-centering and uniform rescaling into the
//!   canonical unit-cube frame
//! - **Normals**: per-face and per-vertex normal derivation, plus the
//!   normal-visualization line buffers
//! - **Projection**: planar, cylindrical and spherical UV mapping over
//!   position or normal vectors
//!
//! Normalization and normal generation run once per load;
//! [`project::project_uvs`] is re-run on demand whenever the selected
//! method or source vector changes.

pub mod normalize;
pub mod normals;
pub mod project;
