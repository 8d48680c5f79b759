//! Canonical mesh normalization.
//!
//! Loaded meshes arrive in arbitrary coordinate frames and scales. This
//! module re-centers a mesh at its vertex centroid and uniformly rescales
//! it so that it fits a cube of half-width 1, which is what the rest of the
//! pipeline (spherical UV projection in particular) assumes.
//!
//! The bounding information is accumulated *during* parsing via [`Bounds`],
//! so normalization never needs a second pass over the raw input. The
//! accumulator is an explicit value threaded through the parse loop and
//! consumed exactly once; it is not persisted on the mesh.

use nalgebra::{Point3, Vector3};

use crate::error::{MeshError, Result};
use crate::mesh::Mesh;

/// Running bounding box, position sum and count for a stream of vertices.
///
/// # Example
///
/// ```
/// use facet::algo::normalize::Bounds;
/// use facet::nalgebra::Point3;
///
/// let mut bounds = Bounds::new();
/// bounds.update(Point3::new(-1.0, 0.0, 0.0));
/// bounds.update(Point3::new(3.0, 2.0, 0.0));
///
/// assert_eq!(bounds.count(), 2);
/// assert_eq!(bounds.center().unwrap(), Point3::new(1.0, 1.0, 0.0));
/// assert_eq!(bounds.half_extent(), 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct Bounds {
    min: Point3<f32>,
    max: Point3<f32>,
    sum: Vector3<f32>,
    count: usize,
}

impl Bounds {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            min: Point3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Point3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
            sum: Vector3::zeros(),
            count: 0,
        }
    }

    /// Accumulate the bounds of an existing vertex buffer.
    ///
    /// Useful for re-normalizing a mesh that was not produced by the
    /// parser (or was already normalized once).
    pub fn of(mesh: &Mesh) -> Self {
        let mut bounds = Self::new();
        for v in &mesh.vertices {
            bounds.update(v.position);
        }
        bounds
    }

    /// Fold one vertex position into the running min/max/sum.
    #[inline]
    pub fn update(&mut self, p: Point3<f32>) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
        self.sum += p.coords;
        self.count += 1;
    }

    /// Number of accumulated positions.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Centroid of the accumulated positions, or `None` if empty.
    pub fn center(&self) -> Option<Point3<f32>> {
        if self.count == 0 {
            return None;
        }
        Some(Point3::from(self.sum / self.count as f32))
    }

    /// Largest per-axis half-extent of the accumulated bounding box.
    ///
    /// Zero (or negative) when no positions were accumulated.
    pub fn half_extent(&self) -> f32 {
        let dx = (self.max.x - self.min.x) / 2.0;
        let dy = (self.max.y - self.min.y) / 2.0;
        let dz = (self.max.z - self.min.z) / 2.0;
        dx.max(dy).max(dz)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-center a mesh at its centroid and rescale it into the unit cube.
///
/// Every position is translated by `-center` and then divided by the
/// largest half-extent of the *pre-centering* bounding box. The same
/// divisor is applied to all three axes, preserving aspect ratio; the
/// dominant axis ends up with a total extent of exactly 2.
///
/// Re-applying with freshly accumulated bounds ([`Bounds::of`]) is a no-op
/// up to floating-point tolerance.
///
/// # Errors
///
/// - [`MeshError::EmptyMesh`] if no vertices were accumulated.
/// - [`MeshError::ZeroExtent`] if all vertices coincide; dividing would
///   produce NaN/Inf.
/// - [`MeshError::NonFinite`] if the input contained values large enough
///   to overflow during rescaling.
pub fn normalize(mesh: &mut Mesh, bounds: &Bounds) -> Result<()> {
    let center = bounds.center().ok_or(MeshError::EmptyMesh)?;
    let half_extent = bounds.half_extent();

    if !half_extent.is_finite() || !center.coords.iter().all(|c| c.is_finite()) {
        return Err(MeshError::NonFinite { what: "bounds" });
    }
    if half_extent <= 0.0 {
        return Err(MeshError::ZeroExtent);
    }

    for v in &mut mesh.vertices {
        v.position = Point3::from((v.position.coords - center.coords) / half_extent);
        if !v.position.coords.iter().all(|c| c.is_finite()) {
            return Err(MeshError::NonFinite {
                what: "vertex position",
            });
        }
    }

    Ok(())
}
