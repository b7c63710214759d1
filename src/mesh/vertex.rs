//! Vertex storage for [`BMesh`](super::BMesh).

use super::element::{EdgeId, FaceId};
use crate::float_types::Real;
use nalgebra::Point3;

/// A mesh vertex: its position plus back-references to every edge and face using it.
#[derive(Debug, Clone, PartialEq)]
pub struct BVert {
    pub pos: Point3<Real>,
    pub(crate) edges: Vec<EdgeId>,
    pub(crate) faces: Vec<FaceId>,
    pub select: bool,
}

impl BVert {
    /// Create a new unlinked vertex with sanitized coordinates
    pub fn new(mut pos: Point3<Real>) -> Self {
        // Sanitise position
        for c in pos.coords.iter_mut() {
            if !c.is_finite() {
                *c = 0.0;
            }
        }

        BVert {
            pos,
            edges: Vec::new(),
            faces: Vec::new(),
            select: false,
        }
    }

    /// Edges using this vertex, in creation order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Faces using this vertex, in creation order.
    pub fn faces(&self) -> &[FaceId] {
        &self.faces
    }

    /// A vertex with no edges at all.
    pub fn is_loose(&self) -> bool {
        self.edges.is_empty()
    }
}
