//! Edge storage for [`BMesh`](super::BMesh).

use super::element::{FaceId, VertId};

/// An undirected edge between two distinct vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BEdge {
    pub(crate) verts: [VertId; 2],
    pub(crate) faces: Vec<FaceId>,
    pub select: bool,
}

impl BEdge {
    pub(crate) const fn new(a: VertId, b: VertId) -> Self {
        BEdge {
            verts: [a, b],
            faces: Vec::new(),
            select: false,
        }
    }

    pub const fn verts(&self) -> [VertId; 2] {
        self.verts
    }

    pub fn faces(&self) -> &[FaceId] {
        &self.faces
    }

    /// Whether `v` is one of the endpoints.
    pub fn has_vert(&self, v: VertId) -> bool {
        self.verts[0] == v || self.verts[1] == v
    }

    /// An edge no face uses.
    pub fn is_wire(&self) -> bool {
        self.faces.is_empty()
    }

    /// An edge used by exactly one face.
    pub fn is_boundary(&self) -> bool {
        self.faces.len() == 1
    }

    /// Canonical key for the endpoint lookup table (smaller index first)
    pub(crate) fn key(a: VertId, b: VertId) -> (VertId, VertId) {
        if a < b { (a, b) } else { (b, a) }
    }
}
