//! Topology errors

use crate::mesh::element::{EdgeId, FaceId, VertId};
use std::fmt::Display;

/// Result alias used by every fallible operation in the crate
pub type TopologyResult<T> = Result<T, TopologyError>;

/// Precondition violations and malformed element construction.
///
/// Malformed *existing* topology (non-manifold edges, degenerate normals) is never an
/// error; traversals step around it. These variants are reserved for caller mistakes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// (VertexOutOfRange) An index does not name a vertex of the mesh
    VertexOutOfRange { index: usize, len: usize },
    /// (DegenerateEdge) Both endpoints of an edge are the same vertex
    DegenerateEdge(VertId),
    /// (TooFewVertices) A face needs at least three vertices
    TooFewVertices(usize),
    /// (RepeatedVertex) A face lists the same vertex twice
    RepeatedVertex(VertId),
    /// (DuplicateFace) A face over the same vertices already exists
    DuplicateFace(FaceId),
    /// (EdgeWithoutFaces) A face loop cannot start from a wire edge
    EdgeWithoutFaces(EdgeId),
    /// (UnmappedVertex) A source face references a vertex missing from the remap table
    UnmappedVertex(usize),
    /// (RemapConflict) A source vertex is already mapped to a different target
    RemapConflict { vertex: usize, existing: usize, requested: usize },
    /// (RemapTargetTaken) A target vertex is already claimed by another source vertex
    RemapTargetTaken { target: usize, owner: usize, vertex: usize },
    /// (RemapTargetOutOfRange) A remap entry points past the end of the target mesh
    RemapTargetOutOfRange { vertex: usize, target: usize, len: usize },
    /// (SingularTransform) The target transform has no inverse
    SingularTransform,
    /// (PointAtInfinity) The combined transform sends a source vertex to `w = 0`
    PointAtInfinity(usize),
}

impl Display for TopologyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopologyError::VertexOutOfRange { index, len } => write!(f, "(VertexOutOfRange) Vertex index {} is out of range (vertices.len = {})", index, len),
            TopologyError::DegenerateEdge(v) => write!(f, "(DegenerateEdge) Both endpoints of the edge are vertex {}", v),
            TopologyError::TooFewVertices(n) => write!(f, "(TooFewVertices) A face needs at least 3 vertices, got {}", n),
            TopologyError::RepeatedVertex(v) => write!(f, "(RepeatedVertex) Vertex {} appears more than once in the face", v),
            TopologyError::DuplicateFace(face) => write!(f, "(DuplicateFace) Face {} already spans these vertices", face),
            TopologyError::EdgeWithoutFaces(e) => write!(f, "(EdgeWithoutFaces) Edge {} has no linked faces to walk from", e),
            TopologyError::UnmappedVertex(source) => write!(f, "(UnmappedVertex) Source vertex {} has no entry in the remap table", source),
            TopologyError::RemapConflict { vertex, existing, requested } => write!(f, "(RemapConflict) Source vertex {} is mapped to {}, refusing to remap it to {}", vertex, existing, requested),
            TopologyError::RemapTargetTaken { target, owner, vertex } => write!(f, "(RemapTargetTaken) Target vertex {} already belongs to source vertex {}, refusing source vertex {}", target, owner, vertex),
            TopologyError::RemapTargetOutOfRange { vertex, target, len } => write!(f, "(RemapTargetOutOfRange) Source vertex {} maps to target {} but the target has {} vertices", vertex, target, len),
            TopologyError::SingularTransform => write!(f, "(SingularTransform) The target transform cannot be inverted"),
            TopologyError::PointAtInfinity(vertex) => write!(f, "(PointAtInfinity) Source vertex {} has no finite position after the transform", vertex),
        }
    }
}
