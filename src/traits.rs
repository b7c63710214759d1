use crate::errors::TopologyResult;
use crate::float_types::Real;
use crate::mesh::element::{EdgeId, FaceId, VertId};
use nalgebra::{Point3, Vector3};

/// Read-only topological queries over a polygon mesh.
///
/// Every algorithm in this crate is written against this trait; [`crate::mesh::BMesh`]
/// is the bundled implementation, but any host mesh exposing the same adjacency works.
/// Element handles are dense: vertices are `0..vertex_count()`, and so on.
pub trait MeshGraph {
    fn vertex_count(&self) -> usize;
    fn edge_count(&self) -> usize;
    fn face_count(&self) -> usize;

    /// Both endpoints of an edge, in storage order.
    fn edge_verts(&self, edge: EdgeId) -> [VertId; 2];
    /// Faces using an edge. Non-manifold meshes may report more than two.
    fn edge_faces(&self, edge: EdgeId) -> &[FaceId];

    /// Vertices of a face in winding order.
    fn face_verts(&self, face: FaceId) -> &[VertId];
    /// Edges of a face in cycle order: `face_edges[i]` joins `face_verts[i]` and `face_verts[i + 1]`.
    fn face_edges(&self, face: FaceId) -> &[EdgeId];
    fn face_normal(&self, face: FaceId) -> Vector3<Real>;

    fn vert_position(&self, vert: VertId) -> Point3<Real>;
    fn vert_edges(&self, vert: VertId) -> &[EdgeId];
    fn vert_faces(&self, vert: VertId) -> &[FaceId];
    fn is_vert_manifold(&self, vert: VertId) -> bool;

    /// An edge is manifold when exactly two faces use it.
    fn is_edge_manifold(&self, edge: EdgeId) -> bool {
        self.edge_faces(edge).len() == 2
    }

    fn verts(&self) -> impl Iterator<Item = VertId> + '_ {
        (0..self.vertex_count()).map(VertId)
    }

    fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edge_count()).map(EdgeId)
    }

    fn faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        (0..self.face_count()).map(FaceId)
    }

    /// The endpoint of `edge` that is not `vert`.
    fn other_vert(&self, edge: EdgeId, vert: VertId) -> VertId {
        let [a, b] = self.edge_verts(edge);
        if a == vert { b } else { a }
    }

    /// A face spanning exactly the given vertex set, in any order or rotation.
    fn find_face(&self, verts: &[VertId]) -> Option<FaceId> {
        let first = *verts.first()?;
        self.vert_faces(first).iter().copied().find(|&f| {
            let face_verts = self.face_verts(f);
            face_verts.len() == verts.len() && verts.iter().all(|v| face_verts.contains(v))
        })
    }
}

/// Growth operations needed on the target side of a mesh join.
pub trait MeshGraphMut: MeshGraph {
    fn new_vertex(&mut self, position: Point3<Real>) -> VertId;
    fn new_face(&mut self, verts: &[VertId]) -> TopologyResult<FaceId>;
}
