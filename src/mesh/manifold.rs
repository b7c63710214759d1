//! Manifold classification and topology analysis for `BMesh`

use super::BMesh;
use super::element::{FaceId, VertId};
use crate::neighbors::face_neighbors;
use crate::partition::partition;
use crate::traits::MeshGraph;
use hashbrown::HashSet;

/// **Manifold Properties Checked**
/// 1. **Edge Manifold**: Each edge shared by exactly 2 faces
/// 2. **Vertex Manifold**: Vertex neighborhoods are a single fan (disk or half-disk)
/// 3. **Boundary Detection**: Edges used by one face only
/// 4. **Connectivity**: Number of edge-connected face islands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifoldAnalysis {
    /// Whether the mesh is a valid 2-manifold (boundaries allowed)
    pub is_manifold: bool,
    /// Number of boundary edges (0 for closed manifolds)
    pub boundary_edges: usize,
    /// Number of non-manifold edges (shared by >2 faces)
    pub non_manifold_edges: usize,
    /// Number of edges no face uses
    pub wire_edges: usize,
    /// Number of vertices with no edges
    pub isolated_vertices: usize,
    /// Number of vertices whose neighborhood is not a single fan
    pub non_manifold_vertices: usize,
    /// Number of edge-connected face islands
    pub connected_components: usize,
    /// Euler characteristic (V - E + F)
    pub euler_characteristic: i64,
}

/// Whether the faces around `vert` form one fan.
///
/// A vertex is non-manifold when it is loose, touches a wire edge or an edge with more than
/// two faces, or joins two face fans that only meet at the vertex itself. Vertices on an
/// open boundary are manifold.
pub fn vert_is_manifold<M: MeshGraph + ?Sized>(mesh: &M, vert: VertId) -> bool {
    let edges = mesh.vert_edges(vert);
    if edges.is_empty() {
        return false;
    }
    if edges.iter().any(|&e| {
        let n = mesh.edge_faces(e).len();
        n == 0 || n > 2
    }) {
        return false;
    }

    let faces = mesh.vert_faces(vert);
    let Some(&first) = faces.first() else {
        return false;
    };

    // Walk the fan through edges incident to `vert`
    let mut reached: HashSet<FaceId> = HashSet::with_capacity(faces.len());
    let mut stack = vec![first];
    reached.insert(first);
    while let Some(f) = stack.pop() {
        for &e in mesh.face_edges(f) {
            let [a, b] = mesh.edge_verts(e);
            if a != vert && b != vert {
                continue;
            }
            for &other in mesh.edge_faces(e) {
                if reached.insert(other) {
                    stack.push(other);
                }
            }
        }
    }

    reached.len() == faces.len()
}

impl BMesh {
    /// **Comprehensive Manifold Analysis**
    ///
    /// ## **Topological Invariants**
    /// - **Euler Characteristic**: χ = V - E + F (genus classification)
    /// - **Connected Components**: Topologically separate pieces
    ///
    /// ## **Manifold Violations**
    /// - Non-manifold edges and vertices, wire edges, loose vertices
    pub fn analyze_manifold(&self) -> ManifoldAnalysis {
        let mut boundary_edges = 0;
        let mut non_manifold_edges = 0;
        let mut wire_edges = 0;

        for e in self.edges() {
            match self.edge_faces(e).len() {
                0 => wire_edges += 1,
                1 => boundary_edges += 1,
                2 => {}, // Perfect manifold edge
                _ => non_manifold_edges += 1,
            }
        }

        let isolated_vertices = self.verts().filter(|&v| self.vert_edges(v).is_empty()).count();
        let non_manifold_vertices = self
            .verts()
            .filter(|&v| !self.vert_edges(v).is_empty() && !self.is_vert_manifold(v))
            .count();

        // No per-island cap: a long strip must still count as one component
        let all_faces: HashSet<FaceId> = self.faces().collect();
        let no_edges = HashSet::new();
        let connected_components =
            partition(&all_faces, |f| face_neighbors(self, f, &no_edges), usize::MAX, usize::MAX)
                .islands
                .len();

        // Compute Euler characteristic: χ = V - E + F
        let euler_characteristic =
            self.vertex_count() as i64 - self.edge_count() as i64 + self.face_count() as i64;

        let is_manifold = non_manifold_edges == 0
            && wire_edges == 0
            && isolated_vertices == 0
            && non_manifold_vertices == 0;

        ManifoldAnalysis {
            is_manifold,
            boundary_edges,
            non_manifold_edges,
            wire_edges,
            isolated_vertices,
            non_manifold_vertices,
            connected_components,
            euler_characteristic,
        }
    }

    /// True when every edge has two faces and every vertex is manifold.
    pub fn is_closed_manifold(&self) -> bool {
        let analysis = self.analyze_manifold();
        analysis.is_manifold && analysis.boundary_edges == 0
    }
}
