//! Neighbor queries across faces, edges and vertices.
//!
//! These are the adjacency functions the flood fills are parameterized by. None of them
//! fail: non-manifold geometry is either walked through (plain variants) or skipped
//! (strict and manifold variants).

use crate::mesh::element::{EdgeId, FaceId, VertId};
use crate::traits::MeshGraph;
use hashbrown::HashSet;
use tracing::trace;

/// Faces across each edge of `face`, skipping edges in `exclude`.
///
/// A face reached through two shared edges is listed twice.
pub fn face_neighbors<M: MeshGraph>(mesh: &M, face: FaceId, exclude: &HashSet<EdgeId>) -> Vec<FaceId> {
    let mut neighbors = Vec::new();
    for &e in mesh.face_edges(face) {
        if exclude.contains(&e) {
            continue;
        }
        neighbors.extend(mesh.edge_faces(e).iter().copied().filter(|&f| f != face));
    }
    neighbors
}

/// Faces sharing at least one vertex with `face`, skipping vertices in `exclude`.
///
/// A face sharing several vertices is listed once per shared vertex.
pub fn face_neighbors_by_vert<M: MeshGraph>(mesh: &M, face: FaceId, exclude: &HashSet<VertId>) -> Vec<FaceId> {
    let mut neighbors = Vec::new();
    for &v in mesh.face_verts(face) {
        if exclude.contains(&v) {
            continue;
        }
        neighbors.extend(mesh.vert_faces(v).iter().copied().filter(|&f| f != face));
    }
    neighbors
}

/// Like [`face_neighbors`], but only crosses manifold edges whose endpoints are manifold.
pub fn face_neighbors_strict<M: MeshGraph>(mesh: &M, face: FaceId) -> Vec<FaceId> {
    let mut neighbors = Vec::new();
    for &e in mesh.face_edges(face) {
        let [a, b] = mesh.edge_verts(e);
        if !(mesh.is_vert_manifold(a) && mesh.is_vert_manifold(b)) {
            if mesh.edge_faces(e).len() == 1 {
                trace!("boundary edge {} has a non-manifold endpoint", e);
            }
            continue;
        }
        if !mesh.is_edge_manifold(e) {
            continue;
        }
        neighbors.extend(mesh.edge_faces(e).iter().copied().filter(|&f| f != face));
    }
    neighbors
}

/// The far endpoint of every edge at `vert`.
pub fn vert_neighbors<M: MeshGraph>(mesh: &M, vert: VertId) -> Vec<VertId> {
    mesh.vert_edges(vert).iter().map(|&e| mesh.other_vert(e, vert)).collect()
}

/// [`vert_neighbors`] restricted to manifold vertices.
pub fn vert_neighbors_manifold<M: MeshGraph>(mesh: &M, vert: VertId) -> Vec<VertId> {
    vert_neighbors(mesh, vert)
        .into_iter()
        .filter(|&v| mesh.is_vert_manifold(v))
        .collect()
}

/// Edges around `vert` in the circular order given by face winding.
///
/// Each step moves to the edge that precedes the current one in a face where the current
/// edge leaves `vert`. For counter-clockwise faces this is a counter-clockwise sweep. On an
/// open fan the sweep first rewinds to the boundary edge no face sweeps into, so the whole
/// fan is returned. Edges beyond a wire edge or a non-manifold edge are not reached.
pub fn edges_around_vert<M: MeshGraph>(mesh: &M, vert: VertId) -> Vec<EdgeId> {
    let Some(&first) = mesh.vert_edges(vert).first() else {
        return Vec::new();
    };

    let mut start = first;
    let mut rewound: HashSet<EdgeId> = HashSet::from_iter([first]);
    while let Some(prev) = edge_after(mesh, start, vert) {
        if !rewound.insert(prev) {
            break;
        }
        start = prev;
    }

    let mut ordered = vec![start];
    let mut seen: HashSet<EdgeId> = HashSet::from_iter([start]);
    let mut edge = start;
    while let Some(next) = edge_before(mesh, edge, vert) {
        if !seen.insert(next) {
            break;
        }
        ordered.push(next);
        edge = next;
    }
    ordered
}

/// In a face where `edge` arrives at `vert`, the edge leaving `vert`.
fn edge_after<M: MeshGraph>(mesh: &M, edge: EdgeId, vert: VertId) -> Option<EdgeId> {
    for &f in mesh.edge_faces(edge) {
        let verts = mesh.face_verts(f);
        let edges = mesh.face_edges(f);
        let n = verts.len();
        for j in 0..n {
            if edges[j] == edge && verts[(j + 1) % n] == vert {
                return Some(edges[(j + 1) % n]);
            }
        }
    }
    None
}

/// In a face where `edge` leaves `vert`, the edge arriving at `vert`.
fn edge_before<M: MeshGraph>(mesh: &M, edge: EdgeId, vert: VertId) -> Option<EdgeId> {
    for &f in mesh.edge_faces(edge) {
        let verts = mesh.face_verts(f);
        let edges = mesh.face_edges(f);
        let n = verts.len();
        for i in 0..n {
            if verts[i] == vert && edges[i] == edge {
                return Some(edges[(i + n - 1) % n]);
            }
        }
    }
    None
}
