//! Face floods: select-more, seam-bounded fills and goal-directed growth.

use super::{Barrier, Region, grow, grow_until};
use crate::mesh::element::{EdgeId, FaceId};
use crate::neighbors::{face_neighbors, face_neighbors_strict};
use crate::traits::MeshGraph;
use hashbrown::HashSet;
use tracing::debug;

/// Grow a face selection across shared edges, fins included, until only the open border of
/// its component is left (or the cap).
pub fn grow_selection<M: MeshGraph>(mesh: &M, start_faces: &HashSet<FaceId>, max_iters: usize) -> Region<FaceId> {
    let no_limit = HashSet::new();
    grow(
        start_faces.iter().copied(),
        |f| face_neighbors(mesh, f, &no_limit),
        Barrier::Open,
        max_iters,
    )
    .warn_if_capped("grow_selection")
}

/// Flood from `seed` without crossing the `levy` faces.
///
/// The levy faces are part of the result. When they form a closed ring around the seed the
/// flood fills exactly one side of it; an empty levy floods to the non-manifold boundary.
pub fn flood_faces<M: MeshGraph>(mesh: &M, levy: &HashSet<FaceId>, seed: FaceId, max_iters: usize) -> Region<FaceId> {
    let no_limit = HashSet::new();
    grow([seed], |f| face_neighbors(mesh, f, &no_limit), Barrier::Levy(levy), max_iters)
        .warn_if_capped("flood_faces")
}

/// [`flood_faces`] through manifold edges with manifold endpoints only.
pub fn flood_faces_strict<M: MeshGraph>(mesh: &M, levy: &HashSet<FaceId>, seed: FaceId, max_iters: usize) -> Region<FaceId> {
    grow([seed], |f| face_neighbors_strict(mesh, f), Barrier::Levy(levy), max_iters)
        .warn_if_capped("flood_faces_strict")
}

/// Flood from `seed` without crossing any edge of `edge_loop`.
///
/// Unlike [`flood_faces`] the boundary is made of edges, so the faces on both sides of the
/// seam stay unclaimed unless reachable some other way.
pub fn flood_edge_loop<M: MeshGraph>(mesh: &M, edge_loop: &HashSet<EdgeId>, seed: FaceId, max_iters: usize) -> Region<FaceId> {
    grow([seed], |f| face_neighbors(mesh, f, edge_loop), Barrier::Open, max_iters)
        .warn_if_capped("flood_edge_loop")
}

/// Grow from `start` until `stop_face` is claimed.
///
/// If `stop_face` is unreachable this is a plain flood of the component (or a capped one).
pub fn grow_to_find_face<M: MeshGraph>(mesh: &M, start: FaceId, stop_face: FaceId, max_iters: usize) -> Region<FaceId> {
    let no_limit = HashSet::new();
    grow_until(
        [start],
        |f| face_neighbors(mesh, f, &no_limit),
        Barrier::Open,
        max_iters,
        |ring| ring.contains(&stop_face),
    )
    .warn_if_capped("grow_to_find_face")
}

/// Result of [`grow_to_find_mesh_end`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshEnd {
    /// First face found with a non-manifold edge, if the growth reached one.
    pub end: Option<FaceId>,
    /// Every face claimed on the way.
    pub faces: HashSet<FaceId>,
    pub capped: bool,
}

/// Grow from `start` until a ring contains a face with a non-manifold edge.
///
/// When a ring holds several such faces, the one with the lowest index is reported.
pub fn grow_to_find_mesh_end<M: MeshGraph>(mesh: &M, start: FaceId, max_iters: usize) -> MeshEnd {
    let no_limit = HashSet::new();
    let mut end = None;
    let region = grow_until(
        [start],
        |f| face_neighbors(mesh, f, &no_limit),
        Barrier::Open,
        max_iters,
        |ring| {
            end = ring
                .iter()
                .copied()
                .filter(|&f| mesh.face_edges(f).iter().any(|&e| !mesh.is_edge_manifold(e)))
                .min();
            end.is_some()
        },
    )
    .warn_if_capped("grow_to_find_mesh_end");

    if end.is_none() && !region.capped {
        debug!("grow_to_find_mesh_end: completely manifold mesh");
    }

    MeshEnd { end, faces: region.elements, capped: region.capped }
}
