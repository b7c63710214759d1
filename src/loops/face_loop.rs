//! Face loops: strips of quads joined through opposite edges.

use crate::errors::{TopologyError, TopologyResult};
use crate::mesh::BMesh;
use crate::mesh::element::{EdgeId, Element, FaceId};
use crate::traits::MeshGraph;
use hashbrown::HashSet;
use tracing::{debug, warn};

/// A strip of quads crossed perpendicular to a starting edge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FaceLoop {
    /// Faces in walk order.
    pub faces: Vec<FaceId>,
    /// Crossed edges in walk order. An open loop lists one more edge than faces (both end
    /// caps); a closed loop lists exactly one edge per face.
    pub edges: Vec<EdgeId>,
    /// Whether the walk came back around to its first face.
    pub closed: bool,
}

impl FaceLoop {
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

/// One direction of a face-loop walk.
struct Walk {
    faces: Vec<FaceId>,
    edges: Vec<EdgeId>,
    closed: bool,
}

/// Walk the face loop running perpendicular to `edge`.
///
/// From each quad on `edge`, repeatedly step to the opposite edge of the current quad and on
/// to the face across it. A direction stops at a boundary edge, an edge shared by more than
/// two faces, or a face that is not a quad (that face is left out). If a walk comes back to
/// its first face the loop is closed and returned directly; otherwise the two directions are
/// joined back to back.
///
/// Meshes without quads give an empty loop. An edge with no faces is rejected with
/// [`TopologyError::EdgeWithoutFaces`].
pub fn find_face_loop<M: MeshGraph>(mesh: &M, edge: EdgeId) -> TopologyResult<FaceLoop> {
    let linked = mesh.edge_faces(edge);
    if linked.is_empty() {
        return Err(TopologyError::EdgeWithoutFaces(edge));
    }

    let mut walks: Vec<Walk> = Vec::with_capacity(2);
    for &first in linked.iter().take(2) {
        if mesh.face_edges(first).len() != 4 {
            continue;
        }
        let walk = walk_from(mesh, first, edge);
        if walk.closed {
            return Ok(FaceLoop { faces: walk.faces, edges: walk.edges, closed: true });
        }
        walks.push(walk);
    }

    let mut walks = walks.into_iter();
    let face_loop = match (walks.next(), walks.next()) {
        (Some(first), Some(second)) => {
            if first.faces.len() != second.faces.len() {
                debug!(
                    "find_face_loop: stitching uneven walks ({} and {} faces) from edge {}",
                    first.faces.len(),
                    second.faces.len(),
                    edge
                );
            }

            let mut faces: Vec<FaceId> = first.faces.into_iter().rev().collect();
            faces.extend(second.faces);
            let mut edges: Vec<EdgeId> = first.edges.into_iter().skip(1).rev().collect();
            edges.extend(second.edges);
            FaceLoop { faces, edges, closed: false }
        },
        (Some(only), None) => FaceLoop { faces: only.faces, edges: only.edges, closed: false },
        _ => FaceLoop::default(),
    };
    Ok(face_loop)
}

/// Walk from quad `first`, entering through `edge`.
fn walk_from<M: MeshGraph>(mesh: &M, first: FaceId, edge: EdgeId) -> Walk {
    let mut faces = vec![first];
    let mut edges = vec![edge];
    let mut visited: HashSet<FaceId> = HashSet::from_iter([first]);

    let (mut face, mut entry) = (first, edge);
    loop {
        let ring = mesh.face_edges(face);
        let Some(slot) = ring.iter().position(|&e| e == entry) else {
            break;
        };
        let exit = ring[(slot + 2) % 4];

        let across = mesh.edge_faces(exit);
        if across.len() != 2 {
            // Boundary or non-manifold: the exit edge caps this end of the strip
            edges.push(exit);
            break;
        }
        let next = if across[0] == face { across[1] } else { across[0] };

        if next == first {
            // `exit` is the starting edge again
            return Walk { faces, edges, closed: true };
        }
        edges.push(exit);
        if mesh.face_edges(next).len() != 4 {
            break;
        }
        if !visited.insert(next) {
            warn!("find_face_loop: walk from face {} revisited face {} without closing", first, next);
            break;
        }
        faces.push(next);
        face = next;
        entry = exit;
    }

    Walk { faces, edges, closed: false }
}

impl BMesh {
    /// [`find_face_loop`], marking the walked faces and crossed edges selected.
    pub fn select_face_loop(&mut self, edge: EdgeId) -> TopologyResult<FaceLoop> {
        let face_loop = find_face_loop(self, edge)?;
        for &f in &face_loop.faces {
            self.select(Element::Face(f), true);
        }
        for &e in &face_loop.edges {
            self.select(Element::Edge(e), true);
        }
        Ok(face_loop)
    }
}
