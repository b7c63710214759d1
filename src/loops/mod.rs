//! Edge loops, face loops and the walks that produce them.

use crate::mesh::element::{EdgeId, Element, FaceId, VertId};
use crate::traits::MeshGraph;
use hashbrown::{HashMap, HashSet};
use std::collections::VecDeque;
use tracing::{debug, warn};

pub mod face_loop;
pub mod parallel;

pub use face_loop::{FaceLoop, find_face_loop};
pub use parallel::{Expansion, LoopNeighborOptions, LoopNeighbors, edge_loop_neighbors};

/// An ordered chain of edges.
///
/// `verts` has one more entry than `edges`; `edges[i]` joins `verts[i]` and `verts[i + 1]`.
/// A closed loop repeats its first vertex at the end but never repeats an edge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EdgeLoop {
    pub verts: Vec<VertId>,
    pub edges: Vec<EdgeId>,
}

impl EdgeLoop {
    pub fn is_closed(&self) -> bool {
        self.verts.len() > 2 && self.verts.first() == self.verts.last()
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Chain an unordered edge list into loops.
///
/// Takes the last unused edge `(v0, v1)` as `[v1, v0]`, then keeps extending the tail, or
/// failing that the head, with any unused edge touching it, until neither end can grow or the
/// chain closes on itself. Repeats until every edge is used. Duplicate entries in `edges`
/// are ignored. Loops come out in no meaningful order, but each keeps the direction it was
/// chained in.
pub fn edge_loops_from_edges<M: MeshGraph>(mesh: &M, edges: &[EdgeId]) -> Vec<EdgeLoop> {
    let mut unique = Vec::with_capacity(edges.len());
    let mut seen = HashSet::with_capacity(edges.len());
    for &e in edges {
        if seen.insert(e) {
            unique.push(e);
        }
    }

    // Endpoint index: vertex -> positions in `unique`
    let mut at_vert: HashMap<VertId, Vec<usize>> = HashMap::new();
    for (i, &e) in unique.iter().enumerate() {
        for v in mesh.edge_verts(e) {
            at_vert.entry(v).or_default().push(i);
        }
    }

    let mut used = vec![false; unique.len()];
    let mut take = |v: VertId, used: &mut Vec<bool>| -> Option<usize> {
        let slots = at_vert.get_mut(&v)?;
        while let Some(i) = slots.pop() {
            if !used[i] {
                used[i] = true;
                return Some(i);
            }
        }
        None
    };

    let mut loops = Vec::new();
    for start in (0..unique.len()).rev() {
        if used[start] {
            continue;
        }
        used[start] = true;

        let [v0, v1] = mesh.edge_verts(unique[start]);
        let mut verts = VecDeque::from([v1, v0]);
        let mut chain = VecDeque::from([unique[start]]);
        let (mut head, mut tail) = (v1, v0);

        while head != tail {
            if let Some(i) = take(tail, &mut used) {
                tail = mesh.other_vert(unique[i], tail);
                verts.push_back(tail);
                chain.push_back(unique[i]);
            } else if let Some(i) = take(head, &mut used) {
                head = mesh.other_vert(unique[i], head);
                verts.push_front(head);
                chain.push_front(unique[i]);
            } else {
                break;
            }
        }

        loops.push(EdgeLoop { verts: verts.into(), edges: chain.into() });
    }

    debug!("edge_loops_from_edges: {} edges chained into {} loops", unique.len(), loops.len());
    loops
}

/// Boundary loops of a face region: chains of the edges that have exactly one linked face
/// inside `faces`.
pub fn face_region_boundary_loops<M: MeshGraph>(mesh: &M, faces: &HashSet<FaceId>) -> Vec<EdgeLoop> {
    let mut boundary: Vec<EdgeId> = faces
        .iter()
        .flat_map(|&f| mesh.face_edges(f).iter().copied())
        .filter(|&e| mesh.edge_faces(e).iter().filter(|f| faces.contains(*f)).count() == 1)
        .collect();
    boundary.sort_unstable();
    boundary.dedup();
    edge_loops_from_edges(mesh, &boundary)
}

/// Follow non-manifold edges away from both endpoints of `start`.
///
/// Returns one chain per endpoint (the start edge itself is not included). A chain ends when
/// it reaches an edge or vertex in `stop`, comes back to `start`, runs into a vertex with no
/// other non-manifold edge, or takes `max_iters` steps. At a vertex with several candidate
/// edges the lowest index is followed.
pub fn walk_non_manifold_edge<M: MeshGraph>(
    mesh: &M,
    start: EdgeId,
    stop: &HashSet<Element>,
    max_iters: usize,
) -> [Vec<EdgeId>; 2] {
    mesh.edge_verts(start).map(|pivot| {
        let mut chain = Vec::new();
        let (mut prev, mut pivot) = (start, pivot);
        let mut iters = 0;
        loop {
            if iters == max_iters {
                warn!("walk_non_manifold_edge: max iterations reached ({})", max_iters);
                break;
            }
            iters += 1;

            let next = mesh
                .vert_edges(pivot)
                .iter()
                .copied()
                .filter(|&e| e != prev && !mesh.is_edge_manifold(e))
                .min();
            let Some(edge) = next else {
                break;
            };
            if edge == start {
                break;
            }

            chain.push(edge);
            let far = mesh.other_vert(edge, pivot);
            if stop.contains(&Element::Edge(edge)) || stop.contains(&Element::Vert(far)) {
                break;
            }
            prev = edge;
            pivot = far;
        }
        chain
    })
}
