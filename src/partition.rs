//! Loose-part detection: splitting a pool of elements into connected islands.

use crate::flood::{Barrier, ISLAND_MAX_ITERS, grow};
use crate::mesh::element::{EdgeId, FaceId, VertId};
use crate::neighbors::{face_neighbors, face_neighbors_by_vert, vert_neighbors};
use crate::traits::MeshGraph;
use hashbrown::HashSet;
use std::hash::Hash;
use tracing::{debug, warn};

/// Islands found by [`partition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T: Eq + Hash> {
    /// Pairwise disjoint islands. Their order carries no meaning.
    pub islands: Vec<HashSet<T>>,
    /// True when a cap cut the split short: `max_islands` was reached with elements left
    /// unassigned, or an island flood ran out of rounds before it was complete.
    pub capped: bool,
}

impl<T: Eq + Hash> Partition<T> {
    pub fn len(&self) -> usize {
        self.islands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.islands.is_empty()
    }
}

/// How faces count as connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaceAdjacency {
    /// Faces sharing an edge.
    #[default]
    Edges,
    /// Faces sharing at least a vertex.
    Verts,
}

/// Split `pool` into islands connected under `neighbors_of`, restricted to the pool.
///
/// Seeds are taken lowest-first; each island is a flood of the elements still unassigned,
/// so no element lands in two islands. Each island flood runs at most `max_iters` rounds.
/// When neither cap is hit the islands cover the pool exactly and each one is maximal.
pub fn partition<T, N, I>(
    pool: &HashSet<T>,
    mut neighbors_of: N,
    max_islands: usize,
    max_iters: usize,
) -> Partition<T>
where
    T: Copy + Ord + Hash,
    N: FnMut(T) -> I,
    I: IntoIterator<Item = T>,
{
    let mut order: Vec<T> = pool.iter().copied().collect();
    order.sort_unstable();

    let mut remaining = pool.clone();
    let mut islands = Vec::new();
    let mut island_capped = false;
    for seed in order {
        if remaining.is_empty() || islands.len() >= max_islands {
            break;
        }
        if !remaining.contains(&seed) {
            continue;
        }

        let region = grow([seed], &mut neighbors_of, Barrier::Within(&remaining), max_iters);
        if region.capped {
            island_capped = true;
            warn!("partition: island seeded at position {} hit the flood cap", islands.len());
        }
        for item in &region.elements {
            remaining.remove(item);
        }
        islands.push(region.elements);
    }

    let capped = island_capped || !remaining.is_empty();
    if !remaining.is_empty() {
        warn!("partition: stopped at {} islands with {} elements unassigned", islands.len(), remaining.len());
    }
    debug!("partition: {} elements in {} islands", pool.len(), islands.len());

    Partition { islands, capped }
}

/// Face islands of the mesh, or of `selected` when it is given and non-empty.
pub fn loose_faces<M: MeshGraph>(
    mesh: &M,
    selected: Option<&HashSet<FaceId>>,
    adjacency: FaceAdjacency,
    max_islands: usize,
) -> Partition<FaceId> {
    let pool = pool_or_all(selected, || mesh.faces().collect());
    let no_edges = HashSet::new();
    let no_verts = HashSet::new();
    match adjacency {
        FaceAdjacency::Edges => {
            partition(&pool, |f| face_neighbors(mesh, f, &no_edges), max_islands, ISLAND_MAX_ITERS)
        },
        FaceAdjacency::Verts => {
            partition(&pool, |f| face_neighbors_by_vert(mesh, f, &no_verts), max_islands, ISLAND_MAX_ITERS)
        },
    }
}

/// Edge islands: edges are connected when they share an endpoint.
pub fn loose_edges<M: MeshGraph>(mesh: &M, selected: Option<&HashSet<EdgeId>>, max_islands: usize) -> Partition<EdgeId> {
    let pool = pool_or_all(selected, || mesh.edges().collect());
    partition(
        &pool,
        |e| {
            mesh.edge_verts(e)
                .into_iter()
                .flat_map(move |v| mesh.vert_edges(v).iter().copied())
                .filter(move |&other| other != e)
        },
        max_islands,
        ISLAND_MAX_ITERS,
    )
}

/// Vertex islands: vertices are connected when an edge joins them.
pub fn loose_verts<M: MeshGraph>(mesh: &M, selected: Option<&HashSet<VertId>>, max_islands: usize) -> Partition<VertId> {
    let pool = pool_or_all(selected, || mesh.verts().collect());
    partition(&pool, |v| vert_neighbors(mesh, v), max_islands, ISLAND_MAX_ITERS)
}

/// Split `faces` (all faces when empty) into the regions separated by `boundary_edges`.
pub fn partition_faces_between_edges<M: MeshGraph>(
    mesh: &M,
    faces: &HashSet<FaceId>,
    boundary_edges: &HashSet<EdgeId>,
    max_islands: usize,
) -> Partition<FaceId> {
    let pool = pool_or_all(Some(faces), || mesh.faces().collect());
    partition(&pool, |f| face_neighbors(mesh, f, boundary_edges), max_islands, ISLAND_MAX_ITERS)
}

fn pool_or_all<T: Copy + Eq + Hash>(selected: Option<&HashSet<T>>, all: impl FnOnce() -> HashSet<T>) -> HashSet<T> {
    match selected {
        Some(s) if !s.is_empty() => s.clone(),
        _ => all(),
    }
}
