//! Vertex floods used for selection growth and segmentation.

use super::{Barrier, Region, grow};
use crate::mesh::element::{FaceId, VertId};
use crate::neighbors::vert_neighbors;
use crate::traits::MeshGraph;
use hashbrown::HashSet;

/// Seed of a vertex flood: a single vertex, or every vertex of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertSeed {
    Vert(VertId),
    Face(FaceId),
}

impl VertSeed {
    fn verts<M: MeshGraph>(self, mesh: &M) -> Vec<VertId> {
        match self {
            VertSeed::Vert(v) => vec![v],
            VertSeed::Face(f) => mesh.face_verts(f).to_vec(),
        }
    }
}

/// Add `rings` layers of neighboring vertices to a selection.
pub fn increase_vert_selection<M: MeshGraph>(mesh: &M, selected: &HashSet<VertId>, rings: usize) -> HashSet<VertId> {
    if rings == 0 {
        return selected.clone();
    }
    // The first ring is claimed before iterating, so `rings - 1` iterations give `rings` layers
    grow(selected.iter().copied(), |v| vert_neighbors(mesh, v), Barrier::Open, rings - 1).into_elements()
}

/// Peel `rings` layers off a selection.
///
/// Each pass removes every selected vertex with at least one neighbor outside the selection.
pub fn decrease_vert_selection<M: MeshGraph>(mesh: &M, selected: &HashSet<VertId>, rings: usize) -> HashSet<VertId> {
    let mut remaining = selected.clone();
    for _ in 0..rings {
        let border: Vec<VertId> = remaining
            .iter()
            .copied()
            .filter(|&v| vert_neighbors(mesh, v).iter().any(|n| !remaining.contains(n)))
            .collect();
        if border.is_empty() {
            break;
        }
        for v in border {
            remaining.remove(&v);
        }
    }
    remaining
}

/// Every vertex connected to `seed` through vertices of `pool`.
///
/// The seed is always included, even when it lies outside the pool.
pub fn flood_within_verts<M: MeshGraph>(mesh: &M, pool: &HashSet<VertId>, seed: VertId, max_iters: usize) -> Region<VertId> {
    grow([seed], |v| vert_neighbors(mesh, v), Barrier::Within(pool), max_iters)
        .warn_if_capped("flood_within_verts")
}

/// Flood vertices from `seed` without crossing `perimeter`.
///
/// The perimeter vertices are part of the result. An empty perimeter floods the whole
/// connected piece.
pub fn flood_vertex_perimeter<M: MeshGraph>(
    mesh: &M,
    perimeter: &HashSet<VertId>,
    seed: VertSeed,
    max_iters: usize,
) -> Region<VertId> {
    grow(seed.verts(mesh), |v| vert_neighbors(mesh, v), Barrier::Levy(perimeter), max_iters)
        .warn_if_capped("flood_vertex_perimeter")
}
