//! Parallel edge loops and face strips beside an existing edge loop.

use super::{EdgeLoop, edge_loops_from_edges, find_face_loop};
use crate::mesh::element::{EdgeId, FaceId};
use crate::traits::MeshGraph;
use hashbrown::HashSet;
use tracing::debug;

/// Which faces count as touching the input loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expansion {
    /// Faces using one of the loop's edges. An interior loop yields two parallel loops,
    /// one on each side.
    #[default]
    Edges,
    /// Faces using one of the loop's vertices. An interior loop yields one loop that wraps
    /// around it. Meant for non-strict use.
    Verts,
}

/// Options for [`edge_loop_neighbors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopNeighborOptions {
    /// Keep only parallel loops with exactly as many edges as the input loop, and only the
    /// part of each face strip that touches it.
    pub strict: bool,
    /// Drop edges whose faces all touch the input loop (tails of P-shaped or figure-8 loops,
    /// and the mesh border).
    pub trim_tails: bool,
    pub expansion: Expansion,
    /// Only consider quads. With `false`, any face touching a loop vertex counts, which
    /// allows expansion on triangle meshes.
    pub quad_only: bool,
}

impl Default for LoopNeighborOptions {
    fn default() -> Self {
        LoopNeighborOptions {
            strict: false,
            trim_tails: true,
            expansion: Expansion::Edges,
            quad_only: true,
        }
    }
}

/// Result of [`edge_loop_neighbors`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoopNeighbors {
    /// Parallel edge loops, across every input loop.
    pub loops: Vec<EdgeLoop>,
    /// Face strips walked from the edges leaving each input loop's second vertex. They are
    /// not aligned one-to-one with `loops`.
    pub face_strips: Vec<Vec<FaceId>>,
}

/// Find the edge loops running parallel to the loops in `edges`, one face away.
///
/// `edges` may be unordered and hold several loops.
pub fn edge_loop_neighbors<M: MeshGraph>(mesh: &M, edges: &[EdgeId], options: LoopNeighborOptions) -> LoopNeighbors {
    let mut result = LoopNeighbors::default();

    for input in edge_loops_from_edges(mesh, edges) {
        let Some((&v0, &e0)) = input.verts.first().zip(input.edges.first()) else {
            continue;
        };
        let v1 = mesh.other_vert(e0, v0);
        let original: HashSet<EdgeId> = input.edges.iter().copied().collect();

        // Faces directly attached to the loop
        let is_quad = |f: &FaceId| mesh.face_verts(*f).len() == 4;
        let mut touching: HashSet<FaceId> = HashSet::new();
        match (options.quad_only, options.expansion) {
            (true, Expansion::Edges) => {
                for &e in &input.edges {
                    touching.extend(mesh.edge_faces(e).iter().copied().filter(|f| is_quad(f)));
                }
            },
            (true, Expansion::Verts) => {
                for &v in &input.verts {
                    touching.extend(mesh.vert_faces(v).iter().copied().filter(|f| is_quad(f)));
                }
            },
            (false, _) => {
                for &e in &input.edges {
                    for v in mesh.edge_verts(e) {
                        touching.extend(mesh.vert_faces(v).iter().copied());
                    }
                }
            },
        }

        // Edges leaving the loop sideways
        let perpendicular: HashSet<EdgeId> = input
            .verts
            .iter()
            .flat_map(|&v| mesh.vert_edges(v).iter().copied())
            .filter(|e| !original.contains(e))
            .collect();

        let mut ordered_faces: Vec<FaceId> = touching.iter().copied().collect();
        ordered_faces.sort_unstable();
        let all_touching = |e: EdgeId| mesh.edge_faces(e).iter().all(|f| touching.contains(f));

        let mut parallel: Vec<EdgeId> = Vec::new();
        for &f in &ordered_faces {
            for &e in mesh.face_edges(f) {
                let keep = if options.quad_only {
                    !perpendicular.contains(&e)
                        && !original.contains(&e)
                        && !(options.trim_tails && all_touching(e))
                } else {
                    !original.contains(&e) && !all_touching(e)
                };
                if keep {
                    parallel.push(e);
                }
            }
        }
        let parallel_loops = edge_loops_from_edges(mesh, &parallel);

        for &e in mesh.vert_edges(v1) {
            if !perpendicular.contains(&e) {
                continue;
            }
            // Loose perpendicular edges have no face loop
            let Ok(strip) = find_face_loop(mesh, e) else {
                continue;
            };
            let faces = if options.strict {
                strip.faces.into_iter().filter(|f| touching.contains(f)).collect()
            } else {
                strip.faces
            };
            result.face_strips.push(faces);
        }

        debug!(
            "edge_loop_neighbors: loop of {} edges has {} parallel loops",
            input.len(),
            parallel_loops.len()
        );
        if options.strict {
            result
                .loops
                .extend(parallel_loops.into_iter().filter(|l| l.len() == input.len()));
        } else {
            result.loops.extend(parallel_loops);
        }
    }

    result
}
