//! Planar patch detection.

use super::{Barrier, Region, grow};
use crate::float_types::{PI, Real};
use crate::mesh::element::FaceId;
use crate::neighbors::face_neighbors_by_vert;
use crate::traits::MeshGraph;
use hashbrown::HashSet;

/// Faces connected to `start` (through shared vertices) that face the same way.
///
/// A face joins the patch when its normal points into the same hemisphere as the start
/// face's normal and the angle between them is under `angle_deg`. The comparison is always
/// against the start face, so gently curving surfaces do not creep past the threshold.
/// Faces with a zero normal never join.
pub fn linked_flat_faces<M: MeshGraph>(mesh: &M, start: FaceId, angle_deg: Real, max_iters: usize) -> Region<FaceId> {
    let reference = mesh.face_normal(start);
    let max_angle = PI / 180.0 * angle_deg;
    let is_flat = |f: &FaceId| {
        let n = mesh.face_normal(*f);
        n.dot(&reference) > 0.0 && n.angle(&reference) < max_angle
    };

    let no_limit = HashSet::new();
    grow(
        [start],
        |f| face_neighbors_by_vert(mesh, f, &no_limit),
        Barrier::Accept(&is_flat),
        max_iters,
    )
    .warn_if_capped("linked_flat_faces")
}
