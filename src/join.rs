//! Mesh merging with a persistent vertex remap table.
//!
//! A [`VertexRemap`] records which target vertex each source vertex became. Seeding it with
//! pairs along a shared border before calling [`join_into`] welds the two meshes there
//! instead of duplicating the border vertices. Keeping the same table across calls makes a
//! repeated merge reuse every vertex.

use crate::errors::{TopologyError, TopologyResult};
use crate::float_types::Real;
use crate::mesh::BMesh;
use crate::mesh::element::{Element, VertId};
use crate::traits::{MeshGraph, MeshGraphMut};
use hashbrown::HashMap;
use nalgebra::{Matrix4, Point3};
use tracing::{debug, warn};

/// Injective map from source vertex indices to target vertex indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexRemap {
    forward: HashMap<usize, usize>,
    /// target -> source, to keep the map injective
    owners: HashMap<usize, usize>,
}

impl VertexRemap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(source, target)` pairs, failing on the first pair that would
    /// break injectivity.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (usize, usize)>) -> TopologyResult<Self> {
        let mut remap = VertexRemap::new();
        for (source, target) in pairs {
            remap.insert(source, target)?;
        }
        Ok(remap)
    }

    /// Record `source -> target`.
    ///
    /// Returns `Ok(true)` for a new entry and `Ok(false)` when the exact pair was already
    /// present. Mapping a source to a second target, or a target to a second source, fails.
    pub fn insert(&mut self, source: usize, target: usize) -> TopologyResult<bool> {
        if let Some(&existing) = self.forward.get(&source) {
            if existing == target {
                return Ok(false);
            }
            return Err(TopologyError::RemapConflict { vertex: source, existing, requested: target });
        }
        if let Some(&owner) = self.owners.get(&target) {
            return Err(TopologyError::RemapTargetTaken { target, owner, vertex: source });
        }
        self.forward.insert(source, target);
        self.owners.insert(target, source);
        Ok(true)
    }

    pub fn get(&self, source: usize) -> Option<usize> {
        self.forward.get(&source).copied()
    }

    pub fn contains_source(&self, source: usize) -> bool {
        self.forward.contains_key(&source)
    }

    pub fn contains_target(&self, target: usize) -> bool {
        self.owners.contains_key(&target)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// `(source, target)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.forward.iter().map(|(&s, &t)| (s, t))
    }
}

/// What a merge did to the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoinReport {
    /// Target vertices created for unmapped source vertices.
    pub vertices_created: usize,
    /// Source vertices that were already mapped before the call.
    pub vertices_reused: usize,
    pub faces_created: usize,
    /// Source faces whose vertices already carried a face in the target.
    pub faces_skipped: usize,
}

/// Merge `source` into `target`.
///
/// Every unmapped source vertex becomes a new target vertex at
/// `inverse(target_transform) * source_transform * position` and is recorded in `remap`.
/// Every source face is then rebuilt over the mapped vertices in its original winding.
///
/// All preconditions are checked before the target is touched: `target_transform` must be
/// invertible, every pre-seeded target index must exist, and no new vertex may land at
/// infinity (a projective transform mapping it to `w = 0`).
pub fn join_into<S, T>(
    source: &S,
    target: &mut T,
    remap: &mut VertexRemap,
    source_transform: &Matrix4<Real>,
    target_transform: &Matrix4<Real>,
) -> TopologyResult<JoinReport>
where
    S: MeshGraph + ?Sized,
    T: MeshGraphMut + ?Sized,
{
    let to_target = target_transform.try_inverse().ok_or(TopologyError::SingularTransform)? * source_transform;

    let target_len = target.vertex_count();
    for (vertex, mapped) in remap.iter() {
        if mapped >= target_len {
            return Err(TopologyError::RemapTargetOutOfRange { vertex, target: mapped, len: target_len });
        }
    }

    let mut report = JoinReport::default();
    let mut placements = Vec::with_capacity(source.vertex_count().saturating_sub(remap.len()));
    for v in source.verts() {
        if remap.contains_source(v.index()) {
            report.vertices_reused += 1;
            continue;
        }
        let p = source.vert_position(v);
        let placed = Point3::from_homogeneous(to_target * p.to_homogeneous())
            .ok_or(TopologyError::PointAtInfinity(v.index()))?;
        placements.push((v, placed));
    }

    for (v, placed) in placements {
        let created = target.new_vertex(placed);
        remap.insert(v.index(), created.index())?;
        report.vertices_created += 1;
    }

    for f in source.faces() {
        let verts = source
            .face_verts(f)
            .iter()
            .map(|v| remap.get(v.index()).map(VertId).ok_or(TopologyError::UnmappedVertex(v.index())))
            .collect::<TopologyResult<Vec<VertId>>>()?;
        if target.find_face(&verts).is_some() {
            report.faces_skipped += 1;
            continue;
        }
        target.new_face(&verts)?;
        report.faces_created += 1;
    }

    if target.vertex_count() != target_len + source.vertex_count() - report.vertices_reused {
        warn!(
            "join_into: target grew from {} to {} vertices, expected {}",
            target_len,
            target.vertex_count(),
            target_len + source.vertex_count() - report.vertices_reused
        );
    }
    debug!("join_into: {:?}", report);
    Ok(report)
}

/// [`join_into`] with a fresh remap table, returned alongside the report.
pub fn join_fresh<S, T>(
    source: &S,
    target: &mut T,
    source_transform: &Matrix4<Real>,
    target_transform: &Matrix4<Real>,
) -> TopologyResult<(JoinReport, VertexRemap)>
where
    S: MeshGraph + ?Sized,
    T: MeshGraphMut + ?Sized,
{
    let mut remap = VertexRemap::new();
    let report = join_into(source, target, &mut remap, source_transform, target_transform)?;
    Ok((report, remap))
}

/// Merge several meshes into a new one, expressed in the frame of the first transform.
///
/// Nothing is welded; each part keeps its own vertices.
pub fn join_all<M: MeshGraph>(parts: &[(&M, Matrix4<Real>)]) -> TopologyResult<BMesh> {
    let mut joined = BMesh::new();
    let Some((_, frame)) = parts.first() else {
        return Ok(joined);
    };
    for (mesh, transform) in parts {
        join_fresh(*mesh, &mut joined, transform, frame)?;
    }
    Ok(joined)
}

/// Copy a subset of `mesh` into a new mesh.
///
/// The new mesh gets the vertices of every listed element, in ascending source order, every
/// listed edge (as a wire edge when no copied face uses it) and every listed face. The
/// returned table maps source vertex indices to the new ones.
pub fn mesh_from_elements(mesh: &BMesh, elements: &[Element]) -> TopologyResult<(BMesh, VertexRemap)> {
    let mut verts: Vec<VertId> = Vec::new();
    for &element in elements {
        match element {
            Element::Vert(v) => verts.push(v),
            Element::Edge(e) => verts.extend(mesh.edge_verts(e)),
            Element::Face(f) => verts.extend_from_slice(mesh.face_verts(f)),
        }
    }
    verts.sort_unstable();
    verts.dedup();

    let mut copy = BMesh::new();
    let mut remap = VertexRemap::new();
    for v in verts {
        let created = copy.add_vertex(mesh.vert_position(v));
        remap.insert(v.index(), created.index())?;
    }
    let mapped = |v: VertId| remap.get(v.index()).map(VertId).ok_or(TopologyError::UnmappedVertex(v.index()));

    for &element in elements {
        if let Element::Edge(e) = element {
            let [a, b] = mesh.edge_verts(e);
            copy.add_edge(mapped(a)?, mapped(b)?)?;
        }
    }
    for &element in elements {
        if let Element::Face(f) = element {
            let face_verts = mesh.face_verts(f).iter().map(|&v| mapped(v)).collect::<TopologyResult<Vec<_>>>()?;
            if copy.find_face(&face_verts).is_none() {
                copy.add_face(&face_verts)?;
            }
        }
    }

    debug!(
        "mesh_from_elements: copied {} vertices, {} edges, {} faces",
        copy.vertex_count(),
        copy.edge_count(),
        copy.face_count()
    );
    Ok((copy, remap))
}
