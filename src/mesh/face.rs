//! Face storage for [`BMesh`](super::BMesh).

use super::element::{EdgeId, VertId};
use super::vertex::BVert;
use crate::float_types::{Real, tolerance};
use nalgebra::Vector3;

/// A polygon face: an ordered vertex cycle and the matching edge cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct BFace {
    pub(crate) verts: Vec<VertId>,
    pub(crate) edges: Vec<EdgeId>,
    pub(crate) normal: Vector3<Real>,
    pub select: bool,
}

impl BFace {
    pub(crate) const fn new(verts: Vec<VertId>, edges: Vec<EdgeId>, normal: Vector3<Real>) -> Self {
        BFace {
            verts,
            edges,
            normal,
            select: false,
        }
    }

    pub fn verts(&self) -> &[VertId] {
        &self.verts
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    /// Number of sides.
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    pub fn is_quad(&self) -> bool {
        self.verts.len() == 4
    }

    /// Position of `edge` in this face's edge cycle.
    pub fn edge_slot(&self, edge: EdgeId) -> Option<usize> {
        self.edges.iter().position(|&e| e == edge)
    }
}

/// Unit normal of a polygon by Newell's method.
///
/// Follows the right-hand rule over the vertex order. Collinear or zero-area polygons get a
/// zero vector instead of NaNs.
pub fn newell_normal(verts: &[VertId], storage: &[BVert]) -> Vector3<Real> {
    let mut n = Vector3::<Real>::zeros();
    for (i, v) in verts.iter().enumerate() {
        let cur = storage[v.index()].pos;
        let next = storage[verts[(i + 1) % verts.len()].index()].pos;
        n.x += (cur.y - next.y) * (cur.z + next.z);
        n.y += (cur.z - next.z) * (cur.x + next.x);
        n.z += (cur.x - next.x) * (cur.y + next.y);
    }

    let len = n.norm();
    if len < tolerance() {
        Vector3::zeros()
    } else {
        n / len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn newell_normal_follows_winding() {
        let storage = vec![
            BVert::new(Point3::new(0.0, 0.0, 0.0)),
            BVert::new(Point3::new(1.0, 0.0, 0.0)),
            BVert::new(Point3::new(1.0, 1.0, 0.0)),
            BVert::new(Point3::new(0.0, 1.0, 0.0)),
        ];
        let ccw = [VertId(0), VertId(1), VertId(2), VertId(3)];
        let cw = [VertId(3), VertId(2), VertId(1), VertId(0)];

        assert!((newell_normal(&ccw, &storage) - Vector3::z()).norm() < 1e-9);
        assert!((newell_normal(&cw, &storage) + Vector3::z()).norm() < 1e-9);
    }

    #[test]
    fn collinear_polygon_has_zero_normal() {
        let storage = vec![
            BVert::new(Point3::new(0.0, 0.0, 0.0)),
            BVert::new(Point3::new(1.0, 0.0, 0.0)),
            BVert::new(Point3::new(2.0, 0.0, 0.0)),
        ];
        let n = newell_normal(&[VertId(0), VertId(1), VertId(2)], &storage);
        assert_eq!(n, Vector3::zeros());
    }
}
