//! Simple positional measures over vertex sets.

use crate::float_types::Real;
use crate::mesh::element::VertId;
use crate::traits::MeshGraph;
use nalgebra::{Point3, Vector3};

/// Axis-aligned bounds of a vertex set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point3<Real>,
    pub max: Point3<Real>,
}

impl Bounds {
    pub fn center(&self) -> Point3<Real> {
        nalgebra::center(&self.min, &self.max)
    }

    pub fn extents(&self) -> Vector3<Real> {
        self.max - self.min
    }
}

/// Mean position of `verts`, or `None` when empty.
pub fn center_of_mass<M: MeshGraph>(mesh: &M, verts: &[VertId]) -> Option<Point3<Real>> {
    if verts.is_empty() {
        return None;
    }
    let sum = verts.iter().fold(Vector3::zeros(), |acc, &v| acc + mesh.vert_position(v).coords);
    Some(Point3::from(sum / verts.len() as Real))
}

/// Bounds of `verts`, or `None` when empty.
pub fn vertex_bounds<M: MeshGraph>(mesh: &M, verts: &[VertId]) -> Option<Bounds> {
    let (first, rest) = verts.split_first()?;
    let start = mesh.vert_position(*first);
    let (min, max) = rest.iter().fold((start, start), |(min, max), &v| {
        let p = mesh.vert_position(v);
        (min.inf(&p), max.sup(&p))
    });
    Some(Bounds { min, max })
}
