//! Small procedural meshes, handy as fixtures and for quick experiments.

use super::BMesh;
use super::element::VertId;
use crate::float_types::Real;
use nalgebra::Point3;

impl BMesh {
    /// A flat `cols` × `rows` grid of quads in the XY plane, normals along +Z.
    ///
    /// Vertex `(i, j)` has index `j * (cols + 1) + i` and sits at `(i * size, j * size, 0)`.
    /// Face `(i, j)` has index `j * cols + i`. Its vertices run counter-clockwise from the
    /// lower-left corner, so its edge cycle is bottom, right, top, left.
    pub fn grid(cols: usize, rows: usize, size: Real) -> BMesh {
        let mut mesh = BMesh::new();
        for j in 0..=rows {
            for i in 0..=cols {
                mesh.add_vertex(Point3::new(i as Real * size, j as Real * size, 0.0));
            }
        }

        let v = |i: usize, j: usize| VertId(j * (cols + 1) + i);
        for j in 0..rows {
            for i in 0..cols {
                let quad = [v(i, j), v(i + 1, j), v(i + 1, j + 1), v(i, j + 1)];
                // Grid quads are distinct and non-degenerate by construction
                if let Err(e) = mesh.add_face(&quad) {
                    unreachable!("grid quad rejected: {e}");
                }
            }
        }
        mesh
    }

    /// An axis-aligned cube centred on the origin with outward-facing quads.
    ///
    /// Faces are, in order: bottom (-Z), top (+Z), front (-Y), back (+Y), left (-X), right (+X).
    pub fn cube(size: Real) -> BMesh {
        let h = size * 0.5;
        let corners = [
            Point3::new(-h, -h, -h),
            Point3::new(h, -h, -h),
            Point3::new(h, h, -h),
            Point3::new(-h, h, -h),
            Point3::new(-h, -h, h),
            Point3::new(h, -h, h),
            Point3::new(h, h, h),
            Point3::new(-h, h, h),
        ];
        let quads: [[usize; 4]; 6] = [
            [0, 3, 2, 1],
            [4, 5, 6, 7],
            [0, 1, 5, 4],
            [2, 3, 7, 6],
            [0, 4, 7, 3],
            [1, 2, 6, 5],
        ];

        let mut mesh = BMesh::new();
        for c in corners {
            mesh.add_vertex(c);
        }
        for quad in quads {
            let verts = quad.map(VertId);
            if let Err(e) = mesh.add_face(&verts) {
                unreachable!("cube quad rejected: {e}");
            }
        }
        mesh
    }
}
