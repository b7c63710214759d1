//! `BMesh` struct and its implementation of the [`MeshGraph`] traits

use crate::errors::{TopologyError, TopologyResult};
use crate::float_types::Real;
use crate::traits::{MeshGraph, MeshGraphMut};
use hashbrown::{HashMap, HashSet};
use nalgebra::{Point3, Vector3};

pub mod edge;
pub mod element;
pub mod face;
pub mod manifold;
pub mod shapes;
pub mod vertex;

use edge::BEdge;
use element::{EdgeId, Element, FaceId, VertId};
use face::{BFace, newell_normal};
use vertex::BVert;

/// An editable polygon mesh with full vertex / edge / face adjacency.
///
/// Elements are append-only, so every [`VertId`], [`EdgeId`] and [`FaceId`] handed out
/// stays valid. Edges are created implicitly by [`BMesh::add_face`] and can also be added
/// on their own as wire edges.
#[derive(Debug, Clone, Default)]
pub struct BMesh {
    verts: Vec<BVert>,
    edges: Vec<BEdge>,
    faces: Vec<BFace>,

    /// Canonical `(min, max)` endpoint pair to edge
    edge_lookup: HashMap<(VertId, VertId), EdgeId>,
}

impl BMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mesh from a vertex array and a list of polygons indexing into it.
    ///
    /// Fails on the first polygon that is degenerate or refers to a missing vertex.
    pub fn from_polygons(positions: &[Point3<Real>], polygons: &[Vec<usize>]) -> TopologyResult<Self> {
        let mut mesh = BMesh::new();
        for &p in positions {
            mesh.add_vertex(p);
        }
        for polygon in polygons {
            let verts: Vec<VertId> = polygon.iter().map(|&i| VertId(i)).collect();
            mesh.add_face(&verts)?;
        }
        Ok(mesh)
    }

    pub fn add_vertex(&mut self, pos: Point3<Real>) -> VertId {
        self.verts.push(BVert::new(pos));
        VertId(self.verts.len() - 1)
    }

    /// Add an edge between two vertices, or return the one that already joins them.
    pub fn add_edge(&mut self, a: VertId, b: VertId) -> TopologyResult<EdgeId> {
        self.check_vert(a)?;
        self.check_vert(b)?;
        if a == b {
            return Err(TopologyError::DegenerateEdge(a));
        }
        if let Some(&e) = self.edge_lookup.get(&BEdge::key(a, b)) {
            return Ok(e);
        }

        let e = EdgeId(self.edges.len());
        self.edges.push(BEdge::new(a, b));
        self.edge_lookup.insert(BEdge::key(a, b), e);
        self.verts[a.index()].edges.push(e);
        self.verts[b.index()].edges.push(e);
        Ok(e)
    }

    /// Add a polygon over existing vertices, creating any missing edges.
    ///
    /// The vertex order defines the winding and therefore the normal.
    pub fn add_face(&mut self, verts: &[VertId]) -> TopologyResult<FaceId> {
        if verts.len() < 3 {
            return Err(TopologyError::TooFewVertices(verts.len()));
        }
        let mut seen = HashSet::with_capacity(verts.len());
        for &v in verts {
            self.check_vert(v)?;
            if !seen.insert(v) {
                return Err(TopologyError::RepeatedVertex(v));
            }
        }
        if let Some(existing) = self.find_face(verts) {
            return Err(TopologyError::DuplicateFace(existing));
        }

        let mut edges = Vec::with_capacity(verts.len());
        for i in 0..verts.len() {
            edges.push(self.add_edge(verts[i], verts[(i + 1) % verts.len()])?);
        }

        let f = FaceId(self.faces.len());
        let normal = newell_normal(verts, &self.verts);
        for &v in verts {
            self.verts[v.index()].faces.push(f);
        }
        for &e in &edges {
            self.edges[e.index()].faces.push(f);
        }
        self.faces.push(BFace::new(verts.to_vec(), edges, normal));
        Ok(f)
    }

    /// The edge joining `a` and `b`, if any.
    pub fn edge_between(&self, a: VertId, b: VertId) -> Option<EdgeId> {
        self.edge_lookup.get(&BEdge::key(a, b)).copied()
    }

    pub fn vert(&self, v: VertId) -> &BVert {
        &self.verts[v.index()]
    }

    pub fn edge(&self, e: EdgeId) -> &BEdge {
        &self.edges[e.index()]
    }

    pub fn face(&self, f: FaceId) -> &BFace {
        &self.faces[f.index()]
    }

    /// Move a vertex and refresh the normals of the faces around it.
    pub fn set_position(&mut self, v: VertId, pos: Point3<Real>) {
        self.verts[v.index()].pos = pos;
        for i in 0..self.verts[v.index()].faces.len() {
            let f = self.verts[v.index()].faces[i];
            let normal = newell_normal(&self.faces[f.index()].verts, &self.verts);
            self.faces[f.index()].normal = normal;
        }
    }

    pub fn select(&mut self, element: Element, select: bool) {
        match element {
            Element::Vert(v) => self.verts[v.index()].select = select,
            Element::Edge(e) => self.edges[e.index()].select = select,
            Element::Face(f) => self.faces[f.index()].select = select,
        }
    }

    pub fn is_selected(&self, element: Element) -> bool {
        match element {
            Element::Vert(v) => self.verts[v.index()].select,
            Element::Edge(e) => self.edges[e.index()].select,
            Element::Face(f) => self.faces[f.index()].select,
        }
    }

    /// Every selected element, vertices first, then edges, then faces.
    pub fn selected(&self) -> Vec<Element> {
        let verts = self.verts.iter().enumerate().filter(|(_, v)| v.select).map(|(i, _)| Element::Vert(VertId(i)));
        let edges = self.edges.iter().enumerate().filter(|(_, e)| e.select).map(|(i, _)| Element::Edge(EdgeId(i)));
        let faces = self.faces.iter().enumerate().filter(|(_, f)| f.select).map(|(i, _)| Element::Face(FaceId(i)));
        verts.chain(edges).chain(faces).collect()
    }

    pub fn deselect_all(&mut self) {
        self.verts.iter_mut().for_each(|v| v.select = false);
        self.edges.iter_mut().for_each(|e| e.select = false);
        self.faces.iter_mut().for_each(|f| f.select = false);
    }

    fn check_vert(&self, v: VertId) -> TopologyResult<()> {
        if v.index() < self.verts.len() {
            Ok(())
        } else {
            Err(TopologyError::VertexOutOfRange { index: v.index(), len: self.verts.len() })
        }
    }
}

impl MeshGraph for BMesh {
    fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn edge_verts(&self, edge: EdgeId) -> [VertId; 2] {
        self.edges[edge.index()].verts
    }

    fn edge_faces(&self, edge: EdgeId) -> &[FaceId] {
        &self.edges[edge.index()].faces
    }

    fn face_verts(&self, face: FaceId) -> &[VertId] {
        &self.faces[face.index()].verts
    }

    fn face_edges(&self, face: FaceId) -> &[EdgeId] {
        &self.faces[face.index()].edges
    }

    fn face_normal(&self, face: FaceId) -> Vector3<Real> {
        self.faces[face.index()].normal
    }

    fn vert_position(&self, vert: VertId) -> Point3<Real> {
        self.verts[vert.index()].pos
    }

    fn vert_edges(&self, vert: VertId) -> &[EdgeId] {
        &self.verts[vert.index()].edges
    }

    fn vert_faces(&self, vert: VertId) -> &[FaceId] {
        &self.verts[vert.index()].faces
    }

    fn is_vert_manifold(&self, vert: VertId) -> bool {
        manifold::vert_is_manifold(self, vert)
    }
}

impl MeshGraphMut for BMesh {
    fn new_vertex(&mut self, position: Point3<Real>) -> VertId {
        self.add_vertex(position)
    }

    fn new_face(&mut self, verts: &[VertId]) -> TopologyResult<FaceId> {
        self.add_face(verts)
    }
}
