//! Test support library
//! Provides mesh fixtures and comparison helpers shared by the integration tests.
#![allow(dead_code)]

use hashbrown::HashSet;
use meshtopo::{BMesh, EdgeId, VertId, float_types::Real};
use nalgebra::Point3;
use std::collections::VecDeque;
use std::hash::Hash;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Three triangles that share no vertex, spaced along X.
pub fn three_triangles() -> BMesh {
    let mut positions = Vec::new();
    let mut polygons = Vec::new();
    for t in 0..3 {
        let x = t as Real * 10.0;
        positions.push(Point3::new(x, 0.0, 0.0));
        positions.push(Point3::new(x + 1.0, 0.0, 0.0));
        positions.push(Point3::new(x, 1.0, 0.0));
        polygons.push(vec![3 * t, 3 * t + 1, 3 * t + 2]);
    }
    BMesh::from_polygons(&positions, &polygons).expect("valid triangles")
}

/// The four corners of a unit square joined by wire edges 0-1, 1-2, 2-3, 3-0.
pub fn square_wire() -> (BMesh, Vec<EdgeId>) {
    let mut mesh = BMesh::new();
    let corners = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    let verts: Vec<VertId> = corners.into_iter().map(|c| mesh.add_vertex(c)).collect();
    let edges = (0..4)
        .map(|i| mesh.add_edge(verts[i], verts[(i + 1) % 4]).expect("distinct corners"))
        .collect();
    (mesh, edges)
}

/// Everything reachable from `seeds` under `neighbors_of`, by textbook BFS.
pub fn reference_bfs<T, N, I>(seeds: &[T], mut neighbors_of: N) -> HashSet<T>
where
    T: Copy + Eq + Hash,
    N: FnMut(T) -> I,
    I: IntoIterator<Item = T>,
{
    let mut seen: HashSet<T> = seeds.iter().copied().collect();
    let mut queue: VecDeque<T> = seeds.iter().copied().collect();
    while let Some(item) = queue.pop_front() {
        for n in neighbors_of(item) {
            if seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    seen
}

/// Whether the closed vertex cycle `actual` (first == last) equals `expected` up to
/// rotation and reflection.
pub fn same_cycle(actual: &[VertId], expected: &[usize]) -> bool {
    if actual.len() != expected.len() || actual.first() != actual.last() || expected.first() != expected.last() {
        return false;
    }
    let a: Vec<usize> = actual[..actual.len() - 1].iter().map(|v| v.index()).collect();
    let e = &expected[..expected.len() - 1];
    let n = a.len();
    (0..n).any(|shift| {
        let forward = (0..n).all(|i| a[(i + shift) % n] == e[i]);
        let backward = (0..n).all(|i| a[(shift + n - i) % n] == e[i]);
        forward || backward
    })
}

/// The edge joining vertex indices `a` and `b`; panics if there is none.
pub fn edge(mesh: &BMesh, a: usize, b: usize) -> EdgeId {
    mesh.edge_between(VertId(a), VertId(b))
        .unwrap_or_else(|| panic!("no edge between {} and {}", a, b))
}
