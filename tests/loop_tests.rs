mod support;

use hashbrown::HashSet;
use meshtopo::float_types::Real;
use meshtopo::loops::{
    EdgeLoop, Expansion, LoopNeighborOptions, edge_loop_neighbors, edge_loops_from_edges,
    face_region_boundary_loops, walk_non_manifold_edge,
};
use meshtopo::{BMesh, EdgeId, Element, FaceId, MeshGraph, VertId};
use nalgebra::Point3;
use support::*;

fn vert_set(verts: &[VertId]) -> HashSet<usize> {
    verts.iter().map(|v| v.index()).collect()
}

/// A `cols` x `rows` grid with every quad split along its lower-left to upper-right diagonal.
/// Vertex `(i, j)` has index `j * (cols + 1) + i`, as in `BMesh::grid`.
fn triangle_grid(cols: usize, rows: usize) -> BMesh {
    let mut positions = Vec::new();
    for j in 0..=rows {
        for i in 0..=cols {
            positions.push(Point3::new(i as Real, j as Real, 0.0));
        }
    }
    let v = |i: usize, j: usize| j * (cols + 1) + i;
    let mut polygons = Vec::new();
    for j in 0..rows {
        for i in 0..cols {
            polygons.push(vec![v(i, j), v(i + 1, j), v(i + 1, j + 1)]);
            polygons.push(vec![v(i, j), v(i + 1, j + 1), v(i, j + 1)]);
        }
    }
    BMesh::from_polygons(&positions, &polygons).expect("valid triangles")
}

fn loop_lengths(loops: &[EdgeLoop]) -> Vec<usize> {
    let mut lengths: Vec<usize> = loops.iter().map(|l| l.len()).collect();
    lengths.sort_unstable();
    lengths
}

#[test]
fn square_edges_chain_into_one_closed_loop() {
    let (square, edges) = square_wire();
    let loops = edge_loops_from_edges(&square, &edges);

    assert_eq!(loops.len(), 1);
    let found = &loops[0];
    println!("square loop: {:?}", found.verts);
    assert!(found.is_closed());
    assert_eq!(found.len(), 4);
    assert!(same_cycle(&found.verts, &[0, 1, 2, 3, 0]));
    assert_eq!(found.edges.iter().copied().collect::<HashSet<EdgeId>>(), edges.iter().copied().collect());
}

#[test]
fn open_path_does_not_close() {
    let (square, edges) = square_wire();
    let loops = edge_loops_from_edges(&square, &edges[..3]);

    assert_eq!(loops.len(), 1);
    let path = &loops[0];
    assert!(!path.is_closed());
    assert_ne!(path.verts.first(), path.verts.last());
    assert_eq!(path.len(), 3);
    assert_eq!(path.verts.len(), 4);

    // Consecutive vertices are joined by the listed edge
    for (i, &e) in path.edges.iter().enumerate() {
        let ends: HashSet<VertId> = square.edge_verts(e).into_iter().collect();
        assert!(ends.contains(&path.verts[i]) && ends.contains(&path.verts[i + 1]));
    }
}

#[test]
fn duplicate_edges_are_ignored() {
    let (square, edges) = square_wire();
    let doubled: Vec<EdgeId> = edges.iter().chain(edges.iter()).copied().collect();
    let loops = edge_loops_from_edges(&square, &doubled);
    assert_eq!(loops.len(), 1);
    assert_eq!(loops[0].len(), 4);
    assert!(loops[0].is_closed());
}

#[test]
fn region_boundaries() {
    let grid = BMesh::grid(3, 3, 1.0);

    let all: HashSet<FaceId> = grid.faces().collect();
    let outer = face_region_boundary_loops(&grid, &all);
    assert_eq!(outer.len(), 1);
    assert_eq!(outer[0].len(), 12);
    assert!(outer[0].is_closed());

    let corners: HashSet<FaceId> = [FaceId(0), FaceId(8)].into_iter().collect();
    let loops = face_region_boundary_loops(&grid, &corners);
    assert_eq!(loops.len(), 2);
    assert!(loops.iter().all(|l| l.is_closed() && l.len() == 4));
}

#[test]
fn non_manifold_walk_follows_the_border() {
    // Strip boundary: 0-1-2-3-7-6-5-4-0
    let strip = BMesh::grid(3, 1, 1.0);
    let start = edge(&strip, 1, 2);

    let [from_first, from_second] = walk_non_manifold_edge(&strip, start, &HashSet::new(), 100);
    assert_eq!(from_first.len(), 7);
    assert_eq!(from_second.len(), 7);
    assert!(!from_first.contains(&start));

    let stop: HashSet<Element> = [Element::Vert(VertId(0))].into_iter().collect();
    let [from_first, from_second] = walk_non_manifold_edge(&strip, start, &stop, 100);
    assert_eq!(from_first, vec![edge(&strip, 0, 1)]);
    assert_eq!(from_second.len(), 6);
    assert_eq!(from_second.last(), Some(&edge(&strip, 4, 0)));

    let [capped, _] = walk_non_manifold_edge(&strip, start, &HashSet::new(), 2);
    assert_eq!(capped.len(), 2);
}

#[test]
fn parallel_loops_on_both_sides() {
    // 3 x 4 grid; vertex (i, j) is j * 4 + i. The input loop runs along row j = 2.
    let grid = BMesh::grid(3, 4, 1.0);
    let row = [edge(&grid, 8, 9), edge(&grid, 9, 10), edge(&grid, 10, 11)];

    let found = edge_loop_neighbors(&grid, &row, LoopNeighborOptions::default());
    assert_eq!(found.loops.len(), 2);
    let rows: Vec<HashSet<usize>> = found.loops.iter().map(|l| vert_set(&l.verts)).collect();
    assert!(rows.contains(&[4, 5, 6, 7].into_iter().collect()));
    assert!(rows.contains(&[12, 13, 14, 15].into_iter().collect()));
    assert!(found.loops.iter().all(|l| l.len() == 3));

    assert_eq!(found.face_strips.len(), 2);
    let strips: Vec<HashSet<FaceId>> = found.face_strips.iter().map(|s| s.iter().copied().collect()).collect();
    assert!(strips.contains(&[FaceId(3), FaceId(4), FaceId(5)].into_iter().collect()));
    assert!(strips.contains(&[FaceId(6), FaceId(7), FaceId(8)].into_iter().collect()));

    let strict = LoopNeighborOptions { strict: true, ..LoopNeighborOptions::default() };
    let found = edge_loop_neighbors(&grid, &row, strict);
    assert_eq!(found.loops.len(), 2);
}

#[test]
fn vertex_expansion_wraps_the_loop() {
    // Interior edge 14-15 of a 5 x 4 grid; the faces around its ends form a 3 x 2 block
    let grid = BMesh::grid(5, 4, 1.0);
    let row = [edge(&grid, 14, 15)];
    let options = LoopNeighborOptions { expansion: Expansion::Verts, ..LoopNeighborOptions::default() };

    let found = edge_loop_neighbors(&grid, &row, options);
    assert_eq!(found.loops.len(), 1);
    assert!(found.loops[0].is_closed());
    assert_eq!(found.loops[0].len(), 10);
    assert!(!vert_set(&found.loops[0].verts).contains(&14));
}

#[test]
fn triangle_rows_need_quad_only_off() {
    // 3 x 4 triangulated grid; the input loop runs along row j = 2
    let mesh = triangle_grid(3, 4);
    let row = [edge(&mesh, 8, 9), edge(&mesh, 9, 10), edge(&mesh, 10, 11)];

    let quads_only = edge_loop_neighbors(&mesh, &row, LoopNeighborOptions::default());
    assert!(quads_only.loops.is_empty());

    let options = LoopNeighborOptions { quad_only: false, ..LoopNeighborOptions::default() };
    let found = edge_loop_neighbors(&mesh, &row, options);
    assert_eq!(found.loops.len(), 2);
    let rows: Vec<HashSet<usize>> = found.loops.iter().map(|l| vert_set(&l.verts)).collect();
    assert!(rows.contains(&[4, 5, 6, 7].into_iter().collect()));
    assert!(rows.contains(&[12, 13, 14, 15].into_iter().collect()));
    assert!(found.loops.iter().all(|l| l.len() == 3 && !l.is_closed()));
    // Triangles carry no face loops
    assert!(found.face_strips.iter().all(|s| s.is_empty()));
}

#[test]
fn trim_tails_drops_the_edge_between_ring_and_tail() {
    // 7 x 7 grid, vertex (i, j) is j * 8 + i. A ring around face (3, 4) with a tail that
    // hooks left, down and back right to run two rows below the ring.
    let grid = BMesh::grid(7, 7, 1.0);
    let p_loop = [
        (35, 36),
        (36, 44),
        (44, 43),
        (43, 35),
        (35, 34),
        (34, 26),
        (26, 18),
        (18, 19),
        (19, 20),
    ]
    .map(|(a, b)| edge(&grid, a, b));
    let chained = edge_loops_from_edges(&grid, &p_loop);
    assert_eq!(chained.len(), 1);

    let trimmed = edge_loop_neighbors(&grid, &p_loop, LoopNeighborOptions::default());
    println!("trimmed: {:?}", trimmed.loops);
    assert_eq!(loop_lengths(&trimmed.loops), vec![1, 1, 2, 2]);

    let untrimmed_options = LoopNeighborOptions { trim_tails: false, ..LoopNeighborOptions::default() };
    let untrimmed = edge_loop_neighbors(&grid, &p_loop, untrimmed_options);
    assert_eq!(loop_lengths(&untrimmed.loops), vec![1, 1, 1, 2, 2]);

    // Faces on both sides of edge 27-28 touch the loop: one the ring, the other the tail
    let tail_edge = edge(&grid, 27, 28);
    assert!(untrimmed.loops.iter().any(|l| l.edges == vec![tail_edge]));
    assert!(!trimmed.loops.iter().any(|l| l.edges.contains(&tail_edge)));

    for kept in [(37, 45), (51, 52), (17, 25), (25, 33), (10, 11), (11, 12)] {
        let e = edge(&grid, kept.0, kept.1);
        assert!(trimmed.loops.iter().any(|l| l.edges.contains(&e)));
    }
}
