mod support;

use hashbrown::HashSet;
use meshtopo::neighbors::{
    edges_around_vert, face_neighbors, face_neighbors_by_vert, face_neighbors_strict, vert_neighbors,
    vert_neighbors_manifold,
};
use meshtopo::{BMesh, FaceId, MeshGraph, TopologyError, VertId};
use nalgebra::{Point3, Vector3};
use support::*;

fn face_set(faces: Vec<FaceId>) -> HashSet<FaceId> {
    faces.into_iter().collect()
}

/// Two squares sharing edge 0-1 plus a third fin on the same edge.
fn fin() -> BMesh {
    let positions = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(1.0, 0.0, 1.0),
        Point3::new(0.0, -1.0, 0.0),
        Point3::new(1.0, -1.0, 0.0),
    ];
    let polygons = vec![vec![0, 1, 2, 3], vec![1, 0, 4, 5], vec![0, 1, 7, 6]];
    BMesh::from_polygons(&positions, &polygons).expect("valid fin")
}

#[test]
fn cube_topology() {
    let cube = BMesh::cube(2.0);
    assert_eq!(cube.vertex_count(), 8);
    assert_eq!(cube.edge_count(), 12);
    assert_eq!(cube.face_count(), 6);

    let analysis = cube.analyze_manifold();
    println!("cube analysis: {:?}", analysis);
    assert!(cube.is_closed_manifold());
    assert_eq!(analysis.euler_characteristic, 2);
    assert_eq!(analysis.connected_components, 1);
    assert_eq!(analysis.boundary_edges, 0);

    // Outward normals
    assert!((cube.face_normal(FaceId(0)) - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-9);
    assert!((cube.face_normal(FaceId(5)) - Vector3::new(1.0, 0.0, 0.0)).norm() < 1e-9);
}

#[test]
fn grid_has_open_border() {
    let grid = BMesh::grid(2, 2, 1.0);
    let analysis = grid.analyze_manifold();
    assert!(analysis.is_manifold);
    assert!(!grid.is_closed_manifold());
    assert_eq!(analysis.boundary_edges, 8);
    assert_eq!(analysis.euler_characteristic, 1);
}

#[test]
fn construction_errors() {
    let positions = [Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)];

    assert_eq!(
        BMesh::from_polygons(&positions, &[vec![0, 1]]).unwrap_err(),
        TopologyError::TooFewVertices(2)
    );
    assert_eq!(
        BMesh::from_polygons(&positions, &[vec![0, 1, 1]]).unwrap_err(),
        TopologyError::RepeatedVertex(VertId(1))
    );
    assert_eq!(
        BMesh::from_polygons(&positions, &[vec![0, 1, 5]]).unwrap_err(),
        TopologyError::VertexOutOfRange { index: 5, len: 3 }
    );
    assert_eq!(
        BMesh::from_polygons(&positions, &[vec![0, 1, 2], vec![2, 0, 1]]).unwrap_err(),
        TopologyError::DuplicateFace(FaceId(0))
    );

    let mut mesh = BMesh::from_polygons(&positions, &[vec![0, 1, 2]]).expect("valid triangle");
    assert_eq!(mesh.add_edge(VertId(0), VertId(0)), Err(TopologyError::DegenerateEdge(VertId(0))));
    // Adding an existing edge hands back the same one
    assert_eq!(mesh.add_edge(VertId(1), VertId(0)), Ok(edge(&mesh, 0, 1)));
    assert_eq!(mesh.edge_count(), 3);
    println!("{}", TopologyError::TooFewVertices(2));
}

#[test]
fn set_position_refreshes_normals() {
    let mut grid = BMesh::grid(1, 1, 1.0);
    assert!((grid.face_normal(FaceId(0)) - Vector3::z()).norm() < 1e-9);

    // Collapse the quad onto a line: no usable normal
    grid.set_position(VertId(2), Point3::new(2.0, 0.0, 0.0));
    grid.set_position(VertId(3), Point3::new(3.0, 0.0, 0.0));
    assert_eq!(grid.face_normal(FaceId(0)), Vector3::zeros());
}

#[test]
fn face_neighbor_queries() {
    let grid = BMesh::grid(3, 3, 1.0);
    let center = FaceId(4);

    let by_edge = face_set(face_neighbors(&grid, center, &HashSet::new()));
    assert_eq!(by_edge, [1, 3, 5, 7].into_iter().map(FaceId).collect());

    let by_vert = face_set(face_neighbors_by_vert(&grid, center, &HashSet::new()));
    assert_eq!(by_vert.len(), 8);

    // Excluding the bottom edge of the center face (5-6) drops face 1
    let bottom: HashSet<_> = [edge(&grid, 5, 6)].into_iter().collect();
    let by_edge = face_set(face_neighbors(&grid, center, &bottom));
    assert!(!by_edge.contains(&FaceId(1)));
    assert_eq!(by_edge.len(), 3);

    assert_eq!(face_set(face_neighbors_strict(&grid, center)), [1, 3, 5, 7].into_iter().map(FaceId).collect());
}

#[test]
fn strict_neighbors_skip_non_manifold_edges() {
    let mesh = fin();
    let fin_edge = edge(&mesh, 0, 1);
    assert_eq!(mesh.edge_faces(fin_edge).len(), 3);

    assert_eq!(face_set(face_neighbors(&mesh, FaceId(0), &HashSet::new())), [1, 2].into_iter().map(FaceId).collect());
    assert!(face_neighbors_strict(&mesh, FaceId(0)).is_empty());

    assert!(!mesh.is_vert_manifold(VertId(0)));
    assert!(mesh.is_vert_manifold(VertId(2)));
    assert!(!vert_neighbors_manifold(&mesh, VertId(2)).contains(&VertId(1)));

    let analysis = mesh.analyze_manifold();
    assert!(!analysis.is_manifold);
    assert_eq!(analysis.non_manifold_edges, 1);
}

#[test]
fn bowtie_vertex_is_not_manifold() {
    let positions = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(-1.0, 1.0, 0.0),
        Point3::new(-1.0, -1.0, 0.0),
        Point3::new(1.0, -1.0, 0.0),
    ];
    let bowtie = BMesh::from_polygons(&positions, &[vec![0, 1, 2], vec![0, 3, 4]]).expect("valid bowtie");

    assert!(!bowtie.is_vert_manifold(VertId(0)));
    assert!(bowtie.is_vert_manifold(VertId(1)));
    assert_eq!(bowtie.analyze_manifold().non_manifold_vertices, 1);
}

#[test]
fn vertex_neighbors_and_fan_order() {
    let grid = BMesh::grid(2, 2, 1.0);
    // Vertex 4 is the center of a 2 x 2 grid
    let around: HashSet<VertId> = vert_neighbors(&grid, VertId(4)).into_iter().collect();
    assert_eq!(around, [1, 3, 5, 7].into_iter().map(VertId).collect());

    let fan = edges_around_vert(&grid, VertId(4));
    assert_eq!(fan.len(), 4);
    // Consecutive edges in the fan share a face
    for i in 0..fan.len() {
        let a: HashSet<FaceId> = grid.edge_faces(fan[i]).iter().copied().collect();
        let b: HashSet<FaceId> = grid.edge_faces(fan[(i + 1) % fan.len()]).iter().copied().collect();
        assert!(!a.is_disjoint(&b));
    }

    let corner = edges_around_vert(&grid, VertId(0));
    assert_eq!(corner.len(), 2);
}

#[test]
fn boundary_fan_is_swept_from_its_open_end() {
    let grid = BMesh::grid(2, 2, 1.0);
    // Vertex 1 sits mid-way along the bottom border: edges to 0, 2 and 4
    for first in [0, 2, 4] {
        let mut mesh = BMesh::new();
        for v in grid.verts() {
            mesh.add_vertex(grid.vert_position(v));
        }
        // Put a different edge first in vertex 1's list each time
        mesh.add_edge(VertId(1), VertId(first)).expect("distinct vertices");
        for f in grid.faces() {
            mesh.add_face(grid.face_verts(f)).expect("valid face");
        }

        let fan = edges_around_vert(&mesh, VertId(1));
        println!("fan of vertex 1 starting from edge to {}: {:?}", first, fan);
        assert_eq!(fan.len(), 3);
        let ends: Vec<VertId> = fan.iter().map(|&e| mesh.other_vert(e, VertId(1))).collect();
        assert_eq!(ends, vec![VertId(2), VertId(4), VertId(0)]);
    }

    let mut loose = BMesh::new();
    let v = loose.add_vertex(Point3::origin());
    assert!(edges_around_vert(&loose, v).is_empty());
    assert!(!loose.is_vert_manifold(v));
}
